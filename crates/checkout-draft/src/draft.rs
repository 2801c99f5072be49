//! The order draft and its transitions.

use checkout_types::{City, Product};

/// The in-progress, not-yet-submitted order.
///
/// Owns clones out of the immutable catalog snapshot. Quantity is kept as
/// the raw entered text and parsed only at submission. The fixed origin
/// city is deliberately not part of the draft; it is session state owned by
/// the submission side and untouched by `reset`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
	product: Option<Product>,
	buyer_name: String,
	quantity_text: String,
	destination: Option<City>,
	courier: String,
}

impl OrderDraft {
	/// Creates an empty draft.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the active product, replacing any prior selection.
	pub fn select_product(&mut self, product: Product) {
		self.product = Some(product);
	}

	/// Replaces the buyer name.
	pub fn set_buyer_name(&mut self, name: impl Into<String>) {
		self.buyer_name = name.into();
	}

	/// Replaces the raw quantity text. Not parsed here.
	pub fn set_quantity_text(&mut self, text: impl Into<String>) {
		self.quantity_text = text.into();
	}

	/// Replaces the courier code.
	pub fn set_courier(&mut self, courier: impl Into<String>) {
		self.courier = courier.into();
	}

	/// Sets the destination city.
	///
	/// Only the destination picker calls this on a confirmed selection, so
	/// the destination is never partially set.
	pub fn set_destination(&mut self, city: City) {
		self.destination = Some(city);
	}

	/// Clears every mutable field back to empty.
	pub fn reset(&mut self) {
		*self = Self::default();
	}

	pub fn product(&self) -> Option<&Product> {
		self.product.as_ref()
	}

	pub fn buyer_name(&self) -> &str {
		&self.buyer_name
	}

	pub fn quantity_text(&self) -> &str {
		&self.quantity_text
	}

	pub fn destination(&self) -> Option<&City> {
		self.destination.as_ref()
	}

	pub fn courier(&self) -> &str {
		&self.courier
	}

	/// Whether every required field is filled in.
	///
	/// Completeness says nothing about the quantity text being a valid
	/// number; that is checked at submission.
	pub fn is_complete(&self) -> bool {
		self.missing_fields().is_empty()
	}

	/// Names of the required fields that are still empty, in form order.
	pub fn missing_fields(&self) -> Vec<&'static str> {
		let mut missing = Vec::new();
		if self.product.is_none() {
			missing.push("produk");
		}
		if self.buyer_name.trim().is_empty() {
			missing.push("nama pembeli");
		}
		if self.quantity_text.trim().is_empty() {
			missing.push("jumlah");
		}
		if self.destination.is_none() {
			missing.push("tujuan");
		}
		if self.courier.trim().is_empty() {
			missing.push("kurir");
		}
		missing
	}
}
