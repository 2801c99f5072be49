//! Catalog types loaded once per workflow session.
//!
//! Products come from the backend, cities from the external shipping-rate
//! provider. Both lists are immutable after load; the rest of the workflow
//! only ever reads them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product available for ordering.
///
/// Wire format follows the backend's `/produk` endpoint. Fields the
/// workflow does not use (e.g. the shipping weight) are ignored on
/// deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
	/// Backend-assigned unique identifier.
	pub id: u64,
	/// Display name.
	#[serde(rename = "nama_produk")]
	pub name: String,
	/// Unit price, non-negative.
	#[serde(rename = "harga")]
	pub price: Decimal,
	/// Units in stock, non-negative.
	#[serde(rename = "stok")]
	pub stock: u32,
}

/// A destination city from the shipping-rate provider's reference list.
///
/// The provider assigns string identifiers, so they are kept opaque here
/// rather than parsed into numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
	#[serde(rename = "city_id")]
	pub id: String,
	#[serde(rename = "city_name")]
	pub name: String,
}

impl City {
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
		}
	}
}

/// Read-only snapshot of both catalog dimensions for one session.
///
/// Either list may be empty when its fetch failed at startup; the snapshot
/// is still produced so the workflow stays usable for the dimension that
/// did load.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
	pub products: Vec<Product>,
	pub cities: Vec<City>,
}

impl CatalogSnapshot {
	/// Looks up a product by backend identifier.
	pub fn product(&self, id: u64) -> Option<&Product> {
		self.products.iter().find(|p| p.id == id)
	}

	/// Looks up a city by provider identifier.
	pub fn city(&self, id: &str) -> Option<&City> {
		self.cities.iter().find(|c| c.id == id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn product_deserializes_backend_wire_format() {
		let json = r#"{"id": 3, "nama_produk": "Kopi Gayo", "harga": 50000, "berat": 250, "stok": 12}"#;
		let product: Product = serde_json::from_str(json).unwrap();
		assert_eq!(product.id, 3);
		assert_eq!(product.name, "Kopi Gayo");
		assert_eq!(product.price, Decimal::from(50000u32));
		assert_eq!(product.stock, 12);
	}

	#[test]
	fn city_deserializes_provider_wire_format() {
		let json = r#"{"city_id": "23", "city_name": "Bandung"}"#;
		let city: City = serde_json::from_str(json).unwrap();
		assert_eq!(city, City::new("23", "Bandung"));
	}

	#[test]
	fn snapshot_lookups() {
		let snapshot = CatalogSnapshot {
			products: vec![Product {
				id: 1,
				name: "Teh Hijau".into(),
				price: Decimal::from(20000u32),
				stock: 5,
			}],
			cities: vec![City::new("5", "Jakarta")],
		};
		assert_eq!(snapshot.product(1).unwrap().name, "Teh Hijau");
		assert!(snapshot.product(2).is_none());
		assert_eq!(snapshot.city("5").unwrap().name, "Jakarta");
		assert!(snapshot.city("9").is_none());
	}
}
