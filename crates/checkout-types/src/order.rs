//! Order submission types.
//!
//! `OrderRequest` is the validated projection of a draft, built only at
//! submission time. `OrderReceipt` is the backend's echo for an accepted
//! order, consumed once to build an `OrderConfirmation` and then discarded.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The submission-ready projection of an order draft.
///
/// Wire format follows the backend's `POST /pesanan` body. Constructed only
/// after validation has passed; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
	#[serde(rename = "nama_pembeli")]
	pub buyer_name: String,
	#[serde(rename = "id_produk")]
	pub product_id: u64,
	/// Validated quantity, strictly positive.
	#[serde(rename = "jumlah")]
	pub quantity: u32,
	/// Provider identifier of the fixed origin city.
	pub origin: String,
	/// Provider identifier of the chosen destination city.
	pub destination: String,
	pub courier: String,
}

/// Backend echo for an accepted order.
///
/// Only the shipping cost is required; the remaining fields are whatever
/// the backend chooses to echo back and are kept for logging.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderReceipt {
	pub shipping_cost: Decimal,
	#[serde(default)]
	pub message: Option<String>,
	#[serde(default)]
	pub pesanan_id: Option<u64>,
	#[serde(default)]
	pub pengiriman_id: Option<u64>,
}

/// Summary shown to the buyer after a confirmed order.
///
/// The total price is computed locally from the catalog's unit price and
/// the validated quantity; only the shipping cost comes from the server.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
	pub buyer_name: String,
	pub product_name: String,
	pub destination_name: String,
	pub destination_id: String,
	pub total_price: Decimal,
	pub shipping_cost: Decimal,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_serializes_backend_wire_format() {
		let request = OrderRequest {
			buyer_name: "Budi".into(),
			product_id: 7,
			quantity: 2,
			origin: "1".into(),
			destination: "5".into(),
			courier: "jne".into(),
		};
		let json = serde_json::to_value(&request).unwrap();
		assert_eq!(json["nama_pembeli"], "Budi");
		assert_eq!(json["id_produk"], 7);
		assert_eq!(json["jumlah"], 2);
		assert_eq!(json["origin"], "1");
		assert_eq!(json["destination"], "5");
		assert_eq!(json["courier"], "jne");
	}

	#[test]
	fn receipt_requires_only_shipping_cost() {
		let receipt: OrderReceipt = serde_json::from_str(r#"{"shipping_cost": 15000}"#).unwrap();
		assert_eq!(receipt.shipping_cost, Decimal::from(15000u32));
		assert!(receipt.message.is_none());
		assert!(receipt.pesanan_id.is_none());
	}

	#[test]
	fn receipt_keeps_echo_fields() {
		let json = r#"{
			"message": "Pesanan berhasil ditambahkan",
			"pesanan_id": 41,
			"pengiriman_id": 12,
			"shipping_cost": 9000
		}"#;
		let receipt: OrderReceipt = serde_json::from_str(json).unwrap();
		assert_eq!(receipt.pesanan_id, Some(41));
		assert_eq!(receipt.pengiriman_id, Some(12));
		assert_eq!(
			receipt.message.as_deref(),
			Some("Pesanan berhasil ditambahkan")
		);
	}
}
