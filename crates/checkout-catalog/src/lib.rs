//! Catalog loading module for the checkout workflow.
//!
//! This module fetches the two reference lists an order depends on: the
//! product list from the backend and the city list from the external
//! shipping-rate provider. Both fetches run concurrently and settle into a
//! single immutable snapshot. A failed fetch is logged and yields an empty
//! list rather than an error, so the workflow stays usable for whichever
//! dimension did load.

use async_trait::async_trait;
use checkout_types::{CatalogSnapshot, City, Product};
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod backend;
	pub mod rajaongkir;
}

/// Errors that can occur while fetching a catalog dimension.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// Error that occurs during network communication.
	#[error("Network error: {0}")]
	Network(String),
	/// Error that occurs when the remote service answers with a non-success status.
	#[error("Unexpected status {status}: {message}")]
	Status { status: u16, message: String },
	/// Error that occurs when decoding a response body fails.
	#[error("Parse error: {0}")]
	Parse(String),
}

impl From<reqwest::Error> for CatalogError {
	fn from(err: reqwest::Error) -> Self {
		if err.is_decode() {
			CatalogError::Parse(err.to_string())
		} else {
			CatalogError::Network(err.to_string())
		}
	}
}

/// Trait defining the interface for product list sources.
#[async_trait]
pub trait ProductSource: Send + Sync {
	/// Fetches the full product list.
	async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Trait defining the interface for city reference list sources.
#[async_trait]
pub trait CitySource: Send + Sync {
	/// Fetches the full city reference list.
	async fn fetch_cities(&self) -> Result<Vec<City>, CatalogError>;
}

/// Service that loads the session catalog from its two independent sources.
pub struct CatalogService {
	products: Box<dyn ProductSource>,
	cities: Box<dyn CitySource>,
}

impl CatalogService {
	/// Creates a new CatalogService over the given sources.
	pub fn new(products: Box<dyn ProductSource>, cities: Box<dyn CitySource>) -> Self {
		Self { products, cities }
	}

	/// Loads both catalog dimensions concurrently.
	///
	/// Returns only after both fetches have settled, so callers never see a
	/// partially-populated snapshot. Fetch failures are logged and mapped to
	/// an empty list; no retry is attempted.
	pub async fn load(&self) -> CatalogSnapshot {
		let (products, cities) =
			tokio::join!(self.products.fetch_products(), self.cities.fetch_cities());

		let products = products.unwrap_or_else(|e| {
			tracing::warn!("Failed to load product list: {}", e);
			Vec::new()
		});
		let cities = cities.unwrap_or_else(|e| {
			tracing::warn!("Failed to load city list: {}", e);
			Vec::new()
		});

		tracing::info!(
			products = products.len(),
			cities = cities.len(),
			"Catalog loaded"
		);

		CatalogSnapshot { products, cities }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rust_decimal::Decimal;

	struct StubProducts(Result<Vec<Product>, ()>);

	#[async_trait]
	impl ProductSource for StubProducts {
		async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
			self.0
				.clone()
				.map_err(|_| CatalogError::Network("connection refused".into()))
		}
	}

	struct StubCities(Result<Vec<City>, ()>);

	#[async_trait]
	impl CitySource for StubCities {
		async fn fetch_cities(&self) -> Result<Vec<City>, CatalogError> {
			self.0
				.clone()
				.map_err(|_| CatalogError::Status {
					status: 401,
					message: "invalid key".into(),
				})
		}
	}

	fn product(id: u64) -> Product {
		Product {
			id,
			name: format!("Produk {}", id),
			price: Decimal::from(10000u32),
			stock: 3,
		}
	}

	#[tokio::test]
	async fn load_combines_both_dimensions() {
		let service = CatalogService::new(
			Box::new(StubProducts(Ok(vec![product(1), product(2)]))),
			Box::new(StubCities(Ok(vec![City::new("5", "Jakarta")]))),
		);
		let snapshot = service.load().await;
		assert_eq!(snapshot.products.len(), 2);
		assert_eq!(snapshot.cities.len(), 1);
	}

	#[tokio::test]
	async fn failed_product_fetch_yields_empty_list_not_error() {
		let service = CatalogService::new(
			Box::new(StubProducts(Err(()))),
			Box::new(StubCities(Ok(vec![City::new("5", "Jakarta")]))),
		);
		let snapshot = service.load().await;
		assert!(snapshot.products.is_empty());
		assert_eq!(snapshot.cities.len(), 1);
	}

	#[tokio::test]
	async fn both_fetches_may_fail_independently() {
		let service = CatalogService::new(
			Box::new(StubProducts(Err(()))),
			Box::new(StubCities(Err(()))),
		);
		let snapshot = service.load().await;
		assert!(snapshot.products.is_empty());
		assert!(snapshot.cities.is_empty());
	}
}
