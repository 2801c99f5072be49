//! Product list source backed by the shop backend.
//!
//! Fetches `GET {base_url}/produk`, a plain JSON array of product records.

use crate::{CatalogError, ProductSource};
use async_trait::async_trait;
use checkout_types::Product;
use std::time::Duration;

/// HTTP implementation of [`ProductSource`].
pub struct HttpProductSource {
	client: reqwest::Client,
	base_url: String,
}

impl HttpProductSource {
	/// Creates a source for the given backend base URL.
	pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
		let client = reqwest::Client::builder()
			.timeout(timeout)
			.build()
			.map_err(|e| CatalogError::Network(e.to_string()))?;
		Ok(Self {
			client,
			base_url: base_url.into(),
		})
	}
}

#[async_trait]
impl ProductSource for HttpProductSource {
	async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
		let url = format!("{}/produk", self.base_url.trim_end_matches('/'));
		tracing::debug!(url = %url, "Fetching product list");

		let response = self.client.get(&url).send().await?;
		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(CatalogError::Status {
				status: status.as_u16(),
				message: body,
			});
		}

		let products = response.json::<Vec<Product>>().await?;
		Ok(products)
	}
}
