//! City reference list source backed by a RajaOngkir-style provider.
//!
//! Fetches `GET {base_url}/city` with the provider-issued key in a `key`
//! header. The provider wraps its payload in a nested envelope:
//! `{"rajaongkir": {"results": [{"city_id": ..., "city_name": ...}]}}`.

use crate::{CatalogError, CitySource};
use async_trait::async_trait;
use checkout_types::{City, SecretString};
use serde::Deserialize;
use std::time::Duration;

/// Header the provider expects the API key in.
const API_KEY_HEADER: &str = "key";

/// HTTP implementation of [`CitySource`].
pub struct HttpCitySource {
	client: reqwest::Client,
	base_url: String,
	api_key: SecretString,
}

impl HttpCitySource {
	/// Creates a source for the given provider base URL and API key.
	pub fn new(
		base_url: impl Into<String>,
		api_key: SecretString,
		timeout: Duration,
	) -> Result<Self, CatalogError> {
		let client = reqwest::Client::builder()
			.timeout(timeout)
			.build()
			.map_err(|e| CatalogError::Network(e.to_string()))?;
		Ok(Self {
			client,
			base_url: base_url.into(),
			api_key,
		})
	}
}

#[async_trait]
impl CitySource for HttpCitySource {
	async fn fetch_cities(&self) -> Result<Vec<City>, CatalogError> {
		let url = format!("{}/city", self.base_url.trim_end_matches('/'));
		tracing::debug!(url = %url, "Fetching city list");

		let response = self
			.client
			.get(&url)
			.header(API_KEY_HEADER, self.api_key.expose_secret())
			.send()
			.await?;
		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(CatalogError::Status {
				status: status.as_u16(),
				message: body,
			});
		}

		let envelope = response.json::<CityListResponse>().await?;
		Ok(envelope.rajaongkir.results)
	}
}

/// Provider response envelope.
#[derive(Debug, Deserialize)]
struct CityListResponse {
	rajaongkir: CityListResult,
}

#[derive(Debug, Deserialize)]
struct CityListResult {
	#[serde(default)]
	results: Vec<City>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_provider_envelope() {
		let json = r#"{
			"rajaongkir": {
				"status": {"code": 200, "description": "OK"},
				"results": [
					{"city_id": "1", "province": "Jawa Barat", "city_name": "Bandung"},
					{"city_id": "5", "city_name": "Jakarta"}
				]
			}
		}"#;
		let envelope: CityListResponse = serde_json::from_str(json).unwrap();
		assert_eq!(
			envelope.rajaongkir.results,
			vec![City::new("1", "Bandung"), City::new("5", "Jakarta")]
		);
	}

	#[test]
	fn missing_results_defaults_to_empty() {
		let json = r#"{"rajaongkir": {"status": {"code": 400, "description": "invalid key"}}}"#;
		let envelope: CityListResponse = serde_json::from_str(json).unwrap();
		assert!(envelope.rajaongkir.results.is_empty());
	}
}
