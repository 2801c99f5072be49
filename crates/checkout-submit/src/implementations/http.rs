//! HTTP order gateway against the shop backend.
//!
//! Posts `POST {base_url}/pesanan` with the JSON order body. A non-success
//! status with a parseable `message` field becomes a rejection carrying
//! that message; everything else that fails to produce a usable response is
//! a transport-level error.

use crate::{GatewayError, GatewayResponse, OrderGateway};
use async_trait::async_trait;
use checkout_types::{OrderReceipt, OrderRequest};
use std::time::Duration;

/// HTTP implementation of [`OrderGateway`].
pub struct HttpOrderGateway {
	client: reqwest::Client,
	base_url: String,
}

impl HttpOrderGateway {
	/// Creates a gateway for the given backend base URL.
	pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
		let client = reqwest::Client::builder()
			.timeout(timeout)
			.build()
			.map_err(|e| GatewayError::Network(e.to_string()))?;
		Ok(Self {
			client,
			base_url: base_url.into(),
		})
	}
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
	async fn create_order(&self, request: &OrderRequest) -> Result<GatewayResponse, GatewayError> {
		let url = format!("{}/pesanan", self.base_url.trim_end_matches('/'));
		tracing::debug!(url = %url, "Posting order");

		let response = self
			.client
			.post(&url)
			.json(request)
			.send()
			.await
			.map_err(|e| GatewayError::Network(e.to_string()))?;

		let status = response.status();
		if status.is_success() {
			let receipt = response
				.json::<OrderReceipt>()
				.await
				.map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
			return Ok(GatewayResponse::Accepted(receipt));
		}

		// Pull the backend's explanation out of the failure body when there
		// is one; the coordinator falls back to a generic message otherwise.
		let message = response
			.json::<serde_json::Value>()
			.await
			.ok()
			.and_then(|body| {
				body.get("message")
					.and_then(|m| m.as_str())
					.map(str::to_string)
			});
		tracing::debug!(status = status.as_u16(), "Order rejected by backend");
		Ok(GatewayResponse::Rejected { message })
	}
}
