//! Order submission module for the checkout workflow.
//!
//! This module turns a completed draft into a backend order. It validates
//! the draft locally, composes the wire request, sends it through an
//! [`OrderGateway`], and interprets the outcome. Every failure is terminal
//! for that attempt; nothing is retried automatically and the draft is
//! never touched here, so a failed attempt loses no buyer input.

use async_trait::async_trait;
use checkout_types::{OrderReceipt, OrderRequest};
use thiserror::Error;

mod coordinator;

/// Re-export implementations
pub mod implementations {
	pub mod http;
}

pub use coordinator::{SubmissionCoordinator, SubmitPhase};

/// Generic user-facing failure message, used whenever the backend did not
/// supply an explanatory one.
pub const FALLBACK_MESSAGE: &str = "Gagal membuat pesanan";

/// Errors that can occur while talking to the order-creation endpoint.
///
/// These are transport-level failures only; a well-formed backend rejection
/// is a [`GatewayResponse::Rejected`], not an error.
#[derive(Debug, Error)]
pub enum GatewayError {
	/// Error that occurs during network communication.
	#[error("Network error: {0}")]
	Network(String),
	/// Error that occurs when a success response cannot be decoded.
	#[error("Invalid response: {0}")]
	InvalidResponse(String),
}

/// Outcome of an order-creation call that produced a usable response.
#[derive(Debug)]
pub enum GatewayResponse {
	/// The backend accepted the order.
	Accepted(OrderReceipt),
	/// The backend rejected the order, optionally with a human-readable
	/// message to surface verbatim.
	Rejected { message: Option<String> },
}

/// Trait defining the interface to the backend order-creation endpoint.
#[async_trait]
pub trait OrderGateway: Send + Sync {
	/// Submits a validated order request.
	async fn create_order(&self, request: &OrderRequest) -> Result<GatewayResponse, GatewayError>;
}

/// User-facing submission failures.
///
/// The Display form of each variant is exactly what should be shown to the
/// buyer; transport detail is kept in a field for logging only.
#[derive(Debug, Error)]
pub enum SubmitError {
	/// The draft is incomplete or the quantity text is not a strictly
	/// positive integer. Detected locally; no network call was made.
	#[error("{0}")]
	Validation(String),
	/// The backend rejected the order with the contained message.
	#[error("{0}")]
	Rejected(String),
	/// No usable response was obtained.
	#[error("{}", FALLBACK_MESSAGE)]
	Transport { detail: String },
	/// A submission is already in flight; rapid repeated taps are dropped
	/// rather than turned into duplicate orders.
	#[error("Pesanan sedang diproses")]
	InFlight,
	/// Internal coordinator bug: a phase change outside the lifecycle table.
	#[error("Invalid phase transition from {from:?} to {to:?}")]
	Phase { from: SubmitPhase, to: SubmitPhase },
}
