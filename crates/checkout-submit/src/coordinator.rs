//! Submission coordinator and its phase machine.
//!
//! The coordinator moves through `Idle -> Validating -> (Submitting ->
//! Succeeded | Failed) | Rejected` on every attempt, with each terminal
//! phase returning to `Idle`. Transitions are checked against a static
//! table so an out-of-order change is a hard error instead of silent state
//! corruption.

use crate::{GatewayResponse, OrderGateway, SubmitError, FALLBACK_MESSAGE};
use checkout_draft::OrderDraft;
use checkout_types::{City, OrderConfirmation, OrderRequest};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

/// Lifecycle phase of the submission coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmitPhase {
	Idle,
	Validating,
	Submitting,
	Succeeded,
	Failed,
	Rejected,
}

// Static transition table - each phase maps to allowed next phases.
static TRANSITIONS: Lazy<HashMap<SubmitPhase, HashSet<SubmitPhase>>> = Lazy::new(|| {
	let mut m = HashMap::new();
	m.insert(SubmitPhase::Idle, HashSet::from([SubmitPhase::Validating]));
	m.insert(
		SubmitPhase::Validating,
		HashSet::from([SubmitPhase::Submitting, SubmitPhase::Rejected]),
	);
	m.insert(
		SubmitPhase::Submitting,
		HashSet::from([SubmitPhase::Succeeded, SubmitPhase::Failed]),
	);
	m.insert(SubmitPhase::Succeeded, HashSet::from([SubmitPhase::Idle]));
	m.insert(SubmitPhase::Failed, HashSet::from([SubmitPhase::Idle]));
	m.insert(SubmitPhase::Rejected, HashSet::from([SubmitPhase::Idle]));
	m
});

/// Validates drafts, issues the create-order request, and interprets the
/// result.
///
/// Owns the fixed origin city for the session. Never mutates the draft:
/// callers reset it themselves on success, which keeps retention-on-failure
/// trivially correct.
pub struct SubmissionCoordinator {
	gateway: Box<dyn OrderGateway>,
	origin: City,
	phase: SubmitPhase,
}

impl SubmissionCoordinator {
	/// Creates a coordinator over the given gateway and fixed origin.
	pub fn new(gateway: Box<dyn OrderGateway>, origin: City) -> Self {
		Self {
			gateway,
			origin,
			phase: SubmitPhase::Idle,
		}
	}

	/// Current lifecycle phase. Always `Idle` between attempts.
	pub fn phase(&self) -> SubmitPhase {
		self.phase
	}

	/// The fixed origin city.
	pub fn origin(&self) -> &City {
		&self.origin
	}

	/// Validates and submits the draft.
	///
	/// On any `Err` the draft is exactly as it was; on `Ok` the caller
	/// should reset it. Validation failures never reach the gateway.
	pub async fn submit(&mut self, draft: &OrderDraft) -> Result<OrderConfirmation, SubmitError> {
		if self.phase != SubmitPhase::Idle {
			return Err(SubmitError::InFlight);
		}
		self.transition(SubmitPhase::Validating)?;

		let validated = match validate(draft) {
			Ok(v) => v,
			Err(e) => {
				tracing::debug!("Draft rejected before submission: {}", e);
				self.transition(SubmitPhase::Rejected)?;
				self.transition(SubmitPhase::Idle)?;
				return Err(e);
			}
		};

		let request = OrderRequest {
			buyer_name: draft.buyer_name().to_string(),
			product_id: validated.product_id,
			quantity: validated.quantity,
			origin: self.origin.id.clone(),
			destination: validated.destination_id.clone(),
			courier: draft.courier().to_string(),
		};

		self.transition(SubmitPhase::Submitting)?;
		tracing::info!(
			product_id = request.product_id,
			quantity = request.quantity,
			destination = %request.destination,
			"Submitting order"
		);

		match self.gateway.create_order(&request).await {
			Ok(GatewayResponse::Accepted(receipt)) => {
				self.transition(SubmitPhase::Succeeded)?;
				self.transition(SubmitPhase::Idle)?;
				tracing::info!(shipping_cost = %receipt.shipping_cost, "Order accepted");
				Ok(OrderConfirmation {
					buyer_name: request.buyer_name,
					product_name: validated.product_name,
					destination_name: validated.destination_name,
					destination_id: validated.destination_id,
					total_price: validated.total_price,
					shipping_cost: receipt.shipping_cost,
				})
			}
			Ok(GatewayResponse::Rejected { message }) => {
				self.transition(SubmitPhase::Failed)?;
				self.transition(SubmitPhase::Idle)?;
				let reason = message.unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
				tracing::warn!("Order rejected by backend: {}", reason);
				Err(SubmitError::Rejected(reason))
			}
			Err(e) => {
				self.transition(SubmitPhase::Failed)?;
				self.transition(SubmitPhase::Idle)?;
				tracing::warn!("Order submission failed: {}", e);
				Err(SubmitError::Transport {
					detail: e.to_string(),
				})
			}
		}
	}

	fn transition(&mut self, to: SubmitPhase) -> Result<(), SubmitError> {
		let allowed = TRANSITIONS
			.get(&self.phase)
			.is_some_and(|next| next.contains(&to));
		if !allowed {
			return Err(SubmitError::Phase {
				from: self.phase,
				to,
			});
		}
		self.phase = to;
		Ok(())
	}
}

/// Draft fields needed past validation, captured by value so the
/// confirmation can be built without re-reading the draft.
struct ValidatedDraft {
	product_id: u64,
	product_name: String,
	destination_id: String,
	destination_name: String,
	quantity: u32,
	total_price: Decimal,
}

fn validate(draft: &OrderDraft) -> Result<ValidatedDraft, SubmitError> {
	let missing = draft.missing_fields();
	if !missing.is_empty() {
		return Err(SubmitError::Validation(format!(
			"Silakan lengkapi semua informasi pesanan: {}",
			missing.join(", ")
		)));
	}

	let quantity: i64 = draft
		.quantity_text()
		.trim()
		.parse()
		.map_err(|_| SubmitError::Validation("Jumlah harus berupa angka".to_string()))?;
	if quantity <= 0 {
		return Err(SubmitError::Validation(
			"Jumlah harus lebih dari 0".to_string(),
		));
	}
	let quantity = u32::try_from(quantity)
		.map_err(|_| SubmitError::Validation("Jumlah terlalu besar".to_string()))?;

	// missing_fields() already guaranteed these are set.
	let product = draft
		.product()
		.ok_or_else(|| SubmitError::Validation("Produk belum dipilih".to_string()))?;
	let destination = draft
		.destination()
		.ok_or_else(|| SubmitError::Validation("Tujuan belum dipilih".to_string()))?;

	// The displayed total is always computed locally from the catalog's
	// unit price; the server is only trusted for the shipping cost.
	let total_price = product.price * Decimal::from(quantity);

	Ok(ValidatedDraft {
		product_id: product.id,
		product_name: product.name.clone(),
		destination_id: destination.id.clone(),
		destination_name: destination.name.clone(),
		quantity,
		total_price,
	})
}
