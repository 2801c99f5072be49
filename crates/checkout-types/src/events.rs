//! Event types for the workflow engine.
//!
//! User actions enter the engine as `WorkflowCommand`s and are processed
//! one at a time by the event loop. Outcomes the surface layer should show
//! to the buyer leave the engine as `WorkflowNotification`s.

use crate::order::OrderConfirmation;

/// A single user action against the workflow.
///
/// Commands carry identifiers rather than catalog entries; the engine
/// resolves them against its read-only catalog snapshot so stale or unknown
/// identifiers can be rejected in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowCommand {
	/// Select the active product by backend identifier.
	SelectProduct(u64),
	/// Replace the buyer name.
	SetBuyerName(String),
	/// Replace the raw quantity text. Parsed only at submission.
	SetQuantityText(String),
	/// Replace the courier code.
	SetCourier(String),
	/// Open the destination picker. No-op when already open.
	OpenDestinationPicker,
	/// Confirm a destination from the picker by provider identifier.
	SelectDestination(String),
	/// Close the picker without touching the draft.
	CancelDestinationPicker,
	/// Validate and submit the current draft.
	Submit,
}

/// Outcome events emitted by the engine for the surface layer.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowNotification {
	/// Both catalog fetches have settled; the lists may now be shown.
	CatalogReady {
		product_count: usize,
		city_count: usize,
	},
	/// The order was accepted by the backend and the draft was reset.
	SubmitSucceeded(OrderConfirmation),
	/// Submission failed; the draft is retained for correction.
	SubmitFailed { reason: String },
	/// A command could not be applied (unknown identifier, catalog still
	/// loading). The draft is untouched.
	CommandRejected { reason: String },
}
