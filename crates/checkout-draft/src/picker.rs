//! The destination picker sub-state.

use crate::OrderDraft;
use checkout_types::City;

/// Modal-scoped picker over the loaded city list.
///
/// Holds nothing but its open flag; a confirmed selection dispatches into
/// the draft and closes, cancelling just closes. Only one picker exists per
/// workflow, so opening while already open is a no-op.
#[derive(Debug, Default)]
pub struct DestinationPicker {
	open: bool,
}

impl DestinationPicker {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Opens the picker. No-op when already open.
	pub fn open(&mut self) {
		self.open = true;
	}

	/// Confirms a selection: sets the draft's destination and closes.
	pub fn select_city(&mut self, draft: &mut OrderDraft, city: City) {
		draft.set_destination(city);
		self.open = false;
	}

	/// Closes without touching the draft.
	pub fn cancel(&mut self) {
		self.open = false;
	}
}
