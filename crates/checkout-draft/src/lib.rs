//! Draft state for the in-progress order.
//!
//! All mutable order state lives in one `OrderDraft` and is only changed
//! through named transitions, each total and idempotent. No transition
//! validates anything; a buyer may leave the draft incomplete indefinitely
//! and only hears about problems when submitting. The destination picker is
//! a small sub-state over the draft that funnels every destination change
//! through a confirmed selection.

mod draft;
mod picker;

pub use draft::OrderDraft;
pub use picker::DestinationPicker;
