//! Shared types for the checkout workflow system.
//!
//! This crate defines the domain types exchanged between the workflow
//! components: catalog entries fetched from the backend and the shipping
//! provider, the submission-ready order projection, server receipts, and
//! the command/notification events carried by the workflow engine.

pub mod catalog;
pub mod events;
pub mod order;
pub mod secret_string;

pub use catalog::{CatalogSnapshot, City, Product};
pub use events::{WorkflowCommand, WorkflowNotification};
pub use order::{OrderConfirmation, OrderReceipt, OrderRequest};
pub use secret_string::SecretString;
