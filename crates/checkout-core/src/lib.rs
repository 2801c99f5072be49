//! Core workflow engine for the checkout system.
//!
//! This crate wires the catalog loader, the order draft, the destination
//! picker, and the submission coordinator into one cooperative event loop.
//! User actions arrive as commands over a channel and are processed one at
//! a time; the only concurrency in the workflow is the catalog load at
//! startup, whose two fetches run in parallel with each other and with
//! early draft edits.

mod engine;

pub use engine::{EngineError, WorkflowEngine};
