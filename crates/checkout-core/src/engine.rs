//! The workflow event loop.

use checkout_catalog::CatalogService;
use checkout_draft::{DestinationPicker, OrderDraft};
use checkout_submit::{SubmissionCoordinator, SubmitError};
use checkout_types::{CatalogSnapshot, WorkflowCommand, WorkflowNotification};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can end the engine loop.
///
/// User-level failures (validation, rejection, transport) are reported as
/// notifications and keep the loop alive; only internal lifecycle bugs
/// escape as errors.
#[derive(Debug, Error)]
pub enum EngineError {
	#[error("Coordinator error: {0}")]
	Coordinator(String),
}

/// Single-session workflow engine.
///
/// Owns all mutable workflow state. `run` consumes the engine and processes
/// commands strictly sequentially, so no synchronization is needed around
/// the draft or the picker. The catalog snapshot is read-only after load.
pub struct WorkflowEngine {
	catalog: Arc<CatalogService>,
	coordinator: SubmissionCoordinator,
	draft: OrderDraft,
	picker: DestinationPicker,
	snapshot: Option<CatalogSnapshot>,
	notifications: mpsc::UnboundedSender<WorkflowNotification>,
}

impl WorkflowEngine {
	/// Creates an engine over the given services.
	///
	/// Nothing is fetched here; the catalog load starts when `run` does.
	pub fn new(
		catalog: Arc<CatalogService>,
		coordinator: SubmissionCoordinator,
		notifications: mpsc::UnboundedSender<WorkflowNotification>,
	) -> Self {
		Self {
			catalog,
			coordinator,
			draft: OrderDraft::new(),
			picker: DestinationPicker::new(),
			snapshot: None,
			notifications,
		}
	}

	/// Main event loop.
	///
	/// Kicks off the catalog load, then processes commands until the sender
	/// is dropped. A catalog result that arrives after the loop has ended
	/// is discarded with the channel, never applied to a torn-down draft.
	pub async fn run(
		mut self,
		mut commands: mpsc::UnboundedReceiver<WorkflowCommand>,
	) -> Result<(), EngineError> {
		let (catalog_tx, mut catalog_rx) = mpsc::unbounded_channel();
		let catalog = self.catalog.clone();
		tokio::spawn(async move {
			let snapshot = catalog.load().await;
			// Send fails when the engine is already gone; that is the
			// intended discard path for late results.
			let _ = catalog_tx.send(snapshot);
		});

		let mut catalog_settled = false;
		loop {
			tokio::select! {
				maybe_snapshot = catalog_rx.recv(), if !catalog_settled => {
					catalog_settled = true;
					if let Some(snapshot) = maybe_snapshot {
						self.notify(WorkflowNotification::CatalogReady {
							product_count: snapshot.products.len(),
							city_count: snapshot.cities.len(),
						});
						self.snapshot = Some(snapshot);
					}
				}
				maybe_command = commands.recv() => {
					match maybe_command {
						Some(command) => self.handle_command(command).await?,
						None => break,
					}
				}
			}
		}

		tracing::debug!("Workflow engine stopped");
		Ok(())
	}

	async fn handle_command(&mut self, command: WorkflowCommand) -> Result<(), EngineError> {
		tracing::trace!(?command, "Handling command");
		match command {
			WorkflowCommand::SelectProduct(id) => {
				let Some(snapshot) = &self.snapshot else {
					self.reject("Katalog masih dimuat");
					return Ok(());
				};
				match snapshot.product(id) {
					Some(product) => self.draft.select_product(product.clone()),
					None => self.reject(&format!("Produk tidak ditemukan: {}", id)),
				}
			}
			WorkflowCommand::SetBuyerName(name) => self.draft.set_buyer_name(name),
			WorkflowCommand::SetQuantityText(text) => self.draft.set_quantity_text(text),
			WorkflowCommand::SetCourier(courier) => self.draft.set_courier(courier),
			WorkflowCommand::OpenDestinationPicker => {
				if self.snapshot.is_none() {
					self.reject("Katalog masih dimuat");
					return Ok(());
				}
				self.picker.open();
			}
			WorkflowCommand::SelectDestination(city_id) => {
				if !self.picker.is_open() {
					self.reject("Pilihan tujuan belum dibuka");
					return Ok(());
				}
				let city = self
					.snapshot
					.as_ref()
					.and_then(|snapshot| snapshot.city(&city_id))
					.cloned();
				match city {
					Some(city) => self.picker.select_city(&mut self.draft, city),
					None => self.reject(&format!("Kota tidak ditemukan: {}", city_id)),
				}
			}
			WorkflowCommand::CancelDestinationPicker => self.picker.cancel(),
			WorkflowCommand::Submit => self.handle_submit().await?,
		}
		Ok(())
	}

	async fn handle_submit(&mut self) -> Result<(), EngineError> {
		match self.coordinator.submit(&self.draft).await {
			Ok(confirmation) => {
				// Confirmed success is the only path that clears the draft.
				self.draft.reset();
				self.notify(WorkflowNotification::SubmitSucceeded(confirmation));
			}
			Err(error @ SubmitError::Phase { .. }) => {
				return Err(EngineError::Coordinator(format!("{:?}", error)));
			}
			Err(error) => {
				self.notify(WorkflowNotification::SubmitFailed {
					reason: error.to_string(),
				});
			}
		}
		Ok(())
	}

	fn reject(&self, reason: &str) {
		tracing::debug!("Command rejected: {}", reason);
		self.notify(WorkflowNotification::CommandRejected {
			reason: reason.to_string(),
		});
	}

	fn notify(&self, notification: WorkflowNotification) {
		// The surface layer may already be gone during shutdown.
		let _ = self.notifications.send(notification);
	}
}
