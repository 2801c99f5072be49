//! Main entry point for the checkout workflow service.
//!
//! This binary wires the HTTP catalog sources and order gateway to the
//! workflow engine and drives one session from stdin. Each input line is a
//! user action; outcomes are printed as they arrive. Screen rendering is
//! deliberately not part of the workflow, so this driver is as thin as a
//! surface layer can be.

use checkout_catalog::implementations::backend::HttpProductSource;
use checkout_catalog::implementations::rajaongkir::HttpCitySource;
use checkout_catalog::CatalogService;
use checkout_config::Config;
use checkout_core::WorkflowEngine;
use checkout_submit::implementations::http::HttpOrderGateway;
use checkout_submit::SubmissionCoordinator;
use checkout_types::WorkflowNotification;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;

mod commands;

/// Command-line arguments for the checkout service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path to configuration file
	#[arg(short, long, default_value = "config.toml")]
	config: PathBuf,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info")]
	log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	// Initialize tracing with env filter
	use tracing_subscriber::{fmt, EnvFilter};

	let default_directive = args.log_level.to_string();
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	fmt().with_env_filter(env_filter).with_target(true).init();

	let config = Config::from_file(&args.config).await?;
	tracing::info!(
		backend = %config.backend.url,
		origin = %config.origin.city_name,
		"Starting checkout session"
	);

	let timeout = Duration::from_secs(config.backend.timeout_seconds);
	let products = HttpProductSource::new(&config.backend.url, timeout)?;
	let cities = HttpCitySource::new(
		&config.provider.url,
		config.provider.api_key.clone(),
		timeout,
	)?;
	let catalog = Arc::new(CatalogService::new(Box::new(products), Box::new(cities)));

	let gateway = HttpOrderGateway::new(&config.backend.url, timeout)?;
	let coordinator = SubmissionCoordinator::new(Box::new(gateway), config.origin.city());

	let (note_tx, mut note_rx) = mpsc::unbounded_channel();
	let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
	let engine = WorkflowEngine::new(catalog, coordinator, note_tx);
	let engine_handle = tokio::spawn(engine.run(cmd_rx));

	let printer = tokio::spawn(async move {
		while let Some(notification) = note_rx.recv().await {
			print_notification(&notification);
		}
	});

	let stdin = tokio::io::BufReader::new(tokio::io::stdin());
	let mut lines = stdin.lines();
	while let Some(line) = lines.next_line().await? {
		let line = line.trim();
		if line.is_empty() {
			continue;
		}
		if line == "keluar" {
			break;
		}
		match commands::parse(line) {
			Some(command) => {
				if cmd_tx.send(command).is_err() {
					break;
				}
			}
			None => eprintln!("Perintah tidak dikenali: {}", line),
		}
	}

	// Closing the command channel ends the engine loop; anything still in
	// flight is discarded there.
	drop(cmd_tx);
	engine_handle.await??;
	printer.await?;
	Ok(())
}

fn print_notification(notification: &WorkflowNotification) {
	match notification {
		WorkflowNotification::CatalogReady {
			product_count,
			city_count,
		} => {
			println!("Katalog dimuat: {} produk, {} kota", product_count, city_count);
		}
		WorkflowNotification::SubmitSucceeded(confirmation) => {
			println!("Pesanan berhasil dibuat!");
			println!("Nama Pembeli: {}", confirmation.buyer_name);
			println!("Produk: {}", confirmation.product_name);
			println!(
				"Tujuan: {} (ID: {})",
				confirmation.destination_name, confirmation.destination_id
			);
			println!("Harga: Rp{}", confirmation.total_price);
			println!("Ongkos Kirim: Rp{}", confirmation.shipping_cost);
		}
		WorkflowNotification::SubmitFailed { reason } => {
			println!("Error: {}", reason);
		}
		WorkflowNotification::CommandRejected { reason } => {
			println!("{}", reason);
		}
	}
}
