//! Main entry point for the Pancake Lab order service.
//!
//! This binary wires the catalog, audit sink, and order ledger together and
//! runs a short delivery-day demonstration: orders are composed and placed by
//! customer tasks while kitchen and delivery tasks drain the stage queues
//! concurrently.

use anyhow::{anyhow, Context};
use clap::Parser;
use lab_audit::implementations::log::TracingAuditLog;
use lab_audit::implementations::memory::MemoryAuditLog;
use lab_audit::AuditSink;
use lab_config::Config;
use lab_ledger::OrderLedger;
use lab_menu::Menu;
use lab_types::{Ingredient, OrderId, PancakeBuilder};
use std::path::PathBuf;
use std::sync::Arc;

/// Command-line arguments for the order service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path to configuration file; defaults apply when omitted
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info")]
	log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	// Initialize tracing with env filter
	use tracing_subscriber::{fmt, EnvFilter};

	let default_directive = args.log_level.to_string();
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	fmt().with_env_filter(env_filter).with_target(true).init();

	let config = match &args.config {
		Some(path) => Config::from_file(path)
			.await
			.with_context(|| format!("failed to load config from {}", path.display()))?,
		None => Config::default(),
	};
	tracing::info!(service = %config.service.name, "Started order service");

	let menu = Arc::new(Menu::with_defaults());
	menu.apply_overrides(&config.menu.prices)
		.context("invalid menu price overrides")?;

	let audit: Arc<dyn AuditSink> = match config.service.audit_sink.as_str() {
		"memory" => Arc::new(MemoryAuditLog::new()),
		"log" => Arc::new(TracingAuditLog::new()),
		other => return Err(anyhow!("unknown audit sink implementation: {other}")),
	};
	tracing::info!(implementation = %config.service.audit_sink, "Loaded audit sink");

	let ledger = Arc::new(OrderLedger::new(audit));
	run_delivery_day(&ledger, &menu).await?;

	Ok(())
}

/// Composes and places a handful of orders, then drains the kitchen and
/// delivery queues from concurrent tasks.
async fn run_delivery_day(ledger: &Arc<OrderLedger>, menu: &Arc<Menu>) -> anyhow::Result<()> {
	let classic = place_classic_order(ledger, menu, 5, 101).await?;
	let vegan = place_vegan_order(ledger, menu, 7, 14).await?;

	// one more order that never gets placed: canceled while composing
	let abandoned = ledger.create_order(2, 33)?;
	ledger
		.add_pancake_to_order(
			abandoned.id(),
			PancakeBuilder::standard(menu.as_ref())?.build()?,
		)
		.await?;
	ledger.cancel_order(abandoned.id()).await?;
	tracing::info!(order_id = %abandoned.id(), "Canceled order while composing");

	// kitchen: prepare everything that was placed
	let kitchen = {
		let ledger = Arc::clone(ledger);
		tokio::spawn(async move {
			let mut prepared = 0usize;
			while let Some(id) = ledger.prepare_order().await? {
				tracing::info!(order_id = %id, "Prepared order");
				prepared += 1;
			}
			Ok::<_, lab_ledger::LedgerError>(prepared)
		})
	};
	let prepared = kitchen.await??;

	// delivery: hand off everything the kitchen produced
	let delivery = {
		let ledger = Arc::clone(ledger);
		tokio::spawn(async move {
			let mut delivered = 0usize;
			while let Some(id) = ledger.deliver_order().await? {
				tracing::info!(order_id = %id, "Delivered order");
				delivered += 1;
			}
			Ok::<_, lab_ledger::LedgerError>(delivered)
		})
	};
	let delivered = delivery.await??;

	tracing::info!(prepared, delivered, "Delivery day finished");

	for id in [classic, vegan] {
		if let Some(view) = ledger.order(id).await {
			tracing::info!(
				order_id = %view.id,
				building = view.building,
				room = view.room,
				status = %view.status,
				pancakes = view.pancakes.len(),
				total = %view.total_price(menu.as_ref()),
				"Final order state"
			);
		}
	}
	Ok(())
}

/// A standard pancake with dark chocolate, placed for the given destination.
async fn place_classic_order(
	ledger: &Arc<OrderLedger>,
	menu: &Arc<Menu>,
	building: i32,
	room: i32,
) -> anyhow::Result<OrderId> {
	let order = ledger.create_order(building, room)?;
	let pancake = PancakeBuilder::standard(menu.as_ref())?
		.custom(Ingredient::DarkChocolate)?
		.build()?;
	tracing::info!(order_id = %order.id(), pancake = %pancake, price = %pancake.price(menu.as_ref()), "Composed pancake");
	ledger.add_pancake_to_order(order.id(), pancake).await?;
	ledger.place_order(order.id()).await?;
	Ok(order.id())
}

/// A vegan pancake with hazelnut, placed for the given destination.
async fn place_vegan_order(
	ledger: &Arc<OrderLedger>,
	menu: &Arc<Menu>,
	building: i32,
	room: i32,
) -> anyhow::Result<OrderId> {
	let order = ledger.create_order(building, room)?;
	let pancake = PancakeBuilder::vegan(menu.as_ref())?
		.custom(Ingredient::Hazelnut)?
		.build()?;
	tracing::info!(order_id = %order.id(), pancake = %pancake, price = %pancake.price(menu.as_ref()), "Composed pancake");
	ledger.add_pancake_to_order(order.id(), pancake).await?;
	ledger.place_order(order.id()).await?;
	Ok(order.id())
}
