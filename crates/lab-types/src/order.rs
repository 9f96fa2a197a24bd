//! Order identifiers, lifecycle statuses, and read-only views.

use crate::Pancake;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Globally unique order identifier, assigned once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
	/// Generates a fresh random identifier.
	pub fn new() -> Self {
		Self(Uuid::new_v4())
	}
}

impl Default for OrderId {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Display for OrderId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// Status of an order in its lifecycle.
///
/// `Init` is the initial status; `Delivered` and `Canceled` are terminal.
/// Transitions only ever move forward: Init -> Created -> Prepared ->
/// Delivered, with cancellation permitted from Init or Created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
	/// Order is being composed; pancakes may still be added.
	Init,
	/// Order has been placed and waits in the kitchen queue.
	Created,
	/// Order has been prepared and waits for delivery.
	Prepared,
	/// Order has been handed off for delivery.
	Delivered,
	/// Order was canceled before preparation started.
	Canceled,
}

impl fmt::Display for OrderStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			OrderStatus::Init => write!(f, "INIT"),
			OrderStatus::Created => write!(f, "CREATED"),
			OrderStatus::Prepared => write!(f, "PREPARED"),
			OrderStatus::Delivered => write!(f, "DELIVERED"),
			OrderStatus::Canceled => write!(f, "CANCELED"),
		}
	}
}

/// Immutable snapshot of a single order.
///
/// Returned by every ledger read accessor; internal containers never escape
/// the ledger, so callers can hold and serialize views freely.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
	/// Identifier of the order this view was taken from.
	pub id: OrderId,
	/// Destination building number.
	pub building: u32,
	/// Destination room number.
	pub room: u32,
	/// Pancakes in the order, in the order they were added.
	pub pancakes: Vec<Pancake>,
	/// Status at the time the snapshot was taken.
	pub status: OrderStatus,
}

impl OrderView {
	/// Sum of the pancake prices against `catalog`.
	pub fn total_price<C: crate::Catalog>(&self, catalog: &C) -> Decimal {
		self.pancakes
			.iter()
			.map(|pancake| pancake.price(catalog))
			.sum()
	}
}
