//! Audit event records for order lifecycle transitions.
//!
//! Every successful transition produces exactly one immutable [`AuditEvent`].
//! Events flow to an injected audit sink; emission order matches transition
//! order per ledger instance, and no further ordering is promised to
//! consumers.

use crate::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of lifecycle transition an event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuditEventKind {
	/// A pancake was added to an order still being composed.
	PancakeAdded,
	/// An order moved from composition into the kitchen queue.
	Placed,
	/// An order was prepared by the kitchen.
	Prepared,
	/// An order went out for delivery.
	Delivered,
	/// An order was canceled.
	Canceled,
}

impl fmt::Display for AuditEventKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AuditEventKind::PancakeAdded => write!(f, "pancake added"),
			AuditEventKind::Placed => write!(f, "placed"),
			AuditEventKind::Prepared => write!(f, "prepared"),
			AuditEventKind::Delivered => write!(f, "delivered"),
			AuditEventKind::Canceled => write!(f, "canceled"),
		}
	}
}

/// One immutable record per successful lifecycle transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
	/// Which transition happened.
	pub kind: AuditEventKind,
	/// The order the transition applied to.
	pub order_id: OrderId,
	/// Number of pancakes in the order at the time of the event.
	pub pancake_count: usize,
	/// Destination building number.
	pub building: u32,
	/// Destination room number.
	pub room: u32,
	/// When the event was recorded.
	pub at: DateTime<Utc>,
}

impl AuditEvent {
	/// Builds an event stamped with the current time.
	pub fn new(
		kind: AuditEventKind,
		order_id: OrderId,
		pancake_count: usize,
		building: u32,
		room: u32,
	) -> Self {
		Self {
			kind,
			order_id,
			pancake_count,
			building,
			room,
			at: Utc::now(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn event_round_trips_through_json() {
		let event = AuditEvent::new(AuditEventKind::Placed, OrderId::new(), 2, 5, 101);
		let json = serde_json::to_string(&event).unwrap();
		assert!(json.contains("\"kind\":\"placed\""));
		assert!(json.contains("\"pancakeCount\":2"));

		let back: AuditEvent = serde_json::from_str(&json).unwrap();
		assert_eq!(back.order_id, event.order_id);
		assert_eq!(back.kind, AuditEventKind::Placed);
	}
}
