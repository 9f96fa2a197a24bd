//! In-memory audit sink implementation.
//!
//! This module provides a memory-backed implementation of the AuditSink
//! trait, useful for tests and for inspecting the audit trail of a single
//! service instance without external infrastructure.

use crate::{AuditError, AuditSink};
use async_trait::async_trait;
use lab_types::AuditEvent;
use tokio::sync::RwLock;

/// Audit sink that appends events to an in-memory buffer.
///
/// Events are kept in emission order. The buffer grows for the lifetime of
/// the sink; `clear` resets it between test cases.
#[derive(Default)]
pub struct MemoryAuditLog {
	events: RwLock<Vec<AuditEvent>>,
}

impl MemoryAuditLog {
	/// Creates a new, empty audit log.
	pub fn new() -> Self {
		Self::default()
	}

	/// Snapshot of all recorded events in emission order.
	pub async fn events(&self) -> Vec<AuditEvent> {
		self.events.read().await.clone()
	}

	/// Number of events recorded so far.
	pub async fn len(&self) -> usize {
		self.events.read().await.len()
	}

	/// Whether no events have been recorded yet.
	pub async fn is_empty(&self) -> bool {
		self.events.read().await.is_empty()
	}

	/// Drops all recorded events.
	pub async fn clear(&self) {
		self.events.write().await.clear();
	}
}

#[async_trait]
impl AuditSink for MemoryAuditLog {
	async fn record(&self, event: AuditEvent) -> Result<(), AuditError> {
		self.events.write().await.push(event);
		Ok(())
	}
}
