//! Tracing-backed audit sink implementation.
//!
//! Forwards each audit event to the `tracing` subscriber with structured
//! fields, which is the default sink for the service binary.

use crate::{AuditError, AuditSink};
use async_trait::async_trait;
use lab_types::AuditEvent;

/// Audit sink that emits one structured log line per event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditLog;

impl TracingAuditLog {
	pub fn new() -> Self {
		Self
	}
}

#[async_trait]
impl AuditSink for TracingAuditLog {
	async fn record(&self, event: AuditEvent) -> Result<(), AuditError> {
		tracing::info!(
			order_id = %event.order_id,
			kind = %event.kind,
			pancake_count = event.pancake_count,
			building = event.building,
			room = event.room,
			"order event"
		);
		Ok(())
	}
}
