//! Audit sink abstraction for the Pancake Lab order system.
//!
//! Every successful lifecycle transition produces one [`AuditEvent`]; the
//! ledger hands it to an injected [`AuditSink`] rather than a process-global
//! buffer, so sinks can be swapped per instance and isolated per test.
//! Recording is append-only and happens after all order locks are released.

use async_trait::async_trait;
use lab_types::AuditEvent;
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod log;
	pub mod memory;
}

/// Errors that can occur while recording audit events.
#[derive(Debug, Error)]
pub enum AuditError {
	/// Error that occurs in the sink backend.
	#[error("audit sink error: {0}")]
	Sink(String),
}

/// Trait defining the interface for audit sinks.
///
/// Implementations receive one immutable event per successful transition, in
/// emission order. A sink must never block on an order lock; it only ever
/// sees finished event records.
#[async_trait]
pub trait AuditSink: Send + Sync {
	/// Records a single audit event.
	async fn record(&self, event: AuditEvent) -> Result<(), AuditError>;
}
