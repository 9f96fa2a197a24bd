//! Order entity and its lifecycle state machine.
//!
//! An order owns its identity (id, destination building and room, fixed at
//! creation) and a mutable core of status plus pancake list. The mutable core
//! sits behind a per-order mutex, so concurrent transitions on the same order
//! serialize cleanly: a racing `add_pancake` and `place` observe either the
//! pre- or post-state, never a partial list during a status check.
//!
//! Transition methods are the sole owner of the status field and are
//! crate-private; the ledger is the only component that drives them. Callers
//! outside the crate interact through read accessors and snapshots.

use lab_types::{OrderId, OrderStatus, OrderView, Pancake};
use thiserror::Error;
use tokio::sync::Mutex;

/// Errors raised by order state transitions.
///
/// Every variant names the violated precondition and the offending order id.
#[derive(Debug, Error)]
pub enum OrderError {
	/// The order has left composition; pancakes can no longer be added and it
	/// cannot be placed again.
	#[error("order {id} has already been placed")]
	AlreadyPlaced { id: OrderId },
	/// Placement was attempted with an empty pancake list.
	#[error("cannot place order {id} without pancakes")]
	EmptyOrder { id: OrderId },
	/// The requested transition is not legal from the order's current status.
	#[error("order {id} cannot move from {from} to {to}")]
	InvalidTransition {
		id: OrderId,
		from: OrderStatus,
		to: OrderStatus,
	},
}

#[derive(Debug)]
struct OrderState {
	status: OrderStatus,
	pancakes: Vec<Pancake>,
}

/// A customer order tracked through a fixed lifecycle.
#[derive(Debug)]
pub struct Order {
	id: OrderId,
	building: u32,
	room: u32,
	state: Mutex<OrderState>,
}

impl Order {
	pub(crate) fn new(building: u32, room: u32) -> Self {
		Self {
			id: OrderId::new(),
			building,
			room,
			state: Mutex::new(OrderState {
				status: OrderStatus::Init,
				pancakes: Vec::new(),
			}),
		}
	}

	/// Unique identifier assigned at creation.
	pub fn id(&self) -> OrderId {
		self.id
	}

	/// Destination building number.
	pub fn building(&self) -> u32 {
		self.building
	}

	/// Destination room number.
	pub fn room(&self) -> u32 {
		self.room
	}

	/// Current status.
	pub async fn status(&self) -> OrderStatus {
		self.state.lock().await.status
	}

	/// Number of pancakes currently in the order.
	pub async fn pancake_count(&self) -> usize {
		self.state.lock().await.pancakes.len()
	}

	/// Immutable snapshot of the order.
	pub async fn view(&self) -> OrderView {
		let state = self.state.lock().await;
		OrderView {
			id: self.id,
			building: self.building,
			room: self.room,
			pancakes: state.pancakes.clone(),
			status: state.status,
		}
	}

	/// Appends a pancake; only legal while the order is being composed.
	///
	/// Returns the pancake count after the append.
	pub(crate) async fn add_pancake(&self, pancake: Pancake) -> Result<usize, OrderError> {
		let mut state = self.state.lock().await;
		if state.status != OrderStatus::Init {
			return Err(OrderError::AlreadyPlaced { id: self.id });
		}
		state.pancakes.push(pancake);
		Ok(state.pancakes.len())
	}

	/// Transitions Init -> Created; requires a non-empty pancake list.
	pub(crate) async fn place(&self) -> Result<usize, OrderError> {
		let mut state = self.state.lock().await;
		if state.status != OrderStatus::Init {
			return Err(OrderError::AlreadyPlaced { id: self.id });
		}
		if state.pancakes.is_empty() {
			return Err(OrderError::EmptyOrder { id: self.id });
		}
		state.status = OrderStatus::Created;
		Ok(state.pancakes.len())
	}

	/// Transitions Created -> Prepared.
	pub(crate) async fn prepare(&self) -> Result<usize, OrderError> {
		let mut state = self.state.lock().await;
		if state.status != OrderStatus::Created {
			return Err(OrderError::InvalidTransition {
				id: self.id,
				from: state.status,
				to: OrderStatus::Prepared,
			});
		}
		state.status = OrderStatus::Prepared;
		Ok(state.pancakes.len())
	}

	/// Transitions Prepared -> Delivered.
	pub(crate) async fn deliver(&self) -> Result<usize, OrderError> {
		let mut state = self.state.lock().await;
		if state.status != OrderStatus::Prepared {
			return Err(OrderError::InvalidTransition {
				id: self.id,
				from: state.status,
				to: OrderStatus::Delivered,
			});
		}
		state.status = OrderStatus::Delivered;
		Ok(state.pancakes.len())
	}

	/// Transitions to Canceled; refused once preparation has started.
	pub(crate) async fn cancel(&self) -> Result<usize, OrderError> {
		let mut state = self.state.lock().await;
		if matches!(state.status, OrderStatus::Prepared | OrderStatus::Delivered) {
			return Err(OrderError::InvalidTransition {
				id: self.id,
				from: state.status,
				to: OrderStatus::Canceled,
			});
		}
		state.status = OrderStatus::Canceled;
		Ok(state.pancakes.len())
	}
}
