//! Order lifecycle orchestration for the Pancake Lab order system.
//!
//! The [`OrderLedger`] is the system's sole mutation surface: callers create
//! an order, compose it with pancakes, then ask the ledger to advance it
//! through placed -> prepared -> delivered, or cancel it. The ledger owns two
//! concurrent indices (pending and all-orders) plus three FIFO stage queues,
//! moves orders between them, and emits one audit event per successful
//! transition to an injected [`AuditSink`].
//!
//! Multiple tasks may call every operation concurrently: the indices are
//! concurrent maps, structural queue mutations serialize on a queue mutex,
//! and each order carries its own lock for status changes. A
//! structural move (index removal plus queue append) is deliberately not
//! atomic as a whole; the atomic arbiter for racing place/cancel calls is the
//! single removal from the pending index.

use dashmap::DashMap;
use lab_audit::AuditSink;
use lab_types::{AuditEvent, AuditEventKind, OrderId, OrderView, Pancake};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

pub mod order;

pub use order::{Order, OrderError};

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
	/// Building numbers start at 1.
	#[error("building number must be positive, got {0}")]
	InvalidBuilding(i32),
	/// Room numbers start at 1.
	#[error("room number must be positive, got {0}")]
	InvalidRoom(i32),
	/// The order is not awaiting composition: it never existed or has already
	/// been placed. The two cases surface identically.
	#[error("order {0} not found or already placed")]
	NotFound(OrderId),
	/// The order is in none of the cancelable containers; it was already
	/// prepared, delivered, canceled, or never existed.
	#[error("order {0} cannot be canceled in its current state")]
	NotCancelable(OrderId),
	/// A state-machine guard rejected the transition.
	#[error(transparent)]
	Order(#[from] OrderError),
}

/// Orchestrates order lifecycles across the pending index, the all-orders
/// index, and the placed/prepared/delivered stage queues.
pub struct OrderLedger {
	/// Orders in Init status, still being composed. Disjoint from `orders`.
	pending: DashMap<OrderId, Arc<Order>>,
	/// Every order that was ever placed, kept for history (canceled and
	/// delivered orders included).
	orders: DashMap<OrderId, Arc<Order>>,
	/// FIFO queue of placed orders awaiting preparation.
	placed: Mutex<VecDeque<Arc<Order>>>,
	/// FIFO queue of prepared orders awaiting delivery.
	prepared: Mutex<VecDeque<Arc<Order>>>,
	/// Orders handed off for delivery, in hand-off order.
	delivered: Mutex<VecDeque<Arc<Order>>>,
	/// Injected audit collaborator; receives one event per transition.
	audit: Arc<dyn AuditSink>,
}

impl OrderLedger {
	/// Creates an empty ledger emitting audit events to `audit`.
	pub fn new(audit: Arc<dyn AuditSink>) -> Self {
		Self {
			pending: DashMap::new(),
			orders: DashMap::new(),
			placed: Mutex::new(VecDeque::new()),
			prepared: Mutex::new(VecDeque::new()),
			delivered: Mutex::new(VecDeque::new()),
			audit,
		}
	}

	/// Creates a new order for the given destination and tracks it as
	/// pending. The returned handle supports reads; all mutation goes back
	/// through the ledger.
	pub fn create_order(&self, building: i32, room: i32) -> Result<Arc<Order>, LedgerError> {
		if building <= 0 {
			return Err(LedgerError::InvalidBuilding(building));
		}
		if room <= 0 {
			return Err(LedgerError::InvalidRoom(room));
		}
		let order = Arc::new(Order::new(building as u32, room as u32));
		self.pending.insert(order.id(), Arc::clone(&order));
		tracing::debug!(order_id = %order.id(), building, room, "order created");
		Ok(order)
	}

	/// Appends a pancake to a pending order.
	///
	/// Fails with [`LedgerError::NotFound`] when the order is not in the
	/// pending index, which covers both "never existed" and "already placed".
	pub async fn add_pancake_to_order(
		&self,
		id: OrderId,
		pancake: Pancake,
	) -> Result<(), LedgerError> {
		let order = self
			.pending
			.get(&id)
			.map(|entry| Arc::clone(entry.value()))
			.ok_or(LedgerError::NotFound(id))?;
		let count = order.add_pancake(pancake).await?;
		self.record(AuditEventKind::PancakeAdded, &order, count).await;
		Ok(())
	}

	/// Places a pending order: removes it from the pending index, transitions
	/// it to Created, and appends it to the placed queue tail.
	///
	/// The removal from the pending index is the atomic arbiter against
	/// concurrent cancellation: exactly one caller wins it. If the transition
	/// itself fails (empty pancake list) the order is restored to the pending
	/// index, so a failed placement is retryable.
	pub async fn place_order(&self, id: OrderId) -> Result<(), LedgerError> {
		let (_, order) = self.pending.remove(&id).ok_or(LedgerError::NotFound(id))?;
		let count = match order.place().await {
			Ok(count) => count,
			Err(err) => {
				self.pending.insert(id, order);
				return Err(err.into());
			}
		};
		// Index before queue: a queued id must always resolve through the
		// all-orders index, e.g. for cancellation.
		self.orders.insert(id, Arc::clone(&order));
		self.placed.lock().await.push_back(Arc::clone(&order));
		self.record(AuditEventKind::Placed, &order, count).await;
		Ok(())
	}

	/// Prepares the order at the head of the placed queue.
	///
	/// Returns `Ok(None)` when the queue is empty; an idle kitchen is an
	/// expected outcome, not an error.
	pub async fn prepare_order(&self) -> Result<Option<OrderId>, LedgerError> {
		let Some(order) = self.placed.lock().await.pop_front() else {
			tracing::debug!("no placed orders awaiting preparation");
			return Ok(None);
		};
		let count = order.prepare().await?;
		self.prepared.lock().await.push_back(Arc::clone(&order));
		self.record(AuditEventKind::Prepared, &order, count).await;
		Ok(Some(order.id()))
	}

	/// Hands the order at the head of the prepared queue off for delivery.
	///
	/// Returns `Ok(None)` when the queue is empty.
	pub async fn deliver_order(&self) -> Result<Option<OrderId>, LedgerError> {
		let Some(order) = self.prepared.lock().await.pop_front() else {
			tracing::debug!("no prepared orders awaiting delivery");
			return Ok(None);
		};
		let count = order.deliver().await?;
		self.delivered.lock().await.push_back(Arc::clone(&order));
		self.record(AuditEventKind::Delivered, &order, count).await;
		Ok(Some(order.id()))
	}

	/// Cancels an order that is still pending or placed.
	///
	/// Pending orders are removed outright and never enter the all-orders
	/// index. Placed orders are removed from the kitchen queue and retained
	/// in the all-orders index with Canceled status. Orders in any later
	/// stage are never cancelable.
	pub async fn cancel_order(&self, id: OrderId) -> Result<(), LedgerError> {
		if let Some((_, order)) = self.pending.remove(&id) {
			let count = order.cancel().await?;
			self.record(AuditEventKind::Canceled, &order, count).await;
			return Ok(());
		}

		let removed = {
			let mut placed = self.placed.lock().await;
			match placed.iter().position(|order| order.id() == id) {
				Some(index) => placed.remove(index),
				None => None,
			}
		};
		if removed.is_some() {
			if let Some(order) = self.orders.get(&id).map(|entry| Arc::clone(entry.value())) {
				let count = order.cancel().await?;
				self.record(AuditEventKind::Canceled, &order, count).await;
				return Ok(());
			}
		}

		Err(LedgerError::NotCancelable(id))
	}

	/// Snapshot of the pending index: orders still being composed.
	pub async fn pending_orders(&self) -> HashMap<OrderId, OrderView> {
		let handles: Vec<Arc<Order>> = self
			.pending
			.iter()
			.map(|entry| Arc::clone(entry.value()))
			.collect();
		let mut views = HashMap::with_capacity(handles.len());
		for order in handles {
			views.insert(order.id(), order.view().await);
		}
		views
	}

	/// Snapshot of the all-orders index: every order placed so far,
	/// including canceled and delivered ones.
	pub async fn orders(&self) -> HashMap<OrderId, OrderView> {
		let handles: Vec<Arc<Order>> = self
			.orders
			.iter()
			.map(|entry| Arc::clone(entry.value()))
			.collect();
		let mut views = HashMap::with_capacity(handles.len());
		for order in handles {
			views.insert(order.id(), order.view().await);
		}
		views
	}

	/// Snapshot of the placed queue in FIFO order.
	pub async fn placed_orders(&self) -> Vec<OrderView> {
		let handles: Vec<Arc<Order>> = self.placed.lock().await.iter().map(Arc::clone).collect();
		Self::views_of(handles).await
	}

	/// Snapshot of the prepared queue in FIFO order.
	pub async fn prepared_orders(&self) -> Vec<OrderView> {
		let handles: Vec<Arc<Order>> = self.prepared.lock().await.iter().map(Arc::clone).collect();
		Self::views_of(handles).await
	}

	/// Snapshot of the delivered queue in hand-off order.
	pub async fn delivered_orders(&self) -> Vec<OrderView> {
		let handles: Vec<Arc<Order>> = self.delivered.lock().await.iter().map(Arc::clone).collect();
		Self::views_of(handles).await
	}

	/// Snapshot of a single order, wherever it currently is.
	pub async fn order(&self, id: OrderId) -> Option<OrderView> {
		let handle = self
			.orders
			.get(&id)
			.or_else(|| self.pending.get(&id))
			.map(|entry| Arc::clone(entry.value()))?;
		Some(handle.view().await)
	}

	async fn views_of(handles: Vec<Arc<Order>>) -> Vec<OrderView> {
		let mut views = Vec::with_capacity(handles.len());
		for order in handles {
			views.push(order.view().await);
		}
		views
	}

	/// Emits one audit event; called after every order lock is released.
	/// Audit failures are logged and never fail the transition.
	async fn record(&self, kind: AuditEventKind, order: &Order, pancake_count: usize) {
		let event = AuditEvent::new(
			kind,
			order.id(),
			pancake_count,
			order.building(),
			order.room(),
		);
		if let Err(err) = self.audit.record(event).await {
			tracing::warn!(order_id = %order.id(), error = %err, "failed to record audit event");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use lab_audit::implementations::memory::MemoryAuditLog;
	use lab_menu::Menu;
	use lab_types::{OrderStatus, PancakeBuilder};

	fn ledger() -> (OrderLedger, Arc<MemoryAuditLog>) {
		let audit = Arc::new(MemoryAuditLog::new());
		let sink: Arc<dyn AuditSink> = audit.clone();
		(OrderLedger::new(sink), audit)
	}

	fn pancake(menu: &Menu) -> Pancake {
		PancakeBuilder::standard(menu).unwrap().build().unwrap()
	}

	#[tokio::test]
	async fn create_order_rejects_non_positive_destination() {
		let (ledger, _) = ledger();
		assert!(matches!(
			ledger.create_order(-1, 101),
			Err(LedgerError::InvalidBuilding(-1))
		));
		assert!(matches!(
			ledger.create_order(5, 0),
			Err(LedgerError::InvalidRoom(0))
		));
	}

	#[tokio::test]
	async fn created_order_is_visible_only_in_pending() {
		let (ledger, _) = ledger();
		let order = ledger.create_order(5, 101).unwrap();

		let pending = ledger.pending_orders().await;
		assert!(pending.contains_key(&order.id()));
		assert_eq!(pending[&order.id()].building, 5);
		assert_eq!(pending[&order.id()].room, 101);

		assert!(ledger.orders().await.is_empty());
		assert!(ledger.placed_orders().await.is_empty());
		assert!(ledger.prepared_orders().await.is_empty());
		assert!(ledger.delivered_orders().await.is_empty());
	}

	#[tokio::test]
	async fn add_pancake_appends_to_pending_order() {
		let (ledger, _) = ledger();
		let menu = Menu::with_defaults();
		let order = ledger.create_order(5, 101).unwrap();

		ledger
			.add_pancake_to_order(order.id(), pancake(&menu))
			.await
			.unwrap();

		let view = ledger.order(order.id()).await.unwrap();
		assert_eq!(view.pancakes.len(), 1);
	}

	#[tokio::test]
	async fn add_pancake_to_unknown_order_is_not_found() {
		let (ledger, _) = ledger();
		let menu = Menu::with_defaults();
		let err = ledger
			.add_pancake_to_order(OrderId::new(), pancake(&menu))
			.await
			.unwrap_err();
		assert!(matches!(err, LedgerError::NotFound(_)));
	}

	#[tokio::test]
	async fn add_pancake_after_placement_is_not_found() {
		let (ledger, _) = ledger();
		let menu = Menu::with_defaults();
		let order = ledger.create_order(5, 101).unwrap();
		ledger
			.add_pancake_to_order(order.id(), pancake(&menu))
			.await
			.unwrap();
		ledger.place_order(order.id()).await.unwrap();

		let err = ledger
			.add_pancake_to_order(order.id(), pancake(&menu))
			.await
			.unwrap_err();
		assert!(matches!(err, LedgerError::NotFound(_)));
	}

	#[tokio::test]
	async fn place_moves_order_from_pending_to_placed() {
		let (ledger, _) = ledger();
		let menu = Menu::with_defaults();
		let order = ledger.create_order(5, 101).unwrap();
		ledger
			.add_pancake_to_order(order.id(), pancake(&menu))
			.await
			.unwrap();

		ledger.place_order(order.id()).await.unwrap();

		assert!(!ledger.pending_orders().await.contains_key(&order.id()));
		assert!(ledger.orders().await.contains_key(&order.id()));
		let placed = ledger.placed_orders().await;
		assert_eq!(placed.len(), 1);
		assert_eq!(placed[0].id, order.id());
		assert_eq!(order.status().await, OrderStatus::Created);
	}

	#[tokio::test]
	async fn place_without_pancakes_fails_and_order_stays_pending() {
		let (ledger, _) = ledger();
		let order = ledger.create_order(5, 101).unwrap();

		let err = ledger.place_order(order.id()).await.unwrap_err();
		assert!(matches!(
			err,
			LedgerError::Order(OrderError::EmptyOrder { .. })
		));

		// failed placement is retryable: the order is back in pending
		assert!(ledger.pending_orders().await.contains_key(&order.id()));
		assert!(ledger.orders().await.is_empty());
		assert!(ledger.placed_orders().await.is_empty());
	}

	#[tokio::test]
	async fn place_unknown_order_is_not_found() {
		let (ledger, _) = ledger();
		let err = ledger.place_order(OrderId::new()).await.unwrap_err();
		assert!(matches!(err, LedgerError::NotFound(_)));
	}

	#[tokio::test]
	async fn prepare_moves_head_of_placed_queue() {
		let (ledger, _) = ledger();
		let menu = Menu::with_defaults();
		let order = ledger.create_order(5, 101).unwrap();
		ledger
			.add_pancake_to_order(order.id(), pancake(&menu))
			.await
			.unwrap();
		ledger.place_order(order.id()).await.unwrap();

		let prepared = ledger.prepare_order().await.unwrap();
		assert_eq!(prepared, Some(order.id()));

		assert!(ledger.placed_orders().await.is_empty());
		let queue = ledger.prepared_orders().await;
		assert_eq!(queue.len(), 1);
		assert_eq!(queue[0].id, order.id());
		assert_eq!(order.status().await, OrderStatus::Prepared);
	}

	#[tokio::test]
	async fn prepare_with_empty_queue_is_a_no_op() {
		let (ledger, audit) = ledger();
		assert_eq!(ledger.prepare_order().await.unwrap(), None);
		assert!(audit.is_empty().await);
	}

	#[tokio::test]
	async fn deliver_moves_head_of_prepared_queue() {
		let (ledger, _) = ledger();
		let menu = Menu::with_defaults();
		let order = ledger.create_order(5, 101).unwrap();
		ledger
			.add_pancake_to_order(order.id(), pancake(&menu))
			.await
			.unwrap();
		ledger.place_order(order.id()).await.unwrap();
		ledger.prepare_order().await.unwrap();

		let delivered = ledger.deliver_order().await.unwrap();
		assert_eq!(delivered, Some(order.id()));

		assert!(ledger.prepared_orders().await.is_empty());
		let queue = ledger.delivered_orders().await;
		assert_eq!(queue.len(), 1);
		assert_eq!(queue[0].id, order.id());
		assert_eq!(order.status().await, OrderStatus::Delivered);
	}

	#[tokio::test]
	async fn deliver_with_empty_queue_is_a_no_op() {
		let (ledger, _) = ledger();
		assert_eq!(ledger.deliver_order().await.unwrap(), None);
	}

	#[tokio::test]
	async fn queues_advance_in_fifo_order() {
		let (ledger, _) = ledger();
		let menu = Menu::with_defaults();
		let first = ledger.create_order(1, 1).unwrap();
		let second = ledger.create_order(2, 2).unwrap();
		for order in [&first, &second] {
			ledger
				.add_pancake_to_order(order.id(), pancake(&menu))
				.await
				.unwrap();
			ledger.place_order(order.id()).await.unwrap();
		}

		assert_eq!(ledger.prepare_order().await.unwrap(), Some(first.id()));
		assert_eq!(ledger.prepare_order().await.unwrap(), Some(second.id()));
		assert_eq!(ledger.deliver_order().await.unwrap(), Some(first.id()));
		assert_eq!(ledger.deliver_order().await.unwrap(), Some(second.id()));
	}

	#[tokio::test]
	async fn delivered_round_trip_leaves_order_only_in_delivered_snapshot() {
		let (ledger, _) = ledger();
		let menu = Menu::with_defaults();
		let order = ledger.create_order(5, 101).unwrap();
		ledger
			.add_pancake_to_order(order.id(), pancake(&menu))
			.await
			.unwrap();
		ledger.place_order(order.id()).await.unwrap();
		ledger.prepare_order().await.unwrap();
		ledger.deliver_order().await.unwrap();

		assert!(!ledger.pending_orders().await.contains_key(&order.id()));
		assert!(ledger.placed_orders().await.is_empty());
		assert!(ledger.prepared_orders().await.is_empty());
		assert_eq!(ledger.delivered_orders().await.len(), 1);
		// history is retained in the all-orders index
		assert_eq!(
			ledger.orders().await[&order.id()].status,
			OrderStatus::Delivered
		);
	}

	#[tokio::test]
	async fn cancel_pending_order_removes_it_entirely() {
		let (ledger, _) = ledger();
		let order = ledger.create_order(5, 101).unwrap();

		ledger.cancel_order(order.id()).await.unwrap();

		assert_eq!(order.status().await, OrderStatus::Canceled);
		assert!(ledger.pending_orders().await.is_empty());
		// a canceled pending order never reaches the all-orders index
		assert!(ledger.orders().await.is_empty());
	}

	#[tokio::test]
	async fn cancel_placed_order_keeps_history() {
		let (ledger, _) = ledger();
		let menu = Menu::with_defaults();
		let order = ledger.create_order(5, 101).unwrap();
		ledger
			.add_pancake_to_order(order.id(), pancake(&menu))
			.await
			.unwrap();
		ledger.place_order(order.id()).await.unwrap();

		ledger.cancel_order(order.id()).await.unwrap();

		assert_eq!(order.status().await, OrderStatus::Canceled);
		assert!(ledger.placed_orders().await.is_empty());
		assert_eq!(
			ledger.orders().await[&order.id()].status,
			OrderStatus::Canceled
		);
	}

	#[tokio::test]
	async fn cancel_is_refused_once_preparation_started() {
		let (ledger, _) = ledger();
		let menu = Menu::with_defaults();
		let order = ledger.create_order(5, 101).unwrap();
		ledger
			.add_pancake_to_order(order.id(), pancake(&menu))
			.await
			.unwrap();
		ledger.place_order(order.id()).await.unwrap();
		ledger.prepare_order().await.unwrap();

		let err = ledger.cancel_order(order.id()).await.unwrap_err();
		assert!(matches!(err, LedgerError::NotCancelable(_)));
		assert_eq!(order.status().await, OrderStatus::Prepared);

		ledger.deliver_order().await.unwrap();
		let err = ledger.cancel_order(order.id()).await.unwrap_err();
		assert!(matches!(err, LedgerError::NotCancelable(_)));
	}

	#[tokio::test]
	async fn cancel_unknown_order_is_refused() {
		let (ledger, _) = ledger();
		let err = ledger.cancel_order(OrderId::new()).await.unwrap_err();
		assert!(matches!(err, LedgerError::NotCancelable(_)));
	}

	#[tokio::test]
	async fn audit_trail_follows_the_lifecycle() {
		let (ledger, audit) = ledger();
		let menu = Menu::with_defaults();
		let order = ledger.create_order(5, 101).unwrap();
		ledger
			.add_pancake_to_order(order.id(), pancake(&menu))
			.await
			.unwrap();
		ledger.place_order(order.id()).await.unwrap();
		ledger.prepare_order().await.unwrap();
		ledger.deliver_order().await.unwrap();

		let events = audit.events().await;
		let kinds: Vec<AuditEventKind> = events.iter().map(|event| event.kind).collect();
		assert_eq!(
			kinds,
			vec![
				AuditEventKind::PancakeAdded,
				AuditEventKind::Placed,
				AuditEventKind::Prepared,
				AuditEventKind::Delivered,
			]
		);
		for event in &events {
			assert_eq!(event.order_id, order.id());
			assert_eq!(event.pancake_count, 1);
			assert_eq!(event.building, 5);
			assert_eq!(event.room, 101);
		}
	}

	#[tokio::test(flavor = "multi_thread")]
	async fn concurrent_placement_of_distinct_orders_loses_nothing() {
		const ORDERS: usize = 100;
		let (ledger, _) = ledger();
		let ledger = Arc::new(ledger);
		let menu = Arc::new(Menu::with_defaults());

		let mut handles = Vec::with_capacity(ORDERS);
		for i in 0..ORDERS {
			let ledger = Arc::clone(&ledger);
			let menu = Arc::clone(&menu);
			handles.push(tokio::spawn(async move {
				let order = ledger.create_order(i as i32 + 1, 101).unwrap();
				ledger
					.add_pancake_to_order(order.id(), pancake(&menu))
					.await
					.unwrap();
				ledger.place_order(order.id()).await.unwrap();
			}));
		}
		for handle in handles {
			handle.await.unwrap();
		}

		assert_eq!(ledger.orders().await.len(), ORDERS);
		assert_eq!(ledger.placed_orders().await.len(), ORDERS);
		assert!(ledger.pending_orders().await.is_empty());
	}

	#[tokio::test(flavor = "multi_thread")]
	async fn racing_cancel_and_place_resolve_to_one_final_status() {
		let menu = Arc::new(Menu::with_defaults());
		for _ in 0..50 {
			let (ledger, _) = ledger();
			let ledger = Arc::new(ledger);
			let order = ledger.create_order(5, 101).unwrap();
			ledger
				.add_pancake_to_order(order.id(), pancake(&menu))
				.await
				.unwrap();

			let id = order.id();
			let placer = {
				let ledger = Arc::clone(&ledger);
				tokio::spawn(async move { ledger.place_order(id).await })
			};
			let canceler = {
				let ledger = Arc::clone(&ledger);
				tokio::spawn(async move { ledger.cancel_order(id).await })
			};
			let (placed, canceled) = (placer.await.unwrap(), canceler.await.unwrap());

			let status = order.status().await;
			assert!(
				matches!(status, OrderStatus::Created | OrderStatus::Canceled),
				"unexpected final status {status}"
			);
			assert!(ledger.pending_orders().await.is_empty());
			match status {
				// place lost the race entirely, or cancel came second and
				// pulled the order back out of the kitchen queue
				OrderStatus::Canceled => {
					assert!(canceled.is_ok());
					assert!(ledger.placed_orders().await.is_empty());
				}
				// cancel hit the window where the order was in neither
				// container and was refused
				OrderStatus::Created => {
					assert!(placed.is_ok());
					assert!(canceled.is_err());
					assert_eq!(ledger.placed_orders().await.len(), 1);
				}
				_ => unreachable!(),
			}
		}
	}

	#[tokio::test(flavor = "multi_thread")]
	async fn interleaved_add_and_place_never_corrupt_one_order() {
		let menu = Arc::new(Menu::with_defaults());
		let (ledger, _) = ledger();
		let ledger = Arc::new(ledger);
		let order = ledger.create_order(5, 101).unwrap();
		ledger
			.add_pancake_to_order(order.id(), pancake(&menu))
			.await
			.unwrap();

		let id = order.id();
		let adder = {
			let ledger = Arc::clone(&ledger);
			let menu = Arc::clone(&menu);
			tokio::spawn(async move {
				let mut added = 0usize;
				for _ in 0..9 {
					// either error just means the order was placed meanwhile
					match ledger.add_pancake_to_order(id, pancake(&menu)).await {
						Ok(()) => added += 1,
						Err(LedgerError::NotFound(_))
						| Err(LedgerError::Order(OrderError::AlreadyPlaced { .. })) => break,
						Err(err) => panic!("unexpected error: {err}"),
					}
				}
				added
			})
		};
		let placer = {
			let ledger = Arc::clone(&ledger);
			tokio::spawn(async move { ledger.place_order(id).await })
		};

		let (added, placed) = (adder.await.unwrap(), placer.await.unwrap());
		assert!(placed.is_ok());

		let view = ledger.order(id).await.unwrap();
		assert_eq!(view.status, OrderStatus::Created);
		// every accepted add is in the frozen list, nothing lost or duplicated
		assert_eq!(view.pancakes.len(), 1 + added);
		assert!(view.pancakes.len() <= 10);
	}
}
