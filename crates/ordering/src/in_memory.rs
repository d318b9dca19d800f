//! In-memory order services for tests/dev.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use vendmatic_core::OrderId;
use vendmatic_inventory::Order;

use crate::service::OrderService;

/// One call to [`RecordingOrderService::place_order`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedOrder {
    pub id: OrderId,
    pub order: Order,
    pub placed_at: DateTime<Utc>,
    pub accepted: bool,
}

/// Order service that remembers every order it is handed.
///
/// - No IO
/// - Outcome is switchable at runtime (`set_accepting`)
/// - Rejected orders are recorded too, with `accepted: false`
#[derive(Debug)]
pub struct RecordingOrderService {
    accepting: AtomicBool,
    placed: Mutex<Vec<PlacedOrder>>,
}

impl RecordingOrderService {
    pub fn new(accepting: bool) -> Self {
        Self {
            accepting: AtomicBool::new(accepting),
            placed: Mutex::new(Vec::new()),
        }
    }

    pub fn accepting() -> Self {
        Self::new(true)
    }

    pub fn rejecting() -> Self {
        Self::new(false)
    }

    pub fn set_accepting(&self, accepting: bool) {
        self.accepting.store(accepting, Ordering::SeqCst);
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting.load(Ordering::SeqCst)
    }

    /// Every order seen so far, oldest first.
    pub fn placed_orders(&self) -> Vec<PlacedOrder> {
        self.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    pub fn last_order(&self) -> Option<Order> {
        self.lock().last().map(|placed| placed.order.clone())
    }

    // Pushes are the only writes, so a poisoned log is still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<PlacedOrder>> {
        self.placed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RecordingOrderService {
    fn default() -> Self {
        Self::accepting()
    }
}

impl OrderService for RecordingOrderService {
    fn place_order(&self, order: &Order) -> bool {
        let accepted = self.is_accepting();
        let placed = PlacedOrder {
            id: OrderId::new(),
            order: order.clone(),
            placed_at: Utc::now(),
            accepted,
        };
        debug!(order_id = %placed.id, lines = order.len(), accepted, "order recorded");
        self.lock().push(placed);
        accepted
    }
}

/// Order service that turns every order down.
#[derive(Debug, Default, Clone, Copy)]
pub struct RejectingOrderService;

impl OrderService for RejectingOrderService {
    fn place_order(&self, order: &Order) -> bool {
        debug!(lines = order.len(), "order rejected");
        false
    }
}
