use std::sync::Arc;

use tracing::info;

use vendmatic_core::OrderId;
use vendmatic_inventory::Order;

/// Accepts reorder requests on behalf of a supplier.
///
/// `place_order` reports whether the order was accepted. The caller only
/// restocks after an accepted order; a rejected order must leave no trace in
/// the caller's inventory.
pub trait OrderService {
    fn place_order(&self, order: &Order) -> bool;
}

impl<T: OrderService + ?Sized> OrderService for &T {
    fn place_order(&self, order: &Order) -> bool {
        (**self).place_order(order)
    }
}

impl<T: OrderService + ?Sized> OrderService for Box<T> {
    fn place_order(&self, order: &Order) -> bool {
        (**self).place_order(order)
    }
}

impl<T: OrderService + ?Sized> OrderService for Arc<T> {
    fn place_order(&self, order: &Order) -> bool {
        (**self).place_order(order)
    }
}

/// Accepts every order without contacting anyone, logging what was placed.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultOrderService;

impl DefaultOrderService {
    pub fn new() -> Self {
        Self
    }
}

impl OrderService for DefaultOrderService {
    fn place_order(&self, order: &Order) -> bool {
        let order_id = OrderId::new();
        // Serializing a string→u32 map cannot fail.
        let payload = serde_json::to_string(order).unwrap_or_default();
        info!(
            %order_id,
            lines = order.len(),
            units = order.total_units(),
            %payload,
            "order placed"
        );
        true
    }
}
