use tracing::{debug, info, warn};

use vendmatic_core::{DomainError, DomainResult};
use vendmatic_inventory::{Inventory, Item, Order, OrderStrategy, ThresholdStrategy};
use vendmatic_ordering::OrderService;

use crate::config::MachineConfig;

/// A vending machine: sells from its inventory and reorders low items.
///
/// The machine exclusively owns its [`Inventory`]; the reorder policy and the
/// order service are injected at construction.
///
/// ## Restocking
///
/// `check_and_restock` is a linear sequence:
///
/// 1. Ask the strategy for an order.
/// 2. Empty order: nothing to do.
/// 3. Hand the order to the order service.
/// 4. Accepted: restock every line. Rejected: fail, inventory untouched.
///
/// No retry is attempted; a rejected order is reported to the caller, who may
/// call `check_and_restock` again.
#[derive(Debug)]
pub struct VendingMachine<S, P = ThresholdStrategy> {
    config: MachineConfig,
    inventory: Inventory,
    strategy: P,
    order_service: S,
}

impl<S: OrderService> VendingMachine<S> {
    /// An empty machine with the default threshold strategy and config.
    pub fn new(order_service: S) -> Self {
        Self::with_inventory(Inventory::new(), order_service)
    }

    /// A machine pre-loaded with `inventory`.
    pub fn with_inventory(inventory: Inventory, order_service: S) -> Self {
        Self {
            config: MachineConfig::default(),
            inventory,
            strategy: ThresholdStrategy,
            order_service,
        }
    }
}

impl<S: OrderService, P: OrderStrategy> VendingMachine<S, P> {
    /// Replace the reorder policy.
    pub fn with_strategy<Q: OrderStrategy>(self, strategy: Q) -> VendingMachine<S, Q> {
        VendingMachine {
            config: self.config,
            inventory: self.inventory,
            strategy,
            order_service: self.order_service,
        }
    }

    pub fn with_config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn order_service(&self) -> &S {
        &self.order_service
    }

    /// Load a new product, stocked to capacity.
    pub fn add_product(&mut self, name: impl Into<String>, capacity: u32) -> DomainResult<()> {
        self.add_item(Item::full(name, capacity)?);
        Ok(())
    }

    /// Insert or replace an item (last write wins).
    pub fn add_item(&mut self, item: Item) -> Option<Item> {
        self.inventory.add_item(item)
    }

    pub fn sell(&mut self, name: &str, quantity: u32) -> DomainResult<()> {
        self.inventory.sell_item(name, quantity)
    }

    /// Fill one product to capacity without going through the order service.
    pub fn restock_product(&mut self, name: &str) -> DomainResult<u32> {
        self.inventory.fill_item(name)
    }

    pub fn inventory_count(&self, name: &str) -> DomainResult<u32> {
        self.inventory.get_item_count(name)
    }

    pub fn inventory_item(&self, name: &str) -> DomainResult<&Item> {
        self.inventory.get_item(name)
    }

    /// Reorder every item below `threshold` and restock it once the order is
    /// accepted. Returns the applied order (empty when nothing was low).
    pub fn check_and_restock(&mut self, threshold: f64) -> DomainResult<Order> {
        let order = self.strategy.compute_order(&self.inventory, threshold)?;
        if order.is_empty() {
            debug!(machine = %self.config.name, threshold, "no items below threshold");
            return Ok(order);
        }

        if !self.order_service.place_order(&order) {
            warn!(
                machine = %self.config.name,
                lines = order.len(),
                units = order.total_units(),
                "order service rejected restock order"
            );
            return Err(DomainError::placement_failed(format!(
                "order service rejected {} line(s), {} unit(s)",
                order.len(),
                order.total_units()
            )));
        }

        self.inventory.apply_order(&order).map_err(|err| {
            warn!(machine = %self.config.name, error = %err, "accepted order could not be applied");
            DomainError::application_failed(err.to_string())
        })?;

        info!(
            machine = %self.config.name,
            lines = order.len(),
            units = order.total_units(),
            "restocked from accepted order"
        );
        Ok(order)
    }

    /// [`check_and_restock`](Self::check_and_restock) with the configured
    /// threshold.
    pub fn restock_if_low(&mut self) -> DomainResult<Order> {
        let threshold = self.config.restock_threshold;
        self.check_and_restock(threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendmatic_ordering::{DefaultOrderService, RecordingOrderService, RejectingOrderService};

    fn item(name: &str, stock: u32, capacity: u32) -> Item {
        Item::new(name, stock, capacity).unwrap()
    }

    fn drinks() -> Inventory {
        [item("Cola", 2, 20), item("Water", 15, 20)].into_iter().collect()
    }

    /// Orders a fixed set of lines regardless of inventory contents.
    struct FixedStrategy(Order);

    impl OrderStrategy for FixedStrategy {
        fn compute_order(&self, _inventory: &Inventory, _threshold: f64) -> DomainResult<Order> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn add_product_loads_full_item() {
        let mut machine = VendingMachine::new(DefaultOrderService);
        machine.add_product("Cola", 12).unwrap();

        assert_eq!(machine.inventory_count("Cola").unwrap(), 12);
        assert!(machine.inventory_item("Cola").unwrap().is_full());
    }

    #[test]
    fn add_product_with_zero_capacity_is_rejected() {
        let mut machine = VendingMachine::new(DefaultOrderService);
        let err = machine.add_product("Gum", 0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert!(machine.inventory().is_empty());
    }

    #[test]
    fn sell_delegates_to_inventory() {
        let mut machine = VendingMachine::with_inventory(drinks(), DefaultOrderService);

        machine.sell("Water", 3).unwrap();
        assert_eq!(machine.inventory_count("Water").unwrap(), 12);

        assert_eq!(
            machine.sell("Juice", 1).unwrap_err(),
            DomainError::not_found("Juice")
        );
    }

    #[test]
    fn restock_product_fills_single_item() {
        let mut machine = VendingMachine::with_inventory(drinks(), DefaultOrderService);
        assert_eq!(machine.restock_product("Cola").unwrap(), 18);
        assert_eq!(machine.inventory_count("Cola").unwrap(), 20);
        assert_eq!(machine.inventory_count("Water").unwrap(), 15);
    }

    #[test]
    fn nothing_low_means_order_service_is_not_called() {
        let mut machine =
            VendingMachine::with_inventory(drinks(), RecordingOrderService::accepting());

        let order = machine.check_and_restock(0.05).unwrap();

        assert!(order.is_empty());
        assert_eq!(machine.order_service().call_count(), 0);
    }

    #[test]
    fn accepted_order_is_applied() {
        let mut machine =
            VendingMachine::with_inventory(drinks(), RecordingOrderService::accepting());

        let order = machine.check_and_restock(0.25).unwrap();

        assert_eq!(order.get("Cola"), Some(18));
        assert_eq!(machine.order_service().last_order(), Some(order));
        assert_eq!(machine.inventory_count("Cola").unwrap(), 20);
        assert_eq!(machine.inventory_count("Water").unwrap(), 15);
    }

    #[test]
    fn rejected_order_leaves_inventory_unchanged() {
        let mut machine = VendingMachine::with_inventory(drinks(), RejectingOrderService);
        let before = machine.inventory().clone();

        let err = machine.check_and_restock(0.25).unwrap_err();

        assert!(matches!(err, DomainError::OrderPlacementFailed(_)));
        assert_eq!(machine.inventory(), &before);
    }

    #[test]
    fn invalid_threshold_is_reported_before_ordering() {
        let mut machine =
            VendingMachine::with_inventory(drinks(), RecordingOrderService::accepting());

        let err = machine.check_and_restock(1.0).unwrap_err();

        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert_eq!(machine.order_service().call_count(), 0);
    }

    #[test]
    fn order_for_unknown_item_fails_application_without_partial_restock() {
        let order: Order = [("Cola".to_string(), 18), ("Juice".to_string(), 6)]
            .into_iter()
            .collect();
        let mut machine =
            VendingMachine::with_inventory(drinks(), RecordingOrderService::accepting())
                .with_strategy(FixedStrategy(order));
        let before = machine.inventory().clone();

        let err = machine.check_and_restock(0.25).unwrap_err();

        match err {
            DomainError::OrderApplicationFailed(msg) if msg.contains("Juice") => {}
            _ => panic!("Expected OrderApplicationFailed for unknown item"),
        }
        assert_eq!(machine.order_service().call_count(), 1);
        assert_eq!(machine.inventory(), &before);
    }

    #[test]
    fn restock_if_low_uses_configured_threshold() {
        let mut machine = VendingMachine::with_inventory(drinks(), DefaultOrderService)
            .with_config(MachineConfig::default().with_restock_threshold(0.8));

        let order = machine.restock_if_low().unwrap();

        assert_eq!(order.len(), 2);
        assert!(machine.inventory().iter().all(Item::is_full));
    }
}
