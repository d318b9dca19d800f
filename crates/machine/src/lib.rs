//! `vendmatic-machine` — the vending machine application service.
//!
//! A [`VendingMachine`] owns one [`Inventory`](vendmatic_inventory::Inventory)
//! and composes it with an [`OrderStrategy`](vendmatic_inventory::OrderStrategy)
//! and an injected [`OrderService`](vendmatic_ordering::OrderService):
//!
//! ```text
//! sell(name, qty)            → Inventory::sell_item
//! check_and_restock(t)       → OrderStrategy::compute_order
//!                            → OrderService::place_order   (skipped when empty)
//!                            → Inventory::apply_order      (only when accepted)
//! ```

pub mod config;
pub mod machine;

pub use config::MachineConfig;
pub use machine::VendingMachine;
