//! Inventory domain module.
//!
//! This crate contains the stock-keeping rules of a vending machine, implemented
//! purely as deterministic domain logic (no IO, no storage): items and their
//! capacities, the inventory that owns them, reorder requests, and the strategy
//! that decides what to reorder.

pub mod inventory;
pub mod item;
pub mod order;
pub mod strategy;

pub use inventory::Inventory;
pub use item::Item;
pub use order::Order;
pub use strategy::{OrderStrategy, ThresholdStrategy, validate_threshold};
