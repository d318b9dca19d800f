//! Ordering boundary (driven port).
//!
//! A vending machine hands computed reorder requests to an [`OrderService`];
//! a production implementation would forward them to a supplier system. This
//! crate defines the port, a default implementation that accepts and logs
//! every order, and in-memory stand-ins for tests/dev.

pub mod in_memory;
pub mod service;

pub use in_memory::{PlacedOrder, RecordingOrderService, RejectingOrderService};
pub use service::{DefaultOrderService, OrderService};
