//! `vendmatic-core` — shared building blocks for the vending domain.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error taxonomy every crate reports through, and identifiers.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::OrderId;
