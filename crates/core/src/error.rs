//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure is local and synchronous: it is reported to the immediate
/// caller and never retried or recovered internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No item with the given name is stocked.
    #[error("item not found: {name}")]
    NotFound { name: String },

    /// A sale asked for more units than are on hand.
    #[error("insufficient stock for {name}: requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },

    /// A restock would push an item past its capacity.
    #[error("capacity exceeded for {name}: requested {requested}, free {free}")]
    CapacityExceeded {
        name: String,
        requested: u32,
        free: u32,
    },

    /// A caller-supplied value is outside its allowed range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The order service declined the order.
    #[error("order placement failed: {0}")]
    OrderPlacementFailed(String),

    /// An accepted order could not be applied to the inventory.
    #[error("order application failed: {0}")]
    OrderApplicationFailed(String),
}

impl DomainError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn insufficient_stock(name: impl Into<String>, requested: u32, available: u32) -> Self {
        Self::InsufficientStock {
            name: name.into(),
            requested,
            available,
        }
    }

    pub fn capacity_exceeded(name: impl Into<String>, requested: u32, free: u32) -> Self {
        Self::CapacityExceeded {
            name: name.into(),
            requested,
            free,
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn placement_failed(msg: impl Into<String>) -> Self {
        Self::OrderPlacementFailed(msg.into())
    }

    pub fn application_failed(msg: impl Into<String>) -> Self {
        Self::OrderApplicationFailed(msg.into())
    }
}
