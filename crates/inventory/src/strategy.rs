//! Reorder policies.
//!
//! A strategy looks at an inventory snapshot and decides which items to
//! reorder, and how many units of each. Strategies are pure: the same
//! inventory and threshold always produce the same [`Order`].

use vendmatic_core::{DomainError, DomainResult};

use crate::inventory::Inventory;
use crate::order::Order;

/// Computes a reorder request from the current inventory.
pub trait OrderStrategy {
    /// `threshold` is a fill ratio in the open interval `(0, 1)`; anything
    /// else is rejected with [`DomainError::InvalidArgument`].
    fn compute_order(&self, inventory: &Inventory, threshold: f64) -> DomainResult<Order>;
}

/// Refill every item whose fill ratio is strictly below the threshold back to
/// full capacity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdStrategy;

impl ThresholdStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl OrderStrategy for ThresholdStrategy {
    fn compute_order(&self, inventory: &Inventory, threshold: f64) -> DomainResult<Order> {
        let threshold = validate_threshold(threshold)?;
        Ok(inventory
            .iter()
            .filter(|item| item.fill_ratio() < threshold)
            .map(|item| (item.name().to_string(), item.free_capacity()))
            .collect())
    }
}

/// Accept `threshold` only if it is a finite value in `(0, 1)`.
pub fn validate_threshold(threshold: f64) -> DomainResult<f64> {
    if threshold.is_finite() && threshold > 0.0 && threshold < 1.0 {
        Ok(threshold)
    } else {
        Err(DomainError::invalid_argument(format!(
            "threshold must be in (0, 1), got {threshold}"
        )))
    }
}
