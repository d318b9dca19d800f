use serde::Serialize;

use vendmatic_core::{DomainError, DomainResult};

/// A stocked product: how many units are on hand and how many fit.
///
/// Invariant: `current_stock <= capacity` and `capacity > 0`. Stock only
/// changes through the owning [`Inventory`](crate::Inventory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    current_stock: u32,
    capacity: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, current_stock: u32, capacity: u32) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("item name cannot be empty"));
        }
        if capacity == 0 {
            return Err(DomainError::invalid_argument(format!(
                "capacity of {name} must be positive"
            )));
        }
        if current_stock > capacity {
            return Err(DomainError::invalid_argument(format!(
                "stock of {name} ({current_stock}) exceeds capacity ({capacity})"
            )));
        }
        Ok(Self {
            name,
            current_stock,
            capacity,
        })
    }

    /// A freshly loaded item, stocked to capacity.
    pub fn full(name: impl Into<String>, capacity: u32) -> DomainResult<Self> {
        Self::new(name, capacity, capacity)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_stock(&self) -> u32 {
        self.current_stock
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Units that can still be added before the item is full.
    pub fn free_capacity(&self) -> u32 {
        self.capacity - self.current_stock
    }

    /// `current_stock / capacity`, in `[0, 1]`.
    pub fn fill_ratio(&self) -> f64 {
        f64::from(self.current_stock) / f64::from(self.capacity)
    }

    pub fn is_full(&self) -> bool {
        self.current_stock == self.capacity
    }

    pub(crate) fn ensure_can_remove(&self, quantity: u32) -> DomainResult<()> {
        if quantity > self.current_stock {
            return Err(DomainError::insufficient_stock(
                &self.name,
                quantity,
                self.current_stock,
            ));
        }
        Ok(())
    }

    pub(crate) fn ensure_can_add(&self, quantity: u32) -> DomainResult<()> {
        if quantity > self.free_capacity() {
            return Err(DomainError::capacity_exceeded(
                &self.name,
                quantity,
                self.free_capacity(),
            ));
        }
        Ok(())
    }

    pub(crate) fn remove_stock(&mut self, quantity: u32) -> DomainResult<()> {
        self.ensure_can_remove(quantity)?;
        self.current_stock -= quantity;
        Ok(())
    }

    pub(crate) fn add_stock(&mut self, quantity: u32) -> DomainResult<()> {
        self.ensure_can_add(quantity)?;
        self.current_stock += quantity;
        Ok(())
    }
}
