use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use vendmatic_core::{DomainError, DomainResult};

use crate::item::Item;
use crate::order::Order;

/// The items stocked in one machine, keyed by name.
///
/// The inventory owns its items exclusively; every stock change goes through
/// [`sell_item`](Self::sell_item), [`restock_item`](Self::restock_item),
/// [`fill_item`](Self::fill_item) or [`apply_order`](Self::apply_order), and a
/// failed call leaves stock untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    items: BTreeMap<String, Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `item`, replacing any item with the same name (last write wins).
    pub fn add_item(&mut self, item: Item) -> Option<Item> {
        debug!(
            item = item.name(),
            stock = item.current_stock(),
            capacity = item.capacity(),
            "adding item to inventory"
        );
        self.items.insert(item.name().to_string(), item)
    }

    pub fn get_item(&self, name: &str) -> DomainResult<&Item> {
        self.items.get(name).ok_or_else(|| DomainError::not_found(name))
    }

    pub fn get_item_count(&self, name: &str) -> DomainResult<u32> {
        Ok(self.get_item(name)?.current_stock())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn sell_item(&mut self, name: &str, quantity: u32) -> DomainResult<()> {
        let item = self.item_mut(name)?;
        item.remove_stock(quantity)?;
        debug!(item = name, quantity, stock = item.current_stock(), "sold");
        Ok(())
    }

    pub fn restock_item(&mut self, name: &str, quantity: u32) -> DomainResult<()> {
        let item = self.item_mut(name)?;
        item.add_stock(quantity)?;
        debug!(item = name, quantity, stock = item.current_stock(), "restocked");
        Ok(())
    }

    /// Bring one item up to capacity, returning the number of units added.
    pub fn fill_item(&mut self, name: &str) -> DomainResult<u32> {
        let missing = self.get_item(name)?.free_capacity();
        self.restock_item(name, missing)?;
        Ok(missing)
    }

    /// Restock every line of `order`.
    ///
    /// All lines are checked before any stock changes, so either the whole
    /// order is applied or none of it is.
    pub fn apply_order(&mut self, order: &Order) -> DomainResult<()> {
        for (name, quantity) in order.iter() {
            self.get_item(name)?.ensure_can_add(quantity)?;
        }
        for (name, quantity) in order.iter() {
            self.restock_item(name, quantity)?;
        }
        Ok(())
    }

    fn item_mut(&mut self, name: &str) -> DomainResult<&mut Item> {
        self.items
            .get_mut(name)
            .ok_or_else(|| DomainError::not_found(name))
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        for item in iter {
            inventory.add_item(item);
        }
        inventory
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = std::collections::btree_map::Values<'a, String, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}
