use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

/// A reorder request: item name → number of units to restock.
///
/// Every stored quantity is positive; inserting zero is a no-op. Iteration is
/// ordered by item name, so two orders with the same lines compare, print and
/// serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, u32>", into = "BTreeMap<String, u32>")]
pub struct Order {
    lines: BTreeMap<String, u32>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quantity for `name`, returning the previous quantity if any.
    pub fn insert(&mut self, name: impl Into<String>, quantity: u32) -> Option<u32> {
        if quantity == 0 {
            return None;
        }
        self.lines.insert(name.into(), quantity)
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.lines.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lines.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.lines.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    /// Sum of all requested units.
    pub fn total_units(&self) -> u64 {
        self.lines.values().map(|qty| u64::from(*qty)).sum()
    }
}

impl From<BTreeMap<String, u32>> for Order {
    fn from(lines: BTreeMap<String, u32>) -> Self {
        lines.into_iter().collect()
    }
}

impl From<Order> for BTreeMap<String, u32> {
    fn from(order: Order) -> Self {
        order.lines
    }
}

impl FromIterator<(String, u32)> for Order {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let mut order = Order::new();
        for (name, qty) in iter {
            order.insert(name, qty);
        }
        order
    }
}

impl IntoIterator for Order {
    type Item = (String, u32);
    type IntoIter = btree_map::IntoIter<String, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantities_are_not_stored() {
        let mut order = Order::new();
        assert_eq!(order.insert("Cola", 0), None);
        assert!(order.is_empty());
        assert!(!order.contains("Cola"));
    }

    #[test]
    fn insert_replaces_previous_quantity() {
        let mut order = Order::new();
        assert_eq!(order.insert("Cola", 3), None);
        assert_eq!(order.insert("Cola", 7), Some(3));
        assert_eq!(order.get("Cola"), Some(7));
        assert_eq!(order.len(), 1);
    }

    #[test]
    fn iterates_in_name_order_and_sums_units() {
        let order: Order = [("Water".to_string(), 5), ("Cola".to_string(), 18)]
            .into_iter()
            .collect();

        let names: Vec<&str> = order.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Cola", "Water"]);
        assert_eq!(order.total_units(), 23);
    }

    #[test]
    fn serializes_as_plain_map_and_drops_zero_lines_on_read() {
        let mut order = Order::new();
        order.insert("Cola", 18);
        assert_eq!(serde_json::to_string(&order).unwrap(), r#"{"Cola":18}"#);

        let parsed: Order = serde_json::from_str(r#"{"Cola":18,"Water":0}"#).unwrap();
        assert_eq!(parsed, order);
    }
}
