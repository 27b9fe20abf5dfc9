use crate::catalog::{Catalog, Item};
use anyhow::{anyhow, Result};
use basket_utils::Price;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A chosen combination of items together with its totals.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub items: Vec<Item>,
    pub total_weight: u64,
    pub total_price: Price,
    pub total_value: u64,
}

impl Selection {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_weight: 0,
            total_price: Price::ZERO,
            total_value: 0,
        }
    }

    /// Builds a selection whose totals are the sums over `items`.
    pub fn from_items(items: Vec<Item>) -> Self {
        let total_weight = items.iter().map(|item| item.weight as u64).sum();
        let total_price = items.iter().map(|item| item.price).sum();
        let total_value = items.iter().map(|item| item.value as u64).sum();
        Self {
            items,
            total_weight,
            total_price,
            total_value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.items.iter().map(|item| item.id).collect()
    }
}

/// One search request: the catalog to draw from and the two budgets.
#[derive(Debug, Clone, Copy)]
pub struct Challenge<'a> {
    pub catalog: &'a Catalog,
    pub max_weight: u32,
    pub max_price: Price,
}

impl<'a> Challenge<'a> {
    pub fn new(catalog: &'a Catalog, max_weight: u32, max_price: Price) -> Self {
        Self {
            catalog,
            max_weight,
            max_price,
        }
    }

    pub fn fits(&self, weight: u64, price: Price) -> bool {
        weight <= self.max_weight as u64 && price <= self.max_price
    }

    /// Materializes catalog positions into a selection, in the given order.
    pub fn selection_from_positions(&self, positions: &[usize]) -> Selection {
        let items = self.catalog.items();
        Selection::from_items(positions.iter().map(|&p| items[p].clone()).collect())
    }

    pub fn verify_selection(&self, selection: &Selection) -> Result<()> {
        let mut seen = HashSet::with_capacity(selection.items.len());
        for item in &selection.items {
            if !seen.insert(item.id) {
                return Err(anyhow!("Item ({}) is selected more than once", item.id));
            }
            let listed = self.catalog.get(item.id)?;
            if listed != item {
                return Err(anyhow!(
                    "Item ({}) does not match the catalog record",
                    item.id
                ));
            }
        }

        let expected = Selection::from_items(selection.items.clone());
        if expected.total_weight != selection.total_weight {
            return Err(anyhow!(
                "Total weight ({}) does not match the sum of item weights ({})",
                selection.total_weight,
                expected.total_weight
            ));
        }
        if expected.total_price != selection.total_price {
            return Err(anyhow!(
                "Total price ({}) does not match the sum of item prices ({})",
                selection.total_price,
                expected.total_price
            ));
        }
        if expected.total_value != selection.total_value {
            return Err(anyhow!(
                "Total value ({}) does not match the sum of item values ({})",
                selection.total_value,
                expected.total_value
            ));
        }

        if selection.total_weight > self.max_weight as u64 {
            return Err(anyhow!(
                "Total weight ({}) exceeded max weight ({})",
                selection.total_weight,
                self.max_weight
            ));
        }
        if selection.total_price > self.max_price {
            return Err(anyhow!(
                "Total price ({}) exceeded max price ({})",
                selection.total_price,
                self.max_price
            ));
        }
        Ok(())
    }
}
