use basket_utils::{dejsonify_file, Price};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path};
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub value: u32,
    pub weight: u32,
    pub price: Price,
}

impl Item {
    pub fn new(id: u32, name: &str, value: u32, weight: u32, price: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            value,
            weight,
            price: Price::from_f64(price),
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Item not found")]
    ItemNotFound(u32),
    #[error("item id {0} appears more than once in the catalog")]
    DuplicateId(u32),
    #[error("item id must be positive")]
    InvalidId,
    #[error("item {0} must have a positive weight")]
    InvalidWeight(u32),
    #[error("catalog holds {len} items, at most {max} are supported")]
    TooManyItems { len: usize, max: usize },
}

/// The ordered, read-only item table every search runs against.
///
/// Position in the catalog is the canonical index used by the searches: a branch only ever
/// extends a selection with items at later positions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "Vec<Item>", into = "Vec<Item>")]
pub struct Catalog {
    items: Vec<Item>,
    positions: HashMap<u32, usize>,
}

impl Catalog {
    /// Upper bound imposed by the enumerators' bitmask state keys.
    pub const MAX_ITEMS: usize = 128;

    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        if items.len() > Self::MAX_ITEMS {
            return Err(CatalogError::TooManyItems {
                len: items.len(),
                max: Self::MAX_ITEMS,
            });
        }
        let mut positions = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if item.id == 0 {
                return Err(CatalogError::InvalidId);
            }
            if item.weight == 0 {
                return Err(CatalogError::InvalidWeight(item.id));
            }
            if positions.insert(item.id, position).is_some() {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self { items, positions })
    }

    /// The fixed grocery table served by default.
    pub fn grocery() -> Self {
        Self::new(vec![
            Item::new(1, "Milk", 8, 2, 3.50),
            Item::new(2, "Bread", 7, 1, 2.50),
            Item::new(3, "Eggs", 9, 1, 3.00),
            Item::new(4, "Cheese", 10, 3, 5.00),
            Item::new(5, "Apples", 6, 2, 4.00),
            Item::new(6, "Chicken", 10, 4, 7.50),
            Item::new(7, "Rice", 7, 3, 2.00),
            Item::new(8, "Pasta", 6, 2, 1.50),
            Item::new(9, "Tomatoes", 7, 1, 3.00),
            Item::new(10, "Cereal", 5, 2, 4.50),
            Item::new(11, "Coffee", 9, 1, 6.00),
            Item::new(12, "Sugar", 4, 2, 2.00),
            Item::new(13, "Flour", 3, 3, 1.50),
            Item::new(14, "Butter", 8, 1, 4.00),
            Item::new(15, "Yogurt", 6, 2, 3.50),
        ])
        .expect("grocery catalog has unique ids and positive weights")
    }

    /// Loads a json array of items, e.g. `[{"id": 1, "name": "Milk", ...}]`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let items = dejsonify_file::<Vec<Item>, _>(path)?;
        Ok(Self::new(items)?)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self, id: u32) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn get(&self, id: u32) -> Result<&Item, CatalogError> {
        self.position(id)
            .map(|position| &self.items[position])
            .ok_or(CatalogError::ItemNotFound(id))
    }
}

impl TryFrom<Vec<Item>> for Catalog {
    type Error = CatalogError;

    fn try_from(items: Vec<Item>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<Catalog> for Vec<Item> {
    fn from(catalog: Catalog) -> Self {
        catalog.items
    }
}
