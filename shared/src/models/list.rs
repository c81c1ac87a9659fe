//! Shopping List Model

use crate::money::Cents;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Default client-side cap on products per saved list.
///
/// A policy constant, not a model invariant: the enforcement site takes the
/// limit as configuration.
pub const DEFAULT_MAX_PRODUCTS: usize = 40;

/// A product entry within a shopping list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListProduct {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub brand: String,
    /// Purchase quantity, at least 1
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Unit price in cents keyed by supermarket id; an absent key means the
    /// product is not sold at that venue
    #[serde(default)]
    pub prices: HashMap<String, Cents>,
}

fn default_quantity() -> u32 {
    1
}

/// A named shopping list
///
/// No two products share an id within one list; product order is display
/// order and irrelevant to pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub products: Vec<ListProduct>,
}

impl ShoppingList {
    /// Ids of every product in the list.
    pub fn product_ids(&self) -> BTreeSet<String> {
        self.products.iter().map(|p| p.id.clone()).collect()
    }
}

/// Create list payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCreate {
    pub title: String,
    #[serde(default)]
    pub products: Vec<ListProduct>,
}

/// Update list payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListUpdate {
    pub title: Option<String>,
    pub products: Option<Vec<ListProduct>>,
}
