//! Supermarket and Catalog Models

use crate::geo::Coordinates;
use crate::money::Cents;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Supermarket entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supermarket {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    /// `None` until the address has been geocoded. Unresolved supermarkets
    /// are skipped by geo filtering but stay selectable by hand.
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

/// Brand lookup entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
}

/// Category lookup entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// A catalog product after normalization: brand and category hold resolved
/// names, not ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    /// Unit price in cents keyed by supermarket id
    #[serde(default)]
    pub prices: HashMap<String, Cents>,
}

/// The normalized product-catalog payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<CatalogProduct>,
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub supermarkets: Vec<Supermarket>,
}
