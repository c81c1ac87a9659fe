//! Payload normalization
//!
//! The account and catalog backends are loose about shapes: ids arrive as
//! JSON strings or numbers, product titles under `title` or `name`,
//! quantities missing or zero, and catalog products reference brands and
//! categories by id. This boundary reconciles all of it into the strict
//! `shared` models, so nothing downstream ever branches on which field
//! name a payload happened to use.

use serde::Deserialize;
use shared::Cents;
use shared::models::{
    Brand, Catalog, CatalogProduct, Category, ListProduct, ShoppingList, Supermarket, UserInfo,
};
use std::collections::HashMap;

// ==================== Wire Shapes ====================

/// An id as the backend writes it: sometimes a string, sometimes a number
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum IdRepr {
    Text(String),
    Number(i64),
}

impl IdRepr {
    fn into_string(self) -> String {
        match self {
            IdRepr::Text(text) => text,
            IdRepr::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawListProduct {
    id: IdRepr,
    title: Option<String>,
    name: Option<String>,
    brand: Option<String>,
    quantity: Option<u32>,
    #[serde(default)]
    prices: HashMap<String, Cents>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawList {
    id: IdRepr,
    title: Option<String>,
    name: Option<String>,
    #[serde(default)]
    products: Vec<RawListProduct>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawUser {
    id: IdRepr,
    username: String,
    email: Option<String>,
    zip_code: Option<String>,
    #[serde(default)]
    is_premium: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCatalogProduct {
    id: IdRepr,
    title: Option<String>,
    name: Option<String>,
    brand_id: Option<IdRepr>,
    category_id: Option<IdRepr>,
    #[serde(default)]
    prices: HashMap<String, Cents>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLookupEntry {
    id: IdRepr,
    name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSupermarket {
    id: IdRepr,
    name: String,
    address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCatalogPayload {
    #[serde(default)]
    products: Vec<RawCatalogProduct>,
    #[serde(default)]
    brands: Vec<RawLookupEntry>,
    #[serde(default)]
    categories: Vec<RawLookupEntry>,
    #[serde(default)]
    supermarkets: Vec<RawSupermarket>,
}

// ==================== Normalization ====================

fn display_title(title: Option<String>, name: Option<String>) -> String {
    title.or(name).unwrap_or_default()
}

fn normalize_list_product(raw: RawListProduct) -> ListProduct {
    ListProduct {
        id: raw.id.into_string(),
        title: display_title(raw.title, raw.name),
        brand: raw.brand.unwrap_or_default(),
        // Missing quantity means one unit; zero is clamped to keep the
        // at-least-1 model rule.
        quantity: raw.quantity.unwrap_or(1).max(1),
        prices: raw.prices,
    }
}

pub(crate) fn normalize_list(raw: RawList) -> ShoppingList {
    ShoppingList {
        id: raw.id.into_string(),
        title: display_title(raw.title, raw.name),
        products: raw
            .products
            .into_iter()
            .map(normalize_list_product)
            .collect(),
    }
}

pub(crate) fn normalize_user(raw: RawUser) -> UserInfo {
    UserInfo {
        id: raw.id.into_string(),
        username: raw.username,
        email: raw.email.unwrap_or_default(),
        zip_code: raw.zip_code.unwrap_or_default(),
        is_premium: raw.is_premium,
    }
}

/// Join catalog products to their brand and category names and strip the
/// id indirection. An id with no lookup entry resolves to an empty name.
pub(crate) fn normalize_catalog(raw: RawCatalogPayload) -> Catalog {
    let brands: Vec<Brand> = raw
        .brands
        .into_iter()
        .map(|entry| Brand {
            id: entry.id.into_string(),
            name: entry.name,
        })
        .collect();
    let categories: Vec<Category> = raw
        .categories
        .into_iter()
        .map(|entry| Category {
            id: entry.id.into_string(),
            name: entry.name,
        })
        .collect();

    let brand_names: HashMap<&str, &str> = brands
        .iter()
        .map(|brand| (brand.id.as_str(), brand.name.as_str()))
        .collect();
    let category_names: HashMap<&str, &str> = categories
        .iter()
        .map(|category| (category.id.as_str(), category.name.as_str()))
        .collect();

    let products = raw
        .products
        .into_iter()
        .map(|product| {
            let brand = product
                .brand_id
                .map(IdRepr::into_string)
                .and_then(|id| brand_names.get(id.as_str()).copied())
                .unwrap_or_default()
                .to_string();
            let category = product
                .category_id
                .map(IdRepr::into_string)
                .and_then(|id| category_names.get(id.as_str()).copied())
                .unwrap_or_default()
                .to_string();
            CatalogProduct {
                id: product.id.into_string(),
                name: display_title(product.title, product.name),
                brand,
                category,
                prices: product.prices,
            }
        })
        .collect();

    let supermarkets = raw
        .supermarkets
        .into_iter()
        .map(|market| Supermarket {
            id: market.id.into_string(),
            name: market.name,
            address: market.address.unwrap_or_default(),
            // Coordinates are resolved later by geocoding the address
            coordinates: None,
        })
        .collect();

    Catalog {
        products,
        brands,
        categories,
        supermarkets,
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_ids_are_stringified() {
        let raw: RawList = serde_json::from_value(json!({
            "id": 7,
            "title": "Feira",
            "products": [{"id": 12, "title": "Arroz"}]
        }))
        .unwrap();

        let list = normalize_list(raw);

        assert_eq!(list.id, "7");
        assert_eq!(list.products[0].id, "12");
    }

    #[test]
    fn test_name_field_falls_back_for_title() {
        let raw: RawList = serde_json::from_value(json!({
            "id": "l1",
            "name": "Churrasco",
            "products": [{"id": "p1", "name": "Carvao"}]
        }))
        .unwrap();

        let list = normalize_list(raw);

        assert_eq!(list.title, "Churrasco");
        assert_eq!(list.products[0].title, "Carvao");
    }

    #[test]
    fn test_title_wins_over_name() {
        let raw: RawListProduct = serde_json::from_value(json!({
            "id": "p1",
            "title": "Arroz Integral",
            "name": "arroz-integral"
        }))
        .unwrap();

        assert_eq!(normalize_list_product(raw).title, "Arroz Integral");
    }

    #[test]
    fn test_quantity_defaults_and_clamps() {
        let missing: RawListProduct =
            serde_json::from_value(json!({"id": "p1", "title": "Arroz"})).unwrap();
        assert_eq!(normalize_list_product(missing).quantity, 1);

        let zero: RawListProduct =
            serde_json::from_value(json!({"id": "p1", "title": "Arroz", "quantity": 0})).unwrap();
        assert_eq!(normalize_list_product(zero).quantity, 1);

        let given: RawListProduct =
            serde_json::from_value(json!({"id": "p1", "title": "Arroz", "quantity": 3})).unwrap();
        assert_eq!(normalize_list_product(given).quantity, 3);
    }

    #[test]
    fn test_missing_prices_become_empty_map() {
        let raw: RawListProduct =
            serde_json::from_value(json!({"id": "p1", "title": "Arroz"})).unwrap();

        assert!(normalize_list_product(raw).prices.is_empty());
    }

    #[test]
    fn test_catalog_join_resolves_names() {
        let raw: RawCatalogPayload = serde_json::from_value(json!({
            "products": [
                {"id": 1, "name": "Arroz", "brand_id": 10, "category_id": "graos",
                 "prices": {"s1": 2199}}
            ],
            "brands": [{"id": 10, "name": "Tio Joao"}],
            "categories": [{"id": "graos", "name": "Graos"}],
            "supermarkets": [{"id": 5, "name": "Mercado Azul", "address": "Av. Paulista, 1000"}]
        }))
        .unwrap();

        let catalog = normalize_catalog(raw);

        let product = &catalog.products[0];
        assert_eq!(product.id, "1");
        assert_eq!(product.brand, "Tio Joao");
        assert_eq!(product.category, "Graos");
        assert_eq!(product.prices.get("s1"), Some(&2199));

        let market = &catalog.supermarkets[0];
        assert_eq!(market.id, "5");
        assert_eq!(market.address, "Av. Paulista, 1000");
        assert!(market.coordinates.is_none());
    }

    #[test]
    fn test_unknown_brand_id_resolves_empty() {
        let raw: RawCatalogPayload = serde_json::from_value(json!({
            "products": [{"id": "p1", "name": "Cafe", "brand_id": 99}],
            "brands": [{"id": 10, "name": "Tio Joao"}]
        }))
        .unwrap();

        let catalog = normalize_catalog(raw);

        assert_eq!(catalog.products[0].brand, "");
        assert_eq!(catalog.products[0].category, "");
    }

    #[test]
    fn test_user_payload_normalizes() {
        let raw: RawUser = serde_json::from_value(json!({
            "id": 3,
            "username": "maria",
            "zip_code": "01310-100",
            "is_premium": true
        }))
        .unwrap();

        let user = normalize_user(raw);

        assert_eq!(user.id, "3");
        assert_eq!(user.email, "");
        assert_eq!(user.zip_code, "01310-100");
        assert!(user.is_premium);
    }
}
