//! Basket Price Calculator
//!
//! Computes list totals against a supermarket's price table:
//! - Full totals over every product in a list
//! - Partial totals restricted to a selection of product ids
//! - Comparison rows across a set of selected supermarkets
//!
//! All arithmetic is integer cents. A product with no listed price at a
//! supermarket contributes zero, never an error: partial catalog data is
//! routine, and the totals still have to render.

use shared::models::{ListProduct, ShoppingList};
use shared::money::Cents;
use std::collections::BTreeSet;

/// One row of a cross-supermarket comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupermarketTotal {
    pub supermarket_id: String,
    pub total: Cents,
}

/// One product's contribution at a supermarket: price-or-zero times quantity.
pub fn line_total(product: &ListProduct, supermarket_id: &str) -> Cents {
    let price = product.prices.get(supermarket_id).copied().unwrap_or(0);
    price * Cents::from(product.quantity)
}

/// Total basket price for a list at one supermarket.
///
/// Sums `price * quantity` over every product with a defined price at that
/// supermarket; the rest contribute zero.
pub fn total_for(list: &ShoppingList, supermarket_id: &str) -> Cents {
    list.products
        .iter()
        .map(|product| line_total(product, supermarket_id))
        .sum()
}

/// Total restricted to the products whose id is in `selected`.
///
/// An empty selection totals zero; selecting every product id reproduces
/// [`total_for`].
pub fn partial_total_for(
    list: &ShoppingList,
    supermarket_id: &str,
    selected: &BTreeSet<String>,
) -> Cents {
    list.products
        .iter()
        .filter(|product| selected.contains(&product.id))
        .map(|product| line_total(product, supermarket_id))
        .sum()
}

/// One comparison row per selected supermarket, in stable id order.
pub fn compare_totals(
    list: &ShoppingList,
    supermarket_ids: &BTreeSet<String>,
) -> Vec<SupermarketTotal> {
    supermarket_ids
        .iter()
        .map(|supermarket_id| SupermarketTotal {
            supermarket_id: supermarket_id.clone(),
            total: total_for(list, supermarket_id),
        })
        .collect()
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to create a product with a price map of (supermarket, cents) pairs
    fn make_product(id: &str, quantity: u32, prices: &[(&str, Cents)]) -> ListProduct {
        ListProduct {
            id: id.to_string(),
            title: format!("Product {id}"),
            brand: "ACME".to_string(),
            quantity,
            prices: prices
                .iter()
                .map(|(market, cents)| (market.to_string(), *cents))
                .collect(),
        }
    }

    fn make_list(products: Vec<ListProduct>) -> ShoppingList {
        ShoppingList {
            id: "l1".to_string(),
            title: "Compras da semana".to_string(),
            products,
        }
    }

    fn ids(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|id| id.to_string()).collect()
    }

    // ==================== Full Total Tests ====================

    #[test]
    fn test_total_sums_price_times_quantity() {
        // 2 x 150 + 1 x 300 = 600 at s1; p1 has no price at s2, so 250 there
        let list = make_list(vec![
            make_product("p1", 2, &[("s1", 150)]),
            make_product("p2", 1, &[("s1", 300), ("s2", 250)]),
        ]);

        assert_eq!(total_for(&list, "s1"), 600);
        assert_eq!(total_for(&list, "s2"), 250);
    }

    #[test]
    fn test_missing_price_contributes_zero() {
        let list = make_list(vec![make_product("p1", 3, &[("s1", 100)])]);

        assert_eq!(total_for(&list, "s2"), 0);
    }

    #[test]
    fn test_empty_list_totals_zero() {
        let list = make_list(vec![]);

        assert_eq!(total_for(&list, "s1"), 0);
    }

    #[test]
    fn test_empty_price_map_totals_zero() {
        let list = make_list(vec![make_product("p1", 5, &[])]);

        assert_eq!(total_for(&list, "s1"), 0);
    }

    #[test]
    fn test_total_never_negative_for_catalog_prices() {
        let list = make_list(vec![
            make_product("p1", 1, &[("s1", 0)]),
            make_product("p2", 4, &[("s1", 25)]),
        ]);

        assert!(total_for(&list, "s1") >= 0);
        assert_eq!(total_for(&list, "s1"), 100);
    }

    // ==================== Line Total Tests ====================

    #[test]
    fn test_line_total() {
        let product = make_product("p1", 3, &[("s1", 199)]);

        assert_eq!(line_total(&product, "s1"), 597);
        assert_eq!(line_total(&product, "s2"), 0);
    }

    // ==================== Partial Total Tests ====================

    #[test]
    fn test_partial_total_empty_selection_is_zero() {
        let list = make_list(vec![
            make_product("p1", 2, &[("s1", 150)]),
            make_product("p2", 1, &[("s1", 300)]),
        ]);

        assert_eq!(partial_total_for(&list, "s1", &BTreeSet::new()), 0);
    }

    #[test]
    fn test_partial_total_over_all_ids_equals_total() {
        let list = make_list(vec![
            make_product("p1", 2, &[("s1", 150)]),
            make_product("p2", 1, &[("s1", 300), ("s2", 250)]),
            make_product("p3", 4, &[("s2", 75)]),
        ]);

        for market in ["s1", "s2", "s3"] {
            assert_eq!(
                partial_total_for(&list, market, &list.product_ids()),
                total_for(&list, market)
            );
        }
    }

    #[test]
    fn test_partial_total_subset() {
        let list = make_list(vec![
            make_product("p1", 2, &[("s1", 150)]),
            make_product("p2", 1, &[("s1", 300)]),
            make_product("p3", 1, &[("s1", 499)]),
        ]);

        assert_eq!(partial_total_for(&list, "s1", &ids(&["p1", "p3"])), 799);
    }

    #[test]
    fn test_partial_total_ignores_unknown_ids() {
        let list = make_list(vec![make_product("p1", 2, &[("s1", 150)])]);

        assert_eq!(partial_total_for(&list, "s1", &ids(&["p1", "ghost"])), 300);
    }

    // ==================== Comparison Tests ====================

    #[test]
    fn test_compare_totals_one_row_per_market() {
        let list = make_list(vec![
            make_product("p1", 2, &[("s1", 150), ("s2", 120)]),
            make_product("p2", 1, &[("s1", 300), ("s2", 250)]),
        ]);

        let rows = compare_totals(&list, &ids(&["s2", "s1"]));

        // BTreeSet iteration keeps rows in stable id order
        assert_eq!(
            rows,
            vec![
                SupermarketTotal {
                    supermarket_id: "s1".to_string(),
                    total: 600,
                },
                SupermarketTotal {
                    supermarket_id: "s2".to_string(),
                    total: 490,
                },
            ]
        );
    }

    #[test]
    fn test_compare_totals_empty_selection() {
        let list = make_list(vec![make_product("p1", 1, &[("s1", 100)])]);

        assert!(compare_totals(&list, &BTreeSet::new()).is_empty());
    }
}
