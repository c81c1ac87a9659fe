//! Supermarket Geo Filter
//!
//! Radius queries over supermarket coordinates. A pure function of its
//! arguments: re-filtering with unchanged inputs yields the identical set,
//! with no state carried between calls.

use shared::geo::{Coordinates, distance_km};
use shared::models::Supermarket;
use std::collections::BTreeSet;

/// Ids of the supermarkets within `radius_km` of `center`.
///
/// A missing center yields the empty set - never "all", never an error:
/// without a resolved reference point there is no meaningful "nearby".
/// Supermarkets whose coordinates are still unresolved are skipped; a
/// resolved point goes through the literal distance computation with no
/// plausibility check, sentinel (0,0) included.
///
/// Radius 0 keeps only exact-coincident points; a negative radius keeps
/// nothing. Both are documented edge cases, not errors.
pub fn filter_within_radius(
    supermarkets: &[Supermarket],
    center: Option<Coordinates>,
    radius_km: f64,
) -> BTreeSet<String> {
    let Some(center) = center else {
        return BTreeSet::new();
    };

    supermarkets
        .iter()
        .filter_map(|market| {
            let coordinates = market.coordinates?;
            (distance_km(center, coordinates) <= radius_km).then(|| market.id.clone())
        })
        .collect()
}

// ==================== Tests ====================
