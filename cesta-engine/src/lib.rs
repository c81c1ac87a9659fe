//! Cesta Engine - list pricing and supermarket filtering
//!
//! The UI-independent core of the cesta client: basket totals over
//! per-supermarket price maps, great-circle radius filtering, and
//! persistent toggle-sets for multi-select. Everything here is synchronous
//! and pure apart from the injected selection store; callers own all
//! values, so the same functions are safe from any number of threads.

pub mod geofilter;
pub mod pricing;
pub mod selection;

pub use geofilter::filter_within_radius;
pub use pricing::{SupermarketTotal, compare_totals, line_total, partial_total_for, total_for};
pub use selection::{MemoryStore, SelectionSet, SelectionStore, StoreError};
