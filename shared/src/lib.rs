//! Shared types for the cesta shopping-list client
//!
//! Common types used across the engine and client crates: list, product
//! and supermarket models, money helpers, geographic primitives and the
//! auth API DTOs.

pub mod client;
pub mod geo;
pub mod models;
pub mod money;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use geo::Coordinates;
pub use money::Cents;
