//! Data models
//!
//! The strict internal shapes every core computation runs on. Server
//! payloads are looser than these; the client crate's normalization
//! boundary maps them in before anything else sees them.

pub mod list;
pub mod supermarket;
pub mod user;

// Re-exports
pub use list::*;
pub use supermarket::*;
pub use user::*;
