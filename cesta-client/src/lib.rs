//! Cesta Client - network and device-storage layer for the shopping-list app
//!
//! Typed calls to the account backend (auth + list CRUD), the product
//! catalog service and the geocoding API, a normalization boundary that
//! turns their loose JSON into the strict `shared` models, and JSON-file
//! persistence for sessions and selections.

pub mod config;
pub mod error;
pub mod geocode;
pub mod http;
pub mod storage;

mod normalize;

pub use config::{ClientConfig, DEFAULT_GEOCODE_URL};
pub use error::{ClientError, ClientResult};
pub use geocode::GeocodeClient;
pub use http::HttpClient;
pub use storage::{FileStore, Session, SessionStorage};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, RegisterRequest};
pub use shared::models::UserInfo;
