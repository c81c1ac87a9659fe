//! User Model

use serde::{Deserialize, Serialize};

/// Account payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Postal code the premium radius filter centers on once geocoded
    #[serde(default)]
    pub zip_code: String,
    /// Gates the supermarket comparison and geo-filter features
    #[serde(default)]
    pub is_premium: bool,
}
