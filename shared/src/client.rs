//! Auth API DTOs
//!
//! Request/response types for the CRUD backend's account endpoints,
//! shared between the client layer and callers. Field rules mirror the
//! backend's form validation so bad payloads are rejected before any
//! network call.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 4, message = "username must have at least 4 characters"))]
    pub username: String,
    #[validate(length(min = 6, message = "password must have at least 6 characters"))]
    pub password: String,
}

/// Register request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 4, message = "username must have at least 4 characters"))]
    pub username: String,
    #[validate(email(message = "invalid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must have at least 6 characters"))]
    pub password: String,
}

/// Login response data
///
/// The backend issues an opaque account token; there is no server-side
/// session to tear down on logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
