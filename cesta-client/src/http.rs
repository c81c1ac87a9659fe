//! HTTP client for the account, list and catalog APIs

use crate::normalize::{self, RawCatalogPayload, RawList, RawUser};
use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::client::{LoginRequest, LoginResponse, RegisterRequest};
use shared::models::{Catalog, ListCreate, ListUpdate, ShoppingList, UserInfo};
use validator::Validate;

/// HTTP client for making network requests to the backend services
///
/// The account API (auth + lists) hangs off `base_url`; the product catalog
/// is a separate service reached through its own absolute URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    products_url: String,
    token: Option<String>,
    max_list_products: usize,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.api_base_url.clone(),
            products_url: config.products_url.clone(),
            token: config.token.clone(),
            max_list_products: config.max_list_products,
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Drop the token. The backend issues stateless tokens, so logging out
    /// is purely client-side.
    pub fn logout(&mut self) {
        self.token = None;
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Token {}", t))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request, discarding any response body
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let mut request = self.client.delete(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Map error statuses to `ClientError`, passing success through
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        Ok(response)
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(Into::into)
    }

    fn check_product_cap(&self, count: usize) -> ClientResult<()> {
        if count > self.max_list_products {
            return Err(ClientError::Validation(format!(
                "list has {} products, the maximum is {}",
                count, self.max_list_products
            )));
        }
        Ok(())
    }

    // ========== Auth API ==========

    /// Register a new account
    ///
    /// The payload is validated client-side first (the same rules the
    /// registration form enforces), so malformed input never hits the wire.
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<UserInfo> {
        request
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        let raw: RawUser = self.post("register/", request).await?;
        Ok(normalize::normalize_user(raw))
    }

    /// Login with username and password
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        request
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        self.post("login/", &request).await
    }

    /// Get current user information
    pub async fn current_user(&self) -> ClientResult<UserInfo> {
        let raw: RawUser = self.get("accounts/").await?;
        Ok(normalize::normalize_user(raw))
    }

    // ========== Lists API ==========

    /// Fetch the authenticated user's shopping lists
    pub async fn my_lists(&self) -> ClientResult<Vec<ShoppingList>> {
        let raw: Vec<RawList> = self.get("accounts/lists/").await?;
        Ok(raw.into_iter().map(normalize::normalize_list).collect())
    }

    /// Fetch a single shopping list
    pub async fn get_list(&self, id: &str) -> ClientResult<ShoppingList> {
        let raw: RawList = self.get(&format!("lists/{}/", id)).await?;
        Ok(normalize::normalize_list(raw))
    }

    /// Create a shopping list
    pub async fn create_list(&self, payload: &ListCreate) -> ClientResult<ShoppingList> {
        self.check_product_cap(payload.products.len())?;

        let raw: RawList = self.post("lists/", payload).await?;
        Ok(normalize::normalize_list(raw))
    }

    /// Update a shopping list
    pub async fn update_list(&self, id: &str, payload: &ListUpdate) -> ClientResult<ShoppingList> {
        if let Some(products) = &payload.products {
            self.check_product_cap(products.len())?;
        }

        let raw: RawList = self.put(&format!("lists/{}/", id), payload).await?;
        Ok(normalize::normalize_list(raw))
    }

    /// Delete a shopping list
    pub async fn delete_list(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("lists/{}/", id)).await
    }

    // ========== Catalog API ==========

    /// Fetch and normalize the product catalog
    ///
    /// The catalog service is public; no token is attached.
    pub async fn fetch_catalog(&self) -> ClientResult<Catalog> {
        let response = self.client.get(&self.products_url).send().await?;
        let raw: RawCatalogPayload = Self::handle_response(response).await?;
        Ok(normalize::normalize_catalog(raw))
    }
}
