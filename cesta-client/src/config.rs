//! Client configuration

use shared::models::DEFAULT_MAX_PRODUCTS;

/// Google Maps geocoding endpoint
pub const DEFAULT_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Client configuration for the account API, product catalog and geocoder
///
/// # Environment variables
///
/// Every field can be supplied through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | BACKEND_CRUD_URL | http://localhost:8000 | Account and list API base URL |
/// | API_PRODUCTS_URL | http://localhost:8001/products | Product catalog endpoint |
/// | GOOGLE_MAPS_API_KEY | (unset) | Geocoding API key |
/// | REQUEST_TIMEOUT_SECS | 30 | Request timeout in seconds |
/// | MAX_LIST_PRODUCTS | 40 | Maximum products per shopping list |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Account API base URL (e.g., "http://localhost:8000")
    pub api_base_url: String,

    /// Product catalog endpoint, absolute (lives on a separate service)
    pub products_url: String,

    /// Geocoding endpoint
    pub geocode_base_url: String,

    /// Geocoding API key
    pub geocode_api_key: Option<String>,

    /// Token for authenticated endpoints
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Maximum number of products accepted on a single list
    pub max_list_products: usize,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(api_base_url: impl Into<String>, products_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            products_url: products_url.into(),
            geocode_base_url: DEFAULT_GEOCODE_URL.to_string(),
            geocode_api_key: None,
            token: None,
            timeout: 30,
            max_list_products: DEFAULT_MAX_PRODUCTS,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("BACKEND_CRUD_URL").unwrap_or_else(|_| "http://localhost:8000".into()),
            std::env::var("API_PRODUCTS_URL")
                .unwrap_or_else(|_| "http://localhost:8001/products".into()),
        );
        config.geocode_api_key = std::env::var("GOOGLE_MAPS_API_KEY").ok();
        config.timeout = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        config.max_list_products = std::env::var("MAX_LIST_PRODUCTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_PRODUCTS);
        config
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the geocoding API key
    pub fn with_geocode_api_key(mut self, key: impl Into<String>) -> Self {
        self.geocode_api_key = Some(key.into());
        self
    }

    /// Override the geocoding endpoint (e.g., for a stub server in tests)
    pub fn with_geocode_base_url(mut self, url: impl Into<String>) -> Self {
        self.geocode_base_url = url.into();
        self
    }

    /// Set the per-list product cap
    pub fn with_max_list_products(mut self, max: usize) -> Self {
        self.max_list_products = max;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }

    /// Create a geocoding client from this configuration
    pub fn build_geocode_client(&self) -> super::GeocodeClient {
        super::GeocodeClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000", "http://localhost:8001/products")
    }
}
