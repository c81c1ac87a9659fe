//! Geocoding client
//!
//! Resolves street addresses and postal codes to coordinates through the
//! Google Maps Geocoding API. Supermarket addresses and the user's zip
//! code both go through here before radius filtering.

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::Client;
use serde::Deserialize;
use shared::geo::Coordinates;

/// Client for the geocoding API
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

impl GeocodeClient {
    /// Create a new geocoding client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.geocode_base_url.clone(),
            api_key: config.geocode_api_key.clone(),
        }
    }

    /// Resolve an address or postal code to coordinates
    ///
    /// `Ok(None)` means the service answered but found nothing
    /// (`ZERO_RESULTS` and the other non-OK statuses); the venue stays
    /// unresolved. Transport failures surface as errors - retrying is the
    /// caller's call.
    pub async fn geocode(&self, address: &str) -> ClientResult<Option<Coordinates>> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(ClientError::Validation(
                "geocoding API key is not configured".to_string(),
            ));
        };

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("address", address), ("key", api_key)])
            .send()
            .await?;

        let payload: GeocodeResponse = response.json().await?;
        if payload.status != "OK" {
            tracing::debug!(address = %address, status = %payload.status, "Geocoding returned no result");
        }
        Ok(Self::first_location(payload))
    }

    /// First result's location for an OK payload, `None` otherwise
    fn first_location(payload: GeocodeResponse) -> Option<Coordinates> {
        if payload.status != "OK" {
            return None;
        }
        payload.results.into_iter().next().map(|result| {
            Coordinates::new(result.geometry.location.lat, result.geometry.location.lng)
        })
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_payload_yields_first_location() {
        let payload: GeocodeResponse = serde_json::from_value(json!({
            "status": "OK",
            "results": [
                {"geometry": {"location": {"lat": -23.5505, "lng": -46.6333}}},
                {"geometry": {"location": {"lat": 0.0, "lng": 0.0}}}
            ]
        }))
        .unwrap();

        let location = GeocodeClient::first_location(payload).unwrap();
        assert_eq!(location.latitude, -23.5505);
        assert_eq!(location.longitude, -46.6333);
    }

    #[test]
    fn test_zero_results_yields_none() {
        let payload: GeocodeResponse = serde_json::from_value(json!({
            "status": "ZERO_RESULTS",
            "results": []
        }))
        .unwrap();

        assert!(GeocodeClient::first_location(payload).is_none());
    }

    #[test]
    fn test_ok_with_empty_results_yields_none() {
        let payload: GeocodeResponse = serde_json::from_value(json!({
            "status": "OK",
            "results": []
        }))
        .unwrap();

        assert!(GeocodeClient::first_location(payload).is_none());
    }

    #[test]
    fn test_missing_results_field_tolerated() {
        let payload: GeocodeResponse =
            serde_json::from_value(json!({"status": "REQUEST_DENIED"})).unwrap();

        assert!(GeocodeClient::first_location(payload).is_none());
    }
}
