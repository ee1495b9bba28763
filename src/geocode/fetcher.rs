//! Remote geocoding provider: OpenWeatherMap direct geocoding.
//!
//! The resolver talks to the network through the narrow `GeocodeFetcher`
//! trait so its logic can be tested against stub providers.

use super::types::GeocodeError;
use reqwest::Url;
use serde::Deserialize;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

const DEFAULT_API_URL: &str = "http://api.openweathermap.org";

/// One candidate match from the remote service.
///
/// Only `lat`/`lon` of the first candidate are ultimately consumed; the rest
/// is decoded and discarded. `state` and `local_names` are absent for many
/// records.
#[derive(Deserialize, Debug, Clone)]
pub struct CityRecord {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub local_names: HashMap<String, String>,
}

/// A provider that resolves a city query to candidate matches.
pub trait GeocodeFetcher: Send + Sync {
    /// Fetch candidate matches for a city name. A single attempt; no retries.
    fn query<'a>(
        &'a self,
        city: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<CityRecord>, GeocodeError>> + Send + 'a>>;
}

/// The production provider, backed by `GET /geo/1.0/direct`.
pub struct OpenWeatherFetcher {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherFetcher {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Read the API key from `OPENWEATHER_API_KEY`, and an optional base URL
    /// override from `OPENWEATHER_API_URL`. Key validity is not checked here;
    /// a bad key surfaces as an HTTP error from the service.
    pub fn from_env() -> Result<Self, GeocodeError> {
        let api_key =
            std::env::var("OPENWEATHER_API_KEY").map_err(|_| GeocodeError::MissingApiKey)?;
        let mut fetcher = Self::new(api_key);
        if let Ok(base_url) = std::env::var("OPENWEATHER_API_URL") {
            fetcher.base_url = base_url;
        }
        Ok(fetcher)
    }

    /// Point at a different host (for testing).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the request URL: `{base}/geo/1.0/direct?q={city}&appid={key}`.
    fn request_url(&self, city: &str) -> Result<Url, GeocodeError> {
        let endpoint = format!("{}/geo/1.0/direct", self.base_url);
        Url::parse_with_params(&endpoint, &[("q", city), ("appid", self.api_key.as_str())])
            .map_err(|e| GeocodeError::Network(e.to_string()))
    }
}

impl GeocodeFetcher for OpenWeatherFetcher {
    fn query<'a>(
        &'a self,
        city: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<CityRecord>, GeocodeError>> + Send + 'a>> {
        Box::pin(async move {
            let url = self.request_url(city)?;

            let response = self
                .http
                .get(url)
                .send()
                .await
                .map_err(|e| GeocodeError::Network(e.to_string()))?
                .error_for_status()
                .map_err(|e| GeocodeError::Network(e.to_string()))?;

            response
                .json::<Vec<CityRecord>>()
                .await
                .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))
        })
    }
}
