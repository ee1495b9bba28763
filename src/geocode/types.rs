//! Core types for the geocoding subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved position in WGS84 decimal degrees.
///
/// Both fields are always populated together; a lookup either yields a full
/// coordinate or fails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Geocoding errors.
#[derive(Debug)]
pub enum GeocodeError {
    /// The service returned zero matches for the query.
    NotFound(String),
    /// Connection failure or non-success HTTP status.
    Network(String),
    /// Response body that does not parse as the expected JSON array.
    InvalidResponse(String),
    /// `OPENWEATHER_API_KEY` is not set (raised by `from_env` only; the
    /// library never checks key validity — the service does).
    MissingApiKey,
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(q) => write!(f, "No results found for '{}'", q),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid API response: {}", msg),
            Self::MissingApiKey => {
                write!(f, "OPENWEATHER_API_KEY is not set")
            }
        }
    }
}

impl std::error::Error for GeocodeError {}
