//! Geocoding subsystem for geocity.
//!
//! Resolves city names to coordinates via OpenWeatherMap direct geocoding,
//! memoizing successful lookups in an in-process cache.

pub mod cache;
pub mod fetcher;
pub mod resolver;
pub mod types;

pub use cache::CoordCache;
pub use fetcher::{CityRecord, GeocodeFetcher, OpenWeatherFetcher};
pub use resolver::LocationResolver;
pub use types::{Coordinate, GeocodeError};
