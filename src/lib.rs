//! geocity — city name to coordinates, with in-process memoization.
//!
//! One operation matters: [`LocationResolver::resolve`]. On a cache miss it
//! issues a single GET to the OpenWeatherMap direct-geocoding endpoint, takes
//! the first candidate, and memoizes the coordinate under the lowercased city
//! name for the rest of the process's lifetime.
//!
//! ```no_run
//! use geocity::{LocationResolver, OpenWeatherFetcher};
//!
//! # async fn demo() -> Result<(), geocity::GeocodeError> {
//! let fetcher = OpenWeatherFetcher::from_env()?;
//! let resolver = LocationResolver::new(Box::new(fetcher));
//!
//! let coord = resolver.resolve("Paris").await?;
//! println!("{}, {}", coord.latitude, coord.longitude);
//! # Ok(())
//! # }
//! ```

pub mod geocode;

pub use geocode::{
    CityRecord, CoordCache, Coordinate, GeocodeError, GeocodeFetcher, LocationResolver,
    OpenWeatherFetcher,
};
