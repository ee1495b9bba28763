//! Location resolver — cache in front of the remote provider.
//!
//! Flow: lowercase the query → cache hit → return; cache miss → one remote
//! call → first candidate wins → cache → return. Failures never touch the
//! cache, so the next call for the same city tries the network again.

use super::cache::CoordCache;
use super::fetcher::GeocodeFetcher;
use super::types::{Coordinate, GeocodeError};

/// Resolves city names to coordinates, memoizing successful lookups for the
/// life of the process.
pub struct LocationResolver {
    cache: CoordCache,
    fetcher: Box<dyn GeocodeFetcher>,
}

impl LocationResolver {
    /// Create a resolver with a fresh empty cache.
    pub fn new(fetcher: Box<dyn GeocodeFetcher>) -> Self {
        Self::with_cache(fetcher, CoordCache::new())
    }

    /// Create a resolver with a specific cache (for testing, or to share one
    /// cache across resolvers).
    pub fn with_cache(fetcher: Box<dyn GeocodeFetcher>, cache: CoordCache) -> Self {
        Self { cache, fetcher }
    }

    /// Resolve a city name to its coordinate.
    ///
    /// The input is lowercased before use as the cache key and in the remote
    /// request. It is deliberately not trimmed: a query with stray whitespace
    /// is a distinct key and goes to the service as-is.
    ///
    /// At most one outbound request per call, and no retries. Concurrent
    /// calls for the same city may each issue a request; last write wins.
    pub async fn resolve(&self, city: &str) -> Result<Coordinate, GeocodeError> {
        let normalized = city.to_lowercase();

        if let Some(coord) = self.cache.get(&normalized).await {
            return Ok(coord);
        }

        let records = self.fetcher.query(&normalized).await?;
        let first = records
            .first()
            .ok_or_else(|| GeocodeError::NotFound(normalized.clone()))?;

        let coord = Coordinate {
            latitude: first.lat,
            longitude: first.lon,
        };
        self.cache.insert(&normalized, coord).await;
        Ok(coord)
    }

    /// The resolver's cache (for testing and shared-cache setups).
    pub fn cache(&self) -> &CoordCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::fetcher::CityRecord;
    use approx::assert_relative_eq;
    use std::collections::HashMap;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Stub provider: canned response, counts calls, records queries.
    struct StubFetcher {
        response: Result<Vec<CityRecord>, String>,
        calls: Arc<AtomicUsize>,
    }

    impl StubFetcher {
        fn with_records(records: Vec<CityRecord>) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    response: Ok(records),
                    calls: calls.clone(),
                },
                calls,
            )
        }

        fn failing(message: &str) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    response: Err(message.to_string()),
                    calls: calls.clone(),
                },
                calls,
            )
        }
    }

    impl GeocodeFetcher for StubFetcher {
        fn query<'a>(
            &'a self,
            _city: &'a str,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<CityRecord>, GeocodeError>> + Send + 'a>>
        {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let response = self.response.clone();
            Box::pin(async move { response.map_err(GeocodeError::Network) })
        }
    }

    fn record(name: &str, lat: f64, lon: f64) -> CityRecord {
        CityRecord {
            name: name.to_string(),
            lat,
            lon,
            country: "FR".to_string(),
            state: None,
            local_names: HashMap::new(),
        }
    }

    #[tokio::test]
    async fn test_cache_idempotence() {
        let (stub, calls) = StubFetcher::with_records(vec![record("Paris", 48.8566, 2.3522)]);
        let resolver = LocationResolver::new(Box::new(stub));

        let first = resolver.resolve("Paris").await.unwrap();
        let second = resolver.resolve("Paris").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_case_insensitive_cache_key() {
        let (stub, calls) = StubFetcher::with_records(vec![record("Paris", 48.8566, 2.3522)]);
        let resolver = LocationResolver::new(Box::new(stub));

        resolver.resolve("Paris").await.unwrap();
        resolver.resolve("PARIS").await.unwrap();
        resolver.resolve("paris").await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(resolver.cache().len().await, 1);
    }

    #[tokio::test]
    async fn test_empty_result_is_not_found_and_not_cached() {
        let (stub, calls) = StubFetcher::with_records(vec![]);
        let resolver = LocationResolver::new(Box::new(stub));

        let err = resolver.resolve("Nowhereville").await.unwrap_err();
        assert!(matches!(err, GeocodeError::NotFound(_)));
        assert!(resolver.cache().is_empty().await);

        // The failure was not memoized: the next call hits the network again.
        let _ = resolver.resolve("Nowhereville").await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_first_match_wins() {
        let (stub, _) = StubFetcher::with_records(vec![
            record("Paris", 1.0, 2.0),
            record("Paris", 9.0, 9.0),
        ]);
        let resolver = LocationResolver::new(Box::new(stub));

        let coord = resolver.resolve("Paris").await.unwrap();
        assert_relative_eq!(coord.latitude, 1.0);
        assert_relative_eq!(coord.longitude, 2.0);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let (stub, _) = StubFetcher::failing("connection refused");
        let resolver = LocationResolver::new(Box::new(stub));

        let err = resolver.resolve("Paris").await.unwrap_err();
        assert!(matches!(err, GeocodeError::Network(_)));
        assert!(resolver.cache().is_empty().await);
    }

    #[tokio::test]
    async fn test_whitespace_not_trimmed() {
        let (stub, calls) = StubFetcher::with_records(vec![record("Paris", 48.8566, 2.3522)]);
        let resolver = LocationResolver::new(Box::new(stub));

        resolver.resolve("paris").await.unwrap();
        resolver.resolve(" paris").await.unwrap();

        // Distinct keys, distinct requests.
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(resolver.cache().len().await, 2);
    }

    #[tokio::test]
    async fn test_injected_cache_is_shared() {
        let cache = CoordCache::new();
        cache
            .insert(
                "tokyo",
                Coordinate {
                    latitude: 35.6762,
                    longitude: 139.6503,
                },
            )
            .await;

        let (stub, calls) = StubFetcher::with_records(vec![record("Tokyo", 0.0, 0.0)]);
        let resolver = LocationResolver::with_cache(Box::new(stub), cache);

        let coord = resolver.resolve("Tokyo").await.unwrap();
        assert_relative_eq!(coord.latitude, 35.6762);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
