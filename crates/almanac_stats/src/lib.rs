//! Day-length statistics over a full-year distribution.
//!
//! Ranks a day's daylight duration against every day of its year. The
//! O(365) distribution build is amortized by a bounded, caller-owned
//! cache keyed on (lat, lon, year, UTC offset) at fixed precision.

pub mod cache;

use almanac_solar::{GeoLocation, SolarModel};
use almanac_time::{days_in_month, is_leap_year};

pub use cache::{BoundedCache, CacheStats};

/// Default ceiling for the distribution cache.
pub const DISTRIBUTION_CACHE_CEILING: usize = 100;

/// Fixed-precision cache key: 4 decimals for coordinates, 2 for the UTC
/// offset.
pub fn distribution_key(lat: f64, lon: f64, year: i32, utc_offset_hours: f64) -> String {
    format!("{lat:.4}:{lon:.4}:{year}:{utc_offset_hours:.2}")
}

/// Build one year's daylength distribution, sorted ascending.
///
/// One pure model evaluation per calendar day; 366 entries in Gregorian
/// leap years, 365 otherwise.
pub fn build_distribution(
    model: &dyn SolarModel,
    lat: f64,
    lon: f64,
    year: i32,
    utc_offset_hours: f64,
) -> Vec<f64> {
    let location = GeoLocation::new(lat, lon);
    let mut daylengths = Vec::with_capacity(if is_leap_year(year) { 366 } else { 365 });
    for month in 1..=12 {
        for day in 1..=days_in_month(year, month) {
            daylengths.push(
                model
                    .day_profile(year, month, day, location, utc_offset_hours)
                    .daylength_h,
            );
        }
    }
    daylengths.sort_by(f64::total_cmp);
    daylengths
}

/// Percentile rank of a daylength within a sorted distribution:
/// `100 × (entries strictly less) / total`.
pub fn percentile_of(sorted: &[f64], daylength_h: f64) -> f64 {
    let strictly_less = sorted.partition_point(|&x| x < daylength_h);
    100.0 * strictly_less as f64 / sorted.len() as f64
}

/// Day-length statistics with the yearly-distribution cache.
///
/// Owns one cache instance for the lifetime of a run. Not for concurrent
/// mutation: each worker owns its own instance.
#[derive(Debug)]
pub struct DaylightStats {
    cache: BoundedCache<Vec<f64>>,
}

impl DaylightStats {
    pub fn new() -> Self {
        Self::with_capacity(DISTRIBUTION_CACHE_CEILING)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: BoundedCache::new(capacity),
        }
    }

    /// Percentile rank of `daylength_h` within its year at this location.
    ///
    /// Builds (and caches) the year's distribution on first use of the
    /// (lat, lon, year, offset) key.
    pub fn percentile(
        &mut self,
        model: &dyn SolarModel,
        daylength_h: f64,
        lat: f64,
        lon: f64,
        year: i32,
        utc_offset_hours: f64,
    ) -> f64 {
        let key = distribution_key(lat, lon, year, utc_offset_hours);
        let distribution = self
            .cache
            .get_or_insert_with(&key, || {
                build_distribution(model, lat, lon, year, utc_offset_hours)
            });
        percentile_of(distribution, daylength_h)
    }

    /// Cache telemetry for this run.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Number of cached distributions.
    pub fn cached_years(&self) -> usize {
        self.cache.len()
    }
}

impl Default for DaylightStats {
    fn default() -> Self {
        Self::new()
    }
}
