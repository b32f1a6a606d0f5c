//! Caller-owned almanac engine.
//!
//! [`Engine`] bundles the solar strategy and every memo cache behind the
//! public operation surface: sun times, equinoxes/solstices, lunar
//! phases, and daylength percentiles. The solar model is resolved exactly
//! once at construction; there is no per-call algorithm branching. One
//! engine per run/worker — concurrent mutation of a single engine is out
//! of contract, and independent engines always agree because every
//! computation is a pure function of its inputs.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

use almanac_moon::{LunarPhaseEvent, LunarPhaseWindow};
use almanac_seasons::EquinoxSolsticeSet;
use almanac_solar::{ApproxModel, GeoLocation, NoaaModel, SolarDayProfile, SolarModel};
use almanac_stats::{BoundedCache, CacheStats, DISTRIBUTION_CACHE_CEILING, DaylightStats};

/// Solar strategy selection, applied once at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolarModelKind {
    /// Resolve to the best available model (the series model).
    #[default]
    Auto,
    /// The NOAA-series model.
    HighPrecision,
    /// The low-precision fallback with the identical output contract.
    Approximate,
}

/// Engine configuration used at startup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub solar_model: SolarModelKind,
    /// Ceiling for the per-day sun-times memo cache.
    pub sun_cache_capacity: usize,
    /// Ceiling for the yearly daylength-distribution cache.
    pub distribution_cache_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            solar_model: SolarModelKind::Auto,
            sun_cache_capacity: 1024,
            distribution_cache_capacity: DISTRIBUTION_CACHE_CEILING,
        }
    }
}

impl EngineConfig {
    fn validate(&self) -> Result<(), EngineError> {
        if self.sun_cache_capacity == 0 {
            return Err(EngineError::InvalidConfig(
                "sun_cache_capacity must be greater than zero",
            ));
        }
        if self.distribution_cache_capacity == 0 {
            return Err(EngineError::InvalidConfig(
                "distribution_cache_capacity must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Core engine errors. Construction is the only fallible path: every
/// post-construction operation is pure and total over validated inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    InvalidConfig(&'static str),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for EngineError {}

/// Almanac query engine owning the solar strategy and all memo caches.
pub struct Engine {
    config: EngineConfig,
    model: Box<dyn SolarModel>,
    sun_cache: BoundedCache<SolarDayProfile>,
    season_cache: HashMap<i32, EquinoxSolsticeSet>,
    phase_cache: HashMap<(i32, u32), Vec<LunarPhaseEvent>>,
    stats: DaylightStats,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("model", &self.model.name())
            .field("cached_sun_profiles", &self.sun_cache.len())
            .field("cached_seasons", &self.season_cache.len())
            .field("cached_phase_months", &self.phase_cache.len())
            .finish()
    }
}

impl Engine {
    /// Create an engine, resolving the solar strategy once.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let model: Box<dyn SolarModel> = match config.solar_model {
            SolarModelKind::Auto | SolarModelKind::HighPrecision => Box::new(NoaaModel),
            SolarModelKind::Approximate => Box::new(ApproxModel),
        };
        Ok(Self {
            config,
            model,
            sun_cache: BoundedCache::new(config.sun_cache_capacity),
            season_cache: HashMap::new(),
            phase_cache: HashMap::new(),
            stats: DaylightStats::with_capacity(config.distribution_cache_capacity),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Identifier of the resolved solar model.
    pub fn model_name(&self) -> &'static str {
        self.model.name()
    }

    /// Sun geometry and day boundaries for one date and location, memoized
    /// on the fixed-precision input key.
    pub fn sun_times(
        &mut self,
        year: i32,
        month: u32,
        day: u32,
        lat: f64,
        lon: f64,
        utc_offset_hours: f64,
    ) -> SolarDayProfile {
        let key = format!("{year}-{month:02}-{day:02}:{lat:.4}:{lon:.4}:{utc_offset_hours:.2}");
        let model = self.model.as_ref();
        *self.sun_cache.get_or_insert_with(&key, || {
            model.day_profile(year, month, day, GeoLocation::new(lat, lon), utc_offset_hours)
        })
    }

    /// The year's four cardinal instants in UTC, memoized per year.
    pub fn equinoxes_solstices(&mut self, year: i32) -> EquinoxSolsticeSet {
        *self
            .season_cache
            .entry(year)
            .or_insert_with(|| almanac_seasons::equinoxes_solstices(year))
    }

    /// Named lunar phase instants around a month, memoized per month.
    pub fn phases_for_month(&mut self, year: i32, month: u32) -> Vec<LunarPhaseEvent> {
        self.phase_cache
            .entry((year, month))
            .or_insert_with(|| almanac_moon::phases_for_month(year, month))
            .clone()
    }

    /// Phase window around one UTC instant.
    pub fn phase_at(&self, unix: i64) -> LunarPhaseWindow {
        almanac_moon::phase_at(unix)
    }

    /// Percentile rank of a daylength within its year at a location.
    pub fn percentile(
        &mut self,
        daylength_h: f64,
        lat: f64,
        lon: f64,
        year: i32,
        utc_offset_hours: f64,
    ) -> f64 {
        self.stats.percentile(
            self.model.as_ref(),
            daylength_h,
            lat,
            lon,
            year,
            utc_offset_hours,
        )
    }

    /// Telemetry for the sun-times memo cache.
    pub fn sun_cache_stats(&self) -> CacheStats {
        self.sun_cache.stats()
    }

    /// Telemetry for the distribution cache.
    pub fn distribution_cache_stats(&self) -> CacheStats {
        self.stats.cache_stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds() {
        let engine = Engine::new(EngineConfig::default()).expect("default config should be valid");
        assert_eq!(engine.model_name(), "noaa");
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = EngineConfig {
            sun_cache_capacity: 0,
            ..Default::default()
        };
        assert!(matches!(
            Engine::new(config),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn approximate_model_is_selectable() {
        let config = EngineConfig {
            solar_model: SolarModelKind::Approximate,
            ..Default::default()
        };
        let engine = Engine::new(config).expect("config should be valid");
        assert_eq!(engine.model_name(), "approx");
    }

    #[test]
    fn sun_times_memoizes() {
        let mut engine = Engine::new(EngineConfig::default()).expect("valid config");
        let a = engine.sun_times(2026, 2, 1, 45.7, 9.6, 1.0);
        let b = engine.sun_times(2026, 2, 1, 45.7, 9.6, 1.0);
        assert_eq!(a, b);
        let s = engine.sun_cache_stats();
        assert_eq!((s.hits, s.misses), (1, 1));
    }
}
