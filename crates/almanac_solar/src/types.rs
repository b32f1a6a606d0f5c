//! Types for solar day-boundary calculations.
//!
//! Provides the geographic location, the per-day result record, and the
//! strategy trait implemented by the solar position models.

/// Sun-center altitude at sunrise/sunset: 0.833° below the geometric
/// horizon (34′ refraction + 16′ solar semidiameter).
pub const SUNRISE_ALTITUDE_DEG: f64 = -0.833;

/// Sun-center altitude at civil dawn/dusk.
pub const CIVIL_TWILIGHT_ALTITUDE_DEG: f64 = -6.0;

/// Sun-center altitude at nautical dawn/dusk.
pub const NAUTICAL_TWILIGHT_ALTITUDE_DEG: f64 = -12.0;

/// Sun-center altitude at astronomical dawn/dusk.
pub const ASTRO_TWILIGHT_ALTITUDE_DEG: f64 = -18.0;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a new geographic location. Range validity is the caller's
    /// precondition; the upstream request layer sanitizes coordinates.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Sun geometry and day boundaries for one calendar date and location.
///
/// All `*_frac` fields are fractions of the local civil day, saturating
/// into `[0, 1]` at the day boundaries. Outside polar conditions the
/// ordering invariant holds:
///
/// `astro_begin ≤ nautical_begin ≤ civil_begin ≤ sunrise ≤ solar_noon
///  ≤ sunset ≤ civil_end ≤ nautical_end ≤ astro_end`
///
/// Polar day pins every begin-fraction to 0.0 and every end-fraction to
/// 1.0 with `daylength_h = 24`; polar night collapses every fraction to
/// 0.5 with `daylength_h = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDayProfile {
    pub declination_deg: f64,
    pub equation_of_time_min: f64,
    pub solar_noon_frac: f64,
    pub sunrise_frac: f64,
    pub sunset_frac: f64,
    pub civil_begin_frac: f64,
    pub civil_end_frac: f64,
    pub nautical_begin_frac: f64,
    pub nautical_end_frac: f64,
    pub astro_begin_frac: f64,
    pub astro_end_frac: f64,
    pub daylength_h: f64,
}

impl SolarDayProfile {
    /// Continuous-day degenerate profile (sun never sets).
    pub(crate) fn polar_day(
        declination_deg: f64,
        equation_of_time_min: f64,
        solar_noon_frac: f64,
    ) -> Self {
        Self {
            declination_deg,
            equation_of_time_min,
            solar_noon_frac,
            sunrise_frac: 0.0,
            sunset_frac: 1.0,
            civil_begin_frac: 0.0,
            civil_end_frac: 1.0,
            nautical_begin_frac: 0.0,
            nautical_end_frac: 1.0,
            astro_begin_frac: 0.0,
            astro_end_frac: 1.0,
            daylength_h: 24.0,
        }
    }

    /// Continuous-night degenerate profile (sun never rises). Every
    /// fraction collapses to the nominal civil-day midpoint.
    pub(crate) fn polar_night(declination_deg: f64, equation_of_time_min: f64) -> Self {
        Self {
            declination_deg,
            equation_of_time_min,
            solar_noon_frac: 0.5,
            sunrise_frac: 0.5,
            sunset_frac: 0.5,
            civil_begin_frac: 0.5,
            civil_end_frac: 0.5,
            nautical_begin_frac: 0.5,
            nautical_end_frac: 0.5,
            astro_begin_frac: 0.5,
            astro_end_frac: 0.5,
            daylength_h: 0.0,
        }
    }

    /// Whether this profile is the midnight-sun degenerate state.
    pub fn is_polar_day(&self) -> bool {
        self.daylength_h == 24.0
    }

    /// Whether this profile is the polar-night degenerate state.
    pub fn is_polar_night(&self) -> bool {
        self.daylength_h == 0.0
    }
}

/// Strategy seam for solar day-boundary computation.
///
/// Implementations are pure: the same inputs always produce bit-identical
/// output. The engine resolves one implementation at startup; there is no
/// per-call algorithm branching.
pub trait SolarModel {
    /// Compute the full day profile for one calendar date and location.
    ///
    /// `utc_offset_hours` is the civil-day offset from UTC (east positive);
    /// the upstream request layer supplies it already validated.
    fn day_profile(
        &self,
        year: i32,
        month: u32,
        day: u32,
        location: GeoLocation,
        utc_offset_hours: f64,
    ) -> SolarDayProfile;

    /// Short stable identifier for diagnostics.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geolocation_radians() {
        let loc = GeoLocation::new(45.7, 9.6);
        assert!((loc.latitude_rad() - 45.7_f64.to_radians()).abs() < 1e-15);
        assert!((loc.longitude_rad() - 9.6_f64.to_radians()).abs() < 1e-15);
    }

    #[test]
    fn polar_day_shape() {
        let p = SolarDayProfile::polar_day(23.4, 1.5, 0.52);
        assert!(p.is_polar_day());
        assert_eq!(p.sunrise_frac, 0.0);
        assert_eq!(p.astro_end_frac, 1.0);
        assert_eq!(p.solar_noon_frac, 0.52);
    }

    #[test]
    fn polar_night_shape() {
        let p = SolarDayProfile::polar_night(-23.4, -3.0);
        assert!(p.is_polar_night());
        assert_eq!(p.sunrise_frac, 0.5);
        assert_eq!(p.solar_noon_frac, 0.5);
        assert_eq!(p.daylength_h, 0.0);
    }
}
