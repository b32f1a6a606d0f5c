//! Primary solar model: NOAA solar-calculator series.
//!
//! Mean longitude, mean anomaly, 3-term equation of center, apparent
//! longitude with the 125.04° − 1934.136T nutation term, corrected
//! obliquity, and the 5-term tan(ε/2) equation of time. Declination good
//! to ~0.01°, boundary times to well under a minute at mid latitudes.

use almanac_time::{julian_centuries, julian_day};

use crate::horizon::assemble_profile;
use crate::types::{GeoLocation, SolarDayProfile, SolarModel};

/// Series-based solar position model.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoaaModel;

/// Sun geometry for one instant: declination and equation of time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunGeometry {
    pub declination_deg: f64,
    pub equation_of_time_min: f64,
}

impl NoaaModel {
    /// Declination and equation of time at a Julian Date.
    pub fn geometry(jd: f64) -> SunGeometry {
        let t = julian_centuries(jd);

        // Geometric mean longitude and anomaly, degrees.
        let l0 = (280.46646 + t * (36_000.76983 + t * 0.0003032)).rem_euclid(360.0);
        let m = 357.52911 + t * (35_999.05029 - 0.0001537 * t);
        // Orbital eccentricity.
        let e = 0.016708634 - t * (0.000042037 + 0.0000001267 * t);

        let m_rad = m.to_radians();
        let equation_of_center = m_rad.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
            + (2.0 * m_rad).sin() * (0.019993 - 0.000101 * t)
            + (3.0 * m_rad).sin() * 0.000289;

        let true_longitude = l0 + equation_of_center;
        let omega_rad = (125.04 - 1934.136 * t).to_radians();
        let apparent_longitude = true_longitude - 0.00569 - 0.00478 * omega_rad.sin();

        let mean_obliquity =
            23.0 + (26.0 + (21.448 - t * (46.815 + t * (0.00059 - t * 0.001813))) / 60.0) / 60.0;
        let obliquity = mean_obliquity + 0.00256 * omega_rad.cos();

        let obliquity_rad = obliquity.to_radians();
        let declination_deg = (obliquity_rad.sin() * apparent_longitude.to_radians().sin())
            .asin()
            .to_degrees();

        let y = (obliquity_rad / 2.0).tan().powi(2);
        let l0_rad = l0.to_radians();
        let equation_of_time_min = 4.0
            * (y * (2.0 * l0_rad).sin() - 2.0 * e * m_rad.sin()
                + 4.0 * e * y * m_rad.sin() * (2.0 * l0_rad).cos()
                - 0.5 * y * y * (4.0 * l0_rad).sin()
                - 1.25 * e * e * (2.0 * m_rad).sin())
            .to_degrees();

        SunGeometry {
            declination_deg,
            equation_of_time_min,
        }
    }
}

impl SolarModel for NoaaModel {
    fn day_profile(
        &self,
        year: i32,
        month: u32,
        day: u32,
        location: GeoLocation,
        utc_offset_hours: f64,
    ) -> SolarDayProfile {
        // Local civil noon expressed in UTC hours.
        let jd_noon = julian_day(year, month, day, 12.0 - utc_offset_hours);
        let geometry = Self::geometry(jd_noon);
        assemble_profile(
            geometry.declination_deg,
            geometry.equation_of_time_min,
            location,
            utc_offset_hours,
        )
    }

    fn name(&self) -> &'static str {
        "noaa"
    }
}
