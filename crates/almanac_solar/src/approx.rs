//! Fallback solar model: cosine declination + harmonic equation of time.
//!
//! The classic solar-engineering approximation (Cooper declination, two
//! harmonics of the equation of time). Boundary times land within a few
//! minutes of the series model — enough to honor the same output contract
//! when the high-precision path is not wanted.

use almanac_time::days_in_month;

use crate::horizon::assemble_profile;
use crate::types::{GeoLocation, SolarDayProfile, SolarModel};

/// Low-precision solar position model.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxModel;

fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    (1..month).map(|m| days_in_month(year, m)).sum::<u32>() + day
}

impl SolarModel for ApproxModel {
    fn day_profile(
        &self,
        year: i32,
        month: u32,
        day: u32,
        location: GeoLocation,
        utc_offset_hours: f64,
    ) -> SolarDayProfile {
        let n = day_of_year(year, month, day) as f64;

        let declination_deg =
            23.45 * (360.0 / 365.0 * (284.0 + n)).to_radians().sin();

        let b = (360.0 * (n - 81.0) / 364.0).to_radians();
        let equation_of_time_min =
            9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin();

        assemble_profile(
            declination_deg,
            equation_of_time_min,
            location,
            utc_offset_hours,
        )
    }

    fn name(&self) -> &'static str {
        "approx"
    }
}
