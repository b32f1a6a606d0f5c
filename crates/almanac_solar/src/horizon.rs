//! Hour-angle geometry shared by every solar model.
//!
//! Turns a (declination, equation-of-time) pair into the full day profile:
//! solar noon from the transit correction, one hour angle per altitude
//! threshold, and the polar-case policy.

use crate::types::{
    ASTRO_TWILIGHT_ALTITUDE_DEG, CIVIL_TWILIGHT_ALTITUDE_DEG, GeoLocation,
    NAUTICAL_TWILIGHT_ALTITUDE_DEG, SUNRISE_ALTITUDE_DEG, SolarDayProfile,
};

/// Raw hour-angle cosine for a target sun-center altitude.
///
/// `cos H = (sin h − sin φ·sin δ) / (cos φ·cos δ)`. Values outside [−1, 1]
/// mean the sun never reaches the altitude in that direction.
fn hour_angle_cos(latitude_deg: f64, declination_deg: f64, altitude_deg: f64) -> f64 {
    let phi = latitude_deg.to_radians();
    let dec = declination_deg.to_radians();
    let h = altitude_deg.to_radians();
    (h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())
}

/// Hour angle in degrees for a target altitude, saturating at 0°/180°.
///
/// The clamp is the one mandatory numeric guard in the whole engine: it
/// keeps `acos` inside its domain so no input can produce NaN.
fn hour_angle_deg(latitude_deg: f64, declination_deg: f64, altitude_deg: f64) -> f64 {
    hour_angle_cos(latitude_deg, declination_deg, altitude_deg)
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees()
}

fn clamp_frac(frac: f64) -> f64 {
    frac.clamp(0.0, 1.0)
}

/// Assemble the day profile from one date's solar geometry.
///
/// Polar status is decided once, from the sunrise threshold: if its raw
/// cosine leaves [−1, 1], the sign of the noon elevation `90 − |φ − δ|`
/// selects continuous day or continuous night for the entire profile.
/// Twilight thresholds are never tested for polar status on their own;
/// they saturate through the hour-angle clamp instead.
pub(crate) fn assemble_profile(
    declination_deg: f64,
    equation_of_time_min: f64,
    location: GeoLocation,
    utc_offset_hours: f64,
) -> SolarDayProfile {
    let solar_noon_frac = clamp_frac(
        (720.0 - 4.0 * location.longitude_deg - equation_of_time_min + utc_offset_hours * 60.0)
            / 1440.0,
    );

    let sunrise_cos = hour_angle_cos(location.latitude_deg, declination_deg, SUNRISE_ALTITUDE_DEG);
    if !(-1.0..=1.0).contains(&sunrise_cos) {
        let noon_elevation_deg = 90.0 - (location.latitude_deg - declination_deg).abs();
        return if noon_elevation_deg > 0.0 {
            SolarDayProfile::polar_day(declination_deg, equation_of_time_min, solar_noon_frac)
        } else {
            SolarDayProfile::polar_night(declination_deg, equation_of_time_min)
        };
    }

    // H degrees → day fraction: 4 minutes of time per degree.
    let half_width = |altitude_deg: f64| {
        hour_angle_deg(location.latitude_deg, declination_deg, altitude_deg) * 4.0 / 1440.0
    };

    let sunrise_half = half_width(SUNRISE_ALTITUDE_DEG);
    let civil_half = half_width(CIVIL_TWILIGHT_ALTITUDE_DEG);
    let nautical_half = half_width(NAUTICAL_TWILIGHT_ALTITUDE_DEG);
    let astro_half = half_width(ASTRO_TWILIGHT_ALTITUDE_DEG);

    SolarDayProfile {
        declination_deg,
        equation_of_time_min,
        solar_noon_frac,
        sunrise_frac: clamp_frac(solar_noon_frac - sunrise_half),
        sunset_frac: clamp_frac(solar_noon_frac + sunrise_half),
        civil_begin_frac: clamp_frac(solar_noon_frac - civil_half),
        civil_end_frac: clamp_frac(solar_noon_frac + civil_half),
        nautical_begin_frac: clamp_frac(solar_noon_frac - nautical_half),
        nautical_end_frac: clamp_frac(solar_noon_frac + nautical_half),
        astro_begin_frac: clamp_frac(solar_noon_frac - astro_half),
        astro_end_frac: clamp_frac(solar_noon_frac + astro_half),
        daylength_h: sunrise_half * 48.0, // 2·H/15 hours
    }
}
