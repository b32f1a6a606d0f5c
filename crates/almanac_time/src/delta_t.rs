//! Piecewise polynomial ΔT (TT − UT) model.
//!
//! Six polynomial regimes fit to Earth-rotation observations over
//! 1900–2050, with a long-term quadratic outside that span. This is the
//! single ΔT implementation shared by the seasons and moon crates; both
//! convert JDE (Terrestrial Time) to UTC through [`jde_to_unix`] so their
//! TT↔UTC conversions can never diverge.

use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD};

/// ΔT = TT − UT in seconds for a (possibly fractional) calendar year.
///
/// Regime breakpoints: 1900, 1920, 1941, 1961, 1986, 2005, 2050.
pub fn delta_t_seconds(year: f64) -> f64 {
    if (1900.0..1920.0).contains(&year) {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t * t + 0.0061966 * t * t * t
            - 0.000197 * t * t * t * t
    } else if (1920.0..1941.0).contains(&year) {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t * t + 0.0020936 * t * t * t
    } else if (1941.0..1961.0).contains(&year) {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t * t / 233.0 + t * t * t / 2547.0
    } else if (1961.0..1986.0).contains(&year) {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t * t / 260.0 - t * t * t / 718.0
    } else if (1986.0..2005.0).contains(&year) {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t * t + 0.0017275 * t * t * t
            + 0.000651814 * t * t * t * t
            + 0.00002373599 * t * t * t * t * t
    } else if (2005.0..2050.0).contains(&year) {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else {
        // Long-term parabola centered on 1820.
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

/// Convert a Julian Ephemeris Day (Terrestrial Time) to Unix UTC seconds,
/// rounded to the nearest second.
///
/// `(jde − 2440587.5)·86400 − ΔT(year)`; the year selects the ΔT regime.
pub fn jde_to_unix(jde: f64, year: i32) -> i64 {
    ((jde - UNIX_EPOCH_JD) * SECONDS_PER_DAY - delta_t_seconds(year as f64)).round() as i64
}
