//! Golden-value tests for the solar day-boundary computation.
//!
//! Scenario expectations validated against published sunrise/sunset
//! tables (NOAA solar calculator, timeanddate.com).

use almanac_solar::{GeoLocation, NoaaModel, SolarModel};

const BERGAMO: GeoLocation = GeoLocation {
    latitude_deg: 45.7,
    longitude_deg: 9.6,
};

const TROMSO: GeoLocation = GeoLocation {
    latitude_deg: 69.6492,
    longitude_deg: 18.9553,
};

fn frac_to_local_minutes(frac: f64) -> f64 {
    frac * 1440.0
}

/// Mid-latitude: 2026-02-01 at 45.7N 9.6E, UTC+1.
/// Published: sunrise 07:43, sunset 17:27 local, daylength 9h44m.
#[test]
fn mid_latitude_winter_day() {
    let p = NoaaModel.day_profile(2026, 2, 1, BERGAMO, 1.0);

    let sunrise_min = frac_to_local_minutes(p.sunrise_frac);
    let sunset_min = frac_to_local_minutes(p.sunset_frac);
    let expected_sunrise = 7.0 * 60.0 + 43.0;
    let expected_sunset = 17.0 * 60.0 + 27.0;

    assert!(
        (sunrise_min - expected_sunrise).abs() < 2.0,
        "sunrise at {sunrise_min:.1} min, expected ~{expected_sunrise}"
    );
    assert!(
        (sunset_min - expected_sunset).abs() < 2.0,
        "sunset at {sunset_min:.1} min, expected ~{expected_sunset}"
    );
    assert!(
        (p.daylength_h - (9.0 + 44.0 / 60.0)).abs() < 2.0 / 60.0,
        "daylength {} h",
        p.daylength_h
    );
}

/// Arctic midnight sun and polar night at Tromsø.
#[test]
fn arctic_degenerate_days() {
    let midsummer = NoaaModel.day_profile(2026, 6, 21, TROMSO, 2.0);
    assert!(midsummer.is_polar_day());
    assert_eq!(midsummer.daylength_h, 24.0);
    assert_eq!(midsummer.sunrise_frac, 0.0);
    assert_eq!(midsummer.astro_end_frac, 1.0);

    let midwinter = NoaaModel.day_profile(2026, 12, 21, TROMSO, 2.0);
    assert!(midwinter.is_polar_night());
    assert_eq!(midwinter.daylength_h, 0.0);
    assert_eq!(midwinter.sunrise_frac, 0.5);
    assert_eq!(midwinter.solar_noon_frac, 0.5);
}

/// Equatorial daylength barely varies across the year.
#[test]
fn equator_daylength_stable() {
    let loc = GeoLocation::new(0.0, 0.0);
    let march = NoaaModel.day_profile(2026, 3, 20, loc, 0.0);
    let september = NoaaModel.day_profile(2026, 9, 20, loc, 0.0);
    assert!(
        (march.daylength_h - september.daylength_h).abs() < 0.5,
        "Δdaylength = {}",
        (march.daylength_h - september.daylength_h).abs()
    );

    let june = NoaaModel.day_profile(2026, 6, 21, loc, 0.0);
    let december = NoaaModel.day_profile(2026, 12, 21, loc, 0.0);
    assert!((june.daylength_h - december.daylength_h).abs() < 0.5);
}

/// Ordering invariant across latitudes and seasons, outside polar states.
#[test]
fn twilight_ordering_invariant() {
    for &lat in &[-60.0, -45.0, -23.0, 0.0, 23.0, 45.0, 60.0] {
        for &(month, day) in &[(1u32, 15u32), (3, 20), (6, 21), (9, 22), (12, 21)] {
            let p = NoaaModel.day_profile(2026, month, day, GeoLocation::new(lat, 0.0), 0.0);
            if p.is_polar_day() || p.is_polar_night() {
                continue;
            }
            let seq = [
                p.astro_begin_frac,
                p.nautical_begin_frac,
                p.civil_begin_frac,
                p.sunrise_frac,
                p.solar_noon_frac,
                p.sunset_frac,
                p.civil_end_frac,
                p.nautical_end_frac,
                p.astro_end_frac,
            ];
            for w in seq.windows(2) {
                assert!(
                    w[0] <= w[1],
                    "ordering violated at lat {lat}, {month}/{day}: {seq:?}"
                );
            }
        }
    }
}

/// Leap day is an ordinary day.
#[test]
fn leap_day_profile() {
    let p = NoaaModel.day_profile(2024, 2, 29, GeoLocation::new(45.0, 0.0), 0.0);
    assert!(p.daylength_h > 0.0 && p.daylength_h < 24.0);
    assert!(p.sunrise_frac < p.sunset_frac);
}

/// Identical inputs must give bit-identical floating-point output.
#[test]
fn bit_identical_determinism() {
    let a = NoaaModel.day_profile(2026, 2, 1, BERGAMO, 1.0);
    let b = NoaaModel.day_profile(2026, 2, 1, BERGAMO, 1.0);
    assert_eq!(a.sunrise_frac.to_bits(), b.sunrise_frac.to_bits());
    assert_eq!(a.declination_deg.to_bits(), b.declination_deg.to_bits());
    assert_eq!(a.daylength_h.to_bits(), b.daylength_h.to_bits());
}

/// Southern-hemisphere winter mirrors the north: June is the short day.
#[test]
fn southern_hemisphere_seasons_invert() {
    let loc = GeoLocation::new(-45.7, 9.6);
    let june = NoaaModel.day_profile(2026, 6, 21, loc, 1.0);
    let december = NoaaModel.day_profile(2026, 12, 21, loc, 1.0);
    assert!(june.daylength_h < 10.0, "June daylength {}", june.daylength_h);
    assert!(
        december.daylength_h > 14.0,
        "December daylength {}",
        december.daylength_h
    );
}
