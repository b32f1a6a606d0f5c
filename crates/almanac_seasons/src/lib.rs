//! Equinox and solstice instants for a calendar year.
//!
//! Seed JDE0 from a quartic polynomial (historical or modern regime by
//! year), refined by a 24-term periodic correction scaled by the
//! solar-distance factor, then converted from Terrestrial Time to UTC
//! through the shared ΔT model. Accuracy: within about a minute of
//! published ephemeris values for the 1951–2050 span.

mod tables;

use almanac_time::{J2000_JD, jde_to_unix};

use tables::{PERIODIC_TERMS, SEED_HISTORICAL, SEED_MODERN};

/// The four cardinal points of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardinalPoint {
    MarchEquinox,
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

impl CardinalPoint {
    pub const ALL: [Self; 4] = [
        Self::MarchEquinox,
        Self::JuneSolstice,
        Self::SeptemberEquinox,
        Self::DecemberSolstice,
    ];

    const fn index(self) -> usize {
        match self {
            Self::MarchEquinox => 0,
            Self::JuneSolstice => 1,
            Self::SeptemberEquinox => 2,
            Self::DecemberSolstice => 3,
        }
    }
}

/// The year's four cardinal instants as UTC Unix timestamps, strictly
/// increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquinoxSolsticeSet {
    pub march_equinox: i64,
    pub june_solstice: i64,
    pub september_equinox: i64,
    pub december_solstice: i64,
}

impl EquinoxSolsticeSet {
    /// The four instants in calendar order.
    pub fn as_array(&self) -> [i64; 4] {
        [
            self.march_equinox,
            self.june_solstice,
            self.september_equinox,
            self.december_solstice,
        ]
    }
}

/// Seed JDE0 for a cardinal point, picking the regime by year.
fn seed_jde(year: i32, point: CardinalPoint) -> f64 {
    let (coeffs, y) = if (-1000..=1000).contains(&year) {
        (
            &SEED_HISTORICAL[point.index()],
            year as f64 / 1000.0,
        )
    } else {
        (
            &SEED_MODERN[point.index()],
            (year as f64 - 2000.0) / 1000.0,
        )
    };
    coeffs[0] + y * (coeffs[1] + y * (coeffs[2] + y * (coeffs[3] + y * coeffs[4])))
}

/// Cardinal-point instant as a Julian Ephemeris Day (Terrestrial Time).
pub fn cardinal_point_jde(year: i32, point: CardinalPoint) -> f64 {
    let jde0 = seed_jde(year, point);
    // T from the seed JDE0, not from the calendar year: the periodic terms
    // are phased against the seed epoch.
    let t = (jde0 - J2000_JD) / 36_525.0;

    let w = (35_999.373 * t - 2.47).to_radians();
    let dl = 1.0 + 0.0334 * w.cos() + 0.0007 * (2.0 * w).cos();

    let s: f64 = PERIODIC_TERMS
        .iter()
        .map(|&[a, b, c]| a * (b + c * t).to_radians().cos())
        .sum();

    jde0 + 0.00001 * s / dl
}

/// The four cardinal instants of a calendar year in UTC.
pub fn equinoxes_solstices(year: i32) -> EquinoxSolsticeSet {
    let mut unix = [0i64; 4];
    for point in CardinalPoint::ALL {
        unix[point.index()] = jde_to_unix(cardinal_point_jde(year, point), year);
    }
    EquinoxSolsticeSet {
        march_equinox: unix[0],
        june_solstice: unix[1],
        september_equinox: unix[2],
        december_solstice: unix[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_are_roughly_a_quarter_year_apart() {
        let march = seed_jde(2026, CardinalPoint::MarchEquinox);
        let june = seed_jde(2026, CardinalPoint::JuneSolstice);
        let gap = june - march;
        assert!((85.0..100.0).contains(&gap), "gap = {gap}");
    }

    #[test]
    fn correction_stays_small() {
        for point in CardinalPoint::ALL {
            let jde0 = seed_jde(2026, point);
            let jde = cardinal_point_jde(2026, point);
            // The periodic correction is bounded by Σ|A|·1e-5 ≈ 0.02 days.
            assert!((jde - jde0).abs() < 0.03, "correction = {}", jde - jde0);
        }
    }

    #[test]
    fn historical_regime_is_selected() {
        let set = equinoxes_solstices(500);
        let arr = set.as_array();
        for w in arr.windows(2) {
            assert!(w[0] < w[1], "not increasing: {arr:?}");
        }
    }

    #[test]
    fn deterministic() {
        let a = equinoxes_solstices(2026);
        let b = equinoxes_solstices(2026);
        assert_eq!(a, b);
    }
}
