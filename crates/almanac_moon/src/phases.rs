//! Lunar phase instants from the standard periodic series.
//!
//! Mean phase JDE from a quartic in the lunation number k, corrected by
//! the reference periodic tables (Meeus, Astronomical Algorithms, ch. 49):
//! one series for new/full moons, one for quarters with the signed W term
//! (+W first quarter, −W last quarter), and fourteen planetary terms.
//! All instants are computed in Terrestrial Time and converted to UTC
//! through the shared ΔT model.

use almanac_time::{calendar_to_jd, jd_to_calendar, jde_to_unix, unix_to_jd};

use crate::types::{LunarPhaseEvent, LunarPhaseWindow, PhaseKind, PhaseLabel};

/// Mean synodic month in days, as used by the illumination cosine.
pub const SYNODIC_MONTH_DAYS: f64 = 29.53;

/// Window filter around a target month: events from 15 days before the
/// month start to 45 days after.
const WINDOW_BEFORE_DAYS: f64 = 15.0;
const WINDOW_AFTER_DAYS: f64 = 45.0;

/// Periodic correction term: `[c_new, c_full, e_pow, n_m, n_mp, n_f, n_om]`.
/// The argument is `n_m·M + n_mp·M′ + n_f·F + n_om·Ω`; the coefficient is
/// scaled by E^e_pow. The −0.00017·sin Ω row belongs to BOTH columns.
#[rustfmt::skip]
static NEW_FULL_TERMS: [[f64; 7]; 25] = [
    // c_new      c_full     E   M    M'   F    Ω
    [-0.40720, -0.40614, 0.0,  0.0, 1.0, 0.0, 0.0],
    [ 0.17241,  0.17302, 1.0,  1.0, 0.0, 0.0, 0.0],
    [ 0.01608,  0.01614, 0.0,  0.0, 2.0, 0.0, 0.0],
    [ 0.01039,  0.01043, 0.0,  0.0, 0.0, 2.0, 0.0],
    [ 0.00739,  0.00734, 1.0, -1.0, 1.0, 0.0, 0.0],
    [-0.00514, -0.00515, 1.0,  1.0, 1.0, 0.0, 0.0],
    [ 0.00208,  0.00209, 2.0,  2.0, 0.0, 0.0, 0.0],
    [-0.00111, -0.00111, 0.0,  0.0, 1.0,-2.0, 0.0],
    [-0.00057, -0.00057, 0.0,  0.0, 1.0, 2.0, 0.0],
    [ 0.00056,  0.00056, 1.0,  1.0, 2.0, 0.0, 0.0],
    [-0.00042, -0.00042, 0.0,  0.0, 3.0, 0.0, 0.0],
    [ 0.00042,  0.00042, 1.0,  1.0, 0.0, 2.0, 0.0],
    [ 0.00038,  0.00038, 1.0,  1.0, 0.0,-2.0, 0.0],
    [-0.00024, -0.00024, 1.0, -1.0, 2.0, 0.0, 0.0],
    [-0.00017, -0.00017, 0.0,  0.0, 0.0, 0.0, 1.0],
    [-0.00007, -0.00007, 0.0,  2.0, 1.0, 0.0, 0.0],
    [ 0.00004,  0.00004, 0.0,  0.0, 2.0,-2.0, 0.0],
    [ 0.00004,  0.00004, 0.0,  3.0, 0.0, 0.0, 0.0],
    [ 0.00003,  0.00003, 0.0,  1.0, 1.0,-2.0, 0.0],
    [ 0.00003,  0.00003, 0.0,  0.0, 2.0, 2.0, 0.0],
    [-0.00003, -0.00003, 0.0,  1.0, 1.0, 2.0, 0.0],
    [ 0.00003,  0.00003, 0.0, -1.0, 1.0, 2.0, 0.0],
    [-0.00002, -0.00002, 0.0, -1.0, 1.0,-2.0, 0.0],
    [-0.00002, -0.00002, 0.0,  1.0, 3.0, 0.0, 0.0],
    [ 0.00002,  0.00002, 0.0,  0.0, 4.0, 0.0, 0.0],
];

/// Quarter-phase correction terms: `[c, e_pow, n_m, n_mp, n_f, n_om]`.
#[rustfmt::skip]
static QUARTER_TERMS: [[f64; 6]; 25] = [
    // c         E    M    M'   F    Ω
    [-0.62801, 0.0,  0.0, 1.0, 0.0, 0.0],
    [ 0.17172, 1.0,  1.0, 0.0, 0.0, 0.0],
    [-0.01183, 1.0,  1.0, 1.0, 0.0, 0.0],
    [ 0.00862, 0.0,  0.0, 2.0, 0.0, 0.0],
    [ 0.00804, 0.0,  0.0, 0.0, 2.0, 0.0],
    [ 0.00454, 1.0, -1.0, 1.0, 0.0, 0.0],
    [ 0.00204, 2.0,  2.0, 0.0, 0.0, 0.0],
    [-0.00180, 0.0,  0.0, 1.0,-2.0, 0.0],
    [-0.00070, 0.0,  0.0, 1.0, 2.0, 0.0],
    [-0.00040, 0.0,  0.0, 3.0, 0.0, 0.0],
    [-0.00034, 1.0, -1.0, 2.0, 0.0, 0.0],
    [ 0.00032, 1.0,  1.0, 0.0, 2.0, 0.0],
    [ 0.00032, 1.0,  1.0, 0.0,-2.0, 0.0],
    [-0.00028, 2.0,  2.0, 1.0, 0.0, 0.0],
    [ 0.00027, 1.0,  1.0, 2.0, 0.0, 0.0],
    [-0.00017, 0.0,  0.0, 0.0, 0.0, 1.0],
    [-0.00005, 0.0, -1.0, 1.0,-2.0, 0.0],
    [ 0.00004, 0.0,  0.0, 2.0, 2.0, 0.0],
    [-0.00004, 0.0,  1.0, 1.0, 2.0, 0.0],
    [ 0.00004, 0.0, -2.0, 1.0, 0.0, 0.0],
    [ 0.00003, 0.0,  1.0, 1.0,-2.0, 0.0],
    [ 0.00003, 0.0,  3.0, 0.0, 0.0, 0.0],
    [ 0.00002, 0.0,  0.0, 2.0,-2.0, 0.0],
    [ 0.00002, 0.0, -1.0, 1.0, 2.0, 0.0],
    [-0.00002, 0.0,  1.0, 3.0, 0.0, 0.0],
];

/// Planetary argument rows: `[coeff, a0, a1_per_k, a2_per_t2]`, correction
/// `Σ coeff·sin(a0 + a1·k + a2·T²)`.
#[rustfmt::skip]
static PLANETARY_TERMS: [[f64; 4]; 14] = [
    [0.000325, 299.77,  0.107408, -0.009173],
    [0.000165, 251.88,  0.016321,  0.0],
    [0.000164, 251.83, 26.651886,  0.0],
    [0.000126, 349.42, 36.412478,  0.0],
    [0.000110,  84.66, 18.206239,  0.0],
    [0.000062, 141.74, 53.303771,  0.0],
    [0.000060, 207.14,  2.453732,  0.0],
    [0.000056, 154.84,  7.306860,  0.0],
    [0.000047,  34.52, 27.261239,  0.0],
    [0.000042, 207.19,  0.121824,  0.0],
    [0.000040, 291.34,  1.844379,  0.0],
    [0.000037, 161.72, 24.198154,  0.0],
    [0.000035, 239.56, 25.513099,  0.0],
    [0.000023, 331.55,  3.592518,  0.0],
];

/// Fundamental arguments at lunation k, degrees (except E).
struct Fundamentals {
    /// Eccentricity factor E.
    e: f64,
    /// Sun mean anomaly M.
    m: f64,
    /// Moon mean anomaly M′.
    mp: f64,
    /// Argument of latitude F.
    f: f64,
    /// Ascending-node longitude Ω.
    om: f64,
}

fn fundamentals(k: f64, t: f64) -> Fundamentals {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    Fundamentals {
        e: 1.0 - 0.002516 * t - 0.0000074 * t2,
        m: 2.5534 + 29.105_356_70 * k - 0.0000014 * t2 - 0.00000011 * t3,
        mp: 201.5643 + 385.816_935_28 * k + 0.0107582 * t2 + 0.00001238 * t3 - 0.000000058 * t4,
        f: 160.7108 + 390.670_502_84 * k - 0.0016118 * t2 - 0.00000227 * t3 + 0.000000011 * t4,
        om: 124.7746 - 1.563_755_88 * k + 0.0020672 * t2 + 0.00000215 * t3,
    }
}

fn argument_sin(fund: &Fundamentals, n_m: f64, n_mp: f64, n_f: f64, n_om: f64) -> f64 {
    (n_m * fund.m + n_mp * fund.mp + n_f * fund.f + n_om * fund.om)
        .to_radians()
        .sin()
}

fn new_full_correction(fund: &Fundamentals, full: bool) -> f64 {
    NEW_FULL_TERMS
        .iter()
        .map(|&[c_new, c_full, e_pow, n_m, n_mp, n_f, n_om]| {
            let c = if full { c_full } else { c_new };
            c * fund.e.powi(e_pow as i32) * argument_sin(fund, n_m, n_mp, n_f, n_om)
        })
        .sum()
}

fn quarter_correction(fund: &Fundamentals, first: bool) -> f64 {
    let series: f64 = QUARTER_TERMS
        .iter()
        .map(|&[c, e_pow, n_m, n_mp, n_f, n_om]| {
            c * fund.e.powi(e_pow as i32) * argument_sin(fund, n_m, n_mp, n_f, n_om)
        })
        .sum();

    // W shifts the quarter toward (first) or away from (last) the
    // preceding syzygy; sign checked against the reference table.
    let w = 0.00306 - 0.00038 * fund.e * fund.m.to_radians().cos()
        + 0.00026 * fund.mp.to_radians().cos()
        - 0.00002 * (fund.mp - fund.m).to_radians().cos()
        + 0.00002 * (fund.mp + fund.m).to_radians().cos()
        + 0.00002 * (2.0 * fund.f).to_radians().cos();

    if first { series + w } else { series - w }
}

fn planetary_correction(k: f64, t: f64) -> f64 {
    let t2 = t * t;
    PLANETARY_TERMS
        .iter()
        .map(|&[coeff, a0, a1, a2]| coeff * (a0 + a1 * k + a2 * t2).to_radians().sin())
        .sum()
}

/// Lunation number of the mean new moon nearest the start of a month.
///
/// k = 0 is the first new moon of 2000 (2000-01-06).
pub fn lunation_near(year: i32, month: u32) -> f64 {
    ((year as f64 + (month as f64 - 0.5) / 12.0 - 2000.0) * 12.3685).floor()
}

/// Phase instant for a (possibly fractional) lunation number, as a Julian
/// Ephemeris Day. The fraction of k selects the phase: .0 new, .25 first
/// quarter, .5 full, .75 last quarter.
pub fn phase_jde(k: f64) -> f64 {
    let t = k / 1236.85;
    let t2 = t * t;
    let mean = 2_451_550.097_66
        + 29.530_588_861 * k
        + t2 * (0.000_154_37 + t * (-0.000_000_150 + t * 0.000_000_000_73));

    let fund = fundamentals(k, t);
    let kind = PhaseKind::from_offset(k)
        .unwrap_or_else(|| panic!("lunation {k} is not on a quarter mark"));
    let correction = match kind {
        PhaseKind::New => new_full_correction(&fund, false),
        PhaseKind::Full => new_full_correction(&fund, true),
        PhaseKind::FirstQuarter => quarter_correction(&fund, true),
        PhaseKind::LastQuarter => quarter_correction(&fund, false),
    };

    mean + correction + planetary_correction(k, t)
}

fn event_at(kind: PhaseKind, k_base: f64, year_hint: i32) -> LunarPhaseEvent {
    let k = k_base + kind.offset();
    let jde = phase_jde(k);
    LunarPhaseEvent {
        kind,
        lunation: k,
        jde,
        unix: jde_to_unix(jde, year_hint),
    }
}

/// All named phase instants around a target month: lunations k−1, k, k+1
/// at each quarter mark, filtered to [month start − 15 d, month start
/// + 45 d] and sorted ascending.
pub fn phases_for_month(year: i32, month: u32) -> Vec<LunarPhaseEvent> {
    let k0 = lunation_near(year, month);
    let month_start_jd = calendar_to_jd(year, month, 1.0);
    let window = (month_start_jd - WINDOW_BEFORE_DAYS)..=(month_start_jd + WINDOW_AFTER_DAYS);

    let mut events = Vec::with_capacity(12);
    for dk in [-1.0, 0.0, 1.0] {
        for kind in [
            PhaseKind::New,
            PhaseKind::FirstQuarter,
            PhaseKind::Full,
            PhaseKind::LastQuarter,
        ] {
            let event = event_at(kind, k0 + dk, year);
            if window.contains(&event.jde) {
                events.push(event);
            }
        }
    }
    events.sort_by(|a, b| a.jde.total_cmp(&b.jde));
    events
}

/// Named phase instants spanning the month of `unix` plus one month on
/// each side, deduplicated and sorted.
fn events_around(unix: i64) -> Vec<LunarPhaseEvent> {
    let (year, month, _) = jd_to_calendar(unix_to_jd(unix));

    let mut events = Vec::with_capacity(36);
    for delta in -1i32..=1 {
        let mut y = year;
        let mut m = month as i32 + delta;
        if m < 1 {
            m += 12;
            y -= 1;
        } else if m > 12 {
            m -= 12;
            y += 1;
        }
        events.extend(phases_for_month(y, m as u32));
    }
    events.sort_by(|a, b| a.jde.total_cmp(&b.jde));
    events.dedup_by(|a, b| (a.jde - b.jde).abs() < 1e-9);
    events
}

fn same_utc_day(a: i64, b: i64) -> bool {
    a.div_euclid(86_400) == b.div_euclid(86_400)
}

/// Illuminated disk fraction in percent, one decimal, from the days
/// elapsed since the most recent new moon.
pub fn illumination_pct(days_since_new: f64) -> f64 {
    let raw = (1.0 - (std::f64::consts::TAU * days_since_new / SYNODIC_MONTH_DAYS).cos()) * 50.0;
    (raw * 10.0).round() / 10.0
}

/// Phase window around one UTC instant: bracketing named phases, current
/// label (interpolated unless the instant shares a UTC calendar day with
/// a named phase), and illumination.
pub fn phase_at(unix: i64) -> LunarPhaseWindow {
    let events = events_around(unix);

    // Coverage spans well over a lunation on both sides of the instant,
    // so a bracketing pair always exists.
    let idx = events.partition_point(|e| e.unix <= unix);
    let prev = events[idx - 1];
    let next = events[idx];

    let label = if same_utc_day(prev.unix, unix) {
        prev.kind.label()
    } else if same_utc_day(next.unix, unix) {
        next.kind.label()
    } else {
        PhaseLabel::between(prev.kind, next.kind)
    };

    let last_new = events[..idx]
        .iter()
        .rev()
        .find(|e| e.kind == PhaseKind::New)
        .copied()
        .unwrap_or(prev);
    let days_since_new = (unix - last_new.unix) as f64 / 86_400.0;

    LunarPhaseWindow {
        label,
        illumination_pct: illumination_pct(days_since_new),
        prev,
        next,
    }
}
