//! Coefficient tables for the cardinal-point computation.
//!
//! Seed polynomials and the 24-term periodic correction from the standard
//! reference tables (Meeus, Astronomical Algorithms, ch. 27). Two seed
//! regimes: years [-1000, 1000] use the historical table in Y = year/1000;
//! later years use the modern table in Y = (year - 2000)/1000.

/// Quartic seed coefficients `[c0, c1, c2, c3, c4]` per cardinal point,
/// order: March equinox, June solstice, September equinox, December
/// solstice. Historical regime, Y = year/1000.
#[rustfmt::skip]
pub(crate) static SEED_HISTORICAL: [[f64; 5]; 4] = [
    [1_721_139.29189, 365_242.13740,  0.06134,  0.00111, -0.00071],
    [1_721_233.25401, 365_241.72562, -0.05323,  0.00907,  0.00025],
    [1_721_325.70455, 365_242.49558, -0.11677, -0.00297,  0.00074],
    [1_721_414.39987, 365_242.88257, -0.00769, -0.00933, -0.00006],
];

/// Modern regime, Y = (year - 2000)/1000.
#[rustfmt::skip]
pub(crate) static SEED_MODERN: [[f64; 5]; 4] = [
    [2_451_623.80984, 365_242.37404,  0.05169, -0.00411, -0.00057],
    [2_451_716.56767, 365_241.62603,  0.00325,  0.00888, -0.00030],
    [2_451_810.21715, 365_242.01767, -0.11575,  0.00337,  0.00078],
    [2_451_900.05952, 365_242.74049, -0.06223, -0.00823,  0.00032],
];

/// Periodic correction terms `[A, B, C]`: S = Σ A·cos(B + C·T) with B, C in
/// degrees and T in Julian centuries **derived from the seed JDE0**, never
/// from the calendar year.
#[rustfmt::skip]
pub(crate) static PERIODIC_TERMS: [[f64; 3]; 24] = [
    [485.0, 324.96,   1934.136],
    [203.0, 337.23,  32964.467],
    [199.0, 342.08,     20.186],
    [182.0,  27.85, 445267.112],
    [156.0,  73.14,  45036.886],
    [136.0, 171.52,  22518.443],
    [ 77.0, 222.54,  65928.934],
    [ 74.0, 296.72,   3034.906],
    [ 70.0, 243.58,   9037.513],
    [ 58.0, 119.81,  33718.147],
    [ 52.0, 297.17,    150.678],
    [ 50.0,  21.02,   2281.226],
    [ 45.0, 247.54,  29929.562],
    [ 44.0, 325.15,  31555.956],
    [ 29.0,  60.93,   4443.417],
    [ 18.0, 155.12,  67555.328],
    [ 17.0, 288.79,   4562.452],
    [ 16.0, 198.04,  62894.029],
    [ 14.0, 199.76,  31436.921],
    [ 12.0,  95.39,  14577.848],
    [ 12.0, 287.11,  31931.756],
    [ 12.0, 320.81,  34777.259],
    [  9.0, 227.73,   1222.114],
    [  8.0,  15.45,  16859.074],
];
