//! Solar position and day-boundary computation.
//!
//! This crate provides:
//! - `GeoLocation` and the `SolarDayProfile` result record
//! - The `SolarModel` strategy trait
//! - `NoaaModel`, the primary series-based model
//! - `ApproxModel`, a low-precision fallback with the identical contract
//!
//! All routines are pure and total over validated coordinates: the
//! hour-angle cosine is clamped before inverse-trig evaluation, and polar
//! day/night produce fully populated degenerate profiles rather than
//! errors.

pub mod approx;
mod horizon;
pub mod noaa;
pub mod types;

pub use approx::ApproxModel;
pub use noaa::NoaaModel;
pub use types::{
    ASTRO_TWILIGHT_ALTITUDE_DEG, CIVIL_TWILIGHT_ALTITUDE_DEG, GeoLocation,
    NAUTICAL_TWILIGHT_ALTITUDE_DEG, SUNRISE_ALTITUDE_DEG, SolarDayProfile, SolarModel,
};
