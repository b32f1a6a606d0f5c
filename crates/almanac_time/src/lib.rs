//! Time-scale conversions shared by every almanac component.
//!
//! This crate provides:
//! - Julian Date ↔ civil calendar conversions
//! - Julian centuries since J2000.0
//! - The piecewise polynomial ΔT (TT − UT) model
//! - JDE (Terrestrial Time) → Unix UTC conversion
//! - A `UtcTime` type for rendering instants

pub mod delta_t;
pub mod julian;
pub mod utc_time;

pub use delta_t::{delta_t_seconds, jde_to_unix};
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, days_in_month, is_leap_year,
    jd_to_calendar, julian_centuries, julian_day, unix_to_jd,
};
pub use utc_time::UtcTime;
