//! Lunar phase timing and illumination.
//!
//! This crate provides:
//! - Named phase instants (new, quarters, full) via the standard periodic
//!   series, batched per target month
//! - The phase window around an arbitrary instant, with interpolated
//!   waxing/waning labels between named phases
//! - Illuminated disk fraction from the time since the last new moon
//!
//! All instants are deterministic functions of their inputs; nothing here
//! reads the wall clock.

pub mod phases;
pub mod types;

pub use phases::{
    SYNODIC_MONTH_DAYS, illumination_pct, lunation_near, phase_at, phase_jde, phases_for_month,
};
pub use types::{LunarPhaseEvent, LunarPhaseWindow, PhaseKind, PhaseLabel};
