//! Time scales and JST day-basis attribution.
//!
//! This crate provides:
//! - Julian Date ↔ `chrono` instant conversions
//! - ΔT (TT − UTC) from the built-in leap-second table
//! - The canonical JST (+09:00) day-basis attribution rule
//! - `+09:00` ISO formatting for user-surfaced instants

pub mod jst;
pub mod julian;
pub mod scales;

pub use jst::{
    JST_OFFSET_SECONDS, attribute_jst, format_iso_jst, jst_midnight_utc, jst_offset, to_jst,
};
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, jd_tt, jd_utc, julian_centuries_tt, utc_from_jd,
};
pub use scales::{delta_t_seconds, leap_seconds_at};
