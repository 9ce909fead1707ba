//! Astronomical event search: root finding on cyclic quantities, new-moon
//! enumeration, and the 24 solar terms.
//!
//! This crate provides:
//! - A bracket-and-bisect root finder for angular quantities that wrap at
//!   360°, detecting forward crossings of an arbitrary target
//! - The new-moon series (lunar phase crossing 0° increasing)
//! - The solar-term engine (solar longitude crossing each multiple of 15°)
//! - Cooperative cancellation observed at scan-step boundaries

pub mod cancel;
pub mod error;
pub mod newmoon;
pub mod rootfind;
pub mod solarterm;

pub use cancel::CancelToken;
pub use error::SearchError;
pub use newmoon::{MAX_SYNODIC_GAP_DAYS, MIN_SYNODIC_GAP_DAYS, new_moons_between};
pub use rootfind::{RootFindConfig, find_forward_crossings};
pub use solarterm::{
    SolarTerm, is_major_degree, sekki_name_for_degree, solar_longitude_crossings,
    solar_terms_between,
};
