//! Astronomy oracle: the capability boundary between the calendar engine
//! and whatever computes Sun/Moon positions.
//!
//! This crate provides:
//! - The [`AstroProvider`] trait (sun/moon apparent ecliptic longitude,
//!   sunrise/sunset) — the narrow seam everything above depends on
//! - [`AstronomyEngine`], the wrapper that derives lunar phase and
//!   normalizes angles
//! - A bundled deterministic semi-analytic provider (truncated solar and
//!   lunar longitude series, low-order nutation, aberration)
//! - Ephemeris source resolution and the process-wide engine cache

pub mod analytic;
pub mod angle;
pub mod error;
pub mod provider;
pub mod resolve;

pub use analytic::AnalyticProvider;
pub use angle::{angdiff180, norm360};
pub use error::AstroError;
pub use provider::{AstroProvider, AstronomyEngine};
pub use resolve::{
    DEFAULT_EPHEMERIS, EPHEMERIS_ENV, EPHEMERIS_PATH_ENV, EphemerisRequest, ResolvedEphemeris,
    engine_for, resolve_ephemeris,
};
