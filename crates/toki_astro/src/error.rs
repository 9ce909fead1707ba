//! Error types for oracle acquisition and queries.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from ephemeris resolution or oracle queries.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AstroError {
    /// The ephemeris handle could not be acquired.
    EphemerisUnavailable(String),
    /// The requested instant lies outside the provider's validity window.
    OutOfRange { jd_utc: f64 },
}

impl Display for AstroError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EphemerisUnavailable(hint) => {
                write!(f, "ephemeris unavailable: {hint}")
            }
            Self::OutOfRange { jd_utc } => {
                write!(f, "instant outside ephemeris validity: JD {jd_utc:.2}")
            }
        }
    }
}

impl Error for AstroError {}
