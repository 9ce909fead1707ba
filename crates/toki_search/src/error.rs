//! Error types for event searches.

use std::error::Error;
use std::fmt::{Display, Formatter};

use toki_astro::AstroError;

/// Errors from root finding and event enumeration.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// A configuration value failed validation.
    InvalidConfig(&'static str),
    /// The requested interval is empty or reversed.
    InvalidRange(&'static str),
    /// Bisection did not converge to a genuine crossing.
    RootFindFailed(&'static str),
    /// The request was cancelled at a scan-step boundary.
    Cancelled,
    /// Oracle query failed.
    Astro(AstroError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidRange(msg) => write!(f, "invalid range: {msg}"),
            Self::RootFindFailed(msg) => write!(f, "root finding failed: {msg}"),
            Self::Cancelled => write!(f, "search cancelled"),
            Self::Astro(e) => write!(f, "oracle error: {e}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Astro(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AstroError> for SearchError {
    fn from(e: AstroError) -> Self {
        Self::Astro(e)
    }
}
