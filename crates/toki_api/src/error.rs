//! Error types for the public record layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use toki_astro::AstroError;
use toki_calendar::CalendarError;
use toki_search::SearchError;

/// Errors surfaced by the day/range assembly. A failed request never
/// yields a partial record.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ApiError {
    /// Malformed date, reversed range, out-of-bounds observer, or an
    /// oversized range.
    InvalidInput(String),
    /// Ephemeris acquisition failed or the date is outside its validity.
    Astro(AstroError),
    /// Lunisolar resolution failed.
    Calendar(CalendarError),
    /// An event search failed.
    Search(SearchError),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Astro(e) => write!(f, "{e}"),
            Self::Calendar(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Astro(e) => Some(e),
            Self::Calendar(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AstroError> for ApiError {
    fn from(e: AstroError) -> Self {
        Self::Astro(e)
    }
}

impl From<CalendarError> for ApiError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}

impl From<SearchError> for ApiError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
