//! Error types for lunisolar resolution.

use std::error::Error;
use std::fmt::{Display, Formatter};

use toki_search::SearchError;

/// Errors from calendar assembly.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// The 冬至 anchor or a required new moon could not be located, or the
    /// resolved structure is inconsistent. The whole range fails; partial
    /// results are never returned.
    LunisolarResolutionFailed { reason: String },
    /// An underlying event search failed.
    Search(SearchError),
}

impl CalendarError {
    pub(crate) fn resolution(reason: impl Into<String>) -> Self {
        Self::LunisolarResolutionFailed {
            reason: reason.into(),
        }
    }
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LunisolarResolutionFailed { reason } => {
                write!(f, "lunisolar resolution failed: {reason}")
            }
            Self::Search(e) => write!(f, "search error: {e}"),
        }
    }
}

impl Error for CalendarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SearchError> for CalendarError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
