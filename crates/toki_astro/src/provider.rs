//! The oracle capability trait and the engine wrapper.
//!
//! [`AstroProvider`] is the only surface the calendar core sees: apparent
//! ecliptic longitudes of date for the Sun and Moon, plus sunrise/sunset
//! for an observer. Providers are deterministic and side-effect-free for a
//! fixed ephemeris source; variants range from a full kernel-backed
//! ephemeris to the bundled semi-analytic series to test fakes.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::angle::norm360;
use crate::error::AstroError;

/// Narrow oracle interface. Implementations must be `Send + Sync`; the
/// engine is shared across requests after one-shot initialization.
pub trait AstroProvider: Send + Sync {
    /// Apparent ecliptic longitude of the Sun in degrees [0, 360).
    fn sun_ecliptic_longitude_deg(&self, t: DateTime<Utc>) -> Result<f64, AstroError>;

    /// Apparent ecliptic longitude of the Moon in degrees [0, 360).
    fn moon_ecliptic_longitude_deg(&self, t: DateTime<Utc>) -> Result<f64, AstroError>;

    /// Sunrise and sunset instants for a JST civil date at an observer
    /// location. Polar day/night conditions return `None` components;
    /// they are not errors.
    fn sunrise_sunset(
        &self,
        date: NaiveDate,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<(Option<DateTime<Utc>>, Option<DateTime<Utc>>), AstroError>;
}

/// Oracle wrapper that normalizes angles and derives the lunar phase.
///
/// Cloning is cheap (the provider is behind an `Arc`); the engine is
/// immutable after construction and may be read concurrently.
#[derive(Clone)]
pub struct AstronomyEngine {
    provider: Arc<dyn AstroProvider>,
    ephemeris: String,
}

impl std::fmt::Debug for AstronomyEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AstronomyEngine")
            .field("ephemeris", &self.ephemeris)
            .finish()
    }
}

impl AstronomyEngine {
    /// Wrap a provider, tagging it with the resolved ephemeris name
    /// reported in record metadata.
    pub fn new(provider: Arc<dyn AstroProvider>, ephemeris: impl Into<String>) -> Self {
        Self {
            provider,
            ephemeris: ephemeris.into(),
        }
    }

    /// Resolved ephemeris name, verbatim for `meta.ephemeris`.
    pub fn ephemeris_name(&self) -> &str {
        &self.ephemeris
    }

    /// Apparent solar ecliptic longitude in degrees [0, 360).
    pub fn sun_lon(&self, t: DateTime<Utc>) -> Result<f64, AstroError> {
        Ok(norm360(self.provider.sun_ecliptic_longitude_deg(t)?))
    }

    /// Apparent lunar ecliptic longitude in degrees [0, 360).
    pub fn moon_lon(&self, t: DateTime<Utc>) -> Result<f64, AstroError> {
        Ok(norm360(self.provider.moon_ecliptic_longitude_deg(t)?))
    }

    /// Lunar phase angle in degrees [0, 360): Moon−Sun elongation.
    /// 0 = new moon, 90 = first quarter, 180 = full, 270 = last quarter.
    pub fn moon_phase_deg(&self, t: DateTime<Utc>) -> Result<f64, AstroError> {
        Ok(norm360(self.moon_lon(t)? - self.sun_lon(t)?))
    }

    /// Sunrise/sunset pass-through for a JST civil date.
    pub fn sunrise_sunset(
        &self,
        date: NaiveDate,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<(Option<DateTime<Utc>>, Option<DateTime<Utc>>), AstroError> {
        self.provider
            .sunrise_sunset(date, latitude_deg, longitude_deg)
    }
}
