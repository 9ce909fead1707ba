//! Bundled semi-analytic oracle.
//!
//! Deterministic provider built from truncated published longitude series:
//! the two-body solar longitude with equation of center plus the classical
//! planetary perturbation terms, the standard truncated lunar longitude
//! series, low-order nutation in longitude, and annual aberration. All
//! series evaluate on the TT axis; ΔT comes from `toki_time`.
//!
//! Accuracy over 1900–2100: solar longitude to ~10 arcsec, lunar longitude
//! to ~30 arcsec — event timing to a few minutes, inside the engine's
//! minute-level contract. Validity window 1600–2200; outside it queries
//! fail with `OutOfRange` rather than degrade silently.

pub mod lunar;
pub mod nutation;
pub mod riseset;
pub mod solar;

use chrono::{DateTime, NaiveDate, Utc};
use toki_time::{jd_tt, jd_utc};

use crate::error::AstroError;
use crate::provider::AstroProvider;

/// JD UTC of 1600-01-01, start of the validity window.
const VALID_START_JD: f64 = 2_305_447.5;

/// JD UTC of 2201-01-01, end of the validity window.
const VALID_END_JD: f64 = 2_524_958.5;

/// The bundled lower-precision ephemeris variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticProvider;

impl AnalyticProvider {
    pub fn new() -> Self {
        Self
    }

    fn check_range(&self, t: DateTime<Utc>) -> Result<f64, AstroError> {
        let jd = jd_utc(t);
        if !(VALID_START_JD..VALID_END_JD).contains(&jd) {
            return Err(AstroError::OutOfRange { jd_utc: jd });
        }
        Ok(jd)
    }
}

impl AstroProvider for AnalyticProvider {
    fn sun_ecliptic_longitude_deg(&self, t: DateTime<Utc>) -> Result<f64, AstroError> {
        self.check_range(t)?;
        Ok(solar::apparent_longitude_deg(jd_tt(t)))
    }

    fn moon_ecliptic_longitude_deg(&self, t: DateTime<Utc>) -> Result<f64, AstroError> {
        self.check_range(t)?;
        Ok(lunar::apparent_longitude_deg(jd_tt(t)))
    }

    fn sunrise_sunset(
        &self,
        date: NaiveDate,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<(Option<DateTime<Utc>>, Option<DateTime<Utc>>), AstroError> {
        self.check_range(toki_time::jst_midnight_utc(date))?;
        riseset::sunrise_sunset_jst_day(date, latitude_deg, longitude_deg)
    }
}
