//! Request configuration surface.
//!
//! `tz` and `day_basis` are fixed by the contract ("Asia/Tokyo", "jst");
//! the variable parts are the ephemeris selection and the observer
//! location used for sunrise/sunset.

use std::path::PathBuf;

use chrono::NaiveDate;
use toki_astro::EphemerisRequest;

use crate::error::ApiError;

/// Default observer latitude (Tokyo Station).
pub const DEFAULT_LATITUDE: f64 = 35.681_236;

/// Default observer longitude (Tokyo Station).
pub const DEFAULT_LONGITUDE: f64 = 139.767_125;

/// Default cap on range length in days.
pub const DEFAULT_LIMIT_DAYS: i64 = 370;

/// Hard cap on range length in days.
pub const MAX_LIMIT_DAYS: i64 = 2_000;

/// Options recognized by the day/range assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarRequest {
    /// Ephemeris name, e.g. `de440s.bsp`.
    pub ephemeris: Option<String>,
    /// Explicit ephemeris path; wins over the name and the environment.
    pub ephemeris_path: Option<PathBuf>,
    /// Observer latitude in degrees; paired with `lon`.
    pub lat: Option<f64>,
    /// Observer longitude in degrees; paired with `lat`.
    pub lon: Option<f64>,
    /// Range length guard, clamped to [`MAX_LIMIT_DAYS`].
    pub limit_days: i64,
}

impl Default for CalendarRequest {
    fn default() -> Self {
        Self {
            ephemeris: None,
            ephemeris_path: None,
            lat: None,
            lon: None,
            limit_days: DEFAULT_LIMIT_DAYS,
        }
    }
}

impl CalendarRequest {
    /// Observer location after defaulting and validation.
    pub fn observer(&self) -> Result<(f64, f64), ApiError> {
        let (lat, lon) = match (self.lat, self.lon) {
            (None, None) => (DEFAULT_LATITUDE, DEFAULT_LONGITUDE),
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                return Err(ApiError::InvalidInput(
                    "lat and lon must be provided together".into(),
                ));
            }
        };
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ApiError::InvalidInput(format!(
                "latitude out of range: {lat}"
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(ApiError::InvalidInput(format!(
                "longitude out of range: {lon}"
            )));
        }
        Ok((lat, lon))
    }

    /// Effective range cap.
    pub fn effective_limit_days(&self) -> i64 {
        self.limit_days.clamp(1, MAX_LIMIT_DAYS)
    }

    /// Ephemeris selection for the resolver.
    pub fn ephemeris_request(&self) -> EphemerisRequest {
        EphemerisRequest {
            ephemeris: self.ephemeris.clone(),
            ephemeris_path: self.ephemeris_path.clone(),
        }
    }
}

/// Parse a `YYYY-MM-DD` date, rejecting anything else.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ApiError::InvalidInput(format!("invalid date: {s} (expected YYYY-MM-DD)")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_observer_is_tokyo() {
        let req = CalendarRequest::default();
        let (lat, lon) = req.observer().unwrap();
        assert!((lat - 35.681_236).abs() < 1e-9);
        assert!((lon - 139.767_125).abs() < 1e-9);
    }

    #[test]
    fn lat_without_lon_is_rejected() {
        let req = CalendarRequest {
            lat: Some(10.0),
            ..CalendarRequest::default()
        };
        assert!(matches!(req.observer(), Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn out_of_bounds_latitude_is_rejected() {
        let req = CalendarRequest {
            lat: Some(91.0),
            lon: Some(0.0),
            ..CalendarRequest::default()
        };
        assert!(matches!(req.observer(), Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn limit_days_is_clamped() {
        let req = CalendarRequest {
            limit_days: 1_000_000,
            ..CalendarRequest::default()
        };
        assert_eq!(req.effective_limit_days(), MAX_LIMIT_DAYS);
    }

    #[test]
    fn iso_date_parsing() {
        assert_eq!(
            parse_iso_date("2017-06-24").unwrap(),
            NaiveDate::from_ymd_opt(2017, 6, 24).unwrap()
        );
        assert!(parse_iso_date("2017/06/24").is_err());
        assert!(parse_iso_date("2017-13-01").is_err());
        assert!(parse_iso_date("not-a-date").is_err());
    }
}
