//! Sunrise/sunset by transit correction and hour-angle iteration.
//!
//! Standard spherical-astronomy method: estimate the local transit inside
//! the JST civil day, then walk the hour angle to ±H₀ at the standard
//! altitude of -0°50'. Polar day and polar night short-circuit to `None`.

use std::f64::consts::{PI, TAU};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use toki_time::{J2000_JD, delta_t_seconds, jd_utc, jst_midnight_utc, utc_from_jd};

use super::{nutation, solar};
use crate::angle::norm360;
use crate::error::AstroError;

/// Standard rise/set altitude of the Sun's center (refraction + semidiameter).
const STANDARD_ALTITUDE_DEG: f64 = -0.8333;

/// Maximum iterations for the hour-angle walk.
const MAX_ITERATIONS: usize = 6;

/// Convergence threshold in days (~1 second).
const CONVERGENCE_DAYS: f64 = 1.2e-5;

/// Sidereal turns per solar day.
const SIDEREAL_RATE_RAD_PER_DAY: f64 = TAU * 1.002_737_811_9;

/// Apparent solar RA/Dec in radians at a JD on the TT axis.
fn sun_ra_dec_rad(jd_tt: f64) -> (f64, f64) {
    let t = (jd_tt - J2000_JD) / 36_525.0;
    let lambda = solar::apparent_longitude_deg(jd_tt).to_radians();
    let eps = nutation::true_obliquity_deg(t).to_radians();
    let ra = (lambda.sin() * eps.cos()).atan2(lambda.cos()).rem_euclid(TAU);
    let dec = (eps.sin() * lambda.sin()).asin();
    (ra, dec)
}

/// Greenwich mean sidereal time in radians at a JD on the UT axis.
fn gmst_rad(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = d / 36_525.0;
    let gmst_deg =
        280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t - t * t * t / 38_710_000.0;
    norm360(gmst_deg).to_radians()
}

/// Map a radian angle to [-π, π).
fn wrap_pm_pi(x: f64) -> f64 {
    (x + PI).rem_euclid(TAU) - PI
}

/// Local hour angle of the Sun at a JD on the UT axis.
fn sun_hour_angle_rad(jd_ut: f64, longitude_deg: f64) -> f64 {
    let jd_tt = jd_ut + delta_t_seconds(jd_ut) / 86_400.0;
    let (ra, _) = sun_ra_dec_rad(jd_tt);
    let lst = gmst_rad(jd_ut) + longitude_deg.to_radians();
    wrap_pm_pi(lst - ra)
}

/// Walk the hour angle from a starting guess to the target rise/set angle.
///
/// Returns `None` when the Sun never reaches the standard altitude that
/// day (polar day or polar night).
fn refine_event(mut jd_ut: f64, latitude_deg: f64, longitude_deg: f64, rising: bool) -> Option<f64> {
    let phi = latitude_deg.to_radians();
    let h0_rad = STANDARD_ALTITUDE_DEG.to_radians();

    for _ in 0..MAX_ITERATIONS {
        let jd_tt = jd_ut + delta_t_seconds(jd_ut) / 86_400.0;
        let (_, dec) = sun_ra_dec_rad(jd_tt);

        let cos_h0 = (h0_rad.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
        if !cos_h0.is_finite() || cos_h0 > 1.0 || cos_h0 < -1.0 {
            return None;
        }
        let h0 = cos_h0.acos();
        let target = if rising { -h0 } else { h0 };

        let ha = sun_hour_angle_rad(jd_ut, longitude_deg);
        let correction = wrap_pm_pi(target - ha) / SIDEREAL_RATE_RAD_PER_DAY;
        jd_ut += correction;

        if correction.abs() < CONVERGENCE_DAYS {
            return Some(jd_ut);
        }
    }
    Some(jd_ut)
}

/// Sunrise and sunset for a JST civil date at an observer location.
///
/// Events are constrained to the JST day window of `date`; an event the
/// iteration places outside the window is reported as absent.
pub fn sunrise_sunset_jst_day(
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<(Option<DateTime<Utc>>, Option<DateTime<Utc>>), AstroError> {
    let window_start = jst_midnight_utc(date);
    let window_end = window_start + Duration::days(1);

    // Local mean noon inside the JST window (JST meridian is 135°E).
    let noon_offset_hours = (12.0 + (135.0 - longitude_deg) / 15.0).rem_euclid(24.0);
    let mut jd_transit = jd_utc(window_start) + noon_offset_hours / 24.0;

    // Settle the transit before branching to rise/set.
    for _ in 0..MAX_ITERATIONS {
        let ha = sun_hour_angle_rad(jd_transit, longitude_deg);
        let correction = -ha / SIDEREAL_RATE_RAD_PER_DAY;
        jd_transit += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    let start_jd = jd_utc(window_start);
    let end_jd = jd_utc(window_end);
    let in_window = |jd: f64| jd >= start_jd && jd < end_jd;

    let sunrise = refine_event(jd_transit - 0.25, latitude_deg, longitude_deg, true)
        .filter(|&jd| in_window(jd))
        .map(utc_from_jd);
    let sunset = refine_event(jd_transit + 0.25, latitude_deg, longitude_deg, false)
        .filter(|&jd| in_window(jd))
        .map(utc_from_jd);

    Ok((sunrise, sunset))
}
