//! Julian Date conversions on `chrono` instants.
//!
//! The UTC axis is represented by `chrono::DateTime<Utc>`; the astronomical
//! series in `toki_astro` evaluate on the TT axis. Conversion between the
//! two goes through [`crate::scales::delta_t_seconds`].

use chrono::{DateTime, TimeZone, Utc};

use crate::scales::delta_t_seconds;

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00 UTC).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Date on the UTC axis for an instant.
pub fn jd_utc(t: DateTime<Utc>) -> f64 {
    let secs = t.timestamp() as f64 + f64::from(t.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + secs / SECONDS_PER_DAY
}

/// Julian Date on the TT axis for an instant (ΔT applied).
pub fn jd_tt(t: DateTime<Utc>) -> f64 {
    let jd = jd_utc(t);
    jd + delta_t_seconds(jd) / SECONDS_PER_DAY
}

/// Julian centuries of TT since J2000.0 for an instant.
pub fn julian_centuries_tt(t: DateTime<Utc>) -> f64 {
    (jd_tt(t) - J2000_JD) / 36_525.0
}

/// Instant for a Julian Date on the UTC axis.
///
/// Sub-millisecond truncation is acceptable here: callers refine event
/// instants to second-level tolerance.
pub fn utc_from_jd(jd_utc: f64) -> DateTime<Utc> {
    let secs = (jd_utc - UNIX_EPOCH_JD) * SECONDS_PER_DAY;
    let whole = secs.floor() as i64;
    let nanos = (((secs - whole as f64) * 1e9).round() as u32).min(999_999_999);
    Utc.timestamp_opt(whole, nanos)
        .single()
        .expect("JD within the supported calendar range")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn unix_epoch_jd() {
        let t = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert!((jd_utc(t) - 2_440_587.5).abs() < 1e-9);
    }

    #[test]
    fn j2000_noon_utc() {
        // 2000-01-01T12:00 UTC is JD 2451545.0 on the UTC axis.
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((jd_utc(t) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn jd_roundtrip() {
        let t = Utc.with_ymd_and_hms(2017, 6, 21, 4, 24, 7).unwrap();
        let back = utc_from_jd(jd_utc(t));
        assert_eq!(back.timestamp(), t.timestamp());
    }

    #[test]
    fn tt_ahead_of_utc() {
        // In 2017, TT - UTC = 37 leap seconds + 32.184 s ≈ 69.2 s.
        let t = Utc.with_ymd_and_hms(2017, 6, 1, 0, 0, 0).unwrap();
        let dt_days = jd_tt(t) - jd_utc(t);
        assert!((dt_days * SECONDS_PER_DAY - 69.184).abs() < 0.01);
    }
}
