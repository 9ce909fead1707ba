//! JST day-basis attribution.
//!
//! The authoritative day boundary of the public contract is Japan Standard
//! Time (UTC+09:00). [`attribute_jst`] is the sole canonical rule that
//! assigns an instant to a civil date; no other code path re-attributes by
//! a different offset.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};

/// JST offset from UTC in seconds.
pub const JST_OFFSET_SECONDS: i32 = 9 * 3600;

/// The fixed +09:00 offset.
pub fn jst_offset() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECONDS).expect("+09:00 is a valid offset")
}

/// Shift an instant onto the JST wall clock.
pub fn to_jst(t: DateTime<Utc>) -> DateTime<FixedOffset> {
    t.with_timezone(&jst_offset())
}

/// The civil date an instant attributes to under the JST day basis.
pub fn attribute_jst(t: DateTime<Utc>) -> NaiveDate {
    to_jst(t).date_naive()
}

/// UTC instant of JST midnight opening a civil date.
pub fn jst_midnight_utc(d: NaiveDate) -> DateTime<Utc> {
    let local = d.and_hms_opt(0, 0, 0).expect("midnight exists");
    jst_offset()
        .from_local_datetime(&local)
        .single()
        .expect("fixed offsets are unambiguous")
        .with_timezone(&Utc)
}

/// Format an instant as `YYYY-MM-DDTHH:MM:SS+09:00` (seconds truncated).
pub fn format_iso_jst(t: DateTime<Utc>) -> String {
    let jst = to_jst(t).with_nanosecond(0).expect("zero nanos is valid");
    jst.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn attribution_shifts_by_nine_hours() {
        // 15:00 UTC is 00:00 JST of the next civil day.
        let t = Utc.with_ymd_and_hms(2017, 7, 22, 15, 0, 0).unwrap();
        assert_eq!(
            attribute_jst(t),
            NaiveDate::from_ymd_opt(2017, 7, 23).unwrap()
        );
    }

    #[test]
    fn instant_just_before_jst_midnight() {
        let t = Utc.with_ymd_and_hms(2017, 7, 22, 14, 59, 59).unwrap();
        assert_eq!(
            attribute_jst(t),
            NaiveDate::from_ymd_opt(2017, 7, 22).unwrap()
        );
    }

    #[test]
    fn term_at_exact_jst_midnight_goes_to_following_day() {
        // Wall-clock rule: 00:00:00 JST belongs to the day it opens.
        let t = Utc.with_ymd_and_hms(2020, 3, 4, 15, 0, 0).unwrap();
        assert_eq!(
            attribute_jst(t),
            NaiveDate::from_ymd_opt(2020, 3, 5).unwrap()
        );
    }

    #[test]
    fn midnight_roundtrip() {
        let d = NaiveDate::from_ymd_opt(2017, 6, 24).unwrap();
        let t = jst_midnight_utc(d);
        assert_eq!(t, Utc.with_ymd_and_hms(2017, 6, 23, 15, 0, 0).unwrap());
        assert_eq!(attribute_jst(t), d);
    }

    #[test]
    fn iso_formatting_carries_offset() {
        let t = Utc.with_ymd_and_hms(2017, 6, 21, 4, 24, 6).unwrap();
        assert_eq!(format_iso_jst(t), "2017-06-21T13:24:06+09:00");
    }

    #[test]
    fn iso_formatting_truncates_subseconds() {
        let t = Utc
            .with_ymd_and_hms(2017, 6, 21, 4, 24, 6)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(900))
            .unwrap();
        assert_eq!(format_iso_jst(t), "2017-06-21T13:24:06+09:00");
    }
}
