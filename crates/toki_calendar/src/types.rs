//! Types for resolved lunisolar months and dates.

use chrono::{DateTime, NaiveDate, Utc};

/// One resolved lunisolar month.
///
/// The instant span is half-open `[start_utc, end_utc)` between
/// consecutive new moons; the civil span is the JST attribution of those
/// instants, so consecutive months tile the JST day axis without gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMonth {
    /// Month number 1..=12; a leap month repeats its predecessor's number.
    pub month_no: u8,
    /// Whether this is the inserted leap month (閏月).
    pub leap: bool,
    /// Lunisolar year label.
    pub year: i32,
    /// Opening new moon.
    pub start_utc: DateTime<Utc>,
    /// Next new moon (exclusive).
    pub end_utc: DateTime<Utc>,
    /// JST civil date of the opening new moon: day 1 of the month.
    pub start_date: NaiveDate,
    /// JST civil date of the next new moon (exclusive).
    pub end_date: NaiveDate,
}

/// A lunisolar date for one JST civil day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunisolarDate {
    pub year: i32,
    /// 1..=12.
    pub month: u8,
    /// 1..=30.
    pub day: u8,
    pub leap: bool,
}
