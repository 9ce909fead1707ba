//! Lunisolar month resolution.
//!
//! Pipeline: enumerate new moons and major solar terms over a padded
//! window, anchor each lunisolar year at its 冬至 (270°), count the spans
//! between consecutive anchors, place the leap month when the count is 13,
//! then number months sequentially from 11 at the anchor.
//!
//! All instant arithmetic stays in UTC. Membership of a term in a month is
//! judged on the JST day axis — month boundaries are JST civil dates, and
//! a term landing minutes after JST midnight belongs to the civil day it
//! opens, not to the UTC day it left.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use toki_astro::AstronomyEngine;
use toki_search::{
    CancelToken, RootFindConfig, new_moons_between, solar_longitude_crossings,
};
use toki_time::{attribute_jst, jst_midnight_utc};
use tracing::debug;

use crate::error::CalendarError;
use crate::types::{LunisolarDate, ResolvedMonth};

/// Margin on both sides of the requested civil range, so every month and
/// both anchoring 冬至 of the edge months resolve inside the window.
pub const RANGE_MARGIN_DAYS: i64 = 60;

/// Reach past the margin window for the anchoring 冬至 pair: at most one
/// tropical year plus one lunar month.
const ANCHOR_REACH_DAYS: i64 = 400;

/// Extra padding so the outermost anchors are bracketed by new moons.
const SERIES_PAD_DAYS: i64 = 40;

/// Month number the 冬至-bearing span always takes.
const ANCHOR_MONTH_NO: u8 = 11;

/// Builder configuration. The root-finder settings are shared by the
/// new-moon and solar-term searches.
#[derive(Debug, Clone, Default)]
pub struct BuilderConfig {
    pub root: RootFindConfig,
}

/// A major solar term pinned to its JST civil date.
#[derive(Debug, Clone, Copy)]
struct MajorTerm {
    degree: u16,
    at_utc: DateTime<Utc>,
    date: NaiveDate,
}

/// Resolved months for a range, ready for per-date lookup.
#[derive(Debug, Clone)]
pub struct MonthCache {
    months: Vec<ResolvedMonth>,
    start_dates: Vec<NaiveDate>,
}

impl MonthCache {
    /// The resolved months in chronological order.
    pub fn months(&self) -> &[ResolvedMonth] {
        &self.months
    }

    /// Lunisolar date for a JST civil date inside the resolved coverage.
    pub fn lookup(&self, d: NaiveDate) -> Result<LunisolarDate, CalendarError> {
        let i = self.start_dates.partition_point(|&sd| sd <= d);
        if i == 0 {
            return Err(CalendarError::resolution(format!(
                "{d} precedes the resolved months"
            )));
        }
        let month = &self.months[i - 1];
        if d >= month.end_date {
            return Err(CalendarError::resolution(format!(
                "{d} is past the resolved months"
            )));
        }

        let day = (d - month.start_date).num_days() + 1;
        debug_assert!((1..=30).contains(&day));
        Ok(LunisolarDate {
            year: month.year,
            month: month.month_no,
            day: day as u8,
            leap: month.leap,
        })
    }

    /// Days since the opening new moon of the month containing `t`.
    pub fn moon_age_days(&self, t: DateTime<Utc>) -> Option<f64> {
        let i = self.months.partition_point(|m| m.start_utc <= t);
        if i == 0 {
            return None;
        }
        let month = &self.months[i - 1];
        Some((t - month.start_utc).num_seconds() as f64 / 86_400.0)
    }
}

/// Index of the span whose JST civil interval contains `date`.
fn span_index_for_date(moon_dates: &[NaiveDate], date: NaiveDate) -> Option<usize> {
    let i = moon_dates.partition_point(|&sd| sd <= date);
    if i == 0 || i >= moon_dates.len() {
        return None;
    }
    Some(i - 1)
}

/// Whether any major term falls inside the civil span `[start, end)`.
fn span_has_major(majors: &[MajorTerm], start: NaiveDate, end: NaiveDate) -> bool {
    majors.iter().any(|m| start <= m.date && m.date < end)
}

/// Resolve every lunisolar month needed to cover `[d_start, d_end]` in JST
/// civil dates, with the documented 60-day margin on both ends.
///
/// Fails with `LunisolarResolutionFailed` when an anchor or a required new
/// moon cannot be located; no partial month list is ever returned.
pub fn resolve_months(
    engine: &AstronomyEngine,
    d_start: NaiveDate,
    d_end: NaiveDate,
    config: &BuilderConfig,
    cancel: &CancelToken,
) -> Result<MonthCache, CalendarError> {
    if d_end < d_start {
        return Err(CalendarError::resolution("reversed civil range"));
    }

    let margin_start = d_start - Duration::days(RANGE_MARGIN_DAYS);
    let margin_end = d_end + Duration::days(RANGE_MARGIN_DAYS);

    // Anchor window for the major terms; the new-moon series extends past
    // it on both sides so every 冬至 found here is bracketed by moons.
    let a0 = jst_midnight_utc(margin_start) - Duration::days(ANCHOR_REACH_DAYS);
    let a1 = jst_midnight_utc(margin_end + Duration::days(1)) + Duration::days(ANCHOR_REACH_DAYS);
    let t0 = a0 - Duration::days(SERIES_PAD_DAYS);
    let t1 = a1 + Duration::days(SERIES_PAD_DAYS);

    // Major terms over the anchor window, pinned to JST dates.
    let mut majors: Vec<MajorTerm> = Vec::new();
    for k in 0..12u16 {
        let degree = k * 30;
        let crossings =
            solar_longitude_crossings(engine, a0, a1, f64::from(degree), &config.root, cancel)?;
        for at_utc in crossings {
            majors.push(MajorTerm {
                degree,
                at_utc,
                date: attribute_jst(at_utc),
            });
        }
    }
    majors.sort_by_key(|m| m.at_utc);

    let solstices: Vec<&MajorTerm> = majors.iter().filter(|m| m.degree == 270).collect();
    if solstices.len() < 2 {
        return Err(CalendarError::resolution(
            "fewer than two 冬至 anchors in the padded window",
        ));
    }

    let moons = new_moons_between(engine, t0, t1, &config.root, cancel)?;
    if moons.len() < 2 {
        return Err(CalendarError::resolution(
            "not enough new moons in the padded window",
        ));
    }
    let moon_dates: Vec<NaiveDate> = moons.iter().map(|&t| attribute_jst(t)).collect();

    let mut months: Vec<ResolvedMonth> = Vec::new();
    for pair in solstices.windows(2) {
        let (s0, s1) = (pair[0], pair[1]);

        let a_idx = span_index_for_date(&moon_dates, s0.date).ok_or_else(|| {
            CalendarError::resolution(format!(
                "冬至 {} not bracketed by the new-moon series",
                s0.date
            ))
        })?;
        let b_idx = span_index_for_date(&moon_dates, s1.date).ok_or_else(|| {
            CalendarError::resolution(format!(
                "冬至 {} not bracketed by the new-moon series",
                s1.date
            ))
        })?;

        let span_count = b_idx - a_idx;
        if span_count != 12 && span_count != 13 {
            return Err(CalendarError::resolution(format!(
                "{span_count} months between consecutive 冬至 anchors"
            )));
        }

        // A 13-month year inserts the earliest span with no major term.
        let leap_pos = if span_count == 13 {
            let pos = (0..span_count).find(|&pos| {
                !span_has_major(
                    &majors,
                    moon_dates[a_idx + pos],
                    moon_dates[a_idx + pos + 1],
                )
            });
            match pos {
                Some(p) => Some(p),
                None => {
                    return Err(CalendarError::resolution(
                        "13-month year without a majorless span",
                    ));
                }
            }
        } else {
            None
        };

        debug!(
            anchor = %s0.date,
            span_count,
            leap_pos = ?leap_pos,
            "lunisolar year window resolved"
        );

        let anchor_year = s0.date.year();
        let mut month_no = ANCHOR_MONTH_NO;
        for pos in 0..span_count {
            let leap = leap_pos == Some(pos);
            if pos > 0 && !leap {
                month_no = if month_no == 12 { 1 } else { month_no + 1 };
            }

            let i = a_idx + pos;
            let start_date = moon_dates[i];
            let year = if month_no >= ANCHOR_MONTH_NO {
                anchor_year
            } else {
                start_date.year()
            };

            months.push(ResolvedMonth {
                month_no,
                leap,
                year,
                start_utc: moons[i],
                end_utc: moons[i + 1],
                start_date,
                end_date: moon_dates[i + 1],
            });
        }
    }

    if months.is_empty() {
        return Err(CalendarError::resolution("no months resolved"));
    }
    let first = months.first().expect("non-empty");
    let last = months.last().expect("non-empty");
    if first.start_date > margin_start || last.end_date <= margin_end {
        return Err(CalendarError::resolution(format!(
            "resolved months cover {}..{} but the margin window needs {}..{}",
            first.start_date, last.end_date, margin_start, margin_end
        )));
    }

    let start_dates = months.iter().map(|m| m.start_date).collect();
    Ok(MonthCache {
        months,
        start_dates,
    })
}
