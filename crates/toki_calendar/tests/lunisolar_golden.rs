//! Golden-value integration tests for lunisolar resolution.
//!
//! Validates leap-month placement, month numbering, and year labels
//! against the published Japanese lunisolar calendar, using the bundled
//! semi-analytic provider.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use toki_astro::{AnalyticProvider, AstronomyEngine};
use toki_calendar::{BuilderConfig, MonthCache, resolve_months};
use toki_search::CancelToken;

fn engine() -> AstronomyEngine {
    AstronomyEngine::new(Arc::new(AnalyticProvider::new()), "de440s.bsp")
}

fn resolve(d0: (i32, u32, u32), d1: (i32, u32, u32)) -> MonthCache {
    resolve_months(
        &engine(),
        NaiveDate::from_ymd_opt(d0.0, d0.1, d0.2).unwrap(),
        NaiveDate::from_ymd_opt(d1.0, d1.1, d1.2).unwrap(),
        &BuilderConfig::default(),
        &CancelToken::new(),
    )
    .unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 2017 had the leap fifth month (閏五月), 2017-06-24 .. 2017-07-22 JST.
#[test]
fn leap_fifth_month_of_2017() {
    let cache = resolve((2017, 6, 1), (2017, 8, 1));

    let ld = cache.lookup(date(2017, 6, 24)).unwrap();
    assert_eq!(ld.year, 2017);
    assert_eq!(ld.month, 5);
    assert_eq!(ld.day, 1);
    assert!(ld.leap, "2017-06-24 opens 閏五月");

    // The day before still belongs to the regular fifth month.
    let prev = cache.lookup(date(2017, 6, 23)).unwrap();
    assert_eq!(prev.month, 5);
    assert!(!prev.leap);

    // 六月 opens on 2017-07-23 (the new moon attributes to that JST date).
    let next = cache.lookup(date(2017, 7, 23)).unwrap();
    assert_eq!(next.month, 6);
    assert_eq!(next.day, 1);
    assert!(!next.leap);
}

/// The lunisolar new year of 2020 fell on 2020-01-25.
#[test]
fn lunar_new_year_2020() {
    let cache = resolve((2020, 1, 1), (2020, 2, 10));

    let ld = cache.lookup(date(2020, 1, 25)).unwrap();
    assert_eq!(ld.year, 2020);
    assert_eq!(ld.month, 1);
    assert_eq!(ld.day, 1);
    assert!(!ld.leap);

    // New Year's Eve of the old calendar.
    let eve = cache.lookup(date(2020, 1, 24)).unwrap();
    assert_eq!(eve.month, 12);
    assert_eq!(eve.year, 2019, "months 11–12 carry the 冬至 year");
}

/// Months 11 and 12 take the year of their anchoring 冬至 even when the
/// civil date has already rolled over.
#[test]
fn year_label_around_new_year() {
    let cache = resolve((2019, 12, 20), (2020, 2, 1));

    let in_m12 = cache.lookup(date(2020, 1, 10)).unwrap();
    assert_eq!(in_m12.month, 12);
    assert_eq!(in_m12.year, 2019);

    let in_m1 = cache.lookup(date(2020, 2, 1)).unwrap();
    assert_eq!(in_m1.month, 1);
    assert_eq!(in_m1.year, 2020);
}

/// Exactly one leap month inside the 13-month 2017 window.
#[test]
fn single_leap_in_2017_window() {
    let cache = resolve((2017, 1, 1), (2017, 12, 31));
    let leaps: Vec<_> = cache
        .months()
        .iter()
        .filter(|m| m.leap && m.start_date.year() == 2017)
        .collect();
    assert_eq!(leaps.len(), 1, "2017 carries exactly one leap month");
    assert_eq!(leaps[0].month_no, 5);
    assert_eq!(leaps[0].start_date, date(2017, 6, 24));
}

/// Every day of a full year resolves with fields in range, and the day
/// counter resets exactly at month starts.
#[test]
fn full_year_day_scan() {
    let cache = resolve((2018, 1, 1), (2018, 12, 31));
    let mut d = date(2018, 1, 1);
    let mut prev_day: Option<u8> = None;
    while d <= date(2018, 12, 31) {
        let ld = cache.lookup(d).unwrap();
        assert!((1..=12).contains(&ld.month), "month {} on {d}", ld.month);
        assert!((1..=30).contains(&ld.day), "day {} on {d}", ld.day);
        if let Some(prev) = prev_day {
            if ld.day != 1 {
                assert_eq!(ld.day, prev + 1, "day sequence broke on {d}");
            }
        }
        prev_day = Some(ld.day);
        d += chrono::Duration::days(1);
    }
}

/// The anchor month (containing 冬至) is numbered 11 with the anchor year.
#[test]
fn anchor_month_of_2016() {
    let cache = resolve((2016, 12, 1), (2017, 1, 15));
    // 冬至 2016 fell on Dec 21 JST; its month ran Nov 29 .. Dec 28.
    let ld = cache.lookup(date(2016, 12, 21)).unwrap();
    assert_eq!(ld.month, 11);
    assert_eq!(ld.year, 2016);
    assert!(!ld.leap);
}

/// Consecutive months tile the JST day axis over a multi-year resolve.
#[test]
fn months_are_contiguous_over_three_years() {
    let cache = resolve((2016, 1, 1), (2018, 12, 31));
    for w in cache.months().windows(2) {
        assert_eq!(w[0].end_date, w[1].start_date);
        assert_eq!(w[0].end_utc, w[1].start_utc);
        let days = (w[0].end_date - w[0].start_date).num_days();
        assert!((29..=30).contains(&days), "month length {days}");
    }
}
