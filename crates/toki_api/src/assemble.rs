//! Day and range record assembly.
//!
//! A range is assembled once: months are resolved with their margin, the
//! solar-term and new-moon events are enumerated over the padded window,
//! and every per-day block is the restriction of those range-level lists
//! to its JST civil date. The single-day record is the one-day range, so
//! the two paths cannot drift apart.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use toki_astro::{engine_for, resolve_ephemeris};
use toki_calendar::{
    BuilderConfig, CalendarError, Rokuyo, day_label, kanji_month_name, month_label,
    resolve_months,
};
use toki_search::{CancelToken, RootFindConfig, solar_terms_between};
use toki_time::{attribute_jst, format_iso_jst, jst_midnight_utc};
use tracing::{debug, warn};

use crate::config::CalendarRequest;
use crate::error::ApiError;
use crate::records::{
    AstronomyBlock, DayRecord, EventsBlock, LunisolarBlock, Meta, PhaseEvent, RangeInfo,
    RangeRecord, SekkiBlock, SekkiEvent,
};

/// Padding around the requested range when enumerating solar terms, so an
/// event just across a JST midnight is not lost to the UTC window edge.
const SEKKI_PAD_DAYS: i64 = 2;

/// Round to the published moon-age precision of six decimal places.
fn round6(x: f64) -> f64 {
    (x * 1e6).round() / 1e6
}

/// The public record for a single JST civil date.
pub fn calendar_day(date: NaiveDate, request: &CalendarRequest) -> Result<DayRecord, ApiError> {
    calendar_day_with_cancel(date, request, &CancelToken::new())
}

/// [`calendar_day`] with cooperative cancellation.
pub fn calendar_day_with_cancel(
    date: NaiveDate,
    request: &CalendarRequest,
    cancel: &CancelToken,
) -> Result<DayRecord, ApiError> {
    let mut range = assemble(date, date, request, cancel)?;
    Ok(range.days.remove(0))
}

/// The public record for an inclusive date range.
pub fn calendar_range(
    start: NaiveDate,
    end: NaiveDate,
    request: &CalendarRequest,
) -> Result<RangeRecord, ApiError> {
    calendar_range_with_cancel(start, end, request, &CancelToken::new())
}

/// [`calendar_range`] with cooperative cancellation.
pub fn calendar_range_with_cancel(
    start: NaiveDate,
    end: NaiveDate,
    request: &CalendarRequest,
    cancel: &CancelToken,
) -> Result<RangeRecord, ApiError> {
    assemble(start, end, request, cancel)
}

fn assemble(
    start: NaiveDate,
    end: NaiveDate,
    request: &CalendarRequest,
    cancel: &CancelToken,
) -> Result<RangeRecord, ApiError> {
    let started = std::time::Instant::now();
    if end < start {
        return Err(ApiError::InvalidInput(format!(
            "end {end} precedes start {start}"
        )));
    }
    let day_count = (end - start).num_days() + 1;
    let limit = request.effective_limit_days();
    if day_count > limit {
        return Err(ApiError::InvalidInput(format!(
            "range of {day_count} days exceeds the limit of {limit}"
        )));
    }
    let (lat, lon) = request.observer()?;

    let resolved = resolve_ephemeris(&request.ephemeris_request());
    let engine = engine_for(&resolved)?;
    let root = RootFindConfig::default();

    let months = resolve_months(
        &engine,
        start,
        end,
        &BuilderConfig { root: root.clone() },
        cancel,
    )?;

    let meta = Meta {
        tz: "Asia/Tokyo".into(),
        day_basis: "jst".into(),
        ephemeris: engine.ephemeris_name().into(),
    };

    // Range-level solar terms, attributed to JST dates.
    let t0 = jst_midnight_utc(start) - Duration::days(SEKKI_PAD_DAYS);
    let t1 = jst_midnight_utc(end + Duration::days(1)) + Duration::days(SEKKI_PAD_DAYS);
    let terms = solar_terms_between(&engine, t0, t1, &root, cancel)?;

    let mut sekki_events: Vec<SekkiEvent> = Vec::new();
    let mut sekki_by_date: BTreeMap<NaiveDate, Vec<SekkiEvent>> = BTreeMap::new();
    for term in &terms {
        let date_jst = attribute_jst(term.at_utc);
        if date_jst < start || date_jst > end {
            continue;
        }
        let event = SekkiEvent {
            name: term.name.to_string(),
            degree: term.degree,
            at_jst: format_iso_jst(term.at_utc),
            date_jst: date_jst.to_string(),
        };
        sekki_by_date
            .entry(date_jst)
            .or_default()
            .push(event.clone());
        sekki_events.push(event);
    }

    // Range-level new moons come straight off the resolved month starts.
    let mut moon_phases: Vec<PhaseEvent> = Vec::new();
    let mut phase_by_date: BTreeMap<NaiveDate, PhaseEvent> = BTreeMap::new();
    for month in months.months() {
        let date_jst = attribute_jst(month.start_utc);
        if date_jst < start || date_jst > end {
            continue;
        }
        let event = PhaseEvent {
            kind: "new_moon".into(),
            at_jst: format_iso_jst(month.start_utc),
            date_jst: date_jst.to_string(),
        };
        phase_by_date.insert(date_jst, event.clone());
        moon_phases.push(event);
    }

    let mut days: Vec<DayRecord> = Vec::with_capacity(day_count as usize);
    let mut d = start;
    while d <= end {
        let ld = months.lookup(d)?;

        let lunisolar = LunisolarBlock {
            year: ld.year,
            month: ld.month,
            day: ld.day,
            leap: ld.leap,
            month_label: month_label(ld.month, ld.leap),
            label: day_label(ld.month, ld.day, ld.leap),
            month_name: kanji_month_name(ld.month, ld.leap),
        };

        let rokuyo = Rokuyo::from_month_day(ld.month, ld.day).label().to_string();

        let sekki = sekki_by_date.get(&d).map(|events| SekkiBlock {
            primary: events[0].clone(),
            events: events.clone(),
        });

        let midnight = jst_midnight_utc(d);
        let moon_age = months.moon_age_days(midnight).ok_or_else(|| {
            ApiError::Calendar(CalendarError::LunisolarResolutionFailed {
                reason: format!("no new moon precedes {d} in the resolved window"),
            })
        })?;

        let (sunrise, sunset) = match engine.sunrise_sunset(d, lat, lon) {
            Ok((rise, set)) => (rise.map(format_iso_jst), set.map(format_iso_jst)),
            Err(e) => {
                warn!(date = %d, error = %e, "sunrise/sunset computation failed");
                (None, None)
            }
        };

        days.push(DayRecord {
            meta: meta.clone(),
            date: d.to_string(),
            lunisolar,
            rokuyo,
            sekki,
            astronomy: AstronomyBlock {
                moon_age: round6(moon_age),
                phase_event: phase_by_date.get(&d).cloned(),
                sunrise,
                sunset,
            },
        });
        d += Duration::days(1);
    }

    debug!(
        start = %start,
        end = %end,
        days = days.len(),
        sekki = sekki_events.len(),
        phases = moon_phases.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "range assembled"
    );

    Ok(RangeRecord {
        meta,
        range: RangeInfo {
            start: start.to_string(),
            end: end.to_string(),
        },
        days,
        events: EventsBlock {
            sekki: sekki_events,
            moon_phases,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round6_truncates_noise() {
        assert_eq!(round6(28.469_999_999_7), 28.47);
        assert_eq!(round6(0.0), 0.0);
        assert_eq!(round6(12.123_456_789), 12.123_457);
    }

    #[test]
    fn reversed_range_is_invalid_input() {
        let err = calendar_range(
            NaiveDate::from_ymd_opt(2017, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(2017, 6, 1).unwrap(),
            &CalendarRequest::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn oversized_range_is_invalid_input() {
        let err = calendar_range(
            NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            &CalendarRequest::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }
}
