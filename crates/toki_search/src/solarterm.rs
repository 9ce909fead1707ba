//! The 24 solar terms (二十四節気).
//!
//! Each term is a forward crossing of the apparent solar longitude through
//! a multiple of 15°. Even multiples of 30° are the major terms (中気) that
//! drive leap-month placement; the odd multiples are the minor terms (節).

use chrono::{DateTime, Utc};
use toki_astro::AstronomyEngine;

use crate::cancel::CancelToken;
use crate::error::SearchError;
use crate::rootfind::{RootFindConfig, find_forward_crossings};

/// Canonical term names keyed by ecliptic longitude.
#[rustfmt::skip]
const SEKKI_NAMES: [(u16, &str); 24] = [
    (0,   "春分"), (15,  "清明"), (30,  "穀雨"), (45,  "立夏"),
    (60,  "小満"), (75,  "芒種"), (90,  "夏至"), (105, "小暑"),
    (120, "大暑"), (135, "立秋"), (150, "処暑"), (165, "白露"),
    (180, "秋分"), (195, "寒露"), (210, "霜降"), (225, "立冬"),
    (240, "小雪"), (255, "大雪"), (270, "冬至"), (285, "小寒"),
    (300, "大寒"), (315, "立春"), (330, "雨水"), (345, "啓蟄"),
];

/// A solar-term event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarTerm {
    /// Canonical Japanese name.
    pub name: &'static str,
    /// Ecliptic longitude, a multiple of 15 in 0..=345.
    pub degree: u16,
    /// Crossing instant.
    pub at_utc: DateTime<Utc>,
}

impl SolarTerm {
    /// Major terms (中気) sit on multiples of 30°.
    pub fn is_major(&self) -> bool {
        is_major_degree(self.degree)
    }
}

/// Whether a term longitude is a major term (中気).
pub fn is_major_degree(degree: u16) -> bool {
    degree % 30 == 0
}

/// Canonical name for a term longitude.
pub fn sekki_name_for_degree(degree: u16) -> Option<&'static str> {
    SEKKI_NAMES
        .iter()
        .find(|&&(d, _)| d == degree)
        .map(|&(_, name)| name)
}

/// Instants in `[t0, t1)` at which the solar longitude crosses
/// `target_deg` in the direction of increase.
pub fn solar_longitude_crossings(
    engine: &AstronomyEngine,
    t0: DateTime<Utc>,
    t1: DateTime<Utc>,
    target_deg: f64,
    config: &RootFindConfig,
    cancel: &CancelToken,
) -> Result<Vec<DateTime<Utc>>, SearchError> {
    let sun = |t: DateTime<Utc>| engine.sun_lon(t).map_err(SearchError::from);
    let mut roots = find_forward_crossings(&sun, target_deg, t0, t1, config, cancel)?;
    roots.retain(|&t| t < t1);
    Ok(roots)
}

/// All 24-term events in `[t0, t1)`, merged and sorted by instant.
pub fn solar_terms_between(
    engine: &AstronomyEngine,
    t0: DateTime<Utc>,
    t1: DateTime<Utc>,
    config: &RootFindConfig,
    cancel: &CancelToken,
) -> Result<Vec<SolarTerm>, SearchError> {
    let mut events = Vec::new();
    for &(degree, name) in SEKKI_NAMES.iter() {
        let crossings =
            solar_longitude_crossings(engine, t0, t1, f64::from(degree), config, cancel)?;
        for at_utc in crossings {
            events.push(SolarTerm {
                name,
                degree,
                at_utc,
            });
        }
    }
    events.sort_by_key(|e| e.at_utc);
    Ok(events)
}
