//! New-moon series.
//!
//! A new moon is a forward crossing of the lunar phase (Moon−Sun
//! elongation) through 0°. The series over any window is strictly
//! ascending with consecutive gaps inside the synodic bounds; a gap
//! outside them means the search dropped or duplicated an event and the
//! whole request fails rather than returning a defective series.

use chrono::{DateTime, Utc};
use toki_astro::AstronomyEngine;
use tracing::debug;

use crate::cancel::CancelToken;
use crate::error::SearchError;
use crate::rootfind::{RootFindConfig, find_forward_crossings};

/// Minimum days between consecutive new moons.
pub const MIN_SYNODIC_GAP_DAYS: f64 = 27.0;

/// Maximum days between consecutive new moons.
pub const MAX_SYNODIC_GAP_DAYS: f64 = 31.0;

/// Enumerate new-moon instants in `[t0, t1)`, sorted strictly ascending.
///
/// Endpoint policy: an event equal to `t0` is included, equal to `t1` is
/// excluded.
pub fn new_moons_between(
    engine: &AstronomyEngine,
    t0: DateTime<Utc>,
    t1: DateTime<Utc>,
    config: &RootFindConfig,
    cancel: &CancelToken,
) -> Result<Vec<DateTime<Utc>>, SearchError> {
    let phase = |t: DateTime<Utc>| engine.moon_phase_deg(t).map_err(SearchError::from);

    let mut moons = find_forward_crossings(&phase, 0.0, t0, t1, config, cancel)?;
    moons.retain(|&t| t < t1);

    for w in moons.windows(2) {
        let gap_days = (w[1] - w[0]).num_seconds() as f64 / 86_400.0;
        if !(MIN_SYNODIC_GAP_DAYS..=MAX_SYNODIC_GAP_DAYS).contains(&gap_days) {
            return Err(SearchError::RootFindFailed(
                "new-moon spacing outside synodic bounds",
            ));
        }
    }

    debug!(count = moons.len(), "new-moon series resolved");
    Ok(moons)
}
