//! Bracket-and-bisect root finding on cyclic angular quantities.
//!
//! Finds every instant in `[a, b]` at which a 360°-wrapping function
//! crosses a target angle in the direction of increase. Crossing detection
//! works on the residual mapped to (-180, 180] — raw angles are never
//! subtracted, so a 359.9° → 0.1° step reads as a small forward move and a
//! wrap at the ±180 branch is rejected as spurious.

use chrono::{DateTime, Duration, Utc};
use toki_astro::angdiff180;

use crate::cancel::CancelToken;
use crate::error::SearchError;

/// Residual jumps at least this large between adjacent samples are
/// branch wraps, not crossings.
const WRAP_REJECT_DEG: f64 = 270.0;

/// Residual tolerance for accepting a refined root as a genuine crossing.
const VERIFY_TOLERANCE_DEG: f64 = 0.05;

/// Root-finder configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RootFindConfig {
    /// Coarse scan step in hours. The default of 3 h is safe for every
    /// target quantity here: the fastest (lunar phase, ~12.19°/day) moves
    /// ~1.5° per step, nowhere near a full turn.
    pub scan_step_hours: f64,
    /// Bisection time tolerance in seconds.
    pub tol_seconds: f64,
    /// Bisection residual tolerance in degrees.
    pub tol_degrees: f64,
    /// Bisection iteration cap.
    pub max_iterations: u32,
    /// Crossings closer than this are duplicates from bracket boundaries.
    pub merge_seconds: f64,
}

impl Default for RootFindConfig {
    fn default() -> Self {
        Self {
            scan_step_hours: 3.0,
            tol_seconds: 1.0,
            tol_degrees: 1e-4,
            max_iterations: 60,
            merge_seconds: 60.0,
        }
    }
}

impl RootFindConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(self.scan_step_hours > 0.0) {
            return Err("scan_step_hours must be positive");
        }
        if !(self.tol_seconds > 0.0) {
            return Err("tol_seconds must be positive");
        }
        if !(self.tol_degrees > 0.0) {
            return Err("tol_degrees must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be greater than zero");
        }
        if !(self.merge_seconds >= 0.0) {
            return Err("merge_seconds must be non-negative");
        }
        Ok(())
    }
}

/// A forward crossing exists when the residual moves from below zero to
/// zero-or-above without jumping the ±180 branch.
fn is_forward_crossing(u_prev: f64, u_cur: f64) -> bool {
    u_prev < 0.0 && u_cur >= 0.0 && (u_cur - u_prev) < WRAP_REJECT_DEG
}

/// Bisect a bracketing interval down to the configured tolerance.
fn bisect<F>(
    g: &F,
    target_deg: f64,
    mut t_lo: DateTime<Utc>,
    mut u_lo: f64,
    mut t_hi: DateTime<Utc>,
    config: &RootFindConfig,
) -> Result<DateTime<Utc>, SearchError>
where
    F: Fn(DateTime<Utc>) -> Result<f64, SearchError>,
{
    for _ in 0..config.max_iterations {
        let span = t_hi - t_lo;
        if span.num_seconds() as f64 <= config.tol_seconds {
            break;
        }

        let t_mid = t_lo + span / 2;
        let u_mid = angdiff180(g(t_mid)? - target_deg);

        if u_mid.abs() <= config.tol_degrees {
            return Ok(t_mid);
        }

        if u_lo < 0.0 && u_mid >= 0.0 {
            t_hi = t_mid;
        } else {
            t_lo = t_mid;
            u_lo = u_mid;
        }
    }

    Ok(t_lo + (t_hi - t_lo) / 2)
}

/// Find every forward crossing of `target_deg` in `[a, b]`.
///
/// `g` is evaluated modulo 360°; the scan step comes from `config`. The
/// left endpoint is included; a crossing landing exactly on `b` is kept
/// only when its bracket lies inside the interval (callers applying a
/// half-open policy filter afterwards). Results are strictly ascending,
/// deduplicated within `merge_seconds`.
pub fn find_forward_crossings<F>(
    g: &F,
    target_deg: f64,
    a: DateTime<Utc>,
    b: DateTime<Utc>,
    config: &RootFindConfig,
    cancel: &CancelToken,
) -> Result<Vec<DateTime<Utc>>, SearchError>
where
    F: Fn(DateTime<Utc>) -> Result<f64, SearchError>,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    if b <= a {
        return Err(SearchError::InvalidRange("interval end must be after start"));
    }

    let step = Duration::milliseconds((config.scan_step_hours * 3_600_000.0) as i64);

    let mut roots: Vec<DateTime<Utc>> = Vec::new();
    let mut t_prev = a;
    let mut u_prev = angdiff180(g(t_prev)? - target_deg);

    loop {
        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        let t_cur = std::cmp::min(t_prev + step, b);
        let u_cur = angdiff180(g(t_cur)? - target_deg);

        if is_forward_crossing(u_prev, u_cur) {
            let root = bisect(g, target_deg, t_prev, u_prev, t_cur, config)?;

            let residual = angdiff180(g(root)? - target_deg);
            if residual.abs() > VERIFY_TOLERANCE_DEG {
                return Err(SearchError::RootFindFailed(
                    "refined root is not on the target crossing",
                ));
            }

            let dup = roots
                .last()
                .map(|&last| (root - last).num_seconds().unsigned_abs() as f64 <= config.merge_seconds)
                .unwrap_or(false);
            if !dup {
                roots.push(root);
            }
        }

        if t_cur >= b {
            break;
        }
        t_prev = t_cur;
        u_prev = u_cur;
    }

    Ok(roots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    /// Linear angle growing `rate` degrees per day from epoch 1970.
    fn linear(rate: f64) -> impl Fn(DateTime<Utc>) -> Result<f64, SearchError> {
        move |t: DateTime<Utc>| {
            let days = t.timestamp() as f64 / 86_400.0;
            Ok((days * rate).rem_euclid(360.0))
        }
    }

    #[test]
    fn forward_crossing_detection() {
        assert!(is_forward_crossing(-0.5, 0.3));
        assert!(is_forward_crossing(-3.0, 0.0));
        assert!(!is_forward_crossing(0.3, -0.5), "backward motion");
        assert!(!is_forward_crossing(-179.0, 179.0), "±180 branch wrap");
    }

    #[test]
    fn finds_each_cycle_once() {
        // 12°/day: crosses 0° every 30 days.
        let g = linear(12.0);
        let roots = find_forward_crossings(
            &g,
            0.0,
            utc(1970, 1, 10, 0),
            utc(1970, 4, 10, 0),
            &RootFindConfig::default(),
            &CancelToken::new(),
        )
        .unwrap();
        assert_eq!(roots.len(), 3);
        for w in roots.windows(2) {
            let gap = (w[1] - w[0]).num_seconds() as f64 / 86_400.0;
            assert!((gap - 30.0).abs() < 0.01, "gap {gap}");
        }
    }

    #[test]
    fn crossing_instant_is_refined_to_tolerance() {
        // 12°/day from 1970-01-01: crosses 0° at exact 30-day marks.
        let g = linear(12.0);
        let roots = find_forward_crossings(
            &g,
            0.0,
            utc(1970, 1, 25, 0),
            utc(1970, 2, 5, 0),
            &RootFindConfig::default(),
            &CancelToken::new(),
        )
        .unwrap();
        assert_eq!(roots.len(), 1);
        let expected = utc(1970, 1, 31, 0);
        let off = (roots[0] - expected).num_seconds().abs();
        assert!(off <= 2, "off by {off}s");
    }

    #[test]
    fn nonzero_target() {
        let g = linear(1.0); // 1°/day, hits 90° at day 90
        let roots = find_forward_crossings(
            &g,
            90.0,
            utc(1970, 3, 1, 0),
            utc(1970, 5, 1, 0),
            &RootFindConfig::default(),
            &CancelToken::new(),
        )
        .unwrap();
        assert_eq!(roots.len(), 1);
        let expected = utc(1970, 4, 1, 0); // day 90
        assert!((roots[0] - expected).num_seconds().abs() <= 2);
    }

    #[test]
    fn wrap_at_zero_is_not_a_jump() {
        // Sample points straddling 359.9 → 0.1 must bracket, not explode.
        let g = linear(12.0);
        let roots = find_forward_crossings(
            &g,
            0.0,
            utc(1970, 1, 30, 12),
            utc(1970, 1, 31, 12),
            &RootFindConfig::default(),
            &CancelToken::new(),
        )
        .unwrap();
        assert_eq!(roots.len(), 1);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let g = linear(12.0);
        let err = find_forward_crossings(
            &g,
            0.0,
            utc(1970, 2, 1, 0),
            utc(1970, 1, 1, 0),
            &RootFindConfig::default(),
            &CancelToken::new(),
        )
        .unwrap_err();
        assert!(matches!(err, SearchError::InvalidRange(_)));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let g = linear(12.0);
        let config = RootFindConfig {
            scan_step_hours: 0.0,
            ..RootFindConfig::default()
        };
        let err = find_forward_crossings(
            &g,
            0.0,
            utc(1970, 1, 1, 0),
            utc(1970, 2, 1, 0),
            &config,
            &CancelToken::new(),
        )
        .unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(_)));
    }

    #[test]
    fn cancellation_stops_the_scan() {
        let token = CancelToken::new();
        token.cancel();
        let g = linear(12.0);
        let err = find_forward_crossings(
            &g,
            0.0,
            utc(1970, 1, 1, 0),
            utc(1971, 1, 1, 0),
            &RootFindConfig::default(),
            &token,
        )
        .unwrap_err();
        assert_eq!(err, SearchError::Cancelled);
    }

    #[test]
    fn backward_crossings_are_ignored() {
        // Decreasing angle crosses 0° downward only.
        let g = |t: DateTime<Utc>| {
            let days = t.timestamp() as f64 / 86_400.0;
            Ok((360.0 - days * 12.0).rem_euclid(360.0))
        };
        let roots = find_forward_crossings(
            &g,
            0.0,
            utc(1970, 1, 10, 0),
            utc(1970, 3, 10, 0),
            &RootFindConfig::default(),
            &CancelToken::new(),
        )
        .unwrap();
        assert!(roots.is_empty(), "got {roots:?}");
    }
}
