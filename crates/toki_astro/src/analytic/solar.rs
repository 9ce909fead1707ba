//! Apparent solar ecliptic longitude of date.
//!
//! Two-body mean longitude + equation of center, corrected by the
//! classical planetary perturbation terms (Venus, Jupiter, Moon and the
//! long-period term), nutation in longitude, and annual aberration.
//! Sources: standard solar theory as tabulated by Meeus and the Newcomb
//! perturbation terms (public domain).

use toki_time::J2000_JD;

use super::nutation::nutation_deg;
use crate::angle::norm360;

/// Constant of aberration in degrees (20.4898").
const ABERRATION_DEG: f64 = 20.4898 / 3_600.0;

/// Geometric true longitude and radius vector (AU).
///
/// `t` = Julian centuries of TT since J2000.0.
fn true_longitude_and_radius(t: f64) -> (f64, f64) {
    // Mean longitude and mean anomaly.
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t;
    let m_rad = m.to_radians();

    // Equation of center.
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    let true_lon = l0 + c;
    let nu = (m + c).to_radians();

    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;
    let r = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    (true_lon, r)
}

/// Classical perturbation corrections to the Sun's longitude, in degrees.
///
/// Arguments are referred to the 1900 epoch as originally published.
fn planetary_perturbations_deg(jd_tt: f64) -> f64 {
    let t = (jd_tt - 2_415_020.0) / 36_525.0;

    let a = (153.23 + 22_518.754_1 * t).to_radians(); // Venus
    let b = (216.57 + 45_037.508_2 * t).to_radians(); // Venus, 2nd harmonic
    let c = (312.69 + 32_964.357_7 * t).to_radians(); // Jupiter
    let d = (350.74 + 445_267.114_2 * t - 0.001_44 * t * t).to_radians(); // Moon
    let e = (231.19 + 20.20 * t).to_radians(); // long-period

    0.001_34 * a.cos()
        + 0.001_54 * b.cos()
        + 0.002_00 * c.cos()
        + 0.001_79 * d.sin()
        + 0.001_78 * e.sin()
}

/// Apparent ecliptic longitude of date in degrees [0, 360).
pub fn apparent_longitude_deg(jd_tt: f64) -> f64 {
    let t = (jd_tt - J2000_JD) / 36_525.0;
    let (true_lon, r) = true_longitude_and_radius(t);
    let (dpsi, _) = nutation_deg(t);
    let lon = true_lon + planetary_perturbations_deg(jd_tt) + dpsi - ABERRATION_DEG / r;
    norm360(lon)
}
