//! Low-order nutation and mean obliquity.
//!
//! Truncated IAU lunisolar nutation: the four leading terms of the
//! longitude/obliquity series, good to ~0.5 arcsec — two orders below the
//! series truncation error elsewhere in this provider.
//!
//! Source: IAU nutation theory leading terms (public domain standard).

/// Nutation in longitude (Δψ) and obliquity (Δε), both in degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn nutation_deg(t: f64) -> (f64, f64) {
    // Longitude of the Moon's ascending node.
    let omega = (125.044_52 - 1_934.136_261 * t).to_radians();
    // Mean longitudes of Sun and Moon.
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();

    let dpsi_arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin()
        - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let deps_arcsec = 9.20 * omega.cos()
        + 0.57 * (2.0 * l_sun).cos()
        + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos();

    (dpsi_arcsec / 3_600.0, deps_arcsec / 3_600.0)
}

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    // 23°26'21.448" − 46.8150"t − 0.00059"t² + 0.001813"t³
    23.439_291_111 - (46.8150 * t + 0.000_59 * t * t - 0.001_813 * t * t * t) / 3_600.0
}

/// True obliquity (mean + nutation in obliquity) in degrees.
pub fn true_obliquity_deg(t: f64) -> f64 {
    let (_, deps) = nutation_deg(t);
    mean_obliquity_deg(t) + deps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nutation_magnitude_is_bounded() {
        // |Δψ| never exceeds ~19 arcsec.
        for i in -20..=20 {
            let t = i as f64 / 10.0;
            let (dpsi, deps) = nutation_deg(t);
            assert!(dpsi.abs() < 20.0 / 3_600.0, "Δψ out of range at t={t}");
            assert!(deps.abs() < 11.0 / 3_600.0, "Δε out of range at t={t}");
        }
    }

    #[test]
    fn obliquity_at_j2000() {
        let eps = mean_obliquity_deg(0.0);
        assert!((eps - 23.439_291).abs() < 1e-5);
    }

    #[test]
    fn obliquity_decreases_slowly() {
        let now = mean_obliquity_deg(0.0);
        let next_century = mean_obliquity_deg(1.0);
        assert!(next_century < now);
        assert!((now - next_century - 46.815 / 3_600.0).abs() < 1e-6);
    }
}
