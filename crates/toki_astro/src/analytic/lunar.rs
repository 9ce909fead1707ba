//! Apparent lunar ecliptic longitude of date.
//!
//! Standard truncated lunar longitude series (ELP-derived periodic terms
//! as tabulated by Meeus), with the eccentricity damping factor on solar
//! anomaly terms, the three additive arguments, and nutation in longitude.
//! Public domain standard theory.

use toki_time::J2000_JD;

use super::nutation::nutation_deg;
use crate::angle::norm360;

/// Periodic longitude terms: `[D, M, M', F, amplitude]`, amplitude in
/// 1e-6 degrees. Terms with a solar-anomaly multiplier are damped by
/// `E^|M|` to track the secular change of the Earth orbit eccentricity.
#[rustfmt::skip]
const LONGITUDE_TERMS: [(i8, i8, i8, i8, i32); 59] = [
    (0,  0,  1,  0,  6_288_774),
    (2,  0, -1,  0,  1_274_027),
    (2,  0,  0,  0,    658_314),
    (0,  0,  2,  0,    213_618),
    (0,  1,  0,  0,   -185_116),
    (0,  0,  0,  2,   -114_332),
    (2,  0, -2,  0,     58_793),
    (2, -1, -1,  0,     57_066),
    (2,  0,  1,  0,     53_322),
    (2, -1,  0,  0,     45_758),
    (0,  1, -1,  0,    -40_923),
    (1,  0,  0,  0,    -34_720),
    (0,  1,  1,  0,    -30_383),
    (2,  0,  0, -2,     15_327),
    (0,  0,  1,  2,    -12_528),
    (0,  0,  1, -2,     10_980),
    (4,  0, -1,  0,     10_675),
    (0,  0,  3,  0,     10_034),
    (4,  0, -2,  0,      8_548),
    (2,  1, -1,  0,     -7_888),
    (2,  1,  0,  0,     -6_766),
    (1,  0, -1,  0,     -5_163),
    (1,  1,  0,  0,      4_987),
    (2, -1,  1,  0,      4_036),
    (2,  0,  2,  0,      3_994),
    (4,  0,  0,  0,      3_861),
    (2,  0, -3,  0,      3_665),
    (0,  1, -2,  0,     -2_689),
    (2,  0, -1,  2,     -2_602),
    (2, -1, -2,  0,      2_390),
    (1,  0,  1,  0,     -2_348),
    (2, -2,  0,  0,      2_236),
    (0,  1,  2,  0,     -2_120),
    (0,  2,  0,  0,     -2_069),
    (2, -2, -1,  0,      2_048),
    (2,  0,  1, -2,     -1_773),
    (2,  0,  0,  2,     -1_595),
    (4, -1, -1,  0,      1_215),
    (0,  0,  2,  2,     -1_110),
    (3,  0, -1,  0,       -892),
    (2,  1,  1,  0,       -810),
    (4, -1, -2,  0,        759),
    (0,  2, -1,  0,       -713),
    (2,  2, -1,  0,       -700),
    (2,  1, -2,  0,        691),
    (2, -1,  0, -2,        596),
    (4,  0,  1,  0,        549),
    (0,  0,  4,  0,        537),
    (4, -1,  0,  0,        520),
    (1,  0, -2,  0,       -487),
    (2,  1,  0, -2,       -399),
    (0,  0,  2, -2,       -381),
    (1,  1,  1,  0,        351),
    (3,  0, -2,  0,       -340),
    (4,  0, -3,  0,        330),
    (2, -1,  2,  0,        327),
    (0,  2,  1,  0,       -323),
    (1,  1, -1,  0,        299),
    (2,  0,  3,  0,        294),
];

/// Fundamental arguments in degrees at `t` centuries of TT since J2000.0.
///
/// Returns `(L', D, M, M', F)`.
fn fundamental_arguments(t: f64) -> (f64, f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // Mean longitude of the Moon.
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    // Mean elongation of the Moon from the Sun.
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    // Mean anomaly of the Sun.
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    // Mean anomaly of the Moon.
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    // Mean argument of latitude.
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    (lp, d, m, mp, f)
}

/// Apparent ecliptic longitude of date in degrees [0, 360).
pub fn apparent_longitude_deg(jd_tt: f64) -> f64 {
    let t = (jd_tt - J2000_JD) / 36_525.0;
    let (lp, d, m, mp, f) = fundamental_arguments(t);

    // Eccentricity damping for solar-anomaly terms.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;
    let e2 = e * e;

    let d_rad = d.to_radians();
    let m_rad = m.to_radians();
    let mp_rad = mp.to_radians();
    let f_rad = f.to_radians();

    let mut sum_l = 0.0_f64; // 1e-6 degrees
    for &(cd, cm, cmp, cf, amp) in LONGITUDE_TERMS.iter() {
        let arg = f64::from(cd) * d_rad
            + f64::from(cm) * m_rad
            + f64::from(cmp) * mp_rad
            + f64::from(cf) * f_rad;
        let damp = match cm.abs() {
            0 => 1.0,
            1 => e,
            _ => e2,
        };
        sum_l += f64::from(amp) * damp * arg.sin();
    }

    // Additive arguments: Venus, Jupiter, and the flattening term.
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum_l += 3_958.0 * a1.sin();
    sum_l += 1_962.0 * (lp - f).to_radians().sin();
    sum_l += 318.0 * a2.sin();

    let (dpsi, _) = nutation_deg(t);
    norm360(lp + sum_l * 1e-6 + dpsi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_epoch_1992() {
        // 1992-04-12.0 TD (JD 2448724.5): apparent λ☾ = 133.1673°.
        let lon = apparent_longitude_deg(2_448_724.5);
        assert!((lon - 133.167).abs() < 0.02, "λ = {lon}");
    }

    #[test]
    fn new_moon_2017_06_24() {
        // New moon 2017-06-24 02:31 UTC: elongation from the Sun ≈ 0.
        let jd_tt = 2_457_928.5 + 2.517 / 24.0 + 69.2 / 86_400.0;
        let moon = apparent_longitude_deg(jd_tt);
        let sun = super::super::solar::apparent_longitude_deg(jd_tt);
        let elong = (moon - sun).rem_euclid(360.0);
        let dist = elong.min(360.0 - elong);
        assert!(dist < 0.1, "elongation {elong}");
    }

    #[test]
    fn new_moon_2020_01_24() {
        // New moon 2020-01-24 21:42 UTC.
        let jd_tt = 2_458_872.5 + 21.7 / 24.0 + 69.2 / 86_400.0;
        let moon = apparent_longitude_deg(jd_tt);
        let sun = super::super::solar::apparent_longitude_deg(jd_tt);
        let elong = (moon - sun).rem_euclid(360.0);
        let dist = elong.min(360.0 - elong);
        assert!(dist < 0.1, "elongation {elong}");
    }

    #[test]
    fn mean_rate_close_to_published() {
        // Lunar longitude advances ~13.176°/day on average.
        let jd = 2_457_900.0;
        let mut prev = apparent_longitude_deg(jd);
        let mut total = 0.0;
        for i in 1..=55 {
            let cur = apparent_longitude_deg(jd + f64::from(i) * 0.5);
            total += (cur - prev).rem_euclid(360.0);
            prev = cur;
        }
        let per_day = total / 27.5;
        assert!((per_day - 13.176).abs() < 0.3, "rate {per_day}°/day");
    }
}
