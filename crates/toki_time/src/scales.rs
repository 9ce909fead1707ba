//! ΔT = TT − UTC.
//!
//! For the leap-second era (1972 onward) ΔT is exact: TAI − UTC from the
//! announced leap-second table plus the fixed TT − TAI offset of 32.184 s.
//! Outside that era the standard piecewise polynomial fits (Espenak &
//! Meeus) are used; they are good to a few seconds across the supported
//! 1600–2200 window, which is far inside the minute-level precision target
//! of the event searches.

/// TT − TAI, fixed by definition.
const TT_MINUS_TAI: f64 = 32.184;

/// Announced leap seconds: (JD UTC at which the offset takes effect, TAI − UTC).
///
/// Content of the NAIF leap-second kernel as of naif0012; no new leap
/// second has been announced since 2017-01-01.
#[rustfmt::skip]
const LEAP_SECONDS: [(f64, f64); 28] = [
    (2_441_317.5, 10.0), // 1972-01-01
    (2_441_499.5, 11.0), // 1972-07-01
    (2_441_683.5, 12.0), // 1973-01-01
    (2_442_048.5, 13.0), // 1974-01-01
    (2_442_413.5, 14.0), // 1975-01-01
    (2_442_778.5, 15.0), // 1976-01-01
    (2_443_144.5, 16.0), // 1977-01-01
    (2_443_509.5, 17.0), // 1978-01-01
    (2_443_874.5, 18.0), // 1979-01-01
    (2_444_239.5, 19.0), // 1980-01-01
    (2_444_786.5, 20.0), // 1981-07-01
    (2_445_151.5, 21.0), // 1982-07-01
    (2_445_516.5, 22.0), // 1983-07-01
    (2_446_247.5, 23.0), // 1985-07-01
    (2_447_161.5, 24.0), // 1988-01-01
    (2_447_892.5, 25.0), // 1990-01-01
    (2_448_257.5, 26.0), // 1991-01-01
    (2_448_804.5, 27.0), // 1992-07-01
    (2_449_169.5, 28.0), // 1993-07-01
    (2_449_534.5, 29.0), // 1994-07-01
    (2_450_083.5, 30.0), // 1996-01-01
    (2_450_630.5, 31.0), // 1997-07-01
    (2_451_179.5, 32.0), // 1999-01-01
    (2_453_736.5, 33.0), // 2006-01-01
    (2_454_832.5, 34.0), // 2009-01-01
    (2_456_109.5, 35.0), // 2012-07-01
    (2_457_204.5, 36.0), // 2015-07-01
    (2_457_754.5, 37.0), // 2017-01-01
];

/// JD UTC of 1972-01-01, start of the leap-second era.
const LEAP_ERA_START_JD: f64 = 2_441_317.5;

/// Decimal year past which the polynomial extrapolation takes over.
const LEAP_ERA_END_YEAR: f64 = 2035.0;

/// TAI − UTC at a JD on the UTC axis. Zero before the leap-second era.
pub fn leap_seconds_at(jd_utc: f64) -> f64 {
    let mut dat = 0.0;
    for &(jd, offset) in LEAP_SECONDS.iter() {
        if jd_utc >= jd {
            dat = offset;
        } else {
            break;
        }
    }
    dat
}

/// Decimal year for a JD on the UTC axis (good enough for ΔT fits).
fn decimal_year(jd_utc: f64) -> f64 {
    2000.0 + (jd_utc - 2_451_544.5) / 365.25
}

/// ΔT = TT − UTC in seconds at a JD on the UTC axis.
pub fn delta_t_seconds(jd_utc: f64) -> f64 {
    let y = decimal_year(jd_utc);
    if jd_utc >= LEAP_ERA_START_JD && y <= LEAP_ERA_END_YEAR {
        return leap_seconds_at(jd_utc) + TT_MINUS_TAI;
    }
    polynomial_delta_t(y)
}

/// Espenak & Meeus piecewise fits for ΔT outside the leap-second era.
///
/// The pre-1600 and post-2150 branches clamp to the nearest fitted segment;
/// the engine's validity window (1600–2200) never reaches them far.
fn polynomial_delta_t(y: f64) -> f64 {
    if y < 1700.0 {
        let t = y - 1600.0;
        120.0 - 0.9808 * t - 0.01532 * t * t + t * t * t / 7_129.0
    } else if y < 1800.0 {
        let t = y - 1700.0;
        8.83 + 0.1603 * t - 0.005_928_5 * t * t + 0.000_133_36 * t * t * t
            - t * t * t * t / 1_174_000.0
    } else if y < 1860.0 {
        let t = y - 1800.0;
        13.72 - 0.332_447 * t + 0.006_861_2 * t * t + 0.004_111_6 * t * t * t
            - 0.000_374_36 * t.powi(4)
            + 0.000_012_127_2 * t.powi(5)
            - 0.000_000_169_9 * t.powi(6)
            + 0.000_000_000_875 * t.powi(7)
    } else if y < 1900.0 {
        let t = y - 1860.0;
        7.62 + 0.5737 * t - 0.251_754 * t * t + 0.016_806_68 * t * t * t
            - 0.000_447_362_4 * t.powi(4)
            + t.powi(5) / 233_174.0
    } else if y < 1920.0 {
        let t = y - 1900.0;
        -2.79 + 1.494_119 * t - 0.059_893_9 * t * t + 0.006_196_6 * t * t * t
            - 0.000_197 * t.powi(4)
    } else if y < 1941.0 {
        let t = y - 1920.0;
        21.20 + 0.844_93 * t - 0.076_100 * t * t + 0.002_093_6 * t * t * t
    } else if y < 1961.0 {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t * t / 233.0 + t * t * t / 2_547.0
    } else if y < 1972.0 {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t * t / 260.0 - t * t * t / 718.0
    } else if y < 2150.0 {
        // post-table extrapolation
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    } else {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}
