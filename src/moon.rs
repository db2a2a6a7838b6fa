//! New moons, counted from the new moon of 1900-01-01.
//!
//! Lunation `k` is the `k`-th new moon after (or, negative, before) the one
//! at JD 2415021.08. Instants come from the mean synodic month plus a
//! truncated periodic correction (Meeus, *Astronomical Formulae for
//! Calculators*), corrected from dynamical time to UT.

use std::f64::consts::PI;

use tracing::warn;

use crate::date::Date;
use crate::error::{Error, Result};
use crate::time_scales::{TimeZoneOffset, Ut};

/// Mean synodic month, in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;
/// Instant of lunation 0, JD (UT).
pub const EPOCH: f64 = 2415021.076998695;

/// Lunations per Julian century, the time argument of the series.
const LUNATIONS_PER_CENTURY: f64 = 1236.85;
const MAX_CORRECTION_STEPS: u32 = 4;

/// Instant of new moon number `k`.
///
/// # Example
///
/// ```
/// use amlich::moon::new_moon;
/// use amlich::time_scales::TimeZoneOffset;
///
/// // 2000-01-06T18:14Z
/// let instant = new_moon(1237);
/// assert_eq!("2000-01-06", instant.date_in_timezone(TimeZoneOffset::UTC).iso_gregorian());
/// ```
pub fn new_moon(k: i32) -> Ut {
    let k = k as f64;
    let t = k / LUNATIONS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let dr = PI / 180.0;

    let mut jd = 2415020.75933 + 29.53058868 * k + 0.0001178 * t2 - 0.000000155 * t3;
    jd += 0.00033 * ((166.56 + 132.87 * t - 0.009173 * t2) * dr).sin();
    // anomalies of the Sun and the Moon, and the Moon's argument of latitude
    let m = 359.2242 + 29.10535608 * k - 0.0000333 * t2 - 0.00000347 * t3;
    let mpr = 306.0253 + 385.81691806 * k + 0.0107306 * t2 + 0.00001236 * t3;
    let f = 21.2964 + 390.67050646 * k - 0.0016528 * t2 - 0.00000239 * t3;

    let mut c1 = (0.1734 - 0.000393 * t) * (m * dr).sin() + 0.0021 * (2.0 * dr * m).sin();
    c1 = c1 - 0.4068 * (mpr * dr).sin() + 0.0161 * (dr * 2.0 * mpr).sin();
    c1 -= 0.0004 * (dr * 3.0 * mpr).sin();
    c1 = c1 + 0.0104 * (dr * 2.0 * f).sin() - 0.0051 * (dr * (m + mpr)).sin();
    c1 = c1 - 0.0074 * (dr * (m - mpr)).sin() + 0.0004 * (dr * (2.0 * f + m)).sin();
    c1 = c1 - 0.0004 * (dr * (2.0 * f - m)).sin() - 0.0006 * (dr * (2.0 * f + mpr)).sin();
    c1 = c1 + 0.0010 * (dr * (2.0 * f - mpr)).sin() + 0.0005 * (dr * (2.0 * mpr + m)).sin();

    Ut(jd + c1 - delta_t(t))
}

/// TT − UT in days, as a polynomial of centuries since 1900.
fn delta_t(t: f64) -> f64 {
    let t2 = t * t;
    if t < -11.0 {
        0.001 + 0.000839 * t + 0.0002261 * t2 - 0.00000845 * t2 * t - 0.000000081 * t2 * t2
    } else {
        -0.000278 + 0.000265 * t + 0.000262 * t2
    }
}

/// Local day containing new moon number `k`.
pub fn new_moon_day(k: i32, tz: TimeZoneOffset) -> Date {
    new_moon(k).date_in_timezone(tz)
}

/// Number of the lunation whose local month contains `date`, i.e. the `k`
/// with `new_moon_day(k) <= date < new_moon_day(k + 1)`.
///
/// Starts from the mean-motion estimate and corrects it by a few steps at
/// most; needing more fails with [`Error::ConvergenceFailure`].
///
/// # Example
///
/// ```
/// use amlich::Date;
/// use amlich::moon::{lunation_index, new_moon_day};
/// use amlich::time_scales::TimeZoneOffset;
///
/// let tz = TimeZoneOffset::VIETNAM;
/// let date = Date::from_gregorian(2023, 1, 25).unwrap();
/// let k = lunation_index(date, tz).unwrap();
/// assert_eq!("2023-01-22", new_moon_day(k, tz).iso_gregorian());
/// ```
pub fn lunation_index(date: Date, tz: TimeZoneOffset) -> Result<i32> {
    let mut k = ((date.jdn() as f64 - EPOCH) / SYNODIC_MONTH).floor() as i32;
    for _ in 0..MAX_CORRECTION_STEPS {
        if new_moon_day(k, tz) > date {
            k -= 1;
        } else if new_moon_day(k + 1, tz) <= date {
            k += 1;
        } else {
            return Ok(k);
        }
    }
    warn!(jdn = date.jdn(), "lunation search exceeded its step bound");
    Err(Error::ConvergenceFailure {
        search: "lunation search",
        iterations: MAX_CORRECTION_STEPS,
    })
}
