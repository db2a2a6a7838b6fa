//! Position of the Sun and the 24 solar terms.
//!
//! The longitude comes from a truncated periodic series (mean longitude plus
//! the equation of centre), good to about a hundredth of a degree over the
//! supported era. That is plenty for deciding on which day a term falls, and
//! nothing more: this is not an ephemeris.

use std::f64::consts::PI;
use std::ops::RangeInclusive;

use tracing::{trace, warn};

use crate::date::Date;
use crate::error::{Error, Result};
use crate::time_scales::{TimeZoneOffset, Ut};

const J2000: f64 = 2451545.0;
const DAYS_PER_CENTURY: f64 = 36525.0;
const TROPICAL_YEAR: f64 = 365.242189;
/// December solstice of 2000, 2000-12-21T13:37Z.
const SOLSTICE_2000: f64 = 2451900.07;

/// Half-width of the bisection bracket around the mean-motion estimate, in days.
const BRACKET_DAYS: f64 = 8.0;
const MAX_ITERATIONS: u32 = 60;
const TOLERANCE_DAYS: f64 = 1e-7;

/// Solar years whose terms can be located: those overlapping
/// [`crate::SUPPORTED_YEARS`], plus 3001 whose solstice closes solar year 3000.
pub const SOLAR_YEARS: RangeInclusive<i32> = 1200..=3001;

/// One of the 24 solar terms, numbered from the December solstice.
///
/// Term `i` begins when the Sun's longitude reaches `270° + 15° × i`. Even
/// terms are the major terms (中氣), odd ones the minor terms (節氣).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SolarTermIndex(u8);

impl SolarTermIndex {
    /// The December solstice (冬至), longitude 270°.
    pub const WINTER_SOLSTICE: Self = Self(0);

    /// Returns `None` unless `index` is within `0..=23`.
    pub fn new(index: u8) -> Option<Self> {
        (index < 24).then_some(Self(index))
    }
    /// Returns the index in `0..=23`.
    pub fn index(&self) -> u8 {
        self.0
    }
    /// Ecliptic longitude at which the term begins, in degrees.
    pub fn longitude(&self) -> f64 {
        ((270 + 15 * self.0 as u32) % 360) as f64
    }
    /// `true` for the twelve major terms.
    pub fn is_major(&self) -> bool {
        self.0 % 2 == 0
    }
    /// Number of the 30° sector (one major term plus the following minor
    /// term) the term lies in, `0..=11` starting at the solstice.
    pub fn major(&self) -> u8 {
        self.0 / 2
    }

    /// The term in effect at a given solar longitude.
    pub fn at_longitude(longitude: f64) -> Self {
        let offset = (longitude - 270.0).rem_euclid(360.0);
        Self(((offset / 15.0).floor() as u8).min(23))
    }
}

/// Geometric ecliptic longitude of the Sun at an instant, in degrees within
/// `[0, 360)`.
///
/// # Example
///
/// ```
/// use amlich::sun::true_longitude;
/// use amlich::time_scales::Ut;
///
/// // March equinox of 2000, 2000-03-20T07:35Z.
/// let longitude = true_longitude(Ut(2451623.816));
/// assert!(longitude < 0.05 || longitude > 359.95);
/// ```
pub fn true_longitude(ut: Ut) -> f64 {
    let t = (ut.0 - J2000) / DAYS_PER_CENTURY;
    let t2 = t * t;
    let dr = PI / 180.0;
    // mean anomaly and mean longitude
    let m = 357.52910 + 35999.05030 * t - 0.0001559 * t2 - 0.00000048 * t * t2;
    let l0 = 280.46645 + 36000.76983 * t + 0.0003032 * t2;
    let dl = (1.914600 - 0.004817 * t - 0.000014 * t2) * (dr * m).sin()
        + (0.019993 - 0.000101 * t) * (dr * 2.0 * m).sin()
        + 0.000290 * (dr * 3.0 * m).sin();
    (l0 + dl).rem_euclid(360.0)
}

/// Longitude of the Sun at the local midnight that begins `date`.
pub fn sun_longitude(date: Date, tz: TimeZoneOffset) -> f64 {
    true_longitude(Ut::start_of_day(date, tz))
}

/// The solar term in effect when `date` begins in the given timezone.
///
/// # Example
///
/// ```
/// use amlich::Date;
/// use amlich::sun::solar_term_index;
/// use amlich::time_scales::TimeZoneOffset;
///
/// // The 2022 December solstice fell on the 22nd in Vietnam.
/// let tz = TimeZoneOffset::VIETNAM;
/// assert_eq!(23, solar_term_index(Date::from_gregorian(2022, 12, 22).unwrap(), tz).index());
/// assert_eq!(0, solar_term_index(Date::from_gregorian(2022, 12, 23).unwrap(), tz).index());
/// ```
pub fn solar_term_index(date: Date, tz: TimeZoneOffset) -> SolarTermIndex {
    SolarTermIndex::at_longitude(sun_longitude(date, tz))
}

/// Instant at which the Sun reaches the longitude of `term` in solar year
/// `year`.
///
/// Solar year `year` starts at the December solstice of `year - 1` (term 0)
/// and ends before the December solstice of `year`.
///
/// Fails with [`Error::OutOfRange`] for a year outside [`SOLAR_YEARS`]. The
/// root is bracketed around a mean-motion estimate and narrowed by
/// bisection; a bracket that does not straddle the root, or a search that
/// runs out of iterations, fails with [`Error::ConvergenceFailure`].
pub fn solar_term_instant(term: SolarTermIndex, year: i32) -> Result<Ut> {
    if !SOLAR_YEARS.contains(&year) {
        return Err(Error::outside(year, &SOLAR_YEARS));
    }
    bisect_term(term, year)
}

fn bisect_term(term: SolarTermIndex, year: i32) -> Result<Ut> {
    let estimate = SOLSTICE_2000
        + TROPICAL_YEAR * (year as f64 - 2001.0)
        + TROPICAL_YEAR * term.index() as f64 / 24.0;
    let target = term.longitude();
    let offset = |jd: f64| (true_longitude(Ut(jd)) - target + 180.0).rem_euclid(360.0) - 180.0;

    let (mut lo, mut hi) = (estimate - BRACKET_DAYS, estimate + BRACKET_DAYS);
    if !(offset(lo) < 0.0 && offset(hi) > 0.0) {
        warn!(
            year,
            term = term.index(),
            "solar term not bracketed by mean-motion estimate"
        );
        return Err(Error::ConvergenceFailure {
            search: "solar term bisection",
            iterations: 0,
        });
    }
    for iteration in 1..=MAX_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        if offset(mid) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
        if hi - lo < TOLERANCE_DAYS {
            trace!(
                year,
                term = term.index(),
                iteration,
                jd = hi,
                "solar term located"
            );
            return Ok(Ut(0.5 * (lo + hi)));
        }
    }
    warn!(
        year,
        term = term.index(),
        "solar term bisection did not converge"
    );
    Err(Error::ConvergenceFailure {
        search: "solar term bisection",
        iterations: MAX_ITERATIONS,
    })
}

/// Local day on which `term` of solar year `year` begins.
///
/// # Example
///
/// ```
/// use amlich::sun::{SolarTermIndex, solar_term_day};
/// use amlich::time_scales::TimeZoneOffset;
///
/// let tz = TimeZoneOffset::VIETNAM;
/// let day = solar_term_day(SolarTermIndex::WINTER_SOLSTICE, 2023, tz).unwrap();
/// assert_eq!("2022-12-22", day.iso_gregorian());
/// ```
pub fn solar_term_day(term: SolarTermIndex, year: i32, tz: TimeZoneOffset) -> Result<Date> {
    Ok(solar_term_instant(term, year)?.date_in_timezone(tz))
}
