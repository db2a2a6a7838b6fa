//! Conversion between the proleptic Gregorian calendar and the lunisolar
//! calendar used in Vietnam and China (âm lịch / 農曆).
//!
//! Month boundaries are new moons and the leap month is placed by the
//! solar terms, both computed from truncated astronomical series rather
//! than tables, for Gregorian years 1200 to 2999. Day boundaries depend on
//! the timezone: the Vietnamese calendar uses UTC+7, the Chinese one UTC+8,
//! and the two occasionally disagree.
//!
//! # Examples
//!
//! ```
//! use amlich::{LunarDate, gregorian_to_lunar, lunar_to_gregorian};
//!
//! // 2023 has a leap 2nd month.
//! let lunar = gregorian_to_lunar(2023, 3, 22, 7.0).unwrap();
//! assert_eq!(LunarDate::new(2023, 2, 1, true), lunar);
//!
//! let common = lunar_to_gregorian(2023, 2, 1, false, 7.0).unwrap();
//! assert_eq!("2023-02-20", common.to_string());
//! ```
//!
//! The same New Year fell a month apart in 1985:
//!
//! ```
//! use amlich::{LunarDate, gregorian_to_lunar};
//!
//! assert_eq!(LunarDate::new(1985, 1, 1, false), gregorian_to_lunar(1985, 1, 21, 7.0).unwrap());
//! assert_eq!(LunarDate::new(1984, 12, 1, false), gregorian_to_lunar(1985, 1, 21, 8.0).unwrap());
//! ```
//!
//! # Architecture
//!
//! ```text
//! gregorian_to_lunar() / lunar_to_gregorian()
//!   ├─ date          Julian day numbers, Gregorian dates
//!   ├─ sun           solar longitude, solar terms
//!   ├─ moon          new moons, lunation search
//!   └─ lunisolar     month layout of a year, leap months
//! ```

pub mod config;
pub mod date;
pub mod error;
pub mod lunisolar;
pub mod moon;
pub mod sun;
pub mod time_scales;

pub use config::{Converter, ConverterConfig};
pub use date::{Date, GregorianDate, SUPPORTED_YEARS, YearType};
pub use error::{Error, LunarDateIssue, Result};
pub use lunisolar::{LunarDate, LunarYear, Month};
pub use time_scales::TimeZoneOffset;

/// Converts a Gregorian date to the lunisolar calendar, with days beginning
/// at local midnight `timezone` hours east of UTC.
///
/// Fails with [`Error::InvalidGregorianDate`] for impossible dates and
/// [`Error::OutOfRange`] outside [`SUPPORTED_YEARS`].
#[tracing::instrument(level = "debug")]
pub fn gregorian_to_lunar(year: i32, month: u32, day: u32, timezone: f64) -> Result<LunarDate> {
    let tz = TimeZoneOffset::new(timezone)?;
    lunisolar::gregorian_to_lunar(GregorianDate::new(year, month, day)?, tz)
}

/// Converts a lunisolar date to the Gregorian calendar.
///
/// Fails with [`Error::InvalidLunarDate`] when the month, the day, or the
/// requested leap month does not exist in that lunar year.
///
/// ```
/// use amlich::{Error, LunarDateIssue, lunar_to_gregorian};
///
/// let err = lunar_to_gregorian(2023, 3, 1, true, 7.0).unwrap_err();
/// assert!(matches!(
///     err,
///     Error::InvalidLunarDate { reason: LunarDateIssue::NoSuchLeapMonth, .. }
/// ));
/// ```
#[tracing::instrument(level = "debug")]
pub fn lunar_to_gregorian(
    year: i32,
    month: u32,
    day: u32,
    is_leap_month: bool,
    timezone: f64,
) -> Result<GregorianDate> {
    let tz = TimeZoneOffset::new(timezone)?;
    lunisolar::lunar_to_gregorian(LunarDate::new(year, month, day, is_leap_month), tz)
}

/// Cheap, non-authoritative estimate of the Gregorian year a lunar date
/// falls in; see [`LunarDate::approximate_gregorian_year`].
pub fn approximate_gregorian_year(date: &LunarDate) -> i32 {
    date.approximate_gregorian_year()
}
