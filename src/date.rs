//! Julian day numbers and the proleptic Gregorian calendar.

use std::fmt;
use std::ops::{Add, RangeInclusive, Sub};

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::error::{Error, Result};
use crate::time_scales::{TimeZoneOffset, Ut};

/// Gregorian years the astronomical series are validated for.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1200..=2999;

/// A calendar-independant date, i.e. a Julian day number (JDN).
///
/// The JDN of a day is the Julian date of its noon, so `Date` is the common
/// currency between the Gregorian and lunisolar calendars.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// Fails with [`Error::OutOfRange`] outside [`SUPPORTED_YEARS`] and with
    /// [`Error::InvalidGregorianDate`] for impossible dates such as February 30.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Result<Self> {
        let date = GregorianDate::new(year, month, day)?;
        Ok(Self::from_gregorian_unchecked(date))
    }

    fn from_gregorian_unchecked(date: GregorianDate) -> Self {
        let (y, m, d) = (date.year, date.month as i32, date.day as i32);
        let jdn = (1461 * (y + 4800 + (m - 14) / 12)) / 4
            + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + d
            - 32075;
        // Supported years keep the JDN well above zero.
        Self::from_jdn(jdn as u32)
    }

    /// Represents the date in Gregorian calendar.
    ///
    /// No range check is made; use [`julian_day_to_gregorian`] for a checked
    /// conversion.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::{Date, GregorianDate};
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!(GregorianDate { year: 2000, month: 1, day: 1 }, date.gregorian());
    /// ```
    pub fn gregorian(&self) -> GregorianDate {
        let jdn = self.jdn as i64;
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        GregorianDate {
            year: year as i32,
            month: month as u32,
            day: day as u32,
        }
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        self.gregorian().to_string()
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> u32 {
        self.jdn % 7 + 1
    }

    /// Returns the local civil day on which a UTC instant falls.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::{Date, TimeZoneOffset};
    /// use chrono::{TimeZone, Utc};
    ///
    /// let instant = Utc.with_ymd_and_hms(2023, 1, 21, 18, 0, 0).unwrap();
    /// let date = Date::from_utc(instant, TimeZoneOffset::VIETNAM);
    /// assert_eq!("2023-01-22", date.iso_gregorian());
    /// ```
    pub fn from_utc(datetime: DateTime<Utc>, tz: TimeZoneOffset) -> Self {
        const UNIX_EPOCH_JD: f64 = 2_440_587.5;
        let seconds = datetime.timestamp() as f64 + datetime.timestamp_subsec_nanos() as f64 / 1e9;
        Ut(UNIX_EPOCH_JD + seconds / 86400.0).date_in_timezone(tz)
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(self.jdn.wrapping_add_signed(rhs))
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}

/// A validated date of the proleptic Gregorian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GregorianDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl GregorianDate {
    /// Validates a civil date.
    ///
    /// ```
    /// use amlich::{Error, GregorianDate};
    ///
    /// assert!(GregorianDate::new(2024, 2, 29).is_ok());
    /// assert!(matches!(
    ///     GregorianDate::new(2023, 2, 29),
    ///     Err(Error::InvalidGregorianDate { .. })
    /// ));
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(Error::out_of_range(year));
        }
        if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
            return Err(Error::InvalidGregorianDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Converts into a [`chrono::NaiveDate`].
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl TryFrom<NaiveDate> for GregorianDate {
    type Error = Error;
    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::new(date.year(), date.month(), date.day())
    }
}

/// Converts a civil date into its Julian day number.
pub fn gregorian_to_julian_day(date: GregorianDate) -> Result<Date> {
    let GregorianDate { year, month, day } = date;
    Date::from_gregorian(year, month, day)
}

/// Converts a Julian day number back into a civil date.
///
/// Fails with [`Error::OutOfRange`] if the date falls outside
/// [`SUPPORTED_YEARS`].
pub fn julian_day_to_gregorian(date: Date) -> Result<GregorianDate> {
    let gregorian = date.gregorian();
    if !SUPPORTED_YEARS.contains(&gregorian.year) {
        return Err(Error::out_of_range(gregorian.year));
    }
    Ok(gregorian)
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Number of days in a Gregorian month; `0` for a month outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + YearType::from_gregorian(year).is_leap() as u32,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> GregorianDate {
        GregorianDate { year, month, day }
    }

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(2459466, date.jdn());
        let date = Date::from_gregorian(1200, 1, 1).unwrap();
        assert_eq!(2159351, date.jdn());
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!(ymd(1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2459466);
        assert_eq!(ymd(2021, 9, 8), date.gregorian());
        let date = Date::from_jdn(2451545);
        assert_eq!(ymd(2000, 1, 1), date.gregorian());
    }

    #[test]
    fn rejects_out_of_range() {
        for year in [1199, 3000, -4713] {
            assert_eq!(
                Err(Error::out_of_range(year)),
                Date::from_gregorian(year, 6, 1),
                "{year}"
            );
        }
        let late = Date::from_gregorian(2999, 12, 31).unwrap() + 1;
        assert_eq!(
            Err(Error::out_of_range(3000)),
            julian_day_to_gregorian(late)
        );
    }

    #[test]
    fn rejects_impossible_dates() {
        for (y, m, d) in [
            (2023, 2, 29),
            (2023, 2, 30),
            (2023, 4, 31),
            (2023, 13, 1),
            (2023, 0, 1),
            (2023, 1, 0),
        ] {
            assert_eq!(
                Err(Error::InvalidGregorianDate {
                    year: y,
                    month: m,
                    day: d,
                }),
                Date::from_gregorian(y, m, d),
                "{y:04}-{m:02}-{d:02}"
            );
        }
        assert!(Date::from_gregorian(2000, 2, 29).is_ok());
        assert!(Date::from_gregorian(1900, 2, 29).is_err());
    }

    #[test]
    fn round_trip() {
        let first = Date::from_gregorian(1200, 1, 1).unwrap();
        let last = Date::from_gregorian(2999, 12, 31).unwrap();
        let mut date = first;
        while date <= last {
            let gregorian = julian_day_to_gregorian(date).unwrap();
            assert_eq!(Ok(date), gregorian_to_julian_day(gregorian), "{gregorian}");
            date = date + 97;
        }
    }

    #[test]
    fn to_day_of_week() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(4, date.day_of_week());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(3, date.day_of_week());
    }

    #[test]
    fn arithmetic() {
        let date = Date::from_gregorian(2023, 3, 1).unwrap();
        assert_eq!("2023-02-28", (date + -1).iso_gregorian());
        let new_year = Date::from_gregorian(2023, 1, 1).unwrap();
        assert_eq!(365, Date::from_gregorian(2024, 1, 1).unwrap() - new_year);
    }

    #[test]
    fn from_utc() {
        use chrono::TimeZone;
        let instant = Utc.with_ymd_and_hms(2023, 3, 21, 17, 30, 0).unwrap();
        let vietnam = Date::from_utc(instant, TimeZoneOffset::VIETNAM);
        assert_eq!("2023-03-22", vietnam.iso_gregorian());
        let utc = Date::from_utc(instant, TimeZoneOffset::UTC);
        assert_eq!("2023-03-21", utc.iso_gregorian());
    }

    #[test]
    fn chrono_interop() {
        let naive = NaiveDate::from_ymd_opt(2023, 1, 22).unwrap();
        let date = GregorianDate::try_from(naive).unwrap();
        assert_eq!(ymd(2023, 1, 22), date);
        assert_eq!(Some(naive), date.to_naive_date());
        let early = NaiveDate::from_ymd_opt(1000, 1, 1).unwrap();
        assert!(matches!(
            GregorianDate::try_from(early),
            Err(Error::OutOfRange { year: 1000, .. })
        ));
    }

    #[test]
    fn iso_format() {
        assert_eq!(
            "2021-09-08",
            Date::from_gregorian(2021, 9, 8).unwrap().iso_gregorian()
        );
    }

    #[test]
    fn month_lengths() {
        assert_eq!(29, days_in_month(2000, 2));
        assert_eq!(28, days_in_month(2100, 2));
        assert_eq!(31, days_in_month(2023, 12));
        assert_eq!(0, days_in_month(2023, 13));
    }
}
