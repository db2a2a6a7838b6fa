//! Instants in Universal Time and the fixed offsets that map them onto local
//! civil days.
//!
//! Only what the calendar needs is here: a UT Julian date, and a constant
//! offset from UTC (no daylight saving).

use crate::date::Date;
use crate::error::{Error, Result};

/// [Universal time](https://en.wikipedia.org/wiki/Universal_Time), the civil
/// time used for determining the actual date at a given time point,
/// represented in Julian date (JD).
///
/// New-moon instants come out of their series in dynamical time and are
/// corrected to UT before they are placed on a calendar day.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Ut(pub f64);

impl Ut {
    /// Returns the date at the time point in the given timezone.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::time_scales::{TimeZoneOffset, Ut};
    ///
    /// let ut = Ut(2451544.4); // 1999-12-31T21:36Z
    /// assert_eq!("1999-12-31", ut.date_in_timezone(TimeZoneOffset::UTC).iso_gregorian());
    /// assert_eq!("2000-01-01", ut.date_in_timezone(TimeZoneOffset::CHINA).iso_gregorian());
    /// ```
    pub fn date_in_timezone(&self, tz: TimeZoneOffset) -> Date {
        let jdn = (self.0 + 0.5 + tz.fraction_of_day()).floor() as u32;
        Date::from_jdn(jdn)
    }

    /// Returns the instant of local midnight that begins `date`.
    pub fn start_of_day(date: Date, tz: TimeZoneOffset) -> Self {
        Ut(date.jdn() as f64 - 0.5 - tz.fraction_of_day())
    }
}

/// A constant offset from UTC, in hours, east positive.
///
/// For Vietnam (UTC+7) the offset is `7.0`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct TimeZoneOffset(f64);

impl TimeZoneOffset {
    /// Coordinated universal time.
    pub const UTC: Self = Self(0.0);
    /// Indochina time (UTC+7), the reference zone of the Vietnamese calendar.
    pub const VIETNAM: Self = Self(7.0);
    /// China standard time (UTC+8).
    pub const CHINA: Self = Self(8.0);

    /// Creates an offset of `hours` east of UTC.
    ///
    /// Fails with [`Error::InvalidTimeZone`] unless `hours` is finite and
    /// within `-12.0..=14.0`.
    pub fn new(hours: f64) -> Result<Self> {
        if !hours.is_finite() || !(-12.0..=14.0).contains(&hours) {
            return Err(Error::InvalidTimeZone { hours });
        }
        Ok(Self(hours))
    }
    /// Returns the offset in hours.
    pub fn hours(&self) -> f64 {
        self.0
    }
    /// Returns the offset as a fraction of a day.
    pub fn fraction_of_day(&self) -> f64 {
        self.0 / 24.0
    }
}

impl Default for TimeZoneOffset {
    fn default() -> Self {
        Self::VIETNAM
    }
}

impl TryFrom<f64> for TimeZoneOffset {
    type Error = Error;
    fn try_from(hours: f64) -> Result<Self> {
        Self::new(hours)
    }
}

impl From<TimeZoneOffset> for f64 {
    fn from(tz: TimeZoneOffset) -> f64 {
        tz.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ut_to_local_date() {
        let new_moon = Ut(2460025.224); // 2023-03-21T17:22:34Z
        for (hours, expected) in [
            (0.0, "2023-03-21"),
            (7.0, "2023-03-22"),
            (-12.0, "2023-03-21"),
        ] {
            let date = new_moon.date_in_timezone(TimeZoneOffset::new(hours).unwrap());
            assert_eq!(expected, date.iso_gregorian(), "{hours}");
        }
    }

    #[test]
    fn start_of_day_is_local_midnight() {
        let tz = TimeZoneOffset::VIETNAM;
        let date = Date::from_gregorian(2000, 1, 1).unwrap();
        let start = Ut::start_of_day(date, tz);
        assert!((start.0 - (2451544.5 - 7.0 / 24.0)).abs() < 1e-9);
        assert_eq!(date, Ut(start.0 + 1e-6).date_in_timezone(tz));
        assert_eq!(date + -1, Ut(start.0 - 1e-6).date_in_timezone(tz));
    }

    #[test]
    fn offset_bounds() {
        for hours in [-12.0, -3.5, 0.0, 5.75, 14.0] {
            assert_eq!(hours, TimeZoneOffset::new(hours).unwrap().hours());
        }
        for hours in [-12.5, 14.25, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    TimeZoneOffset::new(hours),
                    Err(Error::InvalidTimeZone { .. })
                ),
                "{hours}"
            );
        }
    }

    #[test]
    fn default_is_vietnam() {
        assert_eq!(7.0, TimeZoneOffset::default().hours());
    }
}
