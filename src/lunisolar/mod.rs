//! Lunisolar calendar.
//!
//! Months begin on the local day of a new moon. The month containing the
//! December solstice is always the 11th; when 13 new moons separate two such
//! months, the first month that contains no major solar term is a leap month
//! and repeats the number of the month before it.
//!
//! The span from one 11th month to the next is laid out by [`LunarYear`].
//! Note that it is a *solar* year in the sense of [`crate::sun`]: `LunarYear`
//! number `Y` runs from the 11th month of lunar year `Y - 1` to the 10th (or
//! leap 10th) month of lunar year `Y`.

use std::fmt;
use std::ops::RangeInclusive;

use tracing::{debug, warn};

use crate::date::{
    Date, GregorianDate, SUPPORTED_YEARS, gregorian_to_julian_day, julian_day_to_gregorian,
};
use crate::error::{Error, LunarDateIssue, Result};
use crate::moon::{SYNODIC_MONTH, lunation_index, new_moon_day};
use crate::sun::{SolarTermIndex, solar_term_day, solar_term_index};
use crate::time_scales::TimeZoneOffset;

const MAX_YEAR_STEPS: u32 = 1;

/// A date of the lunisolar calendar.
///
/// `year` is the lunar year, which begins with the 1st month (Tết / Chinese
/// New Year), so the 11th and 12th months usually straddle the Gregorian
/// new year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_leap_month: bool,
}

impl LunarDate {
    /// Creates a lunar date without validating it; [`lunar_to_gregorian`]
    /// checks it against the actual month layout.
    ///
    /// ```
    /// use amlich::LunarDate;
    /// use amlich::lunisolar::lunar_to_gregorian;
    /// use amlich::time_scales::TimeZoneOffset;
    ///
    /// let date = LunarDate::new(2023, 13, 1, false);
    /// assert!(lunar_to_gregorian(date, TimeZoneOffset::VIETNAM).is_err());
    /// ```
    pub fn new(year: i32, month: u32, day: u32, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap_month,
        }
    }

    /// The month as a [`Month`] label.
    pub fn month_kind(&self) -> Month {
        if self.is_leap_month {
            Month::Leap(self.month)
        } else {
            Month::Common(self.month)
        }
    }

    /// Cheap guess of the Gregorian year this lunar date falls in.
    ///
    /// Assumes the lunar year starts on its mean date (early February) and
    /// that every month is a mean synodic month, so dates near the Gregorian
    /// new year can be off by one. Use [`lunar_to_gregorian`] for the exact
    /// answer.
    ///
    /// ```
    /// use amlich::LunarDate;
    ///
    /// assert_eq!(2023, LunarDate::new(2023, 11, 1, false).approximate_gregorian_year());
    /// assert_eq!(2024, LunarDate::new(2023, 12, 15, false).approximate_gregorian_year());
    /// ```
    pub fn approximate_gregorian_year(&self) -> i32 {
        const MEAN_NEW_YEAR_DAY_OF_YEAR: f64 = 36.0;
        const MEAN_GREGORIAN_YEAR: f64 = 365.2425;
        let months = self.month.saturating_sub(1) as f64 + self.is_leap_month as u32 as f64;
        let day_of_year =
            MEAN_NEW_YEAR_DAY_OF_YEAR + months * SYNODIC_MONTH + self.day.saturating_sub(1) as f64;
        self.year + (day_of_year / MEAN_GREGORIAN_YEAR).floor() as i32
    }
}

/// Formats as `YYYY-MM-DD`, with an `L` after the month of a leap month.
///
/// ```
/// use amlich::LunarDate;
///
/// assert_eq!("2023-02L-01", LunarDate::new(2023, 2, 1, true).to_string());
/// assert_eq!("2023-01-01", LunarDate::new(2023, 1, 1, false).to_string());
/// ```
impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leap = if self.is_leap_month { "L" } else { "" };
        write!(
            f,
            "{:04}-{:02}{}-{:02}",
            self.year, self.month, leap, self.day
        )
    }
}

/// Month label, `Common` for a regular month and `Leap` for a leap month.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// Month number, leap or not.
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// `true` for a leap month.
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
}

/// Start of a month within a [`LunarYear`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NewMoon {
    /// Label of the month.
    pub month: Month,
    /// Local day of the new moon, the 1st day of the month.
    pub date: Date,
    /// Lunation number, see [`crate::moon`].
    pub lunation: i32,
}

/// The months between two consecutive 11th months.
///
/// # Example
///
/// ```
/// use amlich::lunisolar::{LunarYear, Month};
/// use amlich::time_scales::TimeZoneOffset;
///
/// let year = LunarYear::new(2023, TimeZoneOffset::VIETNAM).unwrap();
/// assert_eq!(Some(2), year.leap_month());
/// assert_eq!(Month::Common(11), year.months[0].month);
/// assert_eq!("2022-11-24", year.months[0].date.iso_gregorian());
/// ```
#[derive(Debug, Clone)]
pub struct LunarYear {
    /// Number of the solar year, the Gregorian year most of it falls in.
    pub year: i32,
    /// Timezone the month boundaries were computed in.
    pub timezone: TimeZoneOffset,
    /// All month starts, including the next 11th month to mark the last day.
    pub months: Vec<NewMoon>,
}

/// Solar years that can be laid out, i.e. those overlapping
/// [`SUPPORTED_YEARS`].
pub const LAYOUT_YEARS: RangeInclusive<i32> = 1200..=3000;

/// Lunation of the 11th month of solar year `year`, the one containing the
/// December solstice of `year - 1`.
fn month_eleven(year: i32, tz: TimeZoneOffset) -> Result<i32> {
    let solstice = solar_term_day(SolarTermIndex::WINTER_SOLSTICE, year, tz)?;
    lunation_index(solstice, tz)
}

/// `true` if no major term begins during lunation `k`, judged at the local
/// midnights that open it and the next lunation.
fn lacks_major_term(k: i32, tz: TimeZoneOffset) -> bool {
    let start = solar_term_index(new_moon_day(k, tz), tz);
    let end = solar_term_index(new_moon_day(k + 1, tz), tz);
    start.major() == end.major()
}

impl LunarYear {
    /// Lays out the months of solar year `year`.
    ///
    /// Fails with [`Error::OutOfRange`] for a year outside [`LAYOUT_YEARS`],
    /// and with [`Error::LunationCount`] if the span holds neither 12
    /// lunations nor 13 lunations with a month lacking a major term.
    pub fn new(year: i32, tz: TimeZoneOffset) -> Result<Self> {
        use Month::*;

        if !LAYOUT_YEARS.contains(&year) {
            return Err(Error::outside(year, &LAYOUT_YEARS));
        }
        let first = month_eleven(year, tz)?;
        let last = month_eleven(year + 1, tz)?;
        let count = last - first;
        let mut needs_leap = match count {
            12 => false,
            13 => true,
            _ => {
                warn!(
                    year,
                    count,
                    "unexpected number of lunations between solstices"
                );
                return Err(Error::LunationCount { year, count });
            }
        };

        let mut months = Vec::with_capacity(count as usize + 1);
        let mut month = 10;
        for k in first..=last {
            let date = new_moon_day(k, tz);
            // Only the first month without a major term is a leap month,
            // even when a second one follows.
            if needs_leap && k > first && k < last && lacks_major_term(k, tz) {
                debug!(year, month, date = %date.iso_gregorian(), "leap month");
                months.push(NewMoon {
                    month: Leap(month),
                    date,
                    lunation: k,
                });
                needs_leap = false;
                continue;
            }
            month = month % 12 + 1;
            months.push(NewMoon {
                month: Common(month),
                date,
                lunation: k,
            });
        }
        if needs_leap {
            warn!(year, "no month without a major term in a 13-month year");
            return Err(Error::LunationCount { year, count });
        }

        Ok(LunarYear {
            year,
            timezone: tz,
            months,
        })
    }

    /// Lays out the solar year containing `date`.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::Date;
    /// use amlich::lunisolar::LunarYear;
    /// use amlich::time_scales::TimeZoneOffset;
    ///
    /// let date = Date::from_gregorian(2022, 12, 31).unwrap();
    /// let year = LunarYear::containing(date, TimeZoneOffset::VIETNAM).unwrap();
    ///
    /// assert_eq!(2023, year.year);
    /// ```
    pub fn containing(date: Date, tz: TimeZoneOffset) -> Result<Self> {
        let y = date.gregorian().year;
        if !SUPPORTED_YEARS.contains(&y) {
            return Err(Error::out_of_range(y));
        }
        let next = new_moon_day(month_eleven(y + 1, tz)?, tz);
        Self::new(if date >= next { y + 1 } else { y }, tz)
    }

    /// First day of the solar year.
    pub fn start(&self) -> Date {
        self.months[0].date
    }
    /// First day of the next solar year.
    pub fn end(&self) -> Date {
        self.months[self.months.len() - 1].date
    }

    /// Number of the leap month, if the year has one.
    pub fn leap_month(&self) -> Option<u32> {
        self.months
            .iter()
            .find(|m| m.month.is_leap())
            .map(|m| m.month.num())
    }

    /// Lunar year a month of this solar year belongs to.
    fn lunar_year_of(&self, month: Month) -> i32 {
        if month.num() >= 11 {
            self.year - 1
        } else {
            self.year
        }
    }

    /// Length in days of the month at `index` in [`Self::months`], `None` for
    /// the closing entry.
    pub fn month_length(&self, index: usize) -> Option<u32> {
        let start = self.months.get(index)?;
        let next = self.months.get(index + 1)?;
        Some((next.date - start.date) as u32)
    }

    /// Index in [`Self::months`] of `month` of lunar year `lunar_year`.
    pub fn position(&self, month: Month, lunar_year: i32) -> Option<usize> {
        let matches = |m: &NewMoon| m.month == month && self.lunar_year_of(m.month) == lunar_year;
        let body = &self.months[..self.months.len() - 1];
        body.iter().position(matches)
    }

    /// First day of `month` of lunar year `lunar_year`.
    pub fn month_start(&self, month: Month, lunar_year: i32) -> Option<Date> {
        self.position(month, lunar_year).map(|i| self.months[i].date)
    }

    /// Lunar date of a day within this solar year.
    ///
    /// If the day is not in this year, reports `Err` and tells whether it is
    /// before or after.
    ///
    /// # Example
    ///
    /// ```
    /// use amlich::{Date, LunarDate};
    /// use amlich::lunisolar::LunarYear;
    /// use amlich::time_scales::TimeZoneOffset;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// let year = LunarYear::containing(date, TimeZoneOffset::VIETNAM).unwrap();
    ///
    /// assert_eq!(Ok(LunarDate::new(1999, 11, 25, false)), year.ymd_for(date));
    /// ```
    pub fn ymd_for(&self, date: Date) -> std::result::Result<LunarDate, OtherYear> {
        if date < self.start() {
            return Err(OtherYear::Before);
        } else if date >= self.end() {
            return Err(OtherYear::After);
        }

        let index = self.months.partition_point(|m| m.date <= date) - 1;
        let m = &self.months[index];
        Ok(LunarDate {
            year: self.lunar_year_of(m.month),
            month: m.month.num(),
            day: (date - m.date + 1) as u32,
            is_leap_month: m.month.is_leap(),
        })
    }
}

/// The given date is not in the solar year; tells whether it is before or
/// after.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OtherYear {
    Before,
    After,
}

/// Converts a Gregorian date to the lunisolar calendar.
pub fn gregorian_to_lunar(date: GregorianDate, tz: TimeZoneOffset) -> Result<LunarDate> {
    let day = gregorian_to_julian_day(date)?;
    locate(day, LunarYear::containing(day, tz)?)
}

/// Looks `day` up in `year`, moving to the neighbouring solar year at most
/// [`MAX_YEAR_STEPS`] times when it lies outside.
fn locate(day: Date, mut year: LunarYear) -> Result<LunarDate> {
    for _ in 0..MAX_YEAR_STEPS {
        let next = match year.ymd_for(day) {
            Ok(lunar) => return Ok(lunar),
            Err(OtherYear::Before) => year.year - 1,
            Err(OtherYear::After) => year.year + 1,
        };
        debug!(
            from = year.year,
            to = next,
            "date outside the initial solar year"
        );
        year = LunarYear::new(next, year.timezone)?;
    }
    year.ymd_for(day).map_err(|other| {
        warn!(
            jdn = day.jdn(),
            year = year.year,
            ?other,
            "solar year lookup failed"
        );
        Error::ConvergenceFailure {
            search: "solar year lookup",
            iterations: MAX_YEAR_STEPS,
        }
    })
}

/// Converts a lunisolar date to the Gregorian calendar.
///
/// Fails with [`Error::InvalidLunarDate`] for a month outside `1..=12`, a
/// day outside `1..=30` or past the end of its month, and a leap month the
/// year does not have.
pub fn lunar_to_gregorian(date: LunarDate, tz: TimeZoneOffset) -> Result<GregorianDate> {
    let LunarDate {
        year,
        month,
        day,
        is_leap_month,
    } = date;
    let invalid = |reason| Error::InvalidLunarDate {
        year,
        month,
        day,
        is_leap_month,
        reason,
    };
    if !(1..=12).contains(&month) {
        return Err(invalid(LunarDateIssue::Month));
    }
    if !(1..=30).contains(&day) {
        return Err(invalid(LunarDateIssue::Day));
    }
    // The 11th and 12th months of the year before the first supported year
    // still map onto supported Gregorian dates.
    if !(SUPPORTED_YEARS.start() - 1..=*SUPPORTED_YEARS.end()).contains(&year) {
        return Err(Error::out_of_range(year));
    }

    let solar_year = LunarYear::new(if month >= 11 { year + 1 } else { year }, tz)?;
    let index = solar_year
        .position(date.month_kind(), year)
        .ok_or_else(|| invalid(LunarDateIssue::NoSuchLeapMonth))?;
    let length = solar_year.month_length(index).unwrap_or(0);
    if day > length {
        return Err(invalid(LunarDateIssue::DayBeyondMonthLength { length }));
    }
    julian_day_to_gregorian(solar_year.months[index].date + (day as i32 - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VN: TimeZoneOffset = TimeZoneOffset::VIETNAM;
    const CN: TimeZoneOffset = TimeZoneOffset::CHINA;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_gregorian(y, m, d).unwrap()
    }

    #[test]
    fn containing() {
        let dataset = [
            (2017, (2017, 1, 27)),
            (2017, (2017, 11, 17)),
            (2018, (2017, 12, 18)),
            (2000, (1999, 12, 31)),
        ];
        for (expected, (y, m, d)) in dataset {
            assert_eq!(
                expected,
                LunarYear::containing(date(y, m, d), CN).unwrap().year,
                "{y:04}-{m:02}-{d:02}"
            );
        }
    }

    #[test]
    fn months() {
        let year = LunarYear::new(2000, CN).unwrap();
        let stds = [
            (11, "1999-12-08"),
            (12, "2000-01-07"),
            (1, "2000-02-05"),
            (2, "2000-03-06"),
            (3, "2000-04-05"),
            (4, "2000-05-04"),
            (5, "2000-06-02"),
            (6, "2000-07-02"),
            (7, "2000-07-31"),
            (8, "2000-08-29"),
            (9, "2000-09-28"),
            (10, "2000-10-27"),
            (11, "2000-11-26"),
        ];
        assert_eq!(stds.len(), year.months.len());
        for (std, month) in stds.iter().zip(&year.months) {
            assert_eq!(Month::Common(std.0), month.month);
            assert_eq!(std.1, month.date.iso_gregorian());
        }
        assert_eq!(None, year.leap_month());
    }

    #[test]
    fn leap_months() {
        let stds = [
            (11, "2016-11-29"),
            (12, "2016-12-29"),
            (1, "2017-01-28"),
            (2, "2017-02-26"),
            (3, "2017-03-28"),
            (4, "2017-04-26"),
            (5, "2017-05-26"),
            (6, "2017-06-24"),
            (-6, "2017-07-23"),
            (7, "2017-08-22"),
            (8, "2017-09-20"),
            (9, "2017-10-20"),
            (10, "2017-11-18"),
            (11, "2017-12-18"),
        ];
        let year = LunarYear::new(2017, CN).unwrap();
        for (std, month) in stds.iter().zip(&year.months) {
            let std_month = if std.0 > 0 {
                Month::Common(std.0 as u32)
            } else {
                Month::Leap(-std.0 as u32)
            };
            assert_eq!(
                (std_month, std.1.into()),
                (month.month, month.date.iso_gregorian())
            );
        }
        assert_eq!(stds.len(), year.months.len());
        assert_eq!(Some(6), year.leap_month());
    }

    #[test]
    fn dates() {
        use OtherYear::*;
        let data = [
            ((2016, 11, 29), Ok(LunarDate::new(2016, 11, 1, false))),
            ((2017, 1, 27), Ok(LunarDate::new(2016, 12, 30, false))),
            ((2017, 1, 28), Ok(LunarDate::new(2017, 1, 1, false))),
            ((2017, 7, 22), Ok(LunarDate::new(2017, 6, 29, false))),
            ((2017, 7, 23), Ok(LunarDate::new(2017, 6, 1, true))),
            ((2017, 12, 17), Ok(LunarDate::new(2017, 10, 30, false))),
            ((2016, 11, 28), Err(Before)),
            ((2017, 12, 18), Err(After)),
        ];
        let year = LunarYear::new(2017, CN).unwrap();
        for ((y, m, d), std) in data {
            assert_eq!(std, year.ymd_for(date(y, m, d)), "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn leap_month_follows_timezone() {
        // China intercalated after the 10th month of 1984, Vietnam after the
        // 2nd month of 1985.
        for (year, tz, leap) in [
            (1984, CN, Some(10)),
            (1984, VN, None),
            (1985, CN, None),
            (1985, VN, Some(2)),
        ] {
            let layout = LunarYear::new(year, tz).unwrap();
            assert_eq!(leap, layout.leap_month(), "{year} at UTC{:+}", tz.hours());
        }
    }

    #[test]
    fn first_month_without_major_term_wins() {
        // Between the 2033 and 2034 solstices both the month starting
        // 2033-12-22 and the one starting 2034-02-19 lack a major term. The
        // historical rule takes the first, giving a leap 11th month.
        let year = LunarYear::new(2034, VN).unwrap();
        assert!(lacks_major_term(year.months[1].lunation, VN));
        assert!(lacks_major_term(year.months[3].lunation, VN));
        assert_eq!(Month::Leap(11), year.months[1].month);
        assert_eq!("2033-12-22", year.months[1].date.iso_gregorian());
        assert_eq!(Month::Common(1), year.months[3].month);
        assert_eq!(Some(11), year.leap_month());
    }

    #[test]
    fn month_lookup() {
        let year = LunarYear::new(2023, VN).unwrap();
        for ((month, lunar_year), expected) in [
            ((Month::Common(2), 2023), Some(date(2023, 2, 20))),
            ((Month::Leap(2), 2023), Some(date(2023, 3, 22))),
            ((Month::Leap(3), 2023), None),
            ((Month::Common(11), 2022), Some(date(2022, 11, 24))),
            ((Month::Common(11), 2023), None),
        ] {
            assert_eq!(
                expected,
                year.month_start(month, lunar_year),
                "{month:?} of {lunar_year}"
            );
        }
        let index = year.position(Month::Leap(2), 2023).unwrap();
        assert_eq!(Some(29), year.month_length(index));
        assert_eq!(None, year.month_length(year.months.len() - 1));
    }

    #[test]
    fn round_trip() {
        for ((y, m, d), lunar) in [
            ((2023, 1, 22), LunarDate::new(2023, 1, 1, false)),
            ((2023, 3, 22), LunarDate::new(2023, 2, 1, true)),
            ((2023, 2, 20), LunarDate::new(2023, 2, 1, false)),
            ((2034, 1, 19), LunarDate::new(2033, 11, 29, true)),
        ] {
            let gregorian = GregorianDate::new(y, m, d).unwrap();
            assert_eq!(Ok(lunar), gregorian_to_lunar(gregorian, VN), "{gregorian}");
            assert_eq!(Ok(gregorian), lunar_to_gregorian(lunar, VN), "{lunar}");
        }
    }

    #[test]
    fn invalid_lunar_dates() {
        let dataset = [
            (LunarDate::new(2023, 0, 1, false), LunarDateIssue::Month),
            (LunarDate::new(2023, 13, 1, false), LunarDateIssue::Month),
            (LunarDate::new(2023, 1, 0, false), LunarDateIssue::Day),
            (LunarDate::new(2023, 1, 31, false), LunarDateIssue::Day),
            (
                LunarDate::new(2023, 3, 1, true),
                LunarDateIssue::NoSuchLeapMonth,
            ),
            (
                LunarDate::new(2022, 2, 1, true),
                LunarDateIssue::NoSuchLeapMonth,
            ),
            (
                LunarDate::new(2023, 2, 30, true),
                LunarDateIssue::DayBeyondMonthLength { length: 29 },
            ),
        ];
        for (lunar, reason) in dataset {
            assert_eq!(
                Err(Error::InvalidLunarDate {
                    year: lunar.year,
                    month: lunar.month,
                    day: lunar.day,
                    is_leap_month: lunar.is_leap_month,
                    reason,
                }),
                lunar_to_gregorian(lunar, VN),
                "{lunar}"
            );
        }
    }

    #[test]
    fn lunar_year_range() {
        assert!(matches!(
            lunar_to_gregorian(LunarDate::new(1198, 1, 1, false), VN),
            Err(Error::OutOfRange { year: 1198, .. })
        ));
        assert!(matches!(
            lunar_to_gregorian(LunarDate::new(1199, 1, 1, false), VN),
            Err(Error::OutOfRange { year: 1199, .. })
        ));
        let january = lunar_to_gregorian(LunarDate::new(1199, 12, 20, false), VN);
        assert_eq!(1200, january.unwrap().year);
    }

    #[test]
    fn layout_years() {
        for year in [0, 1199, 3001, 5000] {
            assert_eq!(
                Err(Error::OutOfRange {
                    year,
                    min: 1200,
                    max: 3000,
                }),
                LunarYear::new(year, VN).map(|layout| layout.months.len()),
                "{year}"
            );
        }
        // The first and last solar years hold lunar years 1199 and 2999.
        let first = LunarYear::new(1200, VN).unwrap();
        assert_eq!("1199-11-27", first.start().iso_gregorian());
        let last = LunarYear::new(3000, VN).unwrap();
        let twelfth = last.month_start(Month::Common(12), 2999);
        assert_eq!(Some(date(2999, 12, 29)), twelfth);
        assert!(matches!(
            LunarYear::containing(date(1200, 1, 1) + -400, VN),
            Err(Error::OutOfRange { year: 1198, .. })
        ));
    }

    #[test]
    fn lookup_steps_into_neighbouring_year() {
        let day = date(2023, 6, 1);
        let expected = LunarDate::new(2023, 4, 14, false);
        for guess in [2022, 2024] {
            let year = LunarYear::new(guess, VN).unwrap();
            assert_eq!(Ok(expected), locate(day, year), "{guess}");
        }
        assert!(matches!(
            locate(day, LunarYear::new(2000, VN).unwrap()),
            Err(Error::ConvergenceFailure {
                search: "solar year lookup",
                ..
            })
        ));
    }

    #[test]
    fn approximate_year() {
        for (lunar, expected) in [
            (LunarDate::new(2023, 1, 1, false), 2023),
            (LunarDate::new(2023, 11, 1, false), 2023),
            (LunarDate::new(2023, 12, 20, false), 2024),
            (LunarDate::new(2033, 11, 1, true), 2033),
        ] {
            assert_eq!(expected, lunar.approximate_gregorian_year(), "{lunar}");
        }
    }

    #[test]
    fn month_kind() {
        let leap = LunarDate::new(2023, 2, 1, true);
        assert_eq!(Month::Leap(2), leap.month_kind());
        let common = LunarDate::new(2023, 2, 1, false);
        assert_eq!(Month::Common(2), common.month_kind());
        assert_eq!(2, Month::Leap(2).num());
        assert!(!Month::Common(2).is_leap());
    }
}
