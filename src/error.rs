//! Error types for the amlich crate.

use std::fmt;
use std::ops::RangeInclusive;

/// Shorthand for results returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all fallible operations in the amlich crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The year lies outside the era the astronomical series are validated for.
    #[error("year {year} is outside the supported range {min}..={max}")]
    OutOfRange {
        /// The offending year.
        year: i32,
        /// First supported year.
        min: i32,
        /// Last supported year.
        max: i32,
    },

    /// The civil date does not exist, e.g. February 30.
    #[error("{year:04}-{month:02}-{day:02} is not a valid Gregorian date")]
    InvalidGregorianDate {
        /// Year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: u32,
        /// Day of the rejected date.
        day: u32,
    },

    /// The lunar date does not exist in the given lunar year.
    #[error("lunar date {year}-{month}{}-{day} is invalid: {reason}", leap_suffix(.is_leap_month))]
    InvalidLunarDate {
        /// Lunar year of the rejected date.
        year: i32,
        /// Month number of the rejected date.
        month: u32,
        /// Day of the rejected date.
        day: u32,
        /// Whether a leap month was requested.
        is_leap_month: bool,
        /// Which part of the date is wrong.
        reason: LunarDateIssue,
    },

    /// A bounded numerical search ran out of iterations.
    #[error("{search} did not converge within {iterations} iterations")]
    ConvergenceFailure {
        /// Name of the search that failed.
        search: &'static str,
        /// Number of iterations spent.
        iterations: u32,
    },

    /// Timezone offsets must be finite and within UTC-12..=UTC+14.
    #[error("timezone offset must be finite and within -12..=14 hours, got {hours}")]
    InvalidTimeZone {
        /// The rejected offset, in hours.
        hours: f64,
    },

    /// The span between two month-11 anchors could not be labeled.
    #[error("solar year {year} spans {count} lunations with no consistent leap month")]
    LunationCount {
        /// Solar year (see [`crate::sun::solar_term_day`]) being laid out.
        year: i32,
        /// Number of lunations between its two month-11 anchors.
        count: i32,
    },
}

impl Error {
    pub(crate) fn out_of_range(year: i32) -> Self {
        Self::outside(year, &crate::date::SUPPORTED_YEARS)
    }

    pub(crate) fn outside(year: i32, supported: &RangeInclusive<i32>) -> Self {
        Self::OutOfRange {
            year,
            min: *supported.start(),
            max: *supported.end(),
        }
    }
}

fn leap_suffix(is_leap_month: &bool) -> &'static str {
    if *is_leap_month { " (leap)" } else { "" }
}

/// Reason attached to [`Error::InvalidLunarDate`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LunarDateIssue {
    /// Month number outside `1..=12`.
    Month,
    /// Day outside `1..=30`.
    Day,
    /// Day past the end of a 29-day month.
    DayBeyondMonthLength {
        /// Actual length of the month.
        length: u32,
    },
    /// The year has no leap month with that number.
    NoSuchLeapMonth,
}

impl fmt::Display for LunarDateIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month => f.write_str("month must be within 1..=12"),
            Self::Day => f.write_str("day must be within 1..=30"),
            Self::DayBeyondMonthLength { length } => {
                write!(f, "the month only has {length} days")
            }
            Self::NoSuchLeapMonth => f.write_str("the year has no such leap month"),
        }
    }
}
