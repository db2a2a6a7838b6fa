//! Converter configuration.

use chrono::{DateTime, Utc};

use crate::date::{Date, GregorianDate, julian_day_to_gregorian};
use crate::error::Result;
use crate::lunisolar::{self, LunarDate, LunarYear};
use crate::time_scales::TimeZoneOffset;

/// Configuration for a [`Converter`].
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use amlich::ConverterConfig;
///
/// let config = ConverterConfig::new().with_timezone(8.0);
///
/// assert!(config.validate().is_ok());
/// assert!(ConverterConfig::new().with_timezone(15.0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct ConverterConfig {
    /// Offset from UTC in hours at which days begin.
    #[cfg_attr(feature = "serde", serde(default = "default_timezone"))]
    timezone: f64,
}

#[cfg(feature = "serde")]
fn default_timezone() -> f64 {
    TimeZoneOffset::VIETNAM.hours()
}

impl ConverterConfig {
    /// Creates a configuration for UTC+7.
    pub fn new() -> Self {
        Self {
            timezone: TimeZoneOffset::VIETNAM.hours(),
        }
    }

    /// Sets the offset from UTC, in hours.
    pub fn with_timezone(mut self, hours: f64) -> Self {
        self.timezone = hours;
        self
    }

    /// Returns the configured offset in hours.
    pub fn timezone(&self) -> f64 {
        self.timezone
    }

    /// Validates the configuration, returning the checked timezone.
    pub fn validate(&self) -> Result<TimeZoneOffset> {
        TimeZoneOffset::new(self.timezone)
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Calendar conversions in one fixed timezone.
///
/// # Example
///
/// ```
/// use amlich::{Converter, ConverterConfig, GregorianDate, LunarDate};
///
/// let converter = Converter::new(&ConverterConfig::new()).unwrap();
/// let tet = GregorianDate::new(2023, 1, 22).unwrap();
///
/// assert_eq!(LunarDate::new(2023, 1, 1, false), converter.to_lunar(tet).unwrap());
/// assert_eq!(tet, converter.to_gregorian(LunarDate::new(2023, 1, 1, false)).unwrap());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Converter {
    timezone: TimeZoneOffset,
}

impl Converter {
    /// Creates a converter, failing if the configuration is invalid.
    pub fn new(config: &ConverterConfig) -> Result<Self> {
        Ok(Self {
            timezone: config.validate()?,
        })
    }

    /// The timezone days are computed in.
    pub fn timezone(&self) -> TimeZoneOffset {
        self.timezone
    }

    /// See [`lunisolar::gregorian_to_lunar`].
    pub fn to_lunar(&self, date: GregorianDate) -> Result<LunarDate> {
        lunisolar::gregorian_to_lunar(date, self.timezone)
    }

    /// See [`lunisolar::lunar_to_gregorian`].
    pub fn to_gregorian(&self, date: LunarDate) -> Result<GregorianDate> {
        lunisolar::lunar_to_gregorian(date, self.timezone)
    }

    /// Month layout of solar year `year`, see [`LunarYear`].
    pub fn lunar_year(&self, year: i32) -> Result<LunarYear> {
        LunarYear::new(year, self.timezone)
    }

    /// Lunar date of the local day a UTC instant falls on.
    pub fn today(&self, now: DateTime<Utc>) -> Result<LunarDate> {
        let date = julian_day_to_gregorian(Date::from_utc(now, self.timezone))?;
        self.to_lunar(date)
    }
}
