use crate::{
    error::{Result, RoundError},
    RoundToNearest,
};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr, time::Duration};
use thiserror::Error;

/// A named unit a duration can be rounded to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationUnit {
    /// One second.
    Second,
    /// One minute.
    Minute,
    /// One hour.
    Hour,
    /// Twelve hours.
    HalfDay,
}

/// A string didn't name a [`DurationUnit`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown duration unit: {0}")]
pub struct UnknownDurationUnit(
    /// The string that failed to parse.
    pub String,
);

impl DurationUnit {
    /// The names every unit parses from and serialises to.
    pub const VARIANTS: &'static [&'static str] = &["second", "minute", "hour", "half-day"];

    /// The length of a single unit in milliseconds.
    pub const fn millis(self) -> u64 {
        match self {
            Self::Second => 1_000,
            Self::Minute => 60 * 1_000,
            Self::Hour => 60 * 60 * 1_000,
            Self::HalfDay => 12 * 60 * 60 * 1_000,
        }
    }

    /// The length of a single unit.
    pub const fn step(self) -> Duration {
        Duration::from_millis(self.millis())
    }

    fn name(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::HalfDay => "half-day",
        }
    }
}

impl Default for DurationUnit {
    fn default() -> Self {
        Self::Minute
    }
}

impl Display for DurationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DurationUnit {
    type Err = UnknownDurationUnit;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "second" => Ok(Self::Second),
            "minute" => Ok(Self::Minute),
            "hour" => Ok(Self::Hour),
            "half-day" => Ok(Self::HalfDay),
            other => Err(UnknownDurationUnit(other.to_string())),
        }
    }
}

/// Rounds a duration to the nearest whole [`DurationUnit`] and counts the units.
///
/// ```
/// use stepround::RoundDuration;
/// use std::time::Duration;
///
/// assert_eq!(Duration::from_secs(30).round_to_nearest_minute(), Ok(1));
/// assert_eq!(Duration::from_secs(89 * 60).round_to_nearest_hour(), Ok(1));
/// ```
pub trait RoundDuration: Sized {
    /// Rounds the duration to the nearest multiple of `unit` and returns how many units it is.
    fn round_to_unit(self, unit: DurationUnit) -> Result<u64>;

    /// Rounds the duration to the nearest whole second and returns how many it is.
    fn round_to_nearest_second(self) -> Result<u64> {
        self.round_to_unit(DurationUnit::Second)
    }

    /// Rounds the duration to the nearest whole minute and returns how many it is.
    fn round_to_nearest_minute(self) -> Result<u64> {
        self.round_to_unit(DurationUnit::Minute)
    }

    /// Rounds the duration to the nearest whole hour and returns how many it is.
    fn round_to_nearest_hour(self) -> Result<u64> {
        self.round_to_unit(DurationUnit::Hour)
    }

    /// Rounds the duration to the nearest whole half-day (twelve hours) and returns how many it is.
    fn round_to_nearest_half_day(self) -> Result<u64> {
        self.round_to_unit(DurationUnit::HalfDay)
    }
}

impl RoundDuration for Duration {
    fn round_to_unit(self, unit: DurationUnit) -> Result<u64> {
        let rounded = self.round_to_nearest(unit.step())?;
        u64::try_from(rounded.as_millis() / u128::from(unit.millis())).map_err(|_| RoundError::OutOfRange("u64"))
    }
}

impl RoundDuration for chrono::Duration {
    fn round_to_unit(self, unit: DurationUnit) -> Result<u64> {
        // every unit is well within i64 milliseconds
        let step = chrono::Duration::milliseconds(unit.millis() as i64);
        let rounded = self.round_to_nearest(step)?;

        // the rounded duration is never negative
        Ok(rounded.num_milliseconds() as u64 / unit.millis())
    }
}
