use lazy_static::lazy_static;
use regex::Regex;
use std::{fmt::Display, str::FromStr, time::Duration};
use thiserror::Error;

const UNITS: [(&str, u64); 5] = [
    ("d", 24 * 60 * 60 * 1_000),
    ("h", 60 * 60 * 1_000),
    ("m", 60 * 1_000),
    ("s", 1_000),
    ("ms", 1),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum DurationArgError {
    #[error("Malformed duration '{0}', expected e.g. 500ms, 90s or 1h30m")]
    Malformed(String),
    #[error("Duration '{0}' is too long")]
    TooLong(String),
}

/// A duration given on the command line as one or more `<number><unit>` groups, such as `1h30m`. A bare number is in
/// milliseconds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct DurationArg(pub Duration);

impl FromStr for DurationArg {
    type Err = DurationArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref WHOLE: Regex = Regex::new(r"^(?:\d+|(?:\d+(?:ms|s|m|h|d))+)$").unwrap();
            static ref GROUP: Regex = Regex::new(r"(\d+)(ms|s|m|h|d)?").unwrap();
        }

        let s = s.trim();
        if !WHOLE.is_match(s) {
            return Err(DurationArgError::Malformed(s.to_string()));
        }

        let too_long = || DurationArgError::TooLong(s.to_string());
        let mut millis: u64 = 0;

        for cap in GROUP.captures_iter(s) {
            let count: u64 = cap[1].parse().map_err(|_| too_long())?;
            let unit = cap.get(2).map_or("ms", |m| m.as_str());
            let factor = unit_millis(unit).ok_or_else(|| DurationArgError::Malformed(s.to_string()))?;

            millis = count
                .checked_mul(factor)
                .and_then(|group| millis.checked_add(group))
                .ok_or_else(too_long)?;
        }

        Ok(Self(Duration::from_millis(millis)))
    }
}

impl Display for DurationArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut remaining = self.0.as_millis();
        if remaining == 0 {
            return write!(f, "0ms");
        }

        for (unit, factor) in UNITS {
            let factor = u128::from(factor);
            let count = remaining / factor;

            if count > 0 {
                write!(f, "{}{}", count, unit)?;
                remaining %= factor;
            }
        }

        Ok(())
    }
}

fn unit_millis(unit: &str) -> Option<u64> {
    UNITS.iter().find(|(name, _)| *name == unit).map(|(_, factor)| *factor)
}
