//! Rounds integers, real numbers and durations to the nearest multiple of a step. Exact ties always round up to the
//! larger multiple.
//!
//! Real numbers are rounded with exact decimal arithmetic, so binary floating point representation error doesn't leak
//! into the result. Durations are rounded in whole milliseconds.
//!
//! ```
//! use stepround::{round_to_nearest, RoundDuration, RoundToNearest};
//! use std::time::Duration;
//!
//! assert_eq!(round_to_nearest(9, 5), Ok(10));
//! assert_eq!(100.64_f64.round_to_nearest(0.1), Ok(100.6));
//! assert_eq!(Duration::from_secs(18 * 60 * 60).round_to_nearest_half_day(), Ok(2));
//! ```

mod error;
mod round_duration;
mod rounder;

pub use error::{InvalidArgument, Result, RoundError};
pub use round_duration::{DurationUnit, RoundDuration, UnknownDurationUnit};
pub use rounder::{round_to_nearest, RoundToNearest};
pub use rust_decimal::Decimal;
