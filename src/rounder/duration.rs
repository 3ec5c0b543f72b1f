use super::RoundToNearest;
use crate::error::{InvalidArgument, Result, RoundError};
use std::time::Duration;

const MILLIS_PER_SEC: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;

// durations are rounded in whole milliseconds, anything below a millisecond is truncated before rounding

impl RoundToNearest for Duration {
    fn round_to_nearest(self, step: Self) -> Result<Self> {
        if step.is_zero() {
            return Err(InvalidArgument::NonPositiveStep.into());
        }

        let step_millis = step.as_millis();
        if step_millis == 0 {
            return Err(InvalidArgument::StepBelowResolution.into());
        }

        if self.is_zero() {
            return Ok(self);
        }

        let millis = self.as_millis().round_to_nearest(step_millis)?;
        let secs = u64::try_from(millis / MILLIS_PER_SEC).map_err(|_| RoundError::OutOfRange("Duration"))?;
        // below a billion so it always fits
        let nanos = ((millis % MILLIS_PER_SEC) * NANOS_PER_MILLI) as u32;

        Ok(Duration::new(secs, nanos))
    }
}

impl RoundToNearest for chrono::Duration {
    fn round_to_nearest(self, step: Self) -> Result<Self> {
        if self < chrono::Duration::zero() {
            return Err(InvalidArgument::NegativeValue.into());
        }

        if step <= chrono::Duration::zero() {
            return Err(InvalidArgument::NonPositiveStep.into());
        }

        let step_millis = step.num_milliseconds();
        if step_millis == 0 {
            return Err(InvalidArgument::StepBelowResolution.into());
        }

        if self.is_zero() {
            return Ok(self);
        }

        let millis = self
            .num_milliseconds()
            .round_to_nearest(step_millis)
            .map_err(|_| RoundError::OutOfRange("chrono::Duration"))?;

        Ok(chrono::Duration::milliseconds(millis))
    }
}
