mod duration;
mod real;

use crate::error::{InvalidArgument, Result, RoundError};
use log::*;
use std::ops::Sub;

/// Types that can be rounded to the nearest multiple of a step of the same type.
///
/// Every implementation shares the same contract:
///
/// - the value must not be negative and the step must be greater than zero, otherwise
///   [`RoundError::InvalidArgument`] is returned,
/// - a zero value is returned as-is,
/// - otherwise the value is rounded down to the previous multiple of the step, and then up by one step if the
///   remainder is at least half of the step. Exact ties round up.
pub trait RoundToNearest: Sized {
    /// Rounds `self` to the multiple of `step` nearest to it.
    fn round_to_nearest(self, step: Self) -> Result<Self>;
}

/// Rounds `value` to the multiple of `step` nearest to it. Ties round up.
///
/// ```
/// use stepround::round_to_nearest;
///
/// assert_eq!(round_to_nearest(93, 5), Ok(95));
/// assert_eq!(round_to_nearest(99.995, 0.01), Ok(100.0));
/// ```
pub fn round_to_nearest<T>(value: T, step: T) -> Result<T>
where
    T: RoundToNearest,
{
    value.round_to_nearest(step)
}

// comparing against the step's other half instead of doubling the remainder keeps this from overflowing
fn rounds_up<T>(remainder: T, step: T) -> bool
where
    T: Copy + PartialOrd + Sub<Output = T>,
{
    remainder >= step - remainder
}

macro_rules! round_integer {
    ($value:expr, $step:expr, $ty:ty) => {{
        let (value, step) = ($value, $step);
        if value == 0 {
            return Ok(0);
        }

        let remainder = value % step;
        let rounded_down = value - remainder;

        if rounds_up(remainder, step) {
            trace!("{} rounds up from {} by {}", value, rounded_down, step);
            rounded_down
                .checked_add(step)
                .ok_or(RoundError::OutOfRange(stringify!($ty)))
        } else {
            trace!("{} rounds down to {}", value, rounded_down);
            Ok(rounded_down)
        }
    }};
}

macro_rules! impl_round_unsigned {
    ($($ty:ty),*) => {$(
        impl RoundToNearest for $ty {
            fn round_to_nearest(self, step: Self) -> Result<Self> {
                if step == 0 {
                    return Err(InvalidArgument::NonPositiveStep.into());
                }

                round_integer!(self, step, $ty)
            }
        }
    )*};
}

macro_rules! impl_round_signed {
    ($($ty:ty),*) => {$(
        impl RoundToNearest for $ty {
            fn round_to_nearest(self, step: Self) -> Result<Self> {
                if self < 0 {
                    return Err(InvalidArgument::NegativeValue.into());
                }

                if step <= 0 {
                    return Err(InvalidArgument::NonPositiveStep.into());
                }

                round_integer!(self, step, $ty)
            }
        }
    )*};
}

impl_round_unsigned!(u8, u16, u32, u64, u128, usize);
impl_round_signed!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::round_to_nearest;
    use crate::{InvalidArgument, RoundError};
    use proptest::prelude::*;

    #[test]
    fn zero_stays_zero() {
        assert_eq!(round_to_nearest(0, 5), Ok(0));
        assert_eq!(round_to_nearest(0u8, 255), Ok(0));
        assert_eq!(round_to_nearest(0i64, 1), Ok(0));
    }

    #[test]
    fn rounds_to_nearest_multiple() {
        assert_eq!(round_to_nearest(2, 5), Ok(0));
        assert_eq!(round_to_nearest(5, 5), Ok(5));
        assert_eq!(round_to_nearest(9, 5), Ok(10));
        assert_eq!(round_to_nearest(93, 5), Ok(95));
        assert_eq!(round_to_nearest(1234u64, 100), Ok(1200));
    }

    #[test]
    fn exact_half_rounds_up() {
        assert_eq!(round_to_nearest(5, 10), Ok(10));
        assert_eq!(round_to_nearest(15u32, 10), Ok(20));
        assert_eq!(round_to_nearest(4, 10), Ok(0));
    }

    #[test]
    fn step_larger_than_value() {
        assert_eq!(round_to_nearest(3, 100), Ok(0));
        assert_eq!(round_to_nearest(50, 100), Ok(100));
        assert_eq!(round_to_nearest(99, 100), Ok(100));
    }

    #[test]
    fn negative_value() {
        let rounded = round_to_nearest(-1, 5);
        assert!(matches!(
            rounded,
            Err(RoundError::InvalidArgument(InvalidArgument::NegativeValue))
        ));
    }

    #[test]
    fn zero_step() {
        let rounded = round_to_nearest(7u16, 0);
        assert!(matches!(
            rounded,
            Err(RoundError::InvalidArgument(InvalidArgument::NonPositiveStep))
        ));

        // the step is checked before a zero value short-circuits
        let rounded = round_to_nearest(0, 0);
        assert!(matches!(
            rounded,
            Err(RoundError::InvalidArgument(InvalidArgument::NonPositiveStep))
        ));
    }

    #[test]
    fn negative_step() {
        let rounded = round_to_nearest(10i32, -5);
        assert!(matches!(
            rounded,
            Err(RoundError::InvalidArgument(InvalidArgument::NonPositiveStep))
        ));
    }

    #[test]
    fn overflowing_result() {
        let rounded = round_to_nearest(u8::MAX, 10);
        assert!(matches!(rounded, Err(RoundError::OutOfRange("u8"))));

        // rounding down never overflows, even right at the type's limit
        assert_eq!(round_to_nearest(u8::MAX, 200), Ok(200));
        assert_eq!(round_to_nearest(i64::MAX, i64::MAX), Ok(i64::MAX));
    }

    #[test]
    fn large_step_does_not_overflow_the_half_check() {
        assert_eq!(round_to_nearest(u64::MAX / 2, u64::MAX), Ok(0));
        assert_eq!(round_to_nearest(u64::MAX / 2 + 1, u64::MAX), Ok(u64::MAX));
    }

    proptest! {
        #[test]
        fn result_follows_half_rule(value in 0u64..1_000_000_000, step in 1u64..1_000_000) {
            let rounded = round_to_nearest(value, step).unwrap();
            let remainder = value % step;

            prop_assert_eq!(rounded % step, 0);
            if 2 * remainder < step {
                prop_assert_eq!(rounded, value - remainder);
            } else {
                prop_assert_eq!(rounded, value - remainder + step);
            }
        }

        #[test]
        fn monotonic_in_value(a in 0i64..1_000_000_000, b in 0i64..1_000_000_000, step in 1i64..1_000_000) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(round_to_nearest(low, step).unwrap() <= round_to_nearest(high, step).unwrap());
        }
    }
}
