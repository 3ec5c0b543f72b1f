use super::{rounds_up, RoundToNearest};
use crate::error::{InvalidArgument, Result, RoundError};
use log::*;
use rust_decimal::Decimal;
use std::{fmt::Display, str::FromStr};

impl RoundToNearest for Decimal {
    fn round_to_nearest(self, step: Self) -> Result<Self> {
        if self < Decimal::ZERO {
            return Err(InvalidArgument::NegativeValue.into());
        }

        if step <= Decimal::ZERO {
            return Err(InvalidArgument::NonPositiveStep.into());
        }

        if self.is_zero() {
            return Ok(self);
        }

        let remainder = self.checked_rem(step).ok_or(RoundError::OutOfRange("Decimal"))?;
        let rounded_down = self - remainder;

        if rounds_up(remainder, step) {
            trace!("{} rounds up from {} by {}", self, rounded_down, step);
            rounded_down
                .checked_add(step)
                .ok_or(RoundError::OutOfRange("Decimal"))
        } else {
            trace!("{} rounds down to {}", self, rounded_down);
            Ok(rounded_down)
        }
    }
}

macro_rules! impl_round_float {
    ($($ty:ty),*) => {$(
        impl RoundToNearest for $ty {
            fn round_to_nearest(self, step: Self) -> Result<Self> {
                if !self.is_finite() {
                    return Err(InvalidArgument::NotFinite("value").into());
                }

                if !step.is_finite() {
                    return Err(InvalidArgument::NotFinite("step").into());
                }

                if self < 0.0 {
                    return Err(InvalidArgument::NegativeValue.into());
                }

                if step <= 0.0 {
                    return Err(InvalidArgument::NonPositiveStep.into());
                }

                if self == 0.0 {
                    return Ok(self);
                }

                let value = to_decimal(self, stringify!($ty))?;
                let step = to_decimal(step, stringify!($ty))?;
                // a positive step too small for the decimal scale parses as zero
                if step.is_zero() {
                    return Err(RoundError::OutOfRange(stringify!($ty)));
                }

                from_decimal(value.round_to_nearest(step)?, stringify!($ty))
            }
        }
    )*};
}

impl_round_float!(f32, f64);

// the float's display form is the shortest string that parses back into the same float, so e.g. 99.995 is taken as
// exactly 99.995 and not as the binary approximation 99.99499999999999744...
fn to_decimal<F>(value: F, ty: &'static str) -> Result<Decimal>
where
    F: Display,
{
    Decimal::from_str(&value.to_string()).map_err(|e| {
        debug!("{} {} has no exact decimal representation: {}", ty, value, e);
        RoundError::OutOfRange(ty)
    })
}

// parsing a float from its decimal digits is correctly rounded, unlike building it from the mantissa and scale
fn from_decimal<F>(value: Decimal, ty: &'static str) -> Result<F>
where
    F: FromStr,
{
    value.to_string().parse().map_err(|_| RoundError::OutOfRange(ty))
}
