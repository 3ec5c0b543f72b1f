use thiserror::Error;

/// The result type returned from the library.
pub type Result<T> = std::result::Result<T, RoundError>;

/// The error type returned from the library.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    /// The value or the step given to a rounding operation violates its preconditions.
    #[error("Invalid argument: {0}")]
    InvalidArgument(
        /// The precondition that was violated.
        InvalidArgument,
    ),
    /// The rounded result doesn't fit in the type being rounded.
    #[error("The rounded result is out of range for {0}")]
    OutOfRange(
        /// Name of the type that overflowed.
        &'static str,
    ),
}

/// The precondition a rounding operation's arguments violated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidArgument {
    /// The value to round is below zero.
    #[error("the value must not be negative")]
    NegativeValue,
    /// The step is zero or below zero.
    #[error("the step must be greater than zero")]
    NonPositiveStep,
    /// A floating point value or step is NaN or infinite.
    #[error("the {0} must be a finite number")]
    NotFinite(
        /// Which argument wasn't finite, either "value" or "step".
        &'static str,
    ),
    /// A duration step is shorter than the one millisecond durations are rounded with.
    #[error("the step must be at least one millisecond")]
    StepBelowResolution,
}

impl From<InvalidArgument> for RoundError {
    fn from(reason: InvalidArgument) -> Self {
        Self::InvalidArgument(reason)
    }
}
