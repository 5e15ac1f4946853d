//! Error types for the optional and outcome values.
//!
//! Absence and failure are data in this crate: `Maybe::Nothing`,
//! `Outcome::Pending` and `Outcome::Failure` are ordinary values. The only
//! errors are raised when a caller asks for the raw value of a case it did not
//! supply a handler for.

use thiserror::Error;

/// Represents an attempt to extract a value from a case that was not handled.
///
/// Returned by [`Maybe::unwrap`](crate::maybe::Maybe::unwrap) and
/// [`Outcome::unwrap`](crate::outcome::Outcome::unwrap). These errors are
/// never caught inside the crate; they always propagate to the caller.
///
/// # Examples
///
/// ```rust
/// use seqflow::CaseError;
/// use seqflow::maybe::Maybe;
///
/// let nothing: Maybe<i32> = Maybe::Nothing;
/// assert_eq!(nothing.unwrap(), Err(CaseError::UnhandledNothing));
/// assert_eq!(CaseError::UnhandledNothing.to_string(), "unhandled Nothing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CaseError {
    /// A `Maybe` held `Nothing` and no `nothing` handler was supplied.
    #[error("unhandled Nothing")]
    UnhandledNothing,
    /// An `Outcome` was `Pending` and no `pending` handler was supplied.
    #[error("unhandled Pending")]
    UnhandledPending,
    /// An `Outcome` was a `Failure` and no `failure` handler was supplied.
    #[error("unhandled Failure")]
    UnhandledFailure,
}

/// The failure payload produced when a plain value is classified as a failure.
///
/// [`Outcome::classify`](crate::outcome::Outcome::classify) turns absent or
/// blank values into `Failure(Rejected)`, keeping a rendering of the value
/// that was rejected.
///
/// # Examples
///
/// ```rust
/// use seqflow::Rejected;
///
/// let rejected = Rejected::of(&"");
/// assert_eq!(rejected.to_string(), "received \"\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("received {received}")]
pub struct Rejected {
    /// `Debug` rendering of the rejected value.
    pub received: String,
}

impl Rejected {
    /// Creates a `Rejected` describing `value`.
    pub fn of<T: std::fmt::Debug + ?Sized>(value: &T) -> Self {
        Self {
            received: format!("{value:?}"),
        }
    }
}

impl From<Rejected> for String {
    fn from(rejected: Rejected) -> Self {
        rejected.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CaseError::UnhandledNothing, "unhandled Nothing")]
    #[case(CaseError::UnhandledPending, "unhandled Pending")]
    #[case(CaseError::UnhandledFailure, "unhandled Failure")]
    fn case_error_display(#[case] error: CaseError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn rejected_renders_debug_of_value() {
        assert_eq!(Rejected::of(&None::<i32>).to_string(), "received None");
        assert_eq!(Rejected::of(&false).received, "false");
    }

    #[rstest]
    fn rejected_converts_into_string() {
        let message: String = Rejected::of(&f64::NAN).into();
        assert_eq!(message, "received NaN");
    }
}
