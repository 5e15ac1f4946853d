//! Outcomes: success, failure, or still pending.
//!
//! [`Outcome<T, E>`] is a restricted optional value with a third state.
//! `Success` plays the role of `Just`; `Failure` and `Pending` are two
//! distinct kinds of `Nothing`. Converting an outcome into a
//! [`Maybe`] keeps only the success value, while the reverse conversion does
//! not exist: every outcome is a maybe, not the other way around.
//!
//! Plain values are classified with [`Outcome::classify`]: present values that
//! are not blank (see [`Presence`]) become `Success`, everything else becomes
//! `Failure(Rejected)`. Numeric zero is a success.
//!
//! # Examples
//!
//! ```rust
//! use seqflow::outcome::Outcome;
//!
//! let parsed: Outcome<i32> = Outcome::classify("42".parse::<i32>().ok());
//! let doubled = parsed.map(|n| n * 2);
//! assert_eq!(doubled, Outcome::Success(84));
//!
//! let empty: Outcome<&str> = Outcome::classify("");
//! assert!(empty.is_failure());
//! ```

mod given;

pub use given::{AllSuccess, given};

use std::convert::Infallible;
use std::fmt;

use crate::error::{CaseError, Rejected};
use crate::maybe::Maybe;
use crate::presence::{IntoMaybe, Presence};

/// The result of a computation that may have succeeded, failed, or not yet
/// finished.
///
/// The failure type defaults to [`Rejected`], the payload produced by
/// [`classify`](Self::classify).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E = Rejected> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure(E),
    /// The computation has not finished.
    Pending,
}

/// Normalizes a value into an [`Outcome`].
///
/// Existing outcomes are returned unchanged. Every [`IntoMaybe`] value whose
/// inner type implements [`Presence`] and `Debug` is classified: `Nothing` or
/// blank values become `Failure`, anything else `Success`.
pub trait IntoOutcome<E> {
    /// The type held by the resulting `Success`.
    type Value;

    /// Performs the normalization.
    fn into_outcome(self) -> Outcome<Self::Value, E>;
}

impl<T, E> IntoOutcome<E> for Outcome<T, E> {
    type Value = T;

    #[inline]
    fn into_outcome(self) -> Self {
        self
    }
}

impl<R, E> IntoOutcome<E> for R
where
    R: IntoMaybe,
    R::Value: Presence + fmt::Debug,
    E: From<Rejected>,
{
    type Value = R::Value;

    fn into_outcome(self) -> Outcome<R::Value, E> {
        match self.into_maybe() {
            Maybe::Just(value) if !value.is_blank() => Outcome::Success(value),
            Maybe::Just(value) => Outcome::Failure(Rejected::of(&value).into()),
            Maybe::Nothing => Outcome::Failure(Rejected::of(&None::<()>).into()),
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// Classifies `value` into an outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<i32>::classify(0), Outcome::Success(0));
    /// assert!(Outcome::<i32>::classify(None::<i32>).is_failure());
    /// assert_eq!(Outcome::<i32>::classify(Outcome::<i32>::Pending), Outcome::Pending);
    /// ```
    #[inline]
    pub fn classify<R>(value: R) -> Self
    where
        R: IntoOutcome<E, Value = T>,
    {
        value.into_outcome()
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` for `Pending`.
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
            Self::Pending => Outcome::Pending,
        }
    }

    /// Maps a success value and re-classifies the result.
    ///
    /// Mapping to a blank value yields `Failure`, and a returned `Outcome` is
    /// flattened. `Failure` and `Pending` are passed through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::outcome::Outcome;
    ///
    /// let success: Outcome<i32> = Outcome::Success(1);
    /// assert_eq!(success.clone().map(|n| n + 1), Outcome::Success(2));
    /// assert!(success.map(|_| "").is_failure());
    /// ```
    pub fn map<R, F>(self, function: F) -> Outcome<R::Value, E>
    where
        F: FnOnce(T) -> R,
        R: IntoOutcome<E>,
    {
        match self {
            Self::Success(value) => function(value).into_outcome(),
            Self::Failure(error) => Outcome::Failure(error),
            Self::Pending => Outcome::Pending,
        }
    }

    /// Chains a computation that itself returns an outcome.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
            Self::Pending => Outcome::Pending,
        }
    }

    /// Runs a side effect on a failure value; every branch returns `self`.
    #[inline]
    #[must_use]
    pub fn tap_failure<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            function(error);
        }
        self
    }

    /// Runs a side effect on every branch and returns `self`.
    #[inline]
    #[must_use]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&Self),
    {
        function(&self);
        self
    }

    /// Pattern-matches with all three cases supplied.
    #[inline]
    pub fn case_map<U, S, F, P>(self, success: S, failure: F, pending: P) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
        P: FnOnce() -> U,
    {
        match self {
            Self::Success(value) => success(value),
            Self::Failure(error) => failure(error),
            Self::Pending => pending(),
        }
    }

    /// Extracts the success value using the default `success` case.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::UnhandledPending`] or
    /// [`CaseError::UnhandledFailure`] for the unhandled states.
    #[inline]
    pub fn unwrap(self) -> Result<T, CaseError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(CaseError::UnhandledFailure),
            Self::Pending => Err(CaseError::UnhandledPending),
        }
    }

    /// Extracts the success value, computing a fallback for both other states.
    ///
    /// The fallback receives `Some(error)` for `Failure` and `None` for
    /// `Pending`.
    #[inline]
    pub fn unwrap_or<F>(self, fallback: F) -> T
    where
        F: FnOnce(Option<E>) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => fallback(Some(error)),
            Self::Pending => fallback(None),
        }
    }

    /// Splits off the success value, keeping any other state with an
    /// uninhabited success type.
    pub(crate) fn into_success(self) -> Result<T, Outcome<Infallible, E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(Outcome::Failure(error)),
            Self::Pending => Err(Outcome::Pending),
        }
    }
}

impl<E> Outcome<Infallible, E> {
    /// Re-types a non-success outcome.
    pub(crate) fn widen<T>(self) -> Outcome<T, E> {
        match self {
            Self::Success(never) => match never {},
            Self::Failure(error) => Outcome::Failure(error),
            Self::Pending => Outcome::Pending,
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Maybe<T> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Self::Just(value),
            Outcome::Failure(_) | Outcome::Pending => Self::Nothing,
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "result.Success {value}"),
            Self::Failure(error) => write!(formatter, "result.Failure {error}"),
            Self::Pending => write!(formatter, "result.Pending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Text = Outcome<String, String>;

    #[rstest]
    fn map_identity_keeps_every_state() {
        let success: Text = Outcome::Success("yay".into());
        let failure: Text = Outcome::Failure("boo".into());
        let pending: Text = Outcome::Pending;

        assert_eq!(success.clone().map(|x| x), success);
        assert_eq!(failure.clone().map(|x| x), failure);
        assert_eq!(pending.clone().map(|x| x), pending);
    }

    #[rstest]
    #[case(Outcome::Success(1), "2")]
    #[case(Outcome::Success(2), "boo!")]
    #[case(Outcome::Failure("1".to_string()), "1!")]
    #[case(Outcome::Pending, "?")]
    fn chained_transform(#[case] input: Outcome<i32, String>, #[case] expected: &str) {
        let result = input
            .map(|x| x + 1)
            .map(|x| {
                if x % 2 == 0 {
                    Outcome::Success(x)
                } else {
                    Outcome::Failure("boo".to_string())
                }
            })
            .case_map(|value| value.to_string(), |error| format!("{error}!"), || "?".to_string());
        assert_eq!(result, expected);
    }

    #[rstest]
    fn map_to_blank_value_fails() {
        let outcome: Outcome<i32> = Outcome::Success(1);
        let mapped = outcome.map(|_| String::new());
        assert_eq!(mapped, Outcome::Failure(Rejected::of(&String::new())));
    }

    #[rstest]
    fn map_to_absent_value_fails() {
        let outcome: Outcome<i32, String> = Outcome::Success(1);
        assert_eq!(outcome.map(|_| None::<i32>), Outcome::Failure("received None".to_string()));
    }

    #[rstest]
    fn unwrap_reports_unhandled_states() {
        assert_eq!(Outcome::<i32, String>::Success(1).unwrap(), Ok(1));
        assert_eq!(Outcome::<i32, String>::Pending.unwrap(), Err(CaseError::UnhandledPending));
        assert_eq!(
            Outcome::<i32, String>::Failure("x".into()).unwrap(),
            Err(CaseError::UnhandledFailure)
        );
    }

    #[rstest]
    fn unwrap_or_distinguishes_pending_from_failure() {
        let describe = |outcome: Outcome<String, String>| {
            outcome.unwrap_or(|error| format!("{}!", error.unwrap_or_else(|| "undefined".into())))
        };
        assert_eq!(describe(Outcome::Failure("1".into())), "1!");
        assert_eq!(describe(Outcome::Pending), "undefined!");
        assert_eq!(describe(Outcome::Success("ok".into())), "ok");
    }

    #[rstest]
    fn tap_failure_only_runs_on_failure() {
        let mut seen = Vec::new();
        let _ = Outcome::<i32, &str>::Failure("bad").tap_failure(|error| seen.push(*error));
        let _ = Outcome::<i32, &str>::Success(1).tap_failure(|error| seen.push(*error));
        let _ = Outcome::<i32, &str>::Pending.tap_failure(|error| seen.push(*error));
        assert_eq!(seen, vec!["bad"]);
    }

    #[rstest]
    fn tap_runs_on_every_branch() {
        let mut count = 0;
        for outcome in [Outcome::<i32, &str>::Success(1), Outcome::Failure("x"), Outcome::Pending] {
            let returned = outcome.tap(|_| count += 1);
            assert_eq!(returned, outcome);
        }
        assert_eq!(count, 3);
    }

    #[rstest]
    fn outcome_converts_into_maybe() {
        assert_eq!(Maybe::from(Outcome::<i32, ()>::Success(1)), Maybe::Just(1));
        assert_eq!(Maybe::from(Outcome::<i32, ()>::Failure(())), Maybe::Nothing);
        assert_eq!(Maybe::from(Outcome::<i32, ()>::Pending), Maybe::Nothing);
    }

    #[rstest]
    fn display_uses_tagged_form() {
        assert_eq!(Outcome::<i32, String>::Success(1).to_string(), "result.Success 1");
        assert_eq!(Outcome::<i32, String>::Failure("boo".into()).to_string(), "result.Failure boo");
        assert_eq!(Outcome::<i32, String>::Pending.to_string(), "result.Pending");
    }
}
