//! Optional values with short-circuiting semantics.
//!
//! [`Maybe<T>`] is either `Just(value)` or `Nothing`. Unlike [`Option`], the
//! constructor [`Maybe::new`] *normalizes* its argument: an existing `Maybe`
//! is returned unchanged and null-like values (see
//! [`Presence`](crate::presence::Presence)) become `Nothing`. [`Maybe::map`]
//! re-normalizes the mapped value, so a step returning `None` or a JSON
//! `null` turns the chain into `Nothing`.
//!
//! The module also provides:
//!
//! - [`given`] / [`none`]: apply a function only when every argument is
//!   `Just` (respectively `Nothing`)
//! - [`dig`]: safe property/index walking through `serde_json::Value`
//! - [`Conditions`]: ordered predicate/effect branches
//!
//! # Examples
//!
//! ```rust
//! use seqflow::maybe::Maybe;
//!
//! let name = Maybe::new(Some("ada"))
//!     .map(|name| name.to_uppercase())
//!     .unwrap_or(|| String::from("anonymous"));
//! assert_eq!(name, "ADA");
//!
//! let missing = Maybe::new(Some(4)).map(|n| if n > 10 { Some(n) } else { None });
//! assert_eq!(missing, Maybe::Nothing);
//! ```

mod conditions;
mod dig;
mod given;

pub use conditions::Conditions;
pub use dig::{Dig, Key, dig};
pub use given::{AllJust, given, none};

use std::fmt;

use crate::error::CaseError;
use crate::presence::IntoMaybe;

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// # Examples
///
/// ```rust
/// use seqflow::maybe::Maybe;
///
/// let just = Maybe::Just(8);
/// assert_eq!(just.map(|n| n * 2), Maybe::Just(16));
///
/// let nothing: Maybe<i32> = Maybe::Nothing;
/// assert_eq!(nothing.map(|n| n * 2), Maybe::Nothing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// No value.
    Nothing,
}

impl<T> Maybe<T> {
    /// Normalizes `value` into a `Maybe`.
    ///
    /// Returns `value` unchanged if it already is a `Maybe`, `Nothing` if it
    /// is absent, and `Just(value)` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::maybe::Maybe;
    /// use serde_json::json;
    ///
    /// assert_eq!(Maybe::new(0), Maybe::Just(0));
    /// assert_eq!(Maybe::new(None::<i32>), Maybe::Nothing);
    /// assert_eq!(Maybe::new(json!(null)), Maybe::Nothing);
    /// assert_eq!(Maybe::new(Maybe::Just("hi")), Maybe::Just("hi"));
    /// ```
    #[inline]
    pub fn new<R>(value: R) -> Self
    where
        R: IntoMaybe<Value = T>,
    {
        value.into_maybe()
    }

    /// Returns `true` if this is `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Truthiness of the optional value itself: `Just` is `true`.
    #[inline]
    pub const fn to_bool(&self) -> bool {
        self.is_just()
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into the standard library [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Applies `function` to a `Just` value and re-normalizes the result.
    ///
    /// If `function` returns an absent value (`None`, `Nothing`, JSON
    /// `null`, `()`), the result is `Nothing`. `Nothing` is returned
    /// unchanged without calling `function`.
    ///
    /// The result type must implement [`IntoMaybe`]. Primitives, strings,
    /// collections, tuples and JSON values do; for other types either add an
    /// `IntoMaybe` impl or use [`fmap`](Self::fmap).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(3).map(|n| n + 1), Maybe::Just(4));
    /// assert_eq!(Maybe::Just(3).map(|_| None::<i32>), Maybe::Nothing);
    /// assert_eq!(Maybe::Just(3).map(|n| (n, n * 2)), Maybe::Just((3, 6)));
    /// ```
    #[inline]
    pub fn map<R, F>(self, function: F) -> Maybe<R::Value>
    where
        F: FnOnce(T) -> R,
        R: IntoMaybe,
    {
        match self {
            Self::Just(value) => function(value).into_maybe(),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies `function` to a `Just` value without re-normalizing.
    ///
    /// This is the plain functor map; it works for any result type.
    #[inline]
    pub fn fmap<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Chains a computation that itself returns a `Maybe`.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Pattern-matches with both cases supplied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::maybe::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.case_map(|n| format!("got {n}"), || "none".to_string());
    /// assert_eq!(describe(Maybe::Just(1)), "got 1");
    /// assert_eq!(describe(Maybe::Nothing), "none");
    /// ```
    #[inline]
    pub fn case_map<U, J, N>(self, just: J, nothing: N) -> U
    where
        J: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Just(value) => just(value),
            Self::Nothing => nothing(),
        }
    }

    /// Extracts the value using the default `just` case.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::UnhandledNothing`] when called on `Nothing`.
    #[inline]
    pub fn unwrap(self) -> Result<T, CaseError> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(CaseError::UnhandledNothing),
        }
    }

    /// Extracts the value, computing a fallback for `Nothing`.
    #[inline]
    pub fn unwrap_or<F>(self, nothing: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => nothing(),
        }
    }

    /// Runs a side effect on a `Just` value and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Just(value) = &self {
            function(value);
        }
        self
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> From<Maybe<T>> for Vec<Maybe<T>> {
    /// Wraps a single optional value as a one-element batch, the shape
    /// [`Something`](crate::monad::Something) steps return.
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        vec![maybe]
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "maybe.Just {value}"),
            Self::Nothing => write!(formatter, "maybe.Nothing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn new_wraps_present_values() {
        assert_eq!(Maybe::new("hi"), Maybe::Just("hi"));
        assert_eq!(Maybe::new(Vec::<i32>::new()), Maybe::Just(vec![]));
        assert_eq!(Maybe::new(0), Maybe::Just(0));
    }

    #[rstest]
    fn new_turns_absent_values_into_nothing() {
        assert_eq!(Maybe::new(None::<&str>), Maybe::Nothing);
        assert_eq!(Maybe::new(json!(null)), Maybe::Nothing);
        assert_eq!(Maybe::new(()), Maybe::Nothing);
    }

    #[rstest]
    fn map_identity_preserves_value() {
        assert_eq!(Maybe::Just("hi").map(|x| x), Maybe::Just("hi"));
        assert_eq!(Maybe::<&str>::Nothing.map(|x| x), Maybe::Nothing);
    }

    #[rstest]
    fn map_does_not_call_function_on_nothing() {
        let mut called = false;
        let result = Maybe::<i32>::Nothing.map(|n| {
            called = true;
            n
        });
        assert_eq!(result, Maybe::Nothing);
        assert!(!called);
    }

    #[rstest]
    fn map_flattens_returned_maybe() {
        let result = Maybe::Just(2).map(|n| if n % 2 == 0 { Maybe::Just(n) } else { Maybe::Nothing });
        assert_eq!(result, Maybe::Just(2));
    }

    #[rstest]
    fn unwrap_without_nothing_handler_errors() {
        assert_eq!(Maybe::Just(1).unwrap(), Ok(1));
        assert_eq!(Maybe::<i32>::Nothing.unwrap(), Err(CaseError::UnhandledNothing));
    }

    #[rstest]
    fn unwrap_or_uses_fallback_only_for_nothing() {
        assert_eq!(Maybe::Just(1).unwrap_or(|| -1), 1);
        assert_eq!(Maybe::Nothing.unwrap_or(|| -1), -1);
    }

    #[rstest]
    fn tap_only_sees_just_values() {
        let mut seen = Vec::new();
        let _ = Maybe::Just(5).tap(|n| seen.push(*n));
        let _ = Maybe::<i32>::Nothing.tap(|n| seen.push(*n));
        assert_eq!(seen, vec![5]);
    }

    #[rstest]
    fn display_matches_tagged_form() {
        assert_eq!(Maybe::Just(1).to_string(), "maybe.Just 1");
        assert_eq!(Maybe::<i32>::Nothing.to_string(), "maybe.Nothing");
    }

    #[rstest]
    fn option_round_trip() {
        let option: Option<i32> = Maybe::from(Some(3)).into();
        assert_eq!(option, Some(3));
        assert_eq!(Maybe::from(None::<i32>), Maybe::Nothing);
    }

    #[rstest]
    fn default_is_nothing() {
        assert_eq!(Maybe::<i32>::default(), Maybe::Nothing);
    }
}
