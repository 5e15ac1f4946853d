//! Applying a function to several optional values at once.

use super::Maybe;
use crate::presence::IntoMaybe;

/// A group of optional values that can be checked together.
///
/// Implemented for tuples of `Maybe` (arity 1 through 6) and for
/// `Vec<Maybe<T>>`. The unwrapped values keep the order of the group.
pub trait AllJust {
    /// The unwrapped values, in the same order as the group.
    type Values;

    /// Returns every value if the whole group is `Just`.
    fn all_just(self) -> Option<Self::Values>;

    /// Returns `true` if the whole group is `Nothing`.
    fn all_nothing(&self) -> bool;
}

macro_rules! impl_all_just {
    ($($ty:ident $var:ident),+) => {
        impl<$($ty),+> AllJust for ($(Maybe<$ty>,)+) {
            type Values = ($($ty,)+);

            #[inline]
            fn all_just(self) -> Option<Self::Values> {
                let ($($var,)+) = self;
                Some(($($var.into_option()?,)+))
            }

            #[inline]
            fn all_nothing(&self) -> bool {
                let ($($var,)+) = self;
                true $(&& $var.is_nothing())+
            }
        }
    };
}

impl_all_just!(A a);
impl_all_just!(A a, B b);
impl_all_just!(A a, B b, C c);
impl_all_just!(A a, B b, C c, D d);
impl_all_just!(A a, B b, C c, D d, E e);
impl_all_just!(A a, B b, C c, D d, E e, F f);

impl<T> AllJust for Vec<Maybe<T>> {
    type Values = Vec<T>;

    fn all_just(self) -> Option<Vec<T>> {
        self.into_iter().map(Maybe::into_option).collect()
    }

    fn all_nothing(&self) -> bool {
        self.iter().all(Maybe::is_nothing)
    }
}

/// Applies `function` to the unwrapped values only if all of them are `Just`.
///
/// The values are passed as a tuple in argument order. The result is
/// normalized through [`Maybe::new`].
///
/// # Examples
///
/// ```rust
/// use seqflow::maybe::{Maybe, given};
///
/// let greeting = given((Maybe::Just("hi"), Maybe::Just("there")), |(a, b)| format!("{a} {b}"));
/// assert_eq!(greeting, Maybe::Just("hi there".to_string()));
///
/// let missing = given((Maybe::Just(1), Maybe::<i32>::Nothing), |(a, b)| a + b);
/// assert_eq!(missing, Maybe::Nothing);
/// ```
pub fn given<M, R, F>(maybes: M, function: F) -> Maybe<R::Value>
where
    M: AllJust,
    F: FnOnce(M::Values) -> R,
    R: IntoMaybe,
{
    maybes
        .all_just()
        .map_or(Maybe::Nothing, |values| function(values).into_maybe())
}

/// Applies `function` only if every argument is `Nothing`.
///
/// # Examples
///
/// ```rust
/// use seqflow::maybe::{Maybe, none};
///
/// let fallback = none((Maybe::<i32>::Nothing, Maybe::<&str>::Nothing), || "default");
/// assert_eq!(fallback, Maybe::Just("default"));
///
/// let skipped = none((Maybe::Just(1), Maybe::<&str>::Nothing), || "default");
/// assert_eq!(skipped, Maybe::Nothing);
/// ```
pub fn none<M, R, F>(maybes: M, function: F) -> Maybe<R::Value>
where
    M: AllJust,
    F: FnOnce() -> R,
    R: IntoMaybe,
{
    if maybes.all_nothing() {
        function().into_maybe()
    } else {
        Maybe::Nothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn given_preserves_argument_order() {
        let result = given(
            (Maybe::Just(1), Maybe::Just("two"), Maybe::Just(3.0)),
            |(first, second, third)| format!("{first}-{second}-{third}"),
        );
        assert_eq!(result, Maybe::Just("1-two-3".to_string()));
    }

    #[rstest]
    fn given_skips_function_when_any_is_nothing() {
        let mut called = false;
        let result = given((Maybe::Just(1), Maybe::<i32>::Nothing), |(a, b)| {
            called = true;
            a + b
        });
        assert_eq!(result, Maybe::Nothing);
        assert!(!called);
    }

    #[rstest]
    fn given_normalizes_result() {
        let result = given((Maybe::Just(1),), |_| None::<i32>);
        assert_eq!(result, Maybe::Nothing);
    }

    #[rstest]
    fn given_over_vector() {
        let values = vec![Maybe::Just(1), Maybe::Just(2), Maybe::Just(3)];
        assert_eq!(given(values, |all| all.iter().sum::<i32>()), Maybe::Just(6));
    }

    #[rstest]
    fn none_requires_all_nothing() {
        assert_eq!(none((Maybe::<i32>::Nothing,), || 7), Maybe::Just(7));
        assert_eq!(none((Maybe::Just(0), Maybe::<i32>::Nothing), || 7), Maybe::Nothing);
    }

    #[rstest]
    fn none_of_empty_vector_applies() {
        let empty: Vec<Maybe<i32>> = Vec::new();
        assert_eq!(none(empty, || "empty"), Maybe::Just("empty"));
    }
}
