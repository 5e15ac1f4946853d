//! Applying a function to several outcomes at once.

use std::convert::Infallible;

use super::{IntoOutcome, Outcome};

/// A group of outcomes sharing one failure type.
///
/// Implemented for tuples of `Outcome` (arity 1 through 6) and for
/// `Vec<Outcome<T, E>>`.
pub trait AllSuccess {
    /// The success values, in the same order as the group.
    type Values;
    /// The shared failure type.
    type Error;

    /// Returns every success value, or the first outcome in order that is
    /// not a `Success`.
    ///
    /// # Errors
    ///
    /// Returns the first `Failure` or `Pending` of the group.
    fn all_success(self) -> Result<Self::Values, Outcome<Infallible, Self::Error>>;
}

macro_rules! impl_all_success {
    ($($ty:ident $var:ident),+) => {
        impl<$($ty,)+ Err> AllSuccess for ($(Outcome<$ty, Err>,)+) {
            type Values = ($($ty,)+);
            type Error = Err;

            #[inline]
            fn all_success(self) -> Result<Self::Values, Outcome<Infallible, Err>> {
                let ($($var,)+) = self;
                Ok(($($var.into_success()?,)+))
            }
        }
    };
}

impl_all_success!(A a);
impl_all_success!(A a, B b);
impl_all_success!(A a, B b, C c);
impl_all_success!(A a, B b, C c, D d);
impl_all_success!(A a, B b, C c, D d, G g);
impl_all_success!(A a, B b, C c, D d, G g, H h);

impl<T, E> AllSuccess for Vec<Outcome<T, E>> {
    type Values = Vec<T>;
    type Error = E;

    fn all_success(self) -> Result<Vec<T>, Outcome<Infallible, E>> {
        self.into_iter().map(Outcome::into_success).collect()
    }
}

/// Applies `function` to the success values if every outcome succeeded.
///
/// Otherwise returns the first `Failure` or `Pending` in argument order. The
/// function result is classified through [`Outcome::classify`].
///
/// # Examples
///
/// ```rust
/// use seqflow::outcome::{Outcome, given};
///
/// let both = given((Outcome::<i32, String>::Success(2), Outcome::Success(3)), |(a, b)| a * b);
/// assert_eq!(both, Outcome::Success(6));
///
/// let first_miss = given(
///     (
///         Outcome::<i32, String>::Success(1),
///         Outcome::Pending,
///         Outcome::Failure("late".to_string()),
///     ),
///     |(a, b, c): (i32, i32, i32)| a + b + c,
/// );
/// assert_eq!(first_miss, Outcome::Pending);
/// ```
pub fn given<G, R, F>(outcomes: G, function: F) -> Outcome<R::Value, G::Error>
where
    G: AllSuccess,
    F: FnOnce(G::Values) -> R,
    R: IntoOutcome<G::Error>,
{
    match outcomes.all_success() {
        Ok(values) => function(values).into_outcome(),
        Err(halted) => halted.widen(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Rejected;
    use rstest::rstest;

    #[rstest]
    fn given_applies_when_all_succeed() {
        let result = given(
            (Outcome::<_, Rejected>::Success("a"), Outcome::Success("b")),
            |(first, second)| format!("{first}{second}"),
        );
        assert_eq!(result, Outcome::Success("ab".to_string()));
    }

    #[rstest]
    fn given_returns_first_failure() {
        let result = given(
            (
                Outcome::<i32, &str>::Failure("first"),
                Outcome::<i32, &str>::Failure("second"),
            ),
            |(a, b)| Outcome::<i32, &str>::Success(a + b),
        );
        assert_eq!(result, Outcome::Failure("first"));
    }

    #[rstest]
    fn given_skips_function_on_pending() {
        let mut called = false;
        let result = given(
            (Outcome::<i32, Rejected>::Success(1), Outcome::<i32, Rejected>::Pending),
            |(a, b)| {
                called = true;
                a + b
            },
        );
        assert_eq!(result, Outcome::Pending);
        assert!(!called);
    }

    #[rstest]
    fn given_classifies_result() {
        let result = given((Outcome::<i32, Rejected>::Success(1),), |_| "");
        assert!(result.is_failure());
    }

    #[rstest]
    fn given_over_vector() {
        let all = vec![Outcome::<i32, ()>::Success(1), Outcome::Success(2)];
        assert_eq!(given(all, |values| Outcome::<usize, ()>::Success(values.len())), Outcome::Success(2));

        let mixed = vec![Outcome::<i32, ()>::Success(1), Outcome::Failure(())];
        assert_eq!(given(mixed, |values| Outcome::<usize, ()>::Success(values.len())), Outcome::Failure(()));
    }
}
