//! `Outcome` as a monad value.

use std::marker::PhantomData;

use super::{Distribute, Foldable, Monad};
use crate::error::Rejected;
use crate::outcome::Outcome;

/// The success-propagating monad over [`Outcome<T, E>`].
///
/// `bind` applies the function to a `Success` value; `Failure` and
/// `Pending` pass through without calling it. The failure type is fixed by
/// the monad value and defaults to [`Rejected`].
///
/// # Examples
///
/// ```rust
/// use seqflow::monad::{Monad, OutcomeMonad};
/// use seqflow::outcome::Outcome;
///
/// let monad = OutcomeMonad::<String>::new();
/// let checked = monad.bind(monad.unit(4), |n| {
///     if n > 3 { Outcome::Success(n) } else { Outcome::Failure("too small".to_string()) }
/// });
/// assert_eq!(checked, Outcome::Success(4));
/// ```
pub struct OutcomeMonad<E = Rejected> {
    error: PhantomData<fn() -> E>,
}

impl<E> OutcomeMonad<E> {
    /// Creates the monad value.
    #[inline]
    pub const fn new() -> Self {
        Self { error: PhantomData }
    }
}

impl<E> Clone for OutcomeMonad<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for OutcomeMonad<E> {}

impl<E> Default for OutcomeMonad<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for OutcomeMonad<E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("OutcomeMonad")
    }
}

impl<E> Monad for OutcomeMonad<E> {
    type Of<T> = Outcome<T, E>;

    #[inline]
    fn unit<T>(&self, value: T) -> Outcome<T, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn bind<A, B, F>(&self, container: Outcome<A, E>, function: F) -> Outcome<B, E>
    where
        F: FnMut(A) -> Outcome<B, E>,
    {
        container.and_then(function)
    }
}

impl<E> Foldable for OutcomeMonad<E> {
    #[inline]
    fn fold_left<T, Acc, F>(&self, container: Outcome<T, E>, initial: Acc, mut function: F) -> Acc
    where
        F: FnMut(Acc, T) -> Acc,
    {
        match container {
            Outcome::Success(value) => function(initial, value),
            Outcome::Failure(_) | Outcome::Pending => initial,
        }
    }
}

impl<E, O: Monad> Distribute<O> for OutcomeMonad<E> {
    fn distribute<A, B, F>(
        &self,
        outer: &O,
        container: Outcome<A, E>,
        mut function: F,
    ) -> O::Of<Outcome<B, E>>
    where
        F: FnMut(A) -> O::Of<Outcome<B, E>>,
    {
        match container {
            Outcome::Success(value) => function(value),
            Outcome::Failure(error) => outer.unit(Outcome::Failure(error)),
            Outcome::Pending => outer.unit(Outcome::Pending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Monadic = OutcomeMonad<&'static str>;

    #[rstest]
    fn bind_passes_failure_and_pending_through() {
        let monad = Monadic::new();
        let failed: Outcome<i32, &str> = monad.bind(Outcome::Failure("x"), |n: i32| Outcome::Success(n + 1));
        let pending: Outcome<i32, &str> = monad.bind(Outcome::Pending, |n: i32| Outcome::Success(n + 1));
        assert_eq!(failed, Outcome::Failure("x"));
        assert_eq!(pending, Outcome::Pending);
    }

    #[rstest]
    fn bind_chains_success_values() {
        let monad = Monadic::new();
        let result = monad.bind(monad.unit(1), |n| Outcome::Success(format!("{n}!")));
        let result = monad.bind(result, |text| Outcome::Success(format!("{text}@")));
        assert_eq!(result, Outcome::Success("1!@".to_string()));
    }

    #[rstest]
    fn fold_left_ignores_non_success() {
        let monad = Monadic::new();
        assert_eq!(monad.fold_left(Outcome::Pending, 0, |acc, n: i32| acc + n), 0);
        assert_eq!(monad.fold_left(Outcome::Success(2), 1, |acc, n: i32| acc + n), 3);
    }
}
