//! `Maybe` as a monad value.

use super::{Distribute, Foldable, Monad};
use crate::maybe::Maybe;

/// The short-circuiting optional monad over [`Maybe`].
///
/// `unit` wraps in `Just`; `bind` applies the function to a `Just` value
/// and returns `Nothing` untouched without calling it.
///
/// `unit` does not normalize. Lift null-like inputs with
/// [`Maybe::new`] before handing them to the monad.
///
/// # Examples
///
/// ```rust
/// use seqflow::maybe::Maybe;
/// use seqflow::monad::{MaybeMonad, Monad};
///
/// let parsed = MaybeMonad.bind(Maybe::Just("12"), |text| Maybe::from(text.parse::<i32>().ok()));
/// assert_eq!(parsed, Maybe::Just(12));
///
/// let skipped = MaybeMonad.bind(Maybe::<&str>::Nothing, |text| Maybe::Just(text.len()));
/// assert_eq!(skipped, Maybe::Nothing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaybeMonad;

impl Monad for MaybeMonad {
    type Of<T> = Maybe<T>;

    #[inline]
    fn unit<T>(&self, value: T) -> Maybe<T> {
        Maybe::Just(value)
    }

    #[inline]
    fn bind<A, B, F>(&self, container: Maybe<A>, function: F) -> Maybe<B>
    where
        F: FnMut(A) -> Maybe<B>,
    {
        container.and_then(function)
    }
}

impl Foldable for MaybeMonad {
    #[inline]
    fn fold_left<T, Acc, F>(&self, container: Maybe<T>, initial: Acc, function: F) -> Acc
    where
        F: FnMut(Acc, T) -> Acc,
    {
        container.into_iter().fold(initial, function)
    }
}

impl<O: Monad> Distribute<O> for MaybeMonad {
    fn distribute<A, B, F>(&self, outer: &O, container: Maybe<A>, mut function: F) -> O::Of<Maybe<B>>
    where
        F: FnMut(A) -> O::Of<Maybe<B>>,
    {
        match container {
            Maybe::Just(value) => function(value),
            Maybe::Nothing => outer.unit(Maybe::Nothing),
        }
    }
}
