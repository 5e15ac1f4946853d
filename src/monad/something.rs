//! Sequences of optional values that skip the missing ones.

use super::{Foldable, Monad};
use crate::maybe::Maybe;

/// The sequence-of-optionals monad.
///
/// `Of<T>` is `Vec<Maybe<T>>` and `unit` builds `vec![Just(value)]`. It
/// behaves like `compose_m(FlatSequence, MaybeMonad)` in the scalar case,
/// but in the many case it filters:
///
/// - `Nothing` elements of the input are dropped before the step runs,
/// - `Nothing` elements of every step result are dropped from the output.
///
/// A single `Nothing` input short-circuits to `vec![Nothing]`, and the
/// scalar case returns the step's result unchanged, `Nothing`s included.
///
/// The monad laws hold over containers without `Nothing` elements.
///
/// # Examples
///
/// ```rust
/// use seqflow::maybe::Maybe;
/// use seqflow::monad::{Monad, Something};
///
/// let evens = Something.bind(
///     vec![Maybe::Just(1), Maybe::Just(2), Maybe::Nothing, Maybe::Just(4)],
///     |n| vec![if n % 2 == 0 { Maybe::Just(n.to_string()) } else { Maybe::Nothing }],
/// );
/// assert_eq!(evens, vec![Maybe::Just("2".to_string()), Maybe::Just("4".to_string())]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Something;

impl Monad for Something {
    type Of<T> = Vec<Maybe<T>>;

    #[inline]
    fn unit<T>(&self, value: T) -> Vec<Maybe<T>> {
        vec![Maybe::Just(value)]
    }

    fn bind<A, B, F>(&self, container: Vec<Maybe<A>>, mut function: F) -> Vec<Maybe<B>>
    where
        F: FnMut(A) -> Vec<Maybe<B>>,
    {
        let mut elements = container.into_iter();
        match (elements.next(), elements.len()) {
            (Some(Maybe::Just(only)), 0) => function(only),
            (Some(Maybe::Nothing), 0) => vec![Maybe::Nothing],
            (first, _) => first
                .into_iter()
                .chain(elements)
                .filter_map(Maybe::into_option)
                .flat_map(&mut function)
                .filter(Maybe::is_just)
                .collect(),
        }
    }
}

impl Foldable for Something {
    fn fold_left<T, Acc, F>(&self, container: Vec<Maybe<T>>, initial: Acc, function: F) -> Acc
    where
        F: FnMut(Acc, T) -> Acc,
    {
        container
            .into_iter()
            .filter_map(Maybe::into_option)
            .fold(initial, function)
    }
}
