//! Composition of two monad values.

use super::{Distribute, Foldable, Monad};

/// The composite of an outer monad `O` and an inner monad `I`.
///
/// Containers are `O::Of<I::Of<T>>`. `unit` lifts through the inner monad
/// first, then the outer one; `bind` binds through the outer monad and lets
/// the inner monad [`distribute`](Distribute::distribute) the step over its
/// own container.
///
/// The order of composition is observable. With
/// `compose_m(FlatSequence, MaybeMonad)` each element of the sequence keeps
/// its own `Nothing`; with `compose_m(MaybeMonad, FlatSequence)` a single
/// `Nothing` step result collapses the whole sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Compose<O, I> {
    outer: O,
    inner: I,
}

impl<O, I> Compose<O, I> {
    /// Returns the outer monad.
    pub const fn outer(&self) -> &O {
        &self.outer
    }

    /// Returns the inner monad.
    pub const fn inner(&self) -> &I {
        &self.inner
    }
}

/// Composes `outer` around `inner`.
///
/// # Examples
///
/// ```rust
/// use seqflow::maybe::Maybe;
/// use seqflow::monad::{FlatSequence, MaybeMonad, Monad, compose_m};
///
/// let monad = compose_m(FlatSequence, MaybeMonad);
/// let result = monad.bind(vec![Maybe::Just(1), Maybe::Nothing, Maybe::Just(3)], |n| {
///     vec![Maybe::Just(n * 2)]
/// });
/// assert_eq!(result, vec![Maybe::Just(2), Maybe::Nothing, Maybe::Just(6)]);
/// ```
pub const fn compose_m<O, I>(outer: O, inner: I) -> Compose<O, I>
where
    O: Monad,
    I: Distribute<O>,
{
    Compose { outer, inner }
}

impl<O, I> Monad for Compose<O, I>
where
    O: Monad,
    I: Distribute<O>,
{
    type Of<T> = O::Of<I::Of<T>>;

    #[inline]
    fn unit<T>(&self, value: T) -> Self::Of<T> {
        self.outer.unit(self.inner.unit(value))
    }

    fn bind<A, B, F>(&self, container: Self::Of<A>, mut function: F) -> Self::Of<B>
    where
        F: FnMut(A) -> Self::Of<B>,
    {
        let Self { outer, inner } = self;
        outer.bind::<I::Of<A>, I::Of<B>, _>(container, |values| {
            inner.distribute::<A, B, _>(outer, values, &mut function)
        })
    }
}

impl<O, I> Foldable for Compose<O, I>
where
    O: Foldable,
    I: Distribute<O> + Foldable,
{
    fn fold_left<T, Acc, F>(&self, container: Self::Of<T>, initial: Acc, mut function: F) -> Acc
    where
        F: FnMut(Acc, T) -> Acc,
    {
        let Self { outer, inner } = self;
        outer.fold_left::<I::Of<T>, Acc, _>(container, initial, |acc, values| {
            inner.fold_left::<T, Acc, _>(values, acc, &mut function)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::Maybe;
    use crate::monad::{FlatSequence, Id, MaybeMonad};
    use rstest::rstest;

    #[rstest]
    fn unit_lifts_inner_then_outer() {
        let monad = compose_m(FlatSequence, MaybeMonad);
        assert_eq!(monad.unit(1), vec![Maybe::Just(1)]);
    }

    #[rstest]
    fn sequence_of_maybe_keeps_per_element_nothing() {
        let monad = compose_m(FlatSequence, MaybeMonad);
        let result = monad.bind(vec![Maybe::Just(1), Maybe::Just(2)], |n| {
            vec![if n == 1 { Maybe::Nothing } else { Maybe::Just(n) }]
        });
        assert_eq!(result, vec![Maybe::Nothing, Maybe::Just(2)]);
    }

    #[rstest]
    fn maybe_of_sequence_collapses_on_nothing() {
        let monad = compose_m(MaybeMonad, FlatSequence);
        let result = monad.bind(Maybe::Just(vec![1, 2]), |n| {
            if n == 1 { Maybe::Nothing } else { Maybe::Just(vec![n]) }
        });
        assert_eq!(result, Maybe::Nothing);
    }

    #[rstest]
    fn identity_inner_behaves_like_outer() {
        let monad = compose_m(MaybeMonad, Id);
        assert_eq!(monad.bind(Maybe::Just(2), |n| Maybe::Just(n + 1)), Maybe::Just(3));
    }

    #[rstest]
    fn fold_left_drains_both_layers() {
        let monad = compose_m(FlatSequence, MaybeMonad);
        let seen = monad.fold_left(
            vec![Maybe::Just(1), Maybe::Nothing, Maybe::Just(3)],
            Vec::new(),
            |mut acc, n| {
                acc.push(n);
                acc
            },
        );
        assert_eq!(seen, vec![1, 3]);
    }
}
