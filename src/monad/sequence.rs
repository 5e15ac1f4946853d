//! Sequences as monads: fan-out with optional batch-level operations.

use super::{Distribute, Foldable, Monad, MaybeMonad, OutcomeMonad};
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// A batch-level operation run by [`Sequence::bind`].
///
/// In the many-element case `bind` maps the step over every element, which
/// yields one batch per element. The operation receives that list of batches
/// before it is flattened.
pub trait SequenceOp {
    /// Transforms the list of batches.
    fn apply<T>(&self, batches: Vec<Vec<T>>) -> Vec<Vec<T>>;
}

/// Leaves the batches untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoOp;

impl SequenceOp for NoOp {
    #[inline]
    fn apply<T>(&self, batches: Vec<Vec<T>>) -> Vec<Vec<T>> {
        batches
    }
}

/// Keeps at most the first `n` batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Limit(pub usize);

impl SequenceOp for Limit {
    fn apply<T>(&self, mut batches: Vec<Vec<T>>) -> Vec<Vec<T>> {
        batches.truncate(self.0);
        batches
    }
}

/// Drops the first `n` batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Skip(pub usize);

impl SequenceOp for Skip {
    fn apply<T>(&self, batches: Vec<Vec<T>>) -> Vec<Vec<T>> {
        batches.into_iter().skip(self.0).collect()
    }
}

/// Reverses the order of the batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reverse;

impl SequenceOp for Reverse {
    fn apply<T>(&self, mut batches: Vec<Vec<T>>) -> Vec<Vec<T>> {
        batches.reverse();
        batches
    }
}

/// Runs the first operation, then the second.
impl<First: SequenceOp, Second: SequenceOp> SequenceOp for (First, Second) {
    fn apply<T>(&self, batches: Vec<Vec<T>>) -> Vec<Vec<T>> {
        self.1.apply(self.0.apply(batches))
    }
}

/// The list monad with a configurable batch operation.
///
/// `Of<T>` is `Vec<T>` and `unit` builds a one-element vector. `bind`
/// distinguishes two cases:
///
/// - **scalar**: a one-element container is treated as the element itself;
///   the step's result is returned unchanged and the operation is skipped.
/// - **many**: the step is mapped over every element, the operation runs on
///   the list of per-element batches, and the batches are flattened one level.
///
/// An empty container stays empty. The monad laws hold for
/// [`FlatSequence`]; operations that discard or reorder batches trade the
/// right identity law for their effect.
///
/// # Examples
///
/// ```rust
/// use seqflow::monad::{Limit, Monad, Sequence};
///
/// let first_two = Sequence::new(Limit(2));
/// let result = first_two.bind(vec![1, 2, 3], |n| vec![n, -n]);
/// assert_eq!(result, vec![1, -1, 2, -2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sequence<Op = NoOp> {
    operation: Op,
}

/// The plain list monad: `bind` is `flat_map` with the scalar case.
pub type FlatSequence = Sequence<NoOp>;

/// The [`FlatSequence`] monad value.
#[allow(non_upper_case_globals)]
pub const FlatSequence: FlatSequence = Sequence { operation: NoOp };

impl<Op: SequenceOp> Sequence<Op> {
    /// Creates a sequence monad running `operation` on every many-case bind.
    pub const fn new(operation: Op) -> Self {
        Self { operation }
    }

    /// Returns the batch operation.
    pub const fn operation(&self) -> &Op {
        &self.operation
    }

    fn batches<A, B, F>(&self, container: Vec<A>, function: F) -> Vec<Vec<B>>
    where
        F: FnMut(A) -> Vec<B>,
    {
        self.operation.apply(container.into_iter().map(function).collect())
    }
}

impl<Op: SequenceOp> Monad for Sequence<Op> {
    type Of<T> = Vec<T>;

    #[inline]
    fn unit<T>(&self, value: T) -> Vec<T> {
        vec![value]
    }

    fn bind<A, B, F>(&self, container: Vec<A>, mut function: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        let mut elements = container.into_iter();
        match (elements.next(), elements.len()) {
            (Some(only), 0) => function(only),
            (first, _) => self
                .batches(first.into_iter().chain(elements).collect(), function)
                .into_iter()
                .flatten()
                .collect(),
        }
    }
}

impl<Op: SequenceOp> Foldable for Sequence<Op> {
    #[inline]
    fn fold_left<T, Acc, F>(&self, container: Vec<T>, initial: Acc, function: F) -> Acc
    where
        F: FnMut(Acc, T) -> Acc,
    {
        container.into_iter().fold(initial, function)
    }
}

/// Traversal under `Maybe`: any `Nothing` collapses the whole result.
impl<Op: SequenceOp> Distribute<MaybeMonad> for Sequence<Op> {
    fn distribute<A, B, F>(&self, _outer: &MaybeMonad, container: Vec<A>, mut function: F) -> Maybe<Vec<B>>
    where
        F: FnMut(A) -> Maybe<Vec<B>>,
    {
        let mut elements = container.into_iter();
        match (elements.next(), elements.len()) {
            (Some(only), 0) => function(only),
            (first, _) => first
                .into_iter()
                .chain(elements)
                .map(|element| function(element).into_option())
                .collect::<Option<Vec<_>>>()
                .map_or(Maybe::Nothing, |batches| {
                    Maybe::Just(self.operation.apply(batches).into_iter().flatten().collect())
                }),
        }
    }
}

/// Traversal under `Outcome`: the first non-success is returned.
impl<Op: SequenceOp, E> Distribute<OutcomeMonad<E>> for Sequence<Op> {
    fn distribute<A, B, F>(
        &self,
        _outer: &OutcomeMonad<E>,
        container: Vec<A>,
        mut function: F,
    ) -> Outcome<Vec<B>, E>
    where
        F: FnMut(A) -> Outcome<Vec<B>, E>,
    {
        let mut elements = container.into_iter();
        match (elements.next(), elements.len()) {
            (Some(only), 0) => function(only),
            (first, _) => {
                let mut batches = Vec::new();
                for element in first.into_iter().chain(elements) {
                    match function(element) {
                        Outcome::Success(batch) => batches.push(batch),
                        Outcome::Failure(error) => return Outcome::Failure(error),
                        Outcome::Pending => return Outcome::Pending,
                    }
                }
                Outcome::Success(self.operation.apply(batches).into_iter().flatten().collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn scalar_case_returns_step_result_unchanged() {
        let result = FlatSequence.bind(vec![1], |n| vec![vec![n], vec![n, n]]);
        assert_eq!(result, vec![vec![1], vec![1, 1]]);
    }

    #[rstest]
    fn many_case_flattens_one_level() {
        let result = FlatSequence.bind(vec![1, 2], |n| vec![n, n * 10]);
        assert_eq!(result, vec![1, 10, 2, 20]);
    }

    #[rstest]
    fn empty_container_stays_empty() {
        let mut calls = 0;
        let result: Vec<i32> = FlatSequence.bind(Vec::<i32>::new(), |n| {
            calls += 1;
            vec![n]
        });
        assert!(result.is_empty());
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn operations_skip_the_scalar_case() {
        let limited = Sequence::new(Limit(0));
        assert_eq!(limited.bind(vec![5], |n| vec![n, n]), vec![5, 5]);
        assert!(limited.bind(vec![5, 6], |n| vec![n, n]).is_empty());
    }

    #[rstest]
    fn paired_operations_run_in_order() {
        let monad = Sequence::new((Reverse, Limit(1)));
        assert_eq!(monad.bind(vec![1, 2, 3], |n| vec![n]), vec![3]);

        let monad = Sequence::new((Skip(1), Reverse));
        assert_eq!(monad.bind(vec![1, 2, 3], |n| vec![n]), vec![3, 2]);
    }

    #[rstest]
    fn distribute_under_maybe_collapses_on_nothing() {
        let all = FlatSequence.distribute(&MaybeMonad, vec![1, 2], |n| Maybe::Just(vec![n]));
        assert_eq!(all, Maybe::Just(vec![1, 2]));

        let one_missing = FlatSequence.distribute(&MaybeMonad, vec![1, 2], |n| {
            if n == 2 { Maybe::Nothing } else { Maybe::Just(vec![n]) }
        });
        assert_eq!(one_missing, Maybe::Nothing);
    }

    #[rstest]
    fn distribute_under_outcome_returns_first_non_success() {
        let monad = OutcomeMonad::<&str>::new();
        let result = FlatSequence.distribute(&monad, vec![1, 2, 3], |n| match n {
            1 => Outcome::Success(vec![n]),
            2 => Outcome::Failure("two"),
            _ => Outcome::Pending,
        });
        assert_eq!(result, Outcome::Failure("two"));
    }
}
