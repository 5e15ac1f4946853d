//! Reducers: how a pipeline folds surviving elements into a result.

use std::fmt;
use std::rc::Rc;

/// Folds pipeline elements of type `T` into an accumulator.
///
/// Every `take` asks for a fresh [`initial`](Self::initial) accumulator and
/// then calls [`step`](Self::step) once per surviving element, in source
/// order.
pub trait Reducer<T> {
    /// The accumulator and result type of `take`.
    type Acc;

    /// Creates the starting accumulator.
    fn initial(&self) -> Self::Acc;

    /// Folds one element into the accumulator.
    fn step(&self, accumulator: Self::Acc, value: T) -> Self::Acc;
}

/// The default reducer: collects elements into a new `Vec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Collect;

impl<T> Reducer<T> for Collect {
    type Acc = Vec<T>;

    #[inline]
    fn initial(&self) -> Vec<T> {
        Vec::new()
    }

    #[inline]
    fn step(&self, mut accumulator: Vec<T>, value: T) -> Vec<T> {
        accumulator.push(value);
        accumulator
    }
}

/// A user-supplied fold: a binary function and a factory for the seed.
///
/// The seed factory runs once per `take`, so an accumulator is never shared
/// between two calls.
pub struct Fold<F, I> {
    function: Rc<F>,
    initial: Rc<I>,
}

impl<F, I> Fold<F, I> {
    /// Creates a fold from `function` and the seed factory `initial`.
    pub fn new(function: F, initial: I) -> Self {
        Self {
            function: Rc::new(function),
            initial: Rc::new(initial),
        }
    }
}

impl<F, I> Clone for Fold<F, I> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            initial: Rc::clone(&self.initial),
        }
    }
}

impl<F, I> fmt::Debug for Fold<F, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Fold").finish_non_exhaustive()
    }
}

impl<T, A, F, I> Reducer<T> for Fold<F, I>
where
    F: Fn(A, T) -> A,
    I: Fn() -> A,
{
    type Acc = A;

    #[inline]
    fn initial(&self) -> A {
        (self.initial)()
    }

    #[inline]
    fn step(&self, accumulator: A, value: T) -> A {
        (self.function)(accumulator, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn collect_preserves_order() {
        let accumulator = [3, 1, 2].into_iter().fold(Reducer::<i32>::initial(&Collect), |acc, n| Collect.step(acc, n));
        assert_eq!(accumulator, vec![3, 1, 2]);
    }

    #[rstest]
    fn fold_seed_is_fresh_each_time() {
        let fold = Fold::new(|mut acc: Vec<i32>, n: i32| {
            acc.push(n);
            acc
        }, Vec::new);
        let first = fold.step(Reducer::<i32>::initial(&fold), 1);
        let second = Reducer::<i32>::initial(&fold);
        assert_eq!(first, vec![1]);
        assert!(second.is_empty());
    }
}
