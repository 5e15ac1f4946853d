//! The monadic lazy pipeline.

use std::fmt;

use super::reducer::{Collect, Fold, Reducer};
use super::source::{Integers, Source, integers};
use crate::monad::{ChainM, Foldable, Monad};

/// A lazy pipeline whose steps are threaded through a monad.
///
/// Each step is a function `T -> M::Of<U>`. For every raw value pulled by
/// [`take`](Self::take) the pipeline lifts the value with the monad's
/// `unit`, binds every step in order, and then drains the resulting
/// container with [`Foldable::fold_left`], feeding each element to the
/// reducer once. Short-circuiting (`Nothing`), filtering (empty
/// containers) and fan-out (several elements) all come from the monad.
///
/// # Examples
///
/// ```rust
/// use seqflow::lazyseq::LazySeqM;
/// use seqflow::maybe::Maybe;
/// use seqflow::monad::MaybeMonad;
/// use serde_json::json;
///
/// let data = vec![json!({ "key": 1 }), json!({ "key": 2 }), json!({}), json!({ "key": 3 })];
/// let keys = LazySeqM::new(MaybeMonad, data)
///     .map(|value| Maybe::Just(value).dig(["key"]))
///     .map(|key| Maybe::from(key.as_i64()))
///     .map(|n| if n % 2 == 1 { Maybe::Just(n.to_string()) } else { Maybe::Nothing });
///
/// assert_eq!(keys.take(3), vec!["1".to_string()]);
/// assert_eq!(keys.reduce(|acc: String, key| format!("{acc} {key}"), "hi".to_string()).take(4), "hi 1 3");
/// ```
pub struct LazySeqM<M: Monad, S, T, R = Collect> {
    source: Source<S>,
    chain: ChainM<M, S, T>,
    reducer: R,
}

impl<M, S> LazySeqM<M, S, S>
where
    M: Monad + 'static,
    S: 'static,
{
    /// Creates a pipeline binding through `monad` over `source`.
    pub fn new(monad: M, source: impl Into<Source<S>>) -> Self {
        Self {
            source: source.into(),
            chain: ChainM::new(monad),
            reducer: Collect,
        }
    }

    /// Creates a pipeline over a factory of iterables.
    pub fn from_fn<F, I>(monad: M, factory: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = S>,
        I::IntoIter: 'static,
    {
        Self::new(monad, Source::from_fn(factory))
    }
}

impl<M: Monad + 'static> LazySeqM<M, i64, i64> {
    /// Creates a pipeline over the integers counting up from zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::lazyseq::LazySeqM;
    /// use seqflow::monad::FlatSequence;
    ///
    /// let shifted = LazySeqM::naturals(FlatSequence).map(|n| vec![n + 1]);
    /// assert_eq!(shifted.take(4), vec![1, 2, 3, 4]);
    /// ```
    pub fn naturals(monad: M) -> Self {
        Self::new(monad, integers(Integers::default()))
    }
}

impl<M, S, T, R> LazySeqM<M, S, T, R>
where
    M: Monad + 'static,
    S: 'static,
    T: 'static,
    R: Clone,
{
    /// Appends a monadic step, bound after the existing ones.
    #[must_use]
    pub fn map<U, F>(&self, step: F) -> LazySeqM<M, S, U, R>
    where
        U: 'static,
        F: Fn(T) -> M::Of<U> + 'static,
    {
        LazySeqM {
            source: self.source.clone(),
            chain: self.chain.then(step),
            reducer: self.reducer.clone(),
        }
    }

    /// Replaces the reducer with a fold of `function` over a clone of
    /// `initial`.
    #[must_use]
    pub fn reduce<A, F>(&self, function: F, initial: A) -> LazySeqM<M, S, T, Fold<F, impl Fn() -> A + use<A, F, M, S, T, R>>>
    where
        A: Clone + 'static,
        F: Fn(A, T) -> A,
    {
        self.reduce_with(function, move || initial.clone())
    }

    /// Replaces the reducer with a fold of `function` over a seed produced
    /// by `initial` at the start of every `take`.
    #[must_use]
    pub fn reduce_with<A, F, I>(&self, function: F, initial: I) -> LazySeqM<M, S, T, Fold<F, I>>
    where
        F: Fn(A, T) -> A,
        I: Fn() -> A,
    {
        LazySeqM {
            source: self.source.clone(),
            chain: self.chain.clone(),
            reducer: Fold::new(function, initial),
        }
    }
}

impl<M: Monad, S, T, R> LazySeqM<M, S, T, R> {
    /// Pulls at most `n` values from a fresh start of the source, runs each
    /// through the monadic chain and folds every resulting element into a
    /// fresh accumulator.
    ///
    /// With `n == 0` the source is not started and the initial accumulator is
    /// returned as is.
    pub fn take(&self, n: usize) -> R::Acc
    where
        M: Foldable,
        R: Reducer<T>,
    {
        let mut accumulator = self.reducer.initial();
        if n == 0 {
            return accumulator;
        }

        let monad = self.chain.monad();
        let mut pulled = 0_usize;
        let mut emitted = 0_usize;
        for value in self.source.start().take(n) {
            pulled += 1;
            let container = self.chain.run(value);
            accumulator = monad.fold_left::<T, R::Acc, _>(container, accumulator, |accumulator, element| {
                emitted += 1;
                self.reducer.step(accumulator, element)
            });
        }

        tracing::debug!(
            target: "seqflow::lazyseq",
            requested = n,
            pulled,
            emitted,
            steps = self.chain.len(),
            "monadic take finished"
        );
        accumulator
    }

    /// Returns the number of steps appended so far.
    pub const fn step_count(&self) -> usize {
        self.chain.len()
    }

    /// Returns the monad the steps are bound with.
    pub fn monad(&self) -> &M {
        self.chain.monad()
    }

    /// Returns the source.
    pub const fn source(&self) -> &Source<S> {
        &self.source
    }
}

impl<M: Monad, S, T, R: Clone> Clone for LazySeqM<M, S, T, R> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            chain: self.chain.clone(),
            reducer: self.reducer.clone(),
        }
    }
}

impl<M: Monad + fmt::Debug, S, T, R: fmt::Debug> fmt::Debug for LazySeqM<M, S, T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LazySeqM")
            .field("monad", self.chain.monad())
            .field("steps", &self.chain.len())
            .field("reducer", &self.reducer)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_not_impl_any!(LazySeqM<crate::monad::MaybeMonad, i32, i32>: Send, Sync);
