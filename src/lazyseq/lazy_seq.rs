//! The plain lazy pipeline.

use std::fmt;
use std::rc::Rc;

use super::reducer::{Collect, Fold, Reducer};
use super::source::{Integers, Source, integers};
use super::step::{Scratch, Step, UniqKey};
use crate::presence::Presence;

type Chain<S, T> = Rc<dyn Fn(S, &mut Scratch) -> Step<T>>;

/// A lazy, pull-based pipeline from a restartable source of `S` to elements
/// of type `T`, folded by the reducer `R`.
///
/// Building a pipeline does no work. Every combinator borrows the receiver
/// and returns a new pipeline, so intermediate pipelines stay usable and
/// keep producing their own results. The work happens in
/// [`take`](Self::take), which starts the source again, pulls at most `n`
/// raw values, runs each through the whole step chain and folds the
/// survivors into the reducer.
///
/// A filtered-out element skips every later step and the reducer, but it
/// still counts against `n`.
///
/// # Examples
///
/// ```rust
/// use seqflow::lazyseq::LazySeq;
/// use serde_json::{Value, json};
///
/// let data = vec![json!(1), json!(2), Value::Null, json!(3)];
/// let odd = LazySeq::new(data)
///     .compact()
///     .map(|value| value.as_i64().unwrap_or_default() + 1)
///     .filter(|n| n % 2 == 1);
///
/// assert_eq!(odd.take(3), vec![3]);
/// assert_eq!(odd.reduce(|acc, n| acc + n, 1).take(3), 4);
/// ```
pub struct LazySeq<S, T, R = Collect> {
    source: Source<S>,
    chain: Chain<S, T>,
    steps: usize,
    uniq_tables: usize,
    reducer: R,
}

impl<S: 'static> LazySeq<S, S> {
    /// Creates a pipeline over `source`, collecting into a `Vec`.
    pub fn new(source: impl Into<Source<S>>) -> Self {
        Self {
            source: source.into(),
            chain: Rc::new(|value: S, _: &mut Scratch| Step::Keep(value)),
            steps: 0,
            uniq_tables: 0,
            reducer: Collect,
        }
    }

    /// Creates a pipeline over a factory of iterables.
    ///
    /// The factory runs once per [`take`](Self::take).
    pub fn from_fn<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = S>,
        I::IntoIter: 'static,
    {
        Self::new(Source::from_fn(factory))
    }
}

impl LazySeq<i64, i64> {
    /// Creates a pipeline over the integers counting up from zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::lazyseq::LazySeq;
    ///
    /// assert_eq!(LazySeq::naturals().map(|n| n + 1).take(4), vec![1, 2, 3, 4]);
    /// ```
    pub fn naturals() -> Self {
        Self::new(integers(Integers::default()))
    }
}

impl Default for LazySeq<i64, i64> {
    fn default() -> Self {
        Self::naturals()
    }
}

impl<S, T, R> LazySeq<S, T, R>
where
    S: 'static,
    T: 'static,
    R: Clone,
{
    fn push<U, F>(&self, step: F) -> LazySeq<S, U, R>
    where
        F: Fn(T, &mut Scratch) -> Step<U> + 'static,
    {
        let previous = Rc::clone(&self.chain);
        LazySeq {
            source: self.source.clone(),
            chain: Rc::new(move |value: S, scratch: &mut Scratch| match previous(value, &mut *scratch) {
                Step::Keep(kept) => step(kept, scratch),
                Step::Drop => Step::Drop,
            }),
            steps: self.steps + 1,
            uniq_tables: self.uniq_tables,
            reducer: self.reducer.clone(),
        }
    }

    /// Appends a transformation step.
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> LazySeq<S, U, R>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        self.push(move |value, _| Step::Keep(function(value)))
    }

    /// Appends a step keeping only the elements `predicate` holds for.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.push(move |value, _| Step::when(predicate(&value), value))
    }

    /// Appends a step dropping blank elements.
    ///
    /// See [`Presence::is_blank`]: absent values, `false`, the empty string
    /// and `NaN` are dropped; numeric zero and empty collections are kept.
    #[must_use]
    pub fn compact(&self) -> Self
    where
        T: Presence,
    {
        self.filter(|value| !value.is_blank())
    }

    /// Appends a step dropping elements seen earlier in the same `take`.
    #[must_use]
    pub fn uniq(&self) -> Self
    where
        T: UniqKey,
    {
        let table = self.uniq_tables;
        let mut next = self.push(move |value: T, scratch: &mut Scratch| {
            let fresh = scratch.admit(table, &value);
            Step::when(fresh, value)
        });
        next.uniq_tables += 1;
        next
    }

    /// Appends a step dropping elements whose key was seen earlier in the
    /// same `take`. The first element with each key wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::lazyseq::LazySeq;
    ///
    /// let words = LazySeq::new(vec!["apple", "avocado", "banana", "blueberry", "cherry"]);
    /// let by_initial = words.uniq_by(|word| word.chars().next());
    /// assert_eq!(by_initial.take(5), vec!["apple", "banana", "cherry"]);
    /// ```
    #[must_use]
    pub fn uniq_by<K, F>(&self, key: F) -> Self
    where
        K: UniqKey,
        F: Fn(&T) -> K + 'static,
    {
        let table = self.uniq_tables;
        let mut next = self.push(move |value: T, scratch: &mut Scratch| {
            let fresh = scratch.admit(table, &key(&value));
            Step::when(fresh, value)
        });
        next.uniq_tables += 1;
        next
    }

    /// Replaces the reducer with a fold of `function` over a clone of
    /// `initial`.
    #[must_use]
    pub fn reduce<A, F>(&self, function: F, initial: A) -> LazySeq<S, T, Fold<F, impl Fn() -> A + use<A, F, S, T, R>>>
    where
        A: Clone + 'static,
        F: Fn(A, T) -> A,
    {
        self.reduce_with(function, move || initial.clone())
    }

    /// Replaces the reducer with a fold of `function` over a seed produced
    /// by `initial` at the start of every `take`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::lazyseq::LazySeq;
    ///
    /// let joined = LazySeq::naturals()
    ///     .filter(|n| n % 2 == 0)
    ///     .reduce_with(|acc: String, n| format!("{acc}{n}"), String::new);
    /// assert_eq!(joined.take(5), "024");
    /// ```
    #[must_use]
    pub fn reduce_with<A, F, I>(&self, function: F, initial: I) -> LazySeq<S, T, Fold<F, I>>
    where
        F: Fn(A, T) -> A,
        I: Fn() -> A,
    {
        LazySeq {
            source: self.source.clone(),
            chain: Rc::clone(&self.chain),
            steps: self.steps,
            uniq_tables: self.uniq_tables,
            reducer: Fold::new(function, initial),
        }
    }
}

impl<S, T, R> LazySeq<S, T, R> {
    /// Pulls at most `n` values from a fresh start of the source and folds
    /// the survivors into a fresh accumulator.
    ///
    /// With `n == 0` the source is not started and the initial accumulator is
    /// returned as is.
    pub fn take(&self, n: usize) -> R::Acc
    where
        R: Reducer<T>,
    {
        let mut accumulator = self.reducer.initial();
        if n == 0 {
            return accumulator;
        }

        let mut scratch = Scratch::with_tables(self.uniq_tables);
        let mut pulled = 0_usize;
        let mut kept = 0_usize;
        for value in self.source.start().take(n) {
            pulled += 1;
            match (self.chain)(value, &mut scratch) {
                Step::Keep(survivor) => {
                    kept += 1;
                    accumulator = self.reducer.step(accumulator, survivor);
                }
                Step::Drop => {
                    tracing::trace!(target: "seqflow::lazyseq", position = pulled - 1, "element dropped");
                }
            }
        }

        tracing::debug!(
            target: "seqflow::lazyseq",
            requested = n,
            pulled,
            kept,
            steps = self.steps,
            uniq_keys = scratch.recorded(),
            "take finished"
        );
        accumulator
    }

    /// Returns the number of steps appended so far.
    pub const fn step_count(&self) -> usize {
        self.steps
    }

    /// Returns the source.
    pub const fn source(&self) -> &Source<S> {
        &self.source
    }

    /// Returns the reducer.
    pub const fn reducer(&self) -> &R {
        &self.reducer
    }
}

impl<S, T, R: Clone> Clone for LazySeq<S, T, R> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            chain: Rc::clone(&self.chain),
            steps: self.steps,
            uniq_tables: self.uniq_tables,
            reducer: self.reducer.clone(),
        }
    }
}

impl<S, T, R: fmt::Debug> fmt::Debug for LazySeq<S, T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LazySeq")
            .field("steps", &self.steps)
            .field("uniq_tables", &self.uniq_tables)
            .field("reducer", &self.reducer)
            .finish_non_exhaustive()
    }
}

// Pipelines share their pieces through `Rc`.
static_assertions::assert_not_impl_any!(LazySeq<i32, i32>: Send, Sync);
static_assertions::assert_not_impl_any!(LazySeq<String, usize>: Send, Sync);
