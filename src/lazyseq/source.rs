//! Restartable element sources.
//!
//! A [`Source`] is a factory of fresh iterators. Pipelines invoke it once per
//! `take`, so every call starts again from the first element and no position
//! is kept between calls.

use std::fmt;
use std::rc::Rc;

type Factory<T> = dyn Fn() -> Box<dyn Iterator<Item = T>>;

/// A shared, restartable factory of iterators.
///
/// # Examples
///
/// ```rust
/// use seqflow::lazyseq::Source;
///
/// let source = Source::from(vec!["a", "b"]);
/// assert_eq!(source.start().collect::<Vec<_>>(), vec!["a", "b"]);
/// assert_eq!(source.start().collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
pub struct Source<T> {
    factory: Rc<Factory<T>>,
}

impl<T: 'static> Source<T> {
    /// Wraps a factory returning anything iterable.
    pub fn from_fn<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self {
            factory: Rc::new(move || Box::new(factory().into_iter()) as Box<dyn Iterator<Item = T>>),
        }
    }

    /// A source that yields nothing.
    pub fn empty() -> Self {
        Self::from_fn(std::iter::empty)
    }
}

impl<T> Source<T> {
    /// Invokes the factory, returning a fresh iterator.
    #[inline]
    pub fn start(&self) -> Box<dyn Iterator<Item = T>> {
        (self.factory)()
    }
}

impl<T> Clone for Source<T> {
    fn clone(&self) -> Self {
        Self {
            factory: Rc::clone(&self.factory),
        }
    }
}

impl<T> fmt::Debug for Source<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Source").finish_non_exhaustive()
    }
}

/// A fixed collection; every start clones its items again.
impl<T: Clone + 'static> From<Vec<T>> for Source<T> {
    fn from(items: Vec<T>) -> Self {
        let items: Rc<[T]> = items.into();
        Self::from_fn(move || {
            let items = Rc::clone(&items);
            (0..items.len()).map(move |index| items[index].clone())
        })
    }
}

impl<T: Clone + 'static, const N: usize> From<[T; N]> for Source<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

// =============================================================================
// Generators
// =============================================================================

/// Settings for [`integers`].
///
/// Defaults to counting up from `0` by `1` without end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Integers {
    /// First value yielded.
    pub start: i64,
    /// Distance between consecutive values. `0` counts as `1`; negative
    /// steps yield nothing.
    pub step: i64,
    /// Exclusive upper bound; `None` is unbounded.
    pub stop: Option<i64>,
}

impl Default for Integers {
    fn default() -> Self {
        Self {
            start: 0,
            step: 1,
            stop: None,
        }
    }
}

/// A restartable ascending integer source.
///
/// Yields `start`, `start + step`, ... while the value is below `stop`.
/// A zero `step` counts by one. Nothing is yielded if `step` is negative or
/// `start >= stop`.
/// Counting ends silently at `i64::MAX`.
///
/// # Examples
///
/// ```rust
/// use seqflow::lazyseq::{Integers, integers};
///
/// let odd = integers(Integers { start: -1, step: 2, stop: Some(4) });
/// assert_eq!(odd.start().collect::<Vec<_>>(), vec![-1, 1, 3]);
/// ```
pub fn integers(settings: Integers) -> Source<i64> {
    let Integers { start, step, stop } = settings;
    let step = if step == 0 { 1 } else { step };
    Source::from_fn(move || {
        (step > 0)
            .then(|| std::iter::successors(Some(start), move |current| current.checked_add(step)))
            .into_iter()
            .flatten()
            .take_while(move |value| stop.is_none_or(|stop| *value < stop))
    })
}

/// A restartable source over the cartesian product of `lists`.
///
/// Combinations are yielded with the leftmost list varying slowest. With no
/// lists nothing is yielded; a single list is yielded once, as a whole.
///
/// # Examples
///
/// ```rust
/// use seqflow::lazyseq::cartesian;
///
/// let pairs = cartesian(vec![vec![1, 2], vec![10, 20]]);
/// assert_eq!(
///     pairs.start().collect::<Vec<_>>(),
///     vec![vec![1, 10], vec![1, 20], vec![2, 10], vec![2, 20]],
/// );
/// ```
pub fn cartesian<T: Clone + 'static>(lists: Vec<Vec<T>>) -> Source<Vec<T>> {
    let lists: Rc<[Vec<T>]> = lists.into();
    Source::from_fn(move || -> Box<dyn Iterator<Item = Vec<T>>> {
        match &*lists {
            [] => Box::new(std::iter::empty()),
            [only] => Box::new(std::iter::once(only.clone())),
            _ => Box::new(Product::new(Rc::clone(&lists))),
        }
    })
}

/// Odometer over the indices of every list.
struct Product<T> {
    lists: Rc<[Vec<T>]>,
    indices: Option<Vec<usize>>,
}

impl<T> Product<T> {
    fn new(lists: Rc<[Vec<T>]>) -> Self {
        let indices = lists.iter().all(|list| !list.is_empty()).then(|| vec![0; lists.len()]);
        Self { lists, indices }
    }
}

impl<T: Clone> Iterator for Product<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        let indices = self.indices.as_mut()?;
        let combination = indices
            .iter()
            .zip(self.lists.iter())
            .map(|(&index, list)| list[index].clone())
            .collect();

        let mut exhausted = true;
        for (index, list) in indices.iter_mut().zip(self.lists.iter()).rev() {
            *index += 1;
            if *index < list.len() {
                exhausted = false;
                break;
            }
            *index = 0;
        }
        if exhausted {
            self.indices = None;
        }
        Some(combination)
    }
}
