//! Left-to-right chains of monadic steps.

use std::fmt;
use std::rc::Rc;

use super::Monad;

/// A reusable chain of monadic steps from `A` to `M::Of<B>`.
///
/// [`ChainM::new`] starts with `unit`; every [`then`](Self::then) binds one
/// more step, so running the chain computes
/// `bind(bind(unit(x), f1), f2)...`. Chains are persistent: `then` returns a
/// new chain and leaves the receiver usable.
///
/// # Examples
///
/// ```rust
/// use seqflow::maybe::Maybe;
/// use seqflow::monad::{ChainM, MaybeMonad};
///
/// let chain = ChainM::new(MaybeMonad)
///     .then(|text: &str| Maybe::from(text.parse::<i32>().ok()))
///     .then(|n| Maybe::Just(n * 2));
///
/// assert_eq!(chain.run("21"), Maybe::Just(42));
/// assert_eq!(chain.run("x"), Maybe::Nothing);
/// ```
pub struct ChainM<M: Monad, A, B> {
    monad: Rc<M>,
    steps: usize,
    run: Rc<dyn Fn(A) -> M::Of<B>>,
}

impl<M, A> ChainM<M, A, A>
where
    M: Monad + 'static,
    A: 'static,
{
    /// Creates an empty chain: running it lifts the input with `unit`.
    pub fn new(monad: M) -> Self {
        let monad = Rc::new(monad);
        let unit = Rc::clone(&monad);
        Self {
            monad,
            steps: 0,
            run: Rc::new(move |value: A| unit.unit(value)),
        }
    }
}

impl<M, A, B> ChainM<M, A, B>
where
    M: Monad + 'static,
    A: 'static,
    B: 'static,
{
    /// Appends a step bound after the existing ones.
    #[must_use]
    pub fn then<C, F>(&self, step: F) -> ChainM<M, A, C>
    where
        C: 'static,
        F: Fn(B) -> M::Of<C> + 'static,
    {
        let previous = Rc::clone(&self.run);
        let monad = Rc::clone(&self.monad);
        ChainM {
            monad: Rc::clone(&self.monad),
            steps: self.steps + 1,
            run: Rc::new(move |value: A| monad.bind::<B, C, _>(previous(value), &step)),
        }
    }
}

impl<M: Monad, A, B> ChainM<M, A, B> {
    /// Runs the chain on `value`.
    #[inline]
    pub fn run(&self, value: A) -> M::Of<B> {
        (self.run)(value)
    }

    /// Returns the monad the chain binds with.
    pub fn monad(&self) -> &M {
        &self.monad
    }

    /// Returns the number of steps appended with [`then`](Self::then).
    pub const fn len(&self) -> usize {
        self.steps
    }

    /// Returns `true` if no step has been appended.
    pub const fn is_empty(&self) -> bool {
        self.steps == 0
    }
}

impl<M: Monad, A, B> Clone for ChainM<M, A, B> {
    fn clone(&self) -> Self {
        Self {
            monad: Rc::clone(&self.monad),
            steps: self.steps,
            run: Rc::clone(&self.run),
        }
    }
}

impl<M: Monad + fmt::Debug, A, B> fmt::Debug for ChainM<M, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ChainM")
            .field("monad", &self.monad)
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}

/// Builds a function that lifts its argument with the monad's `unit` and
/// binds every step in order.
///
/// `chain_m!(monad; f1, f2, f3)` is
/// `|x| bind(bind(bind(unit(x), f1), f2), f3)`. With no steps the function
/// is `unit`. Closure steps usually need their first parameter type spelled
/// out.
///
/// # Examples
///
/// ```rust
/// use seqflow::chain_m;
/// use seqflow::monad::FlatSequence;
///
/// let fan_out = chain_m!(FlatSequence; |n: i32| vec![n, n + 1], |n| vec![n * 10]);
/// assert_eq!(fan_out(1), vec![10, 20]);
/// ```
#[macro_export]
macro_rules! chain_m {
    ($monad:expr $(; $($step:expr),+ $(,)?)?) => {{
        let chain = $crate::monad::ChainM::new($monad) $($(.then($step))+)?;
        move |value| chain.run(value)
    }};
}
