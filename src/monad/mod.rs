//! The monad algebra that drives monadic pipelines.
//!
//! A monad here is a *value* implementing [`Monad`]: it names a container
//! family through the generic associated type [`Monad::Of`] and supplies
//! `unit` and `bind` for it. Because the monad is a value rather than a
//! trait implemented on the container, one container type can carry several
//! monads (a `Vec` is a [`FlatSequence`], a limited [`Sequence`], or a
//! [`Something`] depending on the value used), and monads can be composed at
//! runtime with [`compose_m`].
//!
//! # Laws
//!
//! Every monad in this module satisfies, over its documented domain:
//!
//! ## Left Identity Law
//!
//! ```text
//! monad.bind(monad.unit(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! monad.bind(m, |x| monad.unit(x)) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! monad.bind(monad.bind(m, f), g) == monad.bind(m, |x| monad.bind(f(x), g))
//! ```
//!
//! # Type inference
//!
//! `Of<T>` is a projection, so the compiler cannot recover `T` from a value
//! of type `M::Of<T>` in generic code. Generic callers name the element types
//! with a turbofish (`monad.bind::<A, B, _>(m, f)`); code using a concrete
//! monad infers them as usual.
//!
//! # Examples
//!
//! ```rust
//! use seqflow::maybe::Maybe;
//! use seqflow::monad::{FlatSequence, MaybeMonad, Monad};
//!
//! let halved = MaybeMonad.bind(MaybeMonad.unit(8), |n| {
//!     if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing }
//! });
//! assert_eq!(halved, Maybe::Just(4));
//!
//! let fanned = FlatSequence.bind(vec![1, 2], |n| vec![n, n * 10]);
//! assert_eq!(fanned, vec![1, 10, 2, 20]);
//! ```

mod chain;
mod compose;
mod identity;
mod maybe;
mod outcome;
mod sequence;
mod something;

pub use chain::ChainM;
pub use compose::{Compose, compose_m};
pub use identity::Id;
pub use maybe::MaybeMonad;
pub use outcome::OutcomeMonad;
pub use sequence::{FlatSequence, Limit, NoOp, Reverse, Sequence, SequenceOp, Skip};
pub use something::Something;

/// A unit/bind pair over the container family [`Of`](Self::Of).
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// self.bind(self.unit(a), f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// self.bind(m, |x| self.unit(x)) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// self.bind(self.bind(m, f), g) == self.bind(m, |x| self.bind(f(x), g))
/// ```
///
/// # Examples
///
/// ```rust
/// use seqflow::monad::{Id, Monad};
///
/// assert_eq!(Id.bind(Id.unit(2), |n| n + 1), 3);
/// ```
pub trait Monad {
    /// The container holding values of type `T`.
    type Of<T>;

    /// Lifts a raw value into the container.
    fn unit<T>(&self, value: T) -> Self::Of<T>;

    /// Applies `function` inside the container and flattens one level.
    ///
    /// `function` may run zero times (short-circuit), once, or once per
    /// element (fan-out), always in element order.
    fn bind<A, B, F>(&self, container: Self::Of<A>, function: F) -> Self::Of<B>
    where
        F: FnMut(A) -> Self::Of<B>;
}

/// A monad whose containers can be drained element by element.
pub trait Foldable: Monad {
    /// Folds the elements of `container` from left to right.
    ///
    /// Containers that hold no value (`Nothing`, `Failure`, an empty `Vec`)
    /// return `initial` untouched.
    fn fold_left<T, Acc, F>(&self, container: Self::Of<T>, initial: Acc, function: F) -> Acc
    where
        F: FnMut(Acc, T) -> Acc;
}

/// Pushes an outer monad `O` through this (inner) monad's container.
///
/// Given an inner container `Self::Of<A>` and a step producing
/// `O::Of<Self::Of<B>>`, `distribute` runs the step on the inner value(s)
/// and rebuilds a single `O::Of<Self::Of<B>>`. It is the piece
/// [`compose_m`] needs to bind through `O::Of<Self::Of<_>>`.
pub trait Distribute<O: Monad>: Monad {
    /// Runs `function` on the value(s) in `container`, rebuilding the result
    /// in the outer monad.
    fn distribute<A, B, F>(&self, outer: &O, container: Self::Of<A>, function: F) -> O::Of<Self::Of<B>>
    where
        F: FnMut(A) -> O::Of<Self::Of<B>>;
}

/// Builds `|x| monad.bind(monad.unit(x), function)`.
///
/// # Examples
///
/// ```rust
/// use seqflow::maybe::Maybe;
/// use seqflow::monad::{MaybeMonad, apply_m};
///
/// let positive = apply_m(MaybeMonad, |n: i32| if n > 0 { Maybe::Just(n) } else { Maybe::Nothing });
/// assert_eq!(positive(3), Maybe::Just(3));
/// assert_eq!(positive(-3), Maybe::Nothing);
/// ```
pub fn apply_m<M, A, B, F>(monad: M, function: F) -> impl Fn(A) -> M::Of<B>
where
    M: Monad,
    F: Fn(A) -> M::Of<B>,
{
    move |value| monad.bind::<A, B, _>(monad.unit(value), &function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::Maybe;
    use rstest::rstest;

    #[rstest]
    fn apply_m_lifts_before_binding() {
        let doubled = apply_m(FlatSequence, |n: i32| vec![n, n]);
        assert_eq!(doubled(4), vec![4, 4]);
    }

    #[rstest]
    fn apply_m_identity_on_maybe() {
        let same = apply_m(MaybeMonad, |n: i32| Maybe::Just(n));
        assert_eq!(same(0), Maybe::Just(0));
    }
}
