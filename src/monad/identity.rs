//! The identity monad: no effect at all.

use super::{Distribute, Foldable, Monad};

/// The identity monad.
///
/// `Of<T>` is `T` itself, `unit` returns its argument and `bind` applies the
/// function directly. As the inner monad of a [`Compose`](super::Compose) it
/// leaves the outer monad's behaviour unchanged.
///
/// # Examples
///
/// ```rust
/// use seqflow::monad::{Id, Monad};
///
/// let length = Id.bind(Id.unit("hello"), str::len);
/// assert_eq!(length, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Id;

impl Monad for Id {
    type Of<T> = T;

    #[inline]
    fn unit<T>(&self, value: T) -> T {
        value
    }

    #[inline]
    fn bind<A, B, F>(&self, container: A, mut function: F) -> B
    where
        F: FnMut(A) -> B,
    {
        function(container)
    }
}

impl Foldable for Id {
    #[inline]
    fn fold_left<T, Acc, F>(&self, container: T, initial: Acc, mut function: F) -> Acc
    where
        F: FnMut(Acc, T) -> Acc,
    {
        function(initial, container)
    }
}

impl<O: Monad> Distribute<O> for Id {
    #[inline]
    fn distribute<A, B, F>(&self, _outer: &O, container: A, mut function: F) -> O::Of<B>
    where
        F: FnMut(A) -> O::Of<B>,
    {
        function(container)
    }
}
