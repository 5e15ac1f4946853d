//! Function forms of the composition helpers.

/// Returns the value unchanged.
///
/// # Examples
///
/// ```
/// use seqflow::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Composes two functions: `compose(f, g)(x) == f(g(x))`.
///
/// # Examples
///
/// ```
/// use seqflow::compose::compose;
///
/// let length_of_text = compose(|text: String| text.len(), |n: i32| n.to_string());
/// assert_eq!(length_of_text(12345), 5);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |value| outer(inner(value))
}

/// Wraps a side effect so that it passes its argument through.
///
/// # Examples
///
/// ```
/// use seqflow::compose::tap;
/// use std::cell::RefCell;
///
/// let seen = RefCell::new(Vec::new());
/// let record = tap(|n: &i32| seen.borrow_mut().push(*n));
/// assert_eq!(record(3), 3);
/// assert_eq!(*seen.borrow(), vec![3]);
/// ```
#[inline]
pub fn tap<T, F>(effect: F) -> impl Fn(T) -> T
where
    F: Fn(&T),
{
    move |value| {
        effect(&value);
        value
    }
}

/// Calls `function` with every index below `count` and collects the results.
///
/// # Examples
///
/// ```
/// use seqflow::compose::repeat;
///
/// assert_eq!(repeat(3, |index| index * 2), vec![0, 2, 4]);
/// ```
pub fn repeat<T, F>(count: usize, function: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    (0..count).map(function).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn compose_applies_inner_first() {
        let composed = compose(|n: i32| n + 1, |n: i32| n * 2);
        assert_eq!(composed(5), 11);
    }

    #[rstest]
    fn compose_with_identity_is_neutral() {
        let double = |n: i32| n * 2;
        assert_eq!(compose(identity, double)(4), double(4));
        assert_eq!(compose(double, identity)(4), double(4));
    }

    #[rstest]
    fn tap_returns_its_argument() {
        let counter = std::cell::Cell::new(0);
        let counted = tap(|_: &&str| counter.set(counter.get() + 1));
        assert_eq!(counted("a"), "a");
        assert_eq!(counted("b"), "b");
        assert_eq!(counter.get(), 2);
    }

    #[rstest]
    fn repeat_zero_times_is_empty() {
        assert!(repeat(0, |index| index).is_empty());
    }
}
