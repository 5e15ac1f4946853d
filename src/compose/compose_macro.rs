//! The `compose!` macro: right-to-left composition.

/// Builds a function applying its arguments from right to left.
///
/// `compose!(f, g, h)` is `|x| f(g(h(x)))`; `compose!(f)` is `f` itself.
/// Every function is moved into the result, so the composite can be handed
/// to a pipeline step as is. Each pair is joined with
/// [`compose()`](crate::compose::compose).
///
/// # Examples
///
/// ```
/// use seqflow::compose;
/// use seqflow::lazyseq::LazySeq;
///
/// let trim = |text: String| text.trim().to_string();
/// let shout = |text: String| format!("{}!", text.to_uppercase());
///
/// let cleaned = LazySeq::new(vec![" a ".to_string(), "b  ".to_string()]).map(compose!(shout, trim));
/// assert_eq!(cleaned.take(2), vec!["A!".to_string(), "B!".to_string()]);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $($inner:expr),+ $(,)?) => {
        $crate::compose::compose($outer, $crate::compose!($($inner),+))
    };
}
