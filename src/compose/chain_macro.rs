//! The `chain!` macro: left-to-right application.

/// Feeds a value through functions from left to right.
///
/// `chain!(x, f, g, h)` is `h(g(f(x)))`.
///
/// # Syntax
///
/// - `chain!(x)` - Returns `x` unchanged
/// - `chain!(x, f)` - Returns `f(x)`
/// - `chain!(x, f, g, ...)` - Applies any number of functions in order
///
/// # Examples
///
/// ```
/// use seqflow::chain;
///
/// fn to_uppercase(s: &str) -> String { s.to_uppercase() }
/// fn add_exclamation(s: String) -> String { format!("{s}!") }
///
/// assert_eq!(chain!("hello", to_uppercase, add_exclamation), "HELLO!");
/// ```
///
/// ## Equivalence with compose
///
/// ```
/// use seqflow::{chain, compose};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// assert_eq!(chain!(10, f, g, h), compose!(h, g, f)(10));
/// ```
#[macro_export]
macro_rules! chain {
    ($value:expr $(, $function:expr)* $(,)?) => {{
        let value = $value;
        $(let value = $function(value);)*
        value
    }};
}
