//! Small function helpers used to build pipeline steps.
//!
//! - [`chain!`]: feed a value through functions left to right
//! - [`compose!`]: build a function that applies functions right to left
//! - [`identity`], [`compose()`], [`tap`], [`repeat`]: plain function forms
//!
//! # Examples
//!
//! ```
//! use seqflow::{chain, compose};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! assert_eq!(chain!(5, double, add_one), 11);
//! assert_eq!(compose!(add_one, double)(5), 11);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Chain/compose duality**: `chain!(x, f, g) == compose!(g, f)(x)`

mod chain_macro;
mod compose_macro;
mod utils;

pub use utils::{compose, identity, repeat, tap};

pub use crate::chain;
pub use crate::compose;
