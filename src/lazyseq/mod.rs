//! Lazy, pull-based pipelines.
//!
//! A pipeline defers a chain of steps over a restartable [`Source`] until
//! a consumer asks for a bounded number of raw values with `take(n)`:
//!
//! - [`LazySeq`] runs plain steps (`map`, `filter`, `compact`, `uniq`,
//!   `uniq_by`) and folds the survivors with a [`Reducer`].
//! - [`LazySeqM`] threads every step through a [`Monad`](crate::monad::Monad)
//!   so that short-circuiting, filtering and fan-out are decided by the monad.
//!
//! Pipelines are immutable values. Every combinator returns a new pipeline
//! and leaves the receiver usable; every `take` starts the source from the
//! beginning, so calling it twice with the same `n` gives the same result.
//!
//! Evaluation is single-threaded and sequential: element `k + 1` is not
//! pulled before element `k` has gone through the whole chain and the
//! reducer. The only mutable state is the table of seen keys that each
//! `uniq` step keeps for the duration of one `take`.
//!
//! # Examples
//!
//! ```rust
//! use seqflow::lazyseq::{Integers, LazySeq, integers};
//!
//! let squares = LazySeq::new(integers(Integers { start: 1, ..Integers::default() }))
//!     .map(|n| n * n)
//!     .filter(|n| n % 2 == 1);
//!
//! assert_eq!(squares.take(6), vec![1, 9, 25]);
//! assert_eq!(squares.reduce(|acc, n| acc + n, 0).take(6), 35);
//! ```

mod lazy_seq;
mod lazy_seq_m;
mod reducer;
mod source;
mod step;

pub use lazy_seq::LazySeq;
pub use lazy_seq_m::LazySeqM;
pub use reducer::{Collect, Fold, Reducer};
pub use source::{Integers, Source, cartesian, integers};
pub use step::{Opaque, UniqKey};
