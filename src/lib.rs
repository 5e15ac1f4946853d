//! # seqflow
//!
//! Lazy, pull-based sequence pipelines with optional and tri-state values
//! threaded through a small monad algebra.
//!
//! ## Overview
//!
//! - **Values**: [`Maybe`](maybe::Maybe) (`Just`/`Nothing`) and
//!   [`Outcome`](outcome::Outcome) (`Success`/`Failure`/`Pending`), both
//!   normalizing plain values through [`Presence`](presence::Presence)
//! - **Monads**: identity, `Maybe`, `Outcome`, sequences with a flattening
//!   policy, batches of optional values, composition and Kleisli chains
//! - **Pipelines**: [`LazySeq`](lazyseq::LazySeq) and
//!   [`LazySeqM`](lazyseq::LazySeqM), immutable pipelines evaluated on
//!   demand by `take(n)`
//! - **Function Composition**: `compose!`, `chain!` and a few helpers
//!
//! ## Feature Flags
//!
//! - `monad`: the monad algebra (enabled by default)
//! - `lazyseq`: lazy pipelines, requires `monad` (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for `Maybe` and `Outcome`
//! - `fxhash`: hash the `uniq` tables with `rustc-hash`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqflow::prelude::*;
//!
//! let evens = LazySeq::naturals()
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * 10);
//! assert_eq!(evens.take(6), vec![0, 20, 40]);
//!
//! let found = LazySeqM::new(MaybeMonad, vec![Some(1), None, Some(3)])
//!     .map(Maybe::<i32>::from)
//!     .reduce(|acc, n| acc + n, 0);
//! assert_eq!(found.take(3), 4);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the value types, the monads and the pipelines. The `given`
/// helpers of [`maybe`] and [`outcome`] share a name and are left out; import
/// them from their modules.
///
/// # Usage
///
/// ```rust
/// use seqflow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{CaseError, Rejected};
    pub use crate::maybe::{Conditions, Dig, Maybe};
    pub use crate::outcome::{IntoOutcome, Outcome};
    pub use crate::presence::{IntoMaybe, Presence};

    pub use crate::compose::{identity, tap};
    pub use crate::{chain, compose};

    #[cfg(feature = "monad")]
    pub use crate::monad::{
        ChainM, Compose, Distribute, FlatSequence, Foldable, Id, MaybeMonad, Monad, OutcomeMonad,
        Sequence, Something, compose_m,
    };

    #[cfg(feature = "monad")]
    pub use crate::chain_m;

    #[cfg(feature = "lazyseq")]
    pub use crate::lazyseq::{Integers, LazySeq, LazySeqM, Reducer, Source, UniqKey};
}

pub mod compose;
pub mod error;
pub mod maybe;
pub mod outcome;
pub mod presence;

#[cfg(feature = "monad")]
pub mod monad;

#[cfg(feature = "lazyseq")]
pub mod lazyseq;

pub use error::{CaseError, Rejected};
