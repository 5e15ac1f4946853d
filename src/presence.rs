//! Classification of plain values as present, absent, or blank.
//!
//! Two notions drive the whole crate:
//!
//! - **absent**: a null-like value. Lifting an absent value into a
//!   [`Maybe`] yields `Nothing`.
//! - **blank**: an absent value, `false`, the empty string, or `NaN`.
//!   Blank values are dropped by `compact` and classified as failures by
//!   [`Outcome::classify`](crate::outcome::Outcome::classify).
//!
//! Numeric zero, empty collections, and JSON arrays or objects are neither
//! absent nor blank.
//!
//! # Examples
//!
//! ```rust
//! use seqflow::presence::{IntoMaybe, Presence};
//! use seqflow::maybe::Maybe;
//! use serde_json::json;
//!
//! assert!(!0.is_blank());
//! assert!("".is_blank());
//! assert!(!Vec::<i32>::new().is_blank());
//! assert!(json!(null).is_absent());
//!
//! assert_eq!(None::<i32>.into_maybe(), Maybe::Nothing);
//! assert_eq!(json!(null).into_maybe(), Maybe::Nothing);
//! assert_eq!("".into_maybe(), Maybe::Just(""));
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use serde_json::Value;

use crate::maybe::Maybe;

/// Classifies a value as absent and/or blank.
///
/// Both methods default to `false`, so plain domain types only need an empty
/// `impl Presence for MyType {}` to take part in `compact` and
/// `Outcome::classify`.
pub trait Presence {
    /// Returns `true` for null-like values.
    #[inline]
    fn is_absent(&self) -> bool {
        false
    }

    /// Returns `true` for values `compact` drops: absent values, `false`,
    /// the empty string, and `NaN`.
    #[inline]
    fn is_blank(&self) -> bool {
        self.is_absent()
    }
}

/// Normalizes a value into a [`Maybe`].
///
/// An existing `Maybe` is returned unchanged, `Option` is flattened one
/// level, absent values become `Nothing` and anything else becomes `Just`.
pub trait IntoMaybe {
    /// The type held by the resulting `Just`.
    type Value;

    /// Performs the normalization.
    fn into_maybe(self) -> Maybe<Self::Value>;
}

macro_rules! impl_plain {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Presence for $ty {}

            impl IntoMaybe for $ty {
                type Value = Self;

                #[inline]
                fn into_maybe(self) -> Maybe<Self> {
                    Maybe::Just(self)
                }
            }
        )*
    };
}

impl_plain!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char
);

macro_rules! impl_blank_when {
    ($($ty:ty => |$value:ident| $blank:expr),* $(,)?) => {
        $(
            impl Presence for $ty {
                #[inline]
                fn is_blank(&self) -> bool {
                    let $value = self;
                    $blank
                }
            }

            impl IntoMaybe for $ty {
                type Value = Self;

                #[inline]
                fn into_maybe(self) -> Maybe<Self> {
                    Maybe::Just(self)
                }
            }
        )*
    };
}

impl_blank_when!(
    bool => |value| !*value,
    f32 => |value| value.is_nan(),
    f64 => |value| value.is_nan(),
    String => |value| value.is_empty(),
);

impl Presence for &str {
    #[inline]
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<'a> IntoMaybe for &'a str {
    type Value = &'a str;

    #[inline]
    fn into_maybe(self) -> Maybe<&'a str> {
        Maybe::Just(self)
    }
}

impl Presence for Cow<'_, str> {
    #[inline]
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<'a> IntoMaybe for Cow<'a, str> {
    type Value = Self;

    #[inline]
    fn into_maybe(self) -> Maybe<Self> {
        Maybe::Just(self)
    }
}

impl Presence for () {
    #[inline]
    fn is_absent(&self) -> bool {
        true
    }
}

impl IntoMaybe for () {
    type Value = ();

    #[inline]
    fn into_maybe(self) -> Maybe<()> {
        Maybe::Nothing
    }
}

macro_rules! impl_collection {
    ($($ty:ident < $($param:ident),+ >),* $(,)?) => {
        $(
            impl<$($param),+> Presence for $ty<$($param),+> {}

            impl<$($param),+> IntoMaybe for $ty<$($param),+> {
                type Value = Self;

                #[inline]
                fn into_maybe(self) -> Maybe<Self> {
                    Maybe::Just(self)
                }
            }
        )*
    };
}

impl_collection!(
    Vec<T>,
    VecDeque<T>,
    BTreeSet<T>,
    BTreeMap<K, V>,
    HashSet<T, S>,
    HashMap<K, V, S>,
);

macro_rules! impl_tuple {
    ($($ty:ident),+) => {
        impl<$($ty),+> Presence for ($($ty,)+) {}

        impl<$($ty),+> IntoMaybe for ($($ty,)+) {
            type Value = Self;

            #[inline]
            fn into_maybe(self) -> Maybe<Self> {
                Maybe::Just(self)
            }
        }
    };
}

impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
impl_tuple!(A, B, C, D, E);
impl_tuple!(A, B, C, D, E, F);

impl<T: Presence + ?Sized> Presence for Box<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }

    #[inline]
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Presence> Presence for Option<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Presence::is_blank)
    }
}

impl<T> IntoMaybe for Option<T> {
    type Value = T;

    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        Maybe::from(self)
    }
}

impl<T: Presence> Presence for Maybe<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_nothing()
    }

    #[inline]
    fn is_blank(&self) -> bool {
        match self {
            Maybe::Just(value) => value.is_blank(),
            Maybe::Nothing => true,
        }
    }
}

impl<T> IntoMaybe for Maybe<T> {
    type Value = T;

    #[inline]
    fn into_maybe(self) -> Self {
        self
    }
}

impl Presence for Value {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_null()
    }

    fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(flag) => !flag,
            Self::String(text) => text.is_empty(),
            Self::Number(number) => number.as_f64().is_some_and(f64::is_nan),
            Self::Array(_) | Self::Object(_) => false,
        }
    }
}

impl IntoMaybe for Value {
    type Value = Self;

    #[inline]
    fn into_maybe(self) -> Maybe<Self> {
        if self.is_null() {
            Maybe::Nothing
        } else {
            Maybe::Just(self)
        }
    }
}
