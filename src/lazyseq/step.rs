//! Per-element step results and the scratch state of one `take`.

#[cfg(not(feature = "fxhash"))]
use std::collections::HashSet;

#[cfg(feature = "fxhash")]
use rustc_hash::FxHashSet as HashSet;

use serde_json::Value;

use crate::maybe::Maybe;

/// The result of running one element through a step chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step<T> {
    /// The element survived and continues with this value.
    Keep(T),
    /// The element was filtered out; later steps and the reducer are skipped.
    Drop,
}

impl<T> Step<T> {
    /// Keeps `value` if `keep` holds.
    #[inline]
    pub(crate) fn when(keep: bool, value: T) -> Self {
        if keep { Self::Keep(value) } else { Self::Drop }
    }
}

/// Mutable state owned by a single `take` call: one table of seen keys per
/// `uniq` step of the pipeline.
#[derive(Debug, Default)]
pub(crate) struct Scratch {
    tables: Vec<HashSet<String>>,
}

impl Scratch {
    /// Allocates `count` empty tables.
    pub(crate) fn with_tables(count: usize) -> Self {
        Self {
            tables: std::iter::repeat_with(HashSet::default).take(count).collect(),
        }
    }

    /// Records `key` in `table`, returning `true` the first time it is seen.
    ///
    /// Opaque keys are never recorded and always admitted.
    pub(crate) fn admit<K: UniqKey + ?Sized>(&mut self, table: usize, key: &K) -> bool {
        let Some(representation) = key.uniq_key() else {
            return true;
        };
        self.tables
            .get_mut(table)
            .is_none_or(|seen| seen.insert(representation))
    }

    /// Total number of keys recorded across all tables.
    pub(crate) fn recorded(&self) -> usize {
        self.tables.iter().map(HashSet::len).sum()
    }
}

/// A value that can be compared by `uniq` / `uniq_by`.
///
/// Two keys are duplicates when their representations are equal. A key
/// without a representation (`None`) is opaque: it compares by identity and
/// therefore never duplicates an earlier one.
///
/// Composite keys (tuples, slices, `Option`, `Maybe`) quote each part, so
/// parts that contain separators never run together. A composite with an
/// opaque part is opaque.
///
/// JSON objects, and JSON arrays holding an object at any depth, are opaque;
/// wrap any other value in [`Opaque`] to make it opaque as well.
pub trait UniqKey {
    /// Returns the comparison representation, or `None` for opaque keys.
    fn uniq_key(&self) -> Option<String>;
}

/// Joins part keys between `open` and `close`, quoting each one.
fn composite_key<I>(open: &str, parts: I, close: &str) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut key = String::from(open);
    for (index, part) in parts.into_iter().enumerate() {
        if index > 0 {
            key.push_str(", ");
        }
        key.push_str(&format!("{:?}", part?));
    }
    key.push_str(close);
    Some(key)
}

macro_rules! impl_uniq_key_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl UniqKey for $ty {
                #[inline]
                fn uniq_key(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_uniq_key_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String, str,
);

impl<K: UniqKey + ?Sized> UniqKey for &K {
    #[inline]
    fn uniq_key(&self) -> Option<String> {
        (**self).uniq_key()
    }
}

impl<K: UniqKey> UniqKey for Option<K> {
    fn uniq_key(&self) -> Option<String> {
        match self {
            Some(key) => composite_key("Some(", [key.uniq_key()], ")"),
            None => Some("None".to_owned()),
        }
    }
}

impl<K: UniqKey> UniqKey for Maybe<K> {
    fn uniq_key(&self) -> Option<String> {
        match self {
            Self::Just(key) => composite_key("Just(", [key.uniq_key()], ")"),
            Self::Nothing => Some("Nothing".to_owned()),
        }
    }
}

impl<K: UniqKey> UniqKey for [K] {
    fn uniq_key(&self) -> Option<String> {
        composite_key("[", self.iter().map(UniqKey::uniq_key), "]")
    }
}

impl<K: UniqKey> UniqKey for Vec<K> {
    #[inline]
    fn uniq_key(&self) -> Option<String> {
        self.as_slice().uniq_key()
    }
}

macro_rules! impl_uniq_key_tuple {
    ($($ty:ident $var:ident),+) => {
        impl<$($ty: UniqKey),+> UniqKey for ($($ty,)+) {
            fn uniq_key(&self) -> Option<String> {
                let ($($var,)+) = self;
                composite_key("(", [$($var.uniq_key()),+], ")")
            }
        }
    };
}

impl_uniq_key_tuple!(A a, B b);
impl_uniq_key_tuple!(A a, B b, C c);
impl_uniq_key_tuple!(A a, B b, C c, D d);

fn holds_object(value: &Value) -> bool {
    match value {
        Value::Object(_) => true,
        Value::Array(items) => items.iter().any(holds_object),
        _ => false,
    }
}

// Compact JSON text already quotes and escapes strings.
impl UniqKey for Value {
    fn uniq_key(&self) -> Option<String> {
        (!holds_object(self)).then(|| self.to_string())
    }
}

/// Wraps a key so that `uniq` treats it as opaque.
///
/// # Examples
///
/// ```rust
/// use seqflow::lazyseq::{LazySeq, Opaque};
///
/// let all = LazySeq::new(vec![1, 1, 2]).uniq_by(|n| Opaque(*n));
/// assert_eq!(all.take(3), vec![1, 1, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Opaque<T>(pub T);

impl<T> UniqKey for Opaque<T> {
    #[inline]
    fn uniq_key(&self) -> Option<String> {
        None
    }
}
