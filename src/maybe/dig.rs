//! Safe nested access through JSON values.

use serde_json::Value;

use super::Maybe;
use crate::presence::IntoMaybe;

/// One step of a [`dig`] path: an object field or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Object field name. Also accepted for arrays if it parses as an index.
    Field(String),
    /// Array index. Also accepted for objects as the field named by the number.
    Index(usize),
}

impl Key {
    /// Creates a field key.
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// Creates an index key.
    pub const fn index(position: usize) -> Self {
        Self::Index(position)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Field(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Field(name)
    }
}

impl From<usize> for Key {
    fn from(position: usize) -> Self {
        Self::Index(position)
    }
}

/// A value that can be walked one key at a time.
pub trait Dig: Sized {
    /// Returns the child at `key`, or `None` if there is none.
    fn dig_key(self, key: &Key) -> Option<Self>;
}

impl Dig for Value {
    fn dig_key(self, key: &Key) -> Option<Self> {
        match (self, key) {
            (Self::Object(mut fields), Key::Field(name)) => fields.remove(name),
            (Self::Object(mut fields), Key::Index(position)) => {
                fields.remove(&position.to_string())
            }
            (Self::Array(items), Key::Index(position)) => items.into_iter().nth(*position),
            (Self::Array(items), Key::Field(name)) => name
                .parse::<usize>()
                .ok()
                .and_then(|position| items.into_iter().nth(position)),
            (Self::String(text), Key::Index(position)) => text
                .chars()
                .nth(*position)
                .map(|character| Self::String(character.to_string())),
            _ => None,
        }
    }
}

/// Walks `keys` through `subject`, short-circuiting to `Nothing` as soon as a
/// step is missing, out of range, or null.
///
/// `subject` may be a raw value or an optional one; both are normalized
/// through [`IntoMaybe`] first.
///
/// # Examples
///
/// ```rust
/// use seqflow::maybe::{Key, Maybe, dig};
/// use serde_json::json;
///
/// let document = json!({ "user": { "emails": ["a@example.com"] } });
///
/// let email = dig(document.clone(), [Key::field("user"), Key::field("emails"), Key::index(0)]);
/// assert_eq!(email, Maybe::Just(json!("a@example.com")));
///
/// let missing = dig(document, ["user", "phone"]);
/// assert_eq!(missing, Maybe::Nothing);
/// ```
pub fn dig<S, V, I>(subject: S, keys: I) -> Maybe<V>
where
    S: IntoMaybe<Value = V>,
    V: Dig + IntoMaybe<Value = V>,
    I: IntoIterator,
    I::Item: Into<Key>,
{
    keys.into_iter().fold(subject.into_maybe(), |current, key| {
        let key = key.into();
        current.and_then(|value| value.dig_key(&key).map_or(Maybe::Nothing, IntoMaybe::into_maybe))
    })
}

impl<V> Maybe<V>
where
    V: Dig + IntoMaybe<Value = V>,
{
    /// Method form of [`dig`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqflow::maybe::Maybe;
    /// use serde_json::json;
    ///
    /// let count = Maybe::Just(json!({ "key": "hi" }))
    ///     .dig(["key"])
    ///     .map(|value| value.as_str().map(str::len));
    /// assert_eq!(count, Maybe::Just(2));
    /// ```
    pub fn dig<I>(self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        dig(self, keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn dig_walks_objects_and_arrays() {
        let value = json!({ "a": [ { "b": 1 } ] });
        let result = dig(value, [Key::field("a"), Key::index(0), Key::field("b")]);
        assert_eq!(result, Maybe::Just(json!(1)));
    }

    #[rstest]
    fn dig_stops_at_first_missing_step() {
        let value = json!({ "a": { "b": 1 } });
        assert_eq!(dig(value, ["a", "x", "b"]), Maybe::Nothing);
    }

    #[rstest]
    fn dig_treats_null_as_nothing() {
        let value = json!({ "a": null });
        assert_eq!(dig(value, ["a"]), Maybe::Nothing);
    }

    #[rstest]
    fn dig_out_of_range_index_is_nothing() {
        let value = json!([1, 2]);
        assert_eq!(dig(value, [5_usize]), Maybe::Nothing);
    }

    #[rstest]
    fn dig_into_scalar_is_nothing() {
        assert_eq!(dig(json!(3), ["a"]), Maybe::Nothing);
    }

    #[rstest]
    fn dig_accepts_numeric_field_on_array() {
        assert_eq!(dig(json!(["x", "y"]), ["1"]), Maybe::Just(json!("y")));
    }

    #[rstest]
    fn dig_keeps_falsy_leaves() {
        let value = json!({ "zero": 0, "empty": "" });
        assert_eq!(dig(value.clone(), ["zero"]), Maybe::Just(json!(0)));
        assert_eq!(dig(value, ["empty"]), Maybe::Just(json!("")));
    }

    #[rstest]
    fn dig_on_nothing_is_nothing() {
        let subject: Maybe<Value> = Maybe::Nothing;
        assert_eq!(subject.dig(["a"]), Maybe::Nothing);
    }

    #[rstest]
    fn dig_with_no_keys_returns_subject() {
        let keys: [Key; 0] = [];
        assert_eq!(dig(json!({ "a": 1 }), keys), Maybe::Just(json!({ "a": 1 })));
    }
}
