//! JSON encoding for `Maybe<T>` on top of `serde`.
//!
//! Delegation to a payload's own codec is the `T: Serialize` /
//! `T: Deserialize` bound: hand-written impls and derived impls are used the
//! same way.
//!
//! Within a derived struct, a `Maybe<T>` field needs `#[serde(default)]` for a
//! missing key to decode as absent, and
//! `#[serde(skip_serializing_if = "Maybe::is_none")]` to omit the key on encode.

use super::{CodecError, CodecResult};
use crate::model::maybe::Maybe;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Literal text for an absent value.
pub const ABSENCE_TOKEN: &str = "null";

impl<T> Serialize for Maybe<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_ref().into_option() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Maybe<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

/// Encodes `value` as JSON text.
pub fn to_text<T>(value: &Maybe<T>) -> CodecResult<String>
where
    T: Serialize,
{
    serde_json::to_string(value).map_err(CodecError::Encode)
}

/// Encodes `value` as JSON bytes.
pub fn to_text_vec<T>(value: &Maybe<T>) -> CodecResult<Vec<u8>>
where
    T: Serialize,
{
    serde_json::to_vec(value).map_err(CodecError::Encode)
}

/// Decodes JSON text into a new container.
///
/// # Errors
/// - `CodecError::Malformed` when `input` is not valid JSON.
/// - `CodecError::TypeMismatch` when `input` does not have the shape of `T`.
pub fn from_text<T>(input: &[u8]) -> CodecResult<Maybe<T>>
where
    T: DeserializeOwned,
{
    if is_absence_token(input) {
        return Ok(Maybe::none());
    }
    let value = serde_json::from_slice::<T>(input).map_err(CodecError::from_decode)?;
    Ok(Maybe::some(value))
}

/// Decodes JSON text into an existing container, replacing its state.
///
/// `target` is left unchanged when decoding fails.
///
/// # Errors
/// - `CodecError::NilTarget` when `target` is `None`.
/// - Any error of [`from_text`].
pub fn from_text_into<T>(target: Option<&mut Maybe<T>>, input: &[u8]) -> CodecResult<()>
where
    T: DeserializeOwned,
{
    let target = target.ok_or(CodecError::NilTarget)?;
    let decoded = from_text(input)?;
    target.replace_with(decoded);
    Ok(())
}

fn is_absence_token(input: &[u8]) -> bool {
    input.trim_ascii() == ABSENCE_TOKEN.as_bytes()
}

#[cfg(test)]
mod tests {
    use super::{from_text, is_absence_token, to_text, to_text_vec};
    use crate::model::maybe::{none, some};

    #[test]
    fn absence_token_ignores_surrounding_whitespace() {
        assert!(is_absence_token(b"null"));
        assert!(is_absence_token(b" \n null\t"));
        assert!(!is_absence_token(b"\"null\""));
        assert!(!is_absence_token(b"nul"));
    }

    #[test]
    fn present_value_has_no_envelope() {
        assert_eq!(to_text(&some(42)).unwrap(), "42");
        assert_eq!(to_text(&some("hi")).unwrap(), r#""hi""#);
        assert_eq!(to_text(&some(vec![1, 2])).unwrap(), "[1,2]");
    }

    #[test]
    fn absent_value_is_null() {
        assert_eq!(to_text(&none::<i32>()).unwrap(), "null");
        assert_eq!(to_text_vec(&none::<i32>()).unwrap(), b"null");
    }

    #[test]
    fn quoted_null_is_a_present_string() {
        assert_eq!(
            from_text::<String>(br#""null""#).unwrap(),
            some("null".to_string())
        );
    }
}
