//! Structured-text adapter for `Maybe<T>`.
//!
//! # Responsibility
//! - Map absence to the bare `null` token and presence to the bare value encoding.
//! - Classify decode failures into malformed input vs shape mismatch.
//!
//! # Invariants
//! - No envelope is ever added around a present value.
//! - A failed decode leaves the receiving container untouched.

use serde_json::error::Category;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod json;

pub use json::{from_text, from_text_into, to_text, to_text_vec, ABSENCE_TOKEN};

pub type CodecResult<T> = Result<T, CodecError>;

/// Text encode/decode failure.
#[derive(Debug)]
pub enum CodecError {
    /// Input is not valid JSON (syntax error or truncated input).
    Malformed(serde_json::Error),
    /// Input is valid JSON but its shape does not match the target type.
    TypeMismatch(serde_json::Error),
    /// Decode was requested without a receiving container.
    NilTarget,
    /// The value's own `Serialize` impl rejected it.
    Encode(serde_json::Error),
}

impl CodecError {
    /// Returns `(line, column)` of the offending token, when known.
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            Self::Malformed(err) | Self::TypeMismatch(err) => Some((err.line(), err.column())),
            Self::NilTarget | Self::Encode(_) => None,
        }
    }

    pub(crate) fn from_decode(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::TypeMismatch(err),
            Category::Syntax | Category::Eof | Category::Io => Self::Malformed(err),
        }
    }
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "malformed text input: {err}"),
            Self::TypeMismatch(err) => write!(f, "text value does not match target type: {err}"),
            Self::NilTarget => write!(f, "decode requested without a target container"),
            Self::Encode(err) => write!(f, "failed to encode value: {err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed(err) | Self::TypeMismatch(err) | Self::Encode(err) => Some(err),
            Self::NilTarget => None,
        }
    }
}
