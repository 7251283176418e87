//! Database scalar binding for `Maybe<T>`.
//!
//! # Responsibility
//! - Define the closed set of driver values, including the null sentinel.
//! - Convert supported payload types to and from driver values.
//! - Register `Maybe<T>` with `rusqlite` parameter binding and row access.
//!
//! # Invariants
//! - The null sentinel reads as absent for every payload type.
//! - Absent always writes as the null sentinel.
//! - Reads are strict: kind mismatches and lossy narrowing are errors.
//! - Writes never fail.

use chrono::{DateTime, Utc};
use std::any::type_name;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::string::FromUtf8Error;

mod convert;
pub mod sqlite;

pub type ScanResult<T> = Result<T, ScanError>;

/// Scalar value exchanged with a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
    Bool(bool),
    Timestamp(DateTime<Utc>),
}

/// Discriminant of [`DriverValue`], used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverKind {
    Null,
    Integer,
    Real,
    Text,
    Blob,
    Bool,
    Timestamp,
}

impl DriverValue {
    pub fn kind(&self) -> DriverKind {
        match self {
            Self::Null => DriverKind::Null,
            Self::Integer(_) => DriverKind::Integer,
            Self::Real(_) => DriverKind::Real,
            Self::Text(_) => DriverKind::Text,
            Self::Blob(_) => DriverKind::Blob,
            Self::Bool(_) => DriverKind::Bool,
            Self::Timestamp(_) => DriverKind::Timestamp,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl DriverKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer => "integer",
            Self::Real => "real",
            Self::Text => "text",
            Self::Blob => "blob",
            Self::Bool => "bool",
            Self::Timestamp => "timestamp",
        }
    }
}

impl Display for DriverKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Produces the driver representation of a value.
///
/// Implement this for a custom type to have it written through its own
/// representation; `Maybe<T>` asks the payload whenever it is present.
pub trait ToDriverValue {
    fn to_driver_value(&self) -> DriverValue;
}

/// Reconstructs a value from its driver representation.
///
/// The provided `from_driver_value` rejects every input with
/// `ScanError::Unsupported`. Types that are written through [`ToDriverValue`]
/// but have no read mapping may declare an empty impl to take part in generic
/// scan code.
pub trait FromDriverValue: Sized {
    fn from_driver_value(_value: DriverValue) -> ScanResult<Self> {
        Err(ScanError::Unsupported {
            target: type_name::<Self>(),
        })
    }

    /// Recovers this type's native kind from a driver that stores it under
    /// another kind, such as SQLite's `INTEGER 0/1` booleans.
    ///
    /// Values that cannot be recovered are returned unchanged, so the
    /// following read reports the stored kind.
    fn recover_stored_kind(value: DriverValue) -> DriverValue {
        value
    }
}

/// Text layout used for timestamps in drivers without a timestamp kind.
pub(crate) const TIMESTAMP_TEXT_FORMAT: &str = "%F %T%.f%:z";

/// Scalar read failure.
#[derive(Debug)]
pub enum ScanError {
    TypeMismatch {
        target: &'static str,
        expected: &'static [DriverKind],
        found: DriverKind,
    },
    OutOfRange {
        target: &'static str,
        value: String,
    },
    InvalidUtf8(FromUtf8Error),
    InvalidUuid(uuid::Error),
    Unsupported {
        target: &'static str,
    },
}

impl ScanError {
    pub(crate) fn mismatch<T>(expected: &'static [DriverKind], found: DriverKind) -> Self {
        Self::TypeMismatch {
            target: type_name::<T>(),
            expected,
            found,
        }
    }

    pub(crate) fn out_of_range<T>(value: impl Display) -> Self {
        Self::OutOfRange {
            target: type_name::<T>(),
            value: value.to_string(),
        }
    }
}

impl Display for ScanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch {
                target,
                expected,
                found,
            } => {
                write!(f, "cannot scan {found} into {target}; expected ")?;
                for (i, kind) in expected.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" or ")?;
                    }
                    write!(f, "{kind}")?;
                }
                Ok(())
            }
            Self::OutOfRange { target, value } => {
                write!(f, "value {value} is out of range for {target}")
            }
            Self::InvalidUtf8(err) => write!(f, "blob is not valid UTF-8 text: {err}"),
            Self::InvalidUuid(err) => write!(f, "invalid uuid: {err}"),
            Self::Unsupported { target } => write!(f, "unsupported scan type {target}"),
        }
    }
}

impl Error for ScanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidUtf8(err) => Some(err),
            Self::InvalidUuid(err) => Some(err),
            Self::TypeMismatch { .. } | Self::OutOfRange { .. } | Self::Unsupported { .. } => None,
        }
    }
}

impl From<FromUtf8Error> for ScanError {
    fn from(value: FromUtf8Error) -> Self {
        Self::InvalidUtf8(value)
    }
}

impl From<uuid::Error> for ScanError {
    fn from(value: uuid::Error) -> Self {
        Self::InvalidUuid(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{DriverKind, DriverValue, ScanError};

    #[test]
    fn kind_matches_variant() {
        assert_eq!(DriverValue::Null.kind(), DriverKind::Null);
        assert_eq!(DriverValue::Integer(1).kind(), DriverKind::Integer);
        assert_eq!(DriverValue::Blob(vec![]).kind(), DriverKind::Blob);
        assert!(DriverValue::Null.is_null());
        assert!(!DriverValue::Bool(false).is_null());
    }

    #[test]
    fn mismatch_message_names_both_kinds() {
        let err =
            ScanError::mismatch::<String>(&[DriverKind::Text, DriverKind::Blob], DriverKind::Real);
        let message = err.to_string();
        assert!(message.starts_with("cannot scan real into "));
        assert!(message.contains("String"));
        assert!(message.ends_with("expected text or blob"));
    }
}
