//! Per-type driver conversions.
//!
//! Narrow integer and float types widen on write and are range-checked on
//! read; every other supported type maps one-to-one onto a driver kind.

use super::{
    DriverKind, DriverValue, FromDriverValue, ScanError, ScanResult, ToDriverValue,
    TIMESTAMP_TEXT_FORMAT,
};
use crate::model::maybe::Maybe;
use chrono::{DateTime, Utc};
use uuid::Uuid;

const INTEGER: &[DriverKind] = &[DriverKind::Integer];
const REAL: &[DriverKind] = &[DriverKind::Real];
const TEXT_OR_BLOB: &[DriverKind] = &[DriverKind::Text, DriverKind::Blob];
const BLOB: &[DriverKind] = &[DriverKind::Blob];
const BOOL: &[DriverKind] = &[DriverKind::Bool];
const TIMESTAMP: &[DriverKind] = &[DriverKind::Timestamp];

impl<T> Maybe<T> {
    /// Replaces this container's state from a driver value.
    ///
    /// The container is left unchanged when the conversion fails.
    pub fn scan(&mut self, value: DriverValue) -> ScanResult<()>
    where
        T: FromDriverValue,
    {
        let scanned = Self::from_driver_value(value)?;
        self.replace_with(scanned);
        Ok(())
    }

    /// Returns the driver representation; absent yields `DriverValue::Null`.
    pub fn driver_value(&self) -> DriverValue
    where
        T: ToDriverValue,
    {
        self.to_driver_value()
    }
}

impl<T> FromDriverValue for Maybe<T>
where
    T: FromDriverValue,
{
    fn from_driver_value(value: DriverValue) -> ScanResult<Self> {
        match value {
            DriverValue::Null => Ok(Self::none()),
            value => T::from_driver_value(value).map(Self::some),
        }
    }

    fn recover_stored_kind(value: DriverValue) -> DriverValue {
        T::recover_stored_kind(value)
    }
}

impl<T> ToDriverValue for Maybe<T>
where
    T: ToDriverValue,
{
    fn to_driver_value(&self) -> DriverValue {
        match self.as_ref().into_option() {
            Some(value) => value.to_driver_value(),
            None => DriverValue::Null,
        }
    }
}

impl<T> ToDriverValue for &T
where
    T: ToDriverValue + ?Sized,
{
    fn to_driver_value(&self) -> DriverValue {
        (**self).to_driver_value()
    }
}

impl ToDriverValue for DriverValue {
    fn to_driver_value(&self) -> DriverValue {
        self.clone()
    }
}

macro_rules! narrow_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToDriverValue for $ty {
                fn to_driver_value(&self) -> DriverValue {
                    DriverValue::Integer(i64::from(*self))
                }
            }

            impl FromDriverValue for $ty {
                fn from_driver_value(value: DriverValue) -> ScanResult<Self> {
                    match value {
                        DriverValue::Integer(v) => {
                            Self::try_from(v).map_err(|_| ScanError::out_of_range::<Self>(v))
                        }
                        other => Err(ScanError::mismatch::<Self>(INTEGER, other.kind())),
                    }
                }
            }
        )*
    };
}

narrow_integer!(i8, i16, i32);

impl ToDriverValue for i64 {
    fn to_driver_value(&self) -> DriverValue {
        DriverValue::Integer(*self)
    }
}

impl FromDriverValue for i64 {
    fn from_driver_value(value: DriverValue) -> ScanResult<Self> {
        match value {
            DriverValue::Integer(v) => Ok(v),
            other => Err(ScanError::mismatch::<Self>(INTEGER, other.kind())),
        }
    }
}

impl ToDriverValue for f32 {
    fn to_driver_value(&self) -> DriverValue {
        DriverValue::Real(f64::from(*self))
    }
}

impl FromDriverValue for f32 {
    fn from_driver_value(value: DriverValue) -> ScanResult<Self> {
        match value {
            DriverValue::Real(v) => {
                let narrowed = v as f32;
                // NaN and infinities carry over; finite values must stay finite.
                if v.is_finite() && !narrowed.is_finite() {
                    return Err(ScanError::out_of_range::<Self>(v));
                }
                Ok(narrowed)
            }
            other => Err(ScanError::mismatch::<Self>(REAL, other.kind())),
        }
    }
}

impl ToDriverValue for f64 {
    fn to_driver_value(&self) -> DriverValue {
        DriverValue::Real(*self)
    }
}

impl FromDriverValue for f64 {
    fn from_driver_value(value: DriverValue) -> ScanResult<Self> {
        match value {
            DriverValue::Real(v) => Ok(v),
            other => Err(ScanError::mismatch::<Self>(REAL, other.kind())),
        }
    }
}

impl ToDriverValue for str {
    fn to_driver_value(&self) -> DriverValue {
        DriverValue::Text(self.to_owned())
    }
}

impl ToDriverValue for String {
    fn to_driver_value(&self) -> DriverValue {
        DriverValue::Text(self.clone())
    }
}

impl FromDriverValue for String {
    fn from_driver_value(value: DriverValue) -> ScanResult<Self> {
        match value {
            DriverValue::Text(v) => Ok(v),
            DriverValue::Blob(v) => Ok(String::from_utf8(v)?),
            other => Err(ScanError::mismatch::<Self>(TEXT_OR_BLOB, other.kind())),
        }
    }
}

impl ToDriverValue for [u8] {
    fn to_driver_value(&self) -> DriverValue {
        DriverValue::Blob(self.to_vec())
    }
}

impl ToDriverValue for Vec<u8> {
    fn to_driver_value(&self) -> DriverValue {
        DriverValue::Blob(self.clone())
    }
}

impl FromDriverValue for Vec<u8> {
    fn from_driver_value(value: DriverValue) -> ScanResult<Self> {
        match value {
            DriverValue::Blob(v) => Ok(v),
            other => Err(ScanError::mismatch::<Self>(BLOB, other.kind())),
        }
    }
}

impl ToDriverValue for bool {
    fn to_driver_value(&self) -> DriverValue {
        DriverValue::Bool(*self)
    }
}

impl FromDriverValue for bool {
    fn from_driver_value(value: DriverValue) -> ScanResult<Self> {
        match value {
            DriverValue::Bool(v) => Ok(v),
            other => Err(ScanError::mismatch::<Self>(BOOL, other.kind())),
        }
    }

    /// Only `0` and `1` are booleans; other integers stay integers.
    fn recover_stored_kind(value: DriverValue) -> DriverValue {
        match value {
            DriverValue::Integer(0) => DriverValue::Bool(false),
            DriverValue::Integer(1) => DriverValue::Bool(true),
            value => value,
        }
    }
}

impl ToDriverValue for DateTime<Utc> {
    fn to_driver_value(&self) -> DriverValue {
        DriverValue::Timestamp(*self)
    }
}

impl FromDriverValue for DateTime<Utc> {
    fn from_driver_value(value: DriverValue) -> ScanResult<Self> {
        match value {
            DriverValue::Timestamp(v) => Ok(v),
            other => Err(ScanError::mismatch::<Self>(TIMESTAMP, other.kind())),
        }
    }

    /// Accepts RFC 3339 text and the `TIMESTAMP_TEXT_FORMAT` layout.
    fn recover_stored_kind(value: DriverValue) -> DriverValue {
        let parsed = match &value {
            DriverValue::Text(text) => DateTime::parse_from_rfc3339(text)
                .or_else(|_| DateTime::parse_from_str(text, TIMESTAMP_TEXT_FORMAT))
                .ok(),
            _ => None,
        };
        match parsed {
            Some(parsed) => DriverValue::Timestamp(parsed.with_timezone(&Utc)),
            None => value,
        }
    }
}

/// Uuids are written in hyphenated text form.
impl ToDriverValue for Uuid {
    fn to_driver_value(&self) -> DriverValue {
        DriverValue::Text(self.hyphenated().to_string())
    }
}

/// Uuids are read from text, or from a 16-byte blob.
impl FromDriverValue for Uuid {
    fn from_driver_value(value: DriverValue) -> ScanResult<Self> {
        match value {
            DriverValue::Text(v) => Ok(Uuid::parse_str(&v)?),
            DriverValue::Blob(v) => Ok(Uuid::from_slice(&v)?),
            other => Err(ScanError::mismatch::<Self>(TEXT_OR_BLOB, other.kind())),
        }
    }
}
