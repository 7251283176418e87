//! `rusqlite` registration for `Maybe<T>` and `DriverValue`.
//!
//! # Responsibility
//! - Bind `Maybe<T>` as a statement parameter through `ToDriverValue`
//!   (absent binds SQL `NULL`).
//! - Read `Maybe<T>` from a row column through `FromDriverValue`
//!   (SQL `NULL` reads as absent; every other value is read strictly).
//! - Lift raw SQLite values into `DriverValue`.
//!
//! # Invariants
//! - SQLite has no boolean or timestamp storage class: `Bool` binds as
//!   `INTEGER 0/1` and `Timestamp` binds as `TIMESTAMP_TEXT_FORMAT` text.
//!   Reads recover those kinds only for targets that ask for them.

use super::{DriverValue, FromDriverValue, ScanError, ToDriverValue, TIMESTAMP_TEXT_FORMAT};
use crate::model::maybe::Maybe;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, Value, ValueRef};
use rusqlite::ToSql;

impl<T> ToSql for Maybe<T>
where
    T: ToDriverValue,
{
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Owned(into_sql_value(self.to_driver_value())))
    }
}

impl<T> FromSql for Maybe<T>
where
    T: FromDriverValue,
{
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let value = Self::recover_stored_kind(DriverValue::column_result(value)?);
        Ok(Self::from_driver_value(value)?)
    }
}

impl ToSql for DriverValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Self::Text(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
            Self::Blob(v) => ToSqlOutput::Borrowed(ValueRef::Blob(v)),
            other => ToSqlOutput::Owned(into_sql_value(other.clone())),
        })
    }
}

/// SQLite storage classes map onto `Null`, `Integer`, `Real`, `Text` and `Blob`.
impl FromSql for DriverValue {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(match value {
            ValueRef::Null => Self::Null,
            ValueRef::Integer(v) => Self::Integer(v),
            ValueRef::Real(v) => Self::Real(v),
            ValueRef::Text(v) => Self::Text(
                String::from_utf8(v.to_vec()).map_err(|err| FromSqlError::Other(Box::new(err)))?,
            ),
            ValueRef::Blob(v) => Self::Blob(v.to_vec()),
        })
    }
}

impl From<ScanError> for FromSqlError {
    fn from(value: ScanError) -> Self {
        Self::Other(Box::new(value))
    }
}

fn into_sql_value(value: DriverValue) -> Value {
    match value {
        DriverValue::Null => Value::Null,
        DriverValue::Integer(v) => Value::Integer(v),
        DriverValue::Real(v) => Value::Real(v),
        DriverValue::Text(v) => Value::Text(v),
        DriverValue::Blob(v) => Value::Blob(v),
        DriverValue::Bool(v) => Value::Integer(i64::from(v)),
        DriverValue::Timestamp(v) => Value::Text(v.format(TIMESTAMP_TEXT_FORMAT).to_string()),
    }
}
