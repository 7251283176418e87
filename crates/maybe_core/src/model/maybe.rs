//! Optional-value container.
//!
//! # Responsibility
//! - Model "a `T` is present" vs "no `T` is present" without sentinel values of `T`.
//! - Offer three retrieval contracts: fatal (`unwrap`), defaulted (`get_or_else`)
//!   and total (`get`).
//!
//! # Invariants
//! - `is_some()` and `is_none()` are mutually exclusive and exhaustive.
//! - The payload of an absent container is never exposed.
//! - Decode paths replace the whole state in one assignment.

use std::fmt::{Debug, Formatter};

const UNWRAP_ABSENT_MESSAGE: &str = "called unwrap on an absent Maybe value";

/// A value of `T` that may be absent.
///
/// Prefer [`Maybe::get`] or [`Maybe::get_or_else`] at call sites that have
/// not already checked [`Maybe::is_some`]; [`Maybe::unwrap`] panics on absence.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Maybe<T> {
    inner: Option<T>,
}

/// Shorthand for [`Maybe::some`].
pub fn some<T>(value: T) -> Maybe<T> {
    Maybe::some(value)
}

/// Shorthand for [`Maybe::none`].
pub fn none<T>() -> Maybe<T> {
    Maybe::none()
}

impl<T> Maybe<T> {
    /// Creates a container holding `value`.
    pub const fn some(value: T) -> Self {
        Self { inner: Some(value) }
    }

    /// Creates an empty container.
    pub const fn none() -> Self {
        Self { inner: None }
    }

    pub const fn is_some(&self) -> bool {
        self.inner.is_some()
    }

    pub const fn is_none(&self) -> bool {
        self.inner.is_none()
    }

    /// Returns the payload.
    ///
    /// # Panics
    /// Panics when the container is empty. This signals a caller logic error;
    /// use [`Maybe::get`] when absence is an expected outcome.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.inner {
            Some(value) => value,
            None => panic!("{}", UNWRAP_ABSENT_MESSAGE),
        }
    }

    /// Returns the payload, or `default` when the container is empty.
    pub fn get_or_else(self, default: T) -> T {
        self.inner.unwrap_or(default)
    }

    /// Returns `(payload, true)`, or `(T::default(), false)` when empty.
    pub fn get(self) -> (T, bool)
    where
        T: Default,
    {
        match self.inner {
            Some(value) => (value, true),
            None => (T::default(), false),
        }
    }

    /// Borrows the payload without consuming the container.
    pub const fn as_ref(&self) -> Maybe<&T> {
        Maybe {
            inner: self.inner.as_ref(),
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.inner
    }

    /// Replaces the whole state in place; used by adapter decode paths.
    pub(crate) fn replace_with(&mut self, other: Self) {
        *self = other;
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self { inner: value }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.inner
    }
}

impl<T: Debug> Debug for Maybe<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Some(value) => f.debug_tuple("Some").field(value).finish(),
            None => f.write_str("None"),
        }
    }
}
