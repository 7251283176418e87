//! In-memory optional-value model.
//!
//! # Responsibility
//! - Define the `Maybe<T>` container and its accessor set.
//! - Stay free of any codec or driver dependency; adapters build on top.
//!
//! # Invariants
//! - Presence and payload are a single value; no half-initialized state exists.

pub mod maybe;
