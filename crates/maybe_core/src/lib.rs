//! Optional-value container with JSON and SQL scalar adapters.
//!
//! `Maybe<T>` keeps "explicitly null", "absent" and "zero value" apart across
//! in-memory values, JSON text and database driver values.

pub mod codec;
pub mod logging;
pub mod model;
pub mod scalar;

pub use codec::{from_text, from_text_into, to_text, to_text_vec, CodecError, CodecResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::maybe::{none, some, Maybe};
pub use scalar::{DriverKind, DriverValue, FromDriverValue, ScanError, ScanResult, ToDriverValue};

/// Returns the crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
