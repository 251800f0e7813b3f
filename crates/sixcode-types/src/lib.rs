//! Shared types for the sixcode toolkit.
//!
//! This crate defines the [`Code`] value type, generation parameters,
//! and the error type used across the engine and the shell.

mod code;
mod error;
mod params;

pub use code::{Code, CODE_LEN};
pub use error::{CodeError, MAX_BATCH};
pub use params::GenParams;

/// Result type used throughout the sixcode crates.
pub type Result<T> = std::result::Result<T, CodeError>;
