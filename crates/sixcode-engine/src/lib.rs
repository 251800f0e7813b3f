//! The sixcode engine: checksum rule, validation, generation, and the
//! checksum-preserving transform for six-digit codes.
//!
//! ```text
//! text input → Code::parse → validate / transform
//! GenParams + RNG → generate → Code
//! ```
//!
//! Every operation is stateless and synchronous. Generation draws from a
//! caller-supplied RNG so tests run fully deterministic with a seeded
//! `StdRng`.

pub mod checksum;
pub mod generate;
pub mod transform;
pub mod validate;

pub use checksum::{expected_d4, DEFAULT_OFFSET};
pub use generate::{generate, generate_batch, PREFERRED_D3_PROBABILITY};
pub use transform::add1_d4_d6;
pub use validate::{validate, Validation};
