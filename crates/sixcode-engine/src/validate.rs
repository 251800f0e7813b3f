//! Code validation against the checksum rule.

use crate::checksum;
use serde::Serialize;
use sixcode_types::{Code, Result};

/// Outcome of validating one code.
///
/// Carries the parsed code and the expected checksum digit alongside the
/// verdict, so callers can report both pass/fail and the corrective hint
/// ("change d4 to `expected_d4`") without recomputing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub code: Code,
    pub is_valid: bool,
    pub expected_d4: u8,
}

/// Parse `input` and check its checksum digit.
///
/// Format errors from parsing propagate unchanged.
pub fn validate(input: &str, offset: u8) -> Result<Validation> {
    let code = Code::parse(input)?;
    let expected_d4 = checksum::expected_d4(&code, offset);
    Ok(Validation {
        code,
        is_valid: code.get(4) == expected_d4,
        expected_d4,
    })
}
