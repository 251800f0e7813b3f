//! Generation parameters.

use crate::{CodeError, Result};
use serde::Serialize;

/// Parameters for code generation.
///
/// `fixed_d2` pins the second digit to an exact value. `preferred_d3`
/// biases the third digit: when set, the generator uses it most of the
/// time and falls back to a uniform draw otherwise. Both digits are
/// validated at construction so the generator never has to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenParams {
    fixed_d2: Option<u8>,
    preferred_d3: Option<u8>,
}

impl GenParams {
    /// Create parameters, rejecting digits outside 0..=9.
    pub fn new(fixed_d2: Option<u8>, preferred_d3: Option<u8>) -> Result<Self> {
        for value in [fixed_d2, preferred_d3].into_iter().flatten() {
            if value > 9 {
                return Err(CodeError::DigitRange { value });
            }
        }
        Ok(Self {
            fixed_d2,
            preferred_d3,
        })
    }

    /// The pinned second digit, if any.
    pub fn fixed_d2(&self) -> Option<u8> {
        self.fixed_d2
    }

    /// The preferred third digit, if any.
    pub fn preferred_d3(&self) -> Option<u8> {
        self.preferred_d3
    }
}
