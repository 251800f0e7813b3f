//! Code generation satisfying the checksum rule by construction.

use crate::checksum;
use rand::Rng;
use sixcode_types::{Code, CodeError, GenParams, Result, MAX_BATCH};

/// Probability that a set `preferred_d3` is used for the third digit.
///
/// On the remaining draws d3 is uniform, so the preferred value still
/// shows up slightly more often than 80% overall.
pub const PREFERRED_D3_PROBABILITY: f64 = 0.8;

/// Generate one code.
///
/// d1, d5 and d6 are uniform draws; d2 honours `fixed_d2`; d3 honours
/// `preferred_d3` with [`PREFERRED_D3_PROBABILITY`]. d4 is derived from
/// the checksum rule, never drawn, so the result always validates under
/// the same offset.
pub fn generate<R: Rng + ?Sized>(params: &GenParams, offset: u8, rng: &mut R) -> Code {
    let d1 = rng.random_range(0..10u8);
    let d2 = match params.fixed_d2() {
        Some(fixed) => fixed,
        None => rng.random_range(0..10),
    };
    let d3 = match params.preferred_d3() {
        Some(preferred) if rng.random_bool(PREFERRED_D3_PROBABILITY) => preferred,
        Some(_) => rng.random_range(0..10),
        None => rng.random_range(0..10),
    };
    let d5 = rng.random_range(0..10);
    let d6 = rng.random_range(0..10);

    let mut digits = [d1, d2, d3, 0, d5, d6];
    digits[3] = checksum::expected_d4(&Code::from_digits_mod10(digits), offset);
    Code::from_digits_mod10(digits)
}

/// Generate `n` codes sequentially.
///
/// `n` must be in 1..=[`MAX_BATCH`]; the bound is checked before any
/// code is drawn.
pub fn generate_batch<R: Rng + ?Sized>(
    n: usize,
    params: &GenParams,
    offset: u8,
    rng: &mut R,
) -> Result<Vec<Code>> {
    if n == 0 || n > MAX_BATCH {
        return Err(CodeError::BatchRange { requested: n });
    }
    Ok((0..n).map(|_| generate(params, offset, rng)).collect())
}
