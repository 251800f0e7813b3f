//! The d4/d6 increment transform.

use sixcode_types::Code;

/// +1 modulo 10: 9 wraps to 0, no carry into neighbours.
fn add1_mod10(d: u8) -> u8 {
    (d + 1) % 10
}

/// Increment d4 and d6 each by 1 modulo 10.
///
/// Shifts the checksum digit and one summed digit by the same residue,
/// so both sides of `d4 ≡ d1+d2+d3+d5+d6+offset (mod 10)` move together:
/// a valid code stays valid, an invalid one stays invalid. Ten
/// applications return the starting code.
pub fn add1_d4_d6(code: Code) -> Code {
    let mut digits = code.digits();
    digits[3] = add1_mod10(digits[3]);
    digits[5] = add1_mod10(digits[5]);
    Code::from_digits_mod10(digits)
}
