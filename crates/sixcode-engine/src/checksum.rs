//! The checksum rule: `d4 ≡ d1 + d2 + d3 + d5 + d6 + offset (mod 10)`.

use sixcode_types::Code;

/// Fixed additive constant in the checksum formula.
pub const DEFAULT_OFFSET: u8 = 3;

/// Compute the checksum digit a code should carry at position 4.
///
/// Sums d1, d2, d3, d5, d6 and the offset, modulo 10. The code's actual
/// d4 plays no part. This is the single source of truth for the rule;
/// validation and generation both go through it.
pub fn expected_d4(code: &Code, offset: u8) -> u8 {
    let d = code.digits();
    let sum = u32::from(d[0])
        + u32::from(d[1])
        + u32::from(d[2])
        + u32::from(d[4])
        + u32::from(d[5])
        + u32::from(offset);
    (sum % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        Code::parse(s).unwrap()
    }

    #[test]
    fn test_expected_d4_formula() {
        // 9+5+1+9+3+3 = 30 → 0
        assert_eq!(expected_d4(&code("951993"), DEFAULT_OFFSET), 0);
        // 1+2+3+5+6+3 = 20 → 0
        assert_eq!(expected_d4(&code("123456"), DEFAULT_OFFSET), 0);
    }

    #[test]
    fn test_expected_d4_ignores_actual_d4() {
        for d4 in ["951093", "951193", "951993"] {
            assert_eq!(expected_d4(&code(d4), DEFAULT_OFFSET), 0);
        }
    }

    #[test]
    fn test_offset_is_a_parameter() {
        assert_eq!(expected_d4(&code("000000"), 0), 0);
        assert_eq!(expected_d4(&code("000000"), 3), 3);
        assert_eq!(expected_d4(&code("000000"), 13), 3);
    }

    #[test]
    fn test_no_overflow_at_maximum() {
        // 9*5 + 255 = 300, which must not wrap before the mod.
        assert_eq!(expected_d4(&code("999999"), 255), 0);
    }
}
