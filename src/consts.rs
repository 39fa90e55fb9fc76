//! Shared Scalar Constants
//!
//! Convenience values used across the constraint and shape code. Every entry
//! is a `const` evaluated at compile time with the same integer routines the
//! runtime uses, so `ONE_THIRD` here is bit-identical to `Fp::ONE / 3` at
//! runtime.
//!
//! Literals below the 16-bit resolution (`C1EM9`, `C1EM14`, ...) truncate to
//! zero. They are kept so formulas read the same at any precision.

use crate::fixed::Fp;

// ============================================================================
// Integers
// ============================================================================

pub const C0: Fp = Fp::ZERO;
pub const C1: Fp = Fp::ONE;
pub const C2: Fp = Fp::from_int(2);
pub const C3: Fp = Fp::from_int(3);
pub const C5: Fp = Fp::from_int(5);
pub const C6: Fp = Fp::from_int(6);
pub const C16: Fp = Fp::from_int(16);
pub const C24: Fp = Fp::from_int(24);
pub const C50: Fp = Fp::from_int(50);
pub const C60: Fp = Fp::from_int(60);
pub const C120: Fp = Fp::from_int(120);
pub const C180: Fp = Fp::from_int(180);
pub const C90000: Fp = Fp::from_int(90_000);
pub const C600000: Fp = Fp::from_int(600_000);

// ============================================================================
// Decimal literals
// ============================================================================

pub const C0P001: Fp = Fp::from_decimal(1, 3);
pub const C0P005: Fp = Fp::from_decimal(5, 3);
pub const C0P01: Fp = Fp::from_decimal(1, 2);
pub const C0P0625: Fp = Fp::from_decimal(625, 4);
pub const C0P1: Fp = Fp::from_decimal(1, 1);
pub const C0P15: Fp = Fp::from_decimal(15, 2);
pub const C0P2: Fp = Fp::from_decimal(2, 1);
pub const C0P25: Fp = Fp::from_decimal(25, 2);
pub const C0P3: Fp = Fp::from_decimal(3, 1);
pub const C0P5: Fp = Fp::from_decimal(5, 1);
pub const C0P6: Fp = Fp::from_decimal(6, 1);
pub const C0P75: Fp = Fp::from_decimal(75, 2);
pub const C0P8: Fp = Fp::from_decimal(8, 1);
pub const C0P9: Fp = Fp::from_decimal(9, 1);
pub const C0P99: Fp = Fp::from_decimal(99, 2);
pub const C1P1: Fp = Fp::from_decimal(11, 1);
pub const C1P5: Fp = Fp::from_decimal(15, 1);
pub const C0P0833333333: Fp = Fp::from_decimal(833_333_333, 10);
pub const CM0P25: Fp = Fp::from_decimal(-25, 2);
pub const CM0P9999: Fp = Fp::from_decimal(-9_999, 4);

pub const C1EM4: Fp = Fp::from_decimal(1, 4);
pub const C1EM5: Fp = Fp::from_decimal(1, 5);
pub const C1EM7: Fp = Fp::from_decimal(1, 7);
pub const C1EM9: Fp = Fp::from_decimal(1, 9);
pub const CM1EM9: Fp = Fp::from_decimal(-1, 9);
pub const C1EM10: Fp = Fp::from_decimal(1, 10);
pub const C1EM14: Fp = Fp::from_decimal(1, 14);

// ============================================================================
// Fractions
// ============================================================================

pub const ONE_THIRD: Fp = C1.fixed_div(C3);
pub const ONE_EIGHTH: Fp = C1.fixed_div(Fp::from_int(8));
pub const ONE_TWELFTH: Fp = C1.fixed_div(Fp::from_int(12));
pub const FOUR_THIRDS: Fp = Fp::from_int(4).fixed_div(C3);
pub const TWO_FIFTHS: Fp = C2.fixed_div(C5);

/// `(1 + √5) / 2`
pub const GOLDEN_RATIO: Fp = C1.wrapping_add(C5.sqrt()).fixed_div(C2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_values() {
        assert_eq!(ONE_THIRD.raw, 21_845);
        assert_eq!(ONE_THIRD, Fp::ONE / 3);
        assert_eq!(ONE_EIGHTH, Fp::from_decimal(125, 3));
        assert_eq!(TWO_FIFTHS, Fp::from_decimal(4, 1));
        assert_eq!(ONE_TWELFTH.raw, 5_461);
    }

    #[test]
    fn test_decimal_literals() {
        assert_eq!(C0P5.raw, 32_768);
        assert_eq!(C0P25.raw, 16_384);
        assert_eq!(CM0P25.raw, -16_384);
        assert_eq!(C0P0625.raw, 4_096);
        assert_eq!(C0P75.raw, 49_152);
        assert_eq!(C0P3.raw, 19_660);
        assert_eq!(C0P1.raw, 6_553);
        assert_eq!(CM0P9999.raw, -65_529);
        assert_eq!(C1EM4.raw, 6);
    }

    #[test]
    fn test_sub_resolution_literals_truncate() {
        assert_eq!(C1EM9, Fp::ZERO);
        assert_eq!(CM1EM9, Fp::ZERO);
        assert_eq!(C1EM14, Fp::ZERO);
        assert_eq!(C1EM5.raw, 0);
    }

    #[test]
    fn test_golden_ratio() {
        let golden = GOLDEN_RATIO;
        // phi^2 == phi + 1
        let diff = (golden * golden - golden - Fp::ONE).abs();
        assert!(diff.raw <= 4, "{golden:?}");
    }
}
