//! Deterministic Elementary Functions
//!
//! Square root, trigonometry and the usual scalar helpers, written with
//! integer operations on [`Fp`] raw values only. No hardware floating point
//! is touched, so every platform produces the same bits.
//!
//! # Methods
//!
//! - **Square root**: bitwise integer square root of `raw << 16`, rounded to
//!   nearest. Monotonic and within one raw unit of the exact root.
//! - **sin / cos**: quarter-wave table with linear interpolation. The input
//!   is wrapped to `[0, 2π)` first, so any angle is accepted.
//! - **atan / atan2 / asin / acos**: `atan` table on `[0, 1]`, extended by
//!   `atan(x) = π/2 - atan(1/x)` and quadrant folding.
//!
//! `sin(0) == 0` and `cos(0) == 1` hold exactly.

use crate::fixed::{Fp, FRACTIONAL_BITS, ONE_RAW};
use crate::lut::{ATAN_TABLE, SEGMENTS, SIN_TABLE};

const FRACTION_MASK: i64 = ONE_RAW - 1;

/// One quarter turn in table units (`SEGMENTS` entries with 16 bits of
/// interpolation fraction each)
const QUARTER_TURN: i64 = (SEGMENTS as i64) << FRACTIONAL_BITS;
const FULL_TURN: i64 = QUARTER_TURN * 4;

// ============================================================================
// Integer Square Root
// ============================================================================

/// Integer square root rounded to nearest
const fn isqrt_rounded(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }

    let mut remainder = n;
    let mut root: u128 = 0;
    let mut bit: u128 = 1 << ((127 - n.leading_zeros()) & !1);

    while bit != 0 {
        if remainder >= root + bit {
            remainder -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }

    // remainder = n - root^2; round up when n is past (root + 1/2)^2
    if remainder > root {
        root + 1
    } else {
        root
    }
}

impl Fp {
    // ========================================================================
    // Rounding and sign
    // ========================================================================

    /// Absolute value (`MIN` stays `MIN`)
    #[inline]
    pub const fn abs(self) -> Self {
        Self::from_raw(self.raw.wrapping_abs())
    }

    /// -1, 0 or 1
    #[inline]
    pub const fn sign(self) -> Self {
        Self::from_int(self.raw.signum() as i32)
    }

    /// Largest integer not greater than `self`
    #[inline]
    pub const fn floor(self) -> Self {
        Self::from_raw(self.raw & !FRACTION_MASK)
    }

    /// Smallest integer not less than `self`
    #[inline]
    pub const fn ceil(self) -> Self {
        if self.raw & FRACTION_MASK == 0 {
            self
        } else {
            Self::from_raw((self.raw & !FRACTION_MASK).wrapping_add(ONE_RAW))
        }
    }

    /// Nearest integer, ties to even
    pub const fn round(self) -> Self {
        let fraction = self.raw & FRACTION_MASK;
        let base = self.raw & !FRACTION_MASK;
        let half = ONE_RAW / 2;
        if fraction > half || (fraction == half && (base >> FRACTIONAL_BITS) & 1 == 1) {
            Self::from_raw(base.wrapping_add(ONE_RAW))
        } else {
            Self::from_raw(base)
        }
    }

    /// Fractional part, always in `[0, 1)`
    #[inline]
    pub const fn fract(self) -> Self {
        Self::from_raw(self.raw & FRACTION_MASK)
    }

    // ========================================================================
    // Square root
    // ========================================================================

    /// Square root. Negative input returns zero.
    pub const fn sqrt(self) -> Self {
        if self.raw <= 0 {
            return Self::ZERO;
        }
        let root = isqrt_rounded((self.raw as u128) << FRACTIONAL_BITS);
        Self::from_raw(root as i64)
    }

    // ========================================================================
    // Trigonometry
    // ========================================================================

    /// Sine of an angle in radians
    pub fn sin(self) -> Self {
        Self::from_raw(sin_at(turn_position(self)))
    }

    /// Cosine of an angle in radians
    pub fn cos(self) -> Self {
        let position = (turn_position(self) + QUARTER_TURN) % FULL_TURN;
        Self::from_raw(sin_at(position))
    }

    /// Simultaneous sin and cos
    pub fn sin_cos(self) -> (Self, Self) {
        let position = turn_position(self);
        (
            Self::from_raw(sin_at(position)),
            Self::from_raw(sin_at((position + QUARTER_TURN) % FULL_TURN)),
        )
    }

    /// Tangent; returns `MAX` where the cosine is zero
    pub fn tan(self) -> Self {
        let (sin, cos) = self.sin_cos();
        sin / cos
    }

    /// Arctangent in `[-π/2, π/2]`
    pub fn atan(self) -> Self {
        if self.raw == 0 {
            return Self::ZERO;
        }
        let magnitude = self.raw.unsigned_abs();
        let angle = if magnitude <= ONE_RAW as u64 {
            atan_unit(magnitude as i64)
        } else {
            let inverse = Self::ONE / Self::from_raw(magnitude.min(i64::MAX as u64) as i64);
            Self::PI_HALF.raw - atan_unit(inverse.raw)
        };
        Self::from_raw(if self.raw < 0 { -angle } else { angle })
    }

    /// Four-quadrant arctangent of `y / x` in `[-π, π]`
    pub fn atan2(y: Self, x: Self) -> Self {
        if x.raw == 0 && y.raw == 0 {
            return Self::ZERO;
        }

        if y.raw.unsigned_abs() <= x.raw.unsigned_abs() {
            let base = (y / x).atan();
            if x.raw > 0 {
                base
            } else if y.raw >= 0 {
                base + Self::PI
            } else {
                base - Self::PI
            }
        } else {
            let quarter = if y.raw > 0 {
                Self::PI_HALF
            } else {
                -Self::PI_HALF
            };
            quarter - (x / y).atan()
        }
    }

    /// Arcsine in `[-π/2, π/2]`; input is clamped to `[-1, 1]`
    pub fn asin(self) -> Self {
        let x = clamp(self, Self::MINUS_ONE, Self::ONE);
        Self::atan2(x, (Self::ONE - x * x).sqrt())
    }

    /// Arccosine in `[0, π]`; input is clamped to `[-1, 1]`
    pub fn acos(self) -> Self {
        let x = clamp(self, Self::MINUS_ONE, Self::ONE);
        Self::atan2((Self::ONE - x * x).sqrt(), x)
    }
}

/// Position of `angle` on the table circle, in `[0, FULL_TURN)`
fn turn_position(angle: Fp) -> i64 {
    let wrapped = angle.raw.rem_euclid(Fp::PI2.raw);
    ((wrapped as i128 * FULL_TURN as i128) / Fp::PI2.raw as i128) as i64
}

fn sin_at(position: i64) -> i64 {
    let within = position % QUARTER_TURN;
    match position / QUARTER_TURN {
        0 => interpolate(&SIN_TABLE, within),
        1 => interpolate(&SIN_TABLE, QUARTER_TURN - within),
        2 => -interpolate(&SIN_TABLE, within),
        _ => -interpolate(&SIN_TABLE, QUARTER_TURN - within),
    }
}

/// `atan` for raw values in `[0, ONE]`
fn atan_unit(raw: i64) -> i64 {
    interpolate(&ATAN_TABLE, raw * SEGMENTS as i64)
}

/// Linear interpolation in a `SEGMENTS + 1` table at a Q16 index
fn interpolate(table: &[i64; SEGMENTS + 1], position: i64) -> i64 {
    let index = (position >> FRACTIONAL_BITS) as usize;
    if index >= SEGMENTS {
        return table[SEGMENTS];
    }
    let fraction = position & FRACTION_MASK;
    let a = table[index];
    let b = table[index + 1];
    a + (((b - a) * fraction) >> FRACTIONAL_BITS)
}

// ============================================================================
// Scalar Helpers
// ============================================================================

/// Pi divided by two, by fixed-point division (rounded)
pub const PI_OVER_2: Fp = Fp::PI.fixed_div(Fp::from_int(2));

/// Pi divided by four, by fixed-point division (rounded)
pub const PI_OVER_4: Fp = Fp::PI.fixed_div(Fp::from_int(4));

/// Clamp `value` into `[min, max]`. Never panics; `min` wins if the bounds
/// are crossed.
#[inline]
pub fn clamp(value: Fp, min: Fp, max: Fp) -> Fp {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Larger of two values
#[inline]
pub fn max(a: Fp, b: Fp) -> Fp {
    if a > b {
        a
    } else {
        b
    }
}

/// Smaller of two values
#[inline]
pub fn min(a: Fp, b: Fp) -> Fp {
    if a < b {
        a
    } else {
        b
    }
}

/// Linear interpolation `a + (b - a) * t` (t is not clamped)
#[inline]
pub fn lerp(a: Fp, b: Fp, t: Fp) -> Fp {
    a + (b - a) * t
}

/// Degrees to radians
#[inline]
pub fn to_radians(degrees: Fp) -> Fp {
    degrees * (Fp::PI / 180)
}

/// Radians to degrees
#[inline]
pub fn to_degrees(radians: Fp) -> Fp {
    radians * (Fp::from_int(180) / Fp::PI)
}

/// Remainder of `dividend / divisor` with the quotient rounded to nearest
/// (ties to even), like IEEE 754 `remainder`
pub fn ieee_remainder(dividend: Fp, divisor: Fp) -> Fp {
    dividend - divisor * (dividend / divisor).round()
}

/// Reduce an angle into `[-π, π)`
pub fn wrap_angle(angle: Fp) -> Fp {
    let angle = ieee_remainder(angle, Fp::PI2);
    if angle < -Fp::PI {
        angle + Fp::PI2
    } else if angle >= Fp::PI {
        angle - Fp::PI2
    } else {
        angle
    }
}

/// Limit the magnitude of `value` to `cap`, keeping its sign
#[inline]
pub fn clamp_magnitude(value: Fp, cap: Fp) -> Fp {
    if value.abs() > cap {
        if value.is_negative() {
            -cap
        } else {
            cap
        }
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(text: &str) -> Fp {
        Fp::parse(text).unwrap()
    }

    fn assert_near(actual: Fp, expected: Fp, tolerance_raw: i64) {
        assert!(
            (actual.raw - expected.raw).abs() <= tolerance_raw,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_sqrt_exact_squares() {
        assert_eq!(Fp::from_int(4).sqrt(), Fp::from_int(2));
        assert_eq!(Fp::from_int(81).sqrt(), Fp::from_int(9));
        assert_eq!(fp("0.25").sqrt(), fp("0.5"));
        assert_eq!(Fp::ZERO.sqrt(), Fp::ZERO);
        assert_eq!(Fp::from_int(-4).sqrt(), Fp::ZERO);
    }

    #[test]
    fn test_sqrt_within_one_unit() {
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..5_000 {
            let raw = rng.i64(1..(1i64 << 48));
            let root = Fp::from_raw(raw).sqrt().raw as i128;
            let target = (raw as i128) << 16;
            // true root lies within half a unit of the result
            assert!((root - 1) * (root - 1) <= target, "raw {raw}");
            assert!((root + 1) * (root + 1) >= target, "raw {raw}");
        }
    }

    #[test]
    fn test_sqrt_monotonic() {
        let mut previous = Fp::ZERO;
        for raw in (0..2_000_000i64).step_by(997) {
            let root = Fp::from_raw(raw).sqrt();
            assert!(root >= previous);
            previous = root;
        }
    }

    #[test]
    fn test_sin_cos_at_zero() {
        assert_eq!(Fp::ZERO.sin(), Fp::ZERO);
        assert_eq!(Fp::ZERO.cos(), Fp::ONE);
        assert_eq!(Fp::ZERO.sin_cos(), (Fp::ZERO, Fp::ONE));
    }

    #[test]
    fn test_sin_known_angles() {
        assert_near(Fp::PI_HALF.sin(), Fp::ONE, 1);
        assert_near(Fp::PI.sin(), Fp::ZERO, 1);
        assert_near((-Fp::PI_HALF).sin(), Fp::MINUS_ONE, 1);
        assert_near(PI_OVER_4.sin(), fp("0.70711"), 3);
        assert_near((Fp::PI / 6).sin(), fp("0.5"), 3);
        assert_near(Fp::PI.cos(), Fp::MINUS_ONE, 1);
        assert_near((Fp::PI / 3).cos(), fp("0.5"), 3);
    }

    #[test]
    fn test_sin_continuity() {
        let step = Fp::from_raw(64);
        let mut angle = -Fp::from_int(7);
        let mut previous = angle.sin();
        while angle < Fp::from_int(7) {
            angle += step;
            let current = angle.sin();
            // |d sin| <= |d angle| plus interpolation rounding
            assert!((current.raw - previous.raw).abs() <= step.raw + 2);
            previous = current;
        }
    }

    #[test]
    fn test_sin_cos_identity() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..1_000 {
            let angle = Fp::from_raw(rng.i64(-(40 << 16)..(40 << 16)));
            let (s, c) = angle.sin_cos();
            assert_near(s * s + c * c, Fp::ONE, 8);
            assert_eq!(s, angle.sin());
            assert_eq!(c, angle.cos());
        }
    }

    #[test]
    fn test_atan() {
        assert_eq!(Fp::ZERO.atan(), Fp::ZERO);
        assert_near(Fp::ONE.atan(), Fp::PI_QUARTER, 2);
        assert_near(Fp::MINUS_ONE.atan(), -Fp::PI_QUARTER, 2);
        assert_near(Fp::from_int(1000).atan(), Fp::PI_HALF, 70);
        assert_near(Fp::MAX.atan(), Fp::PI_HALF, 1);
    }

    #[test]
    fn test_atan2_quadrants() {
        let one = Fp::ONE;
        assert_near(Fp::atan2(one, one), Fp::PI_QUARTER, 2);
        assert_near(Fp::atan2(one, -one), Fp::PI_QUARTER * 3, 3);
        assert_near(Fp::atan2(-one, -one), -Fp::PI_QUARTER * 3, 3);
        assert_near(Fp::atan2(-one, one), -Fp::PI_QUARTER, 2);
        assert_eq!(Fp::atan2(one, Fp::ZERO), Fp::PI_HALF);
        assert_eq!(Fp::atan2(-one, Fp::ZERO), -Fp::PI_HALF);
        assert_eq!(Fp::atan2(Fp::ZERO, -one), Fp::PI);
        assert_eq!(Fp::atan2(Fp::ZERO, Fp::ZERO), Fp::ZERO);
    }

    #[test]
    fn test_acos_asin() {
        assert_eq!(Fp::ONE.acos(), Fp::ZERO);
        assert_eq!(Fp::MINUS_ONE.acos(), Fp::PI);
        assert_eq!(Fp::ZERO.acos(), Fp::PI_HALF);
        assert_near(fp("0.5").acos(), Fp::PI / 3, 4);
        assert_near(fp("0.5").asin(), Fp::PI / 6, 4);
        // out-of-range input is clamped
        assert_eq!(Fp::from_int(2).acos(), Fp::ZERO);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(fp("2.5").round(), Fp::from_int(2));
        assert_eq!(fp("3.5").round(), Fp::from_int(4));
        assert_eq!(fp("-2.5").round(), Fp::from_int(-2));
        assert_eq!(fp("-2.6").round(), Fp::from_int(-3));
        assert_eq!(fp("-2.25").floor(), Fp::from_int(-3));
        assert_eq!(fp("-2.25").ceil(), Fp::from_int(-2));
        assert_eq!(fp("2.25").ceil(), Fp::from_int(3));
        assert_eq!(fp("-2.25").fract(), fp("0.75"));
        assert_eq!(fp("-3.5").sign(), Fp::MINUS_ONE);
        assert_eq!(fp("-3.5").abs(), fp("3.5"));
    }

    #[test]
    fn test_clamp_min_max() {
        let lo = Fp::ZERO;
        let hi = Fp::ONE;
        assert_eq!(clamp(fp("-0.5"), lo, hi), lo);
        assert_eq!(clamp(fp("1.5"), lo, hi), hi);
        assert_eq!(clamp(fp("0.5"), lo, hi), fp("0.5"));
        // crossed bounds do not panic
        assert_eq!(clamp(fp("0.5"), hi, lo), hi);
        assert_eq!(max(lo, hi), hi);
        assert_eq!(min(lo, hi), lo);
    }

    #[test]
    fn test_lerp() {
        let a = Fp::from_int(2);
        let b = Fp::from_int(6);
        assert_eq!(lerp(a, b, Fp::ZERO), a);
        assert_eq!(lerp(a, b, Fp::ONE), b);
        assert_eq!(lerp(a, b, fp("0.25")), Fp::from_int(3));
    }

    #[test]
    fn test_degree_conversion() {
        assert_near(to_radians(Fp::from_int(180)), Fp::PI, 100);
        assert_near(to_degrees(Fp::PI), Fp::from_int(180), 8);
        assert_eq!(PI_OVER_2.raw, 102_944);
        assert_eq!(PI_OVER_4.raw, 51_472);
    }

    #[test]
    fn test_wrap_angle() {
        assert_eq!(wrap_angle(Fp::ONE), Fp::ONE);
        assert_near(wrap_angle(Fp::PI2 + Fp::ONE), Fp::ONE, 1);
        assert_near(wrap_angle(-Fp::PI2 - Fp::ONE), Fp::MINUS_ONE, 1);
        let wrapped = wrap_angle(Fp::from_int(100));
        assert!(wrapped >= -Fp::PI && wrapped < Fp::PI);
        assert_eq!(wrap_angle(Fp::PI), -Fp::PI);
    }

    #[test]
    fn test_clamp_magnitude() {
        let cap = Fp::from_int(2);
        assert_eq!(clamp_magnitude(Fp::from_int(5), cap), cap);
        assert_eq!(clamp_magnitude(Fp::from_int(-5), cap), -cap);
        assert_eq!(clamp_magnitude(Fp::ONE, cap), Fp::ONE);
    }
}
