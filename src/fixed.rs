//! Deterministic Fixed-Point Scalar
//!
//! > "Same bits in, same bits out."
//!
//! # Overview
//!
//! [`Fp`] is a signed 64-bit fixed-point number with 16 fractional bits
//! (`value = raw / 2^16`). Every operation works on the raw integer only, so
//! results are bit-identical on x86, ARM, WASM or anything else that can add
//! two `i64`s.
//!
//! # Arithmetic Policy
//!
//! | Operation | Policy |
//! |-----------|--------|
//! | `+`, `-` | wrapping on raw overflow |
//! | `*` | 128-bit product, arithmetic shift right (truncates toward -inf) |
//! | `/` | long division, round half up, saturates on overflow, `x / 0 == MAX` |
//! | `%` | raw remainder, `MIN % -1 == 0`, `x % 0 == 0` |
//!
//! No operation panics. Degenerate inputs produce documented sentinels so a
//! simulation step can never abort halfway.
//!
//! # Range
//!
//! - Range: ±1.4 × 10^14
//! - Precision: 1 / 65536 ≈ 1.5 × 10^-5
//! - Safe working range for products: ±32768 ([`Fp::USABLE_MAX`])

use core::cmp::Ordering;
use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use core::str::FromStr;

use crate::error::ParseFpError;

/// Number of fractional bits in the raw representation.
pub const FRACTIONAL_BITS: u32 = 16;

/// Raw value of 1.0.
pub const ONE_RAW: i64 = 1 << FRACTIONAL_BITS;

/// Decimal digits kept by [`Fp::parse`] and printed by `Display`.
pub const DECIMAL_DIGITS: usize = 5;

const DECIMAL_SCALE: i64 = 100_000;

// ============================================================================
// Fp - 64-bit Fixed-Point Number (Q48.16)
// ============================================================================

/// 64-bit fixed-point number (48 integer bits, 16 fractional bits)
///
/// Internal representation: `value = raw / 2^16`
///
/// Equality, ordering and hashing are those of `raw`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Fp {
    /// Raw two's-complement value
    pub raw: i64,
}

impl Fp {
    /// Number of fractional bits
    pub const FRACTIONAL_BITS: u32 = FRACTIONAL_BITS;

    /// Zero
    pub const ZERO: Self = Self::from_raw(0);

    /// One (1.0)
    pub const ONE: Self = Self::from_raw(ONE_RAW);

    /// Negative one (-1.0)
    pub const MINUS_ONE: Self = Self::from_raw(-ONE_RAW);

    /// Largest representable value, also the division-by-zero sentinel
    /// and the "unbounded" marker used by motors
    pub const MAX: Self = Self::from_raw(i64::MAX);

    /// Smallest representable value
    pub const MIN: Self = Self::from_raw(i64::MIN);

    /// Smallest positive value (one raw unit)
    pub const EPSILON: Self = Self::from_raw(1);

    /// Largest value whose square still fits (32768.0)
    pub const USABLE_MAX: Self = Self::from_raw(2_147_483_648);

    /// Negated [`Fp::USABLE_MAX`]
    pub const USABLE_MIN: Self = Self::from_raw(-2_147_483_648);

    /// Pi (π ≈ 3.14159)
    pub const PI: Self = Self::from_raw(205_887);

    /// Two Pi (2π)
    pub const PI2: Self = Self::PI.wrapping_mul(Self::from_int(2));

    /// Half Pi (π/2), computed by multiplication like the other pi multiples
    pub const PI_HALF: Self = Self::PI.wrapping_mul(Self::from_raw(ONE_RAW / 2));

    /// Quarter Pi (π/4)
    pub const PI_QUARTER: Self = Self::PI.wrapping_mul(Self::from_raw(ONE_RAW / 4));

    /// 1 / 2π
    pub const ONE_DIV_PI2: Self = Self::ONE.fixed_div(Self::PI2);

    /// Degrees to radians factor
    pub const DEG2RAD: Self = Self::from_raw(1_143);

    /// Radians to degrees factor
    pub const RAD2DEG: Self = Self::from_raw(3_754_936);

    /// Euler's number (e ≈ 2.71828)
    pub const E: Self = Self::from_raw(178_145);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw Q48.16 value
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self { raw }
    }

    /// Create from a machine integer (exact)
    #[inline]
    pub const fn from_int(n: i32) -> Self {
        Self::from_raw((n as i64) << FRACTIONAL_BITS)
    }

    /// Create from a 64-bit integer. Bits above the 48-bit integer range
    /// are shifted out.
    #[inline]
    pub const fn from_long(n: i64) -> Self {
        Self::from_raw(n.wrapping_shl(FRACTIONAL_BITS))
    }

    /// Create from a decimal literal `mantissa * 10^-scale`.
    ///
    /// The scaled value is truncated toward zero, which is exact for every
    /// literal with at most five fractional digits that lands on a raw unit,
    /// and reproduces a decimal-to-fixed cast otherwise.
    ///
    /// ```
    /// use fp_physics::Fp;
    /// assert_eq!(Fp::from_decimal(5, 1), Fp::from_raw(32768)); // 0.5
    /// assert_eq!(Fp::from_decimal(-25, 2), Fp::from_raw(-16384)); // -0.25
    /// ```
    pub const fn from_decimal(mantissa: i64, scale: u32) -> Self {
        let scaled = (mantissa as i128) << FRACTIONAL_BITS;
        // 10^39 no longer fits i128, and every such literal truncates to zero
        match 10i128.checked_pow(scale) {
            Some(divisor) => Self::from_raw((scaled / divisor) as i64),
            None => Self::ZERO,
        }
    }

    /// Create from a fraction (numerator / denominator) using fixed-point
    /// division rules
    #[inline]
    pub const fn from_ratio(num: i32, denom: i32) -> Self {
        Self::from_int(num).fixed_div(Self::from_int(denom))
    }

    /// Lossy conversion from `f32` (truncates toward zero).
    ///
    /// Only for authoring-time values. Never feed simulation output back
    /// through this.
    pub fn from_f32_lossy(value: f32) -> Self {
        Self::from_raw((value * ONE_RAW as f32) as i64)
    }

    /// Lossy conversion from `f32`, rounding half away from zero
    pub fn from_f32_rounded(value: f32) -> Self {
        let half = if value < 0.0 { -0.5 } else { 0.5 };
        Self::from_raw((value * ONE_RAW as f32 + half) as i64)
    }

    /// Lossy conversion from `f64` (truncates toward zero)
    pub fn from_f64_lossy(value: f64) -> Self {
        Self::from_raw((value * ONE_RAW as f64) as i64)
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Integer part as `i32` (arithmetic shift, rounds toward -inf)
    #[inline]
    pub const fn to_int(self) -> i32 {
        (self.raw >> FRACTIONAL_BITS) as i32
    }

    /// Integer part as `i64` (arithmetic shift, rounds toward -inf)
    #[inline]
    pub const fn to_long(self) -> i64 {
        self.raw >> FRACTIONAL_BITS
    }

    /// Convert to f32 (for display only, not deterministic!)
    #[inline]
    pub fn to_f32_lossy(self) -> f32 {
        self.raw as f32 / ONE_RAW as f32
    }

    /// Convert to f64 (for display only, not deterministic!)
    #[inline]
    pub fn to_f64_lossy(self) -> f64 {
        self.raw as f64 / ONE_RAW as f64
    }

    /// Convert to f32 rounded to five decimals (display only)
    #[cfg(feature = "std")]
    pub fn to_f32_rounded(self) -> f32 {
        self.to_f64_rounded() as f32
    }

    /// Convert to f64 rounded to five decimals (display only)
    #[cfg(feature = "std")]
    pub fn to_f64_rounded(self) -> f64 {
        (self.to_f64_lossy() * DECIMAL_SCALE as f64).round() / DECIMAL_SCALE as f64
    }

    /// Raw value as little-endian bytes (the persistence format)
    #[inline]
    pub const fn to_le_bytes(self) -> [u8; 8] {
        self.raw.to_le_bytes()
    }

    /// Inverse of [`Fp::to_le_bytes`]
    #[inline]
    pub const fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self::from_raw(i64::from_le_bytes(bytes))
    }

    // ========================================================================
    // Arithmetic (named forms of the operators)
    // ========================================================================

    /// Raw addition, wrapping on overflow
    #[inline]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.wrapping_add(rhs.raw))
    }

    /// Raw subtraction, wrapping on overflow
    #[inline]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.wrapping_sub(rhs.raw))
    }

    /// 128-bit product shifted back into Q48.16; the low bits are
    /// truncated and the high bits wrap.
    #[inline]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        let product = (self.raw as i128) * (rhs.raw as i128);
        Self::from_raw((product >> FRACTIONAL_BITS) as i64)
    }

    /// Fixed-point division (see [`div_raw`])
    #[inline]
    pub const fn fixed_div(self, rhs: Self) -> Self {
        Self::from_raw(div_raw(self.raw, rhs.raw))
    }

    /// Remainder of the raw values.
    ///
    /// `MIN % -1` and `x % 0` both return zero instead of trapping.
    #[inline]
    pub const fn fixed_rem(self, rhs: Self) -> Self {
        if (self.raw == i64::MIN && rhs.raw == -ONE_RAW) || rhs.raw == 0 {
            return Self::ZERO;
        }
        Self::from_raw(self.raw.wrapping_rem(rhs.raw))
    }

    /// Raw ordering
    #[inline]
    pub const fn compare(self, other: Self) -> Ordering {
        if self.raw < other.raw {
            Ordering::Less
        } else if self.raw > other.raw {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Check if negative
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.raw < 0
    }

    /// Check if zero
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.raw == 0
    }

    /// Divide by 2 (arithmetic shift, rounds toward -inf)
    #[inline]
    pub const fn half(self) -> Self {
        Self::from_raw(self.raw >> 1)
    }

    // ========================================================================
    // Parsing
    // ========================================================================

    /// Deterministically parse `[-]digits[.digits]`.
    ///
    /// The fractional part is cut (not rounded) to five digits, or padded
    /// with zeros, before scaling, so parse precision is bounded to five
    /// decimal places. An empty string parses to zero.
    ///
    /// ```
    /// use fp_physics::Fp;
    /// assert_eq!(Fp::parse("1.5").unwrap(), Fp::from_raw(98304));
    /// assert_eq!(Fp::parse("-0.25").unwrap(), Fp::from_raw(-16384));
    /// assert!(Fp::parse("1,5").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseFpError> {
        if text.is_empty() {
            return Ok(Self::ZERO);
        }

        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (integer_digits, fraction_digits) = match body.find('.') {
            Some(point) => (&body[..point], Some(&body[point + 1..])),
            None => (body, None),
        };

        if integer_digits.is_empty() && fraction_digits.map_or(true, str::is_empty) {
            return Err(ParseFpError::Empty);
        }

        let mut magnitude: i128 = 0;
        if !integer_digits.is_empty() {
            magnitude = parse_integer(integer_digits)? << FRACTIONAL_BITS;
        }
        if let Some(digits) = fraction_digits {
            if !digits.is_empty() {
                magnitude += i128::from(parse_fraction(digits)?);
            }
        }

        // Signed before the range check so that `MIN` itself parses
        let raw = if negative { -magnitude } else { magnitude };
        i64::try_from(raw)
            .map(Self::from_raw)
            .map_err(|_| ParseFpError::OutOfRange)
    }

    /// Parse through `f64`, rounding half away from zero.
    ///
    /// Not deterministic across toolchains; only for editor/authoring input.
    pub fn parse_lossy(text: &str) -> Result<Self, ParseFpError> {
        let value: f64 = text.parse().map_err(|_| ParseFpError::InvalidDigit)?;
        let half = if value < 0.0 { -0.5 } else { 0.5 };
        Ok(Self::from_raw((value * ONE_RAW as f64 + half) as i64))
    }
}

// ============================================================================
// Long Division
// ============================================================================

/// Fixed-point long division on raw values.
///
/// Works on absolute values: shifts the remainder left by its leading-zero
/// count, divides, accumulates the partial quotient at the current bit
/// position, and repeats until `F + 1` fractional bits are produced. The
/// extra bit is used for round-half-up. The sign comes from `a ^ b`.
///
/// - `b == 0` returns `i64::MAX`
/// - a quotient that does not fit saturates to `i64::MAX` / `i64::MIN`
pub const fn div_raw(a: i64, b: i64) -> i64 {
    if b == 0 {
        return i64::MAX;
    }

    let negative = (a ^ b) < 0;
    let overflow = if negative { i64::MIN } else { i64::MAX };

    let mut remainder = a.unsigned_abs();
    let mut divider = b.unsigned_abs();
    let mut quotient: u64 = 0;
    let mut bit_pos: i32 = FRACTIONAL_BITS as i32 + 1;

    // Divisors with trailing zero nibbles need fewer rounds
    while (divider & 0xF) == 0 && bit_pos >= 4 {
        divider >>= 4;
        bit_pos -= 4;
    }

    while remainder != 0 && bit_pos >= 0 {
        let mut shift = remainder.leading_zeros() as i32;
        if shift > bit_pos {
            shift = bit_pos;
        }
        remainder <<= shift;
        bit_pos -= shift;

        let div = remainder / divider;
        remainder %= divider;
        quotient = quotient.wrapping_add(div << bit_pos);

        if div & !(u64::MAX >> bit_pos) != 0 {
            return overflow;
        }

        remainder <<= 1;
        bit_pos -= 1;
    }

    if quotient == u64::MAX {
        return overflow;
    }
    // Round half up on the extra bit
    let rounded = (quotient + 1) >> 1;

    if negative {
        if rounded > 1u64 << 63 {
            i64::MIN
        } else {
            (rounded as i64).wrapping_neg()
        }
    } else if rounded > i64::MAX as u64 {
        i64::MAX
    } else {
        rounded as i64
    }
}

// ============================================================================
// Parsing Helpers
// ============================================================================

fn parse_integer(digits: &str) -> Result<i128, ParseFpError> {
    let mut value: i128 = 0;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return Err(ParseFpError::InvalidDigit);
        }
        value = value * 10 + i128::from(byte - b'0');
        // No integer part above 2^47 survives the shift into the raw field
        if value > 1 << (63 - FRACTIONAL_BITS) {
            return Err(ParseFpError::OutOfRange);
        }
    }
    Ok(value)
}

fn parse_fraction(digits: &str) -> Result<i64, ParseFpError> {
    let mut value: i64 = 0;
    let mut count = 0;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return Err(ParseFpError::InvalidDigit);
        }
        if count < DECIMAL_DIGITS {
            value = value * 10 + i64::from(byte - b'0');
            count += 1;
        }
    }
    while count < DECIMAL_DIGITS {
        value *= 10;
        count += 1;
    }
    Ok(value * ONE_RAW / DECIMAL_SCALE)
}

impl FromStr for Fp {
    type Err = ParseFpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Formatting
// ============================================================================

impl fmt::Display for Fp {
    /// Five fractional digits, rounded half to even, no locale.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.raw.unsigned_abs() as u128 * DECIMAL_SCALE as u128;
        let mut scaled = magnitude >> FRACTIONAL_BITS;
        let remainder = magnitude & (ONE_RAW as u128 - 1);
        let midpoint = ONE_RAW as u128 / 2;
        if remainder > midpoint || (remainder == midpoint && scaled & 1 == 1) {
            scaled += 1;
        }

        let integer = scaled / DECIMAL_SCALE as u128;
        let fraction = scaled % DECIMAL_SCALE as u128;
        let sign = if self.raw < 0 && scaled != 0 { "-" } else { "" };
        write!(f, "{sign}{integer}.{fraction:05}")
    }
}

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp({self})")
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<i32> for Fp {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_int(value)
    }
}

// ============================================================================
// Operators: Fp op Fp
// ============================================================================

impl Neg for Fp {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_raw(self.raw.wrapping_neg())
    }
}

impl Add for Fp {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl Sub for Fp {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl Mul for Fp {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

impl Div for Fp {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.fixed_div(rhs)
    }
}

impl Rem for Fp {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.fixed_rem(rhs)
    }
}

impl AddAssign for Fp {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fp {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fp {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Fp {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl RemAssign for Fp {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

// ============================================================================
// Operators: Fp op i32 / i32 op Fp
// ============================================================================

impl Add<i32> for Fp {
    type Output = Self;

    #[inline]
    fn add(self, rhs: i32) -> Self {
        self.wrapping_add(Self::from_int(rhs))
    }
}

impl Add<Fp> for i32 {
    type Output = Fp;

    #[inline]
    fn add(self, rhs: Fp) -> Fp {
        Fp::from_int(self).wrapping_add(rhs)
    }
}

impl Sub<i32> for Fp {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: i32) -> Self {
        self.wrapping_sub(Self::from_int(rhs))
    }
}

impl Sub<Fp> for i32 {
    type Output = Fp;

    #[inline]
    fn sub(self, rhs: Fp) -> Fp {
        Fp::from_int(self).wrapping_sub(rhs)
    }
}

impl Mul<i32> for Fp {
    type Output = Self;

    /// Scales the raw value directly, no shift involved
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::from_raw(self.raw.wrapping_mul(i64::from(rhs)))
    }
}

impl Mul<Fp> for i32 {
    type Output = Fp;

    #[inline]
    fn mul(self, rhs: Fp) -> Fp {
        rhs * self
    }
}

impl Div<i32> for Fp {
    type Output = Self;

    #[inline]
    fn div(self, rhs: i32) -> Self {
        self.fixed_div(Self::from_int(rhs))
    }
}

impl Div<Fp> for i32 {
    type Output = Fp;

    #[inline]
    fn div(self, rhs: Fp) -> Fp {
        Fp::from_int(self).fixed_div(rhs)
    }
}

impl Rem<i32> for Fp {
    type Output = Self;

    #[inline]
    fn rem(self, rhs: i32) -> Self {
        self.fixed_rem(Self::from_int(rhs))
    }
}

impl Rem<Fp> for i32 {
    type Output = Fp;

    #[inline]
    fn rem(self, rhs: Fp) -> Fp {
        Fp::from_int(self).fixed_rem(rhs)
    }
}

// ============================================================================
// Comparisons against i32 (integer scaled exactly into Q48.16)
// ============================================================================

impl PartialEq<i32> for Fp {
    #[inline]
    fn eq(&self, other: &i32) -> bool {
        self.raw == Self::from_int(*other).raw
    }
}

impl PartialEq<Fp> for i32 {
    #[inline]
    fn eq(&self, other: &Fp) -> bool {
        Fp::from_int(*self).raw == other.raw
    }
}

impl PartialOrd<i32> for Fp {
    #[inline]
    fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
        Some(self.compare(Self::from_int(*other)))
    }
}

impl PartialOrd<Fp> for i32 {
    #[inline]
    fn partial_cmp(&self, other: &Fp) -> Option<Ordering> {
        Some(Fp::from_int(*self).compare(*other))
    }
}

// ============================================================================
// Serde (raw integer only)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Fp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.raw.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Fp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(Self::from_raw)
    }
}
