//! Fixed-Point Quaternion
//!
//! Orientation type for bodies, joints and shape support mapping.
//!
//! # Conventions
//!
//! - Stored as `(x, y, z, w)` where `w` is the scalar part; identity is
//!   `(0, 0, 0, 1)`.
//! - [`Quaternion::multiply`] is the Hamilton product `a * b`.
//!   [`Quaternion::concatenate`] reverses the operands so that
//!   `a.concatenate(b)` rotates by `a` first, then by `b`.
//! - Nothing renormalizes implicitly. Call [`Quaternion::normalize`] after
//!   operations that drift off the unit sphere.

use core::fmt;
use core::ops::{Add, Mul, Neg};

use crate::consts::{C0P25, C0P5, C1EM14, C1EM4, CM0P9999};
use crate::fixed::Fp;
use crate::fixed_math::clamp;
use crate::math::{Matrix3x3, Vector3};

/// `cos(θ/2)` above which slerp returns `start` unchanged
pub const SLERP_THRESHOLD: Fp = Fp::ONE.wrapping_sub(C1EM4);

// ============================================================================
// Quaternion
// ============================================================================

/// Rotation quaternion with fixed-point components
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub x: Fp,
    pub y: Fp,
    pub z: Fp,
    pub w: Fp,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// Identity rotation
    pub const IDENTITY: Self = Self::new(Fp::ZERO, Fp::ZERO, Fp::ZERO, Fp::ONE);

    /// All components zero (not a rotation)
    pub const ZERO: Self = Self::new(Fp::ZERO, Fp::ZERO, Fp::ZERO, Fp::ZERO);

    /// Create new quaternion
    #[inline]
    pub const fn new(x: Fp, y: Fp, z: Fp, w: Fp) -> Self {
        Self { x, y, z, w }
    }

    /// Component-wise sum
    #[inline]
    pub fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }

    /// Scale every component
    #[inline]
    pub fn scale(self, s: Fp) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }

    /// Hamilton product `self * rhs`
    pub fn multiply(self, rhs: Self) -> Self {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        Self {
            x: x * rhs.w + rhs.x * w + y * rhs.z - z * rhs.y,
            y: y * rhs.w + rhs.y * w + z * rhs.x - x * rhs.z,
            z: z * rhs.w + rhs.z * w + x * rhs.y - y * rhs.x,
            w: w * rhs.w - x * rhs.x - y * rhs.y - z * rhs.z,
        }
    }

    /// Rotation by `self` followed by `then` (`then * self`)
    pub fn concatenate(self, then: Self) -> Self {
        let a = self;
        let b = then;
        Self {
            x: a.w * b.x + a.x * b.w + a.z * b.y - a.y * b.z,
            y: a.w * b.y + a.y * b.w + a.x * b.z - a.z * b.x,
            z: a.w * b.z + a.z * b.w + a.y * b.x - a.x * b.y,
            w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        }
    }

    /// Four-component dot product
    #[inline]
    pub fn dot(self, rhs: Self) -> Fp {
        self.w * rhs.w + self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Squared length
    #[inline]
    pub fn length_squared(self) -> Fp {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Length
    #[inline]
    pub fn length(self) -> Fp {
        self.length_squared().sqrt()
    }

    /// Unit-length copy. The zero quaternion normalizes to identity.
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length.is_zero() {
            return Self::IDENTITY;
        }
        self.scale(Fp::ONE / length)
    }

    /// Conjugate (vector part negated). Inverse of a unit quaternion.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse, `conjugate / length_squared`
    pub fn inverse(self) -> Self {
        self.conjugate().scale(Fp::ONE / self.length_squared())
    }

    /// All four components negated (same orientation)
    #[inline]
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }

    // ========================================================================
    // Interpolation
    // ========================================================================

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// If the two orientations are closer than [`SLERP_THRESHOLD`], `start`
    /// is returned as is. The result is not renormalized.
    pub fn slerp(start: Self, end: Self, t: Fp) -> Self {
        let mut end = end;
        let mut cos_half_theta = start.dot(end);
        if cos_half_theta < Fp::ZERO {
            end = end.negate();
            cos_half_theta = -cos_half_theta;
        }

        if cos_half_theta > SLERP_THRESHOLD {
            return start;
        }

        let half_theta = cos_half_theta.acos();
        let sin_half_theta = (Fp::ONE - cos_half_theta * cos_half_theta).sqrt();

        let a_fraction = ((Fp::ONE - t) * half_theta).sin() / sin_half_theta;
        let b_fraction = (t * half_theta).sin() / sin_half_theta;

        Self {
            x: start.x * a_fraction + end.x * b_fraction,
            y: start.y * a_fraction + end.y * b_fraction,
            z: start.z * a_fraction + end.z * b_fraction,
            w: start.w * a_fraction + end.w * b_fraction,
        }
    }

    // ========================================================================
    // Vector transforms
    // ========================================================================

    /// Rotate a vector (`q * v * q⁻¹`, assuming `q` is unit length)
    pub fn transform(self, v: Vector3) -> Vector3 {
        let x2 = self.x + self.x;
        let y2 = self.y + self.y;
        let z2 = self.z + self.z;
        let xx2 = self.x * x2;
        let xy2 = self.x * y2;
        let xz2 = self.x * z2;
        let yy2 = self.y * y2;
        let yz2 = self.y * z2;
        let zz2 = self.z * z2;
        let wx2 = self.w * x2;
        let wy2 = self.w * y2;
        let wz2 = self.w * z2;

        Vector3 {
            x: v.x * (Fp::ONE - yy2 - zz2) + v.y * (xy2 - wz2) + v.z * (xz2 + wy2),
            y: v.x * (xy2 + wz2) + v.y * (Fp::ONE - xx2 - zz2) + v.z * (yz2 - wx2),
            z: v.x * (xz2 - wy2) + v.y * (yz2 + wx2) + v.z * (Fp::ONE - xx2 - yy2),
        }
    }

    /// Rotate `(x, 0, 0)`; same bits as `transform`
    pub fn transform_x(self, x: Fp) -> Vector3 {
        let y2 = self.y + self.y;
        let z2 = self.z + self.z;
        let xy2 = self.x * y2;
        let xz2 = self.x * z2;
        let yy2 = self.y * y2;
        let zz2 = self.z * z2;
        let wy2 = self.w * y2;
        let wz2 = self.w * z2;

        Vector3 {
            x: x * (Fp::ONE - yy2 - zz2),
            y: x * (xy2 + wz2),
            z: x * (xz2 - wy2),
        }
    }

    /// Rotate `(0, y, 0)`; same bits as `transform`
    pub fn transform_y(self, y: Fp) -> Vector3 {
        let x2 = self.x + self.x;
        let y2 = self.y + self.y;
        let z2 = self.z + self.z;
        let xx2 = self.x * x2;
        let xy2 = self.x * y2;
        let yz2 = self.y * z2;
        let zz2 = self.z * z2;
        let wx2 = self.w * x2;
        let wz2 = self.w * z2;

        Vector3 {
            x: y * (xy2 - wz2),
            y: y * (Fp::ONE - xx2 - zz2),
            z: y * (yz2 + wx2),
        }
    }

    /// Rotate `(0, 0, z)`; same bits as `transform`
    pub fn transform_z(self, z: Fp) -> Vector3 {
        let x2 = self.x + self.x;
        let y2 = self.y + self.y;
        let z2 = self.z + self.z;
        let xx2 = self.x * x2;
        let xz2 = self.x * z2;
        let yy2 = self.y * y2;
        let yz2 = self.y * z2;
        let wx2 = self.w * x2;
        let wy2 = self.w * y2;

        Vector3 {
            x: z * (xz2 + wy2),
            y: z * (yz2 - wx2),
            z: z * (Fp::ONE - xx2 - yy2),
        }
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Rotation of `angle` radians around a unit `axis`
    pub fn from_axis_angle(axis: Vector3, angle: Fp) -> Self {
        let (s, c) = (angle * C0P5).sin_cos();
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Rotation from yaw (Y), pitch (X) and roll (Z) in radians
    pub fn from_yaw_pitch_roll(yaw: Fp, pitch: Fp, roll: Fp) -> Self {
        let (sin_roll, cos_roll) = (roll * C0P5).sin_cos();
        let (sin_pitch, cos_pitch) = (pitch * C0P5).sin_cos();
        let (sin_yaw, cos_yaw) = (yaw * C0P5).sin_cos();

        let cos_yaw_cos_pitch = cos_yaw * cos_pitch;
        let cos_yaw_sin_pitch = cos_yaw * sin_pitch;
        let sin_yaw_cos_pitch = sin_yaw * cos_pitch;
        let sin_yaw_sin_pitch = sin_yaw * sin_pitch;

        Self {
            x: cos_yaw_sin_pitch * cos_roll + sin_yaw_cos_pitch * sin_roll,
            y: sin_yaw_cos_pitch * cos_roll - cos_yaw_sin_pitch * sin_roll,
            z: cos_yaw_cos_pitch * sin_roll - sin_yaw_sin_pitch * cos_roll,
            w: cos_yaw_cos_pitch * cos_roll + sin_yaw_sin_pitch * sin_roll,
        }
    }

    /// Rotation of a (row-vector) rotation matrix.
    ///
    /// Picks the numerically safest of four branches: trace first, then the
    /// largest diagonal element.
    pub fn from_rotation_matrix(r: &Matrix3x3) -> Self {
        let trace = r.m11 + r.m22 + r.m33;
        if trace >= Fp::ZERO {
            // s = 4w
            let s = (trace + Fp::ONE).sqrt() * 2;
            let inverse_s = Fp::ONE / s;
            Self {
                w: C0P25 * s,
                x: (r.m23 - r.m32) * inverse_s,
                y: (r.m31 - r.m13) * inverse_s,
                z: (r.m12 - r.m21) * inverse_s,
            }
        } else if r.m11 > r.m22 && r.m11 > r.m33 {
            // s = 4x
            let s = (Fp::ONE + r.m11 - r.m22 - r.m33).sqrt() * 2;
            let inverse_s = Fp::ONE / s;
            Self {
                w: (r.m23 - r.m32) * inverse_s,
                x: C0P25 * s,
                y: (r.m21 + r.m12) * inverse_s,
                z: (r.m31 + r.m13) * inverse_s,
            }
        } else if r.m22 > r.m33 {
            // s = 4y
            let s = (Fp::ONE + r.m22 - r.m11 - r.m33).sqrt() * 2;
            let inverse_s = Fp::ONE / s;
            Self {
                w: (r.m31 - r.m13) * inverse_s,
                x: (r.m21 + r.m12) * inverse_s,
                y: C0P25 * s,
                z: (r.m32 + r.m23) * inverse_s,
            }
        } else {
            // s = 4z
            let s = (Fp::ONE + r.m33 - r.m11 - r.m22).sqrt() * 2;
            let inverse_s = Fp::ONE / s;
            Self {
                w: (r.m12 - r.m21) * inverse_s,
                x: (r.m31 + r.m13) * inverse_s,
                y: (r.m32 + r.m23) * inverse_s,
                z: C0P25 * s,
            }
        }
    }

    /// Shortest rotation taking unit `v1` onto unit `v2`.
    ///
    /// Opposing vectors get a half turn around a fixed perpendicular axis,
    /// chosen from the smallest component of `v1`.
    pub fn between_normalized_vectors(v1: Vector3, v2: Vector3) -> Self {
        let dot = v1.dot(v2);
        let q = if dot < CM0P9999 {
            let abs_x = v1.x.abs();
            let abs_y = v1.y.abs();
            let abs_z = v1.z.abs();
            if abs_x < abs_y && abs_x < abs_z {
                Self::new(Fp::ZERO, -v1.z, v1.y, Fp::ZERO)
            } else if abs_y < abs_z {
                Self::new(-v1.z, Fp::ZERO, v1.x, Fp::ZERO)
            } else {
                Self::new(-v1.y, v1.x, Fp::ZERO, Fp::ZERO)
            }
        } else {
            let axis = v1.cross(v2);
            Self::new(axis.x, axis.y, axis.z, dot + Fp::ONE)
        };
        q.normalize()
    }

    /// Rotation taking `start` to `end`
    pub fn relative_rotation(start: Self, end: Self) -> Self {
        start.conjugate().concatenate(end)
    }

    /// `rotation` expressed in the frame of `target_basis`
    pub fn local_rotation(rotation: Self, target_basis: Self) -> Self {
        rotation.concatenate(target_basis.conjugate())
    }

    // ========================================================================
    // Decomposition
    // ========================================================================

    /// Rotation angle in `[0, 2π]`
    pub fn angle(self) -> Fp {
        let qw = self.w.abs();
        if qw > Fp::ONE {
            return Fp::ZERO;
        }
        qw.acos() * 2
    }

    /// Unit axis and angle. A (near) zero vector part yields `(UP, 0)`.
    pub fn axis_angle(self) -> (Vector3, Fp) {
        let (axis, qw) = if self.w > Fp::ZERO {
            (Vector3::new(self.x, self.y, self.z), self.w)
        } else {
            (Vector3::new(-self.x, -self.y, -self.z), -self.w)
        };

        let length_squared = axis.length_squared();
        if length_squared > C1EM14 {
            let axis = axis / length_squared.sqrt();
            let angle = clamp(qw, Fp::MINUS_ONE, Fp::ONE).acos() * 2;
            (axis, angle)
        } else {
            (Vector3::UP, Fp::ZERO)
        }
    }
}

impl Mul for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Add for Quaternion {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Quaternion::add(self, rhs)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ X: {}, Y: {}, Z: {}, W: {}}}",
            self.x, self.y, self.z, self.w
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_near(actual: Vector3, expected: Vector3, tolerance_raw: i64) {
        let d = actual - expected;
        assert!(
            d.x.raw.abs() <= tolerance_raw
                && d.y.raw.abs() <= tolerance_raw
                && d.z.raw.abs() <= tolerance_raw,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_quat_near(actual: Quaternion, expected: Quaternion, tolerance_raw: i64) {
        let d = actual.add(expected.negate());
        assert!(
            d.x.raw.abs() <= tolerance_raw
                && d.y.raw.abs() <= tolerance_raw
                && d.z.raw.abs() <= tolerance_raw
                && d.w.raw.abs() <= tolerance_raw,
            "expected {expected}, got {actual}"
        );
    }

    /// Random rotation from components in [-2, 2], rejecting tiny inputs
    fn random_unit(rng: &mut fastrand::Rng) -> Quaternion {
        loop {
            let mut c = || Fp::from_raw(rng.i64(-131_072..=131_072));
            let q = Quaternion::new(c(), c(), c(), c());
            if q.length_squared() >= Fp::ONE.half().half() {
                return q.normalize();
            }
        }
    }

    #[test]
    fn test_identity_product() {
        let i = Quaternion::IDENTITY;
        assert_eq!(i * i, i);
        assert_eq!(i.concatenate(i), i);
        assert_eq!(Quaternion::default(), i);
    }

    #[test]
    fn test_concatenate_reverses_multiply() {
        let a = Quaternion::from_axis_angle(Vector3::UNIT_X, Fp::ONE);
        let b = Quaternion::from_axis_angle(Vector3::UNIT_Y, Fp::from_int(2));
        assert_eq!(a.concatenate(b), b * a);
        assert_ne!(a.concatenate(b), a * b);
    }

    #[test]
    fn test_axis_angle_rotation() {
        // quarter turn around Y takes X to -Z
        let q = Quaternion::from_axis_angle(Vector3::UP, Fp::PI_HALF);
        assert_vec_near(q.transform(Vector3::UNIT_X), -Vector3::UNIT_Z, 4);
        assert_vec_near(q.transform(Vector3::UNIT_Z), Vector3::UNIT_X, 4);
        assert_eq!(Quaternion::from_axis_angle(Vector3::UP, Fp::ZERO), Quaternion::IDENTITY);
    }

    #[test]
    fn test_axis_transforms_match_general() {
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..200 {
            let q = random_unit(&mut rng);
            let s = Fp::from_raw(rng.i64(-(100 << 16)..(100 << 16)));
            assert_eq!(q.transform_x(s), q.transform(Vector3::new(s, Fp::ZERO, Fp::ZERO)));
            assert_eq!(q.transform_y(s), q.transform(Vector3::new(Fp::ZERO, s, Fp::ZERO)));
            assert_eq!(q.transform_z(s), q.transform(Vector3::new(Fp::ZERO, Fp::ZERO, s)));
        }
    }

    #[test]
    fn test_normalize() {
        let mut rng = fastrand::Rng::with_seed(11);
        for _ in 0..200 {
            let q = random_unit(&mut rng);
            let error = (q.length_squared() - Fp::ONE).abs();
            assert!(error.raw <= 16, "{q}");
        }
        assert_eq!(Quaternion::ZERO.normalize(), Quaternion::IDENTITY);
        let q = Quaternion::new(Fp::ZERO, Fp::ZERO, Fp::ZERO, Fp::from_int(4));
        assert_eq!(q.normalize(), Quaternion::IDENTITY);
    }

    #[test]
    fn test_slerp_endpoints() {
        let a = Quaternion::from_axis_angle(Vector3::UNIT_X, Fp::ONE);
        let b = Quaternion::from_axis_angle(Vector3::UNIT_Y, Fp::from_int(2));
        assert_quat_near(Quaternion::slerp(a, b, Fp::ZERO), a, 24);
        assert_quat_near(Quaternion::slerp(a, b, Fp::ONE), b, 24);
        assert_eq!(Quaternion::slerp(a, a, Fp::from_decimal(37, 2)), a);
    }

    #[test]
    fn test_slerp_takes_short_path() {
        let a = Quaternion::IDENTITY;
        let b = Quaternion::from_axis_angle(Vector3::UNIT_Z, Fp::ONE);
        let mid = Quaternion::slerp(a, b, Fp::ONE.half());
        let mid_flipped = Quaternion::slerp(a, b.negate(), Fp::ONE.half());
        assert_eq!(mid, mid_flipped);
        assert_quat_near(mid, Quaternion::from_axis_angle(Vector3::UNIT_Z, Fp::ONE.half()), 24);
    }

    #[test]
    fn test_inverse() {
        let q = Quaternion::from_axis_angle(Vector3::UNIT_X, Fp::ONE);
        assert_quat_near(q * q.inverse(), Quaternion::IDENTITY, 4);
        // non-unit quaternion inverts properly
        let doubled = q.scale(Fp::from_int(2));
        assert_quat_near(doubled * doubled.inverse(), Quaternion::IDENTITY, 8);
        assert_eq!(Quaternion::ZERO.inverse(), Quaternion::ZERO);
    }

    #[test]
    fn test_between_opposing_vectors() {
        let v = Vector3::UNIT_X;
        let q = Quaternion::between_normalized_vectors(v, -v);
        assert_eq!(q, Quaternion::new(Fp::ZERO, Fp::ONE, Fp::ZERO, Fp::ZERO));
        // deterministic on repeat
        assert_eq!(q, Quaternion::between_normalized_vectors(v, -v));
        assert_vec_near(q.transform(v), -v, 2);

        // smallest component ties fall through to the last branch
        let w = Vector3::UNIT_Y;
        let q = Quaternion::between_normalized_vectors(w, -w);
        assert_eq!(q, Quaternion::new(Fp::MINUS_ONE, Fp::ZERO, Fp::ZERO, Fp::ZERO));
        assert_vec_near(q.transform(w), -w, 2);
    }

    #[test]
    fn test_between_vectors() {
        let q = Quaternion::between_normalized_vectors(Vector3::UNIT_X, Vector3::UNIT_Y);
        assert_vec_near(q.transform(Vector3::UNIT_X), Vector3::UNIT_Y, 4);
        assert_eq!(
            Quaternion::between_normalized_vectors(Vector3::UNIT_Z, Vector3::UNIT_Z),
            Quaternion::IDENTITY
        );
    }

    #[test]
    fn test_rotation_matrix_round_trip() {
        let mut rng = fastrand::Rng::with_seed(5);
        for _ in 0..200 {
            let q = random_unit(&mut rng);
            let m = Matrix3x3::from_quaternion(q);
            let back = Quaternion::from_rotation_matrix(&m);
            // q and -q are the same rotation
            let back = if back.dot(q) < Fp::ZERO { back.negate() } else { back };
            assert_quat_near(back, q, 64);
        }
        assert_eq!(
            Quaternion::from_rotation_matrix(&Matrix3x3::IDENTITY),
            Quaternion::IDENTITY
        );
    }

    #[test]
    fn test_matrix_agrees_with_transform() {
        let q = Quaternion::from_yaw_pitch_roll(Fp::ONE, Fp::ONE.half(), -Fp::ONE);
        let v = Vector3::from_int(1, -2, 3);
        let m = Matrix3x3::from_quaternion(q);
        assert_vec_near(m.transform(v), q.transform(v), 8);
    }

    #[test]
    fn test_yaw_pitch_roll_single_axes() {
        let angle = Fp::from_decimal(7, 1);
        assert_eq!(
            Quaternion::from_yaw_pitch_roll(angle, Fp::ZERO, Fp::ZERO),
            Quaternion::from_axis_angle(Vector3::UNIT_Y, angle)
        );
        assert_eq!(
            Quaternion::from_yaw_pitch_roll(Fp::ZERO, angle, Fp::ZERO),
            Quaternion::from_axis_angle(Vector3::UNIT_X, angle)
        );
        assert_eq!(
            Quaternion::from_yaw_pitch_roll(Fp::ZERO, Fp::ZERO, angle),
            Quaternion::from_axis_angle(Vector3::UNIT_Z, angle)
        );
    }

    #[test]
    fn test_angle_and_axis() {
        let q = Quaternion::from_axis_angle(Vector3::UNIT_Z, Fp::ONE);
        let (axis, angle) = q.axis_angle();
        assert_vec_near(axis, Vector3::UNIT_Z, 2);
        assert!((angle - Fp::ONE).abs().raw <= 16, "{angle}");
        assert!((q.angle() - Fp::ONE).abs().raw <= 16);

        assert_eq!(Quaternion::IDENTITY.axis_angle(), (Vector3::UP, Fp::ZERO));
        assert_eq!(Quaternion::IDENTITY.angle(), Fp::ZERO);
    }

    #[test]
    fn test_relative_and_local_rotation() {
        let start = Quaternion::from_axis_angle(Vector3::UNIT_Y, Fp::ONE);
        let end = Quaternion::from_axis_angle(Vector3::UNIT_Y, Fp::from_int(2));
        let relative = Quaternion::relative_rotation(start, end);
        assert_quat_near(start.concatenate(relative), end, 8);

        let local = Quaternion::local_rotation(end, start);
        assert_quat_near(local.concatenate(start), end, 8);
    }

    #[test]
    fn test_display() {
        let text = Quaternion::IDENTITY.to_string();
        assert_eq!(text, "{ X: 0.00000, Y: 0.00000, Z: 0.00000, W: 1.00000}");
    }
}
