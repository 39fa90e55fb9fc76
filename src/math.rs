//! Fixed-Point Vectors and Matrices
//!
//! # Overview
//!
//! `Vector3` and `Matrix3x3` built on [`Fp`]. The matrix uses the row-vector
//! convention (`v' = v * M`), so the rows of a rotation matrix are the
//! images of the basis vectors.
//!
//! # Types
//!
//! - `Vector3`: 3D vector, used for axes, support points and impulses
//! - `Matrix3x3`: volume distributions (inertia shape) and rotations

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::fixed::Fp;
use crate::quaternion::Quaternion;

// ============================================================================
// Vector3
// ============================================================================

/// 3D vector with fixed-point components
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3 {
    pub x: Fp,
    pub y: Fp,
    pub z: Fp,
}

impl Vector3 {
    /// Zero vector
    pub const ZERO: Self = Self::new(Fp::ZERO, Fp::ZERO, Fp::ZERO);

    /// All components one
    pub const ONE: Self = Self::new(Fp::ONE, Fp::ONE, Fp::ONE);

    /// Unit X vector
    pub const UNIT_X: Self = Self::new(Fp::ONE, Fp::ZERO, Fp::ZERO);

    /// Unit Y vector
    pub const UNIT_Y: Self = Self::new(Fp::ZERO, Fp::ONE, Fp::ZERO);

    /// Unit Z vector
    pub const UNIT_Z: Self = Self::new(Fp::ZERO, Fp::ZERO, Fp::ONE);

    /// World up (unit Y)
    pub const UP: Self = Self::UNIT_Y;

    /// Create new vector
    #[inline]
    pub const fn new(x: Fp, y: Fp, z: Fp) -> Self {
        Self { x, y, z }
    }

    /// Create from integers
    #[inline]
    pub const fn from_int(x: i32, y: i32, z: i32) -> Self {
        Self {
            x: Fp::from_int(x),
            y: Fp::from_int(y),
            z: Fp::from_int(z),
        }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, rhs: Self) -> Fp {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Cross product
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// Squared length (no sqrt)
    #[inline]
    pub fn length_squared(self) -> Fp {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> Fp {
        self.length_squared().sqrt()
    }

    /// Normalize to unit length. The zero vector stays zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len.is_zero() {
            Self::ZERO
        } else {
            self / len
        }
    }

    /// Scale by scalar
    #[inline]
    pub fn scale(self, s: Fp) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }

    /// Scale the vector down to `max_length` if it is longer, otherwise
    /// return it unchanged
    pub fn clamp_length(self, max_length: Fp) -> Self {
        // Compared on lengths: squaring a large cap wraps
        let length = self.length();
        if length > max_length {
            self.scale(max_length / length)
        } else {
            self
        }
    }

    /// Component-wise absolute value
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.x, self.y, self.z)
    }
}

impl Add for Vector3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<Fp> for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Fp) -> Self {
        self.scale(rhs)
    }
}

impl Div<Fp> for Vector3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Fp) -> Self {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl Neg for Vector3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

// ============================================================================
// Matrix3x3
// ============================================================================

/// 3x3 matrix, row-vector convention (`mRC` is row R, column C)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix3x3 {
    pub m11: Fp,
    pub m12: Fp,
    pub m13: Fp,
    pub m21: Fp,
    pub m22: Fp,
    pub m23: Fp,
    pub m31: Fp,
    pub m32: Fp,
    pub m33: Fp,
}

impl Matrix3x3 {
    /// Identity matrix
    pub const IDENTITY: Self = Self::diagonal(Fp::ONE, Fp::ONE, Fp::ONE);

    /// Zero matrix
    pub const ZERO: Self = Self::diagonal(Fp::ZERO, Fp::ZERO, Fp::ZERO);

    /// Create from rows
    #[inline]
    pub const fn from_rows(r1: Vector3, r2: Vector3, r3: Vector3) -> Self {
        Self {
            m11: r1.x,
            m12: r1.y,
            m13: r1.z,
            m21: r2.x,
            m22: r2.y,
            m23: r2.z,
            m31: r3.x,
            m32: r3.y,
            m33: r3.z,
        }
    }

    /// Create diagonal matrix
    #[inline]
    pub const fn diagonal(m11: Fp, m22: Fp, m33: Fp) -> Self {
        Self {
            m11,
            m12: Fp::ZERO,
            m13: Fp::ZERO,
            m21: Fp::ZERO,
            m22,
            m23: Fp::ZERO,
            m31: Fp::ZERO,
            m32: Fp::ZERO,
            m33,
        }
    }

    /// Rotation matrix of a unit quaternion
    pub fn from_quaternion(q: Quaternion) -> Self {
        let qx2 = q.x + q.x;
        let qy2 = q.y + q.y;
        let qz2 = q.z + q.z;
        let xx = qx2 * q.x;
        let yy = qy2 * q.y;
        let zz = qz2 * q.z;
        let xy = qx2 * q.y;
        let xz = qx2 * q.z;
        let xw = qx2 * q.w;
        let yz = qy2 * q.z;
        let yw = qy2 * q.w;
        let zw = qz2 * q.w;

        Self {
            m11: Fp::ONE - yy - zz,
            m21: xy - zw,
            m31: xz + yw,
            m12: xy + zw,
            m22: Fp::ONE - xx - zz,
            m32: yz - xw,
            m13: xz - yw,
            m23: yz + xw,
            m33: Fp::ONE - xx - yy,
        }
    }

    /// Row `index` (0-based); out-of-range indices return the last row
    #[inline]
    pub fn row(&self, index: usize) -> Vector3 {
        match index {
            0 => Vector3::new(self.m11, self.m12, self.m13),
            1 => Vector3::new(self.m21, self.m22, self.m23),
            _ => Vector3::new(self.m31, self.m32, self.m33),
        }
    }

    /// Transform a row vector: `v * M`
    #[inline]
    pub fn transform(&self, v: Vector3) -> Vector3 {
        Vector3 {
            x: v.x * self.m11 + v.y * self.m21 + v.z * self.m31,
            y: v.x * self.m12 + v.y * self.m22 + v.z * self.m32,
            z: v.x * self.m13 + v.y * self.m23 + v.z * self.m33,
        }
    }

    /// Transpose
    pub fn transpose(&self) -> Self {
        Self {
            m11: self.m11,
            m12: self.m21,
            m13: self.m31,
            m21: self.m12,
            m22: self.m22,
            m23: self.m32,
            m31: self.m13,
            m32: self.m23,
            m33: self.m33,
        }
    }

    /// Scale every element
    pub fn scale(&self, s: Fp) -> Self {
        Self {
            m11: self.m11 * s,
            m12: self.m12 * s,
            m13: self.m13 * s,
            m21: self.m21 * s,
            m22: self.m22 * s,
            m23: self.m23 * s,
            m31: self.m31 * s,
            m32: self.m32 * s,
            m33: self.m33 * s,
        }
    }

    /// Matrix product `self * rhs` (apply `self` first, then `rhs`)
    pub fn multiply(&self, rhs: &Self) -> Self {
        let a = self;
        let b = rhs;
        Self {
            m11: a.m11 * b.m11 + a.m12 * b.m21 + a.m13 * b.m31,
            m12: a.m11 * b.m12 + a.m12 * b.m22 + a.m13 * b.m32,
            m13: a.m11 * b.m13 + a.m12 * b.m23 + a.m13 * b.m33,
            m21: a.m21 * b.m11 + a.m22 * b.m21 + a.m23 * b.m31,
            m22: a.m21 * b.m12 + a.m22 * b.m22 + a.m23 * b.m32,
            m23: a.m21 * b.m13 + a.m22 * b.m23 + a.m23 * b.m33,
            m31: a.m31 * b.m11 + a.m32 * b.m21 + a.m33 * b.m31,
            m32: a.m31 * b.m12 + a.m32 * b.m22 + a.m33 * b.m32,
            m33: a.m31 * b.m13 + a.m32 * b.m23 + a.m33 * b.m33,
        }
    }

    /// Determinant
    pub fn determinant(&self) -> Fp {
        self.m11 * self.m22 * self.m33
            + self.m12 * self.m23 * self.m31
            + self.m13 * self.m21 * self.m32
            - self.m31 * self.m22 * self.m13
            - self.m32 * self.m23 * self.m11
            - self.m33 * self.m21 * self.m12
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Add for Matrix3x3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            m11: self.m11 + rhs.m11,
            m12: self.m12 + rhs.m12,
            m13: self.m13 + rhs.m13,
            m21: self.m21 + rhs.m21,
            m22: self.m22 + rhs.m22,
            m23: self.m23 + rhs.m23,
            m31: self.m31 + rhs.m31,
            m32: self.m32 + rhs.m32,
            m33: self.m33 + rhs.m33,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
