//! # fp-physics
//!
//! **Deterministic Q48.16 Fixed-Point Math for Lockstep Physics**
//!
//! Integer-only numeric core for simulations that must produce bit-identical
//! results on every machine: a fixed-point scalar, vectors, quaternions and
//! the small constraint configuration objects a rigid-body solver needs.
//!
//! ## Features
//!
//! | Module | Description |
//! |--------|-------------|
//! | **fixed** | `Fp` scalar: wrapping add/sub/mul, saturating rounded division, parsing and display |
//! | **fixed_math** | sqrt, LUT-based trigonometry, clamping, interpolation and angle helpers |
//! | **math** | `Vector3` and row-vector `Matrix3x3` |
//! | **quaternion** | Rotations: products, slerp, axis/angle, matrix conversion |
//! | **spring** / **joint_limit** / **motor** | Constraint configuration |
//! | **material** | Friction and bounciness with pluggable pair blending |
//! | **shape** / **cone** / **cylinder** | Convex shape descriptions and support mappings |
//! | **persist** | Bit-exact raw encoding for replays and state hashing |
//!
//! ## Design Principles
//!
//! - **No floats in the simulation path**: float bridges exist for display only
//! - **Total arithmetic**: division by zero, overflow and degenerate
//!   geometry resolve to documented values instead of panicking
//! - **no_std Compatible**: disable the default `std` feature for embedded and
//!   WebAssembly targets (needs `alloc`)
//!
//! ## Quick Start
//!
//! ```rust
//! use fp_physics::prelude::*;
//!
//! let third = Fp::ONE / 3;
//! assert_eq!(third.to_string(), "0.33333");
//!
//! let turn = Quaternion::from_axis_angle(Vector3::UNIT_Y, Fp::PI_HALF);
//! let forward = turn.transform(Vector3::UNIT_X);
//! assert!(forward.z < Fp::ZERO);
//!
//! let spring = SpringSettings::default();
//! let coefficients = spring.coefficients(&TimeStep::from_hz(60))?;
//! assert!(coefficients.error_reduction > Fp::ZERO);
//! # Ok::<(), PhysicsError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod cone;
pub mod consts;
pub mod cylinder;
pub mod error;
pub mod fixed;
pub mod fixed_math;
pub mod joint_limit;
mod lut;
pub mod material;
pub mod math;
pub mod motor;
pub mod persist;
pub mod quaternion;
pub mod shape;
pub mod spring;
pub mod timestep;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cone::ConeShape;
    pub use crate::cylinder::CylinderShape;
    pub use crate::error::{ParseFpError, PhysicsError};
    pub use crate::fixed::Fp;
    pub use crate::joint_limit::JointLimit;
    pub use crate::material::{
        CombineRule, DefaultBlender, InteractionProperties, Material, MaterialBlender,
        MaterialId, MaterialTable, DEFAULT_MATERIAL,
    };
    pub use crate::math::{Matrix3x3, Vector3};
    pub use crate::motor::Motor;
    pub use crate::persist::RawCodec;
    pub use crate::quaternion::Quaternion;
    pub use crate::shape::{
        BoxShape, ConvexShape, ConvexShapeDescription, EntityShapeVolumeDescription, SphereShape,
        DEFAULT_COLLISION_MARGIN,
    };
    pub use crate::spring::{SpringAdvancedSettings, SpringCoefficients, SpringSettings};
    pub use crate::timestep::TimeStep;
}

// Re-export main types at crate root
pub use prelude::*;

// ============================================================================
// Cross-module Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use super::fixed_math;

    #[test]
    fn test_rotation_then_inverse() {
        let q = Quaternion::from_yaw_pitch_roll(Fp::ONE.half(), Fp::from_decimal(3, 1), Fp::ZERO);
        let v = Vector3::from_int(1, 2, 3);
        let back = q.conjugate().transform(q.transform(v));
        let err = back - v;
        assert!(err.x.abs().raw <= 16 && err.y.abs().raw <= 16 && err.z.abs().raw <= 16, "{back}");
    }

    #[test]
    fn test_matrix_and_quaternion_agree() {
        let q = Quaternion::from_axis_angle(Vector3::UNIT_Z, Fp::PI_QUARTER);
        let m = Matrix3x3::from_quaternion(q);
        let v = Vector3::from_int(2, 0, 1);
        let a = q.transform(v);
        let b = m.transform(v);
        assert!((a.x - b.x).abs().raw <= 8);
        assert!((a.y - b.y).abs().raw <= 8);
        assert!((a.z - b.z).abs().raw <= 8);
    }

    #[test]
    fn test_shape_extreme_point_with_spring_step() {
        let cone = ConeShape::with_margin(Fp::from_int(2), Fp::ONE, Fp::ZERO);
        let tip = cone.extreme_point(Vector3::UNIT_Y, Quaternion::IDENTITY);
        assert_eq!(tip.y, Fp::from_decimal(15, 1));

        let step = TimeStep::default();
        let c = SpringSettings::default().coefficients(&step);
        assert!(c.is_ok());
    }

    #[test]
    fn test_angle_helpers_round_trip() {
        let deg = Fp::from_int(90);
        let rad = fixed_math::to_radians(deg);
        let back = fixed_math::to_degrees(rad);
        assert!((back - deg).abs() < Fp::from_decimal(1, 2));
    }
}
