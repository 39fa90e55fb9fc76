//! Convex Shape Descriptions
//!
//! Mass-independent geometry every convex shape reports to the body that
//! owns it, plus the support mapping used by collision detection.
//!
//! # Features
//!
//! - **Volume description**: volume and volume distribution (the inertia
//!   tensor of a unit-density body divided by its mass)
//! - **Bounding radii**: minimum and maximum distance from the local origin
//!   to the surface, used by broad-phase and CCD
//! - **Support mapping**: the farthest point of the shape in a direction,
//!   with or without the collision margin
//!
//! Shapes either wrap their margin around the core geometry (sphere, cone)
//! or keep it inside their stated dimensions (box, cylinder). Either way
//! `local_extreme_point` returns the outermost surface point.

use crate::consts::{C0P5, FOUR_THIRDS, ONE_TWELFTH, TWO_FIFTHS};
use crate::fixed::Fp;
use crate::fixed_math::min;
use crate::math::{Matrix3x3, Vector3};
use crate::quaternion::Quaternion;

/// Collision margin assigned to shapes that do not specify one (0.04)
pub const DEFAULT_COLLISION_MARGIN: Fp = Fp::from_decimal(4, 2);

// ============================================================================
// Descriptions
// ============================================================================

/// Volume and volume distribution of a shape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityShapeVolumeDescription {
    /// Inertia tensor per unit mass
    pub volume_distribution: Matrix3x3,
    /// Volume of the shape
    pub volume: Fp,
}

/// Everything a convex shape computes up front
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvexShapeDescription {
    /// Volume and distribution
    pub entity_shape_volume: EntityShapeVolumeDescription,
    /// Distance from the origin to the closest surface point
    pub minimum_radius: Fp,
    /// Distance from the origin to the farthest surface point
    pub maximum_radius: Fp,
    /// Collision margin used to build the description
    pub collision_margin: Fp,
}

// ============================================================================
// ConvexShape trait
// ============================================================================

/// A convex shape with a support mapping
pub trait ConvexShape {
    /// Cached description
    fn description(&self) -> &ConvexShapeDescription;

    /// Farthest point in `direction`, ignoring the margin
    fn local_extreme_point_without_margin(&self, direction: Vector3) -> Vector3;

    /// Collision margin
    #[inline]
    fn collision_margin(&self) -> Fp {
        self.description().collision_margin
    }

    /// Volume of the shape
    #[inline]
    fn volume(&self) -> Fp {
        self.description().entity_shape_volume.volume
    }

    /// Farthest point in `direction`, margin included
    fn local_extreme_point(&self, direction: Vector3) -> Vector3 {
        let core = self.local_extreme_point_without_margin(direction);
        core + direction.normalize() * self.collision_margin()
    }

    /// World-space farthest point of the shape rotated by `orientation`
    fn extreme_point(&self, direction: Vector3, orientation: Quaternion) -> Vector3 {
        let local_direction = orientation.conjugate().transform(direction);
        orientation.transform(self.local_extreme_point(local_direction))
    }
}

// ============================================================================
// SphereShape
// ============================================================================

/// Sphere; the whole radius is margin and the core is a single point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SphereShape {
    radius: Fp,
    description: ConvexShapeDescription,
}

impl SphereShape {
    /// Sphere of the given radius
    pub fn new(radius: Fp) -> Self {
        Self {
            radius,
            description: Self::compute_description(radius),
        }
    }

    /// Description of a sphere of `radius`
    pub fn compute_description(radius: Fp) -> ConvexShapeDescription {
        let radius_squared = radius * radius;
        let diagonal = TWO_FIFTHS * radius_squared;
        ConvexShapeDescription {
            entity_shape_volume: EntityShapeVolumeDescription {
                volume: FOUR_THIRDS * Fp::PI * radius_squared * radius,
                volume_distribution: Matrix3x3::diagonal(diagonal, diagonal, diagonal),
            },
            minimum_radius: radius,
            maximum_radius: radius,
            collision_margin: radius,
        }
    }

    /// Radius
    #[inline]
    pub fn radius(&self) -> Fp {
        self.radius
    }

    /// Change the radius and recompute the description
    pub fn set_radius(&mut self, radius: Fp) {
        log::trace!("sphere radius changed to {radius}");
        *self = Self::new(radius);
    }
}

impl ConvexShape for SphereShape {
    fn description(&self) -> &ConvexShapeDescription {
        &self.description
    }

    fn local_extreme_point_without_margin(&self, _direction: Vector3) -> Vector3 {
        Vector3::ZERO
    }
}

// ============================================================================
// BoxShape
// ============================================================================

/// Axis-aligned box centered on the origin; margin sits inside the extents
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxShape {
    half_extents: Vector3,
    description: ConvexShapeDescription,
}

impl BoxShape {
    /// Box of the given full size with the default margin
    pub fn new(width: Fp, height: Fp, length: Fp) -> Self {
        Self::with_margin(width, height, length, DEFAULT_COLLISION_MARGIN)
    }

    /// Box of the given full size and margin
    pub fn with_margin(width: Fp, height: Fp, length: Fp, collision_margin: Fp) -> Self {
        Self {
            half_extents: Vector3::new(width * C0P5, height * C0P5, length * C0P5),
            description: Self::compute_description(width, height, length, collision_margin),
        }
    }

    /// Description of a `width x height x length` box
    pub fn compute_description(
        width: Fp,
        height: Fp,
        length: Fp,
        collision_margin: Fp,
    ) -> ConvexShapeDescription {
        let width_squared = width * width;
        let height_squared = height * height;
        let length_squared = length * length;
        ConvexShapeDescription {
            entity_shape_volume: EntityShapeVolumeDescription {
                volume: width * height * length,
                volume_distribution: Matrix3x3::diagonal(
                    ONE_TWELFTH * (height_squared + length_squared),
                    ONE_TWELFTH * (width_squared + length_squared),
                    ONE_TWELFTH * (width_squared + height_squared),
                ),
            },
            minimum_radius: min(width, min(height, length)) * C0P5,
            maximum_radius: (width_squared + height_squared + length_squared).sqrt() * C0P5,
            collision_margin,
        }
    }

    /// Half extents along each axis
    #[inline]
    pub fn half_extents(&self) -> Vector3 {
        self.half_extents
    }
}

impl ConvexShape for BoxShape {
    fn description(&self) -> &ConvexShapeDescription {
        &self.description
    }

    fn local_extreme_point_without_margin(&self, direction: Vector3) -> Vector3 {
        let margin = self.collision_margin();
        let pick = |d: Fp, half: Fp| {
            let inner = half - margin;
            if d.is_negative() {
                -inner
            } else {
                inner
            }
        };
        Vector3::new(
            pick(direction.x, self.half_extents.x),
            pick(direction.y, self.half_extents.y),
            pick(direction.z, self.half_extents.z),
        )
    }
}
