//! Cylinder Shape
//!
//! Y-axis aligned cylinder centered on its local origin.
//!
//! # Features
//!
//! - **Closed-form description**: volume, volume distribution and bounding
//!   radii computed once per size change
//! - **Support mapping**: cap rim in the direction's horizontal part, top or
//!   bottom cap picked by the sign of `y`
//!
//! The collision margin lives inside the stated height and radius, so the
//! margin-expanded support point never leaves the nominal cylinder.

use crate::consts::{C0P0833333333, C0P25, C0P5};
use crate::fixed::Fp;
use crate::fixed_math::min;
use crate::math::{Matrix3x3, Vector3};
use crate::shape::{
    ConvexShape, ConvexShapeDescription, EntityShapeVolumeDescription, DEFAULT_COLLISION_MARGIN,
};

/// Cylinder collision shape
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CylinderShape {
    height: Fp,
    radius: Fp,
    description: ConvexShapeDescription,
}

impl CylinderShape {
    /// Cylinder with the default collision margin
    #[must_use]
    pub fn new(height: Fp, radius: Fp) -> Self {
        Self::with_margin(height, radius, DEFAULT_COLLISION_MARGIN)
    }

    /// Cylinder with an explicit collision margin
    #[must_use]
    pub fn with_margin(height: Fp, radius: Fp, collision_margin: Fp) -> Self {
        Self {
            height,
            radius,
            description: Self::compute_description(height, radius, collision_margin),
        }
    }

    /// Closed-form description of a cylinder
    pub fn compute_description(height: Fp, radius: Fp, collision_margin: Fp) -> ConvexShapeDescription {
        let radius_squared = radius * radius;
        let diagonal = C0P0833333333 * height * height + C0P25 * radius_squared;
        let half_height = height * C0P5;

        ConvexShapeDescription {
            entity_shape_volume: EntityShapeVolumeDescription {
                volume: Fp::PI * radius_squared * height,
                volume_distribution: Matrix3x3::diagonal(diagonal, C0P5 * radius_squared, diagonal),
            },
            minimum_radius: min(half_height, radius),
            maximum_radius: (half_height * half_height + radius_squared).sqrt(),
            collision_margin,
        }
    }

    /// Full height
    #[inline]
    pub fn height(&self) -> Fp {
        self.height
    }

    /// Radius of the caps
    #[inline]
    pub fn radius(&self) -> Fp {
        self.radius
    }

    /// Change the height and recompute the description
    pub fn set_height(&mut self, height: Fp) {
        self.height = height;
        self.on_shape_changed();
    }

    /// Change the radius and recompute the description
    pub fn set_radius(&mut self, radius: Fp) {
        self.radius = radius;
        self.on_shape_changed();
    }

    fn on_shape_changed(&mut self) {
        log::trace!(
            "cylinder description recomputed: height {} radius {}",
            self.height,
            self.radius
        );
        self.description =
            Self::compute_description(self.height, self.radius, self.description.collision_margin);
    }
}

impl ConvexShape for CylinderShape {
    fn description(&self) -> &ConvexShapeDescription {
        &self.description
    }

    fn local_extreme_point_without_margin(&self, direction: Vector3) -> Vector3 {
        let margin = self.collision_margin();
        let cap = self.height * C0P5 - margin;
        let y = if direction.y.is_negative() { -cap } else { cap };

        let horizontal_length_squared = direction.x * direction.x + direction.z * direction.z;
        if horizontal_length_squared > Fp::EPSILON {
            let multiplier = (self.radius - margin) / horizontal_length_squared.sqrt();
            Vector3::new(direction.x * multiplier, y, direction.z * multiplier)
        } else {
            Vector3::new(Fp::ZERO, y, Fp::ZERO)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylinder_description() {
        let c = CylinderShape::new(Fp::from_int(2), Fp::ONE);
        let d = c.description();
        assert_eq!(d.entity_shape_volume.volume, Fp::PI * Fp::from_int(2));
        assert_eq!(d.minimum_radius, Fp::ONE);
        // sqrt(1 + 1)
        assert!((d.maximum_radius - Fp::from_decimal(141_421, 5)).abs().raw <= 2);
        let m = d.entity_shape_volume.volume_distribution;
        assert_eq!(m.m11, m.m33);
        assert_eq!(m.m22, Fp::ONE.half());
        assert_eq!(c.collision_margin(), DEFAULT_COLLISION_MARGIN);
    }

    #[test]
    fn test_cylinder_support_side() {
        let c = CylinderShape::with_margin(Fp::from_int(4), Fp::from_int(2), Fp::ZERO);
        let p = c.local_extreme_point_without_margin(Vector3::from_int(1, 1, 0));
        assert_eq!(p, Vector3::from_int(2, 2, 0));
        let p = c.local_extreme_point_without_margin(Vector3::from_int(0, -1, -4));
        assert_eq!(p, Vector3::from_int(0, -2, -2));
    }

    #[test]
    fn test_cylinder_support_axis() {
        let c = CylinderShape::with_margin(Fp::from_int(4), Fp::from_int(2), Fp::ZERO);
        assert_eq!(
            c.local_extreme_point_without_margin(-Vector3::UNIT_Y),
            Vector3::from_int(0, -2, 0)
        );
    }

    #[test]
    fn test_cylinder_margin_stays_inside() {
        let c = CylinderShape::new(Fp::from_int(2), Fp::ONE);
        let m = DEFAULT_COLLISION_MARGIN;
        let inner = c.local_extreme_point_without_margin(Vector3::UNIT_X);
        assert_eq!(inner, Vector3::new(Fp::ONE - m, Fp::ONE - m, Fp::ZERO));
        let outer = c.local_extreme_point(Vector3::UNIT_X);
        assert_eq!(outer.x, Fp::ONE);
    }

    #[test]
    fn test_cylinder_setters_recompute() {
        let mut c = CylinderShape::new(Fp::from_int(2), Fp::ONE);
        c.set_height(Fp::from_int(6));
        c.set_radius(Fp::from_int(2));
        assert_eq!(c.height(), Fp::from_int(6));
        assert_eq!(c.radius(), Fp::from_int(2));
        assert_eq!(
            *c.description(),
            CylinderShape::compute_description(Fp::from_int(6), Fp::from_int(2), DEFAULT_COLLISION_MARGIN)
        );
        assert_eq!(c.description().minimum_radius, Fp::from_int(2));
    }
}
