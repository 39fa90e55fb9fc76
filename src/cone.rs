//! Cone Shape
//!
//! Y-axis aligned cone with its local origin at the center of mass.
//!
//! # Geometry
//!
//! The center of mass of a solid cone sits a quarter of the height above the
//! base, so in local space the tip is at `(0, 0.75 h, 0)` and the base circle
//! at `y = -0.25 h`. The collision margin is wrapped around this core.
//!
//! # Description
//!
//! ```text
//! volume     = π r² h / 3
//! M11 = M33  = 0.1 h² + 0.15 r²
//! M22        = 0.3 r²
//! max radius = margin + max(0.75 h, sqrt(0.0625 h² + r²))
//! min radius = margin + min(0.25 h, sin(half angle) * 0.75 h)
//! ```

use crate::consts::{C0P0625, C0P1, C0P15, C0P25, C0P3, C0P75, CM0P25, ONE_THIRD};
use crate::fixed::Fp;
use crate::fixed_math::{max, min};
use crate::math::{Matrix3x3, Vector3};
use crate::shape::{
    ConvexShape, ConvexShapeDescription, EntityShapeVolumeDescription, DEFAULT_COLLISION_MARGIN,
};

/// Cone collision shape
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConeShape {
    height: Fp,
    radius: Fp,
    description: ConvexShapeDescription,
}

impl ConeShape {
    /// Cone with the default collision margin
    #[must_use]
    pub fn new(height: Fp, radius: Fp) -> Self {
        Self::with_margin(height, radius, DEFAULT_COLLISION_MARGIN)
    }

    /// Cone with an explicit collision margin
    #[must_use]
    pub fn with_margin(height: Fp, radius: Fp, collision_margin: Fp) -> Self {
        Self {
            height,
            radius,
            description: Self::compute_description(height, radius, collision_margin),
        }
    }

    /// Cone reusing a description computed earlier (e.g. shared between
    /// many identical bodies)
    #[must_use]
    pub fn with_description(height: Fp, radius: Fp, description: ConvexShapeDescription) -> Self {
        Self {
            height,
            radius,
            description,
        }
    }

    /// Closed-form description of a cone
    pub fn compute_description(height: Fp, radius: Fp, collision_margin: Fp) -> ConvexShapeDescription {
        let volume = ONE_THIRD * Fp::PI * radius * radius * height;

        let diagonal = C0P1 * height * height + C0P15 * radius * radius;
        let volume_distribution = Matrix3x3::diagonal(diagonal, C0P3 * radius * radius, diagonal);

        let maximum_radius = collision_margin
            + max(
                C0P75 * height,
                (C0P0625 * height * height + radius * radius).sqrt(),
            );

        // sine of the half angle at the tip
        let slope = radius / height;
        let sin_half_angle = slope / (slope * slope + Fp::ONE).sqrt();
        let minimum_radius = collision_margin + min(C0P25 * height, sin_half_angle * C0P75 * height);

        ConvexShapeDescription {
            entity_shape_volume: EntityShapeVolumeDescription {
                volume_distribution,
                volume,
            },
            minimum_radius,
            maximum_radius,
            collision_margin,
        }
    }

    /// Height from base to tip
    #[inline]
    pub fn height(&self) -> Fp {
        self.height
    }

    /// Base radius
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

    /// Change the collision margin and recompute the description
    pub fn set_collision_margin(&mut self, collision_margin: Fp) {
        self.description.collision_margin = collision_margin;
        self.on_shape_changed();
    }

    fn on_shape_changed(&mut self) {
        log::trace!(
            "cone description recomputed: height {} radius {}",
            self.height,
            self.radius
        );
        self.description =
            Self::compute_description(self.height, self.radius, self.description.collision_margin);
    }
}

impl ConvexShape for ConeShape {
    fn description(&self) -> &ConvexShapeDescription {
        &self.description
    }

    fn local_extreme_point_without_margin(&self, direction: Vector3) -> Vector3 {
        // tip region
        let radius_squared = self.radius * self.radius;
        let sin_theta_squared = radius_squared / (radius_squared + self.height * self.height);
        if direction.y > Fp::ZERO
            && direction.y * direction.y >= direction.length_squared() * sin_theta_squared
        {
            return Vector3::new(Fp::ZERO, C0P75 * self.height, Fp::ZERO);
        }

        // base rim
        let base_y = CM0P25 * self.height;
        let horizontal_length_squared = direction.x * direction.x + direction.z * direction.z;
        if horizontal_length_squared > Fp::EPSILON {
            let rad_over_sigma = self.radius / horizontal_length_squared.sqrt();
            Vector3::new(rad_over_sigma * direction.x, base_y, rad_over_sigma * direction.z)
        } else {
            // pointing (almost) straight down
            Vector3::new(Fp::ZERO, base_y, Fp::ZERO)
        }
    }
}
