//! Materials and Interaction Blending
//!
//! Each body carries a [`Material`]. When two bodies touch, the pair's
//! [`InteractionProperties`] (kinetic friction, static friction, bounciness)
//! are produced by a [`MaterialBlender`]. The default blender combines each
//! property with a [`CombineRule`]: friction is averaged and bounciness is
//! multiplied.
//!
//! [`MaterialTable`] registers materials by id and lets specific pairs
//! override the blended result.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::consts::{C0P3, C0P6};
use crate::error::PhysicsError;
use crate::fixed::Fp;
use crate::fixed_math::{clamp, max, min};

/// Material ID (u16 for compact storage)
pub type MaterialId = u16;

/// Default material ID
pub const DEFAULT_MATERIAL: MaterialId = 0;

// ============================================================================
// Combine rules
// ============================================================================

/// How two per-body values merge into one pair value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombineRule {
    /// Average of two values
    #[default]
    Average,
    /// Minimum of two values
    Min,
    /// Maximum of two values
    Max,
    /// Product of two values
    Multiply,
}

impl CombineRule {
    /// Apply the combine rule to two values
    #[inline]
    pub fn apply(self, a: Fp, b: Fp) -> Fp {
        match self {
            CombineRule::Average => (a + b).half(),
            CombineRule::Min => min(a, b),
            CombineRule::Max => max(a, b),
            CombineRule::Multiply => a * b,
        }
    }
}

// ============================================================================
// Material / InteractionProperties
// ============================================================================

/// Blended friction and bounciness of a pair of objects
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionProperties {
    /// Friction while sliding
    pub kinetic_friction: Fp,
    /// Friction at rest
    pub static_friction: Fp,
    /// Restitution of the pair
    pub bounciness: Fp,
}

/// Per-body surface properties
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    kinetic_friction: Fp,
    static_friction: Fp,
    bounciness: Fp,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            kinetic_friction: C0P3,
            static_friction: C0P6,
            bounciness: Fp::ZERO,
        }
    }
}

impl Material {
    /// Material with the given properties, each clamped to its valid range
    pub fn new(static_friction: Fp, kinetic_friction: Fp, bounciness: Fp) -> Self {
        let mut material = Self::default();
        material.set_static_friction(static_friction);
        material.set_kinetic_friction(kinetic_friction);
        material.set_bounciness(bounciness);
        material
    }

    /// Friction while sliding
    #[inline]
    pub fn kinetic_friction(&self) -> Fp {
        self.kinetic_friction
    }

    /// Set kinetic friction (negative values become zero)
    pub fn set_kinetic_friction(&mut self, value: Fp) {
        self.kinetic_friction = max(Fp::ZERO, value);
    }

    /// Friction at rest
    #[inline]
    pub fn static_friction(&self) -> Fp {
        self.static_friction
    }

    /// Set static friction (negative values become zero)
    pub fn set_static_friction(&mut self, value: Fp) {
        self.static_friction = max(Fp::ZERO, value);
    }

    /// Restitution in `[0, 1]`
    #[inline]
    pub fn bounciness(&self) -> Fp {
        self.bounciness
    }

    /// Set bounciness (clamped to `[0, 1]`)
    pub fn set_bounciness(&mut self, value: Fp) {
        self.bounciness = clamp(value, Fp::ZERO, Fp::ONE);
    }
}

// ============================================================================
// Blending
// ============================================================================

/// Produces the interaction properties of a material pair
pub trait MaterialBlender {
    /// Blend two materials into pair properties
    fn blend(&self, a: &Material, b: &Material) -> InteractionProperties;
}

impl<F> MaterialBlender for F
where
    F: Fn(&Material, &Material) -> InteractionProperties,
{
    fn blend(&self, a: &Material, b: &Material) -> InteractionProperties {
        self(a, b)
    }
}

/// Rule-based blender
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefaultBlender {
    /// Rule for both friction values
    pub friction: CombineRule,
    /// Rule for bounciness
    pub bounciness: CombineRule,
}

impl Default for DefaultBlender {
    fn default() -> Self {
        Self {
            friction: CombineRule::Average,
            bounciness: CombineRule::Multiply,
        }
    }
}

impl MaterialBlender for DefaultBlender {
    fn blend(&self, a: &Material, b: &Material) -> InteractionProperties {
        InteractionProperties {
            kinetic_friction: self.friction.apply(a.kinetic_friction, b.kinetic_friction),
            static_friction: self.friction.apply(a.static_friction, b.static_friction),
            bounciness: self.bounciness.apply(a.bounciness, b.bounciness),
        }
    }
}

// ============================================================================
// MaterialTable
// ============================================================================

/// Pair override entry (ids stored in ascending order)
#[derive(Clone, Copy, Debug)]
struct PairOverride {
    mat_a: MaterialId,
    mat_b: MaterialId,
    properties: InteractionProperties,
}

/// Material registry with per-pair overrides
pub struct MaterialTable<B: MaterialBlender = DefaultBlender> {
    /// Registered materials (indexed by MaterialId)
    materials: Vec<Material>,
    /// Pair-specific overrides
    pair_overrides: Vec<PairOverride>,
    /// Blender for pairs without an override
    blender: B,
}

impl MaterialTable<DefaultBlender> {
    /// Table holding the default material, blended with [`DefaultBlender`]
    pub fn new() -> Self {
        Self::with_blender(DefaultBlender::default())
    }
}

impl Default for MaterialTable<DefaultBlender> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: MaterialBlender> MaterialTable<B> {
    /// Table holding the default material, blended with `blender`
    pub fn with_blender(blender: B) -> Self {
        Self {
            materials: Vec::from([Material::default()]),
            pair_overrides: Vec::new(),
            blender,
        }
    }

    /// Register a material, returns its ID
    ///
    /// Fails with [`PhysicsError::CapacityExceeded`] once every
    /// [`MaterialId`] is taken.
    pub fn register(&mut self, material: Material) -> Result<MaterialId, PhysicsError> {
        let id = MaterialId::try_from(self.materials.len()).map_err(|_| {
            PhysicsError::CapacityExceeded {
                resource: "materials",
                limit: usize::from(MaterialId::MAX) + 1,
            }
        })?;
        self.materials.push(material);
        Ok(id)
    }

    /// Material by ID; unknown ids resolve to the default material
    pub fn get(&self, id: MaterialId) -> Material {
        self.materials
            .get(id as usize)
            .copied()
            .unwrap_or_default()
    }

    /// Fix the interaction properties of a specific pair
    pub fn set_pair_override(
        &mut self,
        mat_a: MaterialId,
        mat_b: MaterialId,
        properties: InteractionProperties,
    ) {
        let (a, b) = ordered(mat_a, mat_b);

        if let Some(p) = self
            .pair_overrides
            .iter_mut()
            .find(|p| p.mat_a == a && p.mat_b == b)
        {
            p.properties = properties;
        } else {
            self.pair_overrides.push(PairOverride {
                mat_a: a,
                mat_b: b,
                properties,
            });
        }
    }

    /// Remove a pair override; returns whether one existed
    pub fn clear_pair_override(&mut self, mat_a: MaterialId, mat_b: MaterialId) -> bool {
        let (a, b) = ordered(mat_a, mat_b);
        let before = self.pair_overrides.len();
        self.pair_overrides
            .retain(|p| !(p.mat_a == a && p.mat_b == b));
        self.pair_overrides.len() != before
    }

    /// Interaction properties for a contact pair
    pub fn interaction(&self, mat_a: MaterialId, mat_b: MaterialId) -> InteractionProperties {
        let (a, b) = ordered(mat_a, mat_b);

        if let Some(p) = self
            .pair_overrides
            .iter()
            .find(|p| p.mat_a == a && p.mat_b == b)
        {
            return p.properties;
        }

        self.blender.blend(&self.get(a), &self.get(b))
    }

    /// Number of registered materials
    #[inline]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Check if empty (never true: the default material is always present)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

#[inline]
fn ordered(a: MaterialId, b: MaterialId) -> (MaterialId, MaterialId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
