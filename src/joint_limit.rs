//! Joint Limits
//!
//! Shared tuning of every joint limit: how far past the limit the joint may
//! sit before it engages (`margin`), and how it bounces when it does.
//!
//! Whether a limit is currently exceeded is decided by the constraint that
//! owns the limit during its per-step evaluation; this type only stores the
//! flag.

use crate::consts::{C0P3, C0P005};
use crate::fixed::Fp;
use crate::fixed_math::{clamp, max};

/// Bounce and margin settings of a joint limit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointLimit {
    bounce_velocity_threshold: Fp,
    bounciness: Fp,
    margin: Fp,
    is_limit_exceeded: bool,
}

impl Default for JointLimit {
    fn default() -> Self {
        Self {
            bounce_velocity_threshold: Fp::ONE,
            bounciness: Fp::ZERO,
            margin: C0P005,
            is_limit_exceeded: false,
        }
    }
}

impl JointLimit {
    /// Limit with the given settings, each clamped to its valid range
    pub fn new(bounce_velocity_threshold: Fp, bounciness: Fp, margin: Fp) -> Self {
        let mut limit = Self::default();
        limit.set_bounce_velocity_threshold(bounce_velocity_threshold);
        limit.set_bounciness(bounciness);
        limit.set_margin(margin);
        limit
    }

    /// Impact speed at which the full bounciness applies
    #[inline]
    pub fn bounce_velocity_threshold(&self) -> Fp {
        self.bounce_velocity_threshold
    }

    /// Set the bounce threshold (negative values become zero)
    pub fn set_bounce_velocity_threshold(&mut self, value: Fp) {
        self.bounce_velocity_threshold = max(Fp::ZERO, value);
    }

    /// Fraction of the impact velocity returned as bounce, in `[0, 1]`
    #[inline]
    pub fn bounciness(&self) -> Fp {
        self.bounciness
    }

    /// Set bounciness (clamped to `[0, 1]`)
    pub fn set_bounciness(&mut self, value: Fp) {
        self.bounciness = clamp(value, Fp::ZERO, Fp::ONE);
    }

    /// Allowed penetration past the limit before it engages
    #[inline]
    pub fn margin(&self) -> Fp {
        self.margin
    }

    /// Set the margin (negative values become zero)
    pub fn set_margin(&mut self, value: Fp) {
        self.margin = max(value, Fp::ZERO);
    }

    /// Whether the owning constraint found the limit exceeded this step
    #[inline]
    pub fn is_limit_exceeded(&self) -> bool {
        self.is_limit_exceeded
    }

    /// Record the result of the owning constraint's limit evaluation
    #[inline]
    pub fn set_limit_exceeded(&mut self, exceeded: bool) {
        self.is_limit_exceeded = exceeded;
    }

    /// Bounce velocity for an impact.
    ///
    /// Below 30% of the threshold nothing bounces. From there the effective
    /// bounciness ramps linearly up to its full value at the threshold.
    pub fn compute_bounce_velocity(&self, impact_velocity: Fp) -> Fp {
        let threshold = self.bounce_velocity_threshold;
        let low_threshold = threshold * C0P3;
        let velocity_fraction = clamp(
            (impact_velocity - low_threshold) / (threshold - low_threshold + Fp::EPSILON),
            Fp::ZERO,
            Fp::ONE,
        );
        velocity_fraction * impact_velocity * self.bounciness
    }
}
