//! Constraint Springs
//!
//! Every soft constraint carries a [`SpringSettings`]. Each step the solver
//! asks it for an error reduction factor and a softness term, derived either
//! from physical stiffness/damping constants or taken directly from the
//! advanced settings.
//!
//! ```text
//! multiplier      = 1 / (dt * stiffness + damping)
//! error_reduction = stiffness * multiplier
//! softness        = update_rate * multiplier
//! ```
//!
//! A spring with zero stiffness and zero damping is undefined and is
//! rejected as a configuration error.

use crate::consts::{C0P1, C1EM5, C600000, C90000};
use crate::error::PhysicsError;
use crate::fixed::Fp;
use crate::fixed_math::{clamp, max};
use crate::timestep::TimeStep;

const ZERO_SPRING: &str = "stiffness and damping are both zero";

/// Per-step solver coefficients produced by a spring
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpringCoefficients {
    /// Fraction of position error corrected per second
    pub error_reduction: Fp,
    /// Velocity error tolerated per unit impulse
    pub softness: Fp,
}

// ============================================================================
// SpringAdvancedSettings
// ============================================================================

/// Direct error reduction / softness representation of a spring
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringAdvancedSettings {
    error_reduction_factor: Fp,
    softness: Fp,
    use_advanced_settings: bool,
}

impl Default for SpringAdvancedSettings {
    fn default() -> Self {
        Self {
            error_reduction_factor: C0P1,
            softness: C1EM5,
            use_advanced_settings: false,
        }
    }
}

impl SpringAdvancedSettings {
    /// Error reduction factor in `[0, 1]`
    #[inline]
    pub fn error_reduction_factor(&self) -> Fp {
        self.error_reduction_factor
    }

    /// Set the error reduction factor (clamped to `[0, 1]`)
    pub fn set_error_reduction_factor(&mut self, value: Fp) {
        self.error_reduction_factor = clamp(value, Fp::ZERO, Fp::ONE);
    }

    /// Softness; higher values let the constraint be violated more
    #[inline]
    pub fn softness(&self) -> Fp {
        self.softness
    }

    /// Set the softness (negative values become zero)
    pub fn set_softness(&mut self, value: Fp) {
        self.softness = max(Fp::ZERO, value);
    }

    /// Whether these values replace stiffness and damping
    #[inline]
    pub fn use_advanced_settings(&self) -> bool {
        self.use_advanced_settings
    }

    /// Switch between advanced and stiffness/damping mode
    pub fn set_use_advanced_settings(&mut self, enabled: bool) {
        self.use_advanced_settings = enabled;
    }
}

// ============================================================================
// SpringSettings
// ============================================================================

/// Spring behaviour of a constraint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringSettings {
    advanced: SpringAdvancedSettings,
    damping: Fp,
    stiffness: Fp,
}

impl Default for SpringSettings {
    fn default() -> Self {
        Self {
            advanced: SpringAdvancedSettings::default(),
            damping: C90000,
            stiffness: C600000,
        }
    }
}

impl SpringSettings {
    /// Spring with the given constants (negative values become zero).
    ///
    /// Fails if both end up zero.
    pub fn new(stiffness: Fp, damping: Fp) -> Result<Self, PhysicsError> {
        let mut settings = Self::default();
        settings.set_stiffness(stiffness);
        settings.set_damping(damping);
        settings.validate()?;
        Ok(settings)
    }

    /// Spring driven by the advanced settings only
    pub fn advanced_only(error_reduction_factor: Fp, softness: Fp) -> Self {
        let mut settings = Self::default();
        settings.advanced.set_error_reduction_factor(error_reduction_factor);
        settings.advanced.set_softness(softness);
        settings.advanced.set_use_advanced_settings(true);
        settings
    }

    /// Check that the active representation can be evaluated
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.advanced.use_advanced_settings
            && self.stiffness.is_zero()
            && self.damping.is_zero()
        {
            return Err(PhysicsError::InvalidConfiguration {
                reason: ZERO_SPRING,
            });
        }
        Ok(())
    }

    /// Advanced settings
    #[inline]
    pub fn advanced(&self) -> &SpringAdvancedSettings {
        &self.advanced
    }

    /// Mutable advanced settings
    #[inline]
    pub fn advanced_mut(&mut self) -> &mut SpringAdvancedSettings {
        &mut self.advanced
    }

    /// Damping coefficient; higher values reduce oscillation more
    #[inline]
    pub fn damping(&self) -> Fp {
        self.damping
    }

    /// Set damping (negative values become zero)
    pub fn set_damping(&mut self, value: Fp) {
        self.damping = max(Fp::ZERO, value);
    }

    /// Stiffness coefficient; higher values make the spring stiffer
    #[inline]
    pub fn stiffness(&self) -> Fp {
        self.stiffness
    }

    /// Set stiffness (negative values become zero)
    pub fn set_stiffness(&mut self, value: Fp) {
        self.stiffness = max(Fp::ZERO, value);
    }

    /// Error reduction and softness for this step
    pub fn compute_error_reduction_and_softness(
        &self,
        dt: Fp,
        update_rate: Fp,
    ) -> Result<SpringCoefficients, PhysicsError> {
        if self.advanced.use_advanced_settings {
            return Ok(SpringCoefficients {
                error_reduction: self.advanced.error_reduction_factor * update_rate,
                softness: self.advanced.softness * update_rate,
            });
        }

        if let Err(err) = self.validate() {
            log::warn!("spring coefficients requested for invalid settings: {err}");
            return Err(err);
        }

        let multiplier = Fp::ONE / (dt * self.stiffness + self.damping);
        Ok(SpringCoefficients {
            error_reduction: self.stiffness * multiplier,
            softness: update_rate * multiplier,
        })
    }

    /// [`compute_error_reduction_and_softness`](Self::compute_error_reduction_and_softness)
    /// for a [`TimeStep`]
    #[inline]
    pub fn coefficients(&self, step: &TimeStep) -> Result<SpringCoefficients, PhysicsError> {
        self.compute_error_reduction_and_softness(step.dt, step.update_rate)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let spring = SpringSettings::default();
        assert_eq!(spring.stiffness(), Fp::from_int(600_000));
        assert_eq!(spring.damping(), Fp::from_int(90_000));
        assert_eq!(spring.advanced().error_reduction_factor(), Fp::from_decimal(1, 1));
        // 0.00001 is below the 16-bit resolution
        assert_eq!(spring.advanced().softness(), Fp::ZERO);
        assert!(!spring.advanced().use_advanced_settings());
        assert!(spring.validate().is_ok());
    }

    #[test]
    fn test_stiffness_damping_coefficients() {
        let spring = SpringSettings::new(Fp::from_int(100), Fp::from_int(10)).unwrap();
        let step = TimeStep::from_hz(60);
        let c = spring.coefficients(&step).unwrap();
        let multiplier = Fp::ONE / (step.dt * Fp::from_int(100) + Fp::from_int(10));
        assert_eq!(multiplier.raw, 5_618);
        assert_eq!(c.error_reduction.raw, 561_800);
        assert_eq!(c.softness.raw, 337_080);
    }

    #[test]
    fn test_default_coefficients() {
        let step = TimeStep::default();
        let c = SpringSettings::default().coefficients(&step).unwrap();
        assert_eq!(c.error_reduction.raw, 600_000);
        assert_eq!(c.softness.raw, 60);
    }

    #[test]
    fn test_damping_only_spring() {
        let spring = SpringSettings::new(Fp::ZERO, Fp::from_int(10)).unwrap();
        let c = spring.coefficients(&TimeStep::default()).unwrap();
        assert_eq!(c.error_reduction, Fp::ZERO);
        assert_eq!(c.softness.raw, 393_240);
    }

    #[test]
    fn test_zero_spring_is_rejected() {
        let err = SpringSettings::new(Fp::ZERO, Fp::ZERO).unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidConfiguration { .. }));

        let mut spring = SpringSettings::default();
        spring.set_stiffness(Fp::ZERO);
        spring.set_damping(Fp::from_int(-5));
        assert_eq!(spring.damping(), Fp::ZERO);
        let result = spring.compute_error_reduction_and_softness(Fp::ONE, Fp::ONE);
        assert_eq!(
            result,
            Err(PhysicsError::InvalidConfiguration {
                reason: ZERO_SPRING
            })
        );
    }

    #[test]
    fn test_advanced_mode() {
        let spring = SpringSettings::advanced_only(Fp::from_decimal(2, 1), Fp::from_decimal(5, 1));
        let step = TimeStep::default();
        let c = spring.coefficients(&step).unwrap();
        assert_eq!(c.error_reduction, Fp::from_decimal(2, 1) * 60);
        assert_eq!(c.softness, Fp::from_int(30));

        // advanced mode bypasses the zero-spring check
        let mut spring = spring;
        spring.set_stiffness(Fp::ZERO);
        spring.set_damping(Fp::ZERO);
        assert!(spring.coefficients(&step).is_ok());
        spring.advanced_mut().set_use_advanced_settings(false);
        assert!(spring.coefficients(&step).is_err());
    }

    #[test]
    fn test_setters_clamp() {
        let mut advanced = SpringAdvancedSettings::default();
        advanced.set_error_reduction_factor(Fp::from_int(3));
        assert_eq!(advanced.error_reduction_factor(), Fp::ONE);
        advanced.set_error_reduction_factor(Fp::from_int(-3));
        assert_eq!(advanced.error_reduction_factor(), Fp::ZERO);
        advanced.set_softness(Fp::from_int(-1));
        assert_eq!(advanced.softness(), Fp::ZERO);

        let mut spring = SpringSettings::default();
        spring.set_stiffness(Fp::from_int(-7));
        assert_eq!(spring.stiffness(), Fp::ZERO);
    }
}
