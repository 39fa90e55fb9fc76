//! Constraint Motors
//!
//! A motor drives a joint towards a goal with a bounded force. The solver
//! works in impulses, so each step the force bound is converted into an
//! impulse bound (`max_force * dt`) and its square, which the impulse
//! clamping below consumes.
//!
//! `max_force == Fp::MAX` means "unbounded". The derived bounds then stay at
//! `Fp::MAX` too, and clamping is skipped entirely rather than compared
//! against a huge finite number.

use crate::consts::C1EM4;
use crate::fixed::Fp;
use crate::fixed_math::{clamp, max};
use crate::math::Vector3;
use crate::timestep::TimeStep;

/// Force-bounded motor state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motor {
    max_force: Fp,
    softness: Fp,
    max_force_dt: Fp,
    max_force_dt_squared: Fp,
    used_softness: Fp,
}

impl Default for Motor {
    fn default() -> Self {
        Self {
            max_force: Fp::MAX,
            softness: C1EM4,
            max_force_dt: Fp::MAX,
            max_force_dt_squared: Fp::MAX,
            used_softness: Fp::ZERO,
        }
    }
}

impl Motor {
    /// Motor with a force bound (negative values become zero)
    pub fn new(max_force: Fp) -> Self {
        let mut motor = Self::default();
        motor.set_max_force(max_force);
        motor
    }

    /// Rebuild a motor from stored state, derived bounds included
    pub(crate) fn from_raw_parts(
        max_force: Fp,
        softness: Fp,
        max_force_dt: Fp,
        max_force_dt_squared: Fp,
        used_softness: Fp,
    ) -> Self {
        Self {
            max_force,
            softness,
            max_force_dt,
            max_force_dt_squared,
            used_softness,
        }
    }

    /// Maximum force; `Fp::MAX` is unbounded
    #[inline]
    pub fn max_force(&self) -> Fp {
        self.max_force
    }

    /// Set the force bound (negative values become zero)
    pub fn set_max_force(&mut self, value: Fp) {
        self.max_force = max(Fp::ZERO, value);
    }

    /// Softness per unit update rate
    #[inline]
    pub fn softness(&self) -> Fp {
        self.softness
    }

    /// Set the softness (negative values become zero)
    pub fn set_softness(&mut self, value: Fp) {
        self.softness = max(Fp::ZERO, value);
    }

    /// Impulse bound of the current step
    #[inline]
    pub fn max_force_dt(&self) -> Fp {
        self.max_force_dt
    }

    /// Square of [`max_force_dt`](Self::max_force_dt)
    #[inline]
    pub fn max_force_dt_squared(&self) -> Fp {
        self.max_force_dt_squared
    }

    /// Softness scaled for the current step
    #[inline]
    pub fn used_softness(&self) -> Fp {
        self.used_softness
    }

    /// Whether the motor has no force bound
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.max_force_dt == Fp::MAX
    }

    /// Derive the impulse bounds for a step of length `dt`
    pub fn compute_max_forces(&mut self, max_force: Fp, dt: Fp) {
        if max_force < Fp::MAX {
            self.max_force_dt = max_force * dt;
            self.max_force_dt_squared = self.max_force_dt * self.max_force_dt;
        } else {
            self.max_force_dt = Fp::MAX;
            self.max_force_dt_squared = Fp::MAX;
        }
    }

    /// Per-step update: impulse bounds from the stored force and softness
    /// scaled by the update rate
    pub fn update(&mut self, step: &TimeStep) {
        self.compute_max_forces(self.max_force, step.dt);
        self.used_softness = self.softness * step.update_rate;
    }

    /// Accumulate a scalar impulse within the bound.
    ///
    /// Returns `(new_accumulated, applied)` where `applied` is the part of
    /// `delta` that fits.
    pub fn clamp_impulse(&self, accumulated: Fp, delta: Fp) -> (Fp, Fp) {
        let unclamped = accumulated + delta;
        if self.is_unbounded() {
            return (unclamped, delta);
        }
        let clamped = clamp(unclamped, -self.max_force_dt, self.max_force_dt);
        (clamped, clamped - accumulated)
    }

    /// Accumulate a vector impulse within the bound (by length)
    pub fn clamp_impulse_vector(&self, accumulated: Vector3, delta: Vector3) -> (Vector3, Vector3) {
        let unclamped = accumulated + delta;
        if self.is_unbounded() {
            return (unclamped, delta);
        }
        let length_squared = unclamped.length_squared();
        if length_squared > self.max_force_dt_squared {
            let clamped = unclamped * (self.max_force_dt / length_squared.sqrt());
            (clamped, clamped - accumulated)
        } else {
            (unclamped, delta)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let mut motor = Motor::default();
        assert_eq!(motor.max_force(), Fp::MAX);
        motor.update(&TimeStep::default());
        assert!(motor.is_unbounded());
        assert_eq!(motor.max_force_dt(), Fp::MAX);
        assert_eq!(motor.max_force_dt_squared(), Fp::MAX);
    }

    #[test]
    fn test_compute_max_forces() {
        let mut motor = Motor::default();
        motor.compute_max_forces(Fp::from_int(100), Fp::ONE.half());
        assert_eq!(motor.max_force_dt(), Fp::from_int(50));
        assert_eq!(motor.max_force_dt_squared(), Fp::from_int(2_500));
        assert!(!motor.is_unbounded());

        motor.compute_max_forces(Fp::MAX, Fp::ONE.half());
        assert!(motor.is_unbounded());
        assert_eq!(motor.max_force_dt_squared(), Fp::MAX);
    }

    #[test]
    fn test_update_uses_stored_force() {
        let mut motor = Motor::new(Fp::from_int(120));
        motor.set_softness(Fp::ONE.half());
        motor.update(&TimeStep::from_hz(60));
        assert_eq!(motor.max_force_dt(), Fp::from_int(120) * Fp::from_ratio(1, 60));
        assert_eq!(motor.used_softness(), Fp::from_int(30));
    }

    #[test]
    fn test_clamp_impulse_scalar() {
        let mut motor = Motor::default();
        motor.compute_max_forces(Fp::from_int(10), Fp::ONE);

        let (total, applied) = motor.clamp_impulse(Fp::from_int(8), Fp::from_int(5));
        assert_eq!(total, Fp::from_int(10));
        assert_eq!(applied, Fp::from_int(2));

        let (total, applied) = motor.clamp_impulse(Fp::from_int(-8), Fp::from_int(-5));
        assert_eq!(total, Fp::from_int(-10));
        assert_eq!(applied, Fp::from_int(-2));

        let (total, applied) = motor.clamp_impulse(Fp::ONE, Fp::ONE);
        assert_eq!((total, applied), (Fp::from_int(2), Fp::ONE));
    }

    #[test]
    fn test_clamp_impulse_unbounded() {
        let motor = Motor::default();
        let big = Fp::from_int(1_000_000);
        assert_eq!(motor.clamp_impulse(big, big), (big + big, big));
    }

    #[test]
    fn test_clamp_impulse_vector() {
        let mut motor = Motor::default();
        motor.compute_max_forces(Fp::from_int(5), Fp::ONE);

        let (total, applied) =
            motor.clamp_impulse_vector(Vector3::ZERO, Vector3::from_int(6, 8, 0));
        assert_eq!(total, Vector3::from_int(3, 4, 0));
        assert_eq!(applied, total);

        let small = Vector3::from_int(1, 0, 0);
        assert_eq!(motor.clamp_impulse_vector(small, small), (small + small, small));
    }

    #[test]
    fn test_negative_force_clamps_to_zero() {
        let mut motor = Motor::new(Fp::from_int(-3));
        assert_eq!(motor.max_force(), Fp::ZERO);
        motor.update(&TimeStep::default());
        assert_eq!(motor.clamp_impulse(Fp::ZERO, Fp::ONE), (Fp::ZERO, Fp::ZERO));
    }
}
