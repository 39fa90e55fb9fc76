//! Simulation Timestep
//!
//! The pair of values every per-step coefficient computation needs: the step
//! length `dt` and its inverse, the update rate. Both are stored so callers
//! never recompute (and re-round) the reciprocal.

use crate::fixed::Fp;

/// Default simulation rate in steps per second
pub const DEFAULT_HZ: u32 = 60;

/// Fixed timestep configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeStep {
    /// Step length in seconds
    pub dt: Fp,
    /// Steps per second (`1 / dt`)
    pub update_rate: Fp,
}

impl TimeStep {
    /// Timestep of `dt` seconds. A zero `dt` yields the `MAX` update rate.
    pub fn new(dt: Fp) -> Self {
        Self {
            dt,
            update_rate: Fp::ONE / dt,
        }
    }

    /// Timestep for `hz` steps per second (`hz == 0` is treated as 1)
    pub fn from_hz(hz: u32) -> Self {
        let hz = hz.clamp(1, i32::MAX as u32) as i32;
        Self {
            dt: Fp::from_ratio(1, hz),
            update_rate: Fp::from_int(hz),
        }
    }
}

impl Default for TimeStep {
    fn default() -> Self {
        Self::from_hz(DEFAULT_HZ)
    }
}
