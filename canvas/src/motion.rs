//! Motion integrator: uniform circular motion for both links of a side.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::consts::MS_PER_SIM_UNIT;
use crate::model::{LocusSide, RotationParams};

/// Convert elapsed wall-clock milliseconds into simulated time.
#[must_use]
pub fn simulated_dt(elapsed_ms: f64, speed_rate: f64) -> f64 {
    elapsed_ms / MS_PER_SIM_UNIT * speed_rate
}

/// Advance both angles by `omega * dt`. Angles are never wrapped.
#[must_use]
pub fn advance_rotation(rotation: &RotationParams, dt: f64) -> RotationParams {
    RotationParams {
        angle_hand: rotation.angle_hand + rotation.omega_hand * dt,
        angle_poi: rotation.angle_poi + rotation.omega_poi * dt,
        ..*rotation
    }
}

/// Return `side` advanced by `dt` units of simulated time.
#[must_use]
pub fn advance(side: &LocusSide, dt: f64) -> LocusSide {
    let mut next = side.clone();
    advance_in_place(&mut next, dt);
    next
}

/// In-place form of [`advance`] used by the frame loop on its private working copies.
pub fn advance_in_place(side: &mut LocusSide, dt: f64) {
    side.rotation = advance_rotation(&side.rotation, dt);
}
