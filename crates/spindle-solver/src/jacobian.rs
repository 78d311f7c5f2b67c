//! Shared correction routines for velocity-level constraints.
//!
//! Every constraint in a sequential-impulse solver leans on the same small
//! set of numerics: first-order orientation prediction under angular
//! velocity, the tau/damping error blend, accumulated-impulse capping, and
//! range errors for limits. They live here so constraint types stay focused
//! on their own geometry.

use glam::{Quat, Vec3};

/// First-order delta rotation for an angular velocity over one timestep.
///
/// Returns the unnormalized quaternion `(0.5 * omega * dt, 1)`. Valid for
/// small per-step rotations; callers normalize after composing.
#[must_use]
pub fn integrate_angular_velocity(angular_velocity: Vec3, timestep: f32) -> Quat {
    let half_angle = angular_velocity * (0.5 * timestep);
    Quat::from_xyzw(half_angle.x, half_angle.y, half_angle.z, 1.0)
}

/// Predict the end-of-step relative orientation of B with respect to A.
///
/// Advances both bodies by their instantaneous angular velocities and
/// recombines: `normalize(conj(dq_b) * b_from_a * dq_a)`.
#[must_use]
pub fn integrate_orientation_b_from_a(
    b_from_a: Quat,
    angular_velocity_a: Vec3,
    angular_velocity_b: Vec3,
    timestep: f32,
) -> Quat {
    let dq_a = integrate_angular_velocity(angular_velocity_a, timestep);
    let dq_b = integrate_angular_velocity(angular_velocity_b, timestep);
    (dq_b.conjugate() * b_from_a * dq_a).normalize()
}

/// Blend a predicted error and the step's initial error into a correction.
///
/// The damping term acts on the velocity-induced error growth, the tau term
/// on the positional error itself. Zero when both errors are zero.
#[must_use]
pub fn calculate_correction(
    predicted_error: f32,
    initial_error: f32,
    tau: f32,
    damping: f32,
) -> f32 {
    (predicted_error - initial_error).max(0.0) * damping + predicted_error.min(initial_error) * tau
}

/// Clamp the running impulse total to `[-max_impulse, max_impulse]`.
///
/// Returns the impulse actually applied this iteration: the delta that moves
/// the accumulated total to its clamped value, not the raw input. Solving
/// the same constraint repeatedly therefore never exceeds the bound in sum.
#[must_use]
pub fn cap_impulse(impulse: f32, accumulated_impulse: &mut f32, max_impulse: f32) -> f32 {
    let previous = *accumulated_impulse;
    *accumulated_impulse = (previous + impulse).clamp(-max_impulse, max_impulse);
    *accumulated_impulse - previous
}

/// Signed distance of `x` outside `[min, max]`; zero inside the range.
#[must_use]
pub fn range_error(x: f32, min: f32, max: f32) -> f32 {
    let error = (x - max).max(0.0);
    (x - min).min(error)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
