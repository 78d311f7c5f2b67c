//! Single-degree-of-freedom rotational motor with an angle limit.
//!
//! Drives the relative rotation of two bodies about one joint axis toward a
//! target angle, while clamping the relative angle to a configured range.
//! The motor term is bounded by the configured actuator impulse; the limit
//! term is a hard mechanical stop and is not.
//!
//! Lifecycle per step: [`RotationMotor::build`] once, optionally
//! [`RotationMotor::update`] to refresh the relative pose, then
//! [`RotationMotor::solve`] once per solver iteration. Calls must not be
//! interleaved across threads; the accumulated impulse is a plain
//! read-modify-write.

use glam::{Quat, Vec3};
use spindle_core::motion::{MotionData, MotionVelocity};
use spindle_core::step::StepInput;

use crate::jacobian;
use crate::joint::{JointFrame, RotationMotorConfig};

// ---------------------------------------------------------------------------
// RotationMotor
// ---------------------------------------------------------------------------

/// Solve state for a constraint limiting one degree of angular freedom.
///
/// Plain value type with no interior pointers; rebuilt every step from the
/// authoring config and current body state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMotor {
    /// Constrained axis in body A's motion space, unit length.
    axis_in_a: Vec3,
    /// Column index of the constrained axis in the joint basis.
    axis_index: usize,
    /// Target relative angle (radians).
    target: f32,
    min_angle: f32,
    max_angle: f32,
    /// Relative orientation of the motions before solving.
    motion_b_from_a: Quat,
    /// Rotation to joint space from each body's motion space.
    motion_a_from_joint: Quat,
    motion_b_from_joint: Quat,
    /// Bound on the accumulated motor impulse (actuator strength).
    max_impulse: f32,
    /// Impulse applied so far across this step's solver iterations.
    accumulated_impulse: f32,
    /// Angular error before solving, fixed for the step.
    initial_error: f32,
    /// Fraction of the position error to correct per iteration.
    tau: f32,
    /// Fraction of the velocity error to correct per iteration.
    damping: f32,
}

impl RotationMotor {
    /// Capture constraint geometry and parameters for one step.
    ///
    /// Extracts the constrained axis from frame A's basis (normalized),
    /// strips the sign from the configured impulse bound, zeroes the
    /// accumulated impulse, and computes the step's initial error from the
    /// bodies' current orientations.
    #[must_use]
    pub fn build(
        frame_a: &JointFrame,
        frame_b: &JointFrame,
        motion_a: &MotionData,
        motion_b: &MotionData,
        config: &RotationMotorConfig,
        tau: f32,
        damping: f32,
    ) -> Self {
        let mut motor = Self {
            axis_in_a: frame_a.axis(config.axis).normalize(),
            axis_index: config.axis.index(),
            target: config.target,
            min_angle: config.min_angle,
            max_angle: config.max_angle,
            motion_b_from_a: Quat::IDENTITY,
            motion_a_from_joint: frame_a.to_quat(),
            motion_b_from_joint: frame_b.to_quat(),
            max_impulse: config.max_impulse.abs(),
            accumulated_impulse: 0.0,
            initial_error: 0.0,
            tau,
            damping,
        };
        motor.update(motion_a, motion_b);
        motor
    }

    /// Refresh the relative orientation and the step's initial error from
    /// current body orientations. Geometry, limits, coefficients, and the
    /// accumulated impulse are untouched.
    pub fn update(&mut self, motion_a: &MotionData, motion_b: &MotionData) {
        self.motion_b_from_a =
            motion_b.world_from_motion.inverse() * motion_a.world_from_motion;
        let (error, _) = self.calculate_error(self.motion_b_from_a);
        self.initial_error = error;
    }

    /// One velocity-level correction: predicts the end-of-step relative
    /// orientation, applies a capped motor impulse toward the target and an
    /// uncapped limit impulse if the corrected angle leaves the range.
    ///
    /// Mutates both bodies' angular velocities in place.
    pub fn solve(
        &mut self,
        velocity_a: &mut MotionVelocity,
        velocity_b: &mut MotionVelocity,
        step: StepInput,
    ) {
        // Predict the relative orientation at the end of the step.
        let future_b_from_a = jacobian::integrate_orientation_b_from_a(
            self.motion_b_from_a,
            velocity_a.angular,
            velocity_b.angular,
            step.timestep,
        );

        // Effective mass about the axis as seen from both bodies.
        let axis_in_b = future_b_from_a * -self.axis_in_a;
        let inv_effective_mass = (self.axis_in_a * self.axis_in_a)
            .dot(velocity_a.inverse_inertia)
            + (axis_in_b * axis_in_b).dot(velocity_b.inverse_inertia);
        let effective_mass = if inv_effective_mass == 0.0 {
            0.0
        } else {
            1.0 / inv_effective_mass
        };

        // Error at the predicted orientation, blended by tau and damping.
        let (future_error, current_angle) = self.calculate_error(future_b_from_a);
        let correction = jacobian::calculate_correction(
            future_error,
            self.initial_error,
            self.tau,
            self.damping,
        );

        let motor_impulse = effective_mass * -correction * step.inv_timestep;
        let mut impulse =
            jacobian::cap_impulse(motor_impulse, &mut self.accumulated_impulse, self.max_impulse);

        // Hard stop at the angle limits; not subject to the actuator cap.
        let corrected_angle = current_angle - correction;
        let limit_error = jacobian::range_error(corrected_angle, self.min_angle, self.max_angle);
        if limit_error.abs() > 0.0 {
            impulse += effective_mass * -limit_error * step.inv_timestep;
        }

        velocity_a.apply_angular_impulse(impulse * self.axis_in_a);
        velocity_b.apply_angular_impulse(impulse * axis_in_b);
    }

    /// Signed error and current angle for a candidate relative orientation.
    ///
    /// The angle-axis extraction may hand back a flipped axis; multiplying
    /// the angle by the axis-index component cancels the flip so the angle
    /// is always measured about the intended joint axis.
    fn calculate_error(&self, b_from_a: Quat) -> (f32, f32) {
        let joint_b_from_a =
            self.motion_b_from_joint.inverse() * b_from_a * self.motion_a_from_joint;
        let (axis, angle) = joint_b_from_a.to_axis_angle();
        let current_angle = angle * axis[self.axis_index];
        (current_angle - self.target, current_angle)
    }

    /// Constrained axis in body A's motion space.
    #[must_use]
    pub const fn axis_in_a(&self) -> Vec3 {
        self.axis_in_a
    }

    /// Motor impulse accumulated across this step's solve calls.
    #[must_use]
    pub const fn accumulated_impulse(&self) -> f32 {
        self.accumulated_impulse
    }

    /// Angular error captured at build/update time.
    #[must_use]
    pub const fn initial_error(&self) -> f32 {
        self.initial_error
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
