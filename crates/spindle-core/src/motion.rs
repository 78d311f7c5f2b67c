//! Per-body dynamics state as seen by the constraint solver.
//!
//! A body's *motion frame* is its dynamics-facing state (orientation,
//! velocities, inverse mass properties), distinct from any render or scene
//! transform. Constraints read [`MotionData`] at build time and mutate
//! [`MotionVelocity`] in place while solving.

use glam::{Quat, Vec3};

// ---------------------------------------------------------------------------
// MotionData
// ---------------------------------------------------------------------------

/// A body's world-space orientation at the start of the step.
///
/// Read-only from a constraint's perspective; the owning integrator advances
/// it between steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionData {
    /// Rotation from the body's local motion space to world space.
    pub world_from_motion: Quat,
}

impl MotionData {
    /// Create from a world-space orientation.
    #[must_use]
    pub const fn new(world_from_motion: Quat) -> Self {
        Self { world_from_motion }
    }

    /// Identity orientation.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            world_from_motion: Quat::IDENTITY,
        }
    }
}

impl Default for MotionData {
    fn default() -> Self {
        Self::identity()
    }
}

// ---------------------------------------------------------------------------
// MotionVelocity
// ---------------------------------------------------------------------------

/// A body's velocity and inverse mass properties during solving.
///
/// The inverse inertia is diagonal in the body's motion space (the motion
/// frame is aligned with the principal axes of inertia). A zero component
/// means infinite inertia about that axis; an all-zero tensor together with
/// zero inverse mass describes a fixed (kinematic) body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionVelocity {
    /// Linear velocity in world space (m/s).
    pub linear: Vec3,
    /// Angular velocity in motion space (rad/s).
    pub angular: Vec3,
    /// Diagonal inverse inertia in motion space (1/(kg·m²)).
    pub inverse_inertia: Vec3,
    /// Inverse mass (1/kg).
    pub inverse_mass: f32,
}

impl MotionVelocity {
    /// Create with explicit velocities and inverse mass properties.
    #[must_use]
    pub const fn new(linear: Vec3, angular: Vec3, inverse_inertia: Vec3, inverse_mass: f32) -> Self {
        Self {
            linear,
            angular,
            inverse_inertia,
            inverse_mass,
        }
    }

    /// A body at rest with the given inverse mass properties.
    #[must_use]
    pub const fn at_rest(inverse_inertia: Vec3, inverse_mass: f32) -> Self {
        Self {
            linear: Vec3::ZERO,
            angular: Vec3::ZERO,
            inverse_inertia,
            inverse_mass,
        }
    }

    /// A fixed body: zero velocity, infinite mass and inertia.
    #[must_use]
    pub const fn fixed() -> Self {
        Self {
            linear: Vec3::ZERO,
            angular: Vec3::ZERO,
            inverse_inertia: Vec3::ZERO,
            inverse_mass: 0.0,
        }
    }

    /// Apply an angular impulse (N·m·s) expressed in motion space.
    pub fn apply_angular_impulse(&mut self, impulse: Vec3) {
        self.angular += impulse * self.inverse_inertia;
    }

    /// Apply a linear impulse (N·s) expressed in world space.
    pub fn apply_linear_impulse(&mut self, impulse: Vec3) {
        self.linear += impulse * self.inverse_mass;
    }
}

impl Default for MotionVelocity {
    fn default() -> Self {
        Self::fixed()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_data_default_is_identity() {
        let m = MotionData::default();
        assert_eq!(m.world_from_motion, Quat::IDENTITY);
    }

    #[test]
    fn motion_data_new() {
        let q = Quat::from_rotation_y(0.5);
        let m = MotionData::new(q);
        assert_eq!(m.world_from_motion, q);
    }

    #[test]
    fn velocity_fixed_is_infinite_inertia() {
        let v = MotionVelocity::fixed();
        assert_eq!(v.inverse_inertia, Vec3::ZERO);
        assert!((v.inverse_mass - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn velocity_at_rest() {
        let v = MotionVelocity::at_rest(Vec3::ONE, 1.0);
        assert_eq!(v.angular, Vec3::ZERO);
        assert_eq!(v.linear, Vec3::ZERO);
        assert_eq!(v.inverse_inertia, Vec3::ONE);
    }

    #[test]
    fn angular_impulse_scales_by_inverse_inertia() {
        let mut v = MotionVelocity::at_rest(Vec3::new(0.5, 1.0, 2.0), 1.0);
        v.apply_angular_impulse(Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(v.angular, Vec3::new(0.5, 1.0, 2.0));
    }

    #[test]
    fn angular_impulse_on_fixed_body_is_noop() {
        let mut v = MotionVelocity::fixed();
        v.apply_angular_impulse(Vec3::new(10.0, -5.0, 3.0));
        assert_eq!(v.angular, Vec3::ZERO);
    }

    #[test]
    fn angular_impulses_accumulate() {
        let mut v = MotionVelocity::at_rest(Vec3::ONE, 1.0);
        v.apply_angular_impulse(Vec3::Y);
        v.apply_angular_impulse(Vec3::Y * 2.0);
        assert_eq!(v.angular, Vec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn linear_impulse_scales_by_inverse_mass() {
        let mut v = MotionVelocity::at_rest(Vec3::ONE, 0.5);
        v.apply_linear_impulse(Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(v.linear, Vec3::new(1.0, 0.0, 0.0));
    }
}
