//! Joint frames and constraint authoring.
//!
//! A *joint frame* is a rotation basis shared by two constrained bodies,
//! expressed once in each body's local motion space. Constraint geometry
//! (axes, targets, limits) is authored against the joint frame so it stays
//! independent of either body's own orientation.
//!
//! Authoring data is validated here, before it reaches the solver; the solve
//! path itself assumes valid inputs and never checks.

use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};
use spindle_core::error::ValidationError;

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// Selector for one axis of a joint frame's rotation basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    /// Column index of this axis in a rotation basis.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

// ---------------------------------------------------------------------------
// JointFrame
// ---------------------------------------------------------------------------

/// Rotation from joint space to a body's local motion space.
///
/// The basis columns are the joint axes expressed in the body's motion
/// space. Captured once at constraint creation; the solver treats it as
/// fixed geometry for the step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointFrame {
    /// Body-from-joint rotation basis.
    pub rotation: Mat3,
}

impl JointFrame {
    /// Joint frame aligned with the body's motion space.
    pub const IDENTITY: Self = Self {
        rotation: Mat3::IDENTITY,
    };

    /// Create from an explicit rotation basis.
    #[must_use]
    pub const fn from_rotation(rotation: Mat3) -> Self {
        Self { rotation }
    }

    /// Create from a body-from-joint quaternion.
    #[must_use]
    pub fn from_quat(body_from_joint: Quat) -> Self {
        Self {
            rotation: Mat3::from_quat(body_from_joint),
        }
    }

    /// The selected joint axis in body motion space (not normalized).
    #[must_use]
    pub fn axis(&self, axis: Axis) -> Vec3 {
        self.rotation.col(axis.index())
    }

    /// Body-from-joint rotation as a quaternion.
    #[must_use]
    pub fn to_quat(&self) -> Quat {
        Quat::from_mat3(&self.rotation)
    }
}

impl Default for JointFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ---------------------------------------------------------------------------
// RotationMotorConfig
// ---------------------------------------------------------------------------

const fn default_min_angle() -> f32 {
    -std::f32::consts::PI
}
const fn default_max_angle() -> f32 {
    std::f32::consts::PI
}
const fn default_max_impulse() -> f32 {
    f32::MAX
}

/// Authoring data for a single-axis rotational motor with an angle limit.
///
/// Drives the relative rotation of two bodies about one joint axis toward
/// `target`, while the relative angle is clamped to
/// `[min_angle, max_angle]`. `max_impulse` bounds the accumulated motor
/// impulse per step (actuator strength, not a breaking threshold); only its
/// magnitude is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationMotorConfig {
    /// Constrained joint axis.
    #[serde(default)]
    pub axis: Axis,

    /// Target relative angle in radians.
    #[serde(default)]
    pub target: f32,

    /// Lower bound of the allowed relative angle (default: -pi).
    #[serde(default = "default_min_angle")]
    pub min_angle: f32,

    /// Upper bound of the allowed relative angle (default: pi).
    #[serde(default = "default_max_angle")]
    pub max_angle: f32,

    /// Bound on the accumulated motor impulse per step (default: unbounded).
    #[serde(default = "default_max_impulse")]
    pub max_impulse: f32,
}

impl Default for RotationMotorConfig {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            target: 0.0,
            min_angle: default_min_angle(),
            max_angle: default_max_angle(),
            max_impulse: default_max_impulse(),
        }
    }
}

impl RotationMotorConfig {
    /// Validate authoring data. Returns Err on invalid values.
    ///
    /// Infinite limits are allowed (an unlimited motor); NaN anywhere is not.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.target.is_finite() {
            return Err(ValidationError::NonFinite { field: "target" });
        }
        if self.min_angle.is_nan() {
            return Err(ValidationError::NonFinite { field: "min_angle" });
        }
        if self.max_angle.is_nan() {
            return Err(ValidationError::NonFinite { field: "max_angle" });
        }
        if self.min_angle > self.max_angle {
            return Err(ValidationError::MinExceedsMax {
                min: self.min_angle,
                max: self.max_angle,
            });
        }
        if self.max_impulse.is_nan() {
            return Err(ValidationError::NonFinite {
                field: "max_impulse",
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
