//! Sequential-impulse joint constraints for the Spindle rigid-body solver.
//!
//! Framework-agnostic numeric library: no engine dependencies, plain value
//! types, deterministic operations.
//!
//! # Constraint Lifecycle
//!
//! ```text
//! Build → [Update] → Solve × iterations     (once per physics step)
//! (geometry capture)  (velocity correction, mutates body velocities)
//! ```
//!
//! The owning solver constructs one constraint per joint per step with
//! [`RotationMotor::build`], then calls [`RotationMotor::solve`] once per
//! solver iteration, feeding current body velocities. Constraints sharing a
//! body must be solved serially; constraints on disjoint body pairs are
//! independent.
//!
//! # Quick Start
//!
//! ```
//! use glam::Vec3;
//! use spindle_core::prelude::*;
//! use spindle_solver::prelude::*;
//!
//! let config = RotationMotorConfig {
//!     axis: Axis::Y,
//!     target: 0.5,
//!     ..RotationMotorConfig::default()
//! };
//! config.validate().unwrap();
//!
//! let solver = SolverConfig::default();
//! let mut motor = RotationMotor::build(
//!     &JointFrame::IDENTITY,
//!     &JointFrame::IDENTITY,
//!     &MotionData::identity(),
//!     &MotionData::identity(),
//!     &config,
//!     solver.tau,
//!     solver.damping,
//! );
//!
//! let mut velocity_a = MotionVelocity::at_rest(Vec3::ONE, 1.0);
//! let mut velocity_b = MotionVelocity::fixed();
//! for _ in 0..solver.solver_iterations {
//!     motor.solve(&mut velocity_a, &mut velocity_b, solver.step_input());
//! }
//! ```

pub mod jacobian;
pub mod joint;
pub mod motor;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::joint::{Axis, JointFrame, RotationMotorConfig};
    pub use crate::motor::RotationMotor;
}
