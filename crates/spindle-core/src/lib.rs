// spindle-core: Motion state, step parameters, config, and errors for the Spindle solver.

pub mod config;
pub mod error;
pub mod motion;
pub mod step;

pub use error::SpindleError;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::SolverConfig;
    pub use crate::error::{ConfigError, SpindleError, ValidationError};
    pub use crate::motion::{MotionData, MotionVelocity};
    pub use crate::step::StepInput;
}
