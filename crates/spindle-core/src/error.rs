use thiserror::Error;

/// Top-level error type for spindle-core.
#[derive(Debug, Error)]
pub enum SpindleError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid timestep: {0} (must be finite and > 0)")]
    InvalidTimestep(f32),

    #[error("Invalid solver_iterations: {0} (must be >= 1)")]
    InvalidSolverIterations(u32),

    #[error("Invalid value for {name}: {value} (must be in [0, 1])")]
    GainOutOfRange { name: String, value: f32 },
}

/// Constraint authoring validation errors.
///
/// Copy + static messages for cheap propagation in hot paths. The solve path
/// itself never validates; these are returned by the authoring layer before
/// a constraint reaches the solver.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error("min_angle {min} exceeds max_angle {max}")]
    MinExceedsMax { min: f32, max: f32 },

    #[error("Non-finite value for {field}")]
    NonFinite { field: &'static str },
}
