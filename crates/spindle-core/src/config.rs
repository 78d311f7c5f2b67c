use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::step::StepInput;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_timestep() -> f32 {
    0.02
}
const fn default_solver_iterations() -> u32 {
    4
}
const fn default_tau() -> f32 {
    0.6
}
const fn default_damping() -> f32 {
    0.99
}

// ---------------------------------------------------------------------------
// SolverConfig
// ---------------------------------------------------------------------------

/// Global solver step configuration.
///
/// `tau` and `damping` are the soft-constraint stabilization coefficients
/// shared by every constraint in a step: the fraction of positional error
/// and of velocity error corrected per iteration. Both live in `[0, 1]`;
/// higher values correct faster at the cost of stability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Physics timestep in seconds (default: 0.02 = 50 Hz).
    #[serde(default = "default_timestep")]
    pub timestep: f32,

    /// Solve passes over the constraint set per step (default: 4).
    #[serde(default = "default_solver_iterations")]
    pub solver_iterations: u32,

    /// Fraction of positional error corrected per iteration (default: 0.6).
    #[serde(default = "default_tau")]
    pub tau: f32,

    /// Fraction of velocity error corrected per iteration (default: 0.99).
    #[serde(default = "default_damping")]
    pub damping: f32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            timestep: default_timestep(),
            solver_iterations: default_solver_iterations(),
            tau: default_tau(),
            damping: default_damping(),
        }
    }
}

impl SolverConfig {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            return Err(ConfigError::InvalidTimestep(self.timestep));
        }
        if self.solver_iterations == 0 {
            return Err(ConfigError::InvalidSolverIterations(self.solver_iterations));
        }
        if !(0.0..=1.0).contains(&self.tau) {
            return Err(ConfigError::GainOutOfRange {
                name: "tau".into(),
                value: self.tau,
            });
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(ConfigError::GainOutOfRange {
                name: "damping".into(),
                value: self.damping,
            });
        }
        Ok(())
    }

    /// Per-iteration step input derived from the configured timestep.
    #[must_use]
    pub fn step_input(&self) -> StepInput {
        StepInput::from_timestep(self.timestep)
    }

    /// Step rate in Hz.
    #[must_use]
    pub fn steps_hz(&self) -> f32 {
        1.0 / self.timestep
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = SolverConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.timestep - 0.02).abs() < f32::EPSILON);
        assert_eq!(config.solver_iterations, 4);
        assert!((config.tau - 0.6).abs() < f32::EPSILON);
        assert!((config.damping - 0.99).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_timestep_rejected() {
        let config = SolverConfig {
            timestep: 0.0,
            ..SolverConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimestep(_))
        ));
    }

    #[test]
    fn negative_timestep_rejected() {
        let config = SolverConfig {
            timestep: -0.01,
            ..SolverConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimestep(_))
        ));
    }

    #[test]
    fn nan_timestep_rejected() {
        let config = SolverConfig {
            timestep: f32::NAN,
            ..SolverConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimestep(_))
        ));
    }

    #[test]
    fn zero_iterations_rejected() {
        let config = SolverConfig {
            solver_iterations: 0,
            ..SolverConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSolverIterations(0))
        ));
    }

    #[test]
    fn tau_out_of_range_rejected() {
        let config = SolverConfig {
            tau: 1.5,
            ..SolverConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("tau"));
    }

    #[test]
    fn damping_out_of_range_rejected() {
        let config = SolverConfig {
            damping: -0.1,
            ..SolverConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("damping"));
    }

    #[test]
    fn step_input_matches_timestep() {
        let config = SolverConfig::default();
        let step = config.step_input();
        assert!((step.timestep - 0.02).abs() < f32::EPSILON);
        assert!((step.inv_timestep - 50.0).abs() < 1e-4);
    }

    #[test]
    fn steps_hz() {
        let config = SolverConfig::default();
        assert!((config.steps_hz() - 50.0).abs() < 1e-4);
    }

    #[test]
    fn toml_defaults_fill_missing_fields() {
        let config: SolverConfig = toml::from_str("timestep = 0.001").unwrap();
        assert!((config.timestep - 0.001).abs() < f32::EPSILON);
        assert_eq!(config.solver_iterations, 4);
        assert!((config.damping - 0.99).abs() < f32::EPSILON);
    }

    #[test]
    fn toml_full_parse() {
        let config: SolverConfig = toml::from_str(
            "timestep = 0.01\nsolver_iterations = 8\ntau = 0.2\ndamping = 0.02\n",
        )
        .unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.solver_iterations, 8);
        assert!((config.tau - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn serialize_roundtrip() {
        let config = SolverConfig {
            timestep: 0.005,
            solver_iterations: 10,
            tau: 0.3,
            damping: 0.9,
        };
        let json = serde_json::to_string(&config).unwrap();
        let config2: SolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, config2);
    }

    #[test]
    fn from_file_missing_path_is_io_error() {
        let err = SolverConfig::from_file("/nonexistent/solver.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
