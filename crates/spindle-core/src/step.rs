//! Per-step parameters handed to every constraint's solve pass.

// ---------------------------------------------------------------------------
// StepInput
// ---------------------------------------------------------------------------

/// Timestep data for one solver iteration.
///
/// The reciprocal is precomputed once per step so constraints never divide
/// in their inner loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepInput {
    /// Step duration in seconds.
    pub timestep: f32,
    /// Reciprocal of the timestep (0 when the timestep is 0).
    pub inv_timestep: f32,
}

impl StepInput {
    /// Create from a timestep, precomputing the reciprocal.
    #[must_use]
    pub fn from_timestep(timestep: f32) -> Self {
        let inv_timestep = if timestep == 0.0 { 0.0 } else { 1.0 / timestep };
        Self {
            timestep,
            inv_timestep,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_timestep_computes_reciprocal() {
        let step = StepInput::from_timestep(0.02);
        assert!((step.timestep - 0.02).abs() < f32::EPSILON);
        assert!((step.inv_timestep - 50.0).abs() < 1e-4);
    }

    #[test]
    fn zero_timestep_yields_zero_reciprocal() {
        let step = StepInput::from_timestep(0.0);
        assert!((step.inv_timestep - 0.0).abs() < f32::EPSILON);
    }
}
