//! Simulation result container

use nalgebra::DVector;
use std::collections::HashMap;

// =================================================================================================
// Simulation Result
// =================================================================================================

/// Result of one time-integration run
///
/// Holds the sample times, the full population trajectory (one state vector
/// per sample), the final state, and free-form metadata stamped by the
/// solver (solver name, step size, horizon).
///
/// # Examples
///
/// ```rust
/// use popdyn_rs::models::ExponentialGrowth;
/// use popdyn_rs::solver::{ExplicitEuler, Solver, TimeGrid};
///
/// # fn main() -> Result<(), String> {
/// let model = ExponentialGrowth::new(-0.1, 1.0);
/// let result = ExplicitEuler::new().solve(&model, &TimeGrid::new(10.0, 0.1))?;
///
/// assert_eq!(result.time_points.len(), result.trajectory.len());
/// assert_eq!(result.metadata.get("solver").unwrap(), "Explicit Euler");
///
/// // Scalar series of the first (here: only) population
/// let series = result.component(0)?;
/// assert_eq!(series.len(), result.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct SimulationResult {
    /// Sample times, `[0, tend)`
    pub time_points: Vec<f64>,

    /// Population state at each sample time
    pub trajectory: Vec<DVector<f64>>,

    /// Final population state (last trajectory entry)
    pub final_state: DVector<f64>,

    /// Solver-stamped metadata for diagnostics and reproducibility
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Create a new result
    pub fn new(
        time_points: Vec<f64>,
        trajectory: Vec<DVector<f64>>,
        final_state: DVector<f64>,
    ) -> Self {
        Self {
            time_points,
            trajectory,
            final_state,
            metadata: HashMap::new(),
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.time_points.len()
    }

    /// Check for an empty trajectory
    pub fn is_empty(&self) -> bool {
        self.time_points.is_empty()
    }

    /// Attach a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Extract one population component as a scalar time series
    ///
    /// For scalar models (`dim() == 1`) `component(0)` is the whole
    /// trajectory; for systems it selects a single population.
    ///
    /// # Errors
    ///
    /// Fails when `index` is out of bounds for the state dimension.
    pub fn component(&self, index: usize) -> Result<Vec<f64>, String> {
        let dim = self
            .trajectory
            .first()
            .map(|state| state.len())
            .unwrap_or(0);

        if index >= dim {
            return Err(format!(
                "Component index {} out of bounds for state dimension {}",
                index, dim
            ));
        }

        Ok(self.trajectory.iter().map(|state| state[index]).collect())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
