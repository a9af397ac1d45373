//! Step-size refinement studies
//!
//! A refinement study solves the same model with the same scheme at a
//! sequence of successively refined step sizes and collects one sampled
//! series per step size. The result is the input to the comparison
//! renderers in [`output::visualization`](crate::output::visualization),
//! which overlay each series against the model's analytic solution.
//!
//! # Example
//!
//! ```rust
//! use popdyn_rs::models::LogisticGrowth;
//! use popdyn_rs::solver::{refinement_study, ExplicitEuler};
//!
//! # fn main() -> Result<(), String> {
//! let model = LogisticGrowth::new(1.0, 10.0, 1.0);
//! let dt_all = [0.5, 0.25, 0.125, 0.0625];
//!
//! let study = refinement_study(&ExplicitEuler::new(), &model, 5.0, &dt_all)?;
//!
//! // One series per step size, sampled over [0, 5)
//! assert_eq!(study.len(), 4);
//! assert_eq!(study.series(0.5).unwrap().len(), 10);
//! assert_eq!(study.series(0.0625).unwrap().len(), 80);
//! # Ok(())
//! # }
//! ```

use crate::dynamics::GrowthModel;
use crate::solver::{Solver, TimeGrid};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =================================================================================================
// Approximation Set
// =================================================================================================

/// Ordered mapping from step size to the sampled series computed at it
///
/// Insertion order is preserved (coarsest first, by convention of
/// [`refinement_study`]). Keys are compared by exact bit pattern: the step
/// size used for lookup must be the same `f64` that was inserted, which is
/// always the case when both come from the same step-size sequence.
#[derive(Clone, Debug, Default)]
pub struct ApproximationSet {
    entries: Vec<(f64, Vec<f64>)>,
}

impl ApproximationSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the series for a step size
    ///
    /// # Panics
    ///
    /// Panics when `dt` is not a positive finite number — such a key could
    /// never be looked up again.
    pub fn insert(&mut self, dt: f64, series: Vec<f64>) {
        assert!(
            dt.is_finite() && dt > 0.0,
            "Step-size key must be positive and finite, got {}",
            dt
        );

        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|(key, _)| key.to_bits() == dt.to_bits())
        {
            entry.1 = series;
        } else {
            self.entries.push((dt, series));
        }
    }

    /// Look up the series stored for a step size
    pub fn series(&self, dt: f64) -> Option<&[f64]> {
        self.entries
            .iter()
            .find(|(key, _)| key.to_bits() == dt.to_bits())
            .map(|(_, series)| series.as_slice())
    }

    /// Step sizes in insertion order
    pub fn step_sizes(&self) -> Vec<f64> {
        self.entries.iter().map(|(dt, _)| *dt).collect()
    }

    /// Iterate over `(step size, series)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (f64, &[f64])> {
        self.entries
            .iter()
            .map(|(dt, series)| (*dt, series.as_slice()))
    }

    /// Number of stored series
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check for an empty set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =================================================================================================
// Refinement Study
// =================================================================================================

/// Solve `model` with `solver` once per step size and collect the series
///
/// Step sizes must be given coarsest to finest (strictly decreasing) and
/// positive. Each run samples `[0, tend)` on its own [`TimeGrid`]; the
/// stored series is the first population component, so the sampled values
/// line up one-to-one with `TimeGrid::new(tend, dt).times()`.
///
/// With the `parallel` feature enabled the runs execute concurrently, one
/// rayon task per step size.
///
/// # Errors
///
/// Fails when the step-size sequence is empty, unordered, or contains a
/// non-positive value, and propagates any solver failure (tagged with the
/// offending step size).
pub fn refinement_study(
    solver: &dyn Solver,
    model: &dyn GrowthModel,
    tend: f64,
    step_sizes: &[f64],
) -> Result<ApproximationSet, String> {
    if step_sizes.is_empty() {
        return Err("Refinement study needs at least one step size".to_string());
    }
    for &dt in step_sizes {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(format!("Step sizes must be positive, got {}", dt));
        }
    }
    for pair in step_sizes.windows(2) {
        if pair[1] >= pair[0] {
            return Err(format!(
                "Step sizes must be ordered coarsest to finest, got {} before {}",
                pair[0], pair[1]
            ));
        }
    }

    let run = |&dt: &f64| -> Result<(f64, Vec<f64>), String> {
        let grid = TimeGrid::new(tend, dt);
        let result = solver
            .solve(model, &grid)
            .map_err(|e| format!("dt = {}: {}", dt, e))?;
        let series = result.component(0)?;
        Ok((dt, series))
    };

    #[cfg(feature = "parallel")]
    let runs: Vec<Result<(f64, Vec<f64>), String>> = step_sizes.par_iter().map(run).collect();

    #[cfg(not(feature = "parallel"))]
    let runs: Vec<Result<(f64, Vec<f64>), String>> = step_sizes.iter().map(run).collect();

    let mut set = ApproximationSet::new();
    for run in runs {
        let (dt, series) = run?;
        set.insert(dt, series);
    }

    Ok(set)
}

// =================================================================================================
// Tests
// =================================================================================================
