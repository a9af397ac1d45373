//! Numerical solvers
//!
//! This module provides traits and implementations for numerical solvers.
//! A numerical solver applies a time-stepping scheme to the equations
//! provided by a growth model over a sampling grid.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! The solver architecture separates concerns into three layers:
//!
//! 1. **Growth model** ([`GrowthModel`](crate::dynamics::GrowthModel)) — WHAT to solve
//!    - Equations dp/dt = f(p, t)
//!    - Initial population
//!    - Optional closed-form solution
//!
//! 2. **Time grid** ([`TimeGrid`]) — WHERE to sample
//!    - Horizon `tend` and step size `dt`
//!    - Samples `[0, tend)`, end point excluded
//!
//! 3. **Solver** ([`Solver`] trait) — HOW to solve
//!    - Applies the numerical scheme
//!    - Returns the sampled trajectory
//!    - Independent of the dynamics
//!
//! This separation allows:
//! - Same solver for different models
//! - Different solvers on the same model (the heart of a scheme comparison)
//! - Refinement studies without code changes
//!
//! # Module Organization
//!
//! - **`traits`**: The stable [`Solver`] interface
//! - **`grid`**: [`TimeGrid`] sampling grid
//! - **`result`**: [`SimulationResult`] trajectory container
//! - **`methods`**: Scheme implementations
//!   - [`ExplicitEuler`]: forward Euler
//!   - [`ImplicitEuler`]: backward Euler with Newton iteration
//! - **`refinement`**: [`refinement_study`] and the [`ApproximationSet`]
//!   mapping it produces
//!
//! # Quick Start Example
//!
//! ```rust
//! use popdyn_rs::models::LogisticGrowth;
//! use popdyn_rs::solver::{ExplicitEuler, ImplicitEuler, Solver, TimeGrid};
//!
//! # fn main() -> Result<(), String> {
//! // 1. WHAT: logistic growth toward capacity 10
//! let model = LogisticGrowth::new(1.0, 10.0, 1.0);
//!
//! // 2. WHERE: [0, 5) sampled every 0.125
//! let grid = TimeGrid::new(5.0, 0.125);
//!
//! // 3. HOW: either scheme, same call
//! let explicit = ExplicitEuler::new().solve(&model, &grid)?;
//! let implicit = ImplicitEuler::new().solve(&model, &grid)?;
//!
//! assert_eq!(explicit.len(), implicit.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All solver methods return `Result<T, String>`:
//!
//! ```rust
//! # use popdyn_rs::models::LogisticGrowth;
//! # use popdyn_rs::solver::{ExplicitEuler, Solver, TimeGrid};
//! # let model = LogisticGrowth::new(1.0, 10.0, 1.0);
//! # let grid = TimeGrid::new(5.0, 0.5);
//! # let solver = ExplicitEuler::new();
//! match solver.solve(&model, &grid) {
//!     Ok(result) => println!("{} samples computed", result.len()),
//!     Err(e) => eprintln!("Solver failed: {}", e),
//! }
//! ```
//!
//! Common errors:
//! - Invalid grid (non-positive horizon or step size)
//! - Numerical instability (divergence, NaN/Inf in the trajectory)
//! - Newton convergence failure (implicit scheme, step too coarse)

// =================================================================================================
// Module Declarations
// =================================================================================================
mod grid;
mod methods;
pub mod refinement;
mod result;
mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use grid::TimeGrid;
pub use result::SimulationResult;
pub use traits::Solver;

pub use methods::{ExplicitEuler, ImplicitEuler};
pub use refinement::{refinement_study, ApproximationSet};

// =================================================================================================
// Helper Functions
// =================================================================================================

use nalgebra::DVector;

/// Validate a population state for numerical issues
///
/// Checks that the state does not contain NaN or Inf values, which would
/// indicate numerical instability or errors in the model's rate function.
///
/// # Arguments
///
/// * `state` - Population state to validate
/// * `step` - Current time step (for error reporting)
///
/// # Returns
///
/// `Ok(())` if the state is valid, `Err(msg)` with diagnostic information
/// otherwise
pub(crate) fn validate_state(state: &DVector<f64>, step: usize) -> Result<(), String> {
    // NaN can arise from 0/0, Inf - Inf, or other undefined operations
    if state.iter().any(|x| x.is_nan()) {
        return Err(format!(
            "NaN detected in population state at step {}. This indicates numerical \
             instability. Try reducing the step size.",
            step
        ));
    }

    // Inf indicates overflow, typically a diverging explicit scheme
    if state.iter().any(|x| x.is_infinite()) {
        return Err(format!(
            "Infinity detected in population state at step {}. This indicates numerical \
             overflow. Try reducing the step size or switching to the implicit scheme.",
            step
        ));
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
