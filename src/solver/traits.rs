//! Numerical solver trait
//!
//! # Design Philosophy
//!
//! A solver is the HOW of the simulation: it applies a time-stepping scheme
//! to whatever equations a [`GrowthModel`](crate::dynamics::GrowthModel)
//! provides. The model never knows which scheme integrates it, and the
//! scheme never knows which equations it integrates.
//!
//! # Stability Guarantee
//!
//! The `Solver` trait is STABLE since v0.1.0: new schemes are added as new
//! implementations, never by changing the trait.

use crate::dynamics::GrowthModel;
use crate::solver::{SimulationResult, TimeGrid};

// =================================================================================================
// Solver Trait
// =================================================================================================

/// Trait for time-stepping solvers
///
/// # Implementing a New Solver
///
/// ```rust
/// use popdyn_rs::dynamics::GrowthModel;
/// use popdyn_rs::solver::{SimulationResult, Solver, TimeGrid};
///
/// /// My custom time-stepping scheme
/// pub struct MyScheme;
///
/// impl Solver for MyScheme {
///     fn solve(
///         &self,
///         model: &dyn GrowthModel,
///         grid: &TimeGrid,
///     ) -> Result<SimulationResult, String> {
///         // 1. Validate the grid
///         grid.validate()?;
///
///         // 2. Start from the model's initial population
///         let state = model.initial_population();
///
///         // 3. Apply your scheme over grid.times() ...
///         # let time_points = grid.times();
///         # let trajectory = vec![state.clone(); time_points.len()];
///
///         // 4. Build and return the result
///         Ok(SimulationResult::new(time_points, trajectory, state))
///     }
///
///     fn name(&self) -> &'static str {
///         "My Scheme"
///     }
/// }
/// ```
pub trait Solver: Send + Sync {
    /// Integrate `model` over the samples of `grid`
    ///
    /// Produces one state per grid sample, the first being the model's
    /// initial population at t = 0.
    ///
    /// # Errors
    ///
    /// Returns a descriptive message when the grid is invalid, the scheme
    /// fails to converge, or the trajectory leaves the representable range
    /// (NaN/Inf).
    fn solve(&self, model: &dyn GrowthModel, grid: &TimeGrid) -> Result<SimulationResult, String>;

    /// Display name of the scheme (used in metadata and legends)
    fn name(&self) -> &'static str;
}
