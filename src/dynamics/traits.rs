//! Growth model trait
//!
//! This module defines the core API for population growth models:
//! - `GrowthModel`: trait for all first-order ODE population models

use nalgebra::{DMatrix, DVector};

// =================================================================================================
// Growth Model Trait
// =================================================================================================

/// Trait for population growth models
///
/// # Responsibility
/// Computes the growth equations of a population at a given state.
/// Does NOT solve them (that's the Solver's job).
///
/// The model provides the "dynamics" (equations), the Solver provides
/// the "numerics" (method to solve them).
///
/// # State Representation
///
/// The population state is a `DVector<f64>`. Scalar models (logistic,
/// exponential) use a one-element vector; interacting-population models
/// (predator-prey) use one element per population.
///
/// # Mandatory Point
/// All new growth models MUST implement this trait.
pub trait GrowthModel: Send + Sync {
    /// Number of coupled populations in the state vector
    ///
    /// Used by the solver to check state dimensions
    fn dim(&self) -> usize;

    /// Growth rate dp/dt = f(p, t) at the given state and time
    ///
    /// # Arguments
    /// * `population` - Current population state
    /// * `time` - Current time
    ///
    /// # Returns
    /// The right-hand side f(p, t), one entry per population.
    ///
    /// The explicit scheme integrates this directly; the implicit scheme
    /// evaluates it at the unknown next state inside a Newton iteration.
    fn rate(&self, population: &DVector<f64>, time: f64) -> DVector<f64>;

    /// Jacobian ∂f/∂p of the growth rate at the given state and time
    ///
    /// Required by the implicit scheme's Newton iteration. The default
    /// implementation approximates the Jacobian column by column with
    /// forward finite differences; models with a cheap closed-form
    /// derivative should override it.
    fn rate_jacobian(&self, population: &DVector<f64>, time: f64) -> DMatrix<f64> {
        let n = population.len();
        let base = self.rate(population, time);
        let mut jacobian = DMatrix::zeros(n, n);

        for j in 0..n {
            // Step scaled to the magnitude of the perturbed component
            let h = 1e-8 * (1.0 + population[j].abs());

            let mut perturbed = population.clone();
            perturbed[j] += h;

            let column = (self.rate(&perturbed, time) - &base) / h;
            jacobian.set_column(j, &column);
        }

        jacobian
    }

    /// Initial population p(0)
    ///
    /// Defines the state the integration starts from. Length must equal
    /// [`dim()`](GrowthModel::dim).
    fn initial_population(&self) -> DVector<f64>;

    /// Closed-form exact solution p(t), when one exists
    ///
    /// Used as ground truth for error comparison. Models without a known
    /// closed form return `None` (the default).
    fn analytic(&self, _time: f64) -> Option<DVector<f64>> {
        None
    }

    /// Name of the model (used for display and result metadata)

    fn name(&self) -> &str;

    /// Description of the model (optional)

    fn description(&self) -> Option<&String> {
        None
    }
}
