//! Implicit (backward) Euler solver
//!
//! # Mathematical Background
//!
//! The backward Euler method evaluates the rate at the *unknown* next
//! state:
//!
//! ```text
//! p_{n+1} = p_n + dt * f(p_{n+1}, t_{n+1})
//! ```
//!
//! Each step therefore requires solving the nonlinear equation
//!
//! ```text
//! F(x) = x - p_n - dt * f(x, t_{n+1}) = 0
//! ```
//!
//! which this solver does by Newton iteration:
//!
//! ```text
//! (I - dt * J_f(x_k, t_{n+1})) * delta = F(x_k)
//! x_{k+1} = x_k - delta
//! ```
//!
//! with the linear system factored by LU decomposition.
//!
//! # Characteristics
//!
//! - **Order**: first-order accurate (global error ~ O(dt)), same as the
//!   explicit scheme
//! - **Stability**: A-stable — for dp/dt = λp with Re(λ) < 0 the scheme is
//!   stable at *any* step size, which is what makes it usable on stiff
//!   problems where forward Euler diverges
//! - **Cost**: one Newton solve per step (a handful of rate and Jacobian
//!   evaluations plus an LU factorization)
//!
//! # Example
//!
//! ```rust
//! use popdyn_rs::models::LogisticGrowth;
//! use popdyn_rs::solver::{ImplicitEuler, Solver, TimeGrid};
//!
//! # fn main() -> Result<(), String> {
//! // Stiff benchmark: forward Euler diverges at dt = 0.5, backward Euler
//! // marches straight to the carrying capacity.
//! let model = LogisticGrowth::new(7.0, 10.0, 20.0);
//! let result = ImplicitEuler::new().solve(&model, &TimeGrid::new(5.0, 0.5))?;
//! assert!((result.final_state[0] - 10.0).abs() < 0.5);
//! # Ok(())
//! # }
//! ```

use crate::dynamics::GrowthModel;
use crate::solver;
use crate::solver::{SimulationResult, Solver, TimeGrid};
use nalgebra::{DMatrix, DVector};

// =================================================================================================
// Implicit Euler Solver
// =================================================================================================

/// Backward Euler time-stepping solver
///
/// Solves p_{n+1} = p_n + dt·f(p_{n+1}, t_{n+1}) by undamped Newton
/// iteration using the model's [`rate_jacobian`](GrowthModel::rate_jacobian).
#[derive(Debug, Clone, Copy)]
pub struct ImplicitEuler {
    /// Relative Newton convergence tolerance
    tolerance: f64,
    /// Newton iteration limit per step
    max_iterations: usize,
}

impl ImplicitEuler {
    /// Create a backward Euler solver with default Newton settings
    /// (tolerance 1e-10, at most 25 iterations per step)
    pub fn new() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 25,
        }
    }

    /// Create a solver with custom Newton settings
    ///
    /// # Panics
    ///
    /// Panics when `tolerance` is not positive or `max_iterations` is zero.
    pub fn with_tolerance(tolerance: f64, max_iterations: usize) -> Self {
        assert!(
            tolerance.is_finite() && tolerance > 0.0,
            "Newton tolerance must be positive, got {}",
            tolerance
        );
        assert!(
            max_iterations > 0,
            "Newton iteration limit must be at least 1"
        );

        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Solve F(x) = x - previous - dt*f(x, t) = 0 for one backward step
    fn newton_step(
        &self,
        model: &dyn GrowthModel,
        previous: &DVector<f64>,
        dt: f64,
        time: f64,
        step: usize,
    ) -> Result<DVector<f64>, String> {
        let dim = previous.len();

        // The previous state is a good predictor for moderate steps
        let mut x = previous.clone();

        for _ in 0..self.max_iterations {
            let residual = &x - previous - model.rate(&x, time) * dt;

            let mut newton_matrix = DMatrix::identity(dim, dim);
            newton_matrix -= model.rate_jacobian(&x, time) * dt;

            let delta = newton_matrix.lu().solve(&residual).ok_or_else(|| {
                format!(
                    "Newton matrix singular at step {} (t = {}); \
                     the model Jacobian may be inconsistent with its rate",
                    step, time
                )
            })?;

            x -= &delta;

            if delta.norm() <= self.tolerance * (1.0 + x.norm()) {
                return Ok(x);
            }
        }

        Err(format!(
            "Newton iteration did not converge within {} iterations at step {} (t = {}). \
             Try a smaller step size or a looser tolerance.",
            self.max_iterations, step, time
        ))
    }
}

impl Default for ImplicitEuler {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for ImplicitEuler {
    fn solve(&self, model: &dyn GrowthModel, grid: &TimeGrid) -> Result<SimulationResult, String> {
        // ====== Step 1: Validation ======

        grid.validate()?;

        let dt = grid.dt();
        let samples = grid.sample_count();

        let mut state = model.initial_population();
        if state.len() != model.dim() {
            return Err(format!(
                "Model '{}' reports dimension {} but its initial population has {} entries",
                model.name(),
                model.dim(),
                state.len()
            ));
        }

        // ====== Step 2: Setup ======

        let mut time_points = Vec::with_capacity(samples);
        let mut trajectory = Vec::with_capacity(samples);

        time_points.push(0.0);
        trajectory.push(state.clone());

        // ====== Step 3: Time Integration ======

        for step in 1..samples {
            // The rate is evaluated at the *next* sample time
            let t_next = step as f64 * dt;

            state = self.newton_step(model, &state, dt, t_next, step)?;

            trajectory.push(state.clone());
            time_points.push(t_next);

            solver::validate_state(&state, step)?;
        }

        // ====== Step 4: Build Result ======

        let final_state = state;

        let mut result = SimulationResult::new(time_points, trajectory, final_state);

        result.add_metadata("solver", self.name());
        result.add_metadata("model", model.name());
        result.add_metadata("dt", &dt.to_string());
        result.add_metadata("tend", &grid.tend().to_string());
        result.add_metadata("samples", &samples.to_string());

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Implicit Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExponentialGrowth, LogisticGrowth, LotkaVolterra};

    // ====== Solver creation tests ======

    #[test]
    fn test_solver_creation() {
        assert_eq!(ImplicitEuler::new().name(), "Implicit Euler");
        assert_eq!(ImplicitEuler::default().name(), "Implicit Euler");
    }

    #[test]
    #[should_panic(expected = "Newton tolerance must be positive")]
    fn test_zero_tolerance_panics() {
        ImplicitEuler::with_tolerance(0.0, 10);
    }

    #[test]
    #[should_panic(expected = "Newton iteration limit must be at least 1")]
    fn test_zero_iterations_panics() {
        ImplicitEuler::with_tolerance(1e-8, 0);
    }

    // ====== Grid handling tests ======

    #[test]
    fn test_sample_count_matches_grid() {
        let model = ExponentialGrowth::new(-0.1, 1.0);
        let result = ImplicitEuler::new()
            .solve(&model, &TimeGrid::new(5.0, 0.25))
            .unwrap();
        assert_eq!(result.len(), 20);
        assert!((result.time_points[19] - 4.75).abs() < 1e-12);
    }

    // ====== Accuracy tests ======

    #[test]
    fn test_linear_decay_matches_closed_form_per_step() {
        // For dp/dt = -k*p one backward step has the closed form
        // p_{n+1} = p_n / (1 + k*dt); the Newton solve must reproduce it
        let k = 0.4;
        let dt = 0.5;
        let model = ExponentialGrowth::new(-k, 1.0);
        let result = ImplicitEuler::new()
            .solve(&model, &TimeGrid::new(2.0, dt))
            .unwrap();

        let mut expected = 1.0;
        for state in result.trajectory.iter().skip(1) {
            expected /= 1.0 + k * dt;
            assert!((state[0] - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_exponential_decay_accuracy() {
        let model = ExponentialGrowth::new(-0.1, 1.0);
        let result = ImplicitEuler::new()
            .solve(&model, &TimeGrid::new(10.0, 0.01))
            .unwrap();

        let t_last = *result.time_points.last().unwrap();
        let error = (result.final_state[0] - model.exact(t_last)).abs();
        assert!(error < 0.01, "Error {} too large for dt=0.01", error);
    }

    #[test]
    fn test_first_order_convergence() {
        let model = ExponentialGrowth::new(-0.5, 1.0);
        let solver = ImplicitEuler::new();
        let tend = 5.0;

        let mut errors = Vec::new();
        for &dt in &[0.05, 0.025, 0.0125, 0.00625] {
            let result = solver.solve(&model, &TimeGrid::new(tend, dt)).unwrap();
            let t_last = *result.time_points.last().unwrap();
            errors.push((result.final_state[0] - model.exact(t_last)).abs());
        }

        for i in 0..errors.len() - 1 {
            let ratio = errors[i] / errors[i + 1];
            assert!(
                ratio > 1.8 && ratio < 2.2,
                "Convergence ratio {} not first order at level {}",
                ratio,
                i
            );
        }
    }

    // ====== Stability tests ======

    #[test]
    fn test_stable_on_stiff_logistic_at_coarse_step() {
        // The explicit scheme overflows here; backward Euler stays bounded
        // and relaxes monotonically toward the carrying capacity
        let model = LogisticGrowth::new(7.0, 10.0, 20.0);
        let result = ImplicitEuler::new()
            .solve(&model, &TimeGrid::new(5.0, 0.5))
            .unwrap();

        for state in &result.trajectory {
            assert!(state[0].is_finite());
            assert!(state[0] >= 10.0 - 1e-9 && state[0] <= 20.0 + 1e-9);
        }
        assert!((result.final_state[0] - 10.0).abs() < 0.5);
    }

    #[test]
    fn test_matches_explicit_on_mild_problem() {
        use crate::solver::ExplicitEuler;

        let model = LogisticGrowth::new(1.0, 10.0, 1.0);
        let grid = TimeGrid::new(5.0, 0.01);

        let implicit = ImplicitEuler::new().solve(&model, &grid).unwrap();
        let explicit = ExplicitEuler::new().solve(&model, &grid).unwrap();

        // Both are O(dt) accurate, so they agree to a few times dt
        let difference = (implicit.final_state[0] - explicit.final_state[0]).abs();
        assert!(difference < 0.05, "Schemes differ by {}", difference);
    }

    // ====== System tests ======

    #[test]
    fn test_predator_prey_newton_converges() {
        // 2x2 Newton system per step; must converge at a moderate step size
        let model = LotkaVolterra::new(1.0, 0.1, 1.5, 0.075, (10.0, 5.0));
        let result = ImplicitEuler::new()
            .solve(&model, &TimeGrid::new(5.0, 0.01))
            .unwrap();

        for state in &result.trajectory {
            assert!(state[0].is_finite() && state[1].is_finite());
            assert!(state[0] > 0.0 && state[1] > 0.0);
        }
    }

    // ====== Convergence failure tests ======

    #[test]
    fn test_iteration_limit_reported() {
        // One Newton iteration cannot solve the nonlinear logistic step at
        // a coarse dt to 1e-10; expect the convergence error
        let model = LogisticGrowth::new(7.0, 10.0, 20.0);
        let solver = ImplicitEuler::with_tolerance(1e-10, 1);
        let result = solver.solve(&model, &TimeGrid::new(5.0, 0.5));

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("did not converge"));
    }

    // ====== Metadata tests ======

    #[test]
    fn test_metadata() {
        let model = ExponentialGrowth::new(-0.1, 1.0);
        let result = ImplicitEuler::new()
            .solve(&model, &TimeGrid::new(5.0, 0.5))
            .unwrap();

        assert_eq!(result.metadata.get("solver").unwrap(), "Implicit Euler");
        assert_eq!(result.metadata.get("samples").unwrap(), "10");
    }
}
