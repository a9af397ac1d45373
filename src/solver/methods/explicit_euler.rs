//! Explicit (forward) Euler solver
//!
//! # Mathematical Background
//!
//! The forward Euler method is the simplest explicit time-stepping scheme
//! for solving ordinary differential equations:
//!
//! ```text
//! dp/dt = f(p, t)
//! ```
//!
//! The scheme advances the solution from t_n to t_{n+1} = t_n + dt using
//! only known values:
//!
//! ```text
//! p_{n+1} = p_n + dt * f(p_n, t_n)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: first-order accurate (global error ~ O(dt))
//! - **Stability**: conditional — for dp/dt = λp the scheme requires
//!   |1 + λ·dt| ≤ 1, so stiff problems force very small steps
//! - **Cost**: one rate evaluation per step
//!
//! # Example
//!
//! ```rust
//! use popdyn_rs::models::LogisticGrowth;
//! use popdyn_rs::solver::{ExplicitEuler, Solver, TimeGrid};
//!
//! # fn main() -> Result<(), String> {
//! let model = LogisticGrowth::new(1.0, 10.0, 1.0);
//! let result = ExplicitEuler::new().solve(&model, &TimeGrid::new(5.0, 0.0625))?;
//! assert_eq!(result.len(), 80);
//! # Ok(())
//! # }
//! ```

use crate::dynamics::GrowthModel;
use crate::solver;
use crate::solver::{SimulationResult, Solver, TimeGrid};

// =================================================================================================
// Explicit Euler Solver
// =================================================================================================

/// Forward Euler time-stepping solver
///
/// Implements p_{n+1} = p_n + dt·f(p_n, t_n).
///
/// # Algorithm
///
/// 1. Start with the model's initial population p_0
/// 2. For each grid sample n = 1, …, N-1:
///    - Evaluate the rate k = f(p_{n-1}, t_{n-1})
///    - Update p_n = p_{n-1} + dt·k
///    - Store the state and check it for NaN/Inf
/// 3. Return the complete trajectory
///
/// # Stability
///
/// On the stiff logistic benchmark (r = 7, p_0 = 2K) this scheme diverges
/// at coarse step sizes — the trajectory overshoots the carrying capacity
/// with growing amplitude until the state overflows, at which point
/// `solve` returns an error. Use [`ImplicitEuler`](crate::solver::ImplicitEuler)
/// for stiff problems.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitEuler;

impl ExplicitEuler {
    /// Create a new forward Euler solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use popdyn_rs::solver::{ExplicitEuler, Solver};
    ///
    /// let solver = ExplicitEuler::new();
    /// assert_eq!(solver.name(), "Explicit Euler");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for ExplicitEuler {
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

        // Preallocate storage for the trajectory
        let mut time_points = Vec::with_capacity(samples);
        let mut trajectory = Vec::with_capacity(samples);

        // Store the initial condition at t = 0
        time_points.push(0.0);
        trajectory.push(state.clone());

        // ====== Step 3: Time Integration ======

        for step in 1..samples {
            // Time at which the rate is evaluated: the *previous* sample
            let t = (step - 1) as f64 * dt;

            // p_{n+1} = p_n + dt * f(p_n, t_n)
            let rate = model.rate(&state, t);
            state += rate * dt;

            trajectory.push(state.clone());

            // Sample time computed directly from the index to avoid
            // accumulating floating-point rounding (see TimeGrid::times)
            time_points.push(step as f64 * dt);

            // Catch numerical blow-up early rather than propagating it
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
        "Explicit Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
