//! popdyn-rs: Population Dynamics Simulation Framework
//!
//! A flexible framework for simulating population growth models with
//! explicit and implicit time-stepping schemes, and for visualizing
//! the numerical approximation error against closed-form solutions.
//!
//! # Architecture
//!
//! popdyn-rs is built on two core principles:
//!
//! 1. **Separation of Dynamics and Numerics**
//!    - Growth models define equations (what to solve)
//!    - Numerical solvers provide methods (how to solve)
//!
//! 2. **Extensibility and Type Safety**
//!    - Trait-based design for easy extension
//!    - Any [`GrowthModel`](dynamics::GrowthModel) works with any
//!      [`Solver`](solver::Solver)
//!
//! # Quick Start
//!
//! ```rust
//! use popdyn_rs::models::LogisticGrowth;
//! use popdyn_rs::solver::{ExplicitEuler, Solver, TimeGrid};
//!
//! # fn main() -> Result<(), String> {
//! // 1. Pick a growth model: dp/dt = r * p * (1 - p/K)
//! let model = LogisticGrowth::new(1.0, 10.0, 1.0);
//!
//! // 2. Pick a sampling grid over [0, tend)
//! let grid = TimeGrid::new(5.0, 0.0625);
//!
//! // 3. Solve
//! let solver = ExplicitEuler::new();
//! let result = solver.solve(&model, &grid)?;
//!
//! // 4. Access results
//! println!("Samples computed: {}", result.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Refinement Studies
//!
//! The central workflow is the step-size refinement study: solve the same
//! model at a sequence of refined step sizes, then overlay each numerical
//! trajectory against the analytic solution in a 2×2 comparison grid:
//!
//! ```rust,no_run
//! use popdyn_rs::models::LogisticGrowth;
//! use popdyn_rs::solver::{refinement_study, ExplicitEuler};
//! use popdyn_rs::output::visualization::plot_explicit_comparison;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let model = LogisticGrowth::new(1.0, 10.0, 1.0);
//! let dt_all = [0.5, 0.25, 0.125, 0.0625];
//!
//! let study = refinement_study(&ExplicitEuler::new(), &model, 5.0, &dt_all)?;
//! plot_explicit_comparison(&study, &dt_all, 5.0, "Explicit Euler", "study.png", None)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`dynamics`]: Growth model trait (equations)
//! - [`models`]: Concrete growth models (logistic, exponential, predator-prey)
//! - [`solver`]: Numerical solvers (methods) and refinement studies
//! - [`output`]: Result visualization and export

// Core modules
pub mod dynamics;

pub mod models;
pub mod output;
pub mod solver;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use popdyn_rs::prelude::*;
    //! ```
    pub use crate::dynamics::GrowthModel;
    pub use crate::models::{ExponentialGrowth, LogisticGrowth, LotkaVolterra};
    pub use crate::solver::{refinement_study,
                            ApproximationSet,
                            ExplicitEuler,
                            ImplicitEuler,
                            SimulationResult,
                            Solver,
                            TimeGrid};
}
