//! Growth models
//!
//! This module provides the trait all population growth models implement.
//! A growth model encapsulates the right-hand side of a first-order ODE
//! system dp/dt = f(p, t) describing how a population evolves.
//!
//! # Core Concepts
//!
//! - **Growth Model**: Computes the growth rate at a given population state
//! - **Analytic Solution**: Optional closed-form exact solution, the ground
//!   truth for error comparison
//!
//! # Architecture
//!
//! Growth models are **separate from numerical solvers**:
//! - The model provides the **equations** (dynamics)
//! - The solver provides the **method** to solve them (numerics)
//!
//! This separation allows:
//! - Same model with different solvers (explicit Euler, implicit Euler, etc.)
//! - Same solver with different models (logistic, exponential, predator-prey)
//!
//! # Example
//!
//! ```rust
//! use popdyn_rs::dynamics::GrowthModel;
//! use popdyn_rs::models::LogisticGrowth;
//!
//! let model = LogisticGrowth::new(1.0, 10.0, 1.0);
//!
//! // Initial population p(0)
//! let p0 = model.initial_population();
//!
//! // Growth rate dp/dt at that state
//! let rate = model.rate(&p0, 0.0);
//! assert!(rate[0] > 0.0); // below capacity, the population grows
//! ```

// module declaration
pub mod traits;

// re-export commonly used types for convenience
pub use traits::GrowthModel;
