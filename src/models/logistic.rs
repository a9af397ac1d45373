//! Logistic growth model
//!
//! # Mathematical Background
//!
//! The logistic equation describes a population growing toward a carrying
//! capacity K at intrinsic rate r:
//!
//! ```text
//! dp/dt = r * p * (1 - p/K)
//! ```
//!
//! It has the closed-form exact solution
//!
//! ```text
//! p(t) = K * p0 / (p0 + (K - p0) * exp(-r*t))
//! ```
//!
//! which makes it the reference problem for step-size refinement studies:
//! the numerical trajectory can be compared point by point against ground
//! truth.
//!
//! # Benchmark Parameterizations
//!
//! Two parameter sets recur throughout the tests and demos:
//!
//! - `(r=1, K=10, p0=1)` — a population starting well below capacity;
//!   exact solution p(t) = 10/(1 + 9·e^(−t)), p(0) = 1.
//! - `(r=7, K=10, p0=20)` — a stiff case starting *above* capacity;
//!   exact solution p(t) = 200/(20 − 10·e^(−7t)), p(0) = 20. The explicit
//!   scheme diverges here at coarse step sizes while the implicit scheme
//!   stays stable.
//!
//! # Example
//!
//! ```rust
//! use popdyn_rs::models::LogisticGrowth;
//! use popdyn_rs::dynamics::GrowthModel;
//!
//! let model = LogisticGrowth::new(1.0, 10.0, 1.0);
//! assert!((model.exact(0.0) - 1.0).abs() < 1e-12);
//!
//! // The population approaches the carrying capacity
//! assert!((model.exact(50.0) - 10.0).abs() < 1e-6);
//! ```

use crate::dynamics::GrowthModel;
use nalgebra::{dvector, DMatrix, DVector};

/// Logistic growth model dp/dt = r·p·(1 − p/K)
///
/// Scalar model (dim = 1) with a closed-form exact solution.
#[derive(Clone, Debug)]
pub struct LogisticGrowth {
    /// Intrinsic growth rate r \[1/time\]
    growth_rate: f64,
    /// Carrying capacity K \[individuals\]
    capacity: f64,
    /// Initial population p(0) \[individuals\]
    initial: f64,
}

impl LogisticGrowth {
    /// Create a new logistic growth model
    ///
    /// # Arguments
    ///
    /// * `growth_rate` - Intrinsic growth rate r
    /// * `capacity` - Carrying capacity K (must be positive)
    /// * `initial` - Initial population p(0) (must be positive)
    ///
    /// # Panics
    ///
    /// Panics when `capacity` or `initial` is not positive, or when any
    /// parameter is not finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use popdyn_rs::models::LogisticGrowth;
    /// let model = LogisticGrowth::new(1.0, 10.0, 1.0);
    /// ```
    pub fn new(growth_rate: f64, capacity: f64, initial: f64) -> Self {
        assert!(
            growth_rate.is_finite(),
            "Growth rate must be finite, got {}",
            growth_rate
        );
        assert!(
            capacity.is_finite() && capacity > 0.0,
            "Carrying capacity must be positive, got {}",
            capacity
        );
        assert!(
            initial.is_finite() && initial > 0.0,
            "Initial population must be positive, got {}",
            initial
        );

        Self {
            growth_rate,
            capacity,
            initial,
        }
    }

    /// Get intrinsic growth rate r
    pub fn growth_rate(&self) -> f64 {
        self.growth_rate
    }

    /// Get carrying capacity K
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Exact solution p(t) as a scalar
    ///
    /// ```text
    /// p(t) = K * p0 / (p0 + (K - p0) * exp(-r*t))
    /// ```
    ///
    /// Convenience for comparison plotting; [`GrowthModel::analytic`]
    /// returns the same value wrapped in a one-element vector.
    pub fn exact(&self, time: f64) -> f64 {
        let decayed = (self.capacity - self.initial) * (-self.growth_rate * time).exp();
        self.capacity * self.initial / (self.initial + decayed)
    }
}

impl GrowthModel for LogisticGrowth {
    fn dim(&self) -> usize {
        1
    }

    fn rate(&self, population: &DVector<f64>, _time: f64) -> DVector<f64> {
        let p = population[0];
        dvector![self.growth_rate * p * (1.0 - p / self.capacity)]
    }

    fn rate_jacobian(&self, population: &DVector<f64>, _time: f64) -> DMatrix<f64> {
        // d/dp [r*p*(1 - p/K)] = r*(1 - 2p/K)
        let p = population[0];
        DMatrix::from_element(1, 1, self.growth_rate * (1.0 - 2.0 * p / self.capacity))
    }

    fn initial_population(&self) -> DVector<f64> {
        dvector![self.initial]
    }

    fn analytic(&self, time: f64) -> Option<DVector<f64>> {
        Some(dvector![self.exact(time)])
    }

    fn name(&self) -> &str {
        "Logistic Growth"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
