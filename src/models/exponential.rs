//! Exponential growth model
//!
//! dp/dt = r·p with exact solution p(t) = p₀·e^(rt). A negative rate gives
//! exponential decay. The equation is linear, so it doubles as the canonical
//! test problem for solver accuracy: errors are smooth in the step size and
//! the closed form is exact to machine precision.

use crate::dynamics::GrowthModel;
use nalgebra::{dvector, DMatrix, DVector};

/// Exponential growth (or decay) model dp/dt = r·p
#[derive(Clone, Debug)]
pub struct ExponentialGrowth {
    /// Growth rate r (negative for decay) \[1/time\]
    rate: f64,
    /// Initial population p(0)
    initial: f64,
}

impl ExponentialGrowth {
    /// Create a new exponential growth model
    ///
    /// # Panics
    ///
    /// Panics when `rate` is not finite or `initial` is not positive.
    pub fn new(rate: f64, initial: f64) -> Self {
        assert!(rate.is_finite(), "Rate must be finite, got {}", rate);
        assert!(
            initial.is_finite() && initial > 0.0,
            "Initial population must be positive, got {}",
            initial
        );

        Self { rate, initial }
    }

    /// Exact solution p(t) = p₀·e^(rt) as a scalar
    pub fn exact(&self, time: f64) -> f64 {
        self.initial * (self.rate * time).exp()
    }
}

impl GrowthModel for ExponentialGrowth {
    fn dim(&self) -> usize {
        1
    }

    fn rate(&self, population: &DVector<f64>, _time: f64) -> DVector<f64> {
        population * self.rate
    }

    fn rate_jacobian(&self, _population: &DVector<f64>, _time: f64) -> DMatrix<f64> {
        DMatrix::from_element(1, 1, self.rate)
    }

    fn initial_population(&self) -> DVector<f64> {
        dvector![self.initial]
    }

    fn analytic(&self, time: f64) -> Option<DVector<f64>> {
        Some(dvector![self.exact(time)])
    }

    fn name(&self) -> &str {
        "Exponential Growth"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
