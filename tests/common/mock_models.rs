//! Mock growth models for integration tests

use nalgebra::{dvector, DVector};
use popdyn_rs::dynamics::GrowthModel;

/// Mock model: exponential decay dp/dt = -k * p
///
/// Analytic solution: p(t) = p_0 * exp(-k * t)
///
/// Used to test numerical accuracy since the exact solution is known.
pub struct ExponentialDecay {
    decay_rate: f64,
    initial: f64,
}

impl ExponentialDecay {
    pub fn new(decay_rate: f64, initial: f64) -> Self {
        Self {
            decay_rate,
            initial,
        }
    }

    /// Exact solution as a scalar
    pub fn exact(&self, time: f64) -> f64 {
        self.initial * (-self.decay_rate * time).exp()
    }
}

impl GrowthModel for ExponentialDecay {
    fn dim(&self) -> usize {
        1
    }

    fn rate(&self, population: &DVector<f64>, _time: f64) -> DVector<f64> {
        population * -self.decay_rate
    }

    fn initial_population(&self) -> DVector<f64> {
        dvector![self.initial]
    }

    fn analytic(&self, time: f64) -> Option<DVector<f64>> {
        Some(dvector![self.exact(time)])
    }

    fn name(&self) -> &str {
        "Exponential Decay"
    }
}

/// Mock model: constant growth dp/dt = c
///
/// Analytic solution: p(t) = p_0 + c * t — both Euler schemes reproduce
/// this exactly, which makes it a clean correctness baseline.
pub struct ConstantGrowth {
    growth_rate: f64,
}

impl ConstantGrowth {
    pub fn new(growth_rate: f64) -> Self {
        Self { growth_rate }
    }
}

impl GrowthModel for ConstantGrowth {
    fn dim(&self) -> usize {
        1
    }

    fn rate(&self, _population: &DVector<f64>, _time: f64) -> DVector<f64> {
        dvector![self.growth_rate]
    }

    fn initial_population(&self) -> DVector<f64> {
        dvector![0.0]
    }

    fn analytic(&self, time: f64) -> Option<DVector<f64>> {
        Some(dvector![self.growth_rate * time])
    }

    fn name(&self) -> &str {
        "Constant Growth"
    }
}
