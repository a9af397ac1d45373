//! Lotka-Volterra predator-prey model
//!
//! # Mathematical Background
//!
//! Two interacting populations, prey x and predators y:
//!
//! ```text
//! dx/dt = a*x - b*x*y
//! dy/dt = d*x*y - c*y
//! ```
//!
//! - `a`: prey birth rate
//! - `b`: predation rate
//! - `c`: predator death rate
//! - `d`: predator reproduction per prey consumed
//!
//! The system is conservative and periodic but has no closed-form solution,
//! so [`analytic`](crate::dynamics::GrowthModel::analytic) returns `None`.
//! It exists here to exercise the multi-dimensional solver path: the state
//! is a two-element vector and the implicit scheme's Newton step solves a
//! genuine 2×2 linear system.

use crate::dynamics::GrowthModel;
use nalgebra::{dvector, DMatrix, DVector};

/// Lotka-Volterra predator-prey model (dim = 2, no closed form)
#[derive(Clone, Debug)]
pub struct LotkaVolterra {
    /// Prey birth rate a
    prey_birth: f64,
    /// Predation rate b
    predation: f64,
    /// Predator death rate c
    predator_death: f64,
    /// Predator reproduction rate d
    conversion: f64,
    /// Initial populations (prey, predators)
    initial: (f64, f64),
}

impl LotkaVolterra {
    /// Create a new predator-prey model
    ///
    /// # Panics
    ///
    /// Panics when any rate is not positive or either initial population
    /// is negative.
    pub fn new(
        prey_birth: f64,
        predation: f64,
        predator_death: f64,
        conversion: f64,
        initial: (f64, f64),
    ) -> Self {
        for (name, value) in [
            ("prey birth", prey_birth),
            ("predation", predation),
            ("predator death", predator_death),
            ("conversion", conversion),
        ] {
            assert!(
                value.is_finite() && value > 0.0,
                "{} rate must be positive, got {}",
                name,
                value
            );
        }
        assert!(
            initial.0 >= 0.0 && initial.1 >= 0.0,
            "Initial populations must be non-negative, got ({}, {})",
            initial.0,
            initial.1
        );

        Self {
            prey_birth,
            predation,
            predator_death,
            conversion,
            initial,
        }
    }
}

impl GrowthModel for LotkaVolterra {
    fn dim(&self) -> usize {
        2
    }

    fn rate(&self, population: &DVector<f64>, _time: f64) -> DVector<f64> {
        let (x, y) = (population[0], population[1]);
        dvector![
            self.prey_birth * x - self.predation * x * y,
            self.conversion * x * y - self.predator_death * y
        ]
    }

    fn rate_jacobian(&self, population: &DVector<f64>, _time: f64) -> DMatrix<f64> {
        let (x, y) = (population[0], population[1]);
        DMatrix::from_row_slice(
            2,
            2,
            &[
                self.prey_birth - self.predation * y,
                -self.predation * x,
                self.conversion * y,
                self.conversion * x - self.predator_death,
            ],
        )
    }

    fn initial_population(&self) -> DVector<f64> {
        dvector![self.initial.0, self.initial.1]
    }

    fn name(&self) -> &str {
        "Lotka-Volterra"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LotkaVolterra {
        LotkaVolterra::new(1.0, 0.1, 1.5, 0.075, (10.0, 5.0))
    }

    #[test]
    fn test_dimensions() {
        let m = model();
        assert_eq!(m.dim(), 2);
        assert_eq!(m.initial_population().len(), 2);
    }

    #[test]
    fn test_no_analytic_solution() {
        assert!(model().analytic(1.0).is_none());
    }

    #[test]
    fn test_equilibrium_point() {
        // At (c/d, a/b) both rates vanish
        let m = model();
        let equilibrium = dvector![1.5 / 0.075, 1.0 / 0.1];
        let rate = m.rate(&equilibrium, 0.0);
        assert!(rate[0].abs() < 1e-12);
        assert!(rate[1].abs() < 1e-12);
    }

    #[test]
    fn test_exact_jacobian_matches_finite_difference() {
        let m = model();
        let p = dvector![4.0, 3.0];
        let exact = m.rate_jacobian(&p, 0.0);

        struct NoJacobian(LotkaVolterra);
        impl GrowthModel for NoJacobian {
            fn dim(&self) -> usize {
                2
            }
            fn rate(&self, p: &DVector<f64>, t: f64) -> DVector<f64> {
                self.0.rate(p, t)
            }
            fn initial_population(&self) -> DVector<f64> {
                self.0.initial_population()
            }
            fn name(&self) -> &str {
                "wrapper"
            }
        }

        let approx = NoJacobian(m).rate_jacobian(&p, 0.0);
        for i in 0..2 {
            for j in 0..2 {
                assert!(
                    (exact[(i, j)] - approx[(i, j)]).abs() < 1e-5,
                    "entry ({}, {})",
                    i,
                    j
                );
            }
        }
    }
}
