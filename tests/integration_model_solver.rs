//! Integration tests: dynamics module + solver module
//!
//! These tests verify that growth models and solvers work correctly
//! together.

use popdyn_rs::dynamics::GrowthModel;
use popdyn_rs::models::{LogisticGrowth, LotkaVolterra};
use popdyn_rs::solver::{ExplicitEuler, ImplicitEuler, Solver, TimeGrid};

mod common;
use common::test_helpers::{max_abs_error, relative_error};
use common::{ConstantGrowth, ExponentialDecay};

// =================================================================================================
// Basic Integration Tests
// =================================================================================================

#[test]
fn test_explicit_euler_with_exponential_decay() {
    // Setup
    let model = ExponentialDecay::new(0.1, 1.0);
    let grid = TimeGrid::new(10.0, 0.01);

    // Solve
    let result = ExplicitEuler::new().solve(&model, &grid).unwrap();

    // Verify sampling: [0, 10) in steps of 0.01
    assert_eq!(result.len(), 1000);
    assert!(result.time_points[0].abs() < 1e-10);
    assert!((result.time_points.last().unwrap() - 9.99).abs() < 1e-10);

    // Check final value against p(t_last) = exp(-0.1 * t_last)
    let t_last = *result.time_points.last().unwrap();
    let error = relative_error(result.final_state[0], model.exact(t_last));

    // Euler with dt=0.01 should have ~1% error
    assert!(error < 0.02, "Error {} too large", error);
}

#[test]
fn test_implicit_euler_with_exponential_decay() {
    let model = ExponentialDecay::new(0.1, 1.0);
    let grid = TimeGrid::new(10.0, 0.01);

    let result = ImplicitEuler::new().solve(&model, &grid).unwrap();

    let t_last = *result.time_points.last().unwrap();
    let error = relative_error(result.final_state[0], model.exact(t_last));
    assert!(error < 0.02, "Error {} too large", error);
}

#[test]
fn test_both_schemes_exact_for_constant_growth() {
    // dp/dt = c -> p(t) = c*t; both schemes reproduce a constant rate
    // exactly at every sample
    let model = ConstantGrowth::new(2.0);
    let grid = TimeGrid::new(5.0, 0.5);

    for solver in [&ExplicitEuler::new() as &dyn Solver, &ImplicitEuler::new()] {
        let result = solver.solve(&model, &grid).unwrap();

        let expected: Vec<f64> = result.time_points.iter().map(|&t| 2.0 * t).collect();
        let actual = result.component(0).unwrap();

        assert!(
            max_abs_error(&actual, &expected) < 1e-9,
            "{} not exact for constant growth",
            solver.name()
        );
    }
}

// =================================================================================================
// Trajectory Consistency Tests
// =================================================================================================

#[test]
fn test_trajectory_matches_analytic_pointwise() {
    // Fine-step logistic run must track the closed form at every sample
    let model = LogisticGrowth::new(1.0, 10.0, 1.0);
    let grid = TimeGrid::new(5.0, 0.001);

    let result = ExplicitEuler::new().solve(&model, &grid).unwrap();
    let actual = result.component(0).unwrap();

    let expected: Vec<f64> = result
        .time_points
        .iter()
        .map(|&t| model.analytic(t).unwrap()[0])
        .collect();

    assert!(max_abs_error(&actual, &expected) < 0.01);
}

#[test]
fn test_schemes_agree_on_mild_problem() {
    let model = LogisticGrowth::new(1.0, 10.0, 1.0);
    let grid = TimeGrid::new(5.0, 0.01);

    let explicit = ExplicitEuler::new().solve(&model, &grid).unwrap();
    let implicit = ImplicitEuler::new().solve(&model, &grid).unwrap();

    let difference = max_abs_error(
        &explicit.component(0).unwrap(),
        &implicit.component(0).unwrap(),
    );
    assert!(difference < 0.1, "Schemes differ by {}", difference);
}

// =================================================================================================
// System Integration Tests
// =================================================================================================

#[test]
fn test_predator_prey_with_both_schemes() {
    let model = LotkaVolterra::new(1.0, 0.1, 1.5, 0.075, (10.0, 5.0));
    let grid = TimeGrid::new(5.0, 0.005);

    let explicit = ExplicitEuler::new().solve(&model, &grid).unwrap();
    let implicit = ImplicitEuler::new().solve(&model, &grid).unwrap();

    assert_eq!(explicit.len(), implicit.len());

    // Both populations stay positive under both schemes
    for result in [&explicit, &implicit] {
        for state in &result.trajectory {
            assert!(state[0] > 0.0 && state[1] > 0.0);
        }
    }

    // The schemes agree to O(dt) on this smooth problem
    let prey_difference = max_abs_error(
        &explicit.component(0).unwrap(),
        &implicit.component(0).unwrap(),
    );
    assert!(prey_difference < 1.0, "Prey series differ by {}", prey_difference);
}

#[test]
fn test_component_extraction_per_population() {
    let model = LotkaVolterra::new(1.0, 0.1, 1.5, 0.075, (10.0, 5.0));
    let result = ExplicitEuler::new()
        .solve(&model, &TimeGrid::new(1.0, 0.01))
        .unwrap();

    let prey = result.component(0).unwrap();
    let predators = result.component(1).unwrap();

    assert_eq!(prey.len(), result.len());
    assert_eq!(predators.len(), result.len());
    assert!((prey[0] - 10.0).abs() < 1e-12);
    assert!((predators[0] - 5.0).abs() < 1e-12);
    assert!(result.component(2).is_err());
}
