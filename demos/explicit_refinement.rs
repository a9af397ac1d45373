//! Explicit Euler refinement study
//!
//! Solves the logistic benchmark dp/dt = p·(1 − p/10), p(0) = 1 with the
//! forward Euler scheme at four halving step sizes and renders the 2×2
//! comparison grid against the exact solution p(t) = 10/(1 + 9·e^(−t)).
//!
//! Run with:
//!
//! ```bash
//! cargo run --example explicit_refinement
//! ```

use popdyn_rs::models::LogisticGrowth;
use popdyn_rs::output::export::export_refinement_csv;
use popdyn_rs::output::visualization::plot_explicit_comparison;
use popdyn_rs::solver::{refinement_study, ExplicitEuler, Solver};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let tend = 5.0;
    let dt_all = [0.5, 0.25, 0.125, 0.0625];

    let model = LogisticGrowth::new(1.0, 10.0, 1.0);
    let solver = ExplicitEuler::new();

    println!("Running {} refinement study over [0, {})...", solver.name(), tend);
    let study = refinement_study(&solver, &model, tend, &dt_all)?;

    for (dt, series) in study.iter() {
        println!("  dt = {:<7} -> {} samples", dt, series.len());
    }

    plot_explicit_comparison(
        &study,
        &dt_all,
        tend,
        solver.name(),
        "explicit_refinement.png",
        None,
    )?;
    println!("Comparison grid written to explicit_refinement.png");

    export_refinement_csv(&study, tend, "explicit_refinement.csv", None)?;
    println!("Series data written to explicit_refinement.csv");

    Ok(())
}
