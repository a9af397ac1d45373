//! Implicit Euler refinement study on the stiff benchmark
//!
//! Solves dp/dt = 7·p·(1 − p/10), p(0) = 20 — a population relaxing onto
//! its carrying capacity from above — with the backward Euler scheme at
//! four halving step sizes, and renders the 2×2 comparison grid against
//! the exact solution p(t) = 200/(20 − 10·e^(−7t)).
//!
//! The forward Euler scheme overflows on this problem at the coarser step
//! sizes; the backward scheme handles all of them.
//!
//! Run with:
//!
//! ```bash
//! cargo run --example implicit_refinement
//! ```

use popdyn_rs::models::LogisticGrowth;
use popdyn_rs::output::export::export_refinement_csv;
use popdyn_rs::output::visualization::plot_implicit_comparison;
use popdyn_rs::solver::{refinement_study, ImplicitEuler, Solver};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let tend = 5.0;
    let dt_all = [0.5, 0.25, 0.125, 0.0625];

    let model = LogisticGrowth::new(7.0, 10.0, 20.0);
    let solver = ImplicitEuler::new();

    println!("Running {} refinement study over [0, {})...", solver.name(), tend);
    let study = refinement_study(&solver, &model, tend, &dt_all)?;

    for (dt, series) in study.iter() {
        println!(
            "  dt = {:<7} -> {} samples, final population {:.4}",
            dt,
            series.len(),
            series.last().unwrap()
        );
    }

    plot_implicit_comparison(
        &study,
        &dt_all,
        tend,
        solver.name(),
        "implicit_refinement.png",
        None,
    )?;
    println!("Comparison grid written to implicit_refinement.png");

    export_refinement_csv(&study, tend, "implicit_refinement.csv", None)?;
    println!("Series data written to implicit_refinement.csv");

    Ok(())
}
