//! Scheme-vs-analytic comparison grids
//!
//! This module renders the step-size refinement comparison: a 2×2 grid of
//! charts, one per step size, each overlaying the numerical series computed
//! at that step size against the model's closed-form solution.
//!
//! The analytic reference is always sampled at the *finest* step size in
//! the sequence, regardless of which subplot it appears in — the reference
//! curve tracks the best grid available so that the coarse subplots show
//! the approximation error, not a coarsened reference.
//!
//! # Available functions
//!
//! - [`plot_comparison_grid`]       — generic renderer, analytic formula injected
//! - [`plot_explicit_comparison`]   — logistic reference p(t) = 10/(1 + 9·e^(−t))
//! - [`plot_implicit_comparison`]   — logistic reference p(t) = 200/(20 − 10·e^(−7t))
//!
//! # Usage
//!
//! ```rust,no_run
//! use popdyn_rs::models::LogisticGrowth;
//! use popdyn_rs::solver::{refinement_study, ExplicitEuler};
//! use popdyn_rs::output::visualization::plot_explicit_comparison;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let model = LogisticGrowth::new(1.0, 10.0, 1.0);
//! let dt_all = [0.5, 0.25, 0.125, 0.0625];
//! let study = refinement_study(&ExplicitEuler::new(), &model, 5.0, &dt_all)?;
//!
//! plot_explicit_comparison(&study, &dt_all, 5.0, "Explicit Euler", "study.png", None)?;
//! # Ok(())
//! # }
//! ```

use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use super::config::PlotConfig;
use crate::models::LogisticGrowth;
use crate::solver::{ApproximationSet, TimeGrid};

/// Subplots per comparison figure (2×2 grid)
const GRID_PANELS: usize = 4;

// =================================================================================================
// Public API
// =================================================================================================

/// Render a 2×2 comparison grid with an injected analytic formula
///
/// One subplot per step size in `step_sizes` (given coarsest to finest).
/// Subplot `i` draws two curves on shared axes:
///
/// 1. the analytic solution, evaluated on the grid of the *finest* step
///    size in the sequence (legend entry `Analytic Soln`);
/// 2. the series stored in `approx` for `step_sizes[i]`, on that step
///    size's own grid (legend entry `label`).
///
/// Subplot titles follow the `function p(t) v/s t for dt=<dt>` convention.
///
/// # Arguments
///
/// * `approx`      — series per step size, as produced by
///   [`refinement_study`](crate::solver::refinement_study)
/// * `step_sizes`  — exactly four step sizes, coarsest to finest
/// * `tend`        — simulation horizon; every grid samples `[0, tend)`
/// * `label`       — legend entry for the numerical series
/// * `analytic`    — closed-form solution p(t)
/// * `output_path` — output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      — optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Fails — before anything is drawn — when `approx` lacks a series for one
/// of the step sizes, or when a stored series length does not match the
/// sample count of its grid. Backend failures (unwritable path) are
/// propagated.
pub fn plot_comparison_grid<F>(
    approx: &ApproximationSet,
    step_sizes: &[f64],
    tend: f64,
    label: &str,
    analytic: F,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>>
where
    F: Fn(f64) -> f64,
{
    let default_config = PlotConfig::default();
    let config = config.unwrap_or(&default_config);

    if step_sizes.len() != GRID_PANELS {
        return Err(format!(
            "Comparison grid needs exactly {} step sizes, got {}",
            GRID_PANELS,
            step_sizes.len()
        )
        .into());
    }

    // Validate every panel up front: a missing or mis-sized series must
    // fail the whole call before any chart is drawn.
    let mut panels: Vec<(f64, Vec<f64>, &[f64])> = Vec::with_capacity(GRID_PANELS);
    for &dt in step_sizes {
        let series = approx
            .series(dt)
            .ok_or_else(|| format!("No approximation series stored for dt = {}", dt))?;

        let times = TimeGrid::new(tend, dt).times();
        if series.len() != times.len() {
            return Err(format!(
                "Series for dt = {} has {} samples but its time grid has {}",
                dt,
                series.len(),
                times.len()
            )
            .into());
        }

        panels.push((dt, times, series));
    }

    // Analytic reference on the finest grid in the sequence
    let finest = step_sizes[GRID_PANELS - 1];
    let reference_times = TimeGrid::new(tend, finest).times();
    let reference: Vec<f64> = reference_times.iter().map(|&t| analytic(t)).collect();

    let ext = Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let root =
                SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
            draw_grid_impl(&root, &panels, &reference_times, &reference, label, config)
        }
        _ => {
            let root =
                BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
            draw_grid_impl(&root, &panels, &reference_times, &reference, label, config)
        }
    }
}

/// Render the explicit-scheme comparison grid
///
/// Fixes the analytic reference to the logistic solution
/// p(t) = 10/(1 + 9·e^(−t)) — growth rate 1, capacity 10, initial
/// population 1 — and forwards to [`plot_comparison_grid`].
///
/// # Example
///
/// ```rust,no_run
/// # use popdyn_rs::models::LogisticGrowth;
/// # use popdyn_rs::solver::{refinement_study, ExplicitEuler};
/// use popdyn_rs::output::visualization::plot_explicit_comparison;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let model = LogisticGrowth::new(1.0, 10.0, 1.0);
/// # let dt_all = [0.5, 0.25, 0.125, 0.0625];
/// # let study = refinement_study(&ExplicitEuler::new(), &model, 5.0, &dt_all)?;
/// plot_explicit_comparison(&study, &dt_all, 5.0, "Explicit Euler", "explicit.png", None)?;
/// # Ok(())
/// # }
/// ```
pub fn plot_explicit_comparison(
    approx: &ApproximationSet,
    step_sizes: &[f64],
    tend: f64,
    label: &str,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let model = LogisticGrowth::new(1.0, 10.0, 1.0);
    plot_comparison_grid(
        approx,
        step_sizes,
        tend,
        label,
        |t| model.exact(t),
        output_path,
        config,
    )
}

/// Render the implicit-scheme comparison grid
///
/// Fixes the analytic reference to the stiff logistic solution
/// p(t) = 200/(20 − 10·e^(−7t)) — growth rate 7, capacity 10, initial
/// population 20 — and forwards to [`plot_comparison_grid`].
pub fn plot_implicit_comparison(
    approx: &ApproximationSet,
    step_sizes: &[f64],
    tend: f64,
    label: &str,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let model = LogisticGrowth::new(7.0, 10.0, 20.0);
    plot_comparison_grid(
        approx,
        step_sizes,
        tend,
        label,
        |t| model.exact(t),
        output_path,
        config,
    )
}

// =================================================================================================
// Private Plot Implementation
// =================================================================================================

/// Draw the validated panels onto a drawing area split 2×2
fn draw_grid_impl<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    panels: &[(f64, Vec<f64>, &[f64])],
    reference_times: &[f64],
    reference: &[f64],
    label: &str,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    root.fill(&config.background)?;

    let areas = root.split_evenly((2, 2));

    for (area, (dt, times, series)) in areas.iter().zip(panels) {
        // Axis ranges over both curves, with 10% vertical headroom
        let max_time = reference_times
            .last()
            .copied()
            .unwrap_or(1.0)
            .max(times.last().copied().unwrap_or(0.0));

        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for &v in reference.iter().chain(series.iter()) {
            y_min = y_min.min(v);
            y_max = y_max.max(v);
        }
        let y_pad = 0.1 * (y_max - y_min).max(1e-10);

        let mut chart = ChartBuilder::on(area)
            .caption(
                format!("function p(t) v/s t for dt={}", dt),
                ("sans-serif", 20).into_font(),
            )
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(45)
            .build_cartesian_2d(0.0..max_time, (y_min - y_pad)..(y_max + y_pad))?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);

        if config.show_grid {
            mesh.draw()?;
        } else {
            mesh.disable_mesh().draw()?;
        }

        let line_width = config.line_width;

        // Analytic reference, always on the finest grid
        let analytic_color = config.analytic_color;
        chart
            .draw_series(LineSeries::new(
                reference_times
                    .iter()
                    .zip(reference.iter())
                    .map(|(t, p)| (*t, *p)),
                analytic_color.stroke_width(line_width),
            ))?
            .label("Analytic Soln")
            .legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    analytic_color.stroke_width(line_width),
                )
            });

        // Numerical series for this panel's step size
        let approx_color = config.approx_color;
        chart
            .draw_series(LineSeries::new(
                times.iter().zip(series.iter()).map(|(t, p)| (*t, *p)),
                approx_color.stroke_width(line_width),
            ))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    approx_color.stroke_width(line_width),
                )
            });

        chart
            .configure_series_labels()
            .background_style(config.background.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
