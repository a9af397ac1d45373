//! Visualization module for simulation results
//!
//! This module provides tools to visualize refinement studies using the
//! `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **comparison**: Scheme-vs-analytic 2×2 comparison grids
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use popdyn_rs::models::LogisticGrowth;
//! use popdyn_rs::solver::{refinement_study, ExplicitEuler};
//! use popdyn_rs::output::visualization::{plot_explicit_comparison, PlotConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let model = LogisticGrowth::new(1.0, 10.0, 1.0);
//! let dt_all = [0.5, 0.25, 0.125, 0.0625];
//! let study = refinement_study(&ExplicitEuler::new(), &model, 5.0, &dt_all)?;
//!
//! // With default config
//! plot_explicit_comparison(&study, &dt_all, 5.0, "Explicit Euler", "study.png", None)?;
//!
//! // Or customized
//! let mut config = PlotConfig::default();
//! config.width = 1920;
//! config.height = 1080;
//! plot_explicit_comparison(&study, &dt_all, 5.0, "Explicit Euler", "hd.png", Some(&config))?;
//! # Ok(())
//! # }
//! ```
//!
//! # When to Use Which Function
//!
//! | Use Case | Function |
//! |----------|----------|
//! | Explicit-scheme study vs its logistic reference | [`plot_explicit_comparison`] |
//! | Implicit-scheme study vs its stiff logistic reference | [`plot_implicit_comparison`] |
//! | Any study vs any closed form | [`plot_comparison_grid`] |

pub mod comparison;
pub mod config;

pub use config::PlotConfig;

pub use comparison::{plot_comparison_grid, plot_explicit_comparison, plot_implicit_comparison};
