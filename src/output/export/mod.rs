//! Data export for external analysis
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use popdyn_rs::output::export::export_series_csv;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let time = vec![0.0, 0.5, 1.0];
//! let population = vec![1.0, 1.4, 1.9];
//! export_series_csv(&time, &population, "growth.csv", None)?;
//! # Ok(())
//! # }
//! ```

pub mod csv;

pub use csv::{export_refinement_csv, export_series_csv, CsvConfig, CsvMetadata};
