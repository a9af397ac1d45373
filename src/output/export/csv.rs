//! CSV export for simulation and refinement-study data
//!
//! This module exports sampled series to CSV (Comma-Separated Values),
//! readable by Excel, pandas, MATLAB, and most analysis tools.
//!
//! # Features
//!
//! - **Simple interface**: export from `&[f64]` slices
//! - **Metadata support**: optional comment header with run parameters
//! - **Customizable**: delimiter, precision, column headers
//! - **Refinement studies**: one column per step size, padded rows
//!
//! # Quick Examples
//!
//! ## Single Series
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
//!
//! **Output** (`growth.csv`):
//! ```csv
//! t,p(t)
//! 0.000000,1.000000
//! 0.500000,1.400000
//! 1.000000,1.900000
//! ```
//!
//! ## With Metadata
//!
//! ```rust,no_run
//! use popdyn_rs::output::export::{export_series_csv, CsvConfig, CsvMetadata};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let (time, population) = (vec![0.0], vec![1.0]);
//! let mut config = CsvConfig::default();
//! config.include_metadata = true;
//! config.metadata = Some(CsvMetadata {
//!     model_name: Some("Logistic Growth".to_string()),
//!     solver_name: Some("Explicit Euler".to_string()),
//!     tend: Some(5.0),
//!     step_size: Some(0.0625),
//! });
//!
//! export_series_csv(&time, &population, "growth.csv", Some(&config))?;
//! # Ok(())
//! # }
//! ```
//!
//! **Output** (`growth.csv`):
//! ```csv
//! # Population Dynamics Simulation Data
//! # Model: Logistic Growth
//! # Solver: Explicit Euler
//! # End Time: 5
//! # Step Size: 0.0625
//! #
//! t,p(t)
//! 0.000000,1.000000
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::solver::ApproximationSet;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Run parameters recorded in the optional CSV comment header
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Growth model name
    pub model_name: Option<String>,

    /// Solver name
    pub solver_name: Option<String>,

    /// Simulation horizon
    pub tend: Option<f64>,

    /// Step size (single-series export only)
    pub step_size: Option<f64>,
}

/// Configuration for CSV export
///
/// # Fields
///
/// - `delimiter`: Column separator (default: ',')
/// - `precision`: Number of decimal places (default: 6)
/// - `include_metadata`: Add comment header with run parameters
/// - `metadata`: Run parameters to include
/// - `time_header`: Header of the time column
/// - `value_header`: Header of the population column
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column separator (default: ',')
    pub delimiter: char,

    /// Number of decimal places (default: 6)
    pub precision: usize,

    /// Add comment header with run parameters (default: false)
    pub include_metadata: bool,

    /// Run parameters to include when `include_metadata` is set
    pub metadata: Option<CsvMetadata>,

    /// Header of the time column (default: "t")
    pub time_header: String,

    /// Header of the population column (default: "p(t)")
    pub value_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            include_metadata: false,
            metadata: None,
            time_header: "t".to_string(),
            value_header: "p(t)".to_string(),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write the optional comment header
fn write_metadata(file: &mut File, config: &CsvConfig) -> Result<(), Box<dyn Error>> {
    if !config.include_metadata {
        return Ok(());
    }

    writeln!(file, "# Population Dynamics Simulation Data")?;

    if let Some(metadata) = &config.metadata {
        if let Some(model) = &metadata.model_name {
            writeln!(file, "# Model: {}", model)?;
        }
        if let Some(solver) = &metadata.solver_name {
            writeln!(file, "# Solver: {}", solver)?;
        }
        if let Some(tend) = metadata.tend {
            writeln!(file, "# End Time: {}", tend)?;
        }
        if let Some(dt) = metadata.step_size {
            writeln!(file, "# Step Size: {}", dt)?;
        }
    }

    writeln!(file, "#")?;
    Ok(())
}

// =============================================================================
// Public API
// =============================================================================

/// Export one sampled series to CSV
///
/// # Arguments
///
/// * `time` - Sample times
/// * `values` - Population values, one per sample time
/// * `output_path` - Output file path
/// * `config` - Optional CSV configuration; `None` uses defaults
///
/// # Errors
///
/// Fails when the series is empty, the lengths differ, or the file cannot
/// be written.
pub fn export_series_csv(
    time: &[f64],
    values: &[f64],
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = CsvConfig::default();
    let config = config.unwrap_or(&default_config);

    if time.is_empty() {
        return Err("Cannot export an empty series".into());
    }
    if time.len() != values.len() {
        return Err(format!(
            "Time and value series must have the same length, got {} and {}",
            time.len(),
            values.len()
        )
        .into());
    }

    let mut file = File::create(output_path)?;
    write_metadata(&mut file, config)?;

    writeln!(
        file,
        "{}{}{}",
        config.time_header, config.delimiter, config.value_header
    )?;

    for (t, v) in time.iter().zip(values.iter()) {
        writeln!(
            file,
            "{:.prec$}{}{:.prec$}",
            t,
            config.delimiter,
            v,
            prec = config.precision
        )?;
    }

    Ok(())
}

/// Export a whole refinement study to CSV, one column per step size
///
/// Rows are indexed by sample number. Each column holds the series
/// computed at one step size; coarser series are shorter, and their
/// missing trailing cells are left empty. A leading column records the
/// sample time on the *finest* grid.
///
/// # Errors
///
/// Fails when the study is empty or the file cannot be written.
pub fn export_refinement_csv(
    approx: &ApproximationSet,
    tend: f64,
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = CsvConfig::default();
    let config = config.unwrap_or(&default_config);

    if approx.is_empty() {
        return Err("Cannot export an empty refinement study".into());
    }

    let mut file = File::create(output_path)?;
    write_metadata(&mut file, config)?;

    let step_sizes = approx.step_sizes();
    let finest = *step_sizes.last().expect("study checked non-empty");
    let reference_times = crate::solver::TimeGrid::new(tend, finest).times();

    // Header: t,dt=0.5,dt=0.25,...
    let mut header = config.time_header.clone();
    for dt in &step_sizes {
        header.push(config.delimiter);
        header.push_str(&format!("dt={}", dt));
    }
    writeln!(file, "{}", header)?;

    let rows = approx
        .iter()
        .map(|(_, series)| series.len())
        .max()
        .unwrap_or(0);

    for row in 0..rows {
        let mut line = match reference_times.get(row) {
            Some(t) => format!("{:.prec$}", t, prec = config.precision),
            None => String::new(),
        };

        for (_, series) in approx.iter() {
            line.push(config.delimiter);
            if let Some(v) = series.get(row) {
                line.push_str(&format!("{:.prec$}", v, prec = config.precision));
            }
        }
        writeln!(file, "{}", line)?;
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LogisticGrowth;
    use crate::solver::{refinement_study, ExplicitEuler};
    use std::fs;

    #[test]
    fn test_export_series_basic() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("series.csv");

        export_series_csv(
            &[0.0, 0.5, 1.0],
            &[1.0, 1.4, 1.9],
            path.to_str().unwrap(),
            None,
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "t,p(t)");
        assert_eq!(lines.next().unwrap(), "0.000000,1.000000");
        assert_eq!(content.lines().count(), 4);
    }

    #[test]
    fn test_export_series_with_metadata() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("meta.csv");

        let mut config = CsvConfig::default();
        config.include_metadata = true;
        config.metadata = Some(CsvMetadata {
            model_name: Some("Logistic Growth".to_string()),
            solver_name: Some("Explicit Euler".to_string()),
            tend: Some(5.0),
            step_size: Some(0.5),
        });

        export_series_csv(&[0.0], &[1.0], path.to_str().unwrap(), Some(&config)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("# Model: Logistic Growth"));
        assert!(content.contains("# Solver: Explicit Euler"));
        assert!(content.contains("# End Time: 5"));
        assert!(content.contains("# Step Size: 0.5"));
    }

    #[test]
    fn test_export_series_custom_precision_and_delimiter() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("custom.csv");

        let mut config = CsvConfig::default();
        config.delimiter = ';';
        config.precision = 2;

        export_series_csv(&[0.5], &[3.14159], path.to_str().unwrap(), Some(&config)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("0.50;3.14"));
    }

    #[test]
    fn test_export_series_length_mismatch() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.csv");

        let err =
            export_series_csv(&[0.0, 1.0], &[1.0], path.to_str().unwrap(), None).unwrap_err();
        assert!(err.to_string().contains("same length"));
    }

    #[test]
    fn test_export_series_empty_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("empty.csv");

        assert!(export_series_csv(&[], &[], path.to_str().unwrap(), None).is_err());
    }

    #[test]
    fn test_export_refinement_study() {
        let model = LogisticGrowth::new(1.0, 10.0, 1.0);
        let dt_all = [0.5, 0.25];
        let study = refinement_study(&ExplicitEuler::new(), &model, 5.0, &dt_all).unwrap();

        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("study.csv");

        export_refinement_csv(&study, 5.0, path.to_str().unwrap(), None).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "t,dt=0.5,dt=0.25");

        // 20 data rows (finest series), the coarse column padded after row 10
        assert_eq!(content.lines().count(), 21);

        // Row 11 (index 10): coarse column exhausted, cell empty
        let row_10 = content.lines().nth(11).unwrap();
        let cells: Vec<&str> = row_10.split(',').collect();
        assert_eq!(cells.len(), 3);
        assert!(cells[1].is_empty());
        assert!(!cells[2].is_empty());
    }

    #[test]
    fn test_export_empty_study_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("none.csv");

        let err = export_refinement_csv(
            &ApproximationSet::new(),
            5.0,
            path.to_str().unwrap(),
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
