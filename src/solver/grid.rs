//! Time sampling grid
//!
//! # Sampling Convention
//!
//! A [`TimeGrid`] describes the samples `t = 0, dt, 2*dt, …` strictly below
//! `tend` — the end point itself is **excluded**. The number of samples is
//! therefore `ceil(tend/dt)`: for `tend = 5` and `dt = 0.5` the grid is
//! `[0, 0.5, …, 4.5]`, ten points. Refinement studies rely on this: halving
//! the step size exactly doubles the sample count whenever `tend/dt` is an
//! integer.

// =================================================================================================
// Time Grid
// =================================================================================================

/// Sampling grid over `[0, tend)` with uniform step size
///
/// # Examples
///
/// ```rust
/// use popdyn_rs::solver::TimeGrid;
///
/// let grid = TimeGrid::new(5.0, 0.5);
/// assert_eq!(grid.sample_count(), 10);
///
/// let times = grid.times();
/// assert_eq!(times[0], 0.0);
/// assert_eq!(*times.last().unwrap(), 4.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeGrid {
    /// Simulation horizon (exclusive)
    tend: f64,
    /// Step size between samples
    dt: f64,
}

impl TimeGrid {
    /// Create a grid over `[0, tend)` with step `dt`
    ///
    /// Parameters are checked by [`validate()`](TimeGrid::validate), which
    /// the solvers call before integrating.
    pub fn new(tend: f64, dt: f64) -> Self {
        Self { tend, dt }
    }

    /// Simulation horizon (exclusive)
    pub fn tend(&self) -> f64 {
        self.tend
    }

    /// Step size between samples
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Validate that parameters describe a usable grid
    pub fn validate(&self) -> Result<(), String> {
        if !self.tend.is_finite() || self.tend <= 0.0 {
            return Err(format!("End time must be positive, got {}", self.tend));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(format!("Step size must be positive, got {}", self.dt));
        }
        Ok(())
    }

    /// Number of samples in `[0, tend)`: `ceil(tend/dt)`
    pub fn sample_count(&self) -> usize {
        (self.tend / self.dt).ceil() as usize
    }

    /// The sample times `0, dt, 2*dt, …` (end point excluded)
    ///
    /// Each time is computed directly as `k * dt` rather than by repeated
    /// addition. Accumulating `t += dt` compounds the representation error
    /// of `dt` (0.1 is not exactly representable in binary); the direct
    /// product keeps every sample within one ulp of the intended value.
    pub fn times(&self) -> Vec<f64> {
        (0..self.sample_count())
            .map(|k| k as f64 * self.dt)
            .collect()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
