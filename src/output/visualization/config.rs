//! Plot configuration shared across visualization functions

use plotters::prelude::*;

/// Configuration for customizing comparison plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `xlabel`, `ylabel`: Axis labels
/// - `analytic_color`: Line color of the closed-form reference curve
/// - `approx_color`: Line color of the numerical series
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust
/// use popdyn_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::default();
/// config.width = 1920; // Full HD
/// config.height = 1080;
/// config.approx_color = GREEN;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// X-axis label (default: "t")
    pub xlabel: String,

    /// Y-axis label (default: "p(t)")
    pub ylabel: String,

    /// Line color of the analytic reference curve (default: BLUE)
    pub analytic_color: RGBColor,

    /// Line color of the numerical series (default: RED)
    pub approx_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            xlabel: "t".to_string(),
            ylabel: "p(t)".to_string(),
            analytic_color: BLUE,
            approx_color: RED,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
