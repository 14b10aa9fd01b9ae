//! Chart configuration shared across visualization modules
//!
//! This module defines the common configuration structure used by both the
//! comparison (E1) and scaling (E2) figures.

use plotters::prelude::*;

/// Configuration for customizing the benchmark figures
///
/// Used by both two-panel figures. Dimensions describe the whole figure;
/// each panel receives half the width.
///
/// # Fields
///
/// - `width`, `height`: Figure dimensions in pixels
/// - `series_colors`: Optional colors for the data series (one per series)
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `marker_size`: Data point marker radius in pixels
/// - `title_font_size`, `label_font_size`: Font sizes for panel captions and
///   axis labels
/// - `show_grid`: Whether to draw the mesh (grid + axis labels)
///
/// # Example
///
/// ```rust,ignore
/// use speedup_rs::output::ChartConfig;
/// use plotters::prelude::*;
///
/// let mut config = ChartConfig::default();
/// config.width = 3000;   // high-resolution export
/// config.height = 1200;
/// config.series_colors = Some(vec![RED, BLUE, GREEN]);
/// ```
#[derive(Clone)]
pub struct ChartConfig {
    /// Figure width in pixels (default: 1500)
    pub width: u32,

    /// Figure height in pixels (default: 600)
    pub height: u32,

    /// Optional colors for the data series
    ///
    /// If None, uses the default palette. If Some, must have at least as
    /// many colors as plotted series.
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Marker radius in pixels (default: 4)
    pub marker_size: u32,

    /// Panel caption font size (default: 20)
    pub title_font_size: u32,

    /// Axis label font size (default: 14)
    pub label_font_size: u32,

    /// Draw grid lines and axis labels (default: true)
    pub show_grid: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 600,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            marker_size: 4,
            title_font_size: 20,
            label_font_size: 14,
            show_grid: true,
        }
    }
}

impl ChartConfig {
    /// Create config with custom series colors
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use plotters::prelude::*;
    ///
    /// let config = ChartConfig::with_series_colors(vec![RED, BLUE, GREEN]);
    /// ```
    pub fn with_series_colors(colors: Vec<RGBColor>) -> Self {
        let mut config = Self::default();
        config.series_colors = Some(colors);
        config
    }

    /// Get color for the series at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to the default
    /// palette.
    pub(crate) fn get_series_color(&self, series_index: usize) -> RGBColor {
        if let Some(ref colors) = self.series_colors {
            if series_index < colors.len() {
                return colors[series_index];
            }
        }

        // Default palette
        let default_colors = [
            RGBColor(31, 119, 180),  // Blue
            RGBColor(255, 127, 14),  // Orange
            RGBColor(44, 160, 44),   // Green
            RGBColor(148, 103, 189), // Purple
            RGBColor(140, 86, 75),   // Brown
            BLACK,
        ];

        default_colors[series_index % default_colors.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_config_default() {
        let config = ChartConfig::default();
        assert_eq!(config.width, 1500);
        assert_eq!(config.height, 600);
        assert!(config.show_grid);
    }

    #[test]
    fn test_get_series_color_default_palette() {
        let config = ChartConfig::default();
        assert_eq!(config.get_series_color(0), RGBColor(31, 119, 180));
        assert_eq!(config.get_series_color(1), RGBColor(255, 127, 14));
        assert_eq!(config.get_series_color(6), RGBColor(31, 119, 180)); // Wraparound
    }

    #[test]
    fn test_get_series_color_custom() {
        let config = ChartConfig::with_series_colors(vec![RED, BLUE]);
        assert_eq!(config.get_series_color(0), RED);
        assert_eq!(config.get_series_color(1), BLUE);
    }

    #[test]
    fn test_custom_palette_falls_back_past_end() {
        let config = ChartConfig::with_series_colors(vec![RED]);
        assert_eq!(config.get_series_color(0), RED);
        // Beyond the custom palette, the default palette answers
        assert_eq!(config.get_series_color(1), RGBColor(255, 127, 14));
    }
}
