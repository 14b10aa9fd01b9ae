//! Experiment E1 figure: sequential vs. parallel by matrix size
//!
//! Renders one two-panel figure from the E1 dataset:
//!
//! - **Left panel** — execution time (ms) vs. matrix size for the
//!   sequential, threaded and process-based strategies, log-scaled y-axis.
//! - **Right panel** — speedup vs. matrix size for both parallel strategies,
//!   with a horizontal reference line at the ideal 4x speedup (the degree of
//!   parallelism is fixed at 4 in this experiment).
//!
//! The speedup series are plain per-row ratios `sequential / parallel`;
//! sentinel handling for degenerate timings belongs to the report stage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use speedup_rs::output::{plot_comparison, COMPARISON_CHART_FILE};
//!
//! plot_comparison(&comparison, COMPARISON_CHART_FILE, None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use crate::data::ComparisonData;
use super::config::ChartConfig;

/// Fixed name of the experiment E1 chart artifact
pub const COMPARISON_CHART_FILE: &str = "grafico_experimento_e1.png";

/// Ideal speedup reference for experiment E1 (fixed degree of parallelism)
pub const IDEAL_SPEEDUP: f64 = 4.0;

// =================================================================================================
// Public API
// =================================================================================================

/// Plot the experiment E1 comparison figure
///
/// Overwrites any prior artifact at `output_path`.
///
/// # Arguments
///
/// * `data`        — E1 dataset (matrix size + three timing columns)
/// * `output_path` — Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      — Optional chart configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` if the dataset is empty or the backend cannot write to
/// `output_path`.
pub fn plot_comparison(
    data: &ComparisonData,
    output_path: &str,
    config: Option<&ChartConfig>,
) -> Result<(), Box<dyn Error>> {
    if data.is_empty() {
        return Err("no experiment E1 records to plot".into());
    }

    let default_config = ChartConfig::default();
    let config = config.unwrap_or(&default_config);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, data, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, data, config)
        }
    }
}

// =================================================================================================
// Private Plot Implementation
// =================================================================================================

/// Render the two-panel E1 figure with the given drawing backend
fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    data: &ComparisonData,
    config: &ChartConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let sequential: Vec<(f64, f64)> = data
        .records
        .iter()
        .map(|r| (r.size as f64, r.sequential_ms))
        .collect();
    let threads: Vec<(f64, f64)> = data
        .records
        .iter()
        .map(|r| (r.size as f64, r.threads_ms))
        .collect();
    let processes: Vec<(f64, f64)> = data
        .records
        .iter()
        .map(|r| (r.size as f64, r.processes_ms))
        .collect();

    // Plain ratio series for the speedup panel
    let speedup_threads: Vec<(f64, f64)> = data
        .records
        .iter()
        .map(|r| (r.size as f64, r.sequential_ms / r.threads_ms))
        .collect();
    let speedup_processes: Vec<(f64, f64)> = data
        .records
        .iter()
        .map(|r| (r.size as f64, r.sequential_ms / r.processes_ms))
        .collect();

    // Shared x range with a small margin; degenerate single-size data still
    // gets a non-zero span
    let size_min = sequential
        .iter()
        .map(|(x, _)| *x)
        .fold(f64::INFINITY, f64::min);
    let size_max = sequential
        .iter()
        .map(|(x, _)| *x)
        .fold(f64::NEG_INFINITY, f64::max);
    let span = (size_max - size_min).max(1.0);
    let x_lo = size_min - span * 0.03;
    let x_hi = size_max + span * 0.03;

    // Log-scaled time axis: bounds from the smallest positive and largest
    // timings across all three strategies
    let all_times = || {
        sequential
            .iter()
            .chain(threads.iter())
            .chain(processes.iter())
            .map(|(_, t)| *t)
    };
    let t_min = all_times()
        .filter(|t| *t > 0.0)
        .fold(f64::INFINITY, f64::min);
    let t_min = if t_min.is_finite() { t_min } else { 0.1 };
    let t_max = all_times().fold(f64::NEG_INFINITY, f64::max).max(t_min);

    let speedup_max = speedup_threads
        .iter()
        .chain(speedup_processes.iter())
        .map(|(_, s)| *s)
        .filter(|s| s.is_finite())
        .fold(IDEAL_SPEEDUP, f64::max);

    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let panels = root.split_evenly((1, 2));

    // ── Left panel: execution time, log-scaled ───────────────────────────────
    {
        let mut chart = ChartBuilder::on(&panels[0])
            .caption(
                "Experiment E1: Execution Time by Matrix Size",
                ("sans-serif", config.title_font_size).into_font(),
            )
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(x_lo..x_hi, (t_min * 0.8..t_max * 1.2).log_scale())?;

        if config.show_grid {
            chart
                .configure_mesh()
                .x_desc("Matrix Size (NxN)")
                .y_desc("Execution Time (ms)")
                .label_style(("sans-serif", config.label_font_size).into_font())
                .x_label_formatter(&|x| format!("{:.0}", x))
                .y_label_formatter(&|y| format!("{:.0}", y))
                .draw()?;
        }

        let seq_color = config.get_series_color(0);
        chart
            .draw_series(LineSeries::new(
                sequential.iter().copied(),
                ShapeStyle::from(&seq_color).stroke_width(config.line_width),
            ))?
            .label("Sequential")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], seq_color));
        chart.draw_series(
            sequential
                .iter()
                .map(|&p| Circle::new(p, config.marker_size, seq_color.filled())),
        )?;

        let thr_color = config.get_series_color(1);
        chart
            .draw_series(LineSeries::new(
                threads.iter().copied(),
                ShapeStyle::from(&thr_color).stroke_width(config.line_width),
            ))?
            .label("Threads (P=4)")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], thr_color));
        chart.draw_series(
            threads
                .iter()
                .map(|&p| Cross::new(p, config.marker_size, thr_color.filled())),
        )?;

        let proc_color = config.get_series_color(2);
        chart
            .draw_series(LineSeries::new(
                processes.iter().copied(),
                ShapeStyle::from(&proc_color).stroke_width(config.line_width),
            ))?
            .label("Processes (P=4)")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], proc_color));
        chart.draw_series(
            processes
                .iter()
                .map(|&p| TriangleMarker::new(p, config.marker_size, proc_color.filled())),
        )?;

        chart
            .configure_series_labels()
            .background_style(&config.background.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    // ── Right panel: speedup with the 4x reference ───────────────────────────
    {
        let mut chart = ChartBuilder::on(&panels[1])
            .caption(
                "Experiment E1: Speedup by Matrix Size",
                ("sans-serif", config.title_font_size).into_font(),
            )
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(x_lo..x_hi, 0.0..speedup_max * 1.15)?;

        if config.show_grid {
            chart
                .configure_mesh()
                .x_desc("Matrix Size (NxN)")
                .y_desc("Speedup (x)")
                .label_style(("sans-serif", config.label_font_size).into_font())
                .x_label_formatter(&|x| format!("{:.0}", x))
                .y_label_formatter(&|y| format!("{:.1}", y))
                .draw()?;
        }

        let thr_color = config.get_series_color(1);
        chart
            .draw_series(LineSeries::new(
                speedup_threads.iter().copied(),
                ShapeStyle::from(&thr_color).stroke_width(config.line_width),
            ))?
            .label("Speedup Threads")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], thr_color));
        chart.draw_series(
            speedup_threads
                .iter()
                .map(|&p| Cross::new(p, config.marker_size, thr_color.filled())),
        )?;

        let proc_color = config.get_series_color(2);
        chart
            .draw_series(LineSeries::new(
                speedup_processes.iter().copied(),
                ShapeStyle::from(&proc_color).stroke_width(config.line_width),
            ))?
            .label("Speedup Processes")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], proc_color));
        chart.draw_series(
            speedup_processes
                .iter()
                .map(|&p| TriangleMarker::new(p, config.marker_size, proc_color.filled())),
        )?;

        // Horizontal dashed reference at the ideal speedup, drawn as
        // alternating segments.
        let n_dashes = 41;
        chart
            .draw_series((0..n_dashes).step_by(2).map(|i| {
                let t0 = i as f64 / n_dashes as f64;
                let t1 = (i + 1) as f64 / n_dashes as f64;
                PathElement::new(
                    vec![
                        (x_lo + (x_hi - x_lo) * t0, IDEAL_SPEEDUP),
                        (x_lo + (x_hi - x_lo) * t1, IDEAL_SPEEDUP),
                    ],
                    RED.stroke_width(1),
                )
            }))?
            .label("Ideal Speedup (4x)")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

        chart
            .configure_series_labels()
            .background_style(&config.background.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ComparisonRecord;

    fn sample_data() -> ComparisonData {
        ComparisonData::new(vec![
            ComparisonRecord {
                size: 100,
                sequential_ms: 1000.0,
                threads_ms: 300.0,
                processes_ms: 260.0,
            },
            ComparisonRecord {
                size: 500,
                sequential_ms: 24000.0,
                threads_ms: 6500.0,
                processes_ms: 7100.0,
            },
            ComparisonRecord {
                size: 1000,
                sequential_ms: 198000.0,
                threads_ms: 52000.0,
                processes_ms: 56000.0,
            },
        ])
    }

    #[test]
    fn test_plot_comparison_png() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        plot_comparison(&sample_data(), path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_comparison_svg() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("svg");
        plot_comparison(&sample_data(), path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_comparison_custom_config() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        let mut config = ChartConfig::default();
        config.width = 800;
        config.height = 400;
        config.series_colors = Some(vec![BLACK, RED, BLUE]);
        plot_comparison(&sample_data(), path.to_str().unwrap(), Some(&config)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_comparison_single_row() {
        // A single matrix size still renders (degenerate x span)
        let data = ComparisonData::new(vec![ComparisonRecord {
            size: 100,
            sequential_ms: 1000.0,
            threads_ms: 300.0,
            processes_ms: 260.0,
        }]);
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        plot_comparison(&data, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_comparison_empty_returns_error() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        let err = plot_comparison(&ComparisonData::default(), path.to_str().unwrap(), None);
        assert!(err.is_err());
    }
}
