//! Experiment E2 figure: impact of the degree of parallelism
//!
//! Renders one two-panel figure from the E2 dataset:
//!
//! - **Left panel** — execution time (ms) vs. P for both parallel strategies.
//! - **Right panel** — precomputed speedup vs. P for both strategies, plus a
//!   diagonal reference line where speedup equals P (ideal linear speedup).
//!
//! The x-axis of both panels is an index axis over the distinct P values in
//! first-occurrence order: every tick is one of the measured degrees, nothing
//! is interpolated between them. Speedups come from the dataset as loaded;
//! this module never rederives them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use speedup_rs::output::{plot_scaling, SCALING_CHART_FILE};
//!
//! plot_scaling(&scaling, SCALING_CHART_FILE, None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use crate::data::ScalingData;
use super::config::ChartConfig;

/// Fixed name of the experiment E2 chart artifact
pub const SCALING_CHART_FILE: &str = "grafico_experimento_e2.png";

// =================================================================================================
// Public API
// =================================================================================================

/// Plot the experiment E2 scaling figure
///
/// Overwrites any prior artifact at `output_path`.
///
/// # Arguments
///
/// * `data`        — E2 dataset (P, timings, precomputed speedups)
/// * `output_path` — Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      — Optional chart configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` if the dataset is empty or the backend cannot write to
/// `output_path`.
pub fn plot_scaling(
    data: &ScalingData,
    output_path: &str,
    config: Option<&ChartConfig>,
) -> Result<(), Box<dyn Error>> {
    if data.is_empty() {
        return Err("no experiment E2 records to plot".into());
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
            plot_scaling_impl(backend, data, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_scaling_impl(backend, data, config)
        }
    }
}

// =================================================================================================
// Private Plot Implementation
// =================================================================================================

/// Render the two-panel E2 figure with the given drawing backend
///
/// Records are mapped to x positions through the distinct-degree tick list:
/// a record plots at the index of its P value, and the axis label formatter
/// translates indices back to P. Duplicate degrees share a tick.
fn plot_scaling_impl<DB: DrawingBackend>(
    backend: DB,
    data: &ScalingData,
    config: &ChartConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let degrees = data.degrees();

    let tick_of = |degree: u32| -> i32 {
        // degrees() is built from the records, so the lookup cannot miss
        degrees.iter().position(|&d| d == degree).unwrap_or(0) as i32
    };

    let threads: Vec<(i32, f64)> = data
        .records
        .iter()
        .map(|r| (tick_of(r.degree), r.threads_ms))
        .collect();
    let processes: Vec<(i32, f64)> = data
        .records
        .iter()
        .map(|r| (tick_of(r.degree), r.processes_ms))
        .collect();
    let speedup_threads: Vec<(i32, f64)> = data
        .records
        .iter()
        .map(|r| (tick_of(r.degree), r.speedup_threads))
        .collect();
    let speedup_processes: Vec<(i32, f64)> = data
        .records
        .iter()
        .map(|r| (tick_of(r.degree), r.speedup_processes))
        .collect();
    let ideal: Vec<(i32, f64)> = degrees
        .iter()
        .enumerate()
        .map(|(i, &d)| (i as i32, d as f64))
        .collect();

    let x_hi = (degrees.len() as i32 - 1).max(1);

    let time_max = threads
        .iter()
        .chain(processes.iter())
        .map(|(_, t)| *t)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0);

    // The ideal diagonal is part of the panel, so the y range covers it too
    let speedup_max = speedup_threads
        .iter()
        .chain(speedup_processes.iter())
        .chain(ideal.iter())
        .map(|(_, s)| *s)
        .filter(|s| s.is_finite())
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0);

    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let panels = root.split_evenly((1, 2));

    let degree_label = |idx: &i32| -> String {
        degrees
            .get(*idx as usize)
            .map(|d| d.to_string())
            .unwrap_or_default()
    };

    // ── Left panel: execution time vs. P ─────────────────────────────────────
    {
        let mut chart = ChartBuilder::on(&panels[0])
            .caption(
                "Experiment E2: Execution Time vs. Number of P",
                ("sans-serif", config.title_font_size).into_font(),
            )
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(0..x_hi, 0.0..time_max * 1.1)?;

        if config.show_grid {
            chart
                .configure_mesh()
                .x_desc("Number of Threads/Processes (P)")
                .y_desc("Execution Time (ms)")
                .label_style(("sans-serif", config.label_font_size).into_font())
                .x_labels(degrees.len())
                .x_label_formatter(&degree_label)
                .y_label_formatter(&|y| format!("{:.0}", y))
                .draw()?;
        }

        let thr_color = config.get_series_color(1);
        chart
            .draw_series(LineSeries::new(
                threads.iter().copied(),
                ShapeStyle::from(&thr_color).stroke_width(config.line_width),
            ))?
            .label("Threads")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], thr_color));
        chart.draw_series(
            threads
                .iter()
                .map(|&p| Circle::new(p, config.marker_size, thr_color.filled())),
        )?;

        let proc_color = config.get_series_color(2);
        chart
            .draw_series(LineSeries::new(
                processes.iter().copied(),
                ShapeStyle::from(&proc_color).stroke_width(config.line_width),
            ))?
            .label("Processes")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], proc_color));
        chart.draw_series(
            processes
                .iter()
                .map(|&p| Cross::new(p, config.marker_size, proc_color.filled())),
        )?;

        chart
            .configure_series_labels()
            .background_style(&config.background.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    // ── Right panel: speedup vs. P with the linear ideal ─────────────────────
    {
        let mut chart = ChartBuilder::on(&panels[1])
            .caption(
                "Experiment E2: Speedup vs. Number of P",
                ("sans-serif", config.title_font_size).into_font(),
            )
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(0..x_hi, 0.0..speedup_max * 1.1)?;

        if config.show_grid {
            chart
                .configure_mesh()
                .x_desc("Number of Threads/Processes (P)")
                .y_desc("Speedup (x)")
                .label_style(("sans-serif", config.label_font_size).into_font())
                .x_labels(degrees.len())
                .x_label_formatter(&degree_label)
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
                .map(|&p| Circle::new(p, config.marker_size, thr_color.filled())),
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
                .map(|&p| Cross::new(p, config.marker_size, proc_color.filled())),
        )?;

        chart
            .draw_series(LineSeries::new(ideal.iter().copied(), RED.stroke_width(1)))?
            .label("Ideal Linear Speedup")
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
    use crate::data::ScalingRecord;

    fn record(degree: u32, thr: f64, proc: f64, s_thr: f64, s_proc: f64) -> ScalingRecord {
        ScalingRecord {
            degree,
            threads_ms: thr,
            processes_ms: proc,
            speedup_threads: s_thr,
            speedup_processes: s_proc,
        }
    }

    fn sample_data() -> ScalingData {
        ScalingData::new(vec![
            record(1, 24000.0, 25000.0, 1.000, 0.960),
            record(2, 12600.0, 13400.0, 1.905, 1.791),
            record(4, 6500.0, 7100.0, 3.692, 3.380),
            record(8, 6800.0, 7500.0, 3.529, 3.200),
        ])
    }

    #[test]
    fn test_plot_scaling_png() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        plot_scaling(&sample_data(), path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_scaling_svg() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("svg");
        plot_scaling(&sample_data(), path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_scaling_unsorted_degrees() {
        // Ticks follow the input order, whatever it is
        let data = ScalingData::new(vec![
            record(8, 6800.0, 7500.0, 3.529, 3.200),
            record(1, 24000.0, 25000.0, 1.000, 0.960),
            record(4, 6500.0, 7100.0, 3.692, 3.380),
        ]);
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        plot_scaling(&data, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_scaling_single_row() {
        let data = ScalingData::new(vec![record(4, 6500.0, 7100.0, 3.692, 3.380)]);
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        plot_scaling(&data, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_scaling_empty_returns_error() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        let err = plot_scaling(&ScalingData::default(), path.to_str().unwrap(), None);
        assert!(err.is_err());
    }
}
