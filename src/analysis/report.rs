//! Formatted comparative report over both experiments
//!
//! Layout: a ruled header, the per-size E1 breakdown (speedups to two decimal
//! places), the E2 best-configuration selection and the per-P efficiency
//! table (both to three decimal places).

use std::io::{self, Write};

use crate::data::{ComparisonData, ScalingData};

/// Write the full comparative analysis report
///
/// # Errors
///
/// Propagates any write failure from the sink.
pub fn write_report<W: Write>(
    out: &mut W,
    comparison: &ComparisonData,
    scaling: &ScalingData,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(80))?;
    writeln!(out, "COMPARATIVE ANALYSIS OF RESULTS")?;
    writeln!(out, "{}", "=".repeat(80))?;

    write_comparison_section(out, comparison)?;
    write_scaling_section(out, scaling)?;

    Ok(())
}

/// Experiment E1: per-size timings with derived speedups
fn write_comparison_section<W: Write>(out: &mut W, data: &ComparisonData) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "EXPERIMENT E1 - SEQUENTIAL VS PARALLEL:")?;
    writeln!(out, "{}", "-".repeat(50))?;

    for record in &data.records {
        writeln!(out, "Matrix {0}x{0}:", record.size)?;
        writeln!(out, "  Sequential: {:6.0} ms", record.sequential_ms)?;
        writeln!(
            out,
            "  Threads:    {:6.0} ms (speedup: {:.2}x)",
            record.threads_ms,
            record.speedup_threads()
        )?;
        writeln!(
            out,
            "  Processes:  {:6.0} ms (speedup: {:.2}x)",
            record.processes_ms,
            record.speedup_processes()
        )?;
        writeln!(out)?;
    }

    Ok(())
}

/// Experiment E2: best configuration per strategy, then efficiency per P
fn write_scaling_section<W: Write>(out: &mut W, data: &ScalingData) -> io::Result<()> {
    writeln!(out, "EXPERIMENT E2 - IMPACT OF THE NUMBER OF P:")?;
    writeln!(out, "{}", "-".repeat(50))?;

    if let Some(best) = data.best_threads() {
        writeln!(out, "Best configuration for threads:")?;
        writeln!(
            out,
            "  P = {}, Speedup = {:.3}x",
            best.degree, best.speedup_threads
        )?;
        writeln!(out)?;
    }

    if let Some(best) = data.best_processes() {
        writeln!(out, "Best configuration for processes:")?;
        writeln!(
            out,
            "  P = {}, Speedup = {:.3}x",
            best.degree, best.speedup_processes
        )?;
        writeln!(out)?;
    }

    writeln!(out, "EFFICIENCY (Speedup/P):")?;
    writeln!(out, "{}", "-".repeat(30))?;
    for record in &data.records {
        writeln!(
            out,
            "P = {}: Threads = {:.3}, Processes = {:.3}",
            record.degree,
            record.efficiency_threads(),
            record.efficiency_processes()
        )?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
