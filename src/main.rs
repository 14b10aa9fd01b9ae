//! Batch entry point: load both result sets, render both figures, print the
//! comparative report.
//!
//! Reads `resultados_e1.csv` and `resultados_e2.csv` from the working
//! directory and writes `grafico_experimento_e1.png` and
//! `grafico_experimento_e2.png` next to them, overwriting prior runs. A
//! missing input file aborts the run after printing which file it was, with
//! the same exit status as a successful run.

use std::io;
use std::path::Path;

use speedup_rs::analysis::write_report;
use speedup_rs::data::load_results;
use speedup_rs::output::{plot_comparison, plot_scaling, COMPARISON_CHART_FILE, SCALING_CHART_FILE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Analyzing benchmark results...");
    println!();

    // ====== Load both datasets ======

    let (comparison, scaling) = match load_results(Path::new(".")) {
        Ok(datasets) => datasets,
        Err(err) => {
            println!("Error loading data: {err}");
            println!("Error: could not load the experiment results.");
            return Ok(());
        }
    };

    println!("Experiment E1 data:");
    println!("{comparison}");
    println!("Experiment E2 data:");
    println!("{scaling}");

    // ====== Render both figures ======

    println!("Generating charts...");
    plot_comparison(&comparison, COMPARISON_CHART_FILE, None)?;
    println!("Experiment E1 chart saved as: {COMPARISON_CHART_FILE}");
    plot_scaling(&scaling, SCALING_CHART_FILE, None)?;
    println!("Experiment E2 chart saved as: {SCALING_CHART_FILE}");

    // ====== Comparative report ======

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &comparison, &scaling)?;

    println!();
    println!("Analysis complete!");
    println!("Generated files:");
    println!("- {COMPARISON_CHART_FILE}");
    println!("- {SCALING_CHART_FILE}");

    Ok(())
}
