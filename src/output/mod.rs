//! Output module for benchmark analysis results
//!
//! This module renders the two comparison figures as PNG/SVG files using
//! plotters.
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! └── visualization/      ← Plots and graphics
//!     ├── mod.rs
//!     ├── config.rs       ← Shared chart configuration
//!     ├── comparison.rs   ← Experiment E1 figure
//!     └── scaling.rs      ← Experiment E2 figure
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use speedup_rs::output::{plot_comparison, plot_scaling};
//!
//! plot_comparison(&comparison, "grafico_experimento_e1.png", None)?;
//! plot_scaling(&scaling, "grafico_experimento_e2.png", None)?;
//! ```
//!
//! Both functions overwrite any prior artifact of the same name.

pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{
    plot_comparison,
    plot_scaling,
    ChartConfig,
    COMPARISON_CHART_FILE,
    SCALING_CHART_FILE,
};
