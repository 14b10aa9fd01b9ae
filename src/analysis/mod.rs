//! Comparative analysis report
//!
//! Derives per-row speedup and efficiency metrics from the loaded datasets
//! and writes a formatted textual summary. The binary points this at stdout;
//! tests point it at an in-memory buffer.

pub mod report;

pub use report::write_report;
