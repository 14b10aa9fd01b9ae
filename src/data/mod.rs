//! Benchmark datasets and CSV loading
//!
//! This module defines the two tabular result sets the tool consumes and the
//! loader that reads them from disk:
//!
//! - **Experiment E1** ([`ComparisonData`]): sequential vs. parallel timings
//!   per matrix size, at a fixed degree of parallelism (P = 4).
//! - **Experiment E2** ([`ScalingData`]): timings and precomputed speedups
//!   per degree of parallelism P.
//!
//! # Architecture
//!
//! ```text
//! data/
//! ├── mod.rs          ← This file
//! ├── experiment.rs   ← Record/dataset types + derived metrics
//! └── loader.rs       ← CSV loading (csv + serde)
//! ```
//!
//! Both datasets are immutable inputs: nothing in the crate mutates them
//! after loading. Derived metrics (speedup, efficiency) are computed on the
//! fly by accessor methods and never stored back.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use speedup_rs::data::load_results;
//! use std::path::Path;
//!
//! let (comparison, scaling) = load_results(Path::new("."))?;
//! println!("{comparison}");
//! println!("{scaling}");
//! # Ok::<(), speedup_rs::data::LoadError>(())
//! ```

pub mod experiment;
pub mod loader;

// Re-export commonly used items for convenience
pub use experiment::{ComparisonData, ComparisonRecord, ScalingData, ScalingRecord};

pub use loader::{load_results, LoadError, COMPARISON_FILE, SCALING_FILE};
