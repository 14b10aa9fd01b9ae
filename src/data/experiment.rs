//! Record and dataset types for the two benchmark experiments
//!
//! The CSV column headers (`Tamanho`, `Sequencial_ms`, ...) are part of the
//! data contract with the upstream benchmark programs that produce the result
//! files; they are mapped onto idiomatic field names with serde rename
//! attributes. The `Display` implementations echo a dataset as an aligned
//! plain-text table using the original column headers.

use serde::Deserialize;
use std::fmt;

// =================================================================================================
// Experiment E1 — Sequential vs. Parallel by Matrix Size
// =================================================================================================

/// One measurement row of experiment E1
///
/// Timings are wall-clock milliseconds for multiplying two NxN matrices with
/// each strategy. The parallel strategies ran at a fixed degree of
/// parallelism of 4.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ComparisonRecord {
    /// Matrix dimension N (the matrices are NxN)
    #[serde(rename = "Tamanho")]
    pub size: u32,

    /// Sequential execution time (ms)
    #[serde(rename = "Sequencial_ms")]
    pub sequential_ms: f64,

    /// Thread-based execution time at P = 4 (ms)
    #[serde(rename = "Threads_ms")]
    pub threads_ms: f64,

    /// Process-based execution time at P = 4 (ms)
    #[serde(rename = "Processos_ms")]
    pub processes_ms: f64,
}

impl ComparisonRecord {
    /// Speedup of the threaded run over the sequential run
    ///
    /// A zero threaded time yields `f64::INFINITY` instead of dividing.
    pub fn speedup_threads(&self) -> f64 {
        if self.threads_ms > 0.0 {
            self.sequential_ms / self.threads_ms
        } else {
            f64::INFINITY
        }
    }

    /// Speedup of the process-based run over the sequential run
    ///
    /// Unguarded division: a zero process time follows IEEE-754 semantics.
    pub fn speedup_processes(&self) -> f64 {
        self.sequential_ms / self.processes_ms
    }
}

/// The full experiment E1 result set, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonData {
    pub records: Vec<ComparisonRecord>,
}

impl ComparisonData {
    pub fn new(records: Vec<ComparisonRecord>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

impl fmt::Display for ComparisonData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>7}  {:>13}  {:>10}  {:>12}",
            "Tamanho", "Sequencial_ms", "Threads_ms", "Processos_ms"
        )?;
        for record in &self.records {
            writeln!(
                f,
                "{:>7}  {:>13.1}  {:>10.1}  {:>12.1}",
                record.size, record.sequential_ms, record.threads_ms, record.processes_ms
            )?;
        }
        Ok(())
    }
}

// =================================================================================================
// Experiment E2 — Impact of the Degree of Parallelism
// =================================================================================================

/// One measurement row of experiment E2
///
/// Speedups are precomputed upstream (against the same sequential baseline)
/// and read as-is; this crate never rederives them for E2.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScalingRecord {
    /// Degree of parallelism: number of threads or processes
    #[serde(rename = "P")]
    pub degree: u32,

    /// Thread-based execution time (ms)
    #[serde(rename = "Threads_ms")]
    pub threads_ms: f64,

    /// Process-based execution time (ms)
    #[serde(rename = "Processos_ms")]
    pub processes_ms: f64,

    /// Precomputed speedup of the threaded run
    #[serde(rename = "Speedup_Threads")]
    pub speedup_threads: f64,

    /// Precomputed speedup of the process-based run
    #[serde(rename = "Speedup_Processos")]
    pub speedup_processes: f64,
}

impl ScalingRecord {
    /// Efficiency of the threaded run: speedup divided by P
    pub fn efficiency_threads(&self) -> f64 {
        self.speedup_threads / self.degree as f64
    }

    /// Efficiency of the process-based run: speedup divided by P
    pub fn efficiency_processes(&self) -> f64 {
        self.speedup_processes / self.degree as f64
    }
}

/// The full experiment E2 result set, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScalingData {
    pub records: Vec<ScalingRecord>,
}

impl ScalingData {
    pub fn new(records: Vec<ScalingRecord>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// The distinct degrees of parallelism, in first-occurrence order
    ///
    /// This is the exact tick set of the scaling chart's x-axis: no
    /// duplication, no reordering, no interpolated values.
    pub fn degrees(&self) -> Vec<u32> {
        let mut degrees = Vec::with_capacity(self.records.len());
        for record in &self.records {
            if !degrees.contains(&record.degree) {
                degrees.push(record.degree);
            }
        }
        degrees
    }

    /// The record with the highest threaded speedup
    ///
    /// Ties resolve to the first occurrence.
    pub fn best_threads(&self) -> Option<&ScalingRecord> {
        self.best_by(|record| record.speedup_threads)
    }

    /// The record with the highest process-based speedup
    ///
    /// Ties resolve to the first occurrence.
    pub fn best_processes(&self) -> Option<&ScalingRecord> {
        self.best_by(|record| record.speedup_processes)
    }

    // First occurrence of the maximum: only a strictly greater value replaces
    // the current best.
    fn best_by(&self, key: impl Fn(&ScalingRecord) -> f64) -> Option<&ScalingRecord> {
        let mut best: Option<&ScalingRecord> = None;
        for record in &self.records {
            match best {
                Some(current) if key(record) > key(current) => best = Some(record),
                None => best = Some(record),
                _ => {}
            }
        }
        best
    }
}

impl fmt::Display for ScalingData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>2}  {:>10}  {:>12}  {:>15}  {:>17}",
            "P", "Threads_ms", "Processos_ms", "Speedup_Threads", "Speedup_Processos"
        )?;
        for record in &self.records {
            writeln!(
                f,
                "{:>2}  {:>10.1}  {:>12.1}  {:>15.3}  {:>17.3}",
                record.degree,
                record.threads_ms,
                record.processes_ms,
                record.speedup_threads,
                record.speedup_processes
            )?;
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
