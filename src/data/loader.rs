//! CSV loading for the two benchmark result files
//!
//! Reads `resultados_e1.csv` and `resultados_e2.csv` from a caller-chosen
//! directory. The file names are fixed: they are what the upstream benchmark
//! runs produce. No schema validation is performed beyond what deserialization
//! enforces; a missing or malformed column surfaces as a [`LoadError::Parse`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use speedup_rs::data::loader::load_results;
//! use std::path::Path;
//!
//! match load_results(Path::new(".")) {
//!     Ok((comparison, scaling)) => {
//!         println!("E1 rows: {}, E2 rows: {}", comparison.len(), scaling.len());
//!     }
//!     Err(err) => println!("Error loading data: {err}"),
//! }
//! ```

use serde::de::DeserializeOwned;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use super::experiment::{ComparisonData, ComparisonRecord, ScalingData, ScalingRecord};

/// Fixed name of the experiment E1 result file
pub const COMPARISON_FILE: &str = "resultados_e1.csv";

/// Fixed name of the experiment E2 result file
pub const SCALING_FILE: &str = "resultados_e2.csv";

// =============================================================================
// Errors
// =============================================================================

/// Error loading a benchmark result file
///
/// Both variants carry the offending path so the diagnostic names the
/// missing or malformed resource.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened (typically: it does not exist)
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A record could not be parsed or deserialized
    Parse { path: PathBuf, source: csv::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Open { path, source } => {
                write!(f, "cannot open '{}': {}", path.display(), source)
            }
            LoadError::Parse { path, source } => {
                write!(f, "malformed record in '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Open { source, .. } => Some(source),
            LoadError::Parse { source, .. } => Some(source),
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Load both experiment result sets from `dir`
///
/// Returns the E1 and E2 datasets on success. If either file is absent or
/// malformed the error identifies it; the caller is expected to print the
/// diagnostic and abort the run without generating charts or a report.
///
/// # Errors
///
/// - [`LoadError::Open`] if a file cannot be opened
/// - [`LoadError::Parse`] if a record fails CSV deserialization
pub fn load_results(dir: &Path) -> Result<(ComparisonData, ScalingData), LoadError> {
    let comparison = load_comparison(&dir.join(COMPARISON_FILE))?;
    let scaling = load_scaling(&dir.join(SCALING_FILE))?;
    Ok((comparison, scaling))
}

/// Load the experiment E1 (sequential vs. parallel) result file
pub fn load_comparison(path: &Path) -> Result<ComparisonData, LoadError> {
    Ok(ComparisonData::new(read_records::<ComparisonRecord>(path)?))
}

/// Load the experiment E2 (degree of parallelism) result file
pub fn load_scaling(path: &Path) -> Result<ScalingData, LoadError> {
    Ok(ScalingData::new(read_records::<ScalingRecord>(path)?))
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: T = row.map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) {
        let mut file = File::create(dir.join(name)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    fn write_sample_inputs(dir: &Path) {
        write_file(
            dir,
            COMPARISON_FILE,
            "Tamanho,Sequencial_ms,Threads_ms,Processos_ms\n\
             100,1000,300,260\n\
             500,24000,6500,7100\n",
        );
        write_file(
            dir,
            SCALING_FILE,
            "P,Threads_ms,Processos_ms,Speedup_Threads,Speedup_Processos\n\
             1,24000,25000,1.000,0.960\n\
             2,12600,13400,1.905,1.791\n\
             4,6500,7100,3.692,3.380\n\
             8,6800,7500,3.529,3.200\n",
        );
    }

    #[test]
    fn test_load_both_datasets() {
        let dir = tempfile::tempdir().unwrap();
        write_sample_inputs(dir.path());

        let (comparison, scaling) = load_results(dir.path()).unwrap();
        assert_eq!(comparison.len(), 2);
        assert_eq!(scaling.len(), 4);
        assert_eq!(comparison.records[0].size, 100);
        assert!((scaling.records[2].speedup_threads - 3.692).abs() < 1e-12);
    }

    #[test]
    fn test_missing_comparison_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_results(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains(COMPARISON_FILE));
    }

    #[test]
    fn test_missing_scaling_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            COMPARISON_FILE,
            "Tamanho,Sequencial_ms,Threads_ms,Processos_ms\n100,1000,300,260\n",
        );

        let err = load_results(dir.path()).unwrap_err();
        assert!(err.to_string().contains(SCALING_FILE));
    }

    #[test]
    fn test_missing_column_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            COMPARISON_FILE,
            "Tamanho,Sequencial_ms,Threads_ms\n100,1000,300\n",
        );

        let err = load_comparison(&dir.path().join(COMPARISON_FILE)).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_non_numeric_cell_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            COMPARISON_FILE,
            "Tamanho,Sequencial_ms,Threads_ms,Processos_ms\n100,fast,300,260\n",
        );

        let err = load_comparison(&dir.path().join(COMPARISON_FILE)).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_header_only_file_yields_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            COMPARISON_FILE,
            "Tamanho,Sequencial_ms,Threads_ms,Processos_ms\n",
        );

        let comparison = load_comparison(&dir.path().join(COMPARISON_FILE)).unwrap();
        assert!(comparison.is_empty());
    }

    #[test]
    fn test_whitespace_around_cells_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            COMPARISON_FILE,
            "Tamanho,Sequencial_ms,Threads_ms,Processos_ms\n 100 , 1000 , 300 , 260 \n",
        );

        let comparison = load_comparison(&dir.path().join(COMPARISON_FILE)).unwrap();
        assert_eq!(comparison.records[0].size, 100);
        assert_eq!(comparison.records[0].processes_ms, 260.0);
    }
}
