//! Shared fixtures for integration tests

use std::fs::File;
use std::io::Write;
use std::path::Path;

use speedup_rs::data::{COMPARISON_FILE, SCALING_FILE};

/// Contents of a well-formed experiment E1 result file
pub const COMPARISON_CSV: &str = "\
Tamanho,Sequencial_ms,Threads_ms,Processos_ms
100,1000,300,260
500,24000,6500,7100
1000,198000,52000,56000
";

/// Contents of a well-formed experiment E2 result file
pub const SCALING_CSV: &str = "\
P,Threads_ms,Processos_ms,Speedup_Threads,Speedup_Processos
1,24000,25000,1.000,0.960
2,12600,13400,1.905,1.791
4,6500,7100,3.692,3.380
8,6800,7500,3.529,3.200
";

/// Write both fixed-name input files into `dir`
pub fn write_sample_inputs(dir: &Path) {
    write_file(dir, COMPARISON_FILE, COMPARISON_CSV);
    write_file(dir, SCALING_FILE, SCALING_CSV);
}

pub fn write_file(dir: &Path, name: &str, contents: &str) {
    let mut file = File::create(dir.join(name)).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
}
