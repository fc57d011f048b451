use ddenrich::core::io::table::TableFormat;
use ddenrich::engine::config::DEFAULT_TRIALS;
use std::path::PathBuf;

pub struct DefaultsConfig {
    pub reference_path: PathBuf,
    pub output_dir: PathBuf,
    pub table_format: TableFormat,
    pub trials: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            reference_path: PathBuf::from("3did_validation.dat"),
            output_dir: PathBuf::from("."),
            table_format: TableFormat::default(),
            trials: DEFAULT_TRIALS,
        }
    }
}
