use ddenrich::core::io::table::TableFormat;
use ddenrich::engine::config::EnrichmentConfig;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub species: String,
    pub output_dir: PathBuf,
    pub table_format: TableFormat,
    pub core_config: EnrichmentConfig,
}
