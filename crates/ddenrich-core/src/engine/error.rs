use super::config::ConfigError;
use crate::core::io::export::ExportError;
use crate::core::io::reference::ReferenceLoadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load reference database: {source}")]
    Reference {
        #[from]
        source: ReferenceLoadError,
    },

    #[error("Failed to export results: {source}")]
    Export {
        #[from]
        source: ExportError,
    },
}
