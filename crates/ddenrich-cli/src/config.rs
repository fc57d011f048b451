//! Configuration for the CLI: an optional TOML file, `--set KEY=VALUE` overrides and
//! command-line flags, merged over built-in defaults.

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{build_config, resolve_table_format};
pub use defaults::DefaultsConfig;
pub use file::FileInputConfig;
