use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileInputConfig};
use super::models::AppConfig;
use crate::cli::{AnalyzeArgs, TableArgs};
use crate::error::{CliError, Result};
use crate::utils::parser;
use ddenrich::core::io::table::TableFormat;
use ddenrich::engine::config::EnrichmentConfigBuilder;
use std::path::PathBuf;

pub fn build_config(args: &AnalyzeArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let input_file = file_config.input.take().unwrap_or_default();
    let table_format = resolve_table_format(&args.table, input_file, &defaults)?;

    let randomization_file = file_config.randomization.take().unwrap_or_default();
    let trials = args
        .trials
        .or(randomization_file.trials)
        .unwrap_or(defaults.trials);
    let seed = args.seed.or(randomization_file.seed);

    let reference_path = args
        .reference
        .clone()
        .or(file_config.reference_path.take())
        .unwrap_or(defaults.reference_path);
    let output_dir = args
        .output_dir
        .clone()
        .or(file_config.output_dir.take())
        .unwrap_or(defaults.output_dir);

    let species = validate_species(&args.species)?;

    let core_config = EnrichmentConfigBuilder::new()
        .reference_path(reference_path)
        .trials(trials)
        .seed(seed)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        species,
        output_dir,
        table_format,
        core_config,
    })
}

/// Merges table layout flags over the `[input]` section and the defaults.
pub fn resolve_table_format(
    cli: &TableArgs,
    file: FileInputConfig,
    defaults: &DefaultsConfig,
) -> Result<TableFormat> {
    let delimiter = match cli.delimiter.as_deref().or(file.delimiter.as_deref()) {
        Some(raw) => {
            parser::parse_delimiter(raw).map_err(|e| CliError::Argument(e.to_string()))?
        }
        None => defaults.table_format.delimiter,
    };
    let x_column = cli
        .x_column
        .clone()
        .or(file.x_column)
        .unwrap_or_else(|| defaults.table_format.x_column.clone());
    let y_column = cli
        .y_column
        .clone()
        .or(file.y_column)
        .unwrap_or_else(|| defaults.table_format.y_column.clone());

    if x_column == y_column {
        return Err(CliError::Config(format!(
            "X and Y domains must come from different columns, both are '{}'",
            x_column
        )));
    }

    Ok(TableFormat {
        delimiter,
        x_column,
        y_column,
    })
}

/// The species label becomes part of the output file names, so it must be a plain name.
fn validate_species(species: &str) -> Result<String> {
    let species = species.trim();
    if species.is_empty() {
        return Err(CliError::Argument("Species label cannot be empty.".to_string()));
    }
    if species.contains(['/', '\\']) {
        return Err(CliError::Argument(format!(
            "Species label '{}' cannot contain path separators.",
            species
        )));
    }
    Ok(species.to_string())
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let (key, value_str) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "reference-path" => {
                config.reference_path = Some(PathBuf::from(value_str));
            }
            "output-dir" => {
                config.output_dir = Some(PathBuf::from(value_str));
            }
            "input.delimiter" => {
                config.input.get_or_insert_with(Default::default).delimiter =
                    Some(value_str.to_string());
            }
            "input.x-column" => {
                config.input.get_or_insert_with(Default::default).x_column =
                    Some(value_str.to_string());
            }
            "input.y-column" => {
                config.input.get_or_insert_with(Default::default).y_column =
                    Some(value_str.to_string());
            }
            "randomization.trials" => {
                config
                    .randomization
                    .get_or_insert_with(Default::default)
                    .trials = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })?);
            }
            "randomization.seed" => {
                config.randomization.get_or_insert_with(Default::default).seed =
                    Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid integer value for {}: {}",
                            key, value_str
                        ))
                    })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddenrich::engine::config::DEFAULT_TRIALS;
    use std::fs;
    use tempfile::tempdir;

    fn base_analyze_args() -> AnalyzeArgs {
        AnalyzeArgs {
            input: PathBuf::from("pairs.csv"),
            species: "ecoli".to_string(),
            config: None,
            reference: None,
            output_dir: None,
            table: TableArgs::default(),
            trials: None,
            seed: None,
            set_values: vec![],
        }
    }

    #[test]
    fn build_config_uses_defaults_without_file_or_flags() {
        let app = build_config(&base_analyze_args()).expect("build ok");

        assert_eq!(app.input_path, PathBuf::from("pairs.csv"));
        assert_eq!(app.species, "ecoli");
        assert_eq!(app.output_dir, PathBuf::from("."));
        assert_eq!(app.table_format, TableFormat::default());
        assert_eq!(
            app.core_config.reference_path,
            PathBuf::from("3did_validation.dat")
        );
        assert_eq!(app.core_config.randomization.trials, DEFAULT_TRIALS);
        assert_eq!(app.core_config.randomization.seed, None);
    }

    #[test]
    fn build_config_reads_file_and_merges() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        let toml = r#"
            reference-path = "data/3did_flat"
            output-dir = "results"

            [input]
            delimiter = "tab"
            x-column = "Left"
            y-column = "Right"

            [randomization]
            trials = 300
            seed = 11
            "#;
        fs::write(&cfg_path, toml).unwrap();

        let mut args = base_analyze_args();
        args.config = Some(cfg_path);

        let app = build_config(&args).expect("build ok");

        assert_eq!(app.output_dir, PathBuf::from("results"));
        assert_eq!(app.table_format.delimiter, b'\t');
        assert_eq!(app.table_format.x_column, "Left");
        assert_eq!(app.table_format.y_column, "Right");
        assert_eq!(app.core_config.reference_path, PathBuf::from("data/3did_flat"));
        assert_eq!(app.core_config.randomization.trials, 300);
        assert_eq!(app.core_config.randomization.seed, Some(11));
    }

    #[test]
    fn cli_overrides_set_values_which_override_file_values() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        fs::write(
            &cfg_path,
            "[randomization]\ntrials = 300\nseed = 1\n[input]\ndelimiter = \";\"\n",
        )
        .unwrap();

        let mut args = base_analyze_args();
        args.config = Some(cfg_path);
        args.set_values = vec![
            "randomization.trials=400".to_string(),
            "randomization.seed=2".to_string(),
            "input.delimiter=|".to_string(),
        ];
        args.trials = Some(500);

        let app = build_config(&args).expect("build ok");

        assert_eq!(app.core_config.randomization.trials, 500);
        assert_eq!(app.core_config.randomization.seed, Some(2));
        assert_eq!(app.table_format.delimiter, b'|');
    }

    #[test]
    fn set_values_override_every_supported_key() {
        let mut args = base_analyze_args();
        args.set_values = vec![
            "reference-path=refs/3did".to_string(),
            "output-dir=out".to_string(),
            "input.delimiter=tab".to_string(),
            "input.x-column=A".to_string(),
            "input.y-column=B".to_string(),
            "randomization.trials=20".to_string(),
            "randomization.seed=99".to_string(),
        ];

        let app = build_config(&args).expect("build ok");

        assert_eq!(app.core_config.reference_path, PathBuf::from("refs/3did"));
        assert_eq!(app.output_dir, PathBuf::from("out"));
        assert_eq!(
            app.table_format,
            TableFormat {
                delimiter: b'\t',
                x_column: "A".to_string(),
                y_column: "B".to_string(),
            }
        );
        assert_eq!(app.core_config.randomization.trials, 20);
        assert_eq!(app.core_config.randomization.seed, Some(99));
    }

    #[test]
    fn set_values_reject_unknown_keys_and_bad_values() {
        let mut args = base_analyze_args();
        args.set_values = vec!["randomization.shuffles=5".to_string()];
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));

        args.set_values = vec!["randomization.trials=many".to_string()];
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));

        args.set_values = vec!["randomization.trials".to_string()];
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn zero_trials_is_a_configuration_error() {
        let mut args = base_analyze_args();
        args.trials = Some(0);
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn invalid_delimiter_is_an_argument_error() {
        let mut args = base_analyze_args();
        args.table.delimiter = Some("xy".to_string());
        assert!(matches!(build_config(&args), Err(CliError::Argument(_))));
    }

    #[test]
    fn identical_columns_are_rejected() {
        let table = TableArgs {
            delimiter: None,
            x_column: Some("Domains".to_string()),
            y_column: Some("Domains".to_string()),
        };
        let result = resolve_table_format(
            &table,
            FileInputConfig::default(),
            &DefaultsConfig::default(),
        );
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn species_must_be_a_plain_name() {
        let mut args = base_analyze_args();
        args.species = "  ".to_string();
        assert!(matches!(build_config(&args), Err(CliError::Argument(_))));

        args.species = "../ecoli".to_string();
        assert!(matches!(build_config(&args), Err(CliError::Argument(_))));

        args.species = " yeast ".to_string();
        assert_eq!(build_config(&args).unwrap().species, "yeast");
    }
}
