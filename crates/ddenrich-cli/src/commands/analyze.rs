use crate::cli::AnalyzeArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use ddenrich::{
    core::models::interaction::InteractionTable, engine::progress::ProgressReporter, workflows,
};
use tracing::{info, warn};

pub fn run(args: AnalyzeArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = build_config(&args)?;

    info!("Loading interaction table from {:?}", &config.input_path);
    let table = InteractionTable::load(&config.input_path, &config.table_format).map_err(|e| {
        CliError::FileParsing {
            path: config.input_path.clone(),
            source: e.into(),
        }
    })?;
    if table.is_empty() {
        warn!("Interaction table has no rows; result files will only contain headers.");
    }

    std::fs::create_dir_all(&config.output_dir)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Analyzing {} interactions ({} trials per shuffled side)...",
        table.len(),
        config.core_config.randomization.trials
    );
    info!("Invoking the core enrichment workflow...");

    let result = workflows::enrich::run(&table, &config.core_config, &reporter)?;
    let paths = workflows::enrich::export(&result, &config.output_dir, &config.species)?;

    for (report, path) in result.reports().into_iter().zip(&paths) {
        let known = report
            .records
            .iter()
            .filter(|r| r.known_interaction)
            .count();
        println!(
            "✓ Shuffled {}: {} combinations ({} in 3did) written to: {}",
            report.side,
            report.records.len(),
            known,
            path.display()
        );
    }

    Ok(())
}
