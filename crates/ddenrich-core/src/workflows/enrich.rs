use crate::core::counting::canonical_counts;
use crate::core::counting::counter::CountTable;
use crate::core::io::export;
use crate::core::io::reference::ReferenceDatabase;
use crate::core::models::interaction::{InteractionTable, Side};
use crate::core::models::record::EnrichmentRecord;
use crate::engine::config::EnrichmentConfig;
use crate::engine::enrichment;
use crate::engine::error::EngineError;
use crate::engine::null_model::{self, NullTable};
use crate::engine::progress::{Progress, ProgressReporter};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Enrichment of the observed table against the null model of one shuffled side.
#[derive(Debug, Clone)]
pub struct SideReport {
    pub side: Side,
    pub null_table: NullTable,
    pub records: Vec<EnrichmentRecord>,
}

#[derive(Debug, Clone)]
pub struct EnrichmentResult {
    pub observed: CountTable,
    pub x_shuffled: SideReport,
    pub y_shuffled: SideReport,
}

impl EnrichmentResult {
    /// Reports in export order, X first.
    pub fn reports(&self) -> [&SideReport; 2] {
        [&self.x_shuffled, &self.y_shuffled]
    }
}

/// Runs the complete analysis, loading the reference database from the configured path.
#[instrument(skip_all, name = "enrichment_workflow")]
pub fn run(
    table: &InteractionTable,
    config: &EnrichmentConfig,
    reporter: &ProgressReporter,
) -> Result<EnrichmentResult, EngineError> {
    let reference = reporter.phase("Loading Reference", || {
        ReferenceDatabase::load(&config.reference_path)
    })?;
    info!(
        "Loaded {} reference interactions from {}.",
        reference.len(),
        config.reference_path.display()
    );
    Ok(run_with_reference(table, &reference, config, reporter))
}

/// Runs the analysis against an already loaded reference database.
pub fn run_with_reference(
    table: &InteractionTable,
    reference: &ReferenceDatabase,
    config: &EnrichmentConfig,
    reporter: &ProgressReporter,
) -> EnrichmentResult {
    info!(
        rows = table.len(),
        scheme = ?table.scheme(),
        "Starting enrichment analysis."
    );

    let observed = reporter.phase("Counting Observed", || {
        canonical_counts(
            table
                .domain_sets(Side::X)
                .into_iter()
                .zip(table.domain_sets(Side::Y)),
        )
    });
    info!("Observed {} canonical combinations.", observed.len());

    let x_shuffled = analyze_side(table, &observed, reference, config, Side::X, reporter);
    let y_shuffled = analyze_side(table, &observed, reference, config, Side::Y, reporter);

    info!(
        "Analysis complete: {} X-shuffled and {} Y-shuffled records.",
        x_shuffled.records.len(),
        y_shuffled.records.len()
    );
    EnrichmentResult {
        observed,
        x_shuffled,
        y_shuffled,
    }
}

fn analyze_side(
    table: &InteractionTable,
    observed: &CountTable,
    reference: &ReferenceDatabase,
    config: &EnrichmentConfig,
    side: Side,
    reporter: &ProgressReporter,
) -> SideReport {
    let null_table = null_model::build(table, side, &config.randomization, reporter);
    let records = reporter.phase("Scoring", || {
        enrichment::consolidate(observed, &null_table, reference)
    });
    reporter.report(Progress::Message(format!(
        "{} records for shuffled {}",
        records.len(),
        side
    )));
    SideReport {
        side,
        null_table,
        records,
    }
}

/// Writes one result file per shuffled side into `output_dir` and returns their paths.
/// Either both files are written or neither is left behind.
pub fn export(
    result: &EnrichmentResult,
    output_dir: &Path,
    species: &str,
) -> Result<Vec<PathBuf>, EngineError> {
    let reports: Vec<(Side, &[EnrichmentRecord])> = result
        .reports()
        .into_iter()
        .map(|report| (report.side, report.records.as_slice()))
        .collect();
    Ok(export::write_all_results(output_dir, species, &reports)?)
}
