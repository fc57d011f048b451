use super::null_model::NullTable;
use crate::core::counting::counter::CountTable;
use crate::core::io::reference::ReferenceDatabase;
use crate::core::models::record::EnrichmentRecord;
use tracing::debug;

/// `log10(observed / null_mean)`, or `0.0` when either side of the ratio is zero.
pub fn enrichment_score(observed: u64, null_mean: f64) -> f64 {
    if null_mean == 0.0 {
        return 0.0;
    }
    let ratio = observed as f64 / null_mean;
    if ratio == 0.0 { 0.0 } else { ratio.log10() }
}

/// Joins the observed table with one null table.
///
/// Records follow the iteration order of `null`. A combination that occurred only under
/// randomization has no observed count and is left out; a combination that was observed but
/// never produced by a trial is also absent, since iteration is driven by the null table.
pub fn consolidate(
    observed: &CountTable,
    null: &NullTable,
    reference: &ReferenceDatabase,
) -> Vec<EnrichmentRecord> {
    let mut dropped = 0usize;
    let mut records = Vec::with_capacity(null.len().min(observed.len()));

    for (combination, entry) in null.iter() {
        let Some(&count) = observed.get(combination) else {
            dropped += 1;
            continue;
        };
        records.push(EnrichmentRecord {
            combination: combination.clone(),
            observed: count,
            null_mean: entry.mean,
            log_ratio: enrichment_score(count, entry.mean),
            known_interaction: reference
                .contains_pair(combination.first().as_str(), combination.second().as_str()),
        });
    }

    if dropped > 0 {
        debug!(
            dropped,
            "Combinations seen only under randomization were left out."
        );
    }
    records
}
