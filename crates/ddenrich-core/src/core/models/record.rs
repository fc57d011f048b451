use super::combination::Combination;

/// The enrichment of one combination against one null model.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentRecord {
    pub combination: Combination,
    /// Count in the observed (unshuffled) canonical table.
    pub observed: u64,
    /// Average count over all randomized trials.
    pub null_mean: f64,
    /// `log10(observed / null_mean)`, or `0.0` when either side of the ratio is zero.
    pub log_ratio: f64,
    /// Whether the pair is listed in the reference interaction database.
    pub known_interaction: bool,
}

impl EnrichmentRecord {
    pub fn reference_flag(&self) -> &'static str {
        if self.known_interaction { "Yes" } else { "No" }
    }
}
