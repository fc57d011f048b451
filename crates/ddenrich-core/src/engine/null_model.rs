use super::config::RandomizationConfig;
use super::progress::{Progress, ProgressReporter};
use super::utils::sampling;
use crate::core::counting::canonical_counts;
use crate::core::counting::counter::CountTable;
use crate::core::models::combination::Combination;
use crate::core::models::interaction::{InteractionTable, Side};
use crate::core::models::label::DomainLabel;
use crate::core::models::table::CombinationMap;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Null-model statistics of one combination.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NullEntry {
    /// Sum of the combination's counts over all trials, divided by the number of trials.
    pub mean: f64,
    /// Number of trials in which the combination occurred at least once.
    pub trials_observed: usize,
}

/// Average counts under random pairing, for every combination seen in any trial.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NullTable {
    entries: CombinationMap<NullEntry>,
    trials: usize,
}

impl NullTable {
    pub fn get(&self, combination: &Combination) -> Option<&NullEntry> {
        self.entries.get(combination)
    }

    pub fn mean(&self, combination: &Combination) -> Option<f64> {
        self.get(combination).map(|entry| entry.mean)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Combination, &NullEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of trials the averages were taken over.
    pub fn trials(&self) -> usize {
        self.trials
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct RunningTotal {
    sum: u64,
    trials_observed: usize,
}

/// Running per-combination totals across trials.
///
/// Each trial's table is folded in by value, so the accumulator is threaded through the
/// trial loop instead of living in shared state.
#[derive(Debug, Clone, Default)]
pub struct NullAccumulator {
    totals: CombinationMap<RunningTotal>,
    trials: usize,
}

impl NullAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fold(mut self, trial: &CountTable) -> Self {
        for (combo, &count) in trial.iter() {
            let total = self.totals.get_or_insert_with(combo, RunningTotal::default);
            total.sum += count;
            total.trials_observed += 1;
        }
        self.trials += 1;
        self
    }

    /// Divides every running sum by the number of folded trials. Trials in which a
    /// combination did not occur count as zero for it.
    pub fn finish(self) -> NullTable {
        let trials = self.trials;
        let entries = self
            .totals
            .into_iter()
            .map(|(combo, total)| {
                let mean = if trials == 0 {
                    0.0
                } else {
                    total.sum as f64 / trials as f64
                };
                (
                    combo,
                    NullEntry {
                        mean,
                        trials_observed: total.trials_observed,
                    },
                )
            })
            .collect();
        NullTable { entries, trials }
    }
}

/// One randomization trial: permute the rows of `shuffled`, pair them positionally with
/// `fixed`, and count canonical combinations in `shuffled-fixed` orientation.
pub fn run_trial(
    shuffled: &[&[DomainLabel]],
    fixed: &[&[DomainLabel]],
    rng: &mut impl Rng,
) -> CountTable {
    let permuted = sampling::permute_rows(shuffled, rng);
    canonical_counts(permuted.iter().copied().zip(fixed.iter().copied()))
}

/// Builds the null table for one shuffled side of the interaction table.
#[instrument(skip_all, name = "null_model", fields(side = %side, trials = config.trials))]
pub fn build(
    table: &InteractionTable,
    side: Side,
    config: &RandomizationConfig,
    reporter: &ProgressReporter,
) -> NullTable {
    let shuffled = table.domain_sets(side);
    let fixed = table.domain_sets(side.other());
    let mut rng = sampling::side_rng(config.seed, side);

    info!("Shuffling {} domains over {} trials.", side, config.trials);
    reporter.report(Progress::ShuffleStart {
        side,
        trials: config.trials as u64,
    });

    let accumulator = (0..config.trials).fold(NullAccumulator::new(), |acc, _| {
        let counts = run_trial(&shuffled, &fixed, &mut rng);
        reporter.report(Progress::TrialComplete);
        acc.fold(&counts)
    });
    let null_table = accumulator.finish();

    let always_seen = null_table
        .iter()
        .filter(|(_, entry)| entry.trials_observed == null_table.trials())
        .count();
    debug!(
        combinations = null_table.len(),
        always_seen, "Null model accumulated."
    );
    reporter.report(Progress::ShuffleFinish {
        side,
        combinations: null_table.len(),
    });
    null_table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::interaction::{DomainSet, InteractionRow};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn set(labels: &[&str]) -> DomainSet {
        labels.iter().map(|l| l.parse().unwrap()).collect()
    }

    fn combo(raw: &str) -> Combination {
        raw.parse().unwrap()
    }

    fn counts(entries: &[(&str, u64)]) -> CountTable {
        entries.iter().map(|(k, v)| (combo(k), *v)).collect()
    }

    fn seeded(trials: usize, seed: u64) -> RandomizationConfig {
        RandomizationConfig {
            trials,
            seed: Some(seed),
        }
    }

    fn sample_table() -> InteractionTable {
        InteractionTable::new(vec![
            InteractionRow::new(set(&["PF00001", "PF00002"]), set(&["PF00003"])),
            InteractionRow::new(set(&["PF00001"]), set(&["PF00003", "PF00004"])),
            InteractionRow::new(set(&["PF00005"]), set(&["PF00001"])),
            InteractionRow::new(set(&[]), set(&["PF00002"])),
        ])
        .unwrap()
    }

    #[test]
    fn accumulator_divides_by_trial_count_including_absent_trials() {
        let null = NullAccumulator::new()
            .fold(&counts(&[("PF00001-PF00002", 4), ("PF00003-PF00004", 1)]))
            .fold(&counts(&[("PF00001-PF00002", 2)]))
            .fold(&counts(&[]))
            .fold(&counts(&[("PF00001-PF00002", 6)]))
            .finish();

        assert_eq!(null.trials(), 4);
        assert_eq!(
            null.get(&combo("PF00001-PF00002")),
            Some(&NullEntry {
                mean: 3.0,
                trials_observed: 3,
            })
        );
        assert_eq!(
            null.get(&combo("PF00003-PF00004")),
            Some(&NullEntry {
                mean: 0.25,
                trials_observed: 1,
            })
        );
    }

    #[test]
    fn accumulator_keeps_first_seen_order() {
        let null = NullAccumulator::new()
            .fold(&counts(&[("PF00009-PF00001", 1)]))
            .fold(&counts(&[("PF00002-PF00003", 1), ("PF00009-PF00001", 1)]))
            .finish();
        let keys: Vec<String> = null.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["PF00009-PF00001", "PF00002-PF00003"]);
    }

    #[test]
    fn empty_accumulator_finishes_to_empty_table() {
        let null = NullAccumulator::new().finish();
        assert!(null.is_empty());
        assert_eq!(null.trials(), 0);
    }

    #[test]
    fn run_trial_orients_combinations_shuffled_side_first() {
        let x = vec![set(&["PF00001"])];
        let y = vec![set(&["PF00002"])];
        let mut rng = StdRng::seed_from_u64(1);

        let xs: Vec<&[DomainLabel]> = x.iter().map(Vec::as_slice).collect();
        let ys: Vec<&[DomainLabel]> = y.iter().map(Vec::as_slice).collect();
        let table = run_trial(&ys, &xs, &mut rng);

        assert_eq!(table, counts(&[("PF00002-PF00001", 1)]));
    }

    #[test]
    fn single_row_null_model_equals_observed_counts() {
        let table = InteractionTable::new(vec![InteractionRow::new(
            set(&["PF00001", "PF00002"]),
            set(&["PF00003"]),
        )])
        .unwrap();

        let null = build(&table, Side::X, &seeded(25, 5), &ProgressReporter::new());

        assert_eq!(null.trials(), 25);
        assert_eq!(null.mean(&combo("PF00001-PF00003")), Some(1.0));
        assert_eq!(null.mean(&combo("PF00002-PF00003")), Some(1.0));
        assert_eq!(null.get(&combo("PF00001-PF00003")).unwrap().trials_observed, 25);
    }

    #[test]
    fn null_means_are_exact_fractions_of_the_trial_count() {
        let null = build(
            &sample_table(),
            Side::X,
            &seeded(1000, 17),
            &ProgressReporter::new(),
        );

        assert!(!null.is_empty());
        for (key, entry) in null.iter() {
            let scaled = entry.mean * 1000.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-6,
                "{} has mean {} which is not sum/1000",
                key,
                entry.mean
            );
            assert!(entry.trials_observed >= 1 && entry.trials_observed <= 1000);
        }
    }

    #[test]
    fn seeded_builds_are_reproducible() {
        let table = sample_table();
        let a = build(&table, Side::Y, &seeded(200, 99), &ProgressReporter::new());
        let b = build(&table, Side::Y, &seeded(200, 99), &ProgressReporter::new());
        assert_eq!(a, b);
    }

    #[test]
    fn y_shuffle_keys_start_with_y_side_labels() {
        let table = InteractionTable::new(vec![
            InteractionRow::new(set(&["PF00001"]), set(&["PF00002"])),
            InteractionRow::new(set(&["PF00001"]), set(&["PF00002"])),
        ])
        .unwrap();

        let null = build(&table, Side::Y, &seeded(10, 1), &ProgressReporter::new());

        assert_eq!(null.len(), 1);
        assert_eq!(null.mean(&combo("PF00002-PF00001")), Some(2.0));
    }

    #[test]
    fn build_reports_one_increment_per_trial() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let increments = Arc::new(AtomicUsize::new(0));
        let counter = increments.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |p: Progress| {
            if matches!(p, Progress::TrialComplete) {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        }));

        build(&sample_table(), Side::X, &seeded(37, 2), &reporter);
        assert_eq!(increments.load(Ordering::SeqCst), 37);
    }
}
