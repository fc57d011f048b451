use crate::core::models::combination::Combination;
use crate::core::models::table::CombinationMap;
use std::collections::HashSet;

/// Occurrence counts per combination, in first-seen order.
pub type CountTable = CombinationMap<u64>;

/// Tallies every combination of every row into one flat table.
pub fn count_combinations(rows: &[Vec<Combination>]) -> CountTable {
    let mut table = CountTable::new();
    for combo in rows.iter().flatten() {
        *table.get_or_insert_with(combo, || 0) += 1;
    }
    table
}

/// Folds the counts of reversed orientations into a single canonical key.
///
/// Keys are visited in table order. For a non-self key `A-B`:
///
/// - if `B-A` is present with a non-zero count different from the count of `A-B`, the two
///   counts are summed under `A-B` and `B-A` disappears;
/// - if `B-A` is present with a zero count, it is pruned;
/// - if both counts are equal, nothing is merged and both keys are kept.
///
/// The equal-count case means a pair seen equally often in both orientations is reported
/// twice, each with half of its true total. Downstream consumers see it as two entries.
/// The input table is left untouched.
pub fn merge_reverse_counts(counts: &CountTable) -> CountTable {
    let mut merged = CountTable::new();
    let mut absorbed: HashSet<Combination> = HashSet::new();

    for (combo, &count) in counts.iter() {
        if absorbed.contains(combo) {
            continue;
        }
        if combo.is_self_pair() {
            merged.insert(combo.clone(), count);
            continue;
        }

        let reverse = combo.reversed();
        match counts.get(&reverse).copied() {
            Some(0) => {
                absorbed.insert(reverse);
                merged.insert(combo.clone(), count);
            }
            Some(reverse_count) if reverse_count != count => {
                absorbed.insert(reverse);
                merged.insert(combo.clone(), count + reverse_count);
            }
            _ => {
                merged.insert(combo.clone(), count);
            }
        }
    }
    merged
}
