use crate::core::models::combination::Combination;
use crate::core::models::label::DomainLabel;
use std::collections::HashSet;

/// All `x-y` combinations of one interaction, X outer and Y inner.
pub fn domain_combinations(x: &[DomainLabel], y: &[DomainLabel]) -> Vec<Combination> {
    x.iter()
        .flat_map(|a| y.iter().map(move |b| Combination::new(a.clone(), b.clone())))
        .collect()
}

/// Applies [`domain_combinations`] to every row, keeping one combination list per row.
pub fn row_combinations<'a, I>(rows: I) -> Vec<Vec<Combination>>
where
    I: IntoIterator<Item = (&'a [DomainLabel], &'a [DomainLabel])>,
{
    rows.into_iter()
        .map(|(x, y)| domain_combinations(x, y))
        .collect()
}

/// Removes reversed duplicates from a single row's combinations.
///
/// When both `A-B` and `B-A` occur in the row, every occurrence of the orientation met first
/// is kept and every occurrence of the other is dropped. Self-pairs are always kept.
pub fn collapse_row(row: &[Combination]) -> Vec<Combination> {
    let mut kept: HashSet<(&DomainLabel, &DomainLabel)> = HashSet::new();
    let mut collapsed = Vec::with_capacity(row.len());

    for combo in row {
        if !combo.is_self_pair() {
            if kept.contains(&(combo.second(), combo.first())) {
                continue;
            }
            kept.insert((combo.first(), combo.second()));
        }
        collapsed.push(combo.clone());
    }
    collapsed
}

/// Collapses each row independently. A pair appearing reversed in two different rows is
/// not a duplicate at this stage.
pub fn collapse_reverse_duplicates(rows: &[Vec<Combination>]) -> Vec<Vec<Combination>> {
    rows.iter().map(|row| collapse_row(row)).collect()
}
