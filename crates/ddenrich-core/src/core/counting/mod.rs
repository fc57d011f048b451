//! # Counting Module
//!
//! Turns interaction rows into a canonical table of combination counts.
//!
//! The pipeline has four pure stages, applied in order:
//!
//! 1. [`combinations::row_combinations`] - the X × Y cross product of every row
//! 2. [`combinations::collapse_reverse_duplicates`] - per-row removal of reversed duplicates
//! 3. [`counter::count_combinations`] - a flat tally over all rows
//! 4. [`counter::merge_reverse_counts`] - folding `B-A` counts into `A-B` across rows
//!
//! [`canonical_counts`] runs all four. It is used both for the observed table and for every
//! randomized trial of the null model, so both sides of the enrichment ratio are computed
//! identically.

pub mod combinations;
pub mod counter;

use crate::core::models::label::DomainLabel;
use counter::CountTable;

/// Runs the full counting pipeline over row-aligned `(left, right)` domain sets.
pub fn canonical_counts<'a, I>(rows: I) -> CountTable
where
    I: IntoIterator<Item = (&'a [DomainLabel], &'a [DomainLabel])>,
{
    let combos = combinations::row_combinations(rows);
    let collapsed = combinations::collapse_reverse_duplicates(&combos);
    let counts = counter::count_combinations(&collapsed);
    counter::merge_reverse_counts(&counts)
}
