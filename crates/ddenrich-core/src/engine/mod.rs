//! # Engine Module
//!
//! This module implements the statistical engine of DDEnrich: the randomized null model
//! and the enrichment scoring built on top of the deterministic counting pipeline in
//! [`crate::core::counting`].
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Reference database location, number of randomization
//!   trials and the optional seed
//! - **Error Handling** ([`error`]) - Engine-level error type aggregating the loader errors
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events for front ends
//! - **Null Model** ([`null_model`]) - Monte Carlo row shuffling of one interaction side and
//!   an explicit accumulator that averages counts over all trials
//! - **Enrichment** ([`enrichment`]) - Log-ratio scoring of observed against null counts and
//!   annotation with the reference database
//!
//! ## Determinism
//!
//! The only source of nondeterminism is the row permutation drawn for each trial. Supplying
//! a seed in [`config::RandomizationConfig`] makes a complete run reproducible; the X and Y
//! sides draw from separate generators so neither depends on how many values the other
//! consumed.

pub mod config;
pub mod enrichment;
pub mod error;
pub mod null_model;
pub mod progress;
pub(crate) mod utils;
