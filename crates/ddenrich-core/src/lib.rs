//! # DDEnrich Core Library
//!
//! A library for measuring how strongly pairs of protein domains co-occur across a set of
//! protein-protein interactions, relative to what random pairing of the same proteins would
//! produce.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that the statistical core stays pure
//! and testable, while file handling and orchestration live at the edges.
//!
//! - **[`core`]: The Foundation.** Validated domain identifiers, interaction tables,
//!   combination generation, duplicate collapsing, counting and reverse-count merging, plus
//!   the readers and writers for interaction tables, the 3did reference file and result CSVs.
//!
//! - **[`engine`]: The Logic Core.** Configuration, error types, progress reporting, the
//!   randomized null-model builder (Monte Carlo row shuffling) and the enrichment
//!   consolidator that scores observed counts against the null model.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into the complete
//!   batch analysis: observed counts, one null model per shuffled side, and one set of
//!   enrichment records per side, ready for export.

pub mod core;
pub mod engine;
pub mod workflows;
