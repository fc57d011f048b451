//! # Workflows Module
//!
//! High-level entry points that run a complete enrichment analysis.
//!
//! ## Overview
//!
//! A workflow takes a loaded [`InteractionTable`](crate::core::models::interaction::InteractionTable)
//! and an [`EnrichmentConfig`](crate::engine::config::EnrichmentConfig), loads the reference
//! database, counts the observed combinations, builds one null model per shuffled side and
//! returns the scored records for both sides. Progress is reported through a
//! [`ProgressReporter`](crate::engine::progress::ProgressReporter) so front ends can render
//! it however they like.
//!
//! - **Enrichment Workflow** ([`enrich`]) - The batch analysis and the export of its
//!   per-side result files.

pub mod enrich;
