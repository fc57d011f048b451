//! Provides input/output for the flat files an enrichment run consumes and produces.
//!
//! - [`table`] reads the delimited interaction table into an
//!   [`InteractionTable`](crate::core::models::interaction::InteractionTable).
//! - [`reference`] parses the 3did flat file into a
//!   [`ReferenceDatabase`](reference::ReferenceDatabase).
//! - [`export`] writes one results CSV per shuffled side.

pub mod export;
pub mod reference;
pub mod table;
