//! # Core Models Module
//!
//! Data structures describing the input of an enrichment analysis.
//!
//! ## Key Components
//!
//! - [`label`] - Validated domain identifiers (Pfam or InterPro) and their schemes
//! - [`combination`] - An ordered rendering `A-B` of a pair of domain labels
//! - [`interaction`] - Interaction rows, the two interaction sides and the full table
//! - [`table`] - An insertion-ordered map keyed by combination, shared by all count tables
//! - [`record`] - One enrichment result: observed count, null mean, log ratio, reference flag
//!
//! ## Usage
//!
//! ```ignore
//! use ddenrich::core::models::label::DomainLabel;
//! use ddenrich::core::models::combination::Combination;
//!
//! let a: DomainLabel = "PF00072".parse()?;
//! let b: DomainLabel = "PF00486".parse()?;
//! let combo = Combination::new(a, b);
//! assert_eq!(combo.to_string(), "PF00072-PF00486");
//! ```

pub mod combination;
pub mod interaction;
pub mod label;
pub mod record;
pub mod table;
