//! # Core Module
//!
//! This module provides the data structures and deterministic algorithms that the
//! enrichment analysis is built from.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Domain labels and their identifier schemes,
//!   combinations of two labels, and interaction tables pairing the domain sets of two
//!   interacting proteins
//! - **Counting** ([`counting`]) - Combination generation, per-row collapsing of reversed
//!   duplicates, tallying and canonical merging of reverse orientations
//! - **File I/O** ([`io`]) - Interaction table parsing, 3did reference parsing and CSV export
//!
//! Everything in this layer is free of randomness and global state; the same input always
//! yields the same tables, in the same order.

pub mod counting;
pub mod io;
pub mod models;
