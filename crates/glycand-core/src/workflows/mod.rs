//! # Workflows Module
//!
//! High-level entry points that orchestrate complete generation runs.
//!
//! ## Overview
//!
//! Workflows are the top-level API of this library. They tie the engine and
//! core layers together: parse the inputs, digest every protein, scan for
//! motif sites, combine with the glycan table, and emit the CSV report set.
//! A run is all-or-nothing (any error aborts with no partial output) and
//! deterministic: identical inputs produce byte-identical files.

pub mod generate;
