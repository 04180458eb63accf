//! Provides input/output functionality at the pipeline's file boundary.
//!
//! Parsers here validate strictly and fail with context-carrying errors; the
//! report emitter renders deterministic, diff-stable CSV payloads.

pub mod fasta;
pub mod glycan_table;
pub mod report;
