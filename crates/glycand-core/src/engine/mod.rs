//! # Engine Module
//!
//! The logic core of the library: enzymatic digestion, motif scanning, and
//! glycopeptide combination.
//!
//! ## Overview
//!
//! The engine consumes the immutable models and chemistry tables from
//! [`crate::core`] and implements the three algorithmic stages of candidate
//! generation. Each stage is a pure, deterministic function of its inputs, so
//! the full pipeline can be re-invoked with identical inputs to reproduce
//! identical output.
//!
//! - **Digestion** ([`digest`]) - Cleavage-site computation and a lazy
//!   iterator over peptides, including missed-cleavage variants
//! - **Motif Scanning** ([`motif`]) - A small pattern compiler over the
//!   amino-acid alphabet and an overlap-reporting scanner
//! - **Combination** ([`combine`]) - The (peptide, site, glycan) product with
//!   a pluggable mass model
//! - **Configuration** ([`config`]) - The validated parameter set for one
//!   generation run
//! - **Errors** ([`error`]) - The umbrella error type returned by the
//!   top-level workflow

pub mod combine;
pub mod config;
pub mod digest;
pub mod error;
pub mod motif;
