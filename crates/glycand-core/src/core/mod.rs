//! # Core Module
//!
//! This module provides the fundamental building blocks for glycopeptide
//! candidate generation, serving as the stateless foundation of the library.
//!
//! ## Overview
//!
//! The core module defines the immutable value types flowing through the
//! pipeline, the chemistry knowledge the engine draws on, and the parsers and
//! emitters at the file boundary. Nothing in this layer holds state across
//! invocations.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Proteins, peptides, motif sites, glycans,
//!   and the final glycopeptide output records
//! - **Chemistry** ([`chem`]) - Residue mass tables, digestion rule and motif
//!   registries, and the pluggable mass model
//! - **File I/O** ([`io`]) - FASTA parsing, glycan CSV parsing, and CSV report
//!   emission

pub mod chem;
pub mod io;
pub mod models;
