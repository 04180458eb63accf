//! # Glycand Core Library
//!
//! A library for enumerating candidate glycopeptides from protein sequences:
//! proteins are digested with a named enzymatic rule, scanned for glycosylation
//! motif sites, and combined with a table of glycan masses into deterministic,
//! diff-stable CSV reports.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (proteins,
//!   peptides, glycans, output records), the chemistry tables (residue masses,
//!   digestion rules, motif registry), and file I/O (FASTA, glycan CSV, CSV
//!   report emission).
//!
//! - **[`engine`]: The Logic Core.** Implements the digestion engine, the motif
//!   compiler/scanner, and the glycopeptide combiner, together with the run
//!   configuration that ties their parameters together.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It
//!   ties the `engine` and `core` together to execute a complete generation run:
//!   one batch of inputs in, one deterministic set of named CSV payloads out.
//!
//! Every computation in this crate is a pure function of its inputs: no
//! component holds state across invocations, and identical inputs always produce
//! byte-identical output files.

pub mod core;
pub mod engine;
pub mod workflows;
