//! Immutable value types flowing through the generation pipeline.
//!
//! Every type here is created once by its producing stage and never mutated
//! afterwards: [`protein::ProteinRecord`] by the FASTA parser,
//! [`peptide::Peptide`] by the digestion engine, [`glycan::GlycanEntry`] by the
//! glycan table reader, and [`glycopeptide::GlycopeptideRecord`] by the
//! combiner.

pub mod glycan;
pub mod glycopeptide;
pub mod peptide;
pub mod protein;
