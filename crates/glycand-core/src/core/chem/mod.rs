//! Chemistry tables and mass arithmetic.
//!
//! Everything here is process-wide, read-only configuration: the amino-acid
//! alphabet and residue mass table ([`residues`]), the registry of enzymatic
//! digestion rules ([`digestion`]), the registry of named glycosylation motifs
//! ([`motifs`]), and the pluggable mass model used by the combiner ([`mass`]).
//! The registries are built at compile time and exposed through read accessors
//! only.

pub mod digestion;
pub mod mass;
pub mod motifs;
pub mod residues;
