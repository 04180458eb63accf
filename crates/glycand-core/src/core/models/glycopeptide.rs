/// One candidate glycopeptide: a (peptide, motif site, glycan) triple with
/// its combined monoisotopic mass.
///
/// Records are created once by the combiner, never mutated, and consumed only
/// by the report emitter.
#[derive(Debug, Clone, PartialEq)]
pub struct GlycopeptideRecord {
    pub protein_identifier: String,
    pub peptide_sequence: String,
    pub missed_cleavages: usize,
    /// Motif match offset within the peptide, 0-based.
    pub site_offset: usize,
    pub glycan_name: String,
    pub combined_mass: f64,
}

/// A named CSV payload produced by the report emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub filename: String,
    pub contents: String,
}

impl OutputFile {
    pub fn new(filename: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            contents: contents.into(),
        }
    }
}
