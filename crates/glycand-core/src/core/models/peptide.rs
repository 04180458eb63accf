/// A peptide produced by digesting a parent protein.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peptide {
    pub sequence: String,
    /// 0-based index of this peptide's first residue in the parent sequence.
    pub start_offset: usize,
    /// Number of internal cleavage points this peptide spans without being
    /// cut. Always the *actual* count, which may be less than the configured
    /// maximum for short proteins.
    pub missed_cleavages: usize,
}

impl Peptide {
    pub fn new(sequence: impl Into<String>, start_offset: usize, missed_cleavages: usize) -> Self {
        Self {
            sequence: sequence.into(),
            start_offset,
            missed_cleavages,
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// A position within a peptide where a glycosylation motif matches.
///
/// Offsets are relative to the peptide, not the parent protein; all reported
/// offsets lie within peptide bounds and satisfy the motif predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotifSite {
    pub peptide_offset: usize,
}

impl MotifSite {
    pub fn new(peptide_offset: usize) -> Self {
        Self { peptide_offset }
    }
}
