/// A single named protein sequence parsed from a FASTA entry.
///
/// Identifiers are preserved verbatim (the full header line after `>`) and
/// need not be unique across a file; downstream stages key on source order,
/// never on the identifier itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinRecord {
    pub identifier: String,
    /// Uppercase single-letter amino-acid sequence, validated against the
    /// recognized alphabet at parse time.
    pub sequence: String,
}

impl ProteinRecord {
    pub fn new(identifier: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            sequence: sequence.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
