/// Which side of the recognized residue an enzyme cuts on.
///
/// C-terminal rules cut *after* a residue in the cut set unless the next
/// residue is in the blocking set (e.g. trypsin does not cut before proline);
/// N-terminal rules cut *before* a residue in the cut set (e.g. Asp-N).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleavageTerminal {
    CTerm,
    NTerm,
}

/// A named enzymatic digestion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestionRule {
    pub name: &'static str,
    pub description: &'static str,
    pub terminal: CleavageTerminal,
    /// Residues the enzyme recognizes.
    cut: &'static str,
    /// Residues that suppress cleavage when they follow the cut site
    /// (C-terminal rules only).
    block: &'static str,
}

impl DigestionRule {
    /// Returns whether the boundary *before* `position` is a cleavage point.
    ///
    /// `position` must satisfy `0 < position < sequence.len()`; boundaries at
    /// the sequence ends are never cleavage points.
    pub fn cleaves_at(&self, sequence: &[char], position: usize) -> bool {
        debug_assert!(position > 0 && position < sequence.len());
        match self.terminal {
            CleavageTerminal::CTerm => {
                self.cut.contains(sequence[position - 1])
                    && !self.block.contains(sequence[position])
            }
            CleavageTerminal::NTerm => self.cut.contains(sequence[position]),
        }
    }
}

/// The built-in digestion rule registry, exposed for caller discovery.
///
/// Populated once at compile time and never mutated; lookup is
/// case-insensitive via [`find_digestion`].
pub static DIGESTIONS: &[DigestionRule] = &[
    DigestionRule {
        name: "trypsin",
        description: "Cleaves after K or R, except before P",
        terminal: CleavageTerminal::CTerm,
        cut: "KR",
        block: "P",
    },
    DigestionRule {
        name: "trypsin/p",
        description: "Cleaves after K or R, including before P",
        terminal: CleavageTerminal::CTerm,
        cut: "KR",
        block: "",
    },
    DigestionRule {
        name: "chymotrypsin",
        description: "Cleaves after F, W, or Y, except before P",
        terminal: CleavageTerminal::CTerm,
        cut: "FWY",
        block: "P",
    },
    DigestionRule {
        name: "lys-c",
        description: "Cleaves after K",
        terminal: CleavageTerminal::CTerm,
        cut: "K",
        block: "",
    },
    DigestionRule {
        name: "arg-c",
        description: "Cleaves after R, except before P",
        terminal: CleavageTerminal::CTerm,
        cut: "R",
        block: "P",
    },
    DigestionRule {
        name: "glu-c",
        description: "Cleaves after E",
        terminal: CleavageTerminal::CTerm,
        cut: "E",
        block: "",
    },
    DigestionRule {
        name: "asp-n",
        description: "Cleaves before D",
        terminal: CleavageTerminal::NTerm,
        cut: "D",
        block: "",
    },
];

/// Looks up a digestion rule by name, case-insensitively.
pub fn find_digestion(name: &str) -> Option<&'static DigestionRule> {
    DIGESTIONS
        .iter()
        .find(|rule| rule.name.eq_ignore_ascii_case(name))
}
