use crate::core::chem::residues::is_residue;
use crate::core::models::peptide::MotifSite;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MotifError {
    #[error("Motif pattern is empty")]
    EmptyPattern,

    #[error("Unbalanced '[' at position {position} in pattern '{pattern}'")]
    UnbalancedBracket { pattern: String, position: usize },

    #[error("Empty residue class at position {position} in pattern '{pattern}'")]
    EmptyClass { pattern: String, position: usize },

    #[error("Unrecognized residue symbol '{symbol}' at position {position} in pattern '{pattern}'")]
    InvalidSymbol {
        pattern: String,
        symbol: char,
        position: usize,
    },
}

/// One position of a compiled motif: a set of residues, possibly negated.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ResidueClass {
    residues: Vec<char>,
    negated: bool,
}

impl ResidueClass {
    fn matches(&self, residue: char) -> bool {
        self.residues.contains(&residue) != self.negated
    }
}

/// A compiled glycosylation motif pattern.
///
/// The grammar is one symbol class per position: a bare residue literal
/// (`N`), a class (`[TS]`), or a negated class (`[^P]`). Patterns have fixed
/// length and match a window iff every class matches the residue at its
/// offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    pattern: String,
    classes: Vec<ResidueClass>,
}

impl Motif {
    /// Compiles a pattern string, rejecting malformed input.
    pub fn compile(pattern: &str) -> Result<Self, MotifError> {
        if pattern.is_empty() {
            return Err(MotifError::EmptyPattern);
        }

        let symbols: Vec<char> = pattern.chars().collect();
        let mut classes = Vec::new();
        let mut index = 0;

        while index < symbols.len() {
            match symbols[index] {
                '[' => {
                    let open = index;
                    let close = symbols[index..]
                        .iter()
                        .position(|&c| c == ']')
                        .map(|offset| index + offset)
                        .ok_or_else(|| MotifError::UnbalancedBracket {
                            pattern: pattern.to_string(),
                            position: open,
                        })?;

                    let mut body = &symbols[open + 1..close];
                    let negated = body.first() == Some(&'^');
                    if negated {
                        body = &body[1..];
                    }
                    if body.is_empty() {
                        return Err(MotifError::EmptyClass {
                            pattern: pattern.to_string(),
                            position: open,
                        });
                    }
                    let mut residues = Vec::with_capacity(body.len());
                    for (offset, &symbol) in body.iter().enumerate() {
                        check_symbol(pattern, symbol, open + 1 + usize::from(negated) + offset)?;
                        residues.push(symbol);
                    }
                    classes.push(ResidueClass { residues, negated });
                    index = close + 1;
                }
                ']' => {
                    return Err(MotifError::UnbalancedBracket {
                        pattern: pattern.to_string(),
                        position: index,
                    });
                }
                symbol => {
                    check_symbol(pattern, symbol, index)?;
                    classes.push(ResidueClass {
                        residues: vec![symbol],
                        negated: false,
                    });
                    index += 1;
                }
            }
        }

        Ok(Self {
            pattern: pattern.to_string(),
            classes,
        })
    }

    /// The source pattern this motif was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Number of residues one match covers.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Scans a peptide sequence, reporting every match start offset in
    /// ascending order. The scan advances one residue at a time, so
    /// overlapping matches are all reported. No match yields an empty vec.
    pub fn scan(&self, sequence: &str) -> Vec<MotifSite> {
        let residues: Vec<char> = sequence.chars().collect();
        if residues.len() < self.len() {
            return Vec::new();
        }

        let mut sites = Vec::new();
        for start in 0..=residues.len() - self.len() {
            let matched = self
                .classes
                .iter()
                .zip(&residues[start..])
                .all(|(class, &residue)| class.matches(residue));
            if matched {
                sites.push(MotifSite::new(start));
            }
        }
        sites
    }
}

fn check_symbol(pattern: &str, symbol: char, position: usize) -> Result<(), MotifError> {
    if is_residue(symbol) {
        Ok(())
    } else {
        Err(MotifError::InvalidSymbol {
            pattern: pattern.to_string(),
            symbol,
            position,
        })
    }
}
