/// A single row of the glycan mass table.
///
/// Names are the table's join key and need not be unique; duplicate rows
/// propagate into the output rather than being collapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct GlycanEntry {
    pub name: String,
    /// Monoisotopic mass in Daltons; guaranteed finite and non-negative by
    /// the table parser.
    pub monoisotopic_mass: f64,
}

impl GlycanEntry {
    pub fn new(name: impl Into<String>, monoisotopic_mass: f64) -> Self {
        Self {
            name: name.into(),
            monoisotopic_mass,
        }
    }
}
