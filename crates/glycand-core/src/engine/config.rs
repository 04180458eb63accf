use crate::core::io::glycan_table::TableColumns;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Unknown digestion rule '{name}'; available rules: {available}")]
    UnknownDigestion { name: String, available: String },

    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("min_length ({min}) exceeds max_length ({max})")]
    InvertedLengthBounds { min: usize, max: usize },
}

/// The validated parameter set for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Name of a rule in the digestion registry.
    pub digestion: String,
    /// Motif pattern string (already registry-resolved by the caller).
    pub motif: String,
    pub missed_cleavages: usize,
    pub min_length: usize,
    pub max_length: Option<usize>,
    /// Also emit semi-enzymatic truncations of each peptide.
    pub semi_enzymatic: bool,
    /// Emit one file per protein instead of a single combined file.
    pub per_protein: bool,
    pub glycan_columns: TableColumns,
}

#[derive(Debug, Default)]
pub struct GenerationConfigBuilder {
    digestion: Option<String>,
    motif: Option<String>,
    missed_cleavages: usize,
    min_length: usize,
    max_length: Option<usize>,
    semi_enzymatic: bool,
    per_protein: bool,
    glycan_columns: Option<TableColumns>,
}

impl GenerationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn digestion(mut self, name: impl Into<String>) -> Self {
        self.digestion = Some(name.into());
        self
    }

    pub fn motif(mut self, pattern: impl Into<String>) -> Self {
        self.motif = Some(pattern.into());
        self
    }

    pub fn missed_cleavages(mut self, count: usize) -> Self {
        self.missed_cleavages = count;
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = length;
        self
    }

    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    pub fn semi_enzymatic(mut self, semi_enzymatic: bool) -> Self {
        self.semi_enzymatic = semi_enzymatic;
        self
    }

    pub fn per_protein(mut self, per_protein: bool) -> Self {
        self.per_protein = per_protein;
        self
    }

    pub fn glycan_columns(mut self, columns: TableColumns) -> Self {
        self.glycan_columns = Some(columns);
        self
    }

    pub fn build(self) -> Result<GenerationConfig, ConfigError> {
        let min_length = self.min_length.max(1);
        if let Some(max) = self.max_length {
            if min_length > max {
                return Err(ConfigError::InvertedLengthBounds {
                    min: min_length,
                    max,
                });
            }
        }
        Ok(GenerationConfig {
            digestion: self
                .digestion
                .ok_or(ConfigError::MissingParameter("digestion"))?,
            motif: self.motif.ok_or(ConfigError::MissingParameter("motif"))?,
            missed_cleavages: self.missed_cleavages,
            min_length,
            max_length: self.max_length,
            semi_enzymatic: self.semi_enzymatic,
            per_protein: self.per_protein,
            glycan_columns: self.glycan_columns.unwrap_or_default(),
        })
    }
}
