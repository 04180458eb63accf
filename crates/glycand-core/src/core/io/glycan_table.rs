use crate::core::models::glycan::GlycanEntry;
use std::path::Path;
use thiserror::Error;

/// Default header names for the glycan CSV's two required columns.
pub const DEFAULT_NAME_COLUMN: &str = "Glycan";
pub const DEFAULT_MASS_COLUMN: &str = "Monoisotopic Mass";

#[derive(Debug, Error)]
pub enum TableError {
    #[error("The glycan table is missing the required column '{column}'")]
    MissingColumn { column: String },

    #[error("Invalid mass value '{value}' for glycan '{glycan}' on data row {row}")]
    InvalidMass {
        glycan: String,
        value: String,
        row: usize,
    },

    #[error("The glycan table has no data rows")]
    NoRows,

    #[error("Failed to read glycan CSV: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Which header names identify the glycan name and mass columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumns {
    pub name: String,
    pub mass: String,
}

impl Default for TableColumns {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME_COLUMN.to_string(),
            mass: DEFAULT_MASS_COLUMN.to_string(),
        }
    }
}

/// Parses glycan CSV text into entries, preserving row order.
///
/// Leading/trailing whitespace in headers and fields is trimmed; that is the
/// sole normalization performed. Duplicate names propagate as separate
/// entries. Masses must parse as finite, non-negative numbers.
pub fn parse_glycan_table(text: &str, columns: &TableColumns) -> Result<Vec<GlycanEntry>, TableError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let name_index = column_index(&headers, &columns.name)?;
    let mass_index = column_index(&headers, &columns.mass)?;

    let mut entries = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row = index + 1;
        let name = record.get(name_index).unwrap_or("").trim().to_string();
        let raw_mass = record.get(mass_index).unwrap_or("").trim();

        let mass: f64 = raw_mass.parse().map_err(|_| TableError::InvalidMass {
            glycan: name.clone(),
            value: raw_mass.to_string(),
            row,
        })?;
        if !mass.is_finite() || mass < 0.0 {
            return Err(TableError::InvalidMass {
                glycan: name,
                value: raw_mass.to_string(),
                row,
            });
        }

        entries.push(GlycanEntry::new(name, mass));
    }

    if entries.is_empty() {
        return Err(TableError::NoRows);
    }
    Ok(entries)
}

fn column_index(headers: &[String], column: &str) -> Result<usize, TableError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| TableError::MissingColumn {
            column: column.to_string(),
        })
}

/// Reads and parses a glycan CSV file from disk.
pub fn load_glycan_table(
    path: &Path,
    columns: &TableColumns,
) -> Result<Vec<GlycanEntry>, TableLoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| TableLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    Ok(parse_glycan_table(&text, columns)?)
}
