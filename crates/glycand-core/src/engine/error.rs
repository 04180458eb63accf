use crate::core::chem::mass::MassError;
use crate::core::io::fasta::ParseError;
use crate::core::io::glycan_table::TableError;
use crate::core::io::report::ReportError;
use crate::engine::config::ConfigError;
use crate::engine::motif::MotifError;
use thiserror::Error;

/// Umbrella error for a full generation run.
///
/// Every failure surfaces synchronously from the workflow entry point with no
/// partial output; nothing is retried or downgraded internally.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("FASTA parsing failed: {source}")]
    Fasta {
        #[from]
        source: ParseError,
    },

    #[error("Invalid glycosylation motif: {source}")]
    Motif {
        #[from]
        source: MotifError,
    },

    #[error("Malformed glycan table: {source}")]
    Table {
        #[from]
        source: TableError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Mass computation failed: {source}")]
    Mass {
        #[from]
        source: MassError,
    },

    #[error("Report emission failed: {source}")]
    Report {
        #[from]
        source: ReportError,
    },
}
