use crate::core::chem::residues::is_residue;
use crate::core::models::protein::ProteinRecord;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("FASTA input is empty")]
    Empty,

    #[error("Sequence data on line {line} appears before any '>' header")]
    MissingHeader { line: usize },

    #[error(
        "Unrecognized residue symbol '{symbol}' on line {line} in record '{identifier}'"
    )]
    InvalidResidue {
        identifier: String,
        symbol: char,
        line: usize,
    },

    #[error("Record '{identifier}' has no sequence lines")]
    EmptySequence { identifier: String },
}

#[derive(Debug, Error)]
pub enum FastaLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Parses FASTA text into protein records, preserving file order.
///
/// Identifiers are the full header line after `>`, verbatim. Sequence lines
/// may span multiple lines and are concatenated; blank lines and trailing
/// carriage returns are tolerated. Unknown residue symbols are rejected
/// outright rather than dropped, since downstream offset arithmetic assumes a
/// fixed alphabet.
pub fn parse_fasta(text: &str) -> Result<Vec<ProteinRecord>, ParseError> {
    let mut records = Vec::new();
    let mut current: Option<(String, String)> = None;

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        if let Some(identifier) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                records.push(finish_record(record)?);
            }
            current = Some((identifier.to_string(), String::new()));
        } else {
            let Some((identifier, sequence)) = current.as_mut() else {
                return Err(ParseError::MissingHeader { line: line_number });
            };
            for symbol in line.trim().chars() {
                if !is_residue(symbol) {
                    return Err(ParseError::InvalidResidue {
                        identifier: identifier.clone(),
                        symbol,
                        line: line_number,
                    });
                }
                sequence.push(symbol);
            }
        }
    }

    match current {
        Some(record) => records.push(finish_record(record)?),
        None => return Err(ParseError::Empty),
    }

    Ok(records)
}

fn finish_record((identifier, sequence): (String, String)) -> Result<ProteinRecord, ParseError> {
    if sequence.is_empty() {
        return Err(ParseError::EmptySequence { identifier });
    }
    Ok(ProteinRecord::new(identifier, sequence))
}

/// Reads and parses a FASTA file from disk.
pub fn load_fasta(path: &Path) -> Result<Vec<ProteinRecord>, FastaLoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| FastaLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    Ok(parse_fasta(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn parses_a_single_record() {
        let records = parse_fasta(">A\nPEPNTSIDE").unwrap();
        assert_eq!(records, vec![ProteinRecord::new("A", "PEPNTSIDE")]);
    }

    #[test]
    fn parses_multiple_records_in_file_order() {
        let text = ">first\nMKT\nLLW\n>second protein with spaces\nGGG\n";
        let records = parse_fasta(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].identifier, "first");
        assert_eq!(records[0].sequence, "MKTLLW");
        assert_eq!(records[1].identifier, "second protein with spaces");
        assert_eq!(records[1].sequence, "GGG");
    }

    #[test]
    fn reparsing_identical_text_is_idempotent() {
        let text = ">A\nMKT\n>B\nWLR\n";
        assert_eq!(parse_fasta(text).unwrap(), parse_fasta(text).unwrap());
    }

    #[test]
    fn tolerates_crlf_and_blank_lines() {
        let records = parse_fasta(">A\r\nMKT\r\n\r\nLLW\r\n").unwrap();
        assert_eq!(records[0].sequence, "MKTLLW");
    }

    #[test]
    fn duplicate_identifiers_are_preserved_not_merged() {
        let records = parse_fasta(">A\nMKT\n>A\nGGG\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].identifier, records[1].identifier);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(parse_fasta(""), Err(ParseError::Empty));
        assert_eq!(parse_fasta("\n  \n"), Err(ParseError::Empty));
    }

    #[test]
    fn sequence_before_header_is_rejected() {
        assert_eq!(
            parse_fasta("MKT\n>A\nGGG"),
            Err(ParseError::MissingHeader { line: 1 })
        );
    }

    #[test]
    fn unknown_residue_symbols_are_rejected_not_dropped() {
        let err = parse_fasta(">A\nMKXT").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidResidue {
                identifier: "A".to_string(),
                symbol: 'X',
                line: 2,
            }
        );
    }

    #[test]
    fn header_without_sequence_is_rejected() {
        assert_eq!(
            parse_fasta(">A\n>B\nGGG"),
            Err(ParseError::EmptySequence {
                identifier: "A".to_string()
            })
        );
        assert_eq!(
            parse_fasta(">A\nMKT\n>B\n"),
            Err(ParseError::EmptySequence {
                identifier: "B".to_string()
            })
        );
    }

    #[test]
    fn load_fasta_reads_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("proteins.fasta");
        let mut file = File::create(&path).unwrap();
        writeln!(file, ">A\nMKT").unwrap();

        let records = load_fasta(&path).unwrap();
        assert_eq!(records, vec![ProteinRecord::new("A", "MKT")]);
    }

    #[test]
    fn load_fasta_reports_missing_files_with_path() {
        let err = load_fasta(Path::new("/nonexistent/proteins.fasta")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/proteins.fasta"));
    }
}
