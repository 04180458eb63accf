use crate::core::models::glycopeptide::{GlycopeptideRecord, OutputFile};
use serde::Serialize;
use thiserror::Error;

/// Decimal places used when rendering masses. Fixed so output stays diffable
/// across runs and platforms.
pub const MASS_DECIMALS: usize = 4;

/// Filename used when all records are emitted as one combined file.
pub const COMBINED_FILENAME: &str = "glycopeptides.csv";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to serialize CSV output: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to write CSV output: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Protein")]
    protein: &'a str,
    #[serde(rename = "Peptide")]
    peptide: &'a str,
    #[serde(rename = "MissedCleavages")]
    missed_cleavages: usize,
    #[serde(rename = "SiteOffset")]
    site_offset: usize,
    #[serde(rename = "Glycan")]
    glycan: &'a str,
    #[serde(rename = "Mass")]
    mass: String,
}

/// Serializes records into one or more named CSV payloads.
///
/// With `per_protein` set, records are partitioned into one file per protein
/// in source order (filenames derived from sanitized identifiers, suffixed
/// when two proteins share a name); otherwise a single combined
/// [`COMBINED_FILENAME`] is produced. Record order within each file is
/// preserved exactly as given.
///
/// An empty record set behaves differently per mode: combined mode still
/// produces one header-only file, while per-protein mode produces no files,
/// since there are no proteins to name them after.
pub fn emit_csv(
    records: &[GlycopeptideRecord],
    per_protein: bool,
) -> Result<Vec<OutputFile>, ReportError> {
    if !per_protein {
        let contents = write_rows(records)?;
        return Ok(vec![OutputFile::new(COMBINED_FILENAME, contents)]);
    }

    // Records arrive grouped by protein in source order, so consecutive runs
    // of the same identifier form one file each.
    let mut files = Vec::new();
    let mut used_names: Vec<String> = Vec::new();
    let mut start = 0;
    while start < records.len() {
        let identifier = &records[start].protein_identifier;
        let mut end = start;
        while end < records.len() && records[end].protein_identifier == *identifier {
            end += 1;
        }
        let contents = write_rows(&records[start..end])?;
        let filename = unique_filename(identifier, &mut used_names);
        files.push(OutputFile::new(filename, contents));
        start = end;
    }
    Ok(files)
}

fn write_rows(records: &[GlycopeptideRecord]) -> Result<String, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    // `serialize` only emits the header once a row is written, but an empty
    // result must still produce a header-only file.
    if records.is_empty() {
        writer.write_record([
            "Protein",
            "Peptide",
            "MissedCleavages",
            "SiteOffset",
            "Glycan",
            "Mass",
        ])?;
    }
    for record in records {
        writer.serialize(CsvRow {
            protein: &record.protein_identifier,
            peptide: &record.peptide_sequence,
            missed_cleavages: record.missed_cleavages,
            site_offset: record.site_offset,
            glycan: &record.glycan_name,
            mass: format!("{:.*}", MASS_DECIMALS, record.combined_mass),
        })?;
    }
    let inner = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(inner)?)
}

fn unique_filename(identifier: &str, used_names: &mut Vec<String>) -> String {
    let stem = sanitize(identifier);
    let mut candidate = stem.clone();
    let mut counter = 2;
    while used_names.contains(&candidate) {
        candidate = format!("{stem}_{counter}");
        counter += 1;
    }
    used_names.push(candidate.clone());
    format!("{candidate}.csv")
}

fn sanitize(identifier: &str) -> String {
    let cleaned: String = identifier
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '.' { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "protein".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(protein: &str, peptide: &str, glycan: &str, mass: f64) -> GlycopeptideRecord {
        GlycopeptideRecord {
            protein_identifier: protein.to_string(),
            peptide_sequence: peptide.to_string(),
            missed_cleavages: 0,
            site_offset: 0,
            glycan_name: glycan.to_string(),
            combined_mass: mass,
        }
    }

    #[test]
    fn combined_output_has_fixed_header_and_precision() {
        let records = vec![record("A", "NVSK", "Hex", 608.30169)];
        let files = emit_csv(&records, false).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, "glycopeptides.csv");
        assert_eq!(
            files[0].contents,
            "Protein,Peptide,MissedCleavages,SiteOffset,Glycan,Mass\nA,NVSK,0,0,Hex,608.3017\n"
        );
    }

    #[test]
    fn empty_record_set_emits_a_header_only_combined_file() {
        let files = emit_csv(&[], false).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(
            files[0].contents,
            "Protein,Peptide,MissedCleavages,SiteOffset,Glycan,Mass\n"
        );
    }

    #[test]
    fn empty_record_set_emits_no_per_protein_files() {
        let files = emit_csv(&[], true).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn fields_containing_delimiters_are_quoted() {
        let records = vec![record("sp|P01308, human", "NVSK", "Hex,2", 608.3)];
        let files = emit_csv(&records, false).unwrap();
        assert!(files[0].contents.contains("\"sp|P01308, human\""));
        assert!(files[0].contents.contains("\"Hex,2\""));
    }

    #[test]
    fn fields_containing_quotes_or_newlines_are_quoted() {
        let records = vec![record("A \"alpha\"", "NVSK", "Hex\nNAc", 608.3)];
        let files = emit_csv(&records, false).unwrap();
        // Embedded quotes are doubled, embedded newlines force quoting.
        assert!(files[0].contents.contains("\"A \"\"alpha\"\"\""));
        assert!(files[0].contents.contains("\"Hex\nNAc\""));

        let mut reader = csv::Reader::from_reader(files[0].contents.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "A \"alpha\"");
        assert_eq!(&rows[0][4], "Hex\nNAc");
    }

    #[test]
    fn per_protein_mode_partitions_in_source_order() {
        let records = vec![
            record("A", "NVSK", "Hex", 1.0),
            record("A", "NVSK", "HexNAc", 2.0),
            record("B", "NWTR", "Hex", 3.0),
        ];
        let files = emit_csv(&records, true).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].filename, "A.csv");
        assert_eq!(files[1].filename, "B.csv");
        assert_eq!(files[0].contents.lines().count(), 3);
        assert_eq!(files[1].contents.lines().count(), 2);
    }

    #[test]
    fn duplicate_identifiers_get_distinct_filenames() {
        // Two distinct proteins share the display name "A"; the one between
        // them forces separate partitions.
        let records = vec![
            record("A", "NVSK", "Hex", 1.0),
            record("Other", "NVSK", "Hex", 9.0),
            record("A", "NWTR", "Hex", 2.0),
        ];
        let files = emit_csv(&records, true).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["A.csv", "Other.csv", "A_2.csv"]);
    }

    #[test]
    fn identifiers_are_sanitized_for_filenames() {
        let records = vec![record("sp|P01308/2 insulin", "NVSK", "Hex", 1.0)];
        let files = emit_csv(&records, true).unwrap();
        assert_eq!(files[0].filename, "sp_P01308_2_insulin.csv");
    }

    #[test]
    fn round_trips_through_a_csv_reader() {
        let records = vec![
            record("A", "NVSK", "Hex", 608.30169),
            record("A", "NWTR", "HexNAc", 777.123456),
        ];
        let files = emit_csv(&records, false).unwrap();

        let mut reader = csv::Reader::from_reader(files[0].contents.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "A");
        assert_eq!(&rows[0][4], "Hex");
        assert_eq!(&rows[0][5], "608.3017");
        assert_eq!(&rows[1][5], "777.1235");
    }
}
