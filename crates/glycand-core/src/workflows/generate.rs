use crate::core::chem::digestion::{DIGESTIONS, find_digestion};
use crate::core::chem::mass::{MassModel, MonoisotopicModel};
use crate::core::io::fasta::parse_fasta;
use crate::core::io::glycan_table::parse_glycan_table;
use crate::core::io::report::emit_csv;
use crate::core::models::glycopeptide::OutputFile;
use crate::engine::combine::{ScannedPeptide, ScannedProtein, combine};
use crate::engine::config::{ConfigError, GenerationConfig, GenerationConfigBuilder};
use crate::engine::digest::{DigestParams, digest};
use crate::engine::error::GenerateError;
use crate::engine::motif::Motif;
use tracing::{debug, info, instrument};

/// Runs the full pipeline with default options and the default mass model.
///
/// This is the stable external contract: FASTA text, a digestion rule name,
/// a motif pattern, glycan CSV text, and a missed-cleavage budget in; an
/// ordered set of named CSV payloads out.
pub fn generate_glycopeptides(
    fasta: &str,
    digestion_rule_name: &str,
    motif_pattern: &str,
    glycan_csv: &str,
    missed_cleavages: usize,
) -> Result<Vec<OutputFile>, GenerateError> {
    let config = GenerationConfigBuilder::new()
        .digestion(digestion_rule_name)
        .motif(motif_pattern)
        .missed_cleavages(missed_cleavages)
        .build()?;
    run(fasta, glycan_csv, &config, &MonoisotopicModel)
}

/// Runs the full pipeline with an explicit configuration and mass model.
#[instrument(skip_all, name = "generation_workflow")]
pub fn run(
    fasta: &str,
    glycan_csv: &str,
    config: &GenerationConfig,
    model: &dyn MassModel,
) -> Result<Vec<OutputFile>, GenerateError> {
    // === Phase 0: Resolve and validate inputs ===
    let rule = find_digestion(&config.digestion).ok_or_else(|| ConfigError::UnknownDigestion {
        name: config.digestion.clone(),
        available: DIGESTIONS
            .iter()
            .map(|r| r.name)
            .collect::<Vec<_>>()
            .join(", "),
    })?;
    let motif = Motif::compile(&config.motif)?;
    let proteins = parse_fasta(fasta)?;
    let glycans = parse_glycan_table(glycan_csv, &config.glycan_columns)?;
    info!(
        proteins = proteins.len(),
        glycans = glycans.len(),
        rule = rule.name,
        motif = motif.pattern(),
        "Inputs parsed."
    );

    // === Phase 1: Digest and scan each protein ===
    let params = DigestParams {
        missed_cleavages: config.missed_cleavages,
        min_length: config.min_length,
        max_length: config.max_length,
        semi_enzymatic: config.semi_enzymatic,
    };
    let scanned: Vec<ScannedProtein> = proteins
        .iter()
        .map(|protein| {
            let peptides: Vec<ScannedPeptide> = digest(protein, rule, params)
                .map(|peptide| {
                    let sites = motif.scan(&peptide.sequence);
                    ScannedPeptide { peptide, sites }
                })
                .collect();
            debug!(
                protein = protein.identifier.as_str(),
                peptides = peptides.len(),
                "Protein digested and scanned."
            );
            ScannedProtein {
                identifier: protein.identifier.clone(),
                peptides,
            }
        })
        .collect();

    // === Phase 2: Combine with the glycan table ===
    let records = combine(&scanned, &glycans, model)?;
    info!(records = records.len(), "Candidate records combined.");

    // === Phase 3: Emit the report set ===
    let files = emit_csv(&records, config.per_protein)?;
    info!(files = files.len(), "Report emission complete.");
    Ok(files)
}
