use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "glycand",
    version,
    about = "Glycand - enumerate candidate glycopeptides from protein sequences by enzymatic digestion, motif scanning, and glycan mass combination.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate candidate glycopeptide CSV reports from a FASTA file and a glycan mass table.
    Generate(GenerateArgs),
    /// List the built-in digestion rules.
    Digestions,
    /// List the built-in glycosylation motifs.
    Motifs,
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the input FASTA file of protein sequences.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub fasta: PathBuf,

    /// Path to the glycan mass table CSV.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub glycans: PathBuf,

    /// Directory the output CSV files are written into.
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Digestion rule name (see `glycand digestions`).
    #[arg(short, long, default_value = "trypsin", value_name = "NAME")]
    pub digestion: String,

    /// Glycosylation motif: a registry name (see `glycand motifs`) or a raw
    /// pattern such as 'N[^P][TS]'.
    #[arg(short, long, default_value = "N", value_name = "NAME_OR_PATTERN")]
    pub motif: String,

    /// Maximum number of missed cleavages per peptide.
    #[arg(short = 'c', long, default_value_t = 0, value_name = "INT")]
    pub missed_cleavages: usize,

    /// Minimum peptide length to keep after digestion.
    #[arg(long, default_value_t = 1, value_name = "INT")]
    pub min_length: usize,

    /// Maximum peptide length to keep after digestion.
    #[arg(long, value_name = "INT")]
    pub max_length: Option<usize>,

    /// Also emit semi-enzymatic peptides (truncations keeping one enzymatic
    /// terminus).
    #[arg(long)]
    pub semi_enzymatic: bool,

    /// Write one CSV file per protein instead of a single combined file.
    #[arg(long)]
    pub per_protein: bool,

    /// Treat glycan attachment as a condensation reaction (subtract one
    /// water mass per attachment).
    #[arg(long)]
    pub condensation: bool,

    /// Header name of the glycan name column in the mass table.
    #[arg(long, default_value = "Glycan", value_name = "NAME")]
    pub name_column: String,

    /// Header name of the glycan mass column in the mass table.
    #[arg(long, default_value = "Monoisotopic Mass", value_name = "NAME")]
    pub mass_column: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_defaults_match_the_documented_contract() {
        let cli = Cli::parse_from([
            "glycand", "generate", "--fasta", "p.fasta", "--glycans", "g.csv",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate subcommand");
        };
        assert_eq!(args.digestion, "trypsin");
        assert_eq!(args.motif, "N");
        assert_eq!(args.missed_cleavages, 0);
        assert_eq!(args.min_length, 1);
        assert_eq!(args.max_length, None);
        assert!(!args.semi_enzymatic);
        assert!(!args.per_protein);
        assert!(!args.condensation);
    }

    #[test]
    fn negative_missed_cleavages_are_rejected_at_the_boundary() {
        let result = Cli::try_parse_from([
            "glycand", "generate", "--fasta", "p.fasta", "--glycans", "g.csv",
            "--missed-cleavages", "-1",
        ]);
        assert!(result.is_err());
    }
}
