use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use glycand::core::chem::mass::{CondensationModel, MassModel, MonoisotopicModel};
use glycand::core::chem::motifs::resolve_motif;
use glycand::core::io::glycan_table::TableColumns;
use glycand::engine::config::GenerationConfigBuilder;
use glycand::workflows::generate;
use tracing::info;

pub fn run(args: &GenerateArgs) -> Result<()> {
    let fasta = read_input(&args.fasta)?;
    let glycan_csv = read_input(&args.glycans)?;

    let mut builder = GenerationConfigBuilder::new()
        .digestion(args.digestion.as_str())
        .motif(resolve_motif(&args.motif))
        .missed_cleavages(args.missed_cleavages)
        .min_length(args.min_length)
        .semi_enzymatic(args.semi_enzymatic)
        .per_protein(args.per_protein)
        .glycan_columns(TableColumns {
            name: args.name_column.clone(),
            mass: args.mass_column.clone(),
        });
    if let Some(max_length) = args.max_length {
        builder = builder.max_length(max_length);
    }
    let config = builder.build().map_err(glycand::engine::error::GenerateError::from)?;

    let model: &dyn MassModel = if args.condensation {
        &CondensationModel
    } else {
        &MonoisotopicModel
    };

    let files = generate::run(&fasta, &glycan_csv, &config, model)?;

    std::fs::create_dir_all(&args.output_dir).map_err(|source| CliError::WriteOutput {
        path: args.output_dir.clone(),
        source,
    })?;
    for file in &files {
        let path = args.output_dir.join(&file.filename);
        std::fs::write(&path, &file.contents).map_err(|source| CliError::WriteOutput {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "Report written.");
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn read_input(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}
