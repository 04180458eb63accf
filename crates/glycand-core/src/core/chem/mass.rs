use super::residues::{WATER_MASS, residue_mass};
use crate::core::models::glycan::GlycanEntry;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MassError {
    #[error("No monoisotopic mass is known for residue '{symbol}' in peptide '{peptide}'")]
    UnknownResidue { symbol: char, peptide: String },
}

/// Capability interface for computing glycopeptide masses.
///
/// The combiner calls through this trait rather than a hardcoded formula so
/// alternative residue-mass tables or modification rules can be substituted
/// without touching its ordering or iteration logic.
pub trait MassModel {
    /// Monoisotopic mass of a bare peptide, in Daltons.
    fn peptide_mass(&self, sequence: &str) -> Result<f64, MassError>;

    /// Combined mass of a peptide with one attached glycan.
    fn combined_mass(&self, sequence: &str, glycan: &GlycanEntry) -> Result<f64, MassError> {
        Ok(self.peptide_mass(sequence)? + glycan.monoisotopic_mass)
    }
}

/// The default model: residue masses plus one water for the peptide termini,
/// plus the glycan's tabulated mass.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonoisotopicModel;

impl MassModel for MonoisotopicModel {
    fn peptide_mass(&self, sequence: &str) -> Result<f64, MassError> {
        let mut total = WATER_MASS;
        for symbol in sequence.chars() {
            total += residue_mass(symbol).ok_or_else(|| MassError::UnknownResidue {
                symbol,
                peptide: sequence.to_string(),
            })?;
        }
        Ok(total)
    }
}

/// A model that treats glycan attachment as a condensation reaction: forming
/// the glycosidic bond releases one water, so the combined mass is reduced by
/// [`WATER_MASS`] relative to [`MonoisotopicModel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CondensationModel;

impl MassModel for CondensationModel {
    fn peptide_mass(&self, sequence: &str) -> Result<f64, MassError> {
        MonoisotopicModel.peptide_mass(sequence)
    }

    fn combined_mass(&self, sequence: &str, glycan: &GlycanEntry) -> Result<f64, MassError> {
        Ok(self.peptide_mass(sequence)? + glycan.monoisotopic_mass - WATER_MASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glycine_peptide_mass_is_residues_plus_water() {
        let mass = MonoisotopicModel.peptide_mass("GG").unwrap();
        assert!((mass - (2.0 * 57.02146 + WATER_MASS)).abs() < 1e-9);
    }

    #[test]
    fn peptide_mass_matches_reference_value() {
        // PEPNTSIDE, summed from the residue table by hand.
        let mass = MonoisotopicModel.peptide_mass("PEPNTSIDE").unwrap();
        assert!((mass - 1000.434905).abs() < 1e-6);
    }

    #[test]
    fn unknown_residue_is_reported_with_context() {
        let err = MonoisotopicModel.peptide_mass("PEBK").unwrap_err();
        assert_eq!(
            err,
            MassError::UnknownResidue {
                symbol: 'B',
                peptide: "PEBK".to_string(),
            }
        );
    }

    #[test]
    fn combined_mass_adds_the_glycan_mass() {
        let hex = GlycanEntry::new("Hex", 162.0528);
        let combined = MonoisotopicModel.combined_mass("PEPNTSIDE", &hex).unwrap();
        assert!((combined - 1162.487705).abs() < 1e-6);
    }

    #[test]
    fn condensation_model_releases_one_water() {
        let hex = GlycanEntry::new("Hex", 162.0528);
        let plain = MonoisotopicModel.combined_mass("PEPNTSIDE", &hex).unwrap();
        let bound = CondensationModel.combined_mass("PEPNTSIDE", &hex).unwrap();
        assert!((plain - bound - WATER_MASS).abs() < 1e-9);
    }
}
