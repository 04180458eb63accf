use crate::core::chem::mass::{MassError, MassModel};
use crate::core::models::glycan::GlycanEntry;
use crate::core::models::glycopeptide::GlycopeptideRecord;
use crate::core::models::peptide::{MotifSite, Peptide};

/// One digested peptide together with its motif match sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedPeptide {
    pub peptide: Peptide,
    pub sites: Vec<MotifSite>,
}

/// All scanned peptides of one source protein, in digestion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedProtein {
    pub identifier: String,
    pub peptides: Vec<ScannedPeptide>,
}

/// Enumerates every (peptide, site, glycan) candidate record.
///
/// Peptides with no motif sites contribute nothing. Output ordering is the
/// primary determinism guarantee and follows directly from the iteration:
/// protein source order, then peptide digestion order, then site offset
/// ascending, then glycan row order.
pub fn combine(
    proteins: &[ScannedProtein],
    glycans: &[GlycanEntry],
    model: &dyn MassModel,
) -> Result<Vec<GlycopeptideRecord>, MassError> {
    let mut records = Vec::new();
    for protein in proteins {
        for scanned in &protein.peptides {
            if scanned.sites.is_empty() {
                continue;
            }
            for site in &scanned.sites {
                for glycan in glycans {
                    let combined_mass =
                        model.combined_mass(&scanned.peptide.sequence, glycan)?;
                    records.push(GlycopeptideRecord {
                        protein_identifier: protein.identifier.clone(),
                        peptide_sequence: scanned.peptide.sequence.clone(),
                        missed_cleavages: scanned.peptide.missed_cleavages,
                        site_offset: site.peptide_offset,
                        glycan_name: glycan.name.clone(),
                        combined_mass,
                    });
                }
            }
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chem::mass::MonoisotopicModel;

    fn scanned(sequence: &str, sites: &[usize]) -> ScannedPeptide {
        ScannedPeptide {
            peptide: Peptide::new(sequence, 0, 0),
            sites: sites.iter().map(|&o| MotifSite::new(o)).collect(),
        }
    }

    fn glycans() -> Vec<GlycanEntry> {
        vec![
            GlycanEntry::new("Hex", 162.0528),
            GlycanEntry::new("HexNAc", 203.0794),
        ]
    }

    #[test]
    fn row_count_is_sites_times_glycans_over_peptides_with_sites() {
        let proteins = vec![ScannedProtein {
            identifier: "A".to_string(),
            peptides: vec![
                scanned("NVSK", &[0]),
                scanned("GGGR", &[]),
                scanned("NVSNWTK", &[0, 3]),
            ],
        }];
        let records = combine(&proteins, &glycans(), &MonoisotopicModel).unwrap();
        // (1 + 2 sites) * 2 glycans; the siteless peptide contributes nothing.
        assert_eq!(records.len(), 6);
        assert!(records.iter().all(|r| r.peptide_sequence != "GGGR"));
    }

    #[test]
    fn zero_glycans_yield_no_records() {
        let proteins = vec![ScannedProtein {
            identifier: "A".to_string(),
            peptides: vec![scanned("NVSK", &[0])],
        }];
        let records = combine(&proteins, &[], &MonoisotopicModel).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn ordering_is_protein_peptide_site_then_glycan() {
        let proteins = vec![
            ScannedProtein {
                identifier: "B-first-in-file".to_string(),
                peptides: vec![scanned("NVSNWTK", &[0, 3])],
            },
            ScannedProtein {
                identifier: "A-second-in-file".to_string(),
                peptides: vec![scanned("NVSK", &[0])],
            },
        ];
        let records = combine(&proteins, &glycans(), &MonoisotopicModel).unwrap();
        let keys: Vec<(&str, usize, &str)> = records
            .iter()
            .map(|r| (r.protein_identifier.as_str(), r.site_offset, r.glycan_name.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("B-first-in-file", 0, "Hex"),
                ("B-first-in-file", 0, "HexNAc"),
                ("B-first-in-file", 3, "Hex"),
                ("B-first-in-file", 3, "HexNAc"),
                ("A-second-in-file", 0, "Hex"),
                ("A-second-in-file", 0, "HexNAc"),
            ]
        );
    }

    #[test]
    fn combined_mass_uses_the_supplied_model() {
        struct FixedModel;
        impl MassModel for FixedModel {
            fn peptide_mass(&self, _sequence: &str) -> Result<f64, MassError> {
                Ok(100.0)
            }
        }

        let proteins = vec![ScannedProtein {
            identifier: "A".to_string(),
            peptides: vec![scanned("NVSK", &[0])],
        }];
        let records = combine(&proteins, &glycans(), &FixedModel).unwrap();
        assert!((records[0].combined_mass - 262.0528).abs() < 1e-9);
    }

    #[test]
    fn mass_errors_abort_with_no_partial_output() {
        let proteins = vec![ScannedProtein {
            identifier: "A".to_string(),
            peptides: vec![scanned("NVSK", &[0])],
        }];
        struct FailingModel;
        impl MassModel for FailingModel {
            fn peptide_mass(&self, sequence: &str) -> Result<f64, MassError> {
                Err(MassError::UnknownResidue {
                    symbol: '?',
                    peptide: sequence.to_string(),
                })
            }
        }
        assert!(combine(&proteins, &glycans(), &FailingModel).is_err());
    }
}
