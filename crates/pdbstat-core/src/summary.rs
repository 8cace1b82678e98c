use crate::classification::{
    charge_composition, hydrophobicity_composition, ChargeCounts, ChargeShare,
    HydrophobicityCounts, HydrophobicityShare,
};
use crate::composition::{
    element_composition, hetero_residue_composition, residue_composition, Composition,
    Percentages,
};
use crate::error::Result;
use crate::geometry::radius_of_gyration;
use crate::record::RecordSet;
use crate::spatial::{most_distant_residues, DistantPair};
use log::warn;
use serde::Serialize;

/// Every statistic for one structure.
///
/// Sections that need more records than the file has (fewer than two
/// alpha-carbons, no ATOM records) are `None`. Any other failure, such as an
/// element without a mass, is returned as an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureSummary {
    pub atom_count: usize,
    pub hetero_atom_count: usize,
    pub residue_composition: Composition,
    pub residue_percentages: Percentages,
    pub element_composition: Composition,
    pub element_percentages: Percentages,
    pub hydrophobicity: HydrophobicityCounts,
    pub hydrophobicity_percentages: Option<HydrophobicityShare>,
    pub charge: ChargeCounts,
    pub charge_percentages: Option<ChargeShare>,
    pub hetero_residue_composition: Composition,
    pub most_distant_residues: Option<DistantPair>,
    pub radius_of_gyration: Option<f64>,
}

impl StructureSummary {
    pub fn from_records(records: &RecordSet) -> Result<Self> {
        let residues = residue_composition(&records.atoms);
        let elements = element_composition(&records.atoms);
        let hydrophobicity = hydrophobicity_composition(&residues);
        let charge = charge_composition(&residues);

        Ok(StructureSummary {
            atom_count: records.atoms.len(),
            hetero_atom_count: records.hetero_atoms.len(),
            residue_percentages: residues.percentages(),
            residue_composition: residues,
            element_percentages: elements.percentages(),
            element_composition: elements,
            hydrophobicity_percentages: hydrophobicity.percentages(),
            hydrophobicity,
            charge_percentages: charge.percentages(),
            charge,
            hetero_residue_composition: hetero_residue_composition(&records.hetero_atoms),
            most_distant_residues: optional(
                "most distant residues",
                most_distant_residues(&records.atoms),
            )?,
            radius_of_gyration: optional(
                "radius of gyration",
                radius_of_gyration(&records.atoms),
            )?,
        })
    }
}

fn optional<T>(section: &str, result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_insufficient_data() => {
            warn!("skipping {section}: {err}");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::record::ResidueId;
    use pdbstat_test_data::TestFile;

    #[test]
    fn test_met_gly_summary() {
        let (pdb_file, _temp) = TestFile::met_gly().create_temp().unwrap();
        let records = RecordSet::from_path(&pdb_file).unwrap();
        let summary = StructureSummary::from_records(&records).unwrap();

        assert_eq!(summary.atom_count, 10);
        assert_eq!(summary.hetero_atom_count, 3);
        assert_eq!(summary.residue_composition.get("MET"), Some(1));
        assert_eq!(summary.residue_percentages.get("GLY"), Some(50.0));
        assert_eq!(summary.element_composition.total(), 10);
        assert_eq!(summary.hydrophobicity.hydrophobic, 1);
        assert_eq!(summary.charge_percentages, None);
        assert_eq!(summary.hetero_residue_composition.len(), 2);

        let pair = summary.most_distant_residues.unwrap();
        assert_eq!(pair.second, ResidueId::new("A", 2, "GLY"));
        assert!((summary.radius_of_gyration.unwrap() - 2.32662).abs() < 1e-4);
    }

    #[test]
    fn test_empty_structure() {
        let summary = StructureSummary::from_records(&RecordSet::default()).unwrap();
        assert_eq!(summary.atom_count, 0);
        assert!(summary.residue_composition.is_empty());
        assert!(summary.residue_percentages.is_empty());
        assert_eq!(summary.hydrophobicity_percentages, None);
        assert_eq!(summary.most_distant_residues, None);
        assert_eq!(summary.radius_of_gyration, None);
    }

    #[test]
    fn test_unknown_element_propagates() {
        let records =
            RecordSet::from_reader(TestFile::short_lines().contents().as_bytes()).unwrap();
        let err = StructureSummary::from_records(&records).unwrap_err();
        assert!(matches!(err, Error::UnknownElement { .. }));
    }

    #[test]
    fn test_json_shape() {
        let records =
            RecordSet::from_reader(TestFile::two_chains().contents().as_bytes()).unwrap();
        let summary = StructureSummary::from_records(&records).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["atom_count"], 26);
        assert_eq!(json["hetero_residue_composition"]["HEM"], 1);
        assert_eq!(json["charge"]["negative"], 2);
        assert_eq!(json["most_distant_residues"]["first"]["res_name"], "ASP");
        assert!(json["radius_of_gyration"].as_f64().unwrap() > 6.0);
    }
}
