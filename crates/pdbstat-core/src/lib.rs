//! # pdbstat-core
//!
//! A library for reading the coordinate section of Protein Data Bank files and
//! computing descriptive statistics over it.
//!
//! __pdbstat-core__ provides functionality for:
//! * Extracting the fixed-column fields of `ATOM` / `HETATM` records
//! * Streaming records out of a file, with waters dropped from the HETATM stream
//! * Residue, element and heteroatom composition
//! * Hydrophobicity and charge classification of the residue composition
//! * The most distant pair of alpha-carbons and the radius of gyration
//!
//! The quickest way in is [`RecordSet::from_path`] followed by
//! [`StructureSummary::from_records`]. Every computation is also available as a
//! free function over a slice of [`ParsedAtom`].
//!
mod classification;
mod composition;
mod error;
mod geometry;
mod info;
mod record;
mod spatial;
mod summary;

pub use self::classification::{
    charge_composition, hydrophobicity_composition, hydrophobicity_composition_with,
    ChargeCounts, ChargeShare, HydrophobicityCounts, HydrophobicityShare,
};
pub use self::composition::{
    element_composition, element_percentages, hetero_residue_composition, residue_composition,
    residue_percentages, Composition, Percentages,
};
pub use self::error::{Error, Result};
pub use self::geometry::{center_of_mass, euclidean_distance, radius_of_gyration};
pub use self::info::constants::{atomic_mass, charge_class, kyte_doolittle, ChargeClass};
pub use self::record::{
    atom_lines, extract_fields, hetatm_lines, read_atoms, read_hetero_atoms, ParsedAtom,
    PdbField, Reader, RecordFilter, RecordSet, RecordType, Records, ResidueId,
};
pub use self::spatial::{alpha_carbons, most_distant_residues, DistantPair};
pub use self::summary::StructureSummary;
