use crate::error::{Error, Result};
use crate::geometry::euclidean_distance;
use crate::record::{ParsedAtom, ResidueId};
use itertools::Itertools;
use serde::Serialize;
use std::collections::HashMap;

const ALPHA_CARBON: &str = "CA";

/// The two residues whose alpha-carbons are furthest apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistantPair {
    pub first: ResidueId,
    pub second: ResidueId,
    pub distance: f64,
}

/// One alpha-carbon position per residue, residues in the order they first
/// appear.
///
/// Residues without a `CA` atom are left out. When a residue has several `CA`
/// atoms (alternate locations) the last one read wins.
pub fn alpha_carbons(atoms: &[ParsedAtom]) -> Vec<(ResidueId, [f64; 3])> {
    let mut carbons: Vec<(ResidueId, [f64; 3])> = Vec::new();
    let mut index: HashMap<ResidueId, usize> = HashMap::new();
    for atom in atoms.iter().filter(|atom| atom.atom_name == ALPHA_CARBON) {
        let residue = atom.residue_id();
        match index.get(&residue) {
            Some(&i) => carbons[i].1 = atom.coord,
            None => {
                index.insert(residue.clone(), carbons.len());
                carbons.push((residue, atom.coord));
            }
        }
    }
    carbons
}

/// Find the pair of residues with the largest alpha-carbon distance.
///
/// Every pair is compared. Only a strictly larger distance replaces the current
/// best, so among equal distances the first pair in residue order is kept.
/// Fewer than two alpha-carbons is [`Error::InsufficientData`].
pub fn most_distant_residues(atoms: &[ParsedAtom]) -> Result<DistantPair> {
    let carbons = alpha_carbons(atoms);
    if carbons.len() < 2 {
        return Err(Error::insufficient_data("alpha-carbons", 2, carbons.len()));
    }

    let ((first, _), (second, _), distance) = carbons
        .iter()
        .tuple_combinations()
        .map(|(a, b)| (a, b, euclidean_distance(&a.1, &b.1)))
        .reduce(|best, candidate| {
            if candidate.2 > best.2 {
                candidate
            } else {
                best
            }
        })
        .ok_or_else(|| Error::insufficient_data("alpha-carbons", 2, carbons.len()))?;

    Ok(DistantPair {
        first: first.clone(),
        second: second.clone(),
        distance,
    })
}
