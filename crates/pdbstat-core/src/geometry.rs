//! # Geometry
//!
//! Mass-weighted centroid and radius of gyration over every atom.
//!
//! ```text
//! C  = Σ mᵢ·pᵢ / Σ mᵢ
//! Rg = sqrt( Σ mᵢ·|pᵢ - C|² / Σ mᵢ )
//! ```
//!
//! Masses come from [`atomic_mass`]. An atom whose element is not in the table
//! (or whose element column is blank) is an error rather than a default mass.
//!
use crate::error::{Error, Result};
use crate::info::constants::atomic_mass;
use crate::record::ParsedAtom;

pub fn euclidean_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    squared_distance(a, b).sqrt()
}

fn squared_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a.iter().zip(b).map(|(p, q)| (q - p) * (q - p)).sum()
}

fn weighted_coords(atoms: &[ParsedAtom]) -> Result<Vec<(f64, [f64; 3])>> {
    atoms
        .iter()
        .map(|atom| {
            atomic_mass(&atom.element)
                .map(|mass| (mass, atom.coord))
                .ok_or_else(|| Error::UnknownElement {
                    element: atom.element.clone(),
                    serial: atom.serial,
                })
        })
        .collect()
}

fn centroid(weighted: &[(f64, [f64; 3])]) -> Result<[f64; 3]> {
    if weighted.is_empty() {
        return Err(Error::insufficient_data("atoms", 1, 0));
    }
    let total_mass: f64 = weighted.iter().map(|(mass, _)| mass).sum();
    let mut center = [0.0; 3];
    for (mass, coord) in weighted {
        for (c, x) in center.iter_mut().zip(coord) {
            *c += mass * x;
        }
    }
    Ok(center.map(|c| c / total_mass))
}

/// Mass-weighted centroid of `atoms`.
pub fn center_of_mass(atoms: &[ParsedAtom]) -> Result<[f64; 3]> {
    centroid(&weighted_coords(atoms)?)
}

/// Mass-weighted radius of gyration of `atoms`, in the units of the
/// coordinates (Å for PDB files).
pub fn radius_of_gyration(atoms: &[ParsedAtom]) -> Result<f64> {
    let weighted = weighted_coords(atoms)?;
    let center = centroid(&weighted)?;
    let (moment, total_mass) = weighted
        .iter()
        .fold((0.0, 0.0), |(moment, total), (mass, coord)| {
            (moment + mass * squared_distance(coord, &center), total + mass)
        });
    Ok((moment / total_mass).sqrt())
}
