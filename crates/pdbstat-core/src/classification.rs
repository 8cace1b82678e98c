//! # Classification
//!
//! Two-bucket summaries of a residue [`Composition`]. Residue names the lookup
//! tables do not know (ligand codes, modified residues) fall in neither bucket,
//! and the percentages are taken relative to the two buckets only.
//!
use crate::composition::Composition;
use crate::info::constants::{charge_class, kyte_doolittle, ChargeClass};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HydrophobicityCounts {
    pub hydrophobic: usize,
    pub hydrophilic: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HydrophobicityShare {
    pub hydrophobic: f64,
    pub hydrophilic: f64,
}

impl HydrophobicityCounts {
    pub fn total(&self) -> usize {
        self.hydrophobic + self.hydrophilic
    }

    /// `None` when neither bucket holds anything.
    pub fn percentages(&self) -> Option<HydrophobicityShare> {
        let (hydrophobic, hydrophilic) = share(self.hydrophobic, self.hydrophilic)?;
        Some(HydrophobicityShare {
            hydrophobic,
            hydrophilic,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChargeCounts {
    pub positive: usize,
    pub negative: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChargeShare {
    pub positive: f64,
    pub negative: f64,
}

impl ChargeCounts {
    pub fn total(&self) -> usize {
        self.positive + self.negative
    }

    /// Positive minus negative residue count.
    pub fn net(&self) -> i64 {
        self.positive as i64 - self.negative as i64
    }

    /// `None` when there are no charged residues.
    pub fn percentages(&self) -> Option<ChargeShare> {
        let (positive, negative) = share(self.positive, self.negative)?;
        Some(ChargeShare { positive, negative })
    }
}

fn share(a: usize, b: usize) -> Option<(f64, f64)> {
    let total = (a + b) as f64;
    if total == 0.0 {
        return None;
    }
    Some((100.0 * a as f64 / total, 100.0 * b as f64 / total))
}

/// Split a residue composition on the Kyte-Doolittle scale: a score above
/// zero is hydrophobic, zero or below is hydrophilic.
pub fn hydrophobicity_composition(composition: &Composition) -> HydrophobicityCounts {
    hydrophobicity_composition_with(composition, kyte_doolittle)
}

/// Same as [`hydrophobicity_composition`] with a caller-supplied scale.
/// Residues for which `scale` returns `None` are skipped.
pub fn hydrophobicity_composition_with<F>(
    composition: &Composition,
    scale: F,
) -> HydrophobicityCounts
where
    F: Fn(&str) -> Option<f64>,
{
    let mut counts = HydrophobicityCounts::default();
    for (res_name, count) in composition.iter() {
        match scale(res_name) {
            Some(score) if score > 0.0 => counts.hydrophobic += count,
            Some(_) => counts.hydrophilic += count,
            None => {}
        }
    }
    counts
}

/// Sum the counts of LYS/ARG/HIS into `positive` and ASP/GLU into `negative`.
pub fn charge_composition(composition: &Composition) -> ChargeCounts {
    let mut counts = ChargeCounts::default();
    for (res_name, count) in composition.iter() {
        match charge_class(res_name) {
            ChargeClass::Positive => counts.positive += count,
            ChargeClass::Negative => counts.negative += count,
            ChargeClass::Uncharged => {}
        }
    }
    counts
}
