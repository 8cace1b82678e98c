//! # Composition
//!
//! Residue, element and heteroatom counts.
//!
//! Residues are counted once per [`ResidueId`](crate::ResidueId), not once per
//! atom: a residue with ten atoms contributes one to its name's count. Elements
//! are counted per atom.
//!
//! Both [`Composition`] and [`Percentages`] keep their entries sorted by
//! descending value. The sort is stable, so equal values stay in the order the
//! keys were first encountered in the records.
//!
use crate::record::ParsedAtom;
use itertools::Itertools;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    entries: Vec<(String, usize)>,
}

impl Composition {
    /// Build a composition from `(key, count)` pairs given in encounter order.
    pub fn new<K: Into<String>>(counts: impl IntoIterator<Item = (K, usize)>) -> Self {
        let mut entries: Vec<(String, usize)> =
            counts.into_iter().map(|(k, n)| (k.into(), n)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), *n))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// `100 * count / total` for every key. An empty composition (or one whose
    /// counts sum to zero) gives empty percentages.
    pub fn percentages(&self) -> Percentages {
        let total = self.total();
        if total == 0 {
            return Percentages::default();
        }
        Percentages::new(
            self.iter()
                .map(|(k, n)| (k, 100.0 * n as f64 / total as f64)),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Percentages {
    entries: Vec<(String, f64)>,
}

impl Percentages {
    pub fn new<K: Into<String>>(values: impl IntoIterator<Item = (K, f64)>) -> Self {
        let mut entries: Vec<(String, f64)> =
            values.into_iter().map(|(k, v)| (k.into(), v)).collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v).sum()
    }
}

// Both serialize as JSON objects whose key order is the sorted order.
impl Serialize for Composition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

impl Serialize for Percentages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Counts keys in first-seen order.
#[derive(Default)]
struct Tally<'a> {
    counts: Vec<(&'a str, usize)>,
    index: HashMap<&'a str, usize>,
}

impl<'a> Tally<'a> {
    fn add(&mut self, key: &'a str) {
        match self.index.get(key) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(key, self.counts.len());
                self.counts.push((key, 1));
            }
        }
    }

    fn into_composition(self) -> Composition {
        Composition::new(self.counts)
    }
}

/// One count per distinct (chain, sequence number, name) residue.
fn count_residues(atoms: &[ParsedAtom]) -> Composition {
    let mut tally = Tally::default();
    atoms
        .iter()
        .unique_by(|atom| atom.residue_id())
        .for_each(|atom| tally.add(&atom.res_name));
    tally.into_composition()
}

/// Number of distinct residues per residue name in the ATOM records.
pub fn residue_composition(atoms: &[ParsedAtom]) -> Composition {
    count_residues(atoms)
}

pub fn residue_percentages(atoms: &[ParsedAtom]) -> Percentages {
    residue_composition(atoms).percentages()
}

/// Number of atoms per element symbol. Atoms with a blank element column are
/// not counted.
pub fn element_composition(atoms: &[ParsedAtom]) -> Composition {
    let mut tally = Tally::default();
    atoms
        .iter()
        .filter(|atom| !atom.element.is_empty())
        .for_each(|atom| tally.add(&atom.element));
    tally.into_composition()
}

pub fn element_percentages(atoms: &[ParsedAtom]) -> Percentages {
    element_composition(atoms).percentages()
}

/// Number of distinct heteroatom residues per residue name. Expects HETATM
/// records as produced by the reader, i.e. without waters.
pub fn hetero_residue_composition(hetero_atoms: &[ParsedAtom]) -> Composition {
    count_residues(hetero_atoms)
}
