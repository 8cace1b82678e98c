//! # Constants
//!
//! Fixed physicochemical lookup tables.
//!
//! ## Residue Properties
//!
//! - `kyte_doolittle()` - Kyte-Doolittle (1982) hydropathy of a standard amino acid
//! - `charge_class()` - side-chain charge class at neutral pH
//!
//! ## Element Properties
//!
//! - `atomic_mass()` - standard atomic weight in daltons
//!

use std::collections::HashSet;
use std::sync::OnceLock;

#[rustfmt::skip]
/// Kyte-Doolittle hydropathy score for a 3-letter residue code.
///
/// Positive scores are hydrophobic. Only the 20 standard amino acids are
/// covered; anything else is `None`.
pub fn kyte_doolittle(res_name: &str) -> Option<f64> {
    let score = match res_name {
        "ALA" =>  1.8, "ARG" => -4.5, "ASN" => -3.5, "ASP" => -3.5,
        "CYS" =>  2.5, "GLN" => -3.5, "GLU" => -3.5, "GLY" => -0.4,
        "HIS" => -3.2, "ILE" =>  4.5, "LEU" =>  3.8, "LYS" => -3.9,
        "MET" =>  1.9, "PHE" =>  2.8, "PRO" => -1.6, "SER" => -0.8,
        "THR" => -0.7, "TRP" => -0.9, "TYR" => -1.3, "VAL" =>  4.2,
        _ => return None,
    };
    Some(score)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeClass {
    Positive,
    Negative,
    Uncharged,
}

static POSITIVE_RESIDUES: OnceLock<HashSet<&'static str>> = OnceLock::new();
static NEGATIVE_RESIDUES: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn get_positive_residues() -> &'static HashSet<&'static str> {
    POSITIVE_RESIDUES.get_or_init(|| ["LYS", "ARG", "HIS"].into_iter().collect())
}

fn get_negative_residues() -> &'static HashSet<&'static str> {
    NEGATIVE_RESIDUES.get_or_init(|| ["ASP", "GLU"].into_iter().collect())
}

pub fn charge_class(res_name: &str) -> ChargeClass {
    if get_positive_residues().contains(res_name) {
        ChargeClass::Positive
    } else if get_negative_residues().contains(res_name) {
        ChargeClass::Negative
    } else {
        ChargeClass::Uncharged
    }
}

#[rustfmt::skip]
/// Standard atomic weight of an element, in daltons.
///
/// The lookup is case-insensitive since the PDB element column is upper case
/// (`FE`, `ZN`). Deuterium (`D`) is included for neutron structures.
pub fn atomic_mass(element: &str) -> Option<f64> {
    let mass = match element.trim().to_ascii_uppercase().as_str() {
        "H"  =>   1.008, "D"  =>   2.014, "HE" =>   4.0026, "LI" =>   6.94,
        "BE" =>   9.0122, "B" =>  10.81, "C"  =>  12.011, "N"  =>  14.007,
        "O"  =>  15.999, "F"  =>  18.998, "NE" =>  20.180, "NA" =>  22.990,
        "MG" =>  24.305, "AL" =>  26.982, "SI" =>  28.085, "P"  =>  30.974,
        "S"  =>  32.06,  "CL" =>  35.45,  "AR" =>  39.948, "K"  =>  39.098,
        "CA" =>  40.078, "SC" =>  44.956, "TI" =>  47.867, "V"  =>  50.942,
        "CR" =>  51.996, "MN" =>  54.938, "FE" =>  55.845, "CO" =>  58.933,
        "NI" =>  58.693, "CU" =>  63.546, "ZN" =>  65.38,  "GA" =>  69.723,
        "GE" =>  72.630, "AS" =>  74.922, "SE" =>  78.971, "BR" =>  79.904,
        "KR" =>  83.798, "RB" =>  85.468, "SR" =>  87.62,  "Y"  =>  88.906,
        "ZR" =>  91.224, "NB" =>  92.906, "MO" =>  95.95,  "TC" =>  98.0,
        "RU" => 101.07,  "RH" => 102.91,  "PD" => 106.42,  "AG" => 107.87,
        "CD" => 112.41,  "IN" => 114.82,  "SN" => 118.71,  "SB" => 121.76,
        "TE" => 127.60,  "I"  => 126.90,  "XE" => 131.29,  "CS" => 132.91,
        "BA" => 137.33,  "LA" => 138.91,  "CE" => 140.12,  "PR" => 140.91,
        "ND" => 144.24,  "PM" => 145.0,   "SM" => 150.36,  "EU" => 151.96,
        "GD" => 157.25,  "TB" => 158.93,  "DY" => 162.50,  "HO" => 164.93,
        "ER" => 167.26,  "TM" => 168.93,  "YB" => 173.05,  "LU" => 174.97,
        "HF" => 178.49,  "TA" => 180.95,  "W"  => 183.84,  "RE" => 186.21,
        "OS" => 190.23,  "IR" => 192.22,  "PT" => 195.08,  "AU" => 196.97,
        "HG" => 200.59,  "TL" => 204.38,  "PB" => 207.2,   "BI" => 208.98,
        "PO" => 209.0,   "AT" => 210.0,   "RN" => 222.0,   "U"  => 238.03,
        _ => return None,
    };
    Some(mass)
}
