//! # Fixed-column fields
//!
//! `ATOM` and `HETATM` records are 80-column text lines where every field lives
//! at a fixed column range. [`PdbField`] is the table of those ranges;
//! [`extract_fields`] slices a line into a `field -> trimmed text` map.
//!
//! Extraction is forgiving: a range that runs past the end of the line is
//! clamped, so a line that stops after the coordinates yields empty strings
//! for occupancy, temperature factor, segment, element and charge.
//!
use std::collections::BTreeMap;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum PdbField {
    RecordType,     Serial,         AtomName,       AltLoc,
    ResName,        ChainId,        ResSeq,         InsertionCode,
    X,              Y,              Z,              Occupancy,
    TempFactor,     SegmentId,      Element,        Charge,
}

impl PdbField {
    /// Zero-indexed, end-exclusive column range of the field.
    #[rustfmt::skip]
    pub fn columns(&self) -> (usize, usize) {
        match self {
            PdbField::RecordType    => (0, 6),
            PdbField::Serial        => (6, 11),
            PdbField::AtomName      => (12, 16),
            PdbField::AltLoc        => (16, 17),
            PdbField::ResName       => (17, 20),
            PdbField::ChainId       => (21, 22),
            PdbField::ResSeq        => (22, 26),
            PdbField::InsertionCode => (26, 27),
            PdbField::X             => (30, 38),
            PdbField::Y             => (38, 46),
            PdbField::Z             => (46, 54),
            PdbField::Occupancy     => (54, 60),
            PdbField::TempFactor    => (60, 66),
            PdbField::SegmentId     => (72, 76),
            PdbField::Element       => (76, 78),
            PdbField::Charge        => (78, 80),
        }
    }

    /// Returns the whitespace-trimmed text of this field.
    ///
    /// The column range is clamped to the line length. Columns are counted in
    /// bytes; a range that splits a multi-byte character is decoded lossily
    /// instead of panicking.
    pub fn extract(&self, line: &str) -> String {
        let (start, end) = self.columns();
        let bytes = line.as_bytes();
        let end = end.min(bytes.len());
        let start = start.min(end);
        String::from_utf8_lossy(&bytes[start..end]).trim().to_string()
    }

    pub fn name(&self) -> &'static str {
        (*self).into()
    }
}

/// Extract named fields from a single record.
///
/// With `fields == None` every field in [`PdbField`] is returned. Names that do
/// not correspond to a field are skipped rather than reported.
///
/// ```ignore
/// let fields = extract_fields(line, Some(&["res_name", "x", "no_such_field"]));
/// assert_eq!(fields.len(), 2);
/// ```
pub fn extract_fields(line: &str, fields: Option<&[&str]>) -> BTreeMap<PdbField, String> {
    match fields {
        None => PdbField::iter()
            .map(|field| (field, field.extract(line)))
            .collect(),
        Some(names) => names
            .iter()
            .filter_map(|name| name.parse::<PdbField>().ok())
            .map(|field| (field, field.extract(line)))
            .collect(),
    }
}
