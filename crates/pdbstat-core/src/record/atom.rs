use super::field::PdbField;
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
pub enum RecordType {
    #[strum(serialize = "ATOM")]
    #[serde(rename = "ATOM")]
    Atom,
    #[strum(serialize = "HETATM")]
    #[serde(rename = "HETATM")]
    Hetatm,
}

impl RecordType {
    /// The first six columns of a record of this type.
    pub fn prefix(&self) -> &'static [u8; 6] {
        match self {
            RecordType::Atom => b"ATOM  ",
            RecordType::Hetatm => b"HETATM",
        }
    }
}

/// A residue is identified by chain, sequence number and name together.
/// Atoms sharing all three belong to the same residue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResidueId {
    pub chain_id: String,
    pub res_seq: i32,
    pub res_name: String,
}

impl ResidueId {
    pub fn new(chain_id: impl Into<String>, res_seq: i32, res_name: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            res_seq,
            res_name: res_name.into(),
        }
    }
}

impl fmt::Display for ResidueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.chain_id.is_empty() {
            write!(f, "{}{}", self.res_name, self.res_seq)
        } else {
            write!(f, "{}:{}{}", self.chain_id, self.res_name, self.res_seq)
        }
    }
}

/// One `ATOM` / `HETATM` record with its numeric fields converted.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAtom {
    pub record_type: RecordType,
    pub serial: i64,
    pub atom_name: String,
    pub alt_loc: Option<char>,
    pub res_name: String,
    pub chain_id: String,
    pub res_seq: i32,
    pub insertion_code: Option<char>,
    pub coord: [f64; 3],
    pub occupancy: Option<f64>,
    pub temp_factor: Option<f64>,
    pub segment_id: String,
    pub element: String,
    pub charge: String,
}

impl ParsedAtom {
    /// Parse a raw record.
    ///
    /// Serial, residue sequence number and the three coordinates are required:
    /// an empty or non-numeric value is [`Error::InvalidNumber`]. Occupancy and
    /// temperature factor may be blank (`None`) but not garbage.
    pub fn from_record(line: &str) -> Result<Self> {
        let record_type = PdbField::RecordType
            .extract(line)
            .parse::<RecordType>()
            .map_err(|_| Error::InvalidRecordType {
                record: PdbField::RecordType.extract(line),
            })?;

        Ok(ParsedAtom {
            record_type,
            serial: parse_number(PdbField::Serial, line)?,
            atom_name: PdbField::AtomName.extract(line),
            alt_loc: parse_char(PdbField::AltLoc, line),
            res_name: PdbField::ResName.extract(line),
            chain_id: PdbField::ChainId.extract(line),
            res_seq: parse_number(PdbField::ResSeq, line)?,
            insertion_code: parse_char(PdbField::InsertionCode, line),
            coord: [
                parse_number(PdbField::X, line)?,
                parse_number(PdbField::Y, line)?,
                parse_number(PdbField::Z, line)?,
            ],
            occupancy: parse_optional(PdbField::Occupancy, line)?,
            temp_factor: parse_optional(PdbField::TempFactor, line)?,
            segment_id: PdbField::SegmentId.extract(line),
            element: PdbField::Element.extract(line),
            charge: PdbField::Charge.extract(line),
        })
    }

    pub fn residue_id(&self) -> ResidueId {
        ResidueId::new(&self.chain_id, self.res_seq, &self.res_name)
    }

    pub fn is_hetero(&self) -> bool {
        self.record_type == RecordType::Hetatm
    }
}

impl FromStr for ParsedAtom {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        ParsedAtom::from_record(line)
    }
}

impl TryFrom<&str> for ParsedAtom {
    type Error = Error;

    fn try_from(line: &str) -> Result<Self> {
        ParsedAtom::from_record(line)
    }
}

fn parse_number<T: FromStr>(field: PdbField, line: &str) -> Result<T> {
    let value = field.extract(line);
    value
        .parse::<T>()
        .map_err(|_| Error::invalid_number(field.name(), value))
}

fn parse_optional<T: FromStr>(field: PdbField, line: &str) -> Result<Option<T>> {
    let value = field.extract(line);
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<T>()
        .map(Some)
        .map_err(|_| Error::invalid_number(field.name(), value))
}

fn parse_char(field: PdbField, line: &str) -> Option<char> {
    field.extract(line).chars().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MET_CA: &str =
        "ATOM      2  CA  MET A   1      37.200  14.748  27.740  1.00 54.69           C  ";
    const ASP_CA_B: &str =
        "ATOM      8  CA BASP A   2      14.000  10.000  30.000  0.50 20.00           C";
    const HEM_FE: &str =
        "HETATM   27 FE   HEM A 101      15.000  15.000  15.000  1.00 20.00          FE2+";

    #[test]
    fn test_parse_atom() {
        let atom = ParsedAtom::from_record(MET_CA).unwrap();
        assert_eq!(atom.record_type, RecordType::Atom);
        assert_eq!(atom.serial, 2);
        assert_eq!(atom.atom_name, "CA");
        assert_eq!(atom.alt_loc, None);
        assert_eq!(atom.res_name, "MET");
        assert_eq!(atom.chain_id, "A");
        assert_eq!(atom.res_seq, 1);
        assert_eq!(atom.insertion_code, None);
        assert_eq!(atom.coord, [37.2, 14.748, 27.74]);
        assert_eq!(atom.occupancy, Some(1.0));
        assert_eq!(atom.temp_factor, Some(54.69));
        assert_eq!(atom.element, "C");
        assert_eq!(atom.charge, "");
        assert_eq!(atom.residue_id(), ResidueId::new("A", 1, "MET"));
        assert!(!atom.is_hetero());
    }

    #[test]
    fn test_parse_altloc_and_hetatm() {
        let atom: ParsedAtom = ASP_CA_B.parse().unwrap();
        assert_eq!(atom.alt_loc, Some('B'));
        assert_eq!(atom.occupancy, Some(0.5));

        let atom = ParsedAtom::try_from(HEM_FE).unwrap();
        assert!(atom.is_hetero());
        assert_eq!(atom.atom_name, "FE");
        assert_eq!(atom.element, "FE");
        assert_eq!(atom.charge, "2+");
        assert_eq!(atom.res_seq, 101);
    }

    #[test]
    fn test_short_line_keeps_coordinates() {
        let atom = ParsedAtom::from_record(&MET_CA[..54]).unwrap();
        assert_eq!(atom.coord, [37.2, 14.748, 27.74]);
        assert_eq!(atom.occupancy, None);
        assert_eq!(atom.temp_factor, None);
        assert_eq!(atom.element, "");
    }

    #[test]
    fn test_invalid_numbers_propagate() {
        // z column cut away entirely
        match ParsedAtom::from_record(&MET_CA[..46]) {
            Err(Error::InvalidNumber { field, value }) => {
                assert_eq!(field, "z");
                assert_eq!(value, "");
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }

        let garbled = MET_CA.replace("14.748", "14.7x8");
        match ParsedAtom::from_record(&garbled) {
            Err(Error::InvalidNumber { field, value }) => {
                assert_eq!(field, "y");
                assert_eq!(value, "14.7x8");
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }

        let garbled = MET_CA.replace("1.00 54.69", "?.?? 54.69");
        assert!(matches!(
            ParsedAtom::from_record(&garbled),
            Err(Error::InvalidNumber {
                field: "occupancy",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_other_records() {
        let err = ParsedAtom::from_record("TER      11      GLY A   2").unwrap_err();
        assert!(matches!(err, Error::InvalidRecordType { record } if record == "TER"));
    }

    #[test]
    fn test_residue_id_display() {
        assert_eq!(ResidueId::new("A", 12, "LYS").to_string(), "A:LYS12");
        assert_eq!(ResidueId::new("", 3, "GLY").to_string(), "GLY3");
    }
}
