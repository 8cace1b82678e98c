mod atom;
mod field;
mod reader;

pub use atom::{ParsedAtom, RecordType, ResidueId};
pub use field::{extract_fields, PdbField};
pub use reader::{
    atom_lines, hetatm_lines, read_atoms, read_hetero_atoms, Reader, RecordFilter, RecordSet,
    Records,
};
