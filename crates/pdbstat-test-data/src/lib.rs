//! pdbstat-test-data
//!
//! PDB fixtures embedded in the crate for use in testing.
//!
//! The fixtures are represented as `TestFile` objects which package the raw text
//! and create temporary files for the readers to operate on.
use std::fs;
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use pdbstat_test_data::TestFile;
/// let (pdb_file, _temp) = TestFile::met_gly().create_temp().unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Two residues (MET, GLY) in chain A, ten ATOM records with a duplicated
    /// oxygen, and three HETATM records for the ligands ABC and BLA.
    pub fn met_gly() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/met_gly.pdb"),
            suffix: "pdb",
        }
    }
    /// Two chains, six residues. ASP A2 has two alternate CA positions, PRO B2
    /// has no CA, and the HETATM block holds HEM, ZN and two waters.
    pub fn two_chains() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/two_chains.pdb"),
            suffix: "pdb",
        }
    }
    /// Three MET atoms cut off after the z coordinate.
    pub fn short_lines() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/short_lines.pdb"),
            suffix: "pdb",
        }
    }

    pub fn contents(&self) -> &'static str {
        std::str::from_utf8(self.filebinary).unwrap_or_default()
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }
}
