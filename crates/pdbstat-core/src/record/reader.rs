use super::atom::{ParsedAtom, RecordType};
use super::field::PdbField;
use crate::error::{Error, Result};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

const WATER: &str = "HOH";

/// Which coordinate records a [`Records`] stream lets through.
///
/// Waters are never part of the HETATM stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFilter {
    Atom,
    Hetatm,
    AtomOrHetatm,
}

impl RecordFilter {
    pub fn accepts(&self, line: &str) -> bool {
        match (self, record_type(line)) {
            (RecordFilter::Atom | RecordFilter::AtomOrHetatm, Some(RecordType::Atom)) => true,
            (RecordFilter::Hetatm | RecordFilter::AtomOrHetatm, Some(RecordType::Hetatm)) => {
                PdbField::ResName.extract(line) != WATER
            }
            _ => false,
        }
    }
}

/// Record type of a line, judged on its first six columns padded with spaces.
fn record_type(line: &str) -> Option<RecordType> {
    let mut prefix = [b' '; 6];
    for (slot, byte) in prefix.iter_mut().zip(line.bytes()) {
        *slot = byte;
    }
    [RecordType::Atom, RecordType::Hetatm]
        .into_iter()
        .find(|record| record.prefix() == &prefix)
}

//  Reader ----------------------------------------------------------------------------------------

/// A PDB coordinate-record reader.
pub struct Reader<R> {
    inner: R,
}

impl<R> Reader<R> {
    /// Returns a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }
    /// Returns a mutable reference to the underlying reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }
    /// Unwraps and returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> Reader<R>
where
    R: BufRead,
{
    /// Creates a PDB reader.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns an iterator over matching records starting from the current stream position.
    pub fn records(&mut self, filter: RecordFilter) -> Records<&mut R> {
        Records::new(&mut self.inner, filter)
    }

    /// Consumes the reader, returning an iterator over matching records.
    pub fn into_records(self, filter: RecordFilter) -> Records<R> {
        Records::new(self.inner, filter)
    }
}

/// Lazy stream of raw record lines, trailing whitespace removed.
///
/// Lines are decoded lossily: a byte that is not valid UTF-8 becomes U+FFFD
/// instead of failing the read. The stream ends after the first I/O error.
pub struct Records<R> {
    inner: R,
    filter: RecordFilter,
    path: Option<PathBuf>,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> Records<R> {
    pub fn new(inner: R, filter: RecordFilter) -> Self {
        Self {
            inner,
            filter,
            path: None,
            buf: Vec::new(),
            done: false,
        }
    }

    /// Attach the source path to any I/O error this stream reports.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.inner.read_until(b'\n', &mut self.buf) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&self.buf);
                    let line = line.trim_end();
                    if self.filter.accepts(line) {
                        return Some(Ok(line.to_string()));
                    }
                }
                Err(source) => {
                    self.done = true;
                    return Some(Err(Error::from_io(source, self.path.clone())));
                }
            }
        }
        None
    }
}

impl<R: BufRead> FusedIterator for Records<R> {}

//  File helpers ----------------------------------------------------------------------------------

fn open(path: &Path, filter: RecordFilter) -> Result<Records<BufReader<File>>> {
    let file = File::open(path).map_err(|e| Error::from_io(e, Some(path.to_path_buf())))?;
    Ok(Records::new(BufReader::new(file), filter).with_path(path))
}

/// Lazily stream the `ATOM` lines of a file.
pub fn atom_lines(path: impl AsRef<Path>) -> Result<Records<BufReader<File>>> {
    open(path.as_ref(), RecordFilter::Atom)
}

/// Lazily stream the `HETATM` lines of a file, waters excluded.
pub fn hetatm_lines(path: impl AsRef<Path>) -> Result<Records<BufReader<File>>> {
    open(path.as_ref(), RecordFilter::Hetatm)
}

fn parse_all<R: BufRead>(records: Records<R>) -> Result<Vec<ParsedAtom>> {
    records
        .map(|line| line.and_then(|line| ParsedAtom::from_record(&line)))
        .collect()
}

pub fn read_atoms(path: impl AsRef<Path>) -> Result<Vec<ParsedAtom>> {
    let atoms = parse_all(atom_lines(path.as_ref())?)?;
    debug!("read {} ATOM records from {}", atoms.len(), path.as_ref().display());
    Ok(atoms)
}

pub fn read_hetero_atoms(path: impl AsRef<Path>) -> Result<Vec<ParsedAtom>> {
    let atoms = parse_all(hetatm_lines(path.as_ref())?)?;
    debug!("read {} HETATM records from {}", atoms.len(), path.as_ref().display());
    Ok(atoms)
}

//  RecordSet -------------------------------------------------------------------------------------

/// The ATOM and HETATM records of one file, collected in a single pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    pub atoms: Vec<ParsedAtom>,
    pub hetero_atoms: Vec<ParsedAtom>,
}

impl RecordSet {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let set = Self::collect(open(path, RecordFilter::AtomOrHetatm)?)?;
        debug!(
            "read {} ATOM and {} HETATM records from {}",
            set.atoms.len(),
            set.hetero_atoms.len(),
            path.display()
        );
        Ok(set)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::collect(Records::new(reader, RecordFilter::AtomOrHetatm))
    }

    fn collect<R: BufRead>(records: Records<R>) -> Result<Self> {
        let mut set = RecordSet::default();
        for atom in parse_all(records)? {
            match atom.record_type {
                RecordType::Atom => set.atoms.push(atom),
                RecordType::Hetatm => set.hetero_atoms.push(atom),
            }
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdbstat_test_data::TestFile;

    #[test]
    fn test_record_filter() {
        let atom = "ATOM      1  N   MET A   1      38.428  13.947  27.340";
        let hetatm = "HETATM   11  O   ABC A   3      31.600  11.200  26.140";
        let water = "HETATM   29  O   HOH A 201      30.000  30.000  30.000";

        assert!(RecordFilter::Atom.accepts(atom));
        assert!(!RecordFilter::Atom.accepts(hetatm));
        assert!(RecordFilter::Hetatm.accepts(hetatm));
        assert!(!RecordFilter::Hetatm.accepts(atom));
        assert!(!RecordFilter::Hetatm.accepts(water));
        assert!(!RecordFilter::AtomOrHetatm.accepts(water));
        assert!(RecordFilter::AtomOrHetatm.accepts(atom));

        // prefix is padded, not matched loosely
        assert!(RecordFilter::Atom.accepts("ATOM"));
        assert!(!RecordFilter::Atom.accepts("ATOMS     1"));
        assert!(!RecordFilter::Atom.accepts("ANISOU    1  N   MET A   1"));
        assert!(!RecordFilter::Atom.accepts(""));
    }

    #[test]
    fn test_atom_lines() {
        let (pdb_file, _temp) = TestFile::met_gly().create_temp().unwrap();
        let lines: Vec<String> = atom_lines(&pdb_file)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|line| line.starts_with("ATOM  ")));
        // trailing blanks stripped, element column intact
        assert!(lines.iter().all(|line| line.ends_with('N')
            || line.ends_with('C')
            || line.ends_with('O')));
    }

    #[test]
    fn test_hetatm_lines() {
        let (pdb_file, _temp) = TestFile::met_gly().create_temp().unwrap();
        assert_eq!(hetatm_lines(&pdb_file).unwrap().count(), 3);

        let (pdb_file, _temp) = TestFile::two_chains().create_temp().unwrap();
        let hetero = read_hetero_atoms(&pdb_file).unwrap();
        let names: Vec<&str> = hetero.iter().map(|a| a.res_name.as_str()).collect();
        assert_eq!(names, ["HEM", "HEM", "ZN"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        match read_atoms("/definitely/not/here.pdb") {
            Err(Error::Io { path, source }) => {
                assert_eq!(path, Some(PathBuf::from("/definitely/not/here.pdb")));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected an I/O error, got {:?}", other),
        }
        assert!(hetatm_lines("/definitely/not/here.pdb").is_err());
        assert!(RecordSet::from_path("/definitely/not/here.pdb").is_err());
    }

    #[test]
    fn test_record_set_single_pass() {
        let (pdb_file, _temp) = TestFile::two_chains().create_temp().unwrap();
        let set = RecordSet::from_path(&pdb_file).unwrap();
        assert_eq!(set.atoms.len(), 26);
        assert_eq!(set.hetero_atoms.len(), 3);
        assert_eq!(set.atoms, read_atoms(&pdb_file).unwrap());
        assert_eq!(set.hetero_atoms, read_hetero_atoms(&pdb_file).unwrap());
    }

    #[test]
    fn test_reader_over_memory() {
        let text = TestFile::met_gly().contents();
        let mut reader = Reader::new(text.as_bytes());
        assert_eq!(reader.records(RecordFilter::Hetatm).count(), 3);
        // the borrowed stream consumed the input
        assert_eq!(reader.records(RecordFilter::Atom).count(), 0);

        let reader = Reader::new(text.as_bytes());
        assert_eq!(reader.into_records(RecordFilter::Atom).count(), 10);

        let set = RecordSet::from_reader(text.as_bytes()).unwrap();
        assert_eq!(set.atoms.len(), 10);
        assert_eq!(set.hetero_atoms.len(), 3);
    }

    #[test]
    fn test_short_lines_file() {
        let (pdb_file, _temp) = TestFile::short_lines().create_temp().unwrap();
        let atoms = read_atoms(&pdb_file).unwrap();
        assert_eq!(atoms.len(), 3);
        assert!(atoms.iter().all(|atom| atom.element.is_empty()));
    }

    #[test]
    fn test_non_utf8_bytes_do_not_abort_the_read() {
        let mut text = b"REMARK   1 AUTHOR \xC5NGSTR\xD6M\n".to_vec();
        text.extend_from_slice(
            b"ATOM      1  N   MET A   1      38.428  13.947  27.340  1.00 54.69           N\n",
        );
        text.extend_from_slice(
            b"ATOM      2  CA  MET A   1      37.200  14.748  27.740  1.00 54.69           C\xFF\n",
        );

        let set = RecordSet::from_reader(text.as_slice()).unwrap();
        assert_eq!(set.atoms.len(), 2);
        assert_eq!(set.atoms[1].coord, [37.2, 14.748, 27.74]);
        assert_eq!(set.atoms[1].element, "C");
        assert_eq!(set.atoms[1].charge, "\u{FFFD}");

        let lines: Vec<String> = Reader::new(text.as_slice())
            .into_records(RecordFilter::Atom)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_invalid_coordinate_propagates() {
        let text = "ATOM      1  N   MET A   1      38.428  13.947\n";
        let err = RecordSet::from_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidNumber { field: "z", .. }));
    }
}
