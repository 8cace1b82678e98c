use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error for {path_desc}: {source}", path_desc = PathDisplay(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("not an ATOM or HETATM record: {record:?}")]
    InvalidRecordType { record: String },

    #[error("invalid number in field '{field}': {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("element {element:?} (atom serial {serial}) has no entry in the atomic mass table")]
    UnknownElement { element: String, serial: i64 },

    #[error("insufficient data: needed at least {needed} {what}, found {found}")]
    InsufficientData {
        what: &'static str,
        needed: usize,
        found: usize,
    },
}

impl Error {
    pub fn from_io(source: std::io::Error, path: Option<PathBuf>) -> Self {
        Self::Io { path, source }
    }

    pub fn invalid_number(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            value: value.into(),
        }
    }

    pub fn insufficient_data(what: &'static str, needed: usize, found: usize) -> Self {
        Self::InsufficientData {
            what,
            needed,
            found,
        }
    }

    /// True for the "not enough records to compute this" condition, which the
    /// summary treats as a missing section rather than a failure.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

struct PathDisplay<'a>(&'a Option<PathBuf>);

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(path) => write!(f, "'{}'", path.display()),
            None => f.write_str("<input stream>"),
        }
    }
}
