use std::fmt;
use std::path::{Path, PathBuf};

use crate::tables::ROM_SIZE;

/// What went wrong, carrying the offending source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedLabel(String),
    DuplicateLabel(String),
    InvalidComp(String),
    InvalidDest(String),
    InvalidJump(String),
    AddressOverflow(String),
    InvalidSymbol(String),
    RomOverflow,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ErrorKind::*;
        match self {
            MalformedLabel(s) => write!(f, "invalid label specifier: {s:?}"),
            DuplicateLabel(s) => write!(f, "jump label {s:?} previously declared"),
            InvalidComp(s) => write!(f, "invalid comp value: {s:?}"),
            InvalidDest(s) => write!(f, "invalid dest value: {s:?}"),
            InvalidJump(s) => write!(f, "invalid jump value: {s:?}"),
            AddressOverflow(s) => write!(f, "address {s:?} does not fit in 15 bits"),
            InvalidSymbol(s) => write!(f, "invalid symbol: {s:?}"),
            RomOverflow => write!(f, "program exceeds {ROM_SIZE} instructions"),
        }
    }
}

/// A fatal translation error tied to a 0-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsmError {
    pub line: usize,
    pub kind: ErrorKind,
    pub path: Option<PathBuf>,
}

impl AsmError {
    pub fn new(line: usize, kind: ErrorKind) -> Self {
        Self {
            line,
            kind,
            path: None,
        }
    }
    /// Names the input file in the diagnostic.
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }
}

impl fmt::Display for AsmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}:{}: {}", path.display(), self.line, self.kind),
            None => write!(f, "line {}: {}", self.line, self.kind),
        }
    }
}

impl std::error::Error for AsmError {}
