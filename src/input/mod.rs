use std::fs;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::catalog::CatalogError;

pub mod candidates;
pub mod csv;
pub mod levels;
pub mod snapshot;
pub mod timestamp;
pub mod trusted;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("{source_name} has no {column:?} column")]
    MissingColumn { source_name: String, column: String },
    #[error("unknown level type {kind:?} on line {line_no}")]
    UnknownKind { kind: String, line_no: usize },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Reads a whole text file; `-` means standard input.
pub fn read_text(path: &Path) -> Result<String, InputError> {
    let io_err = |source| InputError::Io {
        path: path.display().to_string(),
        source,
    };
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(io_err)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(io_err)
}
