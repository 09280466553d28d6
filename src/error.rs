//! Errors returned by the counting functions.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FreqError {
    /// The input file could not be opened for reading.
    #[error("failed to open '{}': {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file opened but a later read failed.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FreqError {
    /// Path of the file the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            FreqError::FileOpen { path, .. } | FreqError::Read { path, .. } => path,
        }
    }

    /// Underlying I/O error.
    pub fn io_error(&self) -> &std::io::Error {
        match self {
            FreqError::FileOpen { source, .. } | FreqError::Read { source, .. } => source,
        }
    }
}
