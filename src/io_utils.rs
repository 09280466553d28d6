//! Command-line rendering of [`FreqError`] with an actionable hint.

use std::fmt;
use std::io;

use crate::FreqError;

/// A counting failure as shown to the user of the `charfreq` binary.
#[derive(Debug)]
pub struct CliError(pub FreqError);

impl From<FreqError> for CliError {
    fn from(err: FreqError) -> Self {
        CliError(err)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_io_error(&self.0))
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Describe `err` with the failed step, the path and a suggestion.
pub fn format_io_error(err: &FreqError) -> String {
    let (operation, path, source) = match err {
        FreqError::FileOpen { path, source } => ("opening input file", path, source),
        FreqError::Read { path, source } => ("reading input file", path, source),
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        source,
        hint(source.kind())
    )
}

fn hint(kind: io::ErrorKind) -> &'static str {
    match kind {
        io::ErrorKind::NotFound => "Check that the file exists and the path is correct.",
        io::ErrorKind::PermissionDenied => "Check permissions or run as a different user.",
        io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => {
            "File appears truncated or corrupted."
        }
        _ => "Check that the path names a readable regular file.",
    }
}
