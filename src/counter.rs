//! Line-by-line byte counting over files and readers.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::report::write_report;
use crate::{FreqError, FrequencyTable};

/// Tally every byte of `reader`, line by line.
///
/// Lines are split on `\n`, which is not counted. A `\r` before it is an
/// ordinary byte and is counted. The final line needs no terminator.
pub fn count_reader<R: BufRead>(mut reader: R) -> io::Result<FrequencyTable> {
    let mut table = FrequencyTable::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        table.extend_from_line(&line);
    }
    Ok(table)
}

/// Count the characters of the file at `path`.
///
/// When `verbose` is set the report from [`write_report`] is printed to
/// stdout before returning; it does not affect the returned table. A failure
/// to write the report goes to stderr and the table is still returned.
pub fn count<P: AsRef<Path>>(path: P, verbose: bool) -> Result<FrequencyTable, FreqError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FreqError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let table = count_reader(BufReader::new(file)).map_err(|source| FreqError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if verbose {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = write_report(&table, &mut out) {
            eprintln!("failed to write report: {e}");
        }
    }
    Ok(table)
}

/// Like [`count`], but reports failures on stderr and returns an empty table.
pub fn count_or_empty<P: AsRef<Path>>(path: P, verbose: bool) -> FrequencyTable {
    count_or_empty_to(path, verbose, &mut io::stderr())
}

/// [`count_or_empty`] with the diagnostic written to `diag`.
pub fn count_or_empty_to<P: AsRef<Path>, W: Write>(
    path: P,
    verbose: bool,
    diag: &mut W,
) -> FrequencyTable {
    match count(path, verbose) {
        Ok(table) => table,
        Err(e) => {
            let _ = writeln!(diag, "{e}");
            FrequencyTable::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_keeps_carriage_return() {
        let t = count_reader(&b"ab\r\nc"[..]).unwrap();
        assert_eq!(t.get(b'\r'), 1);
        assert_eq!(t.get(b'\n'), 0);
        assert_eq!(t.total(), 4);
    }

    #[test]
    fn blank_lines_add_nothing() {
        let t = count_reader(&b"\n\n\n"[..]).unwrap();
        assert!(t.is_empty());
    }
}
