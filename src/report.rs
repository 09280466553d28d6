//! Text rendering of a [`FrequencyTable`] and its statistics.

use std::io::{self, Write};

use crate::stats::FrequencyStats;
use crate::table::{FrequencyTable, SPACE};

/// Write one `<char> -> <count>` line per entry, ordered by byte value.
///
/// The space character is shown as `' '`; every other byte is written as is.
pub fn write_table<W: Write>(table: &FrequencyTable, out: &mut W) -> io::Result<()> {
    writeln!(out, "Character Frequencies:")?;
    for (byte, count) in table.sorted() {
        write_char(out, byte)?;
        writeln!(out, " -> {}", count)?;
    }
    Ok(())
}

/// Write the full verbose report: table dump, most/least common non-space
/// characters, mean, median and standard deviation.
pub fn write_report<W: Write>(table: &FrequencyTable, out: &mut W) -> io::Result<()> {
    write_table(table, out)?;

    let stats = match FrequencyStats::from_table(table) {
        Some(s) => s,
        None => {
            writeln!(out, "No non-space characters found.")?;
            return Ok(());
        }
    };

    write!(out, "Most common non-space character(s): ")?;
    write_char_list(out, &stats.most_common)?;
    writeln!(out, "({} times)", stats.max_count)?;

    write!(out, "Least common non-space character(s): ")?;
    write_char_list(out, &stats.least_common)?;
    writeln!(out, "({} times)", stats.min_count)?;

    writeln!(out, "Mean frequency: {}", format_float(stats.mean))?;
    writeln!(out, "Median frequency: {}", format_float(stats.median))?;
    writeln!(out, "Standard deviation: {}", format_float(stats.std_dev))?;
    Ok(())
}

/// Format `v` with six significant digits and no trailing zeros, switching
/// to exponent notation below 1e-4 or from 1e6 up (`%g` style).
pub fn format_float(v: f64) -> String {
    const PRECISION: i32 = 6;
    if v == 0.0 || !v.is_finite() {
        return format!("{}", v);
    }
    // Rounding to the target precision first settles the exponent, so 999999.7
    // lands on 1e+06 rather than 1000000.
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, v);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if exp < -4 || exp >= PRECISION {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (PRECISION - 1 - exp) as usize;
        trim_zeros(&format!("{:.*}", decimals, v)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn write_char<W: Write>(out: &mut W, byte: u8) -> io::Result<()> {
    if byte == SPACE {
        out.write_all(b"' '")
    } else {
        out.write_all(&[byte])
    }
}

fn write_char_list<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    for &b in bytes {
        out.write_all(&[b, b' '])?;
    }
    Ok(())
}
