use std::io::{self, Write};
use std::path::PathBuf;

use charfreq::io_utils::CliError;
use charfreq::{count, write_report, write_table, FrequencyStats, FrequencyTable};
use clap::Parser;
use serde::Serialize;

/// Count how often each character appears in a text file.
#[derive(Parser)]
#[command(name = "charfreq")]
struct Args {
    /// Input text file
    input: PathBuf,
    /// Print most/least common characters, mean, median and standard deviation
    #[arg(short, long)]
    verbose: bool,
    /// Emit a JSON document instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonReport {
    path: String,
    total: u64,
    distinct: usize,
    frequencies: std::collections::BTreeMap<String, u64>,
    stats: Option<FrequencyStats>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // The library prints the verbose report itself; the text and JSON paths
    // below render from the returned table instead.
    let table = count(&args.input, false).map_err(CliError::from)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        write_json(&args, &table, &mut out)?;
    } else if args.verbose {
        write_report(&table, &mut out)?;
    } else {
        write_table(&table, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn write_json<W: Write>(
    args: &Args,
    table: &FrequencyTable,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = JsonReport {
        path: args.input.display().to_string(),
        total: table.total(),
        distinct: table.len(),
        frequencies: table.to_string_keyed(),
        stats: if args.verbose {
            FrequencyStats::from_table(table)
        } else {
            None
        },
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    out.write_all(b"\n")?;
    Ok(())
}
