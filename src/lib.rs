//! Per-byte character frequency counting for text files.
//!
//! [`count`] reads a file line by line and tallies each raw byte into a
//! [`FrequencyTable`]. With `verbose` set it also prints a report of the most
//! and least common non-space characters together with the mean, median and
//! population standard deviation of their counts.

mod counter;
mod error;
pub mod io_utils;
pub mod report;
pub mod stats;
mod table;

pub use counter::{count, count_or_empty, count_or_empty_to, count_reader};
pub use error::FreqError;
pub use report::{write_report, write_table};
pub use stats::FrequencyStats;
pub use table::{FrequencyTable, SPACE};
