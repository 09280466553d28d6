//! Summary statistics over the non-space entries of a [`FrequencyTable`].
//!
//! Every helper returns `None` for an empty input instead of dividing by
//! zero, so callers never see `NaN`.

use serde::{Serialize, Serializer};

use crate::FrequencyTable;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyStats {
    /// Non-space bytes sharing the highest count, ascending.
    #[serde(serialize_with = "bytes_as_chars")]
    pub most_common: Vec<u8>,
    pub max_count: u64,
    /// Non-space bytes sharing the lowest count, ascending.
    #[serde(serialize_with = "bytes_as_chars")]
    pub least_common: Vec<u8>,
    pub min_count: u64,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl FrequencyStats {
    /// Compute statistics for `table`, or `None` when it holds no
    /// non-space characters.
    pub fn from_table(table: &FrequencyTable) -> Option<Self> {
        let entries = table.non_space();
        let counts: Vec<u64> = entries.iter().map(|&(_, n)| n).collect();

        let max_count = *counts.iter().max()?;
        let min_count = *counts.iter().min()?;
        let most_common = entries
            .iter()
            .filter(|&&(_, n)| n == max_count)
            .map(|&(b, _)| b)
            .collect();
        let least_common = entries
            .iter()
            .filter(|&&(_, n)| n == min_count)
            .map(|&(b, _)| b)
            .collect();

        Some(Self {
            most_common,
            max_count,
            least_common,
            min_count,
            mean: mean(&counts)?,
            median: median(&counts)?,
            std_dev: population_std_dev(&counts)?,
        })
    }
}

fn bytes_as_chars<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(bytes.iter().map(|&b| char::from(b)))
}

pub fn mean(values: &[u64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().map(|&v| v as f64).sum();
    Some(sum / values.len() as f64)
}

/// Median of `values`, computed on a sorted copy.
pub fn median(values: &[u64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    let mid = if n % 2 == 0 {
        (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
    } else {
        sorted[n / 2] as f64
    };
    Some(mid)
}

pub fn population_std_dev(values: &[u64]) -> Option<f64> {
    let m = mean(values)?;
    let variance = values
        .iter()
        .map(|&v| (v as f64 - m).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    Some(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_have_no_stats() {
        assert_eq!(mean(&[]), None);
        assert_eq!(median(&[]), None);
        assert_eq!(population_std_dev(&[]), None);
    }

    #[test]
    fn median_even_and_odd() {
        assert_eq!(median(&[4, 1, 3]), Some(3.0));
        assert_eq!(median(&[4, 1, 3, 2]), Some(2.5));
    }

    #[test]
    fn std_dev_is_population() {
        // sample std dev would be sqrt(32/7)
        let sd = population_std_dev(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert!((sd - 2.0).abs() < 1e-12);
    }

    #[test]
    fn only_spaces_yield_none() {
        let mut t = FrequencyTable::new();
        t.extend_from_line(b"    ");
        assert!(FrequencyStats::from_table(&t).is_none());
    }
}
