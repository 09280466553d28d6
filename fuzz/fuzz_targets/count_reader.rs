use charfreq::{count_reader, FrequencyStats};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let table = count_reader(data).unwrap();
            let newlines = data.iter().filter(|&&b| b == b'\n').count() as u64;
            assert_eq!(table.total(), data.len() as u64 - newlines);
            if let Some(stats) = FrequencyStats::from_table(&table) {
                assert!(stats.min_count as f64 <= stats.mean);
                assert!(stats.mean <= stats.max_count as f64);
            }
        });
    }
}
