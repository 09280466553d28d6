use rand::Rng;
use charfreq::{count_reader, stats};

#[test]
fn random_text_matches_naive_count() {
    let mut rng = rand::thread_rng();
    for _ in 0..10 {
        let len = rng.gen_range(0..400);
        let data: Vec<u8> = (0..len).map(|_| rng.gen_range(b' '..=b'~')).collect();
        let table = count_reader(&data[..]).unwrap();
        for b in b' '..=b'~' {
            let naive = data.iter().filter(|&&x| x == b).count() as u64;
            assert_eq!(table.get(b), naive);
        }
    }
}

#[test]
fn std_dev_matches_direct_formula() {
    let mut rng = rand::thread_rng();
    let values: Vec<u64> = (0..50).map(|_| rng.gen_range(1..1000)).collect();
    let m = values.iter().sum::<u64>() as f64 / values.len() as f64;
    let var = values.iter().map(|&v| (v as f64 - m) * (v as f64 - m)).sum::<f64>()
        / values.len() as f64;
    let sd = stats::population_std_dev(&values).unwrap();
    assert!((sd - var.sqrt()).abs() < 1e-9);
}
