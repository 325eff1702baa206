mod common;
use common::utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rtimesheet::core::Sample;
use rtimesheet::errors::AppError;
use rtimesheet::export::write_records_csv;
use rtimesheet::models::{Columns, Contract, RecordSet};
use std::collections::BTreeSet;

fn contracts() -> Vec<Contract> {
    vec![
        Contract::new(utc(2021, 2, 1, 0), utc(2021, 2, 28, 23), 28.0).unwrap(),
        Contract::new(utc(2021, 3, 1, 0), utc(2021, 3, 31, 23), 40.0).unwrap(),
    ]
}

#[test]
fn test_sample_respects_sizes_and_ranges() {
    let contracts = contracts();
    let sample = Sample::new(&contracts, 500, 7).unwrap();
    let records = sample.generate_with(&mut StdRng::seed_from_u64(42));

    assert_eq!(records.len(), 500);

    let ids: BTreeSet<&str> = records.iter().map(|r| r.person_id()).collect();
    assert!(ids.len() <= 7);

    for r in &records {
        assert!(contracts.iter().any(|c| c.covers(r.timestamp())));
        assert!((0.0..5.0).contains(&r.duration()));
        // multiples of 0.1
        assert!(((r.duration() * 10.0).round() - r.duration() * 10.0).abs() < 1e-9);
        assert_eq!(r.person_id().len(), 36);
    }
}

#[test]
fn test_sample_rejects_bad_parameters() {
    let contracts = contracts();
    assert!(matches!(Sample::new(&[], 10, 1), Err(AppError::Config(_))));
    assert!(matches!(Sample::new(&contracts, 0, 1), Err(AppError::Config(_))));
    assert!(matches!(Sample::new(&contracts, 10, 0), Err(AppError::Config(_))));
}

#[test]
fn test_sample_csv_reads_back() {
    let contracts = contracts();
    let records = Sample::new(&contracts, 50, 5)
        .unwrap()
        .generate_with(&mut StdRng::seed_from_u64(7));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.csv");
    let columns = Columns::default();
    write_records_csv(&path, &columns, &records).unwrap();

    let loaded = RecordSet::from_path(&path, &columns).unwrap();
    assert_eq!(loaded.records(), records.as_slice());
}
