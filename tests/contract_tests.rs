mod common;
use common::utc;
use rtimesheet::core::QuotaResolver;
use rtimesheet::errors::AppError;
use rtimesheet::models::Contract;

fn contract(start: i64, end: i64, quota: f64) -> Contract {
    Contract::new(start, end, quota).expect("valid contract")
}

#[test]
fn test_contract_rejects_inverted_or_empty_range() {
    let err = Contract::new(200, 100, 10.0).unwrap_err();
    assert!(matches!(
        err,
        AppError::InvalidContractRange {
            start: 200,
            end: 100
        }
    ));

    assert!(matches!(
        Contract::new(100, 100, 10.0),
        Err(AppError::InvalidContractRange { .. })
    ));
}

#[test]
fn test_contract_covers_is_inclusive() {
    let c = contract(100, 200, 10.0);

    assert!(c.covers(100));
    assert!(c.covers(150));
    assert!(c.covers(200));
    assert!(!c.covers(99));
    assert!(!c.covers(201));
}

#[test]
fn test_contract_from_iso_accepts_both_separators() {
    let a = Contract::from_iso("2021-02-01 00:00:00", "2021-02-28 23:59:59", 28.0).unwrap();
    let b = Contract::from_iso("2021-02-01T00:00:00", "2021-02-28T23:59:59", 28.0).unwrap();
    assert_eq!(a, b);

    let c = Contract::from_iso("2021-02-01", "2021-02-28 23:59:59", 28.0).unwrap();
    assert_eq!(a.start(), c.start());
    assert_eq!(a.end() - a.start(), 28 * 86_400 - 1);
}

#[test]
fn test_contract_from_iso_rejects_garbage() {
    assert!(matches!(
        Contract::from_iso("01/02/2021", "2021-02-28 23:59:59", 1.0),
        Err(AppError::InvalidDate(_))
    ));
    assert!(matches!(
        Contract::from_iso("2021-03-01 00:00:00", "2021-02-01 00:00:00", 1.0),
        Err(AppError::InvalidContractRange { .. })
    ));
}

#[test]
fn test_resolver_returns_covering_contract_or_none() {
    let feb = contract(utc(2021, 2, 1, 0), utc(2021, 2, 28, 23), 28.0);
    let mar = contract(utc(2021, 3, 1, 0), utc(2021, 3, 31, 23), 40.0);
    let resolver = QuotaResolver::new(vec![feb.clone(), mar.clone()]).unwrap();

    assert_eq!(resolver.resolve(utc(2021, 2, 10, 12)), Some(&feb));
    assert_eq!(resolver.resolve(utc(2021, 3, 31, 23)), Some(&mar));
    assert_eq!(resolver.resolve_index(utc(2021, 3, 1, 0)), Some(1));

    // gap between the two periods and outside both
    assert_eq!(resolver.resolve(utc(2021, 2, 28, 23) + 1), None);
    assert_eq!(resolver.resolve(utc(2021, 1, 15, 12)), None);
    assert_eq!(resolver.resolve(utc(2021, 4, 1, 0)), None);
}

#[test]
fn test_resolver_rejects_overlapping_contracts() {
    let err = QuotaResolver::new(vec![
        contract(0, 100, 1.0),
        contract(200, 300, 1.0),
        contract(250, 400, 1.0),
    ])
    .unwrap_err();

    assert!(matches!(
        err,
        AppError::OverlappingContracts {
            first: 2,
            second: 3
        }
    ));
}

#[test]
fn test_resolver_rejects_shared_boundary() {
    // both ends are inclusive: a shared second is an overlap
    let res = QuotaResolver::new(vec![contract(0, 100, 1.0), contract(100, 200, 1.0)]);
    assert!(matches!(res, Err(AppError::OverlappingContracts { .. })));

    let ok = QuotaResolver::new(vec![contract(0, 100, 1.0), contract(101, 200, 1.0)]);
    assert!(ok.is_ok());
}

#[test]
fn test_resolver_without_contracts_resolves_nothing() {
    let resolver = QuotaResolver::new(Vec::new()).unwrap();
    assert_eq!(resolver.resolve(0), None);
}
