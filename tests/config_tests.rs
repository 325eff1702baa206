mod common;
use common::CONFIG_YAML;
use rtimesheet::config::Config;
use rtimesheet::errors::AppError;

#[test]
fn test_load_full_config() {
    let cfg = Config::from_yaml(CONFIG_YAML).unwrap();

    assert_eq!(cfg.contracts.len(), 2);
    assert_eq!(cfg.columns.date, "Datum");
    assert_eq!(cfg.output.overtime, "Differenz");
    assert_eq!(cfg.sample.num, 200);

    let resolver = cfg.resolver().unwrap();
    assert_eq!(resolver.contracts().len(), 2);
    assert_eq!(resolver.contracts()[1].quota(), 40.0);
}

#[test]
fn test_defaults_for_optional_sections() {
    let yaml = r#"
contracts:
  - start: "2021-02-01 00:00:00"
    end: "2021-02-28 23:59:59"
    quota: 28
columns:
  id: login
"#;
    let cfg = Config::from_yaml(yaml).unwrap();

    assert_eq!(cfg.columns.date, "date");
    assert_eq!(cfg.columns.duration, "duration");
    assert_eq!(cfg.columns.id, "login");
    assert_eq!(cfg.output.avg_time, "avg_time");
    assert_eq!(cfg.plot.overtime_title, "Overtime");
    assert_eq!(cfg.sample.num, 2000);
    assert_eq!(cfg.sample.id_num, 50);
}

#[test]
fn test_contracts_are_required() {
    let err = Config::from_yaml("columns:\n  date: d\n").unwrap_err();
    assert!(matches!(err, AppError::Yaml(_)));

    let err = Config::from_yaml("contracts: []\n").unwrap_err();
    assert!(matches!(err, AppError::Config(ref m) if m.contains("at least one contract")));
}

#[test]
fn test_duplicate_input_columns_rejected() {
    let yaml = r#"
contracts:
  - { start: "2021-02-01", end: "2021-02-28", quota: 1 }
columns:
  date: x
  duration: x
  id: y
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, AppError::Config(ref m) if m.contains("columns.duration")));
}

#[test]
fn test_duplicate_output_columns_rejected() {
    let yaml = r#"
contracts:
  - { start: "2021-02-01", end: "2021-02-28", quota: 1 }
output:
  actual: hours
  quota: hours
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(matches!(
        err,
        AppError::Config(ref m) if m.contains("output.quota") && m.contains("hours")
    ));

    let yaml = r#"
contracts:
  - { start: "2021-02-01", end: "2021-02-28", quota: 1 }
output:
  week: w
  avg_time: w
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, AppError::Config(ref m) if m.contains("output.avg_time")));
}

#[test]
fn test_output_names_may_repeat_across_tables() {
    // the two tables are exported separately
    let yaml = r#"
contracts:
  - { start: "2021-02-01", end: "2021-02-28", quota: 1 }
output:
  week: id
  person: id
"#;
    assert!(Config::from_yaml(yaml).is_ok());
}

#[test]
fn test_negative_quota_and_zero_sample_rejected() {
    let yaml = r#"
contracts:
  - { start: "2021-02-01", end: "2021-02-28", quota: -1 }
"#;
    assert!(matches!(
        Config::from_yaml(yaml),
        Err(AppError::Config(ref m)) if m.contains("quota")
    ));

    let yaml = r#"
contracts:
  - { start: "2021-02-01", end: "2021-02-28", quota: 1 }
sample:
  num: 0
"#;
    assert!(matches!(
        Config::from_yaml(yaml),
        Err(AppError::Config(ref m)) if m.contains("sample.num")
    ));
}

#[test]
fn test_resolver_surfaces_contract_errors() {
    let inverted = r#"
contracts:
  - { start: "2021-03-01", end: "2021-02-01", quota: 1 }
"#;
    let cfg = Config::from_yaml(inverted).unwrap();
    assert!(matches!(
        cfg.resolver(),
        Err(AppError::InvalidContractRange { .. })
    ));

    let overlapping = r#"
contracts:
  - { start: "2021-02-01", end: "2021-02-28 23:59:59", quota: 1 }
  - { start: "2021-02-15", end: "2021-03-31 23:59:59", quota: 1 }
"#;
    let cfg = Config::from_yaml(overlapping).unwrap();
    assert!(matches!(
        cfg.resolver(),
        Err(AppError::OverlappingContracts {
            first: 1,
            second: 2
        })
    ));

    let bad_date = r#"
contracts:
  - { start: "yesterday", end: "2021-02-01", quota: 1 }
"#;
    let cfg = Config::from_yaml(bad_date).unwrap();
    assert!(matches!(cfg.resolver(), Err(AppError::InvalidDate(_))));
}

#[test]
fn test_default_config_round_trips() {
    let yaml = Config::default().to_yaml().unwrap();
    let cfg = Config::from_yaml(&yaml).unwrap();

    assert_eq!(cfg.contracts.len(), 2);
    assert!(cfg.resolver().is_ok());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Config::load(&dir.path().join("missing.yml")),
        Err(AppError::ConfigLoad(_))
    ));
}
