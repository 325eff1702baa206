#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Local, TimeZone, Utc};
use rtimesheet::models::{Columns, Record, RecordSet};
use std::fs;
use std::path::{Path, PathBuf};

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Write `content` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write test file");
    path
}

/// POSIX timestamp of a UTC datetime.
pub fn utc(y: i32, m: u32, d: u32, h: u32) -> i64 {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .expect("valid utc datetime")
        .timestamp()
}

/// POSIX timestamp of a local datetime (contracts are configured in local time).
pub fn local(y: i32, m: u32, d: u32, h: u32) -> i64 {
    Local
        .with_ymd_and_hms(y, m, d, h, 0, 0)
        .earliest()
        .expect("valid local datetime")
        .timestamp()
}

pub fn record(ts: i64, id: &str, hours: f64) -> Record {
    Record::new(ts, id, hours).expect("valid record")
}

pub fn record_set(records: Vec<Record>) -> RecordSet {
    RecordSet::new(records, Columns::default())
}

/// Config with the two default contracts: 2021-02 (28h) and 2021-03 (40h).
pub const CONFIG_YAML: &str = r#"
contracts:
  - start: "2021-02-01 00:00:00"
    end: "2021-02-28 23:59:59"
    quota: 28.0
  - start: "2021-03-01 00:00:00"
    end: "2021-03-31 23:59:59"
    quota: 40.0
columns:
  date: Datum
  duration: Dauer
  id: Anmeldename
output:
  week: week
  avg_time: avg_time
  person: Anmeldename
  actual: Ist
  quota: Soll
  overtime: Differenz
sample:
  num: 200
  id_num: 10
"#;

/// Time sheet for CONFIG_YAML, with an extra ignored column.
///
/// - ab12cde: 30h in February → 2.0h over 28h
/// - xy34zzz: 20h in February + 45h in March → 65h vs 68h, no overtime
/// - qq99abc: 50h in March → 10.0h over 40h
pub fn sample_sheet() -> String {
    let feb = local(2021, 2, 10, 12);
    let mar = local(2021, 3, 10, 12);

    let rows = [
        (feb, "ab12cde", 30.0),
        (feb, "xy34zzz", 20.0),
        (mar, "xy34zzz", 45.0),
        (mar, "qq99abc", 25.0),
        (mar + 3600, "qq99abc", 25.0),
    ];

    let mut csv = String::from("Kurs,Datum,Anmeldename,Dauer\n");
    for (ts, id, h) in rows {
        csv.push_str(&format!("GBS,{ts},{id},{h}\n"));
    }
    csv
}
