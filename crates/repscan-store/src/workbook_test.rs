use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Row {
    period: String,
    score: Option<f64>,
}

fn row(period: &str, score: Option<f64>) -> Row {
    Row {
        period: period.to_string(),
        score,
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "repscan-workbook-{}-{name}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn open_creates_the_directory() {
    let dir = scratch_dir("open");
    assert!(!dir.exists());
    let store = WorkbookStore::open(&dir).unwrap();
    assert!(store.dir().is_dir());
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn save_then_load_round_trips_rows() {
    let dir = scratch_dir("roundtrip");
    let store = WorkbookStore::open(&dir).unwrap();

    let rows = vec![row("seis_meses", Some(8.7)), row("geral", None)];
    store.save_table("acme", &rows).unwrap();

    let loaded: Vec<Row> = store.load_table("acme").unwrap();
    assert_eq!(loaded, rows);
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn load_missing_table_is_not_found() {
    let dir = scratch_dir("missing");
    let store = WorkbookStore::open(&dir).unwrap();

    let err = store.load_table::<Row>("nope").unwrap_err();
    assert!(matches!(err, StoreError::TableNotFound { ref sheet } if sheet == "nope"));
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn load_garbage_table_is_a_csv_error() {
    let dir = scratch_dir("garbage");
    let store = WorkbookStore::open(&dir).unwrap();

    fs::write(store.table_path("acme"), "period,score\nonly-one-field\n").unwrap();
    let err = store.load_table::<Row>("acme").unwrap_err();
    assert!(matches!(err, StoreError::Csv { .. }));
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn save_replaces_previous_contents() {
    let dir = scratch_dir("replace");
    let store = WorkbookStore::open(&dir).unwrap();

    store.save_table("acme", &[row("a", Some(1.0))]).unwrap();
    store.save_table("acme", &[row("b", Some(2.0))]).unwrap();

    let loaded: Vec<Row> = store.load_table("acme").unwrap();
    assert_eq!(loaded, vec![row("b", Some(2.0))]);
    assert!(!store.dir().join("acme.csv.tmp").exists());
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn quarantine_moves_table_aside() {
    let dir = scratch_dir("quarantine");
    let store = WorkbookStore::open(&dir).unwrap();

    store.save_table("acme", &[row("a", None)]).unwrap();
    let aside = store.quarantine_table("acme", "20260829").unwrap();

    assert!(!store.table_path("acme").exists());
    assert!(aside.ends_with("acme.unreadable-20260829.csv"));
    assert!(aside.exists());
    fs::remove_dir_all(dir).unwrap();
}
