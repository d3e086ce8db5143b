use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::WorkbookStore;

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

fn scratch_store(name: &str) -> (PathBuf, WorkbookStore) {
    let dir = std::env::temp_dir().join(format!("repscan-merge-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    let store = WorkbookStore::open(&dir).unwrap();
    (dir, store)
}

#[test]
fn sheet_name_strips_forbidden_characters() {
    assert_eq!(sheet_name("acme"), "acme");
    assert_eq!(sheet_name("loja/online: acme?"), "lojaonline acme");
    assert_eq!(sheet_name("  spaced  "), "spaced");
}

#[test]
fn sheet_name_truncates_at_char_boundary() {
    let long = "empresa-brasileira-de-aviação-ltda";
    let name = sheet_name(long);
    assert_eq!(name.chars().count(), 31);
    assert!(long.starts_with(&name));
}

#[test]
fn sheet_name_falls_back_to_default() {
    assert_eq!(sheet_name(""), "default");
    assert_eq!(sheet_name("///"), "default");
}

#[test]
fn merge_creates_table_when_absent() {
    let (dir, store) = scratch_store("create");

    let outcome = merge_into_table(&store, "acme", &[row("geral", Some(7.0))]).unwrap();
    assert_eq!(
        outcome,
        MergeOutcome {
            existing: 0,
            appended: 1
        }
    );

    let loaded: Vec<Row> = store.load_table("acme").unwrap();
    assert_eq!(loaded, vec![row("geral", Some(7.0))]);
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn merge_appends_without_touching_existing_rows() {
    let (dir, store) = scratch_store("append");

    let first = vec![row("seis_meses", Some(8.0)), row("geral", Some(7.5))];
    merge_into_table(&store, "acme", &first).unwrap();

    let second = vec![row("seis_meses", Some(8.2)), row("geral", None)];
    let outcome = merge_into_table(&store, "acme", &second).unwrap();
    assert_eq!(
        outcome,
        MergeOutcome {
            existing: 2,
            appended: 2
        }
    );

    let loaded: Vec<Row> = store.load_table("acme").unwrap();
    assert_eq!(loaded.len(), 4);
    assert_eq!(&loaded[..2], &first[..]);
    assert_eq!(&loaded[2..], &second[..]);
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn merge_with_no_rows_leaves_store_untouched() {
    let (dir, store) = scratch_store("empty");

    let outcome = merge_into_table::<Row>(&store, "acme", &[]).unwrap();
    assert_eq!(
        outcome,
        MergeOutcome {
            existing: 0,
            appended: 0
        }
    );
    assert!(!store.table_path("acme").exists());
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn empty_merge_leaves_existing_table_byte_identical() {
    let (dir, store) = scratch_store("noop");

    let rows = vec![row("seis_meses", Some(8.0)), row("geral", None)];
    merge_into_table(&store, "acme", &rows).unwrap();
    let before = fs::read(store.table_path("acme")).unwrap();

    let outcome = merge_into_table::<Row>(&store, "acme", &[]).unwrap();
    assert_eq!(
        outcome,
        MergeOutcome {
            existing: 0,
            appended: 0
        }
    );

    let after = fs::read(store.table_path("acme")).unwrap();
    assert_eq!(before, after);
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn merge_quarantines_unreadable_table_and_starts_fresh() {
    let (dir, store) = scratch_store("unreadable");

    fs::write(store.table_path("acme"), "period,score\nbroken\n").unwrap();
    let outcome = merge_into_table(&store, "acme", &[row("geral", Some(6.0))]).unwrap();
    assert_eq!(
        outcome,
        MergeOutcome {
            existing: 0,
            appended: 1
        }
    );

    let loaded: Vec<Row> = store.load_table("acme").unwrap();
    assert_eq!(loaded, vec![row("geral", Some(6.0))]);

    let quarantined = fs::read_dir(&dir)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| {
            e.file_name()
                .to_string_lossy()
                .starts_with("acme.unreadable-")
        })
        .count();
    assert_eq!(quarantined, 1);
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn merge_uses_sanitized_sheet_name_for_the_file() {
    let (dir, store) = scratch_store("sanitized");

    merge_into_table(&store, "loja/acme", &[row("geral", None)]).unwrap();
    assert!(store.table_path("lojaacme").exists());
    fs::remove_dir_all(dir).unwrap();
}
