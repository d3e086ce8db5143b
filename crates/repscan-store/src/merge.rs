use chrono::Local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{StoreError, WorkbookStore};

/// Longest sheet name accepted by common spreadsheet tools.
const MAX_SHEET_CHARS: usize = 31;

/// Characters spreadsheet tools reject in a sheet name.
const FORBIDDEN: &[char] = &['\\', '/', '*', '?', ':', '[', ']'];

/// Row counts observed by a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Rows already on disk before the merge.
    pub existing: usize,
    /// Rows appended by this merge.
    pub appended: usize,
}

/// Derives a sheet name from an entity key.
///
/// Strips characters spreadsheet tools forbid and truncates at a char
/// boundary to 31 characters. A key that strips down to nothing becomes
/// `default`.
#[must_use]
pub fn sheet_name(key: &str) -> String {
    let cleaned: String = key
        .trim()
        .chars()
        .filter(|c| !FORBIDDEN.contains(c))
        .take(MAX_SHEET_CHARS)
        .collect();
    if cleaned.is_empty() {
        "default".to_string()
    } else {
        cleaned
    }
}

/// Appends `new_rows` to the table for `key`, creating it if absent.
///
/// Rows already on disk are never modified or deduplicated; re-running a
/// collection appends a fresh batch. An empty `new_rows` leaves the store
/// untouched. An existing table that cannot be decoded is moved aside as
/// `<sheet>.unreadable-<timestamp>.csv` and the merge restarts from an
/// empty baseline.
///
/// # Errors
///
/// Returns [`StoreError`] when the table cannot be read (other than not
/// existing or being undecodable) or the merged table cannot be written.
pub fn merge_into_table<T>(
    store: &WorkbookStore,
    key: &str,
    new_rows: &[T],
) -> Result<MergeOutcome, StoreError>
where
    T: Serialize + DeserializeOwned + Clone,
{
    let sheet = sheet_name(key);

    if new_rows.is_empty() {
        tracing::info!(%sheet, "no rows collected; store untouched");
        return Ok(MergeOutcome {
            existing: 0,
            appended: 0,
        });
    }

    let mut rows: Vec<T> = match store.load_table(&sheet) {
        Ok(rows) => rows,
        Err(StoreError::TableNotFound { .. }) => Vec::new(),
        Err(StoreError::Csv { path, source }) => {
            let stamp = Local::now().format("%Y%m%d%H%M%S").to_string();
            let aside = store.quarantine_table(&sheet, &stamp)?;
            tracing::warn!(
                table = %path.display(),
                moved_to = %aside.display(),
                %source,
                "existing table unreadable; starting a fresh one"
            );
            Vec::new()
        }
        Err(other) => return Err(other),
    };

    let existing = rows.len();
    rows.extend_from_slice(new_rows);
    store.save_table(&sheet, &rows)?;

    tracing::info!(%sheet, existing, appended = new_rows.len(), "table merged");
    Ok(MergeOutcome {
        existing,
        appended: new_rows.len(),
    })
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod tests;
