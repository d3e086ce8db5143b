use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::StoreError;

/// A directory of CSV tables, one file per sheet.
///
/// Tables are written whole on save; readers always see either the old
/// file or the new one, never a half-written table, because writes go
/// through a `.tmp` sibling followed by a rename.
#[derive(Debug, Clone)]
pub struct WorkbookStore {
    dir: PathBuf,
}

impl WorkbookStore {
    /// Opens the workbook at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn table_path(&self, sheet: &str) -> PathBuf {
        self.dir.join(format!("{sheet}.csv"))
    }

    /// Reads every row of `sheet` into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TableNotFound`] when the file does not exist,
    /// [`StoreError::Csv`] when the file exists but cannot be decoded.
    pub fn load_table<T: DeserializeOwned>(&self, sheet: &str) -> Result<Vec<T>, StoreError> {
        let path = self.table_path(sheet);
        if !path.exists() {
            return Err(StoreError::TableNotFound {
                sheet: sheet.to_string(),
            });
        }

        let mut reader = csv::Reader::from_path(&path).map_err(|source| StoreError::Csv {
            path: path.clone(),
            source,
        })?;
        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row.map_err(|source| StoreError::Csv {
                path: path.clone(),
                source,
            })?);
        }
        Ok(rows)
    }

    /// Writes `rows` as the full contents of `sheet`, replacing the file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Csv`] on failure; the
    /// previous table is left untouched in that case.
    pub fn save_table<T: Serialize>(&self, sheet: &str, rows: &[T]) -> Result<(), StoreError> {
        let path = self.table_path(sheet);
        let tmp = self.dir.join(format!("{sheet}.csv.tmp"));

        {
            let mut writer =
                csv::Writer::from_path(&tmp).map_err(|source| StoreError::Csv {
                    path: tmp.clone(),
                    source,
                })?;
            for row in rows {
                writer.serialize(row).map_err(|source| StoreError::Csv {
                    path: tmp.clone(),
                    source,
                })?;
            }
            writer.flush().map_err(|source| StoreError::Io {
                path: tmp.clone(),
                source,
            })?;
        }

        fs::rename(&tmp, &path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })
    }

    /// Moves an undecodable table aside so the next save starts clean.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the rename fails.
    pub fn quarantine_table(&self, sheet: &str, suffix: &str) -> Result<PathBuf, StoreError> {
        let path = self.table_path(sheet);
        let aside = self.dir.join(format!("{sheet}.unreadable-{suffix}.csv"));
        fs::rename(&path, &aside).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(aside)
    }
}

#[cfg(test)]
#[path = "workbook_test.rs"]
mod tests;
