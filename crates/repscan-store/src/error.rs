use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested table has no file on disk yet.
    #[error("table '{sheet}' does not exist")]
    TableNotFound { sheet: String },

    #[error("i/o error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed csv in {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
