//! Flat-file persistence for collected indicator tables.
//!
//! Data lives in a "workbook": a directory holding one CSV table per
//! collected entity. Tables are append-only; a merge never rewrites rows
//! that are already on disk.

mod error;
mod merge;
mod workbook;

pub use error::StoreError;
pub use merge::{merge_into_table, sheet_name, MergeOutcome};
pub use workbook::WorkbookStore;
