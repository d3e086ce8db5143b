//! The `collect` command: walk the target list and merge each company's
//! indicators into the workbook. Per-target failures are logged and skipped
//! so one broken profile does not abort the full run.

use std::path::Path;
use std::str::FromStr;

use repscan_core::{AppConfig, Source, TargetConfig};
use repscan_store::WorkbookStore;

mod target;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunTotals {
    pub succeeded: usize,
    pub failed: usize,
    pub rows_appended: usize,
}

/// Keeps only targets matching the source filter, if one is given.
pub(crate) fn filter_targets(targets: Vec<TargetConfig>, source: Option<Source>) -> Vec<TargetConfig> {
    match source {
        Some(wanted) => targets.into_iter().filter(|t| t.source == wanted).collect(),
        None => targets,
    }
}

pub(crate) fn run_collect(
    config: &AppConfig,
    targets_override: Option<&Path>,
    source_filter: Option<&str>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let source = source_filter
        .map(Source::from_str)
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))?;

    let targets_path = targets_override.unwrap_or(&config.targets_path);
    let targets_file = repscan_core::load_targets(targets_path)?;
    let targets = filter_targets(targets_file.targets, source);

    if targets.is_empty() {
        anyhow::bail!("no targets to collect (after filtering)");
    }

    if dry_run {
        println!("dry-run: would collect {} targets:", targets.len());
        for t in &targets {
            println!("  [{}] {}", t.source, t.entity_key());
        }
        return Ok(());
    }

    let store = WorkbookStore::open(&config.store_dir)?;
    let mut totals = RunTotals::default();

    for t in &targets {
        tracing::info!(source = %t.source, key = %t.entity_key(), "collecting target");
        match target::collect_target(config, &store, t) {
            Ok(appended) => {
                totals.succeeded += 1;
                totals.rows_appended += appended;
            }
            Err(error) => {
                totals.failed += 1;
                tracing::error!(key = %t.entity_key(), %error, "target failed; continuing");
            }
        }
    }

    println!(
        "collected {} targets ({} failed), {} rows appended",
        totals.succeeded, totals.failed, totals.rows_appended
    );

    if totals.succeeded == 0 {
        anyhow::bail!("all {} targets failed", totals.failed);
    }
    if totals.failed > 0 {
        tracing::warn!(failed = totals.failed, "run completed with failures");
    }
    Ok(())
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
