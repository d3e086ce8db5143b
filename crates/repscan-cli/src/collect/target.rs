use chrono::{Datelike, Local};
use repscan_core::{AppConfig, Source, TargetConfig};
use repscan_scraper::{collect_company, ChromeDriver, Driver, Pacing};
use repscan_scraper::sources::{consumidor_gov, reclame_aqui};
use repscan_store::{merge_into_table, WorkbookStore};

/// Collects one target and merges its rows, returning how many were appended.
///
/// A fresh browser is launched per target; dropping the driver at the end of
/// this function closes it, so a wedged page never leaks into the next target.
pub(crate) fn collect_target(
    config: &AppConfig,
    store: &WorkbookStore,
    target: &TargetConfig,
) -> anyhow::Result<usize> {
    let pacing = Pacing::new(config.wait_timeout_secs, config.settle_delay_ms);
    let year = Local::now().year();
    let mut driver = ChromeDriver::launch(config.browser_headless)?;

    match target.source {
        Source::ReclameAqui => {
            let profile = reclame_aqui::profile_for_year(year);
            let collection = collect_company(&mut driver, &target.url, &profile, &pacing)?;
            if collection.is_empty() {
                tracing::warn!(key = %target.entity_key(), "no periods collected; nothing to merge");
                return Ok(0);
            }
            let rows = reclame_aqui::normalize_records(&collection);
            let outcome = merge_into_table(store, &target.entity_key(), &rows)?;
            Ok(outcome.appended)
        }
        Source::ConsumidorGov => {
            let profile = consumidor_gov::profile_for_year(year);
            let collection = collect_company(&mut driver, &target.url, &profile, &pacing)?;
            if collection.is_empty() {
                tracing::warn!(key = %target.entity_key(), "no periods collected; nothing to merge");
                return Ok(0);
            }
            let rows = consumidor_gov::normalize_records(&collection);
            let key = resolve_cg_key(target, &mut driver);
            let outcome = merge_into_table(store, &key, &rows)?;
            Ok(outcome.appended)
        }
    }
}

/// Unnamed Consumidor.gov targets take their key from the page heading;
/// the URL slug is the fallback either way.
fn resolve_cg_key<D: Driver>(target: &TargetConfig, driver: &mut D) -> String {
    if target.name.is_some() {
        return target.entity_key();
    }
    match consumidor_gov::detect_company_name(driver) {
        Some(name) => name,
        None => target.entity_key(),
    }
}
