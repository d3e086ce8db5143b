//! Per-company collection: drive every period tab, extract, stamp.

use scraper::Html;

use repscan_core::records::CollectionStamp;

use crate::driver::{Condition, Driver};
use crate::error::ScraperError;
use crate::navigator::{self, Pacing};
use crate::sources::SourceProfile;
use crate::types::RawRecord;

/// Everything one company profile yielded in a single run: the ordered raw
/// period records plus the one timestamp shared by all of them.
#[derive(Debug)]
pub struct CompanyCollection {
    pub records: Vec<RawRecord>,
    pub stamp: CollectionStamp,
}

impl CompanyCollection {
    /// True when no period produced a record; nothing to merge, not an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Collect all reporting periods of one company profile.
///
/// State machine: navigate → (per period tab: activate → wait panel →
/// snapshot → extract) → finalize. A period whose activation or panel wait
/// times out is skipped with a warning; the run continues with the next tab.
/// Finalization assigns one collection timestamp for the whole run.
///
/// # Errors
///
/// Returns an error when navigation fails, when the profile's entry element
/// never appears, or when a page snapshot cannot be taken. Per-period
/// failures never surface here; they degrade to skipped periods.
pub fn collect_company<D: Driver>(
    driver: &mut D,
    url: &str,
    profile: &SourceProfile,
    pacing: &Pacing,
) -> Result<CompanyCollection, ScraperError> {
    driver.navigate(url)?;

    if let Some(entry) = &profile.entry_wait {
        driver
            .wait_for(entry, Condition::Visible, pacing.wait_timeout)
            .map_err(|source| ScraperError::PageNotReady {
                url: url.to_string(),
                source,
            })?;
    }

    let mut records = Vec::new();
    for tab in &profile.tabs {
        if let Err(error) = navigator::activate_period(driver, tab, pacing) {
            tracing::warn!(period = %tab.id, %error, "period activation failed; skipping");
            continue;
        }

        if let Err(error) =
            driver.wait_for(&profile.panel_ready, Condition::Present, pacing.wait_timeout)
        {
            tracing::warn!(period = %tab.id, %error, "period panel never rendered; skipping");
            continue;
        }

        let html = driver.page_html()?;
        let doc = Html::parse_document(&html);
        records.push((profile.extract)(&doc, &tab.id));
        tracing::debug!(period = %tab.id, "period collected");
    }

    Ok(CompanyCollection {
        records,
        stamp: CollectionStamp::now(),
    })
}

#[cfg(test)]
#[path = "collector_test.rs"]
mod tests;
