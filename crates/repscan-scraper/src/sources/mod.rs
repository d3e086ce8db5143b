//! Per-site collection profiles.
//!
//! A [`SourceProfile`] bundles everything site-specific (the ordered period
//! tabs, readiness locators, and the extraction function over a rendered
//! snapshot) so the collector itself stays source-agnostic. Selector
//! strings and label tables live here as data; when a site reworks its
//! markup, the profile changes, not the pipeline.

pub mod consumidor_gov;
pub mod reclame_aqui;

use scraper::Html;

use crate::driver::Locator;
use crate::navigator::PeriodTab;
use crate::types::RawRecord;

/// Site-specific description of how to walk one company profile page.
pub struct SourceProfile {
    /// Element whose visibility confirms the profile page finished its
    /// initial load, when the site needs that check before tab clicks.
    pub entry_wait: Option<Locator>,
    /// Element whose presence confirms the active period panel rendered.
    pub panel_ready: Locator,
    /// Ordered period tabs; traversal attempts each one exactly once.
    pub tabs: Vec<PeriodTab>,
    /// Extracts one period's raw indicators from a page snapshot.
    pub extract: fn(&Html, &str) -> RawRecord,
}
