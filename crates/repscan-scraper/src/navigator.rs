//! Period-tab navigation: one bounded wait, one click, one settle delay.

use std::time::Duration;

use crate::driver::{Condition, Driver, DriverError, Locator};

/// One reporting-period tab: the period identifier used as `period_name` in
/// output rows, and the locator that activates its panel. Table order is
/// traversal order.
#[derive(Debug, Clone)]
pub struct PeriodTab {
    pub id: String,
    pub locator: Locator,
}

impl PeriodTab {
    pub fn new(id: impl Into<String>, locator: Locator) -> Self {
        Self {
            id: id.into(),
            locator,
        }
    }
}

/// Wait bounds for the collection loop.
#[derive(Debug, Clone)]
pub struct Pacing {
    /// Upper bound on element waits.
    pub wait_timeout: Duration,
    /// Fixed delay after a tab click so asynchronously loaded panel content
    /// can populate before the snapshot is taken.
    pub settle: Duration,
}

impl Pacing {
    #[must_use]
    pub fn new(wait_timeout_secs: u64, settle_delay_ms: u64) -> Self {
        Self {
            wait_timeout: Duration::from_secs(wait_timeout_secs),
            settle: Duration::from_millis(settle_delay_ms),
        }
    }
}

/// Activate one period tab: wait for the control to become clickable, click
/// it, then sleep the settle delay.
///
/// # Errors
///
/// Returns the underlying [`DriverError`] when the control never becomes
/// clickable within the bound or the click fails. Callers skip the period
/// and move on; activation is never retried.
pub fn activate_period<D: Driver>(
    driver: &mut D,
    tab: &PeriodTab,
    pacing: &Pacing,
) -> Result<(), DriverError> {
    driver.wait_for(&tab.locator, Condition::Clickable, pacing.wait_timeout)?;
    driver.click(&tab.locator)?;
    std::thread::sleep(pacing.settle);
    Ok(())
}
