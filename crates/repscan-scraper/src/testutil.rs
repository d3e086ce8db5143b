//! Test double for the [`Driver`] seam: canned HTML panels keyed by the
//! locator that activates them, plus per-locator wait failures.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use crate::driver::{Condition, Driver, DriverError, Locator};

pub(crate) struct FakeDriver {
    landing_html: String,
    current_html: String,
    title: String,
    /// Panel HTML swapped in when the keyed locator is clicked.
    panels: HashMap<String, String>,
    /// Locators whose waits always time out.
    failing: HashSet<String>,
    pub(crate) navigated: Vec<String>,
    pub(crate) clicked: Vec<String>,
}

impl FakeDriver {
    pub(crate) fn new(landing_html: impl Into<String>) -> Self {
        let landing_html = landing_html.into();
        Self {
            current_html: landing_html.clone(),
            landing_html,
            title: String::new(),
            panels: HashMap::new(),
            failing: HashSet::new(),
            navigated: Vec::new(),
            clicked: Vec::new(),
        }
    }

    pub(crate) fn with_panel(mut self, locator: &Locator, html: impl Into<String>) -> Self {
        self.panels.insert(locator.to_string(), html.into());
        self
    }

    pub(crate) fn with_failing(mut self, locator: &Locator) -> Self {
        self.failing.insert(locator.to_string());
        self
    }

    pub(crate) fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Driver for FakeDriver {
    fn navigate(&mut self, url: &str) -> Result<(), DriverError> {
        self.navigated.push(url.to_string());
        self.current_html = self.landing_html.clone();
        Ok(())
    }

    fn wait_for(
        &mut self,
        locator: &Locator,
        condition: Condition,
        timeout: Duration,
    ) -> Result<(), DriverError> {
        if self.failing.contains(&locator.to_string()) {
            return Err(DriverError::WaitTimeout {
                locator: locator.to_string(),
                condition,
                timeout_secs: timeout.as_secs(),
            });
        }
        Ok(())
    }

    fn click(&mut self, locator: &Locator) -> Result<(), DriverError> {
        let key = locator.to_string();
        self.clicked.push(key.clone());
        if let Some(html) = self.panels.get(&key) {
            self.current_html = html.clone();
        }
        Ok(())
    }

    fn page_html(&mut self) -> Result<String, DriverError> {
        Ok(self.current_html.clone())
    }

    fn page_title(&mut self) -> Result<String, DriverError> {
        Ok(self.title.clone())
    }
}
