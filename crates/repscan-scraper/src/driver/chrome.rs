//! `headless_chrome` implementation of the [`Driver`] trait.
//!
//! Waits are implemented as a poll loop over `find_element` with a fixed
//! interval, bounded by the caller's timeout. `Visible` and `Clickable` are
//! both approximated by the element reporting a box model: an element
//! without layout cannot be scrolled to or clicked.

use std::sync::Arc;
use std::time::{Duration, Instant};

use headless_chrome::{Browser, Element, LaunchOptions, Tab};

use super::{Condition, Driver, DriverError, Locator};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// One Chrome session driving one tab. Dropping the value closes the browser.
pub struct ChromeDriver {
    _browser: Browser,
    tab: Arc<Tab>,
}

impl ChromeDriver {
    /// Launch a new Chrome session with a single blank tab.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Session`] if Chrome cannot be launched or the
    /// initial tab cannot be created.
    pub fn launch(headless: bool) -> Result<Self, DriverError> {
        let options = LaunchOptions::default_builder()
            .headless(headless)
            .build()
            .map_err(|e| DriverError::Session(e.to_string()))?;
        let browser = Browser::new(options).map_err(|e| DriverError::Session(e.to_string()))?;
        let tab = browser
            .new_tab()
            .map_err(|e| DriverError::Session(e.to_string()))?;
        Ok(Self {
            _browser: browser,
            tab,
        })
    }

    fn try_find(&self, locator: &Locator) -> Option<Element<'_>> {
        match locator {
            Locator::Css(selector) => self.tab.find_element(selector).ok(),
            Locator::XPath(expression) => self.tab.find_element_by_xpath(expression).ok(),
        }
    }
}

impl Driver for ChromeDriver {
    fn navigate(&mut self, url: &str) -> Result<(), DriverError> {
        self.tab
            .navigate_to(url)
            .map_err(|e| DriverError::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        self.tab
            .wait_until_navigated()
            .map_err(|e| DriverError::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }

    fn wait_for(
        &mut self,
        locator: &Locator,
        condition: Condition,
        timeout: Duration,
    ) -> Result<(), DriverError> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(element) = self.try_find(locator) {
                let ready = match condition {
                    Condition::Present => true,
                    Condition::Visible | Condition::Clickable => element.get_box_model().is_ok(),
                };
                if ready {
                    return Ok(());
                }
            }
            if Instant::now() >= deadline {
                return Err(DriverError::WaitTimeout {
                    locator: locator.to_string(),
                    condition,
                    timeout_secs: timeout.as_secs(),
                });
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }

    fn click(&mut self, locator: &Locator) -> Result<(), DriverError> {
        let element = self.try_find(locator).ok_or_else(|| DriverError::NotFound {
            locator: locator.to_string(),
        })?;
        element
            .click()
            .map_err(|e| DriverError::Session(e.to_string()))?;
        Ok(())
    }

    fn page_html(&mut self) -> Result<String, DriverError> {
        self.tab
            .get_content()
            .map_err(|e| DriverError::Session(e.to_string()))
    }

    fn page_title(&mut self) -> Result<String, DriverError> {
        self.tab
            .get_title()
            .map_err(|e| DriverError::Session(e.to_string()))
    }
}
