//! Rendering-capability seam between collection logic and the browser.
//!
//! Collection code never touches `headless_chrome` directly: it drives a
//! [`Driver`], waits for page state, clicks period tabs, and takes whole-page
//! HTML snapshots that the extractors parse offline. Tests substitute a fake
//! driver with canned panels at the same seam.
//!
//! A driver owns its browser session; dropping it ends the session, so
//! closure happens on every exit path including errors.

mod chrome;

use std::time::Duration;

use thiserror::Error;

pub use chrome::ChromeDriver;

/// How to find an element on the current page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    Css(String),
    XPath(String),
}

impl Locator {
    pub fn css(selector: impl Into<String>) -> Self {
        Locator::Css(selector.into())
    }

    pub fn xpath(expression: impl Into<String>) -> Self {
        Locator::XPath(expression.into())
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locator::Css(s) => write!(f, "css \"{s}\""),
            Locator::XPath(s) => write!(f, "xpath \"{s}\""),
        }
    }
}

/// Page state a bounded wait should reach before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Present,
    Visible,
    Clickable,
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Present => write!(f, "present"),
            Condition::Visible => write!(f, "visible"),
            Condition::Clickable => write!(f, "clickable"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("timed out after {timeout_secs}s waiting for {locator} to become {condition}")]
    WaitTimeout {
        locator: String,
        condition: Condition,
        timeout_secs: u64,
    },

    #[error("no element matches {locator}")]
    NotFound { locator: String },

    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("browser session error: {0}")]
    Session(String),
}

/// Minimal capability the collection pipeline needs from a rendered page.
pub trait Driver {
    /// Load `url` and block until the page has navigated.
    fn navigate(&mut self, url: &str) -> Result<(), DriverError>;

    /// Block until `locator` reaches `condition`, or fail after `timeout`.
    fn wait_for(
        &mut self,
        locator: &Locator,
        condition: Condition,
        timeout: Duration,
    ) -> Result<(), DriverError>;

    /// Click the first element matching `locator`.
    fn click(&mut self, locator: &Locator) -> Result<(), DriverError>;

    /// Snapshot of the current DOM as HTML.
    fn page_html(&mut self) -> Result<String, DriverError>;

    /// Current document title.
    fn page_title(&mut self) -> Result<String, DriverError>;
}
