pub mod collector;
pub mod driver;
pub mod error;
pub mod extract;
pub mod navigator;
pub mod normalize;
pub mod sources;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use collector::{collect_company, CompanyCollection};
pub use driver::{ChromeDriver, Condition, Driver, DriverError, Locator};
pub use error::ScraperError;
pub use navigator::{Pacing, PeriodTab};
pub use types::{MetricName, RawRecord};
