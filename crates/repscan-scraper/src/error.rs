use thiserror::Error;

use crate::driver::DriverError;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error("profile page {url} did not become ready: {source}")]
    PageNotReady {
        url: String,
        #[source]
        source: DriverError,
    },
}
