//! The `discover` command: harvest company profile links from a
//! Consumidor.gov listing page and print them as a targets.yaml snippet.

use repscan_core::AppConfig;
use repscan_scraper::sources::consumidor_gov;
use repscan_scraper::{ChromeDriver, Pacing};

pub(crate) fn run_discover(
    config: &AppConfig,
    url: &str,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let pacing = Pacing::new(config.wait_timeout_secs, config.settle_delay_ms);
    let mut driver = ChromeDriver::launch(config.browser_headless)?;

    let companies = consumidor_gov::discover_companies(&mut driver, url, limit, &pacing)?;
    if companies.is_empty() {
        anyhow::bail!("no company links found on {url}");
    }

    tracing::info!(count = companies.len(), "companies discovered");
    println!("targets:");
    for company in &companies {
        println!("  - name: \"{}\"", company.name.replace('"', "'"));
        println!("    url: \"{}\"", company.url);
        println!("    source: consumidor_gov");
    }
    Ok(())
}
