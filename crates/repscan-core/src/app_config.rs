use std::path::PathBuf;

/// Runtime configuration for collection runs, loaded from environment
/// variables by [`crate::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding one CSV table per company ("workbook").
    pub store_dir: PathBuf,
    /// Path to the YAML target list.
    pub targets_path: PathBuf,
    pub log_level: String,
    /// Upper bound on waits for page elements to appear/become clickable.
    pub wait_timeout_secs: u64,
    /// Fixed delay after a period-tab click, letting async content render.
    pub settle_delay_ms: u64,
    /// Run the browser without a visible window.
    pub browser_headless: bool,
}
