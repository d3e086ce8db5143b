use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::records::Source;
use crate::ConfigError;

/// One company profile to collect, as declared in `config/targets.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Display name; when absent the key is derived from the URL (or, for
    /// Consumidor.gov, detected from the loaded page).
    pub name: Option<String>,
    pub url: String,
    pub source: Source,
}

impl TargetConfig {
    /// Raw entity key for this target: the display name when present,
    /// otherwise the last non-empty path segment of the URL.
    ///
    /// The store layer sanitizes and truncates this into a sheet name.
    #[must_use]
    pub fn entity_key(&self) -> String {
        if let Some(name) = &self.name {
            let trimmed = name.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
        slug_from_url(&self.url)
    }
}

/// Last non-empty path segment of a profile URL, e.g.
/// `https://www.reclameaqui.com.br/empresa/banco-do-brasil/` → `banco-do-brasil`.
#[must_use]
pub fn slug_from_url(url: &str) -> String {
    url.trim_end_matches('/')
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or("default")
        .to_string()
}

#[derive(Debug, Deserialize)]
pub struct TargetsFile {
    pub targets: Vec<TargetConfig>,
}

/// Load and validate the target list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_targets(path: &Path) -> Result<TargetsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::TargetsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let targets_file: TargetsFile = serde_yaml::from_str(&content)?;

    validate_targets(&targets_file)?;

    Ok(targets_file)
}

fn validate_targets(targets_file: &TargetsFile) -> Result<(), ConfigError> {
    if targets_file.targets.is_empty() {
        return Err(ConfigError::Validation(
            "target list must contain at least one entry".to_string(),
        ));
    }

    for (idx, target) in targets_file.targets.iter().enumerate() {
        if target.url.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "target #{} has an empty url",
                idx + 1
            )));
        }
        if let Some(name) = &target.name {
            if name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "target #{} has a blank name; omit the field instead",
                    idx + 1
                )));
            }
        }
    }

    Ok(())
}
