//! Fixed per-source record schemas.
//!
//! Each source persists a fixed set of columns; a metric the page did not
//! yield is an explicit `None`, never a column that silently disappears.
//! Serde field names are the persisted CSV header names.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Review sites repscan knows how to collect from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    ReclameAqui,
    ConsumidorGov,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::ReclameAqui => write!(f, "reclame_aqui"),
            Source::ConsumidorGov => write!(f, "consumidor_gov"),
        }
    }
}

impl std::str::FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reclame_aqui" => Ok(Source::ReclameAqui),
            "consumidor_gov" => Ok(Source::ConsumidorGov),
            other => Err(format!(
                "unknown source '{other}' (expected 'reclame_aqui' or 'consumidor_gov')"
            )),
        }
    }
}

/// Date and time-of-day a company collection run finished, shared by every
/// row of that run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionStamp {
    pub date: String,
    pub time: String,
}

impl CollectionStamp {
    #[must_use]
    pub fn from_local(at: DateTime<Local>) -> Self {
        Self {
            date: at.format("%Y-%m-%d").to_string(),
            time: at.format("%H:%M:%S").to_string(),
        }
    }

    #[must_use]
    pub fn now() -> Self {
        Self::from_local(Local::now())
    }
}

/// One reporting period's indicators from a Reclame Aqui company profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReclameAquiRecord {
    pub period_name: String,
    pub reputation_score: Option<f64>,
    pub consumer_score: Option<f64>,
    pub complaint_count: Option<f64>,
    pub response_rate_percent: Option<f64>,
    pub resolution_index_percent: Option<f64>,
    pub would_return_percent: Option<f64>,
    pub evaluated_count: Option<f64>,
    pub pending_count: Option<f64>,
    pub avg_response_time_days: Option<f64>,
    /// Human-readable date interval the period covers; `"N/A"` when the page
    /// did not expose it. Distinct from the numeric missing marker.
    pub period_date_range: String,
    pub collection_date: String,
    pub collection_time: String,
}

/// One reporting period's indicators from a Consumidor.gov.br company profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumidorGovRecord {
    pub period_name: String,
    pub finalized_count: Option<f64>,
    pub solution_index_percent: Option<f64>,
    pub service_satisfaction_score: Option<f64>,
    pub answered_rate_percent: Option<f64>,
    pub avg_response_deadline_days: Option<f64>,
    pub collection_date: String,
    pub collection_time: String,
}
