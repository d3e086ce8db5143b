//! Raw, pre-normalization shapes produced by the extractors.

use std::collections::BTreeMap;

/// Named indicators the two sources expose. Each source fills a subset;
/// an absent entry in a [`RawRecord`] means the page did not yield it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricName {
    // Reclame Aqui
    ReputationScore,
    ConsumerScore,
    ComplaintCount,
    ResponseRate,
    PendingCount,
    EvaluatedCount,
    WouldReturnRate,
    ResolutionIndex,
    AvgResponseTime,
    // Consumidor.gov.br
    FinalizedCount,
    SolutionIndex,
    ServiceSatisfaction,
    AnsweredRate,
    AvgResponseDeadline,
}

/// Raw string values extracted for one reporting period.
///
/// A metric the page did not expose is simply absent, never an empty string
/// standing in for zero. Normalization later maps absence, `"n/a"`, and
/// `"n/d"` alike to the explicit missing marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub period_name: String,
    /// Human-readable interval the period covers, when the page shows one.
    pub date_range: Option<String>,
    values: BTreeMap<MetricName, String>,
}

impl RawRecord {
    #[must_use]
    pub fn new(period_name: impl Into<String>) -> Self {
        Self {
            period_name: period_name.into(),
            date_range: None,
            values: BTreeMap::new(),
        }
    }

    pub fn set(&mut self, metric: MetricName, raw: impl Into<String>) {
        self.values.insert(metric, raw.into());
    }

    #[must_use]
    pub fn get(&self, metric: MetricName) -> Option<&str> {
        self.values.get(&metric).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
