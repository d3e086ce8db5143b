//! Reclame Aqui company-profile collection.
//!
//! The performance card shows five period tabs (`newPerformanceCard-tab-1`
//! through `-5`); the two middle tabs are the current and previous calendar
//! year, so their period names are derived from the clock rather than
//! hardcoded. Indicators render as uniform blocks classified by label
//! substring, with the figure in a `<strong>` child. The aggregate
//! reputation score (`"8.7/10."`) and the period date range sit outside the
//! blocks in fixed locations.

use std::sync::LazyLock;

use chrono::{Datelike, Local};
use regex::Regex;
use scraper::{Html, Selector};

use repscan_core::records::ReclameAquiRecord;

use crate::collector::CompanyCollection;
use crate::driver::Locator;
use crate::extract::{self, LabelRule};
use crate::navigator::PeriodTab;
use crate::normalize;
use crate::sources::SourceProfile;
use crate::types::{MetricName, RawRecord};

static BLOCK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.go4263471347").expect("valid selector"));
static EMPHASIS_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("strong").expect("valid selector"));
static SCORE_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div#ra-new-reputation span[class*='go'] > b[class*='go']")
        .expect("valid selector")
});
static DATE_RANGE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.go2159339046").expect("valid selector"));

static NUMERIC_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d.,]+").expect("valid regex"));
static CONSUMER_SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)nota média.*?([\d.,]+)").expect("valid regex"));

/// Label phrase preceding the date interval, stripped from the raw text.
const DATE_RANGE_LABEL: &str = "período de";

/// Ordered label table for indicator blocks. First matching needle wins;
/// the "avaliadas" block additionally carries the consumer score in its
/// running text.
const LABEL_RULES: &[LabelRule] = &[
    LabelRule {
        needle: "recebeu",
        metric: MetricName::ComplaintCount,
        companion: None,
    },
    LabelRule {
        needle: "Respondeu",
        metric: MetricName::ResponseRate,
        companion: None,
    },
    LabelRule {
        needle: "aguardando resposta",
        metric: MetricName::PendingCount,
        companion: None,
    },
    LabelRule {
        needle: "avaliadas",
        metric: MetricName::EvaluatedCount,
        companion: Some((MetricName::ConsumerScore, &CONSUMER_SCORE_RE)),
    },
    LabelRule {
        needle: "voltariam a fazer negócio",
        metric: MetricName::WouldReturnRate,
        companion: None,
    },
    LabelRule {
        needle: "resolveu",
        metric: MetricName::ResolutionIndex,
        companion: None,
    },
    LabelRule {
        needle: "tempo médio de resposta",
        metric: MetricName::AvgResponseTime,
        companion: None,
    },
];

/// Collection profile for the current calendar year.
#[must_use]
pub fn profile() -> SourceProfile {
    profile_for_year(Local::now().year())
}

/// Collection profile with the two year tabs named after `year` and
/// `year - 1`. Split out so tests are not tied to the clock.
#[must_use]
pub fn profile_for_year(year: i32) -> SourceProfile {
    let tab = |n: u8| Locator::css(format!("#newPerformanceCard-tab-{n}"));
    SourceProfile {
        entry_wait: None,
        panel_ready: Locator::css("div.go4263471347"),
        tabs: vec![
            PeriodTab::new("seis_meses", tab(1)),
            PeriodTab::new("doze_meses", tab(2)),
            PeriodTab::new(format!("ano_{year}"), tab(3)),
            PeriodTab::new(format!("ano_{}", year - 1), tab(4)),
            PeriodTab::new("geral", tab(5)),
        ],
        extract,
    }
}

/// Extracts one period's raw indicators from a profile-page snapshot.
fn extract(doc: &Html, period: &str) -> RawRecord {
    let mut record = RawRecord::new(period);

    if let Some(text) = extract::first_text(doc, &SCORE_SEL) {
        if let Some(m) = NUMERIC_RUN_RE.find(&text) {
            record.set(MetricName::ReputationScore, m.as_str());
        }
    }

    extract::classify_blocks(doc, &BLOCK_SEL, &EMPHASIS_SEL, LABEL_RULES, &mut record);

    if let Some(text) = extract::first_text(doc, &DATE_RANGE_SEL) {
        let range = text
            .split(DATE_RANGE_LABEL)
            .last()
            .unwrap_or("")
            .trim()
            .to_string();
        if !range.is_empty() {
            record.date_range = Some(range);
        }
    }

    record
}

/// Converts a raw collection into typed rows, stamping every row with the
/// run's shared collection timestamp.
#[must_use]
pub fn normalize_records(collection: &CompanyCollection) -> Vec<ReclameAquiRecord> {
    collection
        .records
        .iter()
        .map(|raw| {
            let number = |metric| raw.get(metric).and_then(normalize::parse_leading_number);
            ReclameAquiRecord {
                period_name: raw.period_name.clone(),
                reputation_score: number(MetricName::ReputationScore),
                consumer_score: number(MetricName::ConsumerScore),
                complaint_count: number(MetricName::ComplaintCount),
                response_rate_percent: number(MetricName::ResponseRate),
                resolution_index_percent: number(MetricName::ResolutionIndex),
                would_return_percent: number(MetricName::WouldReturnRate),
                evaluated_count: number(MetricName::EvaluatedCount),
                pending_count: number(MetricName::PendingCount),
                avg_response_time_days: raw
                    .get(MetricName::AvgResponseTime)
                    .and_then(normalize::parse_duration_days),
                period_date_range: raw.date_range.clone().unwrap_or_else(|| "N/A".to_string()),
                collection_date: collection.stamp.date.clone(),
                collection_time: collection.stamp.time.clone(),
            }
        })
        .collect()
}
