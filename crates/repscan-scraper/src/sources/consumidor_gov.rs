//! Consumidor.gov.br company-profile collection.
//!
//! Unlike Reclame Aqui's uniform indicator blocks, this site renders one
//! dedicated element per indicator inside the active period panel
//! (`div.tab-pane.active`), so extraction is a per-metric selector table.
//! The two year tabs have no stable ids, just anchors labeled with the
//! year itself, which is why their locators are text-contains XPath
//! expressions built from the clock.

use std::sync::LazyLock;

use chrono::{Datelike, Local};
use scraper::{Html, Selector};

use repscan_core::records::ConsumidorGovRecord;

use crate::collector::CompanyCollection;
use crate::driver::{Driver, Locator};
use crate::extract;
use crate::navigator::PeriodTab;
use crate::normalize;
use crate::sources::SourceProfile;
use crate::types::{MetricName, RawRecord};

static FINALIZED_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.tab-pane.active span.indicadorTotal").expect("valid selector")
});
static SOLUTION_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.tab-pane.active div[id^='solucao'] .fonteResultado")
        .expect("valid selector")
});
static SATISFACTION_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.tab-pane.active div[id^='atendimento'] .fonteResultado")
        .expect("valid selector")
});
static ANSWERED_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.tab-pane.active div[id^='respondidas'] .fonteResultado")
        .expect("valid selector")
});
static DEADLINE_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.tab-pane.active div[id^='prazo'] .fonteResultadoDia")
        .expect("valid selector")
});
static LISTING_CONTAINER_SEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("#conteudo-decorator fieldset").expect("valid selector")
});

/// Candidate locations for the company name on a loaded profile page, in
/// preference order.
const NAME_CANDIDATES: &[&str] = &[
    "div.perfil-empresa h1",
    "h1.nome-empresa",
    "div#conteudo-decorator h1",
];

fn metric_selectors() -> [(MetricName, &'static Selector); 5] {
    [
        (MetricName::FinalizedCount, &*FINALIZED_SEL),
        (MetricName::SolutionIndex, &*SOLUTION_SEL),
        (MetricName::ServiceSatisfaction, &*SATISFACTION_SEL),
        (MetricName::AnsweredRate, &*ANSWERED_SEL),
        (MetricName::AvgResponseDeadline, &*DEADLINE_SEL),
    ]
}

/// Collection profile for the current calendar year.
#[must_use]
pub fn profile() -> SourceProfile {
    profile_for_year(Local::now().year())
}

/// Collection profile with year tabs for `year` and `year - 1`.
#[must_use]
pub fn profile_for_year(year: i32) -> SourceProfile {
    SourceProfile {
        entry_wait: Some(Locator::css(".abas-perfil")),
        panel_ready: Locator::css("div.tab-pane.active"),
        tabs: vec![
            PeriodTab::new("ultimos_30_dias", Locator::css("#link_tab_dia")),
            PeriodTab::new("ultimos_6_meses", Locator::css("#link_tab_mes")),
            PeriodTab::new(format!("ano_{year}"), year_tab_locator(year)),
            PeriodTab::new(format!("ano_{}", year - 1), year_tab_locator(year - 1)),
            PeriodTab::new("geral", Locator::css("#link_tab_ano")),
        ],
        extract,
    }
}

fn year_tab_locator(year: i32) -> Locator {
    Locator::xpath(format!(
        "//ul[contains(@class, 'abas-perfil')]//a[contains(text(), '{year}')]"
    ))
}

/// Extracts one period's raw indicators from the active panel of a
/// profile-page snapshot. A missing element leaves its metric absent and
/// extraction continues with the rest.
fn extract(doc: &Html, period: &str) -> RawRecord {
    let mut record = RawRecord::new(period);
    for (metric, selector) in metric_selectors() {
        if let Some(text) = extract::first_text(doc, selector) {
            record.set(metric, text);
        }
    }
    record
}

/// Converts a raw collection into typed rows, stamping every row with the
/// run's shared collection timestamp.
#[must_use]
pub fn normalize_records(collection: &CompanyCollection) -> Vec<ConsumidorGovRecord> {
    collection
        .records
        .iter()
        .map(|raw| {
            let number = |metric| raw.get(metric).and_then(normalize::parse_locale_number);
            ConsumidorGovRecord {
                period_name: raw.period_name.clone(),
                finalized_count: number(MetricName::FinalizedCount),
                solution_index_percent: number(MetricName::SolutionIndex),
                service_satisfaction_score: number(MetricName::ServiceSatisfaction),
                answered_rate_percent: number(MetricName::AnsweredRate),
                avg_response_deadline_days: number(MetricName::AvgResponseDeadline),
                collection_date: collection.stamp.date.clone(),
                collection_time: collection.stamp.time.clone(),
            }
        })
        .collect()
}

/// Best-effort company-name detection from an already loaded profile page:
/// tries each heading candidate, then falls back to the document title
/// (keeping only the part before a `" - "` separator).
pub fn detect_company_name<D: Driver>(driver: &mut D) -> Option<String> {
    if let Ok(html) = driver.page_html() {
        let doc = Html::parse_document(&html);
        for candidate in NAME_CANDIDATES {
            let selector = Selector::parse(candidate).expect("valid selector");
            if let Some(text) = extract::first_text(&doc, &selector) {
                return Some(text);
            }
        }
    }

    let title = driver.page_title().ok()?;
    let head = title.split(" - ").next().unwrap_or("").trim().to_string();
    if head.is_empty() {
        None
    } else {
        Some(head)
    }
}

/// A company profile link found on the public listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredCompany {
    pub name: String,
    pub url: String,
}

/// Harvests `(name, profile-url)` pairs from a company listing page.
///
/// Keeps anchors pointing at `/pages/empresa/…/perfil` inside the listing
/// container only, deduplicates by URL preserving first-seen order, and
/// stops at `limit` when given.
///
/// # Errors
///
/// Returns an error when navigation fails, the listing container never
/// appears, or the page snapshot cannot be taken.
pub fn discover_companies<D: Driver>(
    driver: &mut D,
    listing_url: &str,
    limit: Option<usize>,
    pacing: &crate::navigator::Pacing,
) -> Result<Vec<DiscoveredCompany>, crate::error::ScraperError> {
    use crate::driver::Condition;

    let container = Locator::xpath(
        "//*[@id='conteudo-decorator']/div/div[3]/fieldset/div[1]/div[1]".to_string(),
    );

    driver.navigate(listing_url)?;
    driver.wait_for(&container, Condition::Present, pacing.wait_timeout)?;

    let html = driver.page_html()?;
    Ok(parse_listing(&html, limit))
}

fn parse_listing(html: &str, limit: Option<usize>) -> Vec<DiscoveredCompany> {
    let doc = Html::parse_document(html);
    let anchors = Selector::parse("a[href]").expect("valid selector");

    let mut seen = std::collections::HashSet::new();
    let mut companies = Vec::new();

    // Only anchors inside the listing container count; profile links
    // elsewhere on the page (menus, highlight sidebars) are not results.
    'containers: for container in doc.select(&LISTING_CONTAINER_SEL) {
        for anchor in container.select(&anchors) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            if !href.contains("/pages/empresa/") || !href.contains("/perfil") {
                continue;
            }
            let name = extract::text_of(anchor);
            if name.is_empty() || !seen.insert(href.to_string()) {
                continue;
            }
            companies.push(DiscoveredCompany {
                name,
                url: href.to_string(),
            });
            if limit.is_some_and(|max| companies.len() >= max) {
                break 'containers;
            }
        }
    }

    companies
}
