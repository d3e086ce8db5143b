//! Selector- and label-driven extraction over rendered HTML snapshots.
//!
//! The block classifier implements the Reclame Aqui style of page: a list of
//! visually identical "indicator blocks", each carrying a label sentence and
//! an emphasized figure. Classification tests each block's full text against
//! an ordered table of [`LabelRule`]s, first match wins; the rule table is
//! data owned by the source profile, so a wording change on the site is a
//! table edit rather than a logic change.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::types::{MetricName, RawRecord};

/// Maps a label substring to the metric its block carries.
pub struct LabelRule {
    /// Substring tested against the block's full text.
    pub needle: &'static str,
    /// Metric filled from the block's emphasized sub-element.
    pub metric: MetricName,
    /// Optional second metric extracted from the block's full text via a
    /// single-capture regex (e.g. the consumer score trailing the
    /// "avaliadas" sentence).
    pub companion: Option<(MetricName, &'static LazyLock<Regex>)>,
}

/// Whitespace-normalized text content of an element.
#[must_use]
pub fn text_of(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of the first element matching `selector`, if any non-empty.
#[must_use]
pub fn first_text(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .map(text_of)
        .find(|text| !text.is_empty())
}

/// Classifies every indicator block in the document and fills `record`.
///
/// A block whose text matches no rule is ignored. A matched block without an
/// emphasized sub-element contributes nothing for its primary metric; the
/// metric stays missing rather than becoming an empty string.
pub fn classify_blocks(
    doc: &Html,
    block_selector: &Selector,
    emphasis_selector: &Selector,
    rules: &[LabelRule],
    record: &mut RawRecord,
) {
    for block in doc.select(block_selector) {
        let text = text_of(block);
        if text.is_empty() {
            continue;
        }

        let Some(rule) = rules.iter().find(|rule| text.contains(rule.needle)) else {
            continue;
        };

        if let Some(emphasis) = block.select(emphasis_selector).next() {
            let value = text_of(emphasis);
            if !value.is_empty() {
                record.set(rule.metric, value);
            }
        }

        if let Some((metric, pattern)) = &rule.companion {
            if let Some(captures) = pattern.captures(&text) {
                record.set(*metric, captures[1].to_string());
            }
        }
    }
}
