//! Conversion of raw indicator strings into typed numeric values.
//!
//! Three parsing families cover everything the two sources emit:
//!
//! 1. [`parse_locale_number`]: Brazilian-locale numbers: `.` thousands
//!    separator, `,` decimal separator, optional trailing `%`
//!    (Consumidor.gov indicators).
//! 2. [`parse_leading_number`]: a numeric run at the very start of the
//!    string, trailing text ignored (Reclame Aqui values like
//!    `"83058 reclamações"` or `"8.7/10."`).
//! 3. [`parse_duration_days`]: free-form durations (`"3 dias 2h"`,
//!    `"45 min"`) summed into fractional days.
//!
//! All families map the sentinels `"n/a"`, `"n/d"`, and the empty string to
//! `None`. `None` is the missing marker throughout; it is never conflated
//! with a real zero. A parsed zero survives the numeric families, while the
//! duration family collapses a zero sum to `None`; in that textual form a
//! zero is indistinguishable from absence.

use std::sync::LazyLock;

use regex::Regex;

static LEADING_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(?:\.\d+)?").expect("valid regex"));
static DAYS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*dias?").expect("valid regex"));
static HOURS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*h").expect("valid regex"));
static MINUTES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*min").expect("valid regex"));

fn is_sentinel(trimmed: &str) -> bool {
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("n/d")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parses a Brazilian-locale formatted number: `"98,6%"` → 98.6,
/// `"7,5"` → 7.5, `"1.543"` → 1543.0.
#[must_use]
pub fn parse_locale_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if is_sentinel(trimmed) {
        return None;
    }
    let cleaned = trimmed.replace(['%', '.'], "").trim().replace(',', ".");
    cleaned.parse::<f64>().ok().map(round2)
}

/// Parses a numeric run anchored at the start of the string, ignoring any
/// trailing text: `"83058 reclamações"` → 83058.0, `"98.6%"` → 98.6.
///
/// The anchor is strict: a value that does not *begin* with the numeric
/// run (`"nota: 8.2 de 10"`) is missing, not 8.2.
#[must_use]
pub fn parse_leading_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if is_sentinel(trimmed) {
        return None;
    }
    LEADING_NUMBER_RE
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map(round2)
}

/// Parses a free-form duration into fractional days:
/// `days + hours/24 + minutes/1440`, each component optional.
///
/// A sum of zero yields `None`; the representation cannot distinguish a
/// genuine zero duration from no duration at all.
#[must_use]
pub fn parse_duration_days(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if is_sentinel(trimmed) {
        return None;
    }

    let component = |re: &Regex| {
        re.captures(trimmed)
            .and_then(|c| c[1].parse::<f64>().ok())
            .unwrap_or(0.0)
    };

    let total = component(&DAYS_RE) + component(&HOURS_RE) / 24.0 + component(&MINUTES_RE) / 1440.0;
    if total > 0.0 {
        Some(round2(total))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // parse_locale_number
    // -----------------------------------------------------------------------

    #[test]
    fn locale_percentage_with_comma_decimal() {
        assert_eq!(parse_locale_number("98,6%"), Some(98.6));
    }

    #[test]
    fn locale_plain_comma_decimal() {
        assert_eq!(parse_locale_number("7,5"), Some(7.5));
    }

    #[test]
    fn locale_thousands_separator() {
        assert_eq!(parse_locale_number("1.543"), Some(1543.0));
    }

    #[test]
    fn locale_zero_is_preserved() {
        assert_eq!(parse_locale_number("0"), Some(0.0));
    }

    #[test]
    fn locale_sentinels_are_missing() {
        for raw in ["n/a", "N/D", "", "  "] {
            assert_eq!(parse_locale_number(raw), None, "raw {raw:?}");
        }
    }

    #[test]
    fn locale_garbage_is_missing() {
        assert_eq!(parse_locale_number("sem dados"), None);
    }

    // -----------------------------------------------------------------------
    // parse_leading_number
    // -----------------------------------------------------------------------

    #[test]
    fn leading_number_ignores_trailing_text() {
        assert_eq!(parse_leading_number("83058 reclamações"), Some(83058.0));
    }

    #[test]
    fn leading_number_requires_numeric_start() {
        // The 8.2 after a non-numeric lead must NOT be matched.
        assert_eq!(parse_leading_number("nota: 8.2 de 10"), None);
    }

    #[test]
    fn leading_number_with_percent() {
        assert_eq!(parse_leading_number("98.6%"), Some(98.6));
    }

    #[test]
    fn leading_number_score_out_of_ten() {
        assert_eq!(parse_leading_number("8.7/10."), Some(8.7));
    }

    #[test]
    fn leading_number_keeps_sign() {
        assert_eq!(parse_leading_number("-5"), Some(-5.0));
    }

    #[test]
    fn leading_number_zero_is_preserved() {
        assert_eq!(parse_leading_number("0"), Some(0.0));
    }

    #[test]
    fn leading_number_sentinels_are_missing() {
        for raw in ["n/a", "N/D", ""] {
            assert_eq!(parse_leading_number(raw), None, "raw {raw:?}");
        }
    }

    #[test]
    fn leading_number_rounds_to_two_decimals() {
        assert_eq!(parse_leading_number("8.666 de nota"), Some(8.67));
    }

    // -----------------------------------------------------------------------
    // parse_duration_days
    // -----------------------------------------------------------------------

    #[test]
    fn duration_days_and_hours() {
        assert_eq!(parse_duration_days("3 dias 2h"), Some(3.08));
    }

    #[test]
    fn duration_minutes_only() {
        assert_eq!(parse_duration_days("45 min"), Some(0.03));
    }

    #[test]
    fn duration_single_day() {
        assert_eq!(parse_duration_days("1 dia"), Some(1.0));
    }

    #[test]
    fn duration_hours_spelled_out() {
        assert_eq!(parse_duration_days("5 horas"), Some(0.21));
    }

    #[test]
    fn duration_empty_is_missing() {
        assert_eq!(parse_duration_days(""), None);
    }

    #[test]
    fn duration_zero_collapses_to_missing() {
        // Documented policy: the duration form cannot distinguish a true
        // zero from absence.
        assert_eq!(parse_duration_days("0 dias"), None);
    }

    #[test]
    fn duration_case_insensitive() {
        assert_eq!(parse_duration_days("2 DIAS 12H"), Some(2.5));
    }

    #[test]
    fn duration_without_components_is_missing() {
        assert_eq!(parse_duration_days("imediato"), None);
    }
}
