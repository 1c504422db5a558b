//! crates/geochat_core/src/extract.rs
//!
//! Keyword extraction from free-text prompts. This is a deliberately shallow
//! rule chain, not a language model: a year regex plus ordered,
//! case-insensitive substring checks. The check order and its
//! overwrite-on-later-match behavior are load-bearing; downstream response
//! selection depends on them.

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{Aggregation, DataType, ExtractedParameters, Timeframe};

/// A run of exactly four digits, optionally joined by "to" or a hyphen to a
/// second four-digit run ("2001 to 2020", "2001-2020", "1990").
static YEAR_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{4})(?:\s*(?:to|-)\s*(\d{4}))?\b").expect("year regex is valid")
});

/// Extracts structured parameters from a prompt.
///
/// Total over all string input, including the empty string; never fails.
/// Uses the current calendar year as the open-range fallback for `end_year`;
/// tests pin the year through [`extract_parameters_with_year`].
pub fn extract_parameters(prompt: &str) -> ExtractedParameters {
    extract_parameters_with_year(prompt, Utc::now().year())
}

/// Same as [`extract_parameters`] with the "current year" injected.
pub fn extract_parameters_with_year(prompt: &str, current_year: i32) -> ExtractedParameters {
    let mut params = ExtractedParameters::default();
    let lower = prompt.to_lowercase();

    // 1. Years. A single year means "from then until now".
    if let Some(caps) = YEAR_RANGE.captures(prompt) {
        params.start_year = Some(caps[1].to_string());
        params.end_year = Some(match caps.get(2) {
            Some(end) => end.as_str().to_string(),
            None => current_year.to_string(),
        });
    }

    // 2. Topic tags, fixed check order. Each later match replaces the whole
    //    list, so a prompt naming both temperature and rainfall ends up
    //    tagged rainfall only. Callers rely on this quirk; do not merge the
    //    branches into a union.
    if lower.contains("temperature") {
        params.data_types = Some(vec![DataType::Temperature]);
    }
    if lower.contains("rainfall") || lower.contains("precipitation") {
        params.data_types = Some(vec![DataType::Rainfall]);
    }
    if lower.contains("population") {
        params.data_types = Some(vec![DataType::Population]);
    }
    if lower.contains("demographics") {
        params.data_types = Some(vec![DataType::Demographics]);
    }

    // 3. Aggregation and timeframe, independent of the topic checks. Yearly
    //    is checked after monthly, so a prompt containing both words ends
    //    with a yearly timeframe regardless of word order in the text.
    if lower.contains("average") {
        params.aggregation = Some(Aggregation::Average);
    }
    if lower.contains("monthly") {
        params.timeframe = Some(Timeframe::Monthly);
    }
    if lower.contains("yearly") || lower.contains("annual") {
        params.timeframe = Some(Timeframe::Yearly);
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2026;

    #[test]
    fn empty_prompt_extracts_nothing() {
        let params = extract_parameters_with_year("", YEAR);
        assert_eq!(params, ExtractedParameters::default());
    }

    #[test]
    fn no_four_digit_run_leaves_years_absent() {
        let params = extract_parameters_with_year("show me data for the 90s (era 123)", YEAR);
        assert_eq!(params.start_year, None);
        assert_eq!(params.end_year, None);
    }

    #[test]
    fn longer_digit_runs_do_not_count_as_years() {
        let params = extract_parameters_with_year("postcode 94117 and id 123456", YEAR);
        assert_eq!(params.start_year, None);
        assert_eq!(params.end_year, None);
    }

    #[test]
    fn explicit_year_range_with_to() {
        let params = extract_parameters_with_year("rainfall data 2001 to 2020", YEAR);
        assert_eq!(params.start_year.as_deref(), Some("2001"));
        assert_eq!(params.end_year.as_deref(), Some("2020"));
        assert_eq!(params.data_types, Some(vec![DataType::Rainfall]));
    }

    #[test]
    fn explicit_year_range_with_hyphen() {
        let params = extract_parameters_with_year("temperature 1980-1999", YEAR);
        assert_eq!(params.start_year.as_deref(), Some("1980"));
        assert_eq!(params.end_year.as_deref(), Some("1999"));
    }

    #[test]
    fn single_year_falls_back_to_current_year() {
        let params = extract_parameters_with_year("population trends 1990", YEAR);
        assert_eq!(params.start_year.as_deref(), Some("1990"));
        assert_eq!(params.end_year.as_deref(), Some("2026"));
        assert_eq!(params.data_types, Some(vec![DataType::Population]));
    }

    #[test]
    fn rainfall_check_wins_over_temperature() {
        // Documented quirk: the later rainfall check replaces the
        // temperature tag instead of keeping both.
        let params = extract_parameters_with_year("temperature and rainfall", YEAR);
        assert_eq!(params.data_types, Some(vec![DataType::Rainfall]));
    }

    #[test]
    fn precipitation_is_tagged_as_rainfall() {
        let params = extract_parameters_with_year("Precipitation levels please", YEAR);
        assert_eq!(params.data_types, Some(vec![DataType::Rainfall]));
    }

    #[test]
    fn demographics_overwrites_population() {
        let params = extract_parameters_with_year("population demographics breakdown", YEAR);
        assert_eq!(params.data_types, Some(vec![DataType::Demographics]));
    }

    #[test]
    fn keyword_matching_is_case_insensitive() {
        let params = extract_parameters_with_year("AVERAGE Temperature, YEARLY", YEAR);
        assert_eq!(params.data_types, Some(vec![DataType::Temperature]));
        assert_eq!(params.aggregation, Some(Aggregation::Average));
        assert_eq!(params.timeframe, Some(Timeframe::Yearly));
    }

    #[test]
    fn yearly_overwrites_monthly_regardless_of_word_order() {
        let both = extract_parameters_with_year("annual or monthly view", YEAR);
        assert_eq!(both.timeframe, Some(Timeframe::Yearly));

        let monthly = extract_parameters_with_year("monthly view", YEAR);
        assert_eq!(monthly.timeframe, Some(Timeframe::Monthly));
    }

    #[test]
    fn extraction_is_idempotent() {
        let prompt = "Show me rainfall patterns from 2001 to 2020";
        let first = extract_parameters_with_year(prompt, YEAR);
        let second = extract_parameters_with_year(prompt, YEAR);
        assert_eq!(first, second);
    }

    #[test]
    fn fields_serialize_camel_case_and_skip_absent() {
        let params = extract_parameters_with_year("rainfall 2001 to 2020", YEAR);
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["startYear"], "2001");
        assert_eq!(json["endYear"], "2020");
        assert_eq!(json["dataTypes"], serde_json::json!(["rainfall"]));
        assert!(json.get("aggregation").is_none());
        assert!(json.get("timeframe").is_none());
    }
}
