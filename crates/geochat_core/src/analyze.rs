//! crates/geochat_core/src/analyze.rs
//!
//! The full analysis pipeline: one extraction pass, then response selection
//! and chart building run independently on the same parameters. This is the
//! single entry point the request-handling layer calls per prompt.

use chrono::{Datelike, Utc};

use crate::domain::{ChartDescriptor, ExtractedParameters};
use crate::extract::extract_parameters_with_year;
use crate::respond::build_response;
use crate::visualize::build_visualization;

/// Everything the pipeline produces for one prompt. The caller combines
/// this with the prompt and location id into a persisted query record.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub params: ExtractedParameters,
    pub response: String,
    pub visualization: Option<ChartDescriptor>,
}

/// Runs extraction, response selection and chart building for one prompt.
///
/// Pure apart from the current-year fallback; [`analyze_with_year`] pins it.
pub fn analyze(prompt: &str, location_name: &str) -> Analysis {
    analyze_with_year(prompt, location_name, Utc::now().year())
}

/// Same as [`analyze`] with the "current year" injected.
pub fn analyze_with_year(prompt: &str, location_name: &str, current_year: i32) -> Analysis {
    let params = extract_parameters_with_year(prompt, current_year);
    let response = build_response(prompt, &params, location_name);
    let visualization = build_visualization(&params);
    Analysis {
        params,
        response,
        visualization,
    }
}
