//! crates/geochat_core/src/visualize.rs
//!
//! Chart data selection. Like the response templates, the values are fixed
//! illustrative series, one per topic that has a chart at all.

use crate::domain::{ChartDescriptor, ChartSeries, ChartType, DataType, ExtractedParameters};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Average monthly temperatures in degrees Celsius.
const TEMPERATURES: [f64; 12] = [
    10.8, 11.6, 12.4, 13.1, 14.0, 15.3, 15.9, 16.4, 18.2, 16.8, 13.5, 11.0,
];

/// Average monthly rainfall in millimetres.
const RAINFALL: [f64; 12] = [
    98.0, 86.0, 74.0, 34.0, 14.0, 4.0, 1.0, 2.0, 5.0, 26.0, 74.0, 112.0,
];

/// Builds chart data for the detected topic, if it has one.
///
/// Temperature is checked before rainfall, so a parameter set tagged with
/// both yields the temperature line chart. This differs from the response
/// selector, which treats the two tags as one weather branch; the asymmetry
/// is intentional. Topics without a chart return `None`.
pub fn build_visualization(params: &ExtractedParameters) -> Option<ChartDescriptor> {
    if params.has_data_type(DataType::Temperature) {
        Some(chart(ChartType::Line, "Average Temperature (°C)", &TEMPERATURES))
    } else if params.has_data_type(DataType::Rainfall) {
        Some(chart(ChartType::Bar, "Rainfall (mm)", &RAINFALL))
    } else {
        None
    }
}

fn chart(chart_type: ChartType, label: &str, values: &[f64; 12]) -> ChartDescriptor {
    ChartDescriptor {
        chart_type,
        labels: MONTHS.iter().map(|m| (*m).to_string()).collect(),
        series: vec![ChartSeries {
            label: label.to_string(),
            values: values.to_vec(),
        }],
    }
}
