//! crates/geochat_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs cross the API boundary verbatim, so serde derives live here;
//! they are still independent of any database or web framework.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a location entered the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationSource {
    /// Detected from browser coordinates.
    Auto,
    /// Picked by clicking on the map.
    Map,
    /// Typed in by hand.
    Manual,
}

/// A geographic location a user is chatting about.
/// Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    /// Decimal-string coordinates, absent for manually named locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,
    pub source: LocationSource,
    pub created_at: DateTime<Utc>,
}

/// One prompt/response exchange against a location. Queries accumulate per
/// location and are never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    pub id: i64,
    pub location_id: i64,
    pub prompt: String,
    pub extracted_params: ExtractedParameters,
    /// Generated HTML fragment, absent if generation produced nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visualization: Option<ChartDescriptor>,
    pub created_at: DateTime<Utc>,
}

/// Groups queries by browsing session. The token is an opaque string with no
/// authentication semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: i64,
    pub location_id: i64,
    pub session_token: String,
    pub created_at: DateTime<Utc>,
}

/// A topic tag detected in a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Temperature,
    Rainfall,
    Population,
    Demographics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    Average,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Monthly,
    Yearly,
}

/// Structured parameters extracted from a free-text prompt.
///
/// Every field is absent, not empty, when no matching keyword was found;
/// presence of a field signals a detected topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_types: Option<Vec<DataType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<Aggregation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<Timeframe>,
}

impl ExtractedParameters {
    /// True if any detected topic tag equals `wanted`.
    pub fn has_data_type(&self, wanted: DataType) -> bool {
        self.data_types
            .as_deref()
            .is_some_and(|tags| tags.contains(&wanted))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
}

/// One named series of a chart, twelve values for twelve months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub values: Vec<f64>,
}

/// Chart data handed to the front-end charting library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn location_serializes_timestamp_and_skips_absent_coordinates() {
        let location = Location {
            id: 1,
            name: "Oslo".to_string(),
            latitude: None,
            longitude: None,
            source: LocationSource::Manual,
            created_at: Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
        };
        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json["source"], "manual");
        assert_eq!(json["created_at"], "2026-08-30T12:00:00Z");
        assert!(json.get("latitude").is_none());
        assert!(json.get("longitude").is_none());
    }

    #[test]
    fn query_round_trips_through_json() {
        let query = Query {
            id: 7,
            location_id: 3,
            prompt: "rainfall 2001 to 2020".to_string(),
            extracted_params: ExtractedParameters {
                start_year: Some("2001".to_string()),
                end_year: Some("2020".to_string()),
                data_types: Some(vec![DataType::Rainfall]),
                ..Default::default()
            },
            response: Some("<div>fragment</div>".to_string()),
            visualization: Some(ChartDescriptor {
                chart_type: ChartType::Bar,
                labels: vec!["Jan".to_string()],
                series: vec![ChartSeries {
                    label: "Rainfall (mm)".to_string(),
                    values: vec![98.0],
                }],
            }),
            created_at: Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
        };

        let json = serde_json::to_string(&query).unwrap();
        let back: Query = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, query.id);
        assert_eq!(back.created_at, query.created_at);
        assert_eq!(back.extracted_params, query.extracted_params);
        assert_eq!(back.visualization, query.visualization);
    }
}
