//! services/api/tests/analysis_flow.rs
//!
//! Exercises the full extract → respond → visualize → persist flow against
//! the in-memory store, the same sequence the query endpoint performs.

use api_lib::adapters::store::InMemoryStore;
use geochat_core::analyze_with_year;
use geochat_core::domain::{ChartType, DataType, LocationSource};
use geochat_core::ports::{PortError, RecordStore};
use geochat_core::respond::UNKNOWN_LOCATION;

const YEAR: i32 = 2026;

#[tokio::test]
async fn rainfall_prompt_is_analyzed_and_persisted() {
    let store = InMemoryStore::new();
    let location = store
        .create_location(
            "San Francisco",
            Some("37.7749".to_string()),
            Some("-122.4194".to_string()),
            LocationSource::Map,
        )
        .await
        .unwrap();

    let prompt = "Show me rainfall patterns from 2001 to 2020";
    let analysis = analyze_with_year(prompt, &location.name, YEAR);

    let query = store
        .create_query(
            location.id,
            prompt,
            analysis.params,
            Some(analysis.response),
            analysis.visualization,
        )
        .await
        .unwrap();

    assert_eq!(query.location_id, location.id);
    assert_eq!(
        query.extracted_params.start_year.as_deref(),
        Some("2001")
    );
    assert_eq!(query.extracted_params.end_year.as_deref(), Some("2020"));
    assert_eq!(
        query.extracted_params.data_types,
        Some(vec![DataType::Rainfall])
    );

    let response = query.response.as_deref().unwrap();
    assert!(response.contains("Weather Analysis for San Francisco"));
    assert!(response.contains("from 2001 to 2020"));

    let chart = query.visualization.as_ref().unwrap();
    assert_eq!(chart.chart_type, ChartType::Bar);
    assert_eq!(chart.labels.len(), 12);

    let stored = store.get_queries_for_location(location.id).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].prompt, prompt);
}

#[tokio::test]
async fn queries_accumulate_in_creation_order() {
    let store = InMemoryStore::new();
    let location = store
        .create_location("Oslo", None, None, LocationSource::Manual)
        .await
        .unwrap();

    for prompt in ["temperature trends", "population since 1990", "hello"] {
        let analysis = analyze_with_year(prompt, &location.name, YEAR);
        store
            .create_query(
                location.id,
                prompt,
                analysis.params,
                Some(analysis.response),
                analysis.visualization,
            )
            .await
            .unwrap();
    }

    let stored = store.get_queries_for_location(location.id).await.unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[0].prompt, "temperature trends");
    assert_eq!(stored[2].prompt, "hello");

    // Only the temperature prompt produced a chart, a line chart.
    assert_eq!(
        stored[0].visualization.as_ref().unwrap().chart_type,
        ChartType::Line
    );
    assert!(stored[1].visualization.is_none());
    assert!(stored[2].visualization.is_none());
}

#[tokio::test]
async fn dangling_location_falls_back_to_generic_name() {
    let store = InMemoryStore::new();

    // Resolve the name the way the query endpoint does.
    let location_name = match store.get_location(999).await {
        Ok(location) => location.name,
        Err(PortError::NotFound(_)) => UNKNOWN_LOCATION.to_string(),
        Err(e) => panic!("unexpected store error: {e}"),
    };
    assert_eq!(location_name, UNKNOWN_LOCATION);

    let analysis = analyze_with_year("temperature today", &location_name, YEAR);
    assert!(analysis
        .response
        .contains("Weather Analysis for the selected location"));

    // The record is still stored against the id the caller sent.
    let query = store
        .create_query(999, "temperature today", analysis.params, Some(analysis.response), None)
        .await
        .unwrap();
    assert_eq!(query.location_id, 999);
}

#[tokio::test]
async fn conversations_group_queries_by_session() {
    let store = InMemoryStore::new();
    let location = store
        .create_location("Lagos", None, None, LocationSource::Auto)
        .await
        .unwrap();

    let conversation = store
        .create_conversation(location.id, "f3b4c1de-session")
        .await
        .unwrap();

    let fetched = store.get_conversation(conversation.id).await.unwrap();
    assert_eq!(fetched.location_id, location.id);
    assert_eq!(fetched.session_token, "f3b4c1de-session");
}
