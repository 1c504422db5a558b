//! services/api/src/web/queries.rs
//!
//! The analyze-and-persist handler: the one endpoint that drives the core
//! pipeline. Extraction, response selection and chart building run on the
//! prompt, and the combined result is stored as a query record.

use crate::web::rest::QueryResponse;
use crate::web::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use geochat_core::analyze;
use geochat_core::ports::PortError;
use geochat_core::respond::UNKNOWN_LOCATION;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateQueryRequest {
    pub location_id: i64,
    pub prompt: String,
}

/// Analyze a prompt against a location and persist the result.
///
/// A dangling `location_id` is not an error: the response falls back to a
/// generic location name and the query record is stored as sent.
#[utoipa::path(
    post,
    path = "/queries",
    request_body = CreateQueryRequest,
    responses(
        (status = 201, description = "Query analyzed and stored", body = QueryResponse),
        (status = 400, description = "Empty prompt"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_query_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<CreateQueryRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if req.prompt.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Prompt must not be empty".to_string(),
        ));
    }

    let location_name = match app_state.store.get_location(req.location_id).await {
        Ok(location) => location.name,
        Err(PortError::NotFound(_)) => UNKNOWN_LOCATION.to_string(),
        Err(e) => {
            error!("Failed to resolve location {}: {:?}", req.location_id, e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to resolve location".to_string(),
            ));
        }
    };

    let analysis = analyze(&req.prompt, &location_name);
    info!(
        location_id = req.location_id,
        data_types = ?analysis.params.data_types,
        "analyzed prompt"
    );

    let query = app_state
        .store
        .create_query(
            req.location_id,
            &req.prompt,
            analysis.params,
            Some(analysis.response),
            analysis.visualization,
        )
        .await
        .map_err(|e| {
            error!("Failed to store query: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to store query".to_string(),
            )
        })?;

    Ok((StatusCode::CREATED, Json(QueryResponse::from(query))))
}
