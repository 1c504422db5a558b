//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the location and conversation endpoints and
//! the master definition for the OpenAPI specification.

use crate::adapters::geocode;
use crate::web::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::{DateTime, Utc};
use geochat_core::domain::{Location, LocationSource, Query};
use geochat_core::ports::PortError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        health_handler,
        create_location_handler,
        get_location_handler,
        detect_location_handler,
        list_queries_handler,
        create_conversation_handler,
        crate::web::queries::create_query_handler,
    ),
    components(
        schemas(
            CreateLocationRequest,
            DetectLocationRequest,
            LocationSourceParam,
            LocationResponse,
            QueryResponse,
            CreateConversationRequest,
            ConversationResponse,
            crate::web::queries::CreateQueryRequest,
        )
    ),
    tags(
        (name = "GeoChat API", description = "API endpoints for the location-centric chat demo.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Request and Response Structs
//=========================================================================================

/// How a location entered the system, as accepted on the wire.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LocationSourceParam {
    Auto,
    Map,
    Manual,
}

impl From<LocationSourceParam> for LocationSource {
    fn from(param: LocationSourceParam) -> Self {
        match param {
            LocationSourceParam::Auto => LocationSource::Auto,
            LocationSourceParam::Map => LocationSource::Map,
            LocationSourceParam::Manual => LocationSource::Manual,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateLocationRequest {
    pub name: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    /// Defaults to `manual` when omitted.
    pub source: Option<LocationSourceParam>,
}

#[derive(Deserialize, ToSchema)]
pub struct DetectLocationRequest {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize, ToSchema)]
pub struct LocationResponse {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<String>,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        let source = match location.source {
            LocationSource::Auto => "auto",
            LocationSource::Map => "map",
            LocationSource::Manual => "manual",
        };
        Self {
            id: location.id,
            name: location.name,
            latitude: location.latitude,
            longitude: location.longitude,
            source: source.to_string(),
            created_at: location.created_at,
        }
    }
}

/// A persisted query, with the extracted parameters and chart data embedded
/// as they will reach the front end.
#[derive(Serialize, ToSchema)]
pub struct QueryResponse {
    pub id: i64,
    pub location_id: i64,
    pub prompt: String,
    #[schema(value_type = Object)]
    pub extracted_params: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub visualization: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl From<Query> for QueryResponse {
    fn from(query: Query) -> Self {
        // The domain types carry serde derives, so the conversion to wire
        // JSON cannot fail.
        let extracted_params =
            serde_json::to_value(&query.extracted_params).unwrap_or_default();
        let visualization = query
            .visualization
            .as_ref()
            .and_then(|chart| serde_json::to_value(chart).ok());
        Self {
            id: query.id,
            location_id: query.location_id,
            prompt: query.prompt,
            extracted_params,
            response: query.response,
            visualization,
            created_at: query.created_at,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateConversationRequest {
    pub location_id: i64,
    /// Opaque client-generated token; the server mints one when omitted.
    pub session_token: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ConversationResponse {
    pub id: i64,
    pub location_id: i64,
    pub session_token: String,
    pub created_at: DateTime<Utc>,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Liveness check.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Create a location with an explicit name.
#[utoipa::path(
    post,
    path = "/locations",
    request_body = CreateLocationRequest,
    responses(
        (status = 201, description = "Location created", body = LocationResponse),
        (status = 400, description = "Empty location name"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_location_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<CreateLocationRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if req.name.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Location name must not be empty".to_string(),
        ));
    }

    let source = req
        .source
        .map(LocationSource::from)
        .unwrap_or(LocationSource::Manual);

    let location = app_state
        .store
        .create_location(req.name.trim(), req.latitude, req.longitude, source)
        .await
        .map_err(|e| {
            error!("Failed to create location: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create location".to_string(),
            )
        })?;

    Ok((StatusCode::CREATED, Json(LocationResponse::from(location))))
}

/// Fetch a location by id.
#[utoipa::path(
    get,
    path = "/locations/{id}",
    params(("id" = i64, Path, description = "The location id.")),
    responses(
        (status = 200, description = "The location", body = LocationResponse),
        (status = 404, description = "No such location")
    )
)]
pub async fn get_location_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    match app_state.store.get_location(id).await {
        Ok(location) => Ok(Json(LocationResponse::from(location))),
        Err(PortError::NotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            format!("Location {id} not found"),
        )),
        Err(e) => {
            error!("Failed to fetch location {}: {:?}", id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch location".to_string(),
            ))
        }
    }
}

/// Create a location from raw browser coordinates.
///
/// The name comes from the static city table; unrecognized coordinates
/// still create a location, named "Unknown location".
#[utoipa::path(
    post,
    path = "/locations/detect",
    request_body = DetectLocationRequest,
    responses(
        (status = 201, description = "Location created from coordinates", body = LocationResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn detect_location_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<DetectLocationRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let name = geocode::reverse_geocode(req.latitude, req.longitude)
        .unwrap_or("Unknown location");

    let location = app_state
        .store
        .create_location(
            name,
            Some(req.latitude.to_string()),
            Some(req.longitude.to_string()),
            LocationSource::Auto,
        )
        .await
        .map_err(|e| {
            error!("Failed to create detected location: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create location".to_string(),
            )
        })?;

    Ok((StatusCode::CREATED, Json(LocationResponse::from(location))))
}

/// List the queries accumulated against a location, oldest first.
#[utoipa::path(
    get,
    path = "/locations/{id}/queries",
    params(("id" = i64, Path, description = "The location id.")),
    responses(
        (status = 200, description = "Queries for the location", body = [QueryResponse]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_queries_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let queries = app_state
        .store
        .get_queries_for_location(id)
        .await
        .map_err(|e| {
            error!("Failed to list queries for location {}: {:?}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to list queries".to_string(),
            )
        })?;

    let payload: Vec<QueryResponse> = queries.into_iter().map(QueryResponse::from).collect();
    Ok(Json(payload))
}

/// Start a conversation grouping queries by browsing session.
#[utoipa::path(
    post,
    path = "/conversations",
    request_body = CreateConversationRequest,
    responses(
        (status = 201, description = "Conversation created", body = ConversationResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_conversation_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<CreateConversationRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let session_token = req
        .session_token
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let conversation = app_state
        .store
        .create_conversation(req.location_id, &session_token)
        .await
        .map_err(|e| {
            error!("Failed to create conversation: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create conversation".to_string(),
            )
        })?;

    let response = ConversationResponse {
        id: conversation.id,
        location_id: conversation.location_id,
        session_token: conversation.session_token,
        created_at: conversation.created_at,
    };
    Ok((StatusCode::CREATED, Json(response)))
}
