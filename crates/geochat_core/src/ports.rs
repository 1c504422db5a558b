//! crates/geochat_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like databases or APIs.

use async_trait::async_trait;

use crate::domain::{
    ChartDescriptor, Conversation, ExtractedParameters, Location, LocationSource, Query,
};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., database, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Record Store Port (Trait)
//=========================================================================================

/// Persistence for the three entity kinds, addressed by integer id.
///
/// Ids are unique per entity kind and monotonically increasing within a
/// process lifetime. Referential integrity of a query's `location_id` is the
/// caller's responsibility; the store does not verify it.
#[async_trait]
pub trait RecordStore: Send + Sync {
    // --- Location Management ---
    async fn create_location(
        &self,
        name: &str,
        latitude: Option<String>,
        longitude: Option<String>,
        source: LocationSource,
    ) -> PortResult<Location>;

    async fn get_location(&self, location_id: i64) -> PortResult<Location>;

    // --- Query Management ---
    async fn create_query(
        &self,
        location_id: i64,
        prompt: &str,
        extracted_params: ExtractedParameters,
        response: Option<String>,
        visualization: Option<ChartDescriptor>,
    ) -> PortResult<Query>;

    async fn get_queries_for_location(&self, location_id: i64) -> PortResult<Vec<Query>>;

    // --- Conversation Management ---
    async fn create_conversation(
        &self,
        location_id: i64,
        session_token: &str,
    ) -> PortResult<Conversation>;

    async fn get_conversation(&self, conversation_id: i64) -> PortResult<Conversation>;
}
