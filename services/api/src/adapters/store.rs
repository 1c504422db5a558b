//! services/api/src/adapters/store.rs
//!
//! This module contains the in-memory record store, the concrete
//! implementation of the `RecordStore` port from the `core` crate. It is a
//! development stand-in for a real database: three id-keyed maps behind
//! `RwLock`s, with explicit id sequences so tests can control numbering. A
//! database-backed adapter would replace this file without touching the core.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use geochat_core::domain::{
    ChartDescriptor, Conversation, ExtractedParameters, Location, LocationSource, Query,
};
use geochat_core::ports::{PortError, PortResult, RecordStore};
use tokio::sync::RwLock;

//=========================================================================================
// Id Sequences
//=========================================================================================

/// A monotonically increasing id source, one per entity kind.
///
/// Ids start at 1 and never repeat within a process lifetime.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicI64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Starts the sequence at an arbitrary id, for tests that need to
    /// predict or offset numbering.
    pub fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }

    fn advance(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An in-memory record store that implements the `RecordStore` port.
pub struct InMemoryStore {
    locations: RwLock<HashMap<i64, Location>>,
    queries: RwLock<HashMap<i64, Query>>,
    conversations: RwLock<HashMap<i64, Conversation>>,
    location_ids: IdSequence,
    query_ids: IdSequence,
    conversation_ids: IdSequence,
}

impl InMemoryStore {
    /// Creates an empty store with sequences starting at 1.
    pub fn new() -> Self {
        Self::with_sequences(IdSequence::new(), IdSequence::new(), IdSequence::new())
    }

    /// Creates an empty store with caller-supplied id sequences.
    pub fn with_sequences(
        location_ids: IdSequence,
        query_ids: IdSequence,
        conversation_ids: IdSequence,
    ) -> Self {
        Self {
            locations: RwLock::new(HashMap::new()),
            queries: RwLock::new(HashMap::new()),
            conversations: RwLock::new(HashMap::new()),
            location_ids,
            query_ids,
            conversation_ids,
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================================
// RecordStore Implementation
//=========================================================================================

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn create_location(
        &self,
        name: &str,
        latitude: Option<String>,
        longitude: Option<String>,
        source: LocationSource,
    ) -> PortResult<Location> {
        let location = Location {
            id: self.location_ids.advance(),
            name: name.to_string(),
            latitude,
            longitude,
            source,
            created_at: Utc::now(),
        };
        self.locations
            .write()
            .await
            .insert(location.id, location.clone());
        Ok(location)
    }

    async fn get_location(&self, location_id: i64) -> PortResult<Location> {
        self.locations
            .read()
            .await
            .get(&location_id)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("location {location_id}")))
    }

    async fn create_query(
        &self,
        location_id: i64,
        prompt: &str,
        extracted_params: ExtractedParameters,
        response: Option<String>,
        visualization: Option<ChartDescriptor>,
    ) -> PortResult<Query> {
        let query = Query {
            id: self.query_ids.advance(),
            location_id,
            prompt: prompt.to_string(),
            extracted_params,
            response,
            visualization,
            created_at: Utc::now(),
        };
        self.queries.write().await.insert(query.id, query.clone());
        Ok(query)
    }

    async fn get_queries_for_location(&self, location_id: i64) -> PortResult<Vec<Query>> {
        let queries = self.queries.read().await;
        let mut matching: Vec<Query> = queries
            .values()
            .filter(|q| q.location_id == location_id)
            .cloned()
            .collect();
        // Map iteration order is arbitrary; sort by id for stable responses.
        matching.sort_by_key(|q| q.id);
        Ok(matching)
    }

    async fn create_conversation(
        &self,
        location_id: i64,
        session_token: &str,
    ) -> PortResult<Conversation> {
        let conversation = Conversation {
            id: self.conversation_ids.advance(),
            location_id,
            session_token: session_token.to_string(),
            created_at: Utc::now(),
        };
        self.conversations
            .write()
            .await
            .insert(conversation.id, conversation.clone());
        Ok(conversation)
    }

    async fn get_conversation(&self, conversation_id: i64) -> PortResult<Conversation> {
        self.conversations
            .read()
            .await
            .get(&conversation_id)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("conversation {conversation_id}")))
    }
}
