pub mod queries;
pub mod rest;
pub mod state;

// Re-export the handlers to make them easily accessible to the binary that
// builds the web server router.
pub use queries::create_query_handler;
pub use rest::{
    create_conversation_handler, create_location_handler, detect_location_handler,
    get_location_handler, health_handler, list_queries_handler,
};
