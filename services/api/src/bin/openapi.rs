//! services/api/src/bin/openapi.rs
//!
//! This binary generates the OpenAPI 3.0 specification for the GeoChat REST
//! API and saves it to a file named `openapi.json`, for front-end codegen
//! and API review without a running server.

use api_lib::web::rest::ApiDoc;
use utoipa::OpenApi;

/// Renders the specification as pretty JSON and writes it to `path`.
fn write_spec(
    api_doc: utoipa::openapi::OpenApi,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let spec_json = api_doc.to_pretty_json()?;
    std::fs::write(path, spec_json)?;
    println!("GeoChat OpenAPI specification written to {}", path);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    write_spec(ApiDoc::openapi(), "openapi.json")
}
