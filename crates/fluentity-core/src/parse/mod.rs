pub mod components;
pub mod schema;
pub mod spec;

use std::fs;
use std::path::Path;

use crate::error::ParseError;
use spec::OpenApiDocument;

/// Parse an OpenAPI document from JSON.
pub fn from_json(input: &str) -> Result<OpenApiDocument, ParseError> {
    let doc: OpenApiDocument = serde_json::from_str(input)?;
    check_version(&doc);
    Ok(doc)
}

/// Parse an OpenAPI document from YAML.
pub fn from_yaml(input: &str) -> Result<OpenApiDocument, ParseError> {
    let doc: OpenApiDocument = serde_yaml_ng::from_str(input)?;
    check_version(&doc);
    Ok(doc)
}

/// Read a document from disk. `.yaml`/`.yml` files are parsed as YAML,
/// everything else as JSON.
pub fn from_path(path: &Path) -> Result<OpenApiDocument, ParseError> {
    let content = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.display().to_string(),
        source,
    })?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => from_yaml(&content),
        _ => from_json(&content),
    }
}

/// Only `components.schemas` is read, so other versions are let through with a warning.
fn check_version(doc: &OpenApiDocument) {
    match doc.openapi.as_deref() {
        Some(version) if version.starts_with("3.") => {}
        Some(version) => log::warn!("unsupported OpenAPI version {version}, continuing anyway"),
        None => log::warn!("document has no `openapi` version field"),
    }
}
