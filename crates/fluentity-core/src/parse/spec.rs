use serde::Deserialize;

use super::components::Components;

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub version: String,
}

/// The parts of an OpenAPI 3.x document the model translator reads.
///
/// Every field is optional: a document that parses as JSON is accepted even
/// when it is missing `openapi`, `info` or `components`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OpenApiDocument {
    pub openapi: Option<String>,
    pub info: Option<Info>,
    pub components: Option<Components>,
}
