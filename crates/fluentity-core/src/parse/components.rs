use indexmap::IndexMap;
use serde::Deserialize;

use super::schema::SchemaOrRef;

/// Components object holding reusable definitions. Only `schemas` is kept.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaOrRef>,
}
