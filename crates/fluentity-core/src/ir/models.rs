use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// A normalized model, one per schema in the document or per interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDefinition {
    /// PascalCase class name.
    pub name: String,
    /// Lower-cased, pluralized API resource segment.
    pub resource: String,
    pub attributes: Vec<AttributeDefinition>,
    pub relationships: Vec<RelationshipDefinition>,
}

impl ModelDefinition {
    /// Distinct related model names in first-appearance order.
    pub fn related_models(&self) -> Vec<&str> {
        let mut models: Vec<&str> = Vec::new();
        for rel in &self.relationships {
            if !models.contains(&rel.model.as_str()) {
                models.push(&rel.model);
            }
        }
        models
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeDefinition> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// A plain typed field on a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    pub is_array: bool,
    pub required: bool,
}

/// TypeScript type of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeType {
    String,
    Number,
    Boolean,
    /// `Record<string, any>`
    Record,
    Any,
    /// A user-supplied type name from the interactive flow.
    Named(String),
}

impl AttributeType {
    pub fn as_str(&self) -> &str {
        match self {
            AttributeType::String => "string",
            AttributeType::Number => "number",
            AttributeType::Boolean => "boolean",
            AttributeType::Record => "Record<string, any>",
            AttributeType::Any => "any",
            AttributeType::Named(name) => name,
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AttributeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A field referencing another model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub rel_type: RelationshipType,
    /// PascalCase name of the related model.
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RelationshipType {
    HasOne,
    HasMany,
    BelongsTo,
    BelongsToMany,
}

impl RelationshipType {
    pub const ALL: [RelationshipType; 4] = [
        RelationshipType::HasOne,
        RelationshipType::HasMany,
        RelationshipType::BelongsTo,
        RelationshipType::BelongsToMany,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RelationshipType::HasOne => "HasOne",
            RelationshipType::HasMany => "HasMany",
            RelationshipType::BelongsTo => "BelongsTo",
            RelationshipType::BelongsToMany => "BelongsToMany",
        }
    }

    /// Whether the relation holds a list of related models.
    pub fn is_collection(self) -> bool {
        matches!(
            self,
            RelationshipType::HasMany | RelationshipType::BelongsToMany
        )
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationshipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationshipType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown relationship type: {s}"))
    }
}
