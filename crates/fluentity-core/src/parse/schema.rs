use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// A JSON Schema type keyword value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    Null,
    /// Any type keyword outside the JSON Schema core set (`file`, `date`, ...).
    #[serde(other)]
    Unknown,
}

/// The `type` field can be a single type or an array of types.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
    Single(SchemaType),
    Multiple(Vec<SchemaType>),
}

impl TypeSet {
    /// The type that decides classification: the single type, or the first
    /// non-`null` entry of a type array.
    pub fn primary(&self) -> Option<&SchemaType> {
        match self {
            TypeSet::Single(t) => Some(t),
            TypeSet::Multiple(types) => types.iter().find(|t| **t != SchemaType::Null),
        }
    }
}

/// A reference, an inline schema, a boolean schema, or any other JSON value
/// in schema position (tuple `items`, malformed property objects).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Schema(Box<Schema>),
    Bool(bool),
    Other(serde_json::Value),
}

impl SchemaOrRef {
    /// The `$ref` pointer, if this is a reference.
    pub fn ref_path(&self) -> Option<&str> {
        match self {
            SchemaOrRef::Ref { ref_path } => Some(ref_path),
            _ => None,
        }
    }

    /// The inline schema, if this is one.
    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            SchemaOrRef::Schema(schema) => Some(schema),
            _ => None,
        }
    }
}

/// The subset of a JSON Schema object the translator inspects.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: Option<TypeSet>,

    // Object properties
    #[serde(default)]
    pub properties: IndexMap<String, SchemaOrRef>,

    #[serde(default, deserialize_with = "required_names")]
    pub required: Vec<String>,

    // Array items
    pub items: Option<Box<SchemaOrRef>>,
}

/// `required` as a list of property names. Any other shape, such as the
/// Swagger 2 per-property `"required": true`, reads as an empty list.
fn required_names<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Required {
        Names(Vec<String>),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Required::deserialize(deserializer)? {
        Required::Names(names) => names,
        Required::Other(_) => Vec::new(),
    })
}

impl Schema {
    pub fn primary_type(&self) -> Option<&SchemaType> {
        self.schema_type.as_ref().and_then(TypeSet::primary)
    }

    pub fn is_array(&self) -> bool {
        self.primary_type() == Some(&SchemaType::Array)
    }

    pub fn is_required(&self, property: &str) -> bool {
        self.required.iter().any(|r| r == property)
    }
}
