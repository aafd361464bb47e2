use indexmap::IndexMap;

use crate::error::TransformError;
use crate::ir::{
    AttributeDefinition, AttributeType, ModelDefinition, ModelRegistry, RelationshipDefinition,
    RelationshipType,
};
use crate::parse::schema::{Schema, SchemaOrRef, SchemaType};
use crate::parse::spec::OpenApiDocument;

use super::naming::{foreign_key_candidates, pluralize, ref_model_name, to_pascal_case};

/// Options controlling how the translator treats references.
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// Fail on relationships whose model is not declared in the document
    /// instead of keeping them with a warning.
    pub strict_refs: bool,
}

/// How a single property is represented on the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Attribute(AttributeDefinition),
    Relationship(RelationshipDefinition),
}

/// Translate every `components.schemas` entry into the model registry.
pub fn translate(doc: &OpenApiDocument) -> Result<ModelRegistry, TransformError> {
    translate_with_options(doc, &TranslateOptions::default())
}

/// Translate with explicit options.
pub fn translate_with_options(
    doc: &OpenApiDocument,
    options: &TranslateOptions,
) -> Result<ModelRegistry, TransformError> {
    let mut registry = ModelRegistry::new();

    if let Some(info) = &doc.info {
        log::info!("translating `{}` version {}", info.title, info.version);
    }

    let Some(components) = doc.components.as_ref() else {
        log::info!("document has no components, nothing to translate");
        return Ok(registry);
    };

    for (key, schema_or_ref) in &components.schemas {
        let model = schema_to_model(key, schema_or_ref);
        log::debug!(
            "schema `{key}` -> model `{}` ({} attributes, {} relationships)",
            model.name,
            model.attributes.len(),
            model.relationships.len()
        );
        if let Some(previous) = registry.register(model) {
            log::debug!("schema `{key}` replaced an earlier `{}` model", previous.name);
        }
    }

    check_references(&registry, options)?;

    log::info!(
        "translated {} schemas into {} models",
        components.schemas.len(),
        registry.len()
    );
    Ok(registry)
}

/// Build the model for one schema entry.
pub fn schema_to_model(key: &str, schema_or_ref: &SchemaOrRef) -> ModelDefinition {
    let mut model = ModelDefinition {
        name: to_pascal_case(key),
        resource: pluralize(key),
        attributes: Vec::new(),
        relationships: Vec::new(),
    };

    let Some(schema) = schema_or_ref.as_schema() else {
        log::debug!("schema `{key}` is not an inline object schema, emitting an empty model");
        return model;
    };

    for (name, property) in &schema.properties {
        match classify_property(name, property, schema) {
            Member::Attribute(attr) => model.attributes.push(attr),
            Member::Relationship(rel) => model.relationships.push(rel),
        }
    }

    model
}

/// Classify one property of `parent`.
///
/// Precedence: a direct `$ref` is a `BelongsTo`/`HasOne` relationship, an
/// array of `$ref` items is a `HasMany` relationship, anything else is an
/// attribute.
pub fn classify_property(name: &str, property: &SchemaOrRef, parent: &Schema) -> Member {
    if let Some(ref_path) = property.ref_path() {
        let model = ref_model_name(ref_path);
        let rel_type = if has_foreign_key(&parent.properties, name, &model) {
            RelationshipType::BelongsTo
        } else {
            RelationshipType::HasOne
        };
        return Member::Relationship(RelationshipDefinition {
            name: name.to_string(),
            rel_type,
            model,
            foreign_key: None,
        });
    }

    let inline = property.as_schema();

    if let Some(schema) = inline
        && schema.is_array()
        && let Some(ref_path) = schema.items.as_deref().and_then(SchemaOrRef::ref_path)
    {
        return Member::Relationship(RelationshipDefinition {
            name: name.to_string(),
            rel_type: RelationshipType::HasMany,
            model: ref_model_name(ref_path),
            foreign_key: None,
        });
    }

    Member::Attribute(AttributeDefinition {
        name: name.to_string(),
        attr_type: inline.map_or(AttributeType::Any, attribute_type),
        is_array: inline.is_some_and(Schema::is_array),
        required: parent.is_required(name),
    })
}

/// Map an OpenAPI scalar type to the attribute type. Unknown or missing types become `any`.
pub fn attribute_type(schema: &Schema) -> AttributeType {
    match schema.primary_type() {
        Some(SchemaType::String) => AttributeType::String,
        Some(SchemaType::Number | SchemaType::Integer) => AttributeType::Number,
        Some(SchemaType::Boolean) => AttributeType::Boolean,
        Some(SchemaType::Object) => AttributeType::Record,
        Some(SchemaType::Array | SchemaType::Null | SchemaType::Unknown) | None => {
            AttributeType::Any
        }
    }
}

fn has_foreign_key(properties: &IndexMap<String, SchemaOrRef>, own_name: &str, model: &str) -> bool {
    let candidates = foreign_key_candidates(model);
    properties
        .keys()
        .any(|key| key != own_name && candidates.iter().any(|c| c == key))
}

fn check_references(
    registry: &ModelRegistry,
    options: &TranslateOptions,
) -> Result<(), TransformError> {
    for model in registry {
        for rel in &model.relationships {
            if registry.contains(&rel.model) {
                continue;
            }
            if options.strict_refs {
                return Err(TransformError::DanglingRef {
                    schema: model.name.clone(),
                    property: rel.name.clone(),
                    model: rel.model.clone(),
                });
            }
            log::warn!(
                "{}.{} references `{}`, which the document does not declare",
                model.name,
                rel.name,
                rel.model
            );
        }
    }
    Ok(())
}
