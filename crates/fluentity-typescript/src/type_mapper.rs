use fluentity_core::ir::{AttributeDefinition, RelationshipDefinition};

/// TypeScript type of an attribute, with `[]` for array attributes.
pub fn attribute_to_ts(attr: &AttributeDefinition) -> String {
    if attr.is_array {
        format!("{}[]", attr.attr_type)
    } else {
        attr.attr_type.to_string()
    }
}

/// TypeScript type of a relationship: the related model, or a list of it
/// for `HasMany` / `BelongsToMany`.
pub fn relationship_to_ts(rel: &RelationshipDefinition) -> String {
    if rel.rel_type.is_collection() {
        format!("{}[]", rel.model)
    } else {
        rel.model.clone()
    }
}
