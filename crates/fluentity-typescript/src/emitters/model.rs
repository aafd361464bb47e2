use fluentity_core::GeneratorError;
use fluentity_core::ir::ModelDefinition;
use minijinja::{AutoEscape, Environment, context};

use crate::type_mapper::{attribute_to_ts, relationship_to_ts};

use super::module_name;

/// Render the TypeScript source for one model.
pub fn emit_model(model: &ModelDefinition) -> Result<String, GeneratorError> {
    let render_error = |source: minijinja::Error| GeneratorError::Render {
        model: model.name.clone(),
        source: Box::new(source),
    };

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_template("model.ts.j2", include_str!("../../templates/model.ts.j2"))
        .map_err(render_error)?;
    let tmpl = env.get_template("model.ts.j2").map_err(render_error)?;

    let imports: Vec<minijinja::Value> = model
        .related_models()
        .into_iter()
        .map(|related| {
            context! {
                model => related,
                module => module_name(related),
            }
        })
        .collect();

    let attributes: Vec<minijinja::Value> = model
        .attributes
        .iter()
        .map(|attr| {
            context! {
                name => attr.name.clone(),
                ts_type => attribute_to_ts(attr),
                required => attr.required,
            }
        })
        .collect();

    let relationships: Vec<minijinja::Value> = model
        .relationships
        .iter()
        .map(|rel| {
            context! {
                name => rel.name.clone(),
                decorator => rel.rel_type.as_str(),
                model => rel.model.clone(),
                ts_type => relationship_to_ts(rel),
            }
        })
        .collect();

    // The attributes interface lists relationships too, always optional.
    let members: Vec<minijinja::Value> = attributes
        .iter()
        .cloned()
        .chain(model.relationships.iter().map(|rel| {
            context! {
                name => rel.name.clone(),
                ts_type => relationship_to_ts(rel),
                required => false,
            }
        }))
        .collect();

    log::debug!(
        "rendering model {} ({} imports, {} members)",
        model.name,
        imports.len(),
        members.len()
    );

    tmpl.render(context! {
        name => model.name.clone(),
        resource => model.resource.clone(),
        imports => imports,
        members => members,
        attributes => attributes,
        relationships => relationships,
    })
    .map_err(render_error)
}

#[cfg(test)]
mod tests {
    use fluentity_core::ir::{
        AttributeDefinition, AttributeType, RelationshipDefinition, RelationshipType,
    };

    use super::*;

    fn model(
        attributes: Vec<AttributeDefinition>,
        relationships: Vec<RelationshipDefinition>,
    ) -> ModelDefinition {
        ModelDefinition {
            name: "Media".to_string(),
            resource: "medias".to_string(),
            attributes,
            relationships,
        }
    }

    fn attr(name: &str, attr_type: AttributeType, is_array: bool, required: bool) -> AttributeDefinition {
        AttributeDefinition {
            name: name.to_string(),
            attr_type,
            is_array,
            required,
        }
    }

    fn rel(name: &str, rel_type: RelationshipType, model: &str) -> RelationshipDefinition {
        RelationshipDefinition {
            name: name.to_string(),
            rel_type,
            model: model.to_string(),
            foreign_key: None,
        }
    }

    #[test]
    fn test_full_output() {
        let media = model(
            vec![
                attr("id", AttributeType::Number, false, true),
                attr("tags", AttributeType::Any, true, false),
            ],
            vec![rel("user", RelationshipType::BelongsTo, "User")],
        );

        let expected = "\
import { Model, Attributes } from '@fluentity/core';
import { HasOne, HasMany, BelongsTo, BelongsToMany, Relation } from '@fluentity/core';
import { User } from './User';

/**
 * Interface defining the attributes for a Media model
 * @interface MediaAttributes
 * @extends {Attributes}
 */
export interface MediaAttributes extends Attributes {
  id: number;
  tags?: any[];
  user?: User;
}

/**
 * Media model class for interacting with the medias API endpoint
 * @class Media
 * @extends {Model<MediaAttributes>}
 */
export class Media extends Model<MediaAttributes> {
  /** The API endpoint resource name for this model */
  static resource = 'medias';

  declare id: number;
  declare tags?: any[];

  @BelongsTo(() => User)
  user: Relation<User>;
}
";
        assert_eq!(emit_model(&media).unwrap(), expected);
    }

    #[test]
    fn test_empty_model() {
        let output = emit_model(&model(vec![], vec![])).unwrap();
        assert!(output.contains("export interface MediaAttributes extends Attributes {\n}\n"));
        assert!(output.contains("  static resource = 'medias';\n}\n"));
        assert!(!output.contains("declare"));
        assert!(!output.contains("from './"));
    }

    #[test]
    fn test_imports_are_distinct() {
        let output = emit_model(&model(
            vec![],
            vec![
                rel("owner", RelationshipType::BelongsTo, "User"),
                rel("viewers", RelationshipType::HasMany, "User"),
                rel("album", RelationshipType::HasOne, "PhotoAlbum"),
            ],
        ))
        .unwrap();

        assert_eq!(output.matches("import { User } from './User';").count(), 1);
        assert!(output.contains("import { PhotoAlbum } from './PhotoAlbum';"));
        assert!(output.contains("  viewers?: User[];\n"));
        assert!(output.contains("  @HasMany(() => User)\n  viewers: Relation<User[]>;"));
        assert!(output.contains("  @HasOne(() => PhotoAlbum)\n  album: Relation<PhotoAlbum>;"));
    }

    #[test]
    fn test_record_type_is_not_escaped() {
        let output = emit_model(&model(
            vec![attr("meta", AttributeType::Record, false, false)],
            vec![],
        ))
        .unwrap();
        assert!(output.contains("  declare meta?: Record<string, any>;\n"));
    }

    #[test]
    fn test_deterministic() {
        let media = model(
            vec![attr("title", AttributeType::String, false, true)],
            vec![rel("author", RelationshipType::BelongsToMany, "User")],
        );
        assert_eq!(emit_model(&media).unwrap(), emit_model(&media).unwrap());
    }
}
