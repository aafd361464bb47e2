use fluentity_core::CodeGenerator;
use fluentity_core::ir::{ModelDefinition, ModelRegistry};
use fluentity_core::{parse, transform};
use fluentity_typescript::TypescriptModelGenerator;

const USER_MEDIA: &str = include_str!("../../fluentity-core/tests/fixtures/user-media.json");

fn user_media_registry() -> ModelRegistry {
    let doc = parse::from_json(USER_MEDIA).unwrap();
    transform::translate(&doc).unwrap()
}

#[test]
fn one_file_per_model_in_registry_order() {
    let files = TypescriptModelGenerator
        .generate(&user_media_registry())
        .unwrap();
    let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["User.ts", "Media.ts", "Thumbnail.ts"]);
}

#[test]
fn user_model_contents() {
    let files = TypescriptModelGenerator
        .generate(&user_media_registry())
        .unwrap();
    let user = &files[0].content;

    assert!(user.contains("import { Media } from './Media';"));
    assert!(user.contains("export class User extends Model<UserAttributes> {"));
    assert!(user.contains("  static resource = 'users';"));
    assert!(user.contains("  id: number;\n  name: string;\n  email?: string;\n  media?: Media[];\n"));
    assert!(user.contains("  declare email?: string;"));
    assert!(user.contains("  @HasMany(() => Media)\n  media: Relation<Media[]>;"));
}

#[test]
fn belongs_to_and_has_one_decorators() {
    let files = TypescriptModelGenerator
        .generate(&user_media_registry())
        .unwrap();

    assert!(files[1].content.contains("  @BelongsTo(() => User)\n  user: Relation<User>;"));
    assert!(files[2].content.contains("  @HasOne(() => User)\n  user: Relation<User>;"));
}

#[test]
fn file_names_use_camel_case() {
    let registry: ModelRegistry = std::iter::once(ModelDefinition {
        name: "Blog_post".to_string(),
        resource: "blog_posts".to_string(),
        attributes: vec![],
        relationships: vec![],
    })
    .collect();

    let files = TypescriptModelGenerator.generate(&registry).unwrap();
    assert_eq!(files[0].path, "BlogPost.ts");
}

#[test]
fn empty_registry_generates_nothing() {
    let files = TypescriptModelGenerator
        .generate(&ModelRegistry::new())
        .unwrap();
    assert!(files.is_empty());
}
