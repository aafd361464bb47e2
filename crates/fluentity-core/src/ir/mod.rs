pub mod models;
pub mod registry;

pub use models::{
    AttributeDefinition, AttributeType, ModelDefinition, RelationshipDefinition, RelationshipType,
};
pub use registry::ModelRegistry;
