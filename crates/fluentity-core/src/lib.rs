pub mod config;
pub mod dialogue;
pub mod error;
pub mod ir;
pub mod parse;
pub mod transform;

pub use error::GeneratorError;

/// A generated file with path and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for code generators that produce files from a model registry.
pub trait CodeGenerator {
    fn generate(&self, registry: &ir::ModelRegistry) -> Result<Vec<GeneratedFile>, GeneratorError>;
}
