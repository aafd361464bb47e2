use fluentity_core::ir::ModelRegistry;
use fluentity_core::{CodeGenerator, GeneratedFile, GeneratorError};

use crate::emitters;

/// Fluentity TypeScript model generator: one `<camelCase(name)>.ts` per model.
pub struct TypescriptModelGenerator;

impl CodeGenerator for TypescriptModelGenerator {
    fn generate(&self, registry: &ModelRegistry) -> Result<Vec<GeneratedFile>, GeneratorError> {
        registry
            .iter()
            .map(|model| {
                Ok(GeneratedFile {
                    path: emitters::file_name(&model.name),
                    content: emitters::model::emit_model(model)?,
                })
            })
            .collect()
    }
}
