pub mod naming;
pub mod schema_to_model;

use std::path::Path;

use crate::error::TransformError;
use crate::ir::ModelRegistry;
use crate::parse;

pub use schema_to_model::{TranslateOptions, translate, translate_with_options};

/// Read, parse and translate the document at `path` in one pass.
pub fn translate_path(
    path: &Path,
    options: &TranslateOptions,
) -> Result<ModelRegistry, TransformError> {
    let doc = parse::from_path(path)?;
    translate_with_options(&doc, options)
}
