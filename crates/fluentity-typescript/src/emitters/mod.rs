pub mod model;

use fluentity_core::transform::naming::to_camel_case;

/// Module specifier (without `./` or extension) a model is imported from.
///
/// - `User` → `User`
/// - `user_profile` → `userProfile`
pub fn module_name(model: &str) -> String {
    to_camel_case(model)
}

/// File name a model is written to.
pub fn file_name(model: &str) -> String {
    format!("{}.ts", module_name(model))
}
