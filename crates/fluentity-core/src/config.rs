use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Project configuration loaded from `.fluentity.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FluentityConfig {
    /// Directory generated model files are written to.
    pub output: String,
    /// Fail when a `$ref` points at a schema the document does not declare.
    pub strict_refs: bool,
    /// Overwrite existing model files without asking.
    pub force: bool,
}

impl Default for FluentityConfig {
    fn default() -> Self {
        Self {
            output: DEFAULT_OUTPUT_DIR.to_string(),
            strict_refs: false,
            force: false,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".fluentity.yaml";

/// Output directory used when neither the command line nor the config names one.
pub const DEFAULT_OUTPUT_DIR: &str = "./models";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<FluentityConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config: FluentityConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# fluentity configuration
output: ./models        # where generated models are written

# Abort `parse:openapi` when a $ref names a schema missing from the document.
strict_refs: false

# Overwrite existing model files without asking (generate:model).
force: false
"#
}
