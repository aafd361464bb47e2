use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use super::models::ModelDefinition;

/// Insertion-ordered map from PascalCase model name to its definition.
///
/// Registering a name twice replaces the earlier definition in place: the
/// entry keeps its original position and holds the last definition written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelRegistry {
    models: IndexMap<String, ModelDefinition>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model under its `name`, returning the definition it replaced.
    pub fn register(&mut self, model: ModelDefinition) -> Option<ModelDefinition> {
        self.models.insert(model.name.clone(), model)
    }

    pub fn get(&self, name: &str) -> Option<&ModelDefinition> {
        self.models.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelDefinition> {
        self.models.values()
    }
}

impl<'a> IntoIterator for &'a ModelRegistry {
    type Item = &'a ModelDefinition;
    type IntoIter = indexmap::map::Values<'a, String, ModelDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.values()
    }
}

impl FromIterator<ModelDefinition> for ModelRegistry {
    fn from_iter<I: IntoIterator<Item = ModelDefinition>>(iter: I) -> Self {
        let mut registry = ModelRegistry::new();
        for model in iter {
            registry.register(model);
        }
        registry
    }
}

impl Serialize for ModelRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.models.values())
    }
}
