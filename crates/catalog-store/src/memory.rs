use std::collections::BTreeMap;

use catalog_model::{CatalogError, ComponentConfig, DiagramDocument, Result};

use crate::paths::normalize_component_path;
use crate::source::CatalogSource;

#[derive(Debug, Clone, Default)]
struct StoredComponent {
    config: Option<ComponentConfig>,
    diagram: Option<DiagramDocument>,
}

/// In-memory catalog, listed in insertion order.
///
/// Either half of a component may be absent, which loads as not found.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    order: Vec<String>,
    components: BTreeMap<String, StoredComponent>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_component(
        mut self,
        path: &str,
        config: ComponentConfig,
        diagram: impl Into<DiagramDocument>,
    ) -> Self {
        self.insert_config(path, config);
        self.insert_diagram(path, diagram);
        self
    }

    pub fn insert_config(&mut self, path: &str, config: ComponentConfig) {
        self.entry(path).config = Some(config);
    }

    /// Parse and store a JSON configuration.
    pub fn insert_config_json(&mut self, path: &str, json: &str) -> Result<()> {
        let config = serde_json::from_str(json).map_err(|e| CatalogError::format(path, e.to_string()))?;
        self.insert_config(path, config);
        Ok(())
    }

    pub fn insert_diagram(&mut self, path: &str, diagram: impl Into<DiagramDocument>) {
        self.entry(path).diagram = Some(diagram.into());
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Paths are stored in canonical form so listed paths load back. A path
    /// that never names a component is kept as given and loads as not found.
    fn entry(&mut self, path: &str) -> &mut StoredComponent {
        let key = normalize_component_path(path).unwrap_or_else(|_| path.to_string());
        if !self.components.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.components.entry(key).or_default()
    }
}

impl CatalogSource for MemoryStore {
    fn list_component_paths(&self) -> Result<Vec<String>> {
        Ok(self.order.clone())
    }

    fn load_component(&self, path: &str) -> Result<(ComponentConfig, DiagramDocument)> {
        let canonical = normalize_component_path(path)?;
        let stored = self
            .components
            .get(&canonical)
            .ok_or_else(|| CatalogError::not_found(&canonical))?;
        let (Some(config), Some(diagram)) = (&stored.config, &stored.diagram) else {
            return Err(CatalogError::not_found(&canonical));
        };
        config.validate(&canonical)?;
        Ok((config.clone(), diagram.clone()))
    }
}
