use std::collections::BTreeMap;

use catalog_model::{CellValue, ComponentConfig, ComponentRow, DiagramDocument};
use tracing::debug;

use crate::legacy::{fill_slots, find_slots};
use crate::placeholder::substitute;

/// Rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Fill elements whose id is `val_<key>` with the raw value of `key`.
    pub legacy_fallback: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            legacy_fallback: true,
        }
    }
}

/// Renders diagram documents for a selected data row.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateEngine {
    options: RenderOptions,
}

impl TemplateEngine {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Substitute `values` into `document`.
    ///
    /// `{{ key }}` becomes the value followed by its unit from `units` when
    /// one is set, `{{ key_raw }}` the bare value. Placeholders naming
    /// unknown keys are kept verbatim; an empty `values` map returns the
    /// document unchanged.
    pub fn render(
        &self,
        document: &str,
        values: &BTreeMap<String, CellValue>,
        units: &BTreeMap<String, String>,
    ) -> String {
        if values.is_empty() {
            return document.to_string();
        }

        let slots = if self.options.legacy_fallback {
            find_slots(document, |key| values.contains_key(key)).unwrap_or_default()
        } else {
            Vec::new()
        };
        let raw: BTreeMap<String, String> = slots
            .iter()
            .filter_map(|slot| Some((slot.key.clone(), values.get(&slot.key)?.raw())))
            .collect();

        let mut replaced = 0;
        let mut unmatched = 0;
        let text = fill_slots(document, &slots, &raw, |gap| {
            let substitution = substitute(gap, values, units);
            replaced += substitution.replaced;
            unmatched += substitution.unmatched;
            substitution.text
        });
        debug!(
            replaced,
            unmatched,
            legacy = slots.len(),
            "placeholders substituted"
        );
        text
    }

    /// Render a component diagram for one of its rows.
    ///
    /// Units come from the component's columns. With no row the diagram is
    /// returned as authored.
    pub fn render_row(
        &self,
        diagram: &DiagramDocument,
        config: &ComponentConfig,
        row: Option<&ComponentRow>,
    ) -> String {
        match row {
            Some(row) => self.render(diagram.as_str(), row, &config.units()),
            None => diagram.as_str().to_string(),
        }
    }
}

/// Render with the default options.
pub fn render(
    document: &str,
    values: &BTreeMap<String, CellValue>,
    units: &BTreeMap<String, String>,
) -> String {
    TemplateEngine::default().render(document, values, units)
}
