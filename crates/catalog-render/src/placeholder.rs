use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use catalog_model::CellValue;

/// Suffix selecting the bare value of a key.
pub const RAW_SUFFIX: &str = "_raw";

/// `{{ name }}` with optional whitespace around the name.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([^{}\s]+)\s*\}\}").expect("Invalid placeholder regex")
});

/// Result of a placeholder pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub text: String,
    pub replaced: usize,
    pub unmatched: usize,
}

/// Replace every placeholder whose name resolves against `values`.
///
/// All placeholders are resolved in one scan over the original document, so
/// replacement text is never scanned again. A name that is itself a key wins
/// over the `_raw` reading, i.e. with keys `H` and `H_raw` the placeholder
/// `{{H_raw}}` shows the value of `H_raw`. Unknown names are left untouched.
pub fn substitute(
    document: &str,
    values: &BTreeMap<String, CellValue>,
    units: &BTreeMap<String, String>,
) -> Substitution {
    let mut replaced = 0;
    let mut unmatched = 0;
    let text = PLACEHOLDER_REGEX.replace_all(document, |caps: &Captures<'_>| {
        match resolve(&caps[1], values, units) {
            Some(value) => {
                replaced += 1;
                value
            }
            None => {
                unmatched += 1;
                caps[0].to_string()
            }
        }
    });
    Substitution {
        text: text.into_owned(),
        replaced,
        unmatched,
    }
}

fn resolve(
    name: &str,
    values: &BTreeMap<String, CellValue>,
    units: &BTreeMap<String, String>,
) -> Option<String> {
    if let Some(value) = values.get(name) {
        return Some(value.display_with_unit(units.get(name).map(String::as_str)));
    }
    let key = name.strip_suffix(RAW_SUFFIX)?;
    values.get(key).map(CellValue::raw)
}

/// Placeholder names used by a document, in order of first appearance.
pub fn placeholder_names(document: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER_REGEX.captures_iter(document) {
        let name = &caps[1];
        if !names.iter().any(|known| known == name) {
            names.push(name.to_string());
        }
    }
    names
}
