use std::collections::BTreeMap;

use serde::Deserialize;

/// A registry location images can be pulled from or pushed to.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub additional_names: Vec<String>,
    pub registry: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub destination_mappings: BTreeMap<String, String>,
}

impl Repository {
    /// Registry host joined with the suffix, if any.
    pub fn registry_path(&self) -> String {
        if self.suffix.is_empty() {
            self.registry.clone()
        } else {
            format!("{}/{}", self.registry, self.suffix)
        }
    }

    pub fn matches(&self, selector: &str) -> bool {
        self.name == selector || self.additional_names.iter().any(|n| n == selector)
    }
}
