use std::collections::BTreeMap;

use serde::Deserialize;

use super::repository::Repository;

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub repositories: Vec<Repository>,
    #[serde(default)]
    pub destination_mappings: BTreeMap<String, String>,
}

impl Config {
    /// First repository, in config order, whose name or alias equals `selector`.
    pub fn find_by_selector(&self, selector: &str) -> Option<&Repository> {
        self.repositories.iter().find(|r| r.matches(selector))
    }
}
