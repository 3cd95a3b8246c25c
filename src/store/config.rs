use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RepushError;
use crate::model::Config;

const CONFIG_FILE: &str = "config.json";

/// A loaded configuration together with the file it came from.
pub struct ConfigStore {
    path: PathBuf,
    config: Config,
}

impl ConfigStore {
    /// Load the config from `explicit`, or from the first discovered location.
    pub fn open(explicit: Option<&Path>) -> Result<Self, RepushError> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => discover()?,
        };
        let config = load_config(&path)?;
        Ok(Self { path, config })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Candidate locations, in lookup order: next to the executable, then the
/// user config directory.
fn candidates() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        paths.push(dir.join(CONFIG_FILE));
    }
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("repush").join(CONFIG_FILE));
    }
    paths
}

fn discover() -> Result<PathBuf, RepushError> {
    let paths = candidates();
    if let Some(found) = paths.iter().find(|p| p.is_file()) {
        return Ok(found.clone());
    }
    let searched = paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(RepushError::ConfigNotFound { searched })
}

fn load_config(path: &Path) -> Result<Config, RepushError> {
    let content = fs::read_to_string(path).map_err(|source| RepushError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(path, &content)
}

fn parse_config(path: &Path, content: &str) -> Result<Config, RepushError> {
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        toml::from_str(content).map_err(|source| RepushError::ConfigParseToml {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_json::from_str(content).map_err(|source| RepushError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}
