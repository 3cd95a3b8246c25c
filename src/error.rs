use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepushError {
    #[error("failed to read config: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse config: {path}")]
    ConfigParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config not found; searched: {searched}")]
    ConfigNotFound { searched: String },

    #[error("could not find repository matching {image} source image")]
    SourceRepositoryNotFound { image: String },

    #[error("could not find repository matching {selector} destination")]
    DestinationRepositoryNotFound { selector: String },

    #[error("container tool '{tool}' is not installed or not in PATH")]
    ContainerToolNotFound { tool: String },

    #[error("failed to start container tool '{tool}'")]
    ContainerSpawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} {action} failed: {output}")]
    ContainerCommand {
        tool: String,
        action: String,
        output: String,
    },

    #[error("push aborted by user")]
    Aborted,
}
