use std::io::ErrorKind;
use std::process::Command;

use tracing::debug;

use crate::error::RepushError;

/// An external docker-compatible CLI such as `docker` or `podman`.
#[derive(Debug, Clone)]
pub struct ContainerTool {
    program: String,
}

impl ContainerTool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn pull(&self, image: &str) -> Result<String, RepushError> {
        self.run("pull", &[image])
    }

    pub fn tag(&self, source: &str, destination: &str) -> Result<String, RepushError> {
        self.run("tag", &[source, destination])
    }

    pub fn push(&self, image: &str) -> Result<String, RepushError> {
        self.run("push", &[image])
    }

    /// Run `<program> <action> <args..>` and return stdout and stderr combined.
    fn run(&self, action: &str, args: &[&str]) -> Result<String, RepushError> {
        debug!(program = %self.program, action, ?args, "running container tool");

        let output = Command::new(&self.program)
            .arg(action)
            .args(args)
            .output()
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => RepushError::ContainerToolNotFound {
                    tool: self.program.clone(),
                },
                _ => RepushError::ContainerSpawn {
                    tool: self.program.clone(),
                    source,
                },
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        let combined = combined.trim_end().to_string();

        if !output.status.success() {
            return Err(RepushError::ContainerCommand {
                tool: self.program.clone(),
                action: action.to_string(),
                output: combined,
            });
        }
        Ok(combined)
    }
}
