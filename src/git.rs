use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{Result, ScaffoldError};

/// Initializes a repository in a freshly scaffolded project.
pub trait VersionControl {
    /// Returns whatever the tool printed on stdout.
    fn init(&self, path: &Path) -> Result<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Git;

impl VersionControl for Git {
    fn init(&self, path: &Path) -> Result<String> {
        debug!(path = %path.display(), "running git init");

        let output = Command::new("git")
            .arg("init")
            .arg(path)
            .output()
            .map_err(|source| ScaffoldError::VcsUnavailable { program: "git", source })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ScaffoldError::VcsFailed { program: "git", status: output.status, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
