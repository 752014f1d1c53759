use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("the project already exists: {}", .0.display())]
    TargetExists(PathBuf),

    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to run `{program}`")]
    VcsUnavailable {
        program: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("`{program} init` exited with {status}: {stderr}")]
    VcsFailed { program: &'static str, status: ExitStatus, stderr: String },
}

impl ScaffoldError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { action, path: path.into(), source }
    }
}
