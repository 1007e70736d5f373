use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown command: {name}")]
    UnknownCommand { name: String },

    #[error("neither command nor workflow file found for '{name}' (tried: {})", .tried.join(", "))]
    MissingDocument {
        name: String,
        tried: Vec<&'static str>,
    },

    #[error("failed to read '{}'", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DispatchError {
    /// Process exit status for this failure. Every dispatch failure ends the
    /// invocation with status 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::UnknownCommand { .. } => 1,
            DispatchError::MissingDocument { .. } => 1,
            DispatchError::Unreadable { .. } => 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("cannot determine executable location")]
    Executable(#[source] std::io::Error),

    #[error("executable path has no installation root: {}", .0.display())]
    NoRoot(PathBuf),
}
