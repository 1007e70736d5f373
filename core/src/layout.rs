//! Installation layout.
//!
//! The dispatcher is installed as `<root>/bin/gsd`; documents live under
//! `<root>`. Nothing here reads configuration or the environment: the root is
//! always derived from where the program itself sits.

use std::path::{Path, PathBuf};

use crate::error::LayoutError;

const TOOLS_SCRIPT: &str = "bin/gsd-tools.cjs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
    program: PathBuf,
}

impl Layout {
    /// Layout of the running executable. Symlinks are resolved so that a
    /// linked `gsd` on `PATH` still finds the real installation.
    pub fn from_current_exe() -> Result<Self, LayoutError> {
        let exe = std::env::current_exe().map_err(LayoutError::Executable)?;
        let exe = std::fs::canonicalize(&exe).unwrap_or(exe);
        Self::from_program(exe)
    }

    /// Layout for a program at `program`: root is the program's directory,
    /// one level up.
    pub fn from_program(program: impl Into<PathBuf>) -> Result<Self, LayoutError> {
        let program = program.into();
        let root = program
            .parent()
            .and_then(Path::parent)
            .ok_or_else(|| LayoutError::NoRoot(program.clone()))?
            .to_path_buf();
        tracing::debug!("installation root: {}", root.display());
        Ok(Self { root, program })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The low-level tools script shipped next to the dispatcher.
    pub fn tools_script(&self) -> PathBuf {
        self.root.join(TOOLS_SCRIPT)
    }

    pub fn references_dir(&self) -> PathBuf {
        self.root.join("references")
    }

    pub fn workflows_dir(&self) -> PathBuf {
        self.root.join("workflows")
    }
}

/// `path` relative to `base` when it lies beneath it, otherwise `path`
/// unchanged.
pub fn display_relative(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
