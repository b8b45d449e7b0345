//! Shared command context passed into command families.

use crate::runtime::config::{load_design_config, DesignConfig};
use crate::runtime::error::{XtaskError, XtaskResult};
use std::path::{Path, PathBuf};

/// Shared execution context for xtask command families.
#[derive(Clone, Debug)]
pub struct CommandContext {
    root: PathBuf,
}

impl CommandContext {
    /// Create a new command context rooted at the current workspace.
    pub fn new() -> XtaskResult<Self> {
        Ok(Self::with_root(workspace_root()?))
    }

    /// Context rooted at an explicit directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Workspace root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validated design tooling config for this workspace.
    pub fn design_config(&self) -> XtaskResult<DesignConfig> {
        load_design_config(&self.root)
    }
}

fn workspace_root() -> XtaskResult<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| XtaskError::io("xtask lives under workspace root"))
}
