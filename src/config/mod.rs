//! Configuration module
//!
//! There is no configuration file. Everything the tools need is a set of
//! directories derived from one repository root, resolved once at startup.

use std::path::{Path, PathBuf};

use anyhow::Result;

/// Directory holding workspaces, relative to the repository root
pub const WORKSPACES_DIR: &str = "workspaces";

/// Directory holding memory notes, relative to the repository root
pub const MEMORY_DIR: &str = "memory";

/// Default template tree, relative to the repository root
pub const DEFAULT_TEMPLATES_DIR: &str = "tools/templates";

/// Resolved repository layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    /// Build a layout rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the layout from an optional explicit root.
    ///
    /// Priority:
    /// 1. `--root` argument
    /// 2. Nearest ancestor of the current directory containing `.git`
    /// 3. Current directory
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(root) = explicit {
            return Ok(Self::new(root));
        }

        let cwd = std::env::current_dir()?;
        let root = find_repo_root(&cwd).unwrap_or(cwd);
        tracing::debug!(root = %root.display(), "resolved repository root");
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn workspaces_dir(&self) -> PathBuf {
        self.root.join(WORKSPACES_DIR)
    }

    pub fn memory_dir(&self) -> PathBuf {
        self.root.join(MEMORY_DIR)
    }

    pub fn default_templates_dir(&self) -> PathBuf {
        self.root.join(DEFAULT_TEMPLATES_DIR)
    }

    /// Render `path` relative to the root when it lives under it
    pub fn display_relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// Find the repository root by walking up from `start`
///
/// Traverses parent directories until a `.git` entry is found,
/// the same way git itself does.
fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}
