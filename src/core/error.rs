//! Error type for workspace and memory operations

use std::path::{Path, PathBuf};

/// Errors surfaced by the library.
///
/// Expected absences (workspace already present, template tree missing) are
/// not errors; they are reported through `WorkspaceState` and
/// `TemplateSource`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid workspace name: {0:?}")]
    InvalidWorkspaceName(String),
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to walk template tree: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Attach a path to a raw `io::Result`
pub(crate) trait IoContext<T> {
    fn at(self, path: &Path) -> Result<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn at(self, path: &Path) -> Result<T> {
        self.map_err(|e| Error::io(path, e))
    }
}
