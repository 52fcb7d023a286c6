//! Template - recursive copy of a template tree into a workspace
//!
//! # Key Points
//! - Only regular files are copied; directories appear implicitly
//! - Relative structure is preserved
//! - Existing targets are overwritten without backup
//! - Symlinks are skipped (neither followed nor recreated)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::error::{Error, IoContext, Result};

/// Outcome of a template copy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Copied files, relative to the source root, in walk order
    pub copied: Vec<PathBuf>,
    /// Symlinks and special files that were not copied
    pub skipped: usize,
}

/// Copy every regular file under `source_dir` into `dest_dir`.
///
/// Intermediate directories are created as needed. File contents,
/// permission bits and modification time are carried over.
pub fn copy_templates(source_dir: &Path, dest_dir: &Path) -> Result<CopyReport> {
    let mut report = CopyReport::default();

    let walker = WalkDir::new(source_dir)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        let file_type = entry.file_type();

        if file_type.is_dir() {
            continue;
        }
        if !file_type.is_file() {
            debug!(path = %entry.path().display(), "skipping non-regular template entry");
            report.skipped += 1;
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(source_dir)
            .map_err(|_| {
                Error::io(
                    entry.path(),
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        "entry outside template root",
                    ),
                )
            })?
            .to_path_buf();
        let target = dest_dir.join(&relative);

        copy_file(entry.path(), &target)?;
        debug!(from = %entry.path().display(), to = %target.display(), "copied template file");
        report.copied.push(relative);
    }

    Ok(report)
}

/// Copy one file, creating parents and preserving mtime
fn copy_file(source: &Path, target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).at(parent)?;
    }

    // fs::copy carries permission bits along with the contents
    fs::copy(source, target).at(target)?;

    let modified = fs::metadata(source).and_then(|m| m.modified()).at(source)?;
    // Setting times only needs ownership, so a read-only handle works for
    // targets that inherited a read-only mode
    fs::File::open(target)
        .and_then(|f| f.set_modified(modified))
        .at(target)?;

    Ok(())
}
