//! Memory - timestamped markdown notes
//!
//! Entries live in one of two categories:
//! - **records**: `memory/records/<ts>_<slug>.md`
//! - **ways**: `memory/ways/<ts>_<slug>.md`
//!
//! Entries are written once and never touched again. Two entries with the
//! same slug in the same second share a filename; the later one wins.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Local, TimeZone};
use tracing::debug;

use super::error::{IoContext, Result};
use super::slug::slugify;

/// Sortable, second-resolution timestamp used as the filename prefix
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Memory category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Record,
    Way,
}

impl Category {
    /// Directory name under the memory root
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Record => "records",
            Category::Way => "ways",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Record => write!(f, "record"),
            Category::Way => write!(f, "way"),
        }
    }
}

/// Build the filename for an entry
pub fn entry_filename<Tz>(at: &DateTime<Tz>, title: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}.md", at.format(TIMESTAMP_FORMAT), slugify(title))
}

/// Render the markdown body of an entry
pub fn render_entry(title: &str, content: &str) -> String {
    format!("# {}\n\n{}\n", title, content)
}

/// Writes memory entries under a memory root
#[derive(Debug, Clone)]
pub struct MemoryWriter {
    root: PathBuf,
}

impl MemoryWriter {
    /// `root` is the memory directory itself (e.g. `<repo>/memory`)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory for a category
    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.dir_name())
    }

    /// Write an entry stamped with the current local time
    pub fn write(&self, category: Category, title: &str, content: &str) -> Result<PathBuf> {
        self.write_at(category, title, content, &Local::now())
    }

    /// Write an entry stamped with `at`
    pub fn write_at<Tz>(
        &self,
        category: Category,
        title: &str,
        content: &str,
        at: &DateTime<Tz>,
    ) -> Result<PathBuf>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let dir = self.category_dir(category);
        fs::create_dir_all(&dir).at(&dir)?;

        let path = dir.join(entry_filename(at, title));
        fs::write(&path, render_entry(title, content)).at(&path)?;

        debug!(%category, path = %path.display(), "wrote memory entry");
        Ok(path)
    }
}
