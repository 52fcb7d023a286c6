//! wsmem - workspace scaffolding and memory notes
//!
//! Two small tools that operate on a repository tree:
//!
//! - `init-workspace` creates `workspaces/<name>` and optionally seeds it
//!   from a template tree.
//! - `memory` appends timestamped markdown notes to `memory/records` or
//!   `memory/ways`.
//!
//! ## Key Concepts
//!
//! - **Layout**: every root directory is resolved once and passed in
//! - **Tagged existence checks**: `WorkspaceState`, `TemplateSource`
//! - **Append-only notes**: entries are written once, named `<ts>_<slug>.md`

pub mod cli;
pub mod config;
pub mod core;

pub use crate::config::Layout;
pub use crate::core::error::{Error, Result};
pub use crate::core::memory::{Category, MemoryWriter};
pub use crate::core::slug::slugify;
pub use crate::core::template::{copy_templates, CopyReport};
pub use crate::core::workspace::{
    InitReport, SeedOutcome, TemplateSource, WorkspaceInitializer, WorkspaceState,
};
