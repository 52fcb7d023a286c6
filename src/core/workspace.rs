//! Workspace - creation and seeding of workspace directories
//!
//! A workspace is `<root>/workspaces/<name>`. Creation is idempotent: an
//! existing workspace is reported, never modified beyond seeding.
//!
//! # Key Points
//! - Existence checks return tagged states instead of branching inline
//! - A missing template tree is informational, not an error
//! - Seeding runs whenever requested, also for pre-existing workspaces

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use super::error::{Error, IoContext, Result};
use super::template::{copy_templates, CopyReport};
use crate::config::Layout;

/// Whether the workspace directory was created by this call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceState {
    Created,
    AlreadyExists,
}

/// Probe result for a template tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Found(PathBuf),
    Missing(PathBuf),
}

impl TemplateSource {
    /// Check whether `path` exists
    pub fn probe(path: PathBuf) -> Self {
        if path.exists() {
            Self::Found(path)
        } else {
            Self::Missing(path)
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Found(p) | Self::Missing(p) => p,
        }
    }
}

/// What happened during seeding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { from: PathBuf, report: CopyReport },
    Skipped { missing: PathBuf },
}

/// Result of `WorkspaceInitializer::init`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub name: String,
    pub path: PathBuf,
    pub state: WorkspaceState,
    /// `None` when seeding was not requested
    pub seed: Option<SeedOutcome>,
}

/// Creates and seeds workspaces under a layout's workspaces root
#[derive(Debug, Clone)]
pub struct WorkspaceInitializer {
    layout: Layout,
}

impl WorkspaceInitializer {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    /// Create the workspace, then seed it if requested.
    ///
    /// `templates` overrides the layout's default template tree.
    pub fn init(&self, name: &str, seed: bool, templates: Option<&Path>) -> Result<InitReport> {
        let (path, state) = self.ensure_workspace(name)?;

        let seed = if seed {
            let source = TemplateSource::probe(
                templates
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.layout.default_templates_dir()),
            );
            Some(self.seed(&path, source)?)
        } else {
            None
        };

        Ok(InitReport {
            name: name.to_string(),
            path,
            state,
            seed,
        })
    }

    /// Create `<workspaces>/<name>` if absent
    pub fn ensure_workspace(&self, name: &str) -> Result<(PathBuf, WorkspaceState)> {
        validate_name(name)?;

        let root = self.layout.workspaces_dir();
        fs::create_dir_all(&root).at(&root)?;

        let path = root.join(name);
        if path.exists() {
            debug!(workspace = %path.display(), "workspace already present");
            return Ok((path, WorkspaceState::AlreadyExists));
        }

        fs::create_dir_all(&path).at(&path)?;
        info!(workspace = %path.display(), "created workspace");
        Ok((path, WorkspaceState::Created))
    }

    /// Copy a template tree into an existing workspace
    pub fn seed(&self, workspace: &Path, source: TemplateSource) -> Result<SeedOutcome> {
        match source {
            TemplateSource::Missing(missing) => {
                debug!(templates = %missing.display(), "template tree missing");
                Ok(SeedOutcome::Skipped { missing })
            }
            TemplateSource::Found(from) => {
                let report = copy_templates(&from, workspace)?;
                info!(
                    templates = %from.display(),
                    files = report.copied.len(),
                    skipped = report.skipped,
                    "seeded workspace"
                );
                Ok(SeedOutcome::Seeded { from, report })
            }
        }
    }
}

/// Accept only a single normal path component
fn validate_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(Error::InvalidWorkspaceName(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, WorkspaceInitializer) {
        let dir = TempDir::new().unwrap();
        let init = WorkspaceInitializer::new(Layout::new(dir.path()));
        (dir, init)
    }

    fn write_templates(root: &Path) {
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("a.txt"), "A").unwrap();
        fs::write(root.join("sub/b.txt"), "B").unwrap();
    }

    #[test]
    fn test_create_then_exists() -> Result<()> {
        let (dir, init) = setup();

        let first = init.init("demo", false, None)?;
        assert_eq!(first.state, WorkspaceState::Created);
        assert_eq!(first.path, dir.path().join("workspaces/demo"));
        assert!(first.path.is_dir());
        assert!(first.seed.is_none());

        fs::write(first.path.join("notes.txt"), "mine").unwrap();

        let second = init.init("demo", false, None)?;
        assert_eq!(second.state, WorkspaceState::AlreadyExists);
        assert_eq!(
            fs::read_to_string(second.path.join("notes.txt")).unwrap(),
            "mine"
        );
        Ok(())
    }

    #[test]
    fn test_seed_from_explicit_templates() -> Result<()> {
        let (dir, init) = setup();
        let templates = dir.path().join("tpl");
        write_templates(&templates);

        let report = init.init("seeded", true, Some(&templates))?;

        let ws = dir.path().join("workspaces/seeded");
        assert_eq!(fs::read_to_string(ws.join("a.txt")).unwrap(), "A");
        assert_eq!(fs::read_to_string(ws.join("sub/b.txt")).unwrap(), "B");
        match report.seed {
            Some(SeedOutcome::Seeded { from, report }) => {
                assert_eq!(from, templates);
                assert_eq!(report.copied.len(), 2);
            }
            other => panic!("expected seeding, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_seed_uses_default_templates() -> Result<()> {
        let (dir, init) = setup();
        write_templates(&dir.path().join("tools/templates"));

        init.init("defaulted", true, None)?;

        assert!(dir.path().join("workspaces/defaulted/sub/b.txt").exists());
        Ok(())
    }

    #[test]
    fn test_missing_templates_skips() -> Result<()> {
        let (dir, init) = setup();
        let missing = dir.path().join("nope");

        let report = init.init("bare", true, Some(&missing))?;

        assert_eq!(report.seed, Some(SeedOutcome::Skipped { missing }));
        let entries: Vec<_> = fs::read_dir(&report.path).unwrap().collect();
        assert!(entries.is_empty());
        Ok(())
    }

    #[test]
    fn test_seed_existing_workspace() -> Result<()> {
        let (dir, init) = setup();
        let templates = dir.path().join("tpl");
        write_templates(&templates);
        init.init("again", false, None)?;

        let report = init.init("again", true, Some(&templates))?;

        assert_eq!(report.state, WorkspaceState::AlreadyExists);
        assert!(matches!(report.seed, Some(SeedOutcome::Seeded { .. })));
        assert!(report.path.join("a.txt").exists());
        Ok(())
    }

    #[test]
    fn test_invalid_names() {
        let (_dir, init) = setup();
        for name in ["", "..", ".", "a/b", "/abs"] {
            let err = init.init(name, false, None).unwrap_err();
            assert!(
                matches!(err, Error::InvalidWorkspaceName(_)),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_template_source_probe() {
        let dir = TempDir::new().unwrap();
        let present = TemplateSource::probe(dir.path().to_path_buf());
        assert!(matches!(present, TemplateSource::Found(_)));

        let absent = TemplateSource::probe(dir.path().join("absent"));
        assert_eq!(absent.path(), dir.path().join("absent"));
        assert!(matches!(absent, TemplateSource::Missing(_)));
    }
}
