//! `init-workspace` command
//!
//! Creates `workspaces/<name>` and optionally seeds it.
//!
//! # Usage
//! ```bash
//! init-workspace demo                       # Create workspaces/demo
//! init-workspace demo --seed                # Seed from tools/templates
//! init-workspace demo --seed --templates t  # Seed from ./t
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::config::Layout;
use crate::core::workspace::{SeedOutcome, WorkspaceInitializer, WorkspaceState};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Name of the workspace to create
    pub workspace_name: String,

    /// Seed workspace with template files (from tools/templates by default)
    #[arg(long)]
    pub seed: bool,

    /// Path to template files (defaults to tools/templates)
    #[arg(long)]
    pub templates: Option<PathBuf>,
}

pub fn run(args: InitArgs, layout: Layout) -> Result<()> {
    let initializer = WorkspaceInitializer::new(layout);

    let report = initializer
        .init(&args.workspace_name, args.seed, args.templates.as_deref())
        .with_context(|| format!("Failed to initialize workspace '{}'", args.workspace_name))?;

    match report.state {
        WorkspaceState::Created => println!(
            "{} Created workspace directory: {}",
            "✓".green(),
            report.path.display()
        ),
        WorkspaceState::AlreadyExists => println!(
            "{} Workspace '{}' already exists: {}",
            "•".dimmed(),
            report.name,
            report.path.display()
        ),
    }

    match &report.seed {
        Some(SeedOutcome::Seeded { from, .. }) => println!(
            "{} Seeded workspace using templates from {}",
            "✓".green(),
            from.display()
        ),
        Some(SeedOutcome::Skipped { missing }) => println!(
            "{} Template directory '{}' not found; skipping seeding",
            "⚠".yellow(),
            missing.display()
        ),
        None => {}
    }

    Ok(())
}
