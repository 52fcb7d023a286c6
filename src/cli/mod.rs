//! CLI module - Command definitions and handlers
//!
//! Two parsers, one per binary:
//! - [`WorkspaceCli`] for `init-workspace`
//! - [`MemoryCli`] for `memory`

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Layout;

pub mod add;
pub mod init;

/// Options shared by both tools
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Repository root (default: nearest ancestor with .git, else current dir)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    pub fn layout(&self) -> anyhow::Result<Layout> {
        Layout::resolve(self.root.as_deref())
    }
}

/// init-workspace - create and optionally seed a workspace directory
#[derive(Parser, Debug)]
#[command(name = "init-workspace")]
#[command(author, version, about, long_about = None)]
pub struct WorkspaceCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub init: init::InitArgs,
}

/// memory - store memory records or ways
#[derive(Parser, Debug)]
#[command(name = "memory")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct MemoryCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    // None prints help and exits cleanly
    #[command(subcommand)]
    pub command: Option<MemoryCommands>,
}

#[derive(Subcommand, Debug)]
pub enum MemoryCommands {
    /// Add a memory record
    AddRecord(add::AddArgs),

    /// Add a memory way
    AddWay(add::AddArgs),
}

/// Initialize tracing on stderr so stdout stays reserved for status lines.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects `debug`
/// and the default is `warn`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
