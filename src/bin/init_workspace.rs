//! init-workspace - Entry point
//!
//! Usage: init-workspace <workspace_name> [--seed] [--templates <path>]

use anyhow::Result;
use clap::Parser;

use wsmem::cli::{init_tracing, WorkspaceCli};

fn main() -> Result<()> {
    let cli = WorkspaceCli::parse();
    init_tracing(cli.global.verbose);

    let layout = cli.global.layout()?;
    wsmem::cli::init::run(cli.init, layout)
}
