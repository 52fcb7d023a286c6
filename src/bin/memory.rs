//! memory - Entry point
//!
//! Usage: memory <add-record|add-way> <title> <content>

use anyhow::Result;
use clap::{CommandFactory, Parser};

use wsmem::cli::{init_tracing, MemoryCli, MemoryCommands};
use wsmem::Category;

fn main() -> Result<()> {
    let cli = MemoryCli::parse();
    init_tracing(cli.global.verbose);

    let (category, args) = match cli.command {
        Some(MemoryCommands::AddRecord(args)) => (Category::Record, args),
        Some(MemoryCommands::AddWay(args)) => (Category::Way, args),
        None => {
            MemoryCli::command().print_help()?;
            return Ok(());
        }
    };

    let layout = cli.global.layout()?;
    wsmem::cli::add::run(category, args, &layout)
}
