//! `memory add-record` / `memory add-way` commands
//!
//! # Usage
//! ```bash
//! memory add-record "API timeout" "Timeout is 30s"
//! memory add-way "Release checklist" "Tag, build, publish"
//! ```

use anyhow::{Context, Result};
use clap::Args;

use crate::config::Layout;
use crate::core::memory::{Category, MemoryWriter};

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Title of the entry (also used for the filename)
    pub title: String,

    /// Markdown content of the entry
    pub content: String,
}

pub fn run(category: Category, args: AddArgs, layout: &Layout) -> Result<()> {
    let writer = MemoryWriter::new(layout.memory_dir());

    let path = writer
        .write(category, &args.title, &args.content)
        .with_context(|| format!("Failed to write memory {}", category))?;

    println!("Wrote {}", layout.display_relative(&path));

    Ok(())
}
