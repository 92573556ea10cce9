//! lgrep - a minimal literal line-search tool
//!
//! lgrep provides:
//! - Literal substring search over newline-delimited files
//! - Optional case-insensitive matching
//! - Wildcard expansion of a single file argument (`*`, `?`)
//! - Output as plain text, jsonl or json

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod engine;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
