//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::Parser;

use crate::core::model::SearchRequest;
use crate::core::render::{OutputFormat, Renderer};
use crate::engine;

/// lgrep - search files for a literal pattern, line by line.
#[derive(Parser, Debug)]
#[command(name = "lgrep")]
#[command(
    author,
    version,
    about,
    long_about = r#"lgrep prints every line of the given files that contains PATTERN.

The pattern is always a literal substring, never a regular expression.
When exactly one FILE argument is given and it contains a wildcard
character (* or ?), it is expanded against its directory; lists of two
or more arguments are never expanded.

Output lines take the form `<line>: <text>` when a single file was
searched, or `<file>:<line>: <text>` when more than one file was.
Unreadable files are reported on stderr and skipped; a completed search
exits 0 even when nothing matched.

Examples:
    lgrep "error" log.txt
    lgrep -i "todo" src/main.rs src/cli.rs
    lgrep "connection refused" "*.log"
"#
)]
pub struct Cli {
    /// Case-insensitive search.
    #[arg(
        short = 'i',
        long,
        long_help = "Match case-insensitively. Both the pattern and each line are\n\
lowercased over the ASCII range before the substring test; non-ASCII\n\
bytes are compared as-is."
    )]
    pub ignore_case: bool,

    /// Output format (text/jsonl/json).
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- text (default): `<line>: <text>` lines, filename-prefixed for multiple files\n\
- jsonl: one JSON object per match (best for piping into tools)\n\
- json: a single JSON array of matches"
    )]
    pub format: String,

    /// Literal pattern to search for.
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Files to search (one wildcarded argument is expanded).
    #[arg(value_name = "FILE", num_args = 1.., required = true)]
    pub files: Vec<String>,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();

    let request = SearchRequest::new(cli.pattern, cli.ignore_case, cli.files)?;
    let outcome = engine::search::search(&request);

    // Diagnostics are soft failures; they go to stderr and never change
    // the exit code.
    for diagnostic in &outcome.diagnostics {
        eprintln!("{}", diagnostic);
    }

    let renderer = Renderer::new(format);
    let output = renderer.render(&outcome);
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verifies() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_flag_and_positionals() {
        let cli = Cli::parse_from(["lgrep", "-i", "foo", "a.txt", "b.txt"]);
        assert!(cli.ignore_case);
        assert_eq!(cli.pattern, "foo");
        assert_eq!(cli.files, vec!["a.txt", "b.txt"]);
        assert_eq!(cli.format, "text");
    }

    #[test]
    fn test_cli_requires_file_argument() {
        let result = Cli::try_parse_from(["lgrep", "foo"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_pattern() {
        let result = Cli::try_parse_from(["lgrep"]);
        assert!(result.is_err());
    }
}
