//! Search data model
//!
//! All engine operations consume a SearchRequest and produce a SearchOutcome;
//! recoverable failures are accumulated as Diagnostics instead of aborting.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal configuration errors. These abort the whole operation before any
/// search begins; everything else is absorbed as a Diagnostic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one file argument is required")]
    EmptyFileList,
}

/// Immutable input to a search.
///
/// The pattern is always a literal substring, never a regex. An empty pattern
/// is accepted and matches every line.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub pattern: String,
    pub case_insensitive: bool,
    pub file_arguments: Vec<String>,
}

impl SearchRequest {
    /// Create a new request, validating that the file list is non-empty.
    pub fn new(
        pattern: impl Into<String>,
        case_insensitive: bool,
        file_arguments: Vec<String>,
    ) -> Result<Self, ConfigError> {
        if file_arguments.is_empty() {
            return Err(ConfigError::EmptyFileList);
        }
        Ok(Self {
            pattern: pattern.into(),
            case_insensitive,
            file_arguments,
        })
    }
}

/// A single matching line, with file and line provenance.
///
/// line_text is the original line content with the trailing newline stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub source_file: String,

    /// 1-based line number within source_file
    pub line_number: u32,

    pub line_text: String,
}

impl MatchRecord {
    pub fn new(source_file: impl Into<String>, line_number: u32, line_text: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            line_number,
            line_text: line_text.into(),
        }
    }
}

/// A recoverable failure reported alongside results.
///
/// Diagnostics cover unreadable directories during wildcard expansion, zero
/// wildcard matches, and files that cannot be opened. None of them stop the
/// search; the CLI echoes them to stderr.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    pub message: String,
}

impl Diagnostic {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            message: message.into(),
        }
    }

    #[allow(dead_code)]
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            path: None,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} '{}'", self.message, path),
            None => write!(f, "{}", self.message),
        }
    }
}

/// The complete result of one search invocation.
///
/// Matches are ordered by file (in effective-set order), then by line number
/// within each file. files_searched is the effective file count after any
/// wildcard expansion and counts files that failed to open.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub matches: Vec<MatchRecord>,
    pub files_searched: usize,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl SearchOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MatchRecord) {
        self.matches.push(record);
    }

    pub fn diagnose(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Whether per-line output should carry a filename prefix.
    pub fn multiple_files(&self) -> bool {
        self.files_searched > 1
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
