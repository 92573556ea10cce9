//! Wildcard matching backend
//!
//! Translates glob-style filename patterns (`*`, `?`) into anchored regexes
//! and expands them against a single directory (non-recursive).

use regex::Regex;
use std::fs;
use std::path::Path;

use crate::core::model::Diagnostic;

/// Whether an argument contains a glob wildcard character.
pub fn has_wildcard(argument: &str) -> bool {
    argument.contains(['*', '?'])
}

/// Translate a glob pattern into an anchored regex source string.
///
/// `*` maps to `.*`, `?` maps to `.`, regex metacharacters are escaped to
/// their literal form, and the result is anchored so it matches the whole
/// filename. Total: every input produces a pattern that compiles.
pub fn glob_to_regex(glob: &str) -> String {
    let mut regex = String::with_capacity(glob.len() + 2);
    regex.push('^');
    for c in glob.chars() {
        match c {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            '.' | '^' | '$' | '\\' | '+' | '(' | ')' | '[' | ']' | '{' | '}' | '|' => {
                regex.push('\\');
                regex.push(c);
            }
            _ => regex.push(c),
        }
    }
    regex.push('$');
    regex
}

/// Expand a wildcarded path against its directory.
///
/// The path is split into a directory component (defaulting to the current
/// directory) and a filename pattern. Immediate entries of the directory are
/// listed, restricted to regular files, and kept when the filename fully
/// matches the translated pattern. Returned paths preserve the directory
/// component as given and follow directory-iteration order, which is
/// filesystem-defined and not guaranteed stable across platforms.
///
/// An unreadable directory is recoverable: the result is whatever was
/// enumerated (possibly nothing) plus a diagnostic.
pub fn expand_wildcard(path_with_wildcard: &str) -> (Vec<String>, Vec<Diagnostic>) {
    let mut files = Vec::new();
    let mut diagnostics = Vec::new();

    let path = Path::new(path_with_wildcard);
    let dir_component = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Some(parent),
        _ => None,
    };
    let read_dir_target = dir_component.unwrap_or_else(|| Path::new("."));

    let name_pattern = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    // glob_to_regex output always compiles; a failure here would be a bug in
    // the translation itself, so surface it as a diagnostic rather than panic.
    let pattern = match Regex::new(&glob_to_regex(&name_pattern)) {
        Ok(re) => re,
        Err(e) => {
            diagnostics.push(Diagnostic::new(
                path_with_wildcard,
                format!("invalid wildcard pattern ({})", e),
            ));
            return (files, diagnostics);
        }
    };

    let entries = match fs::read_dir(read_dir_target) {
        Ok(entries) => entries,
        Err(e) => {
            diagnostics.push(Diagnostic::new(
                read_dir_target.display().to_string(),
                format!("error reading directory ({})", e),
            ));
            return (files, diagnostics);
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let is_regular_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_regular_file {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if pattern.is_match(&name) {
            let resolved = match dir_component {
                Some(dir) => dir.join(&name).to_string_lossy().into_owned(),
                None => name,
            };
            files.push(resolved);
        }
    }

    (files, diagnostics)
}
