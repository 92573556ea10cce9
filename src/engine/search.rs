//! Search orchestration
//!
//! Resolves the effective file set, scans each file line by line, and
//! aggregates matches with file/line provenance. Per-file failures never
//! abort the search; they become diagnostics in the outcome.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::core::matcher::line_matches;
use crate::core::model::{Diagnostic, MatchRecord, SearchOutcome, SearchRequest};
use crate::engine::wildcard;

/// Run a search over the request's effective file set.
///
/// Wildcard expansion only triggers when the argument list has exactly one
/// entry containing `*` or `?`; multi-argument lists are used verbatim even
/// if individual entries contain wildcard characters. files_searched in the
/// outcome is the effective (post-expansion) count, including files that
/// failed to open.
pub fn search(request: &SearchRequest) -> SearchOutcome {
    let mut outcome = SearchOutcome::new();

    let expand = request.file_arguments.len() == 1 && wildcard::has_wildcard(&request.file_arguments[0]);
    let files = if expand {
        let (files, diagnostics) = wildcard::expand_wildcard(&request.file_arguments[0]);
        outcome.diagnostics.extend(diagnostics);
        if files.is_empty() {
            // Normal, non-fatal outcome: zero files searched, zero matches.
            outcome.diagnose(Diagnostic::new(
                &request.file_arguments[0],
                "no files matching pattern",
            ));
            return outcome;
        }
        files
    } else {
        request.file_arguments.clone()
    };

    outcome.files_searched = files.len();

    for file in &files {
        scan_file(file, request, &mut outcome);
    }

    outcome
}

/// Scan one file line by line, appending matches to the outcome.
///
/// Lines are newline-delimited with the newline stripped (CRLF included) and
/// numbered from 1; a missing trailing newline still yields a final line.
/// Invalid UTF-8 is converted lossily so arbitrary text files can be scanned.
fn scan_file(path: &str, request: &SearchRequest, outcome: &mut SearchOutcome) {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            outcome.diagnose(Diagnostic::new(path, format!("could not open file ({})", e)));
            return;
        }
    };

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut line_number: u32 = 0;

    loop {
        buf.clear();
        let bytes_read = match reader.read_until(b'\n', &mut buf) {
            Ok(n) => n,
            Err(e) => {
                outcome.diagnose(Diagnostic::new(path, format!("error reading file ({})", e)));
                return;
            }
        };
        if bytes_read == 0 {
            break;
        }

        line_number += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        let line = String::from_utf8_lossy(&buf);
        if line_matches(&line, &request.pattern, request.case_insensitive) {
            outcome.push(MatchRecord::new(path, line_number, line.into_owned()));
        }
    }
}
