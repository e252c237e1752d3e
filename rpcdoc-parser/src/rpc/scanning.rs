//! Comment block scanning
//!
//! Core extraction logic: a single forward pass over source lines that
//! recognizes RPCAPI comment blocks and emits one [`MethodRecord`] per
//! complete block. This module contains the stateful scanner for block
//! detection.
//!
//! A block looks like:
//!
//! ```text
//! // RPCAPI:
//! // Description lines.
//! // --> {"jsonrpc": "2.0", "method": "some.method", "params": [], "id": 1}
//! // <-- {"jsonrpc": "2.0", "result": 0, "id": 1}
//! ```
//!
//! Classification always operates on the whitespace-trimmed line, so
//! indentation never matters. Non-comment lines are invisible to the
//! scanner: they neither open, feed nor close a block.

use crate::rpc::method::MethodRecord;
use std::fmt;

/// Marker opening a block. Matched by exact equality, never by prefix.
const BLOCK_START: &str = "// RPCAPI:";
/// Marker introducing the request sample. The tail keeps the character
/// that follows the arrow, so samples reproduce byte-for-byte.
const REQUEST_MARKER: &str = "// -->";
/// Marker introducing the response sample, closing the block.
const RESPONSE_MARKER: &str = "// <--";
/// Every line the scanner looks at starts with this.
const COMMENT_MARKER: &str = "//";

/// Errors that can occur while scanning a source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A request-sample line did not carry the token structure needed to
    /// derive a method name
    MalformedRequestLine { line: usize, reason: String },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::MalformedRequestLine { line, reason } => {
                write!(f, "Malformed request sample on line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for ScanError {}

/// Scanner position within the input, one variant per parsing phase.
///
/// Each variant owns the data accumulated so far, so a block restart or a
/// truncated file simply drops the variant; nothing leaks across blocks.
enum ScanState {
    /// Outside any block.
    Idle,
    /// Between a block-start marker and the request-sample line,
    /// accumulating description text.
    InBlock { description: String },
    /// Request sample seen, waiting for the response sample that closes
    /// the block.
    AwaitingResponse {
        name: String,
        description: String,
        request_sample: String,
        request_line: usize,
    },
}

/// A stateful scanner that recognizes RPCAPI blocks and collects method
/// records in the order their closing lines appear.
pub struct BlockScanner {
    state: ScanState,
    records: Vec<MethodRecord>,
}

impl BlockScanner {
    pub fn new() -> Self {
        Self {
            state: ScanState::Idle,
            records: Vec::new(),
        }
    }

    /// Processes a line. `number` is the 1-based line number in the file.
    ///
    /// Fails only on a malformed request-sample line; every other input is
    /// either consumed or ignored.
    pub fn process_line(&mut self, number: usize, raw: &str) -> Result<(), ScanError> {
        let line = raw.trim();

        if !line.starts_with(COMMENT_MARKER) {
            return Ok(());
        }

        if line == BLOCK_START {
            // Begin a new block. If one was already open, its accumulated
            // state is discarded; blocks restart rather than nest.
            self.state = ScanState::InBlock {
                description: String::new(),
            };
            return Ok(());
        }

        self.state = match std::mem::replace(&mut self.state, ScanState::Idle) {
            // Comment lines outside a block carry no meaning.
            ScanState::Idle => ScanState::Idle,

            ScanState::InBlock { mut description } => {
                if let Some(tail) = sample_tail(line, REQUEST_MARKER) {
                    let name = method_name(line).map_err(|reason| {
                        ScanError::MalformedRequestLine {
                            line: number,
                            reason,
                        }
                    })?;
                    ScanState::AwaitingResponse {
                        name,
                        description,
                        request_sample: tail.to_string(),
                        request_line: number,
                    }
                } else if sample_tail(line, RESPONSE_MARKER).is_some() {
                    // A response with no pending request closes nothing.
                    // Ignored: no degenerate record, not description text.
                    ScanState::InBlock { description }
                } else {
                    description.push_str(comment_tail(line));
                    description.push('\n');
                    ScanState::InBlock { description }
                }
            }

            ScanState::AwaitingResponse {
                name,
                description,
                request_sample,
                request_line,
            } => {
                if let Some(tail) = sample_tail(line, RESPONSE_MARKER) {
                    self.records.push(MethodRecord {
                        name,
                        description: description.trim().to_string(),
                        request_sample,
                        response_sample: tail.to_string(),
                        // Points at the line below the response sample in
                        // source, following the tree's comment layout.
                        source_line: request_line + 2,
                    });
                    ScanState::Idle
                } else if let Some(tail) = sample_tail(line, REQUEST_MARKER) {
                    // A second request sample replaces the pending one.
                    let name = method_name(line).map_err(|reason| {
                        ScanError::MalformedRequestLine {
                            line: number,
                            reason,
                        }
                    })?;
                    ScanState::AwaitingResponse {
                        name,
                        description,
                        request_sample: tail.to_string(),
                        request_line: number,
                    }
                } else {
                    // The description is frozen at the request-sample line;
                    // stray comment lines here are dropped.
                    ScanState::AwaitingResponse {
                        name,
                        description,
                        request_sample,
                        request_line,
                    }
                }
            }
        };

        Ok(())
    }

    /// Consumes the scanner, returning the collected records.
    ///
    /// An unterminated block at this point is dropped silently; records
    /// from earlier complete blocks are unaffected.
    pub fn finish(self) -> Vec<MethodRecord> {
        self.records
    }
}

/// Scan a whole source text, returning records in closing-line order.
pub fn extract_methods(source: &str) -> Result<Vec<MethodRecord>, ScanError> {
    let mut scanner = BlockScanner::new();
    for (idx, line) in source.lines().enumerate() {
        scanner.process_line(idx + 1, line)?;
    }
    Ok(scanner.finish())
}

/// Matches a sample line and returns its raw tail.
///
/// The marker must be followed by at least one more character (the
/// reference layout puts a space between the arrow and the payload), and
/// that character is part of the tail.
fn sample_tail<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    match line.strip_prefix(marker) {
        Some(rest) if rest.starts_with(' ') => Some(rest),
        _ => None,
    }
}

/// Text of a comment line after the `// ` prefix.
fn comment_tail(line: &str) -> &str {
    line.get(3..).unwrap_or("")
}

/// Derive the method name from a request-sample line.
///
/// The name is the sixth whitespace-separated token of the line with its
/// first character and last two characters stripped; in the tree's layout
/// that token reads `"method.name",`. A line without six tokens, or whose
/// sixth token is shorter than three characters, cannot carry a name.
fn method_name(line: &str) -> Result<String, String> {
    let token = line
        .split_whitespace()
        .nth(5)
        .ok_or_else(|| "expected at least 6 whitespace-separated tokens".to_string())?;

    let len = token.chars().count();
    if len < 3 {
        return Err(format!("token `{}` is too short to carry a name", token));
    }

    Ok(token.chars().skip(1).take(len - 3).collect())
}
