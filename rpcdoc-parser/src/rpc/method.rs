//! Method records
//!
//! A [`MethodRecord`] is the structured result of extracting one complete
//! RPCAPI comment block. Records are immutable once built and carry
//! everything the renderer needs; the sample payloads are kept as opaque
//! text and never validated.

use serde::{Deserialize, Serialize};

/// One documented JSON-RPC method, extracted from a tagged comment block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRecord {
    /// Method identifier, taken from the request-sample line.
    pub name: String,
    /// Free-text description: the comment lines between the block start
    /// and the request-sample line, joined by newlines and trimmed.
    pub description: String,
    /// Raw tail of the request-sample line, everything after `// -->`.
    pub request_sample: String,
    /// Raw tail of the response-sample line, everything after `// <--`.
    pub response_sample: String,
    /// 1-based line number the source deep link points at: the
    /// request-sample line plus two.
    pub source_line: usize,
}
