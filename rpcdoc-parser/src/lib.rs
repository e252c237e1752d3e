//! # rpcdoc-parser
//!
//! Extraction library for RPCAPI comment documentation.
//!
//! Source files in the darkfi tree document their JSON-RPC surface with
//! tagged comment blocks:
//!
//! ```text
//! // RPCAPI:
//! // Returns the current block height.
//! // --> {"jsonrpc": "2.0", "method": "blockchain.get_height", "params": [], "id": 1}
//! // <-- {"jsonrpc": "2.0", "result": 1234, "id": 1}
//! ```
//!
//! This crate scans a file for such blocks, produces one [`MethodRecord`]
//! per complete block, and renders the records as a markdown reference
//! document with an index, per-method sections and source deep links.
//!
//! The pipeline is a strict one-way flow: lines → records → document. The
//! scanner in [`rpc::scanning`] is the only stateful piece; rendering in
//! [`rpc::formats::markdown`] is pure string formatting.
//!
//! [`MethodRecord`]: rpc::method::MethodRecord

pub mod rpc;
