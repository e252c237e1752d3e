//! Source loading utilities
//!
//! This module provides `SourceLoader` - a utility for loading source text
//! from files or strings and running extraction or rendering on it. This
//! is used by both the CLI and tests.
//!
//! # Example
//!
//! ```rust
//! use rpcdoc_parser::rpc::loader::SourceLoader;
//!
//! // From file
//! let loader = SourceLoader::from_path("src/rpc/server.rs").unwrap();
//! let records = loader.extract().unwrap();
//!
//! // From string
//! let loader = SourceLoader::from_string("// RPCAPI:\n");
//! let records = loader.extract().unwrap();
//! ```

use crate::rpc::formats::markdown::render_document;
use crate::rpc::method::MethodRecord;
use crate::rpc::scanning::{extract_methods, ScanError};
use std::fs;
use std::path::Path;

/// Error that can occur when loading a source file
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading the file
    IoError(String),
    /// Extraction error from the block scanner
    ScanError(ScanError),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::IoError(msg) => write!(f, "IO error: {}", msg),
            LoaderError::ScanError(err) => write!(f, "Scan error: {}", err),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::IoError(err.to_string())
    }
}

impl From<ScanError> for LoaderError {
    fn from(err: ScanError) -> Self {
        LoaderError::ScanError(err)
    }
}

/// Source loader with extraction shortcuts
///
/// `SourceLoader` reads the whole input up front; extraction and
/// rendering then run as pure passes over the owned text, so a loader can
/// be reused for both.
pub struct SourceLoader {
    source: String,
}

impl SourceLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(SourceLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        SourceLoader {
            source: source.into(),
        }
    }

    /// Extract the method records documented in the source
    pub fn extract(&self) -> Result<Vec<MethodRecord>, LoaderError> {
        Ok(extract_methods(&self.source)?)
    }

    /// Extract and render the full markdown reference document
    ///
    /// `source_path` is the path shown in the `[src]` deep links, usually
    /// the same path the source was loaded from.
    pub fn to_markdown(&self, source_path: &str) -> Result<String, LoaderError> {
        let records = self.extract()?;
        Ok(render_document(&records, source_path))
    }

    /// Get a reference to the raw source string
    pub fn source_ref(&self) -> &str {
        &self.source
    }
}
