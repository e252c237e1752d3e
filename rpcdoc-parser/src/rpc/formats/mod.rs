//! Output format implementations
//!
//! This module contains the formats that method records can be rendered
//! into. Markdown is the only format today; records also derive serde so
//! external tooling can consume them as JSON directly.

pub mod markdown;
