//! Main module for rpcdoc library functionality

pub mod formats;
pub mod loader;
pub mod method;
pub mod scanning;
