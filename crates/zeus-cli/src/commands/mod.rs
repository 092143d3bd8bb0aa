//! CLI command implementations.

pub mod common;
pub mod operations;
pub mod prompt;
pub mod simulate;
pub mod version;
