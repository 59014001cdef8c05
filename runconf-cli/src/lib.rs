//! Library exports for runconf-cli.
//!
//! The binary in `main.rs` is a thin wrapper over these modules, which are
//! also what the integration tests and the man page build link against.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
