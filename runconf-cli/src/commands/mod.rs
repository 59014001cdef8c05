//! CLI command implementations.
//!
//! - `parse`: Parse input against a registry and print the entries
//! - `get`: Print one value through a typed accessor
//! - `validate`: Validate a registry declaration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod get;
pub mod parse;
pub mod validate;

pub use completions::CompletionsCommand;
pub use get::GetCommand;
pub use parse::ParseCommand;
pub use validate::ValidateCommand;
