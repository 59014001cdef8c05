//! Error types for the runconf library.
//!
//! This module provides the error hierarchy for registering names, parsing
//! input and reading typed values, using `thiserror` for ergonomic error
//! handling.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a runconf error.
///
/// # Examples
///
/// ```
/// use runconf::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(8080)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the runconf library.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a configuration or registry file failed.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A registry declaration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A name or declaration failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A parameter or flag name was registered twice.
    #[error("'{name}' is already registered")]
    DuplicateRegistration {
        /// The name registered twice.
        name: String,
    },

    /// Registration was attempted after input had been parsed.
    #[error("cannot register '{name}': registry is locked after parsing")]
    RegistryLocked {
        /// The name that could not be registered.
        name: String,
    },

    /// A programmatic write used a key that is not registered.
    #[error("unknown key '{key}': not a registered parameter or flag")]
    UnknownKey {
        /// The unregistered key.
        key: String,
    },

    /// One or more required parameters were not supplied.
    #[error(
        "missing required parameter{}: {}",
        if .names.len() == 1 { "" } else { "s" },
        .names.join(", ")
    )]
    MissingRequired {
        /// Every required parameter that was absent, sorted.
        names: Vec<String>,
    },

    /// A typed or flag accessor was used on a key with no value.
    #[error("key '{key}' is not set")]
    NotSet {
        /// The key that was read.
        key: String,
    },

    /// A stored value could not be converted to the requested type.
    #[error("value '{value}' for key '{key}' is not a valid {expected}")]
    InvalidValue {
        /// The key that was read.
        key: String,
        /// The stored value.
        value: String,
        /// The requested type.
        expected: ValueKind,
    },

    /// A directive in the input could not be parsed.
    #[error("malformed input at {location}: {reason}")]
    MalformedInput {
        /// Where the bad directive was found.
        location: InputLocation,
        /// What was wrong with it.
        reason: String,
    },

    /// A symbolic key was not present in the alias table.
    #[error("no key is aliased to {tag}")]
    UnknownAlias {
        /// Debug rendering of the tag.
        tag: String,
    },
}

/// The target type of a typed accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// `true` or `false`, any case.
    Bool,
    /// Any other `FromStr` type, by type name.
    Other(&'static str),
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Long => write!(f, "long"),
            Self::Float => write!(f, "float"),
            Self::Double => write!(f, "double"),
            Self::Bool => write!(f, "bool"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// Position of a directive within parsed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLocation {
    /// Zero-based index into an argument list.
    Argument(usize),
    /// One-based line number in a file.
    Line {
        /// The file being parsed.
        path: PathBuf,
        /// The line number.
        line: usize,
    },
}

impl fmt::Display for InputLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument(index) => write!(f, "argument {index}"),
            Self::Line { path, line } => write!(f, "{}:{line}", path.display()),
        }
    }
}

impl Error {
    /// Check if the error reports an absent value rather than a bad one.
    ///
    /// # Examples
    ///
    /// ```
    /// use runconf::Error;
    ///
    /// let err = Error::NotSet { key: "port".to_string() };
    /// assert!(err.is_not_set());
    /// ```
    #[must_use]
    pub fn is_not_set(&self) -> bool {
        matches!(self, Self::NotSet { .. })
    }

    /// Check if the error came from the input rather than the registry.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedInput { .. } | Self::InvalidValue { .. } | Self::MissingRequired { .. }
        )
    }
}
