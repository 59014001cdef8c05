//! Registries of recognized parameter and flag names.
//!
//! A [`Registry`] holds three sets:
//!
//! - parameters, written `-name value` on the command line
//! - flags, written `--name` with no value
//! - the required subset of the parameters
//!
//! Registries can be built programmatically or declared in YAML (see
//! [`RegistrySpec`] and [`RegistryLoader`]):
//!
//! ```
//! use runconf::registry::Registry;
//!
//! let mut registry = Registry::new();
//! registry.add_parameter("port", true).unwrap();
//! registry.add_flag("verbose").unwrap();
//!
//! assert_eq!(registry.match_parameter("-port"), Some("port"));
//! assert_eq!(registry.match_flag("--verbose"), Some("verbose"));
//! assert_eq!(registry.match_parameter("--verbose"), None);
//! ```

pub mod loader;
pub mod schema;

pub use loader::RegistryLoader;
pub use schema::{ParameterSpec, RegistrySpec};

use crate::error::{Error, Result};
use std::collections::BTreeSet;

/// Prefix marking a parameter token.
pub const PARAMETER_MARKER: &str = "-";

/// Prefix marking a flag token.
pub const FLAG_MARKER: &str = "--";

/// The set of names a configuration store recognizes.
///
/// Names are unique across both registries, non-empty, free of whitespace
/// and never start with `-`, so a token can match at most one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    parameters: BTreeSet<String>,
    flags: BTreeSet<String>,
    required: BTreeSet<String>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a declaration.
    ///
    /// # Errors
    ///
    /// Returns the first invalid or duplicate name in declaration order.
    pub fn from_spec(spec: &RegistrySpec) -> Result<Self> {
        let mut registry = Self::new();
        registry.extend_from_spec(spec)?;
        Ok(registry)
    }

    /// Registers every name in a declaration, parameters first.
    ///
    /// Names registered before the failing one stay registered.
    ///
    /// # Errors
    ///
    /// Returns the first invalid or duplicate name in declaration order.
    pub fn extend_from_spec(&mut self, spec: &RegistrySpec) -> Result<()> {
        for parameter in &spec.parameters {
            self.add_parameter(&parameter.name, parameter.required)?;
        }
        for flag in &spec.flags {
            self.add_flag(flag)?;
        }
        Ok(())
    }

    /// Registers a value-taking parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a malformed name and
    /// [`Error::DuplicateRegistration`] if the name is already a parameter or
    /// a flag.
    pub fn add_parameter(&mut self, name: &str, required: bool) -> Result<()> {
        validate_name("parameter", name)?;
        self.ensure_unregistered(name)?;

        self.parameters.insert(name.to_string());
        if required {
            self.required.insert(name.to_string());
        }
        Ok(())
    }

    /// Registers a boolean flag.
    ///
    /// # Errors
    ///
    /// Same rules as [`Registry::add_parameter`].
    pub fn add_flag(&mut self, name: &str) -> Result<()> {
        validate_name("flag", name)?;
        self.ensure_unregistered(name)?;

        self.flags.insert(name.to_string());
        Ok(())
    }

    fn ensure_unregistered(&self, name: &str) -> Result<()> {
        if self.is_registered(name) {
            return Err(Error::DuplicateRegistration {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Returns true if `name` is a registered parameter.
    #[must_use]
    pub fn is_parameter(&self, name: &str) -> bool {
        self.parameters.contains(name)
    }

    /// Returns true if `name` is a registered flag.
    #[must_use]
    pub fn is_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    /// Returns true if `name` is a required parameter.
    #[must_use]
    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(name)
    }

    /// Returns true if `name` is registered in either registry.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.is_parameter(name) || self.is_flag(name)
    }

    /// Matches a `-name` token against the parameter registry.
    ///
    /// Returns the registered name on a match.
    #[must_use]
    pub fn match_parameter(&self, token: &str) -> Option<&str> {
        let name = token.strip_prefix(PARAMETER_MARKER)?;
        self.parameters.get(name).map(String::as_str)
    }

    /// Matches a `--name` token against the flag registry.
    ///
    /// Returns the registered name on a match.
    #[must_use]
    pub fn match_flag(&self, token: &str) -> Option<&str> {
        let name = token.strip_prefix(FLAG_MARKER)?;
        self.flags.get(name).map(String::as_str)
    }

    /// Registered parameters, sorted.
    pub fn parameters(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(String::as_str)
    }

    /// Registered flags, sorted.
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(String::as_str)
    }

    /// Required parameters, sorted.
    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.required.iter().map(String::as_str)
    }

    /// Total number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len() + self.flags.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts back into a declaration.
    #[must_use]
    pub fn to_spec(&self) -> RegistrySpec {
        RegistrySpec {
            parameters: self
                .parameters()
                .map(|name| ParameterSpec {
                    name: name.to_string(),
                    required: self.is_required(name),
                })
                .collect(),
            flags: self.flags().map(str::to_string).collect(),
        }
    }
}

/// Checks that a name can be written on a command line unambiguously.
fn validate_name(field: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::Validation {
            field: field.into(),
            message: "name cannot be empty".into(),
        });
    }

    if name.chars().any(char::is_whitespace) {
        return Err(Error::Validation {
            field: field.into(),
            message: format!("name '{name}' cannot contain whitespace"),
        });
    }

    if name.starts_with(PARAMETER_MARKER) {
        return Err(Error::Validation {
            field: field.into(),
            message: format!("name '{name}' cannot start with '-'"),
        });
    }

    Ok(())
}
