//! Loading registry declarations from YAML files.

use crate::error::{Error, Result};
use crate::registry::{Registry, RegistrySpec};
use std::fs;
use std::path::Path;

/// Reads registry declarations from disk.
///
/// # Examples
///
/// ```no_run
/// use runconf::registry::RegistryLoader;
/// use std::path::Path;
///
/// let registry = RegistryLoader::load_file(Path::new("registry.yaml")).unwrap();
/// println!("{} names registered", registry.len());
/// ```
pub struct RegistryLoader;

impl RegistryLoader {
    /// Load and validate a registry declaration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read,
    /// [`Error::Configuration`] if the YAML is invalid, and a registration
    /// error if a declared name is invalid or repeated.
    pub fn load_file(path: &Path) -> Result<Registry> {
        let spec = Self::read_spec(path)?;
        Registry::from_spec(&spec)
    }

    /// Read a declaration without validating the names in it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] or [`Error::Configuration`].
    pub fn read_spec(path: &Path) -> Result<RegistrySpec> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_str(&contents)
    }

    /// Parse a declaration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the YAML is invalid.
    pub fn parse_str(contents: &str) -> Result<RegistrySpec> {
        // An empty document declares nothing.
        if contents.trim().is_empty() {
            return Ok(RegistrySpec::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}
