//! Builder for configuration stores.

use crate::error::Result;
use crate::registry::{Registry, RegistryLoader};
use crate::store::ConfigStore;
use std::path::{Path, PathBuf};

/// Collects registrations and builds a [`ConfigStore`].
///
/// Registration errors are deferred to [`ConfigStoreBuilder::build`], so
/// declarations can be chained.
///
/// # Examples
///
/// ```
/// use runconf::ConfigStore;
///
/// let mut store = ConfigStore::builder()
///     .required("port")
///     .parameter("host")
///     .flag("verbose")
///     .build()
///     .unwrap();
///
/// store.parse_args(["-port", "8080"]).unwrap();
/// store.verify_required().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ConfigStoreBuilder {
    registry: Option<Registry>,
    registry_file: Option<PathBuf>,
    parameters: Vec<(String, bool)>,
    flags: Vec<String>,
}

impl ConfigStoreBuilder {
    /// Create a new builder with no declarations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing registry.
    #[must_use]
    pub fn registry(mut self, registry: Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Start from a YAML registry declaration file, read at build time.
    #[must_use]
    pub fn registry_file(mut self, path: &Path) -> Self {
        self.registry_file = Some(path.to_path_buf());
        self
    }

    /// Declare an optional parameter.
    #[must_use]
    pub fn parameter(mut self, name: &str) -> Self {
        self.parameters.push((name.to_string(), false));
        self
    }

    /// Declare a required parameter.
    #[must_use]
    pub fn required(mut self, name: &str) -> Self {
        self.parameters.push((name.to_string(), true));
        self
    }

    /// Declare a flag.
    #[must_use]
    pub fn flag(mut self, name: &str) -> Self {
        self.flags.push(name.to_string());
        self
    }

    /// Build the store.
    ///
    /// Declarations are applied in order: the registry, then the registry
    /// file, then individual parameters, then flags.
    ///
    /// # Errors
    ///
    /// Returns the first registration error, or an error from reading the
    /// registry file.
    pub fn build(self) -> Result<ConfigStore> {
        let mut registry = self.registry.unwrap_or_default();

        if let Some(path) = &self.registry_file {
            registry.extend_from_spec(&RegistryLoader::read_spec(path)?)?;
        }

        for (name, required) in &self.parameters {
            registry.add_parameter(name, *required)?;
        }
        for name in &self.flags {
            registry.add_flag(name)?;
        }

        Ok(ConfigStore::with_registry(registry))
    }
}
