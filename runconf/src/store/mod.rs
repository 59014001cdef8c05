//! The configuration store.
//!
//! A [`ConfigStore`] owns a [`Registry`] and a flat map of entries. Input is
//! parsed from an argument list or a file into the map, validated against
//! the registry, and read back through raw or typed accessors.
//!
//! # Examples
//!
//! ```
//! use runconf::ConfigStore;
//!
//! let mut store = ConfigStore::new();
//! store.register_parameter("port", true).unwrap();
//! store.register_flag("verbose").unwrap();
//!
//! store.parse_args(["-port", "8080", "--verbose"]).unwrap();
//!
//! assert_eq!(store.get("port"), Some("8080"));
//! assert_eq!(store.get_as_int("port").unwrap(), 8080);
//! assert!(store.is_flag_set("verbose"));
//! store.verify_required().unwrap();
//! ```

pub mod builder;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigStoreBuilder;

use crate::alias::{AliasTable, Aliased};
use crate::directive::{Directive, ParsePlan, ParseStats, FLAG_VALUE};
use crate::error::{Error, Result, ValueKind};
use crate::logging::Logger;
use crate::registry::Registry;
use serde::Serialize;
use std::collections::BTreeMap;
use std::hash::Hash;
use std::path::Path;
use std::str::FromStr;

/// Registry-validated key/value configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    registry: Registry,
    entries: BTreeMap<String, String>,
    stats: ParseStats,
    locked: bool,
}

/// Serializable view of a store's contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSnapshot {
    /// Every stored entry, sorted by key.
    pub entries: BTreeMap<String, String>,
    /// Directive counters.
    pub stats: ParseStats,
}

impl ConfigStore {
    /// Creates a store with empty registries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store around an existing registry.
    #[must_use]
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    /// Starts a [`ConfigStoreBuilder`].
    #[must_use]
    pub fn builder() -> ConfigStoreBuilder {
        ConfigStoreBuilder::new()
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Registers a parameter, optionally as required.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegistryLocked`] once any input has been parsed,
    /// otherwise any error from [`Registry::add_parameter`].
    pub fn register_parameter(&mut self, name: &str, required: bool) -> Result<()> {
        self.ensure_unlocked(name)?;
        self.registry.add_parameter(name, required)
    }

    /// Registers a flag.
    ///
    /// # Errors
    ///
    /// Same rules as [`ConfigStore::register_parameter`].
    pub fn register_flag(&mut self, name: &str) -> Result<()> {
        self.ensure_unlocked(name)?;
        self.registry.add_flag(name)
    }

    fn ensure_unlocked(&self, name: &str) -> Result<()> {
        if self.locked {
            return Err(Error::RegistryLocked {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Returns true once the store holds input and registration is closed.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The store's registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    // ------------------------------------------------------------------
    // Parsing
    // ------------------------------------------------------------------

    /// Parses a process argument list.
    ///
    /// Nothing is stored unless the whole list is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if a parameter has no value.
    pub fn parse_args<I, S>(&mut self, args: I) -> Result<ParseStats>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let plan = ParsePlan::from_args(&self.registry, args)?;
        Ok(self.apply(plan))
    }

    /// Parses a configuration file.
    ///
    /// Nothing is stored unless the whole file is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::MalformedInput`] if a parameter line has no value.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<ParseStats> {
        let plan = ParsePlan::from_file(&self.registry, path.as_ref())?;
        Ok(self.apply(plan))
    }

    /// Applies a plan built against this store's registry.
    ///
    /// Returns the counters for this plan alone; [`ConfigStore::stats`]
    /// accumulates across calls. A directive is skipped unless its key is
    /// registered with the same kind: parameters as parameters, flags as
    /// flags.
    pub fn apply(&mut self, plan: ParsePlan) -> ParseStats {
        self.locked = true;

        let mut applied = ParseStats::default();
        for directive in plan.into_directives() {
            let (accepted, kind) = match &directive {
                Directive::Parameter { name, .. } => {
                    (self.registry.is_parameter(name), "parameter")
                }
                Directive::Flag { name } => (self.registry.is_flag(name), "flag"),
            };
            if !accepted {
                log::warn!(
                    "Skipping directive for '{}': not a registered {kind}",
                    directive.key()
                );
                continue;
            }
            log::trace!("{}", directive.description());
            applied.record(&directive);
            self.stats.record(&directive);
            self.store_directive(directive);
        }
        applied
    }

    fn store_directive(&mut self, directive: Directive) {
        match directive {
            Directive::Parameter { name, value } => {
                self.entries.insert(name, value);
            }
            Directive::Flag { name } => {
                self.entries.insert(name, FLAG_VALUE.to_string());
            }
        }
    }

    // ------------------------------------------------------------------
    // Programmatic writes
    // ------------------------------------------------------------------

    /// Stores a value for a registered parameter.
    ///
    /// Like parsing, a successful write closes registration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKey`] if `key` is not a registered parameter.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        if !self.registry.is_parameter(key) {
            return Err(Error::UnknownKey {
                key: key.to_string(),
            });
        }
        self.locked = true;
        self.entries.insert(key.to_string(), value.into());
        Ok(())
    }

    /// Marks a registered flag as set, closing registration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKey`] if `key` is not a registered flag.
    pub fn set_flag(&mut self, key: &str) -> Result<()> {
        if !self.registry.is_flag(key) {
            return Err(Error::UnknownKey {
                key: key.to_string(),
            });
        }
        self.locked = true;
        self.entries.insert(key.to_string(), FLAG_VALUE.to_string());
        Ok(())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns true if a value is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| Error::NotSet {
            key: key.to_string(),
        })
    }

    fn convert<T: FromStr>(&self, key: &str, expected: ValueKind) -> Result<T> {
        let value = self.require(key)?;
        value.parse().map_err(|_| Error::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            expected,
        })
    }

    /// Parses the value under `key` as any [`FromStr`] type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSet`] if the key has no value and
    /// [`Error::InvalidValue`] if the value does not parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use runconf::ConfigStore;
    ///
    /// let mut store = ConfigStore::new();
    /// store.register_parameter("port", false).unwrap();
    /// store.parse_args(["-port", "8080"]).unwrap();
    ///
    /// let port: u16 = store.get_as("port").unwrap();
    /// assert_eq!(port, 8080);
    /// ```
    pub fn get_as<T: FromStr>(&self, key: &str) -> Result<T> {
        self.convert(key, ValueKind::Other(std::any::type_name::<T>()))
    }

    /// Parses the value under `key` as an `i32`.
    ///
    /// # Errors
    ///
    /// See [`ConfigStore::get_as`].
    pub fn get_as_int(&self, key: &str) -> Result<i32> {
        self.convert(key, ValueKind::Int)
    }

    /// Parses the value under `key` as an `i64`.
    ///
    /// # Errors
    ///
    /// See [`ConfigStore::get_as`].
    pub fn get_as_long(&self, key: &str) -> Result<i64> {
        self.convert(key, ValueKind::Long)
    }

    /// Parses the value under `key` as an `f32`.
    ///
    /// # Errors
    ///
    /// See [`ConfigStore::get_as`].
    pub fn get_as_float(&self, key: &str) -> Result<f32> {
        self.convert(key, ValueKind::Float)
    }

    /// Parses the value under `key` as an `f64`.
    ///
    /// # Errors
    ///
    /// See [`ConfigStore::get_as`].
    pub fn get_as_double(&self, key: &str) -> Result<f64> {
        self.convert(key, ValueKind::Double)
    }

    /// Parses the value under `key` as a boolean.
    ///
    /// Accepts `true` and `false` in any case.
    ///
    /// # Errors
    ///
    /// See [`ConfigStore::get_as`].
    pub fn get_as_bool(&self, key: &str) -> Result<bool> {
        let value = self.require(key)?;
        if value.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if value.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(Error::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                expected: ValueKind::Bool,
            })
        }
    }

    /// Returns true only if `key` is stored with the value `true` (any case).
    ///
    /// An absent key is simply not set.
    #[must_use]
    pub fn is_flag_set(&self, key: &str) -> bool {
        self.get(key)
            .is_some_and(|value| value.eq_ignore_ascii_case(FLAG_VALUE))
    }

    /// Addresses this store through symbolic keys.
    #[must_use]
    pub fn aliased<'a, K: Copy + Eq + Hash + std::fmt::Debug>(
        &'a self,
        table: &'a AliasTable<K>,
    ) -> Aliased<'a, K> {
        Aliased::new(self, table)
    }

    // ------------------------------------------------------------------
    // Validation and inspection
    // ------------------------------------------------------------------

    /// Checks that every required parameter has a value.
    ///
    /// # Errors
    ///
    /// Returns one [`Error::MissingRequired`] naming every missing
    /// parameter, sorted.
    pub fn verify_required(&self) -> Result<()> {
        let names: Vec<String> = self.missing_required().map(str::to_string).collect();
        if names.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingRequired { names })
        }
    }

    /// Required parameters that currently have no value, sorted.
    pub fn missing_required(&self) -> impl Iterator<Item = &str> {
        self.registry
            .required()
            .filter(move |name| !self.entries.contains_key(*name))
    }

    /// Stored entries, sorted by key.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The underlying entry map.
    #[must_use]
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Directive counters accumulated across every parse.
    #[must_use]
    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    /// Copies the entries and counters into a serializable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            entries: self.entries.clone(),
            stats: self.stats,
        }
    }

    fn dump_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries().map(|(key, value)| format!("[{key}] = [{value}]"))
    }

    /// Logs every entry at info level through the `log` facade.
    pub fn dump(&self) {
        log::info!("Loaded configuration ({} entries)", self.len());
        for line in self.dump_lines() {
            log::info!("{line}");
        }
    }

    /// Writes every entry through a [`Logger`] at info level.
    pub fn dump_with(&self, logger: &Logger) {
        logger.info(&format!("Loaded configuration ({} entries)", self.len()));
        for line in self.dump_lines() {
            logger.info(&line);
        }
    }
}
