//! Symbolic keys.
//!
//! Hosts that prefer an enum to string keys build an [`AliasTable`] once,
//! mapping each tag to a registered key, and read the store through
//! [`ConfigStore::aliased`]:
//!
//! ```
//! use runconf::{AliasTable, ConfigStore};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Setting {
//!     Port,
//!     Verbose,
//! }
//!
//! let aliases: AliasTable<Setting> =
//!     [(Setting::Port, "port"), (Setting::Verbose, "verbose")].into_iter().collect();
//!
//! let mut store = ConfigStore::builder().required("port").flag("verbose").build().unwrap();
//! aliases.validate(store.registry()).unwrap();
//! store.parse_args(["-port", "8080", "--verbose"]).unwrap();
//!
//! let settings = store.aliased(&aliases);
//! assert_eq!(settings.get_as_int(Setting::Port).unwrap(), 8080);
//! assert!(settings.is_flag_set(Setting::Verbose).unwrap());
//! ```
//!
//! Every aliased accessor resolves the tag and delegates to the string-keyed
//! method on [`ConfigStore`], so the semantics are identical. A tag missing
//! from the table is reported as [`Error::UnknownAlias`].

use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::store::ConfigStore;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;

/// Mapping from symbolic tags to store keys.
#[derive(Debug, Clone)]
pub struct AliasTable<K> {
    keys: HashMap<K, String>,
}

impl<K> Default for AliasTable<K> {
    fn default() -> Self {
        Self {
            keys: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash + Debug> AliasTable<K> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mapping, builder style.
    #[must_use]
    pub fn with(mut self, tag: K, key: impl Into<String>) -> Self {
        self.insert(tag, key);
        self
    }

    /// Adds a mapping, returning the key previously mapped to `tag`.
    pub fn insert(&mut self, tag: K, key: impl Into<String>) -> Option<String> {
        self.keys.insert(tag, key.into())
    }

    /// Resolves a tag to its key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlias`] if the tag is not mapped.
    pub fn resolve(&self, tag: K) -> Result<&str> {
        self.keys
            .get(&tag)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownAlias {
                tag: format!("{tag:?}"),
            })
    }

    /// Checks that every mapped key is registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKey`] for the first unregistered key, in key
    /// order.
    pub fn validate(&self, registry: &Registry) -> Result<()> {
        let mut keys: Vec<&str> = self.keys.values().map(String::as_str).collect();
        keys.sort_unstable();

        match keys.into_iter().find(|key| !registry.is_registered(key)) {
            Some(key) => Err(Error::UnknownKey {
                key: key.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Number of mapped tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if no tag is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<K: Copy + Eq + Hash + Debug, S: Into<String>> FromIterator<(K, S)> for AliasTable<K> {
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (tag, key) in iter {
            table.insert(tag, key);
        }
        table
    }
}

/// A store addressed through an [`AliasTable`].
#[derive(Debug, Clone, Copy)]
pub struct Aliased<'a, K> {
    store: &'a ConfigStore,
    table: &'a AliasTable<K>,
}

impl<'a, K: Copy + Eq + Hash + Debug> Aliased<'a, K> {
    pub(crate) fn new(store: &'a ConfigStore, table: &'a AliasTable<K>) -> Self {
        Self { store, table }
    }

    /// The key a tag resolves to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlias`] if the tag is not mapped.
    pub fn key(&self, tag: K) -> Result<&'a str> {
        self.table.resolve(tag)
    }

    /// See [`ConfigStore::get`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlias`] if the tag is not mapped.
    pub fn get(&self, tag: K) -> Result<Option<&'a str>> {
        Ok(self.store.get(self.key(tag)?))
    }

    /// See [`ConfigStore::get_as`].
    ///
    /// # Errors
    ///
    /// Tag resolution errors, then the store's conversion errors.
    pub fn get_as<T: FromStr>(&self, tag: K) -> Result<T> {
        self.store.get_as(self.key(tag)?)
    }

    /// See [`ConfigStore::get_as_int`].
    ///
    /// # Errors
    ///
    /// Tag resolution errors, then the store's conversion errors.
    pub fn get_as_int(&self, tag: K) -> Result<i32> {
        self.store.get_as_int(self.key(tag)?)
    }

    /// See [`ConfigStore::get_as_long`].
    ///
    /// # Errors
    ///
    /// Tag resolution errors, then the store's conversion errors.
    pub fn get_as_long(&self, tag: K) -> Result<i64> {
        self.store.get_as_long(self.key(tag)?)
    }

    /// See [`ConfigStore::get_as_float`].
    ///
    /// # Errors
    ///
    /// Tag resolution errors, then the store's conversion errors.
    pub fn get_as_float(&self, tag: K) -> Result<f32> {
        self.store.get_as_float(self.key(tag)?)
    }

    /// See [`ConfigStore::get_as_double`].
    ///
    /// # Errors
    ///
    /// Tag resolution errors, then the store's conversion errors.
    pub fn get_as_double(&self, tag: K) -> Result<f64> {
        self.store.get_as_double(self.key(tag)?)
    }

    /// See [`ConfigStore::get_as_bool`].
    ///
    /// # Errors
    ///
    /// Tag resolution errors, then the store's conversion errors.
    pub fn get_as_bool(&self, tag: K) -> Result<bool> {
        self.store.get_as_bool(self.key(tag)?)
    }

    /// See [`ConfigStore::is_flag_set`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlias`] if the tag is not mapped; an unset key
    /// is `Ok(false)`.
    pub fn is_flag_set(&self, tag: K) -> Result<bool> {
        Ok(self.store.is_flag_set(self.key(tag)?))
    }
}
