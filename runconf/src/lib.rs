#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # runconf
//!
//! Registry-validated key/value configuration read from command-line
//! arguments or flat files.
//!
//! A host declares which parameters (`-name value`) and flags (`--name`) it
//! recognizes, parses its input into a [`ConfigStore`], and reads values back
//! as strings or typed values. Anything not declared is ignored, so untrusted
//! input can never create new keys.
//!
//! ## Core Types
//!
//! - [`ConfigStore`] and [`ConfigStoreBuilder`]: the store and its builder
//! - [`Registry`]: recognized parameters, flags and required parameters
//! - [`ParsePlan`] and [`Directive`]: parsed input before it is applied
//! - [`AliasTable`]: symbolic keys for hosts that prefer enums to strings
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: stderr logging for hosts
//!
//! ## Examples
//!
//! ```
//! use runconf::{ConfigStore, Error};
//!
//! let mut store = ConfigStore::builder()
//!     .required("port")
//!     .flag("verbose")
//!     .build()
//!     .unwrap();
//!
//! store.parse_args(["--verbose"]).unwrap();
//! assert!(store.is_flag_set("verbose"));
//!
//! match store.verify_required() {
//!     Err(Error::MissingRequired { names }) => assert_eq!(names, ["port"]),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

pub mod alias;
pub mod directive;
pub mod error;
pub mod logging;
pub mod registry;
pub mod store;

// Re-export key types at crate root for convenience
pub use alias::{AliasTable, Aliased};
pub use directive::{Directive, ParsePlan, ParseStats, FLAG_VALUE};
pub use error::{Error, InputLocation, Result, ValueKind};
pub use logging::{init_logger, LogLevel, Logger};
pub use registry::{ParameterSpec, Registry, RegistryLoader, RegistrySpec};
pub use store::{ConfigStore, ConfigStoreBuilder, StoreSnapshot};
