//! Command to print one value through a typed accessor.

use crate::error::CliError;
use crate::utils::{load_store, GlobalOptions, SourceArgs};
use clap::{Args, ValueEnum};
use runconf::{ConfigStore, Error};

/// Accessor used to read the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueType {
    /// Raw string value
    String,
    /// 32-bit integer
    Int,
    /// 64-bit integer
    Long,
    /// 32-bit float
    Float,
    /// 64-bit float
    Double,
    /// `true` or `false`
    Bool,
    /// Whether the flag is set (never fails)
    Flag,
}

/// Print a single value through a typed accessor.
#[derive(Args)]
pub struct GetCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Key to read
    #[arg(long, value_name = "KEY")]
    pub key: String,

    /// Accessor to read the key with
    #[arg(long = "as", value_enum, default_value_t = ValueType::String)]
    pub value_type: ValueType,
}

impl GetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let store = load_store(&self.source, global)?;
        println!("{}", read_value(&store, &self.key, self.value_type)?);
        Ok(())
    }
}

/// Read `key` with the accessor for `value_type` and format it.
pub fn read_value(
    store: &ConfigStore,
    key: &str,
    value_type: ValueType,
) -> Result<String, CliError> {
    let rendered = match value_type {
        ValueType::String => store
            .get(key)
            .map(str::to_string)
            .ok_or_else(|| Error::NotSet {
                key: key.to_string(),
            })?,
        ValueType::Int => store.get_as_int(key)?.to_string(),
        ValueType::Long => store.get_as_long(key)?.to_string(),
        ValueType::Float => store.get_as_float(key)?.to_string(),
        ValueType::Double => store.get_as_double(key)?.to_string(),
        ValueType::Bool => store.get_as_bool(key)?.to_string(),
        ValueType::Flag => store.is_flag_set(key).to_string(),
    };
    Ok(rendered)
}
