//! Serializable registry declarations.
//!
//! A declaration file lists parameters (optionally marked required) and
//! flags:
//!
//! ```yaml
//! parameters:
//!   - name: port
//!     required: true
//!   - host            # shorthand for an optional parameter
//! flags:
//!   - verbose
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// Declaration of a registry.
///
/// # Examples
///
/// ```
/// use runconf::registry::{ParameterSpec, RegistrySpec};
///
/// let spec: RegistrySpec = serde_yaml::from_str(
///     "parameters:\n  - name: port\n    required: true\nflags: [verbose]\n",
/// )
/// .unwrap();
/// assert_eq!(spec.parameters, vec![ParameterSpec { name: "port".into(), required: true }]);
/// assert_eq!(spec.flags, vec!["verbose".to_string()]);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RegistrySpec {
    /// Value-taking parameters.
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,

    /// Boolean flags.
    #[serde(default)]
    pub flags: Vec<String>,
}

/// Declaration of one parameter.
///
/// Deserializes from either a bare name or a `{ name, required }` map.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Parameter name, without the leading `-`.
    pub name: String,

    /// Whether the parameter must be supplied.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

impl ParameterSpec {
    /// An optional parameter.
    #[must_use]
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
        }
    }

    /// A required parameter.
    #[must_use]
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
        }
    }
}

impl<'de> Deserialize<'de> for ParameterSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Helper {
            Name(String),
            Detailed {
                name: String,
                #[serde(default)]
                required: bool,
            },
        }

        Ok(match Helper::deserialize(deserializer)? {
            Helper::Name(name) => Self::optional(name),
            Helper::Detailed { name, required } => Self { name, required },
        })
    }
}
