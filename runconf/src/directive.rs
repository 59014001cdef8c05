//! Turning raw input into directives.
//!
//! Both input forms use the same surface syntax: `-name value` sets a
//! parameter and `--name` sets a flag. An argument list is scanned token by
//! token; a file is scanned line by line, one directive per line, with blank
//! lines and `#` comments skipped. Tokens that do not match the registry are
//! ignored.
//!
//! Parsing produces a [`ParsePlan`] without touching any store, so a store
//! only changes once the whole input has been accepted.

use crate::error::{Error, InputLocation, Result};
use crate::registry::Registry;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Value stored for a flag that is present.
pub const FLAG_VALUE: &str = "true";

/// A single recognized directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `-name value`
    Parameter {
        /// Registered parameter name.
        name: String,
        /// The token that followed it.
        value: String,
    },
    /// `--name`
    Flag {
        /// Registered flag name.
        name: String,
    },
}

impl Directive {
    /// The key this directive writes.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Parameter { name, .. } | Self::Flag { name } => name,
        }
    }

    /// The value this directive writes.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Parameter { value, .. } => value,
            Self::Flag { .. } => FLAG_VALUE,
        }
    }

    /// Returns a human-readable description of this directive.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Parameter { name, value } => format!("Set parameter {name} to '{value}'"),
            Self::Flag { name } => format!("Set flag {name}"),
        }
    }
}

/// Counters of directives applied to a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Parameter directives applied.
    pub parameters_set: usize,
    /// Flag directives applied.
    pub flags_set: usize,
}

impl ParseStats {
    /// Total directives applied.
    #[must_use]
    pub fn total(&self) -> usize {
        self.parameters_set + self.flags_set
    }

    pub(crate) fn record(&mut self, directive: &Directive) {
        match directive {
            Directive::Parameter { .. } => self.parameters_set += 1,
            Directive::Flag { .. } => self.flags_set += 1,
        }
    }
}

/// The directives found in one input, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsePlan {
    directives: Vec<Directive>,
    ignored: usize,
}

impl ParsePlan {
    /// Scans an argument list.
    ///
    /// A matched parameter consumes the following token as its value, so the
    /// value is never itself treated as a directive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if a parameter is the last token.
    ///
    /// # Examples
    ///
    /// ```
    /// use runconf::directive::ParsePlan;
    /// use runconf::registry::Registry;
    ///
    /// let mut registry = Registry::new();
    /// registry.add_parameter("port", true).unwrap();
    /// registry.add_flag("verbose").unwrap();
    ///
    /// let plan = ParsePlan::from_args(&registry, ["-port", "8080", "--verbose", "extra"]).unwrap();
    /// assert_eq!(plan.len(), 2);
    /// assert_eq!(plan.ignored(), 1);
    /// ```
    pub fn from_args<I, S>(registry: &Registry, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut plan = Self::default();
        let mut tokens = args.into_iter().enumerate();

        while let Some((index, token)) = tokens.next() {
            let token = token.as_ref();

            if let Some(name) = registry.match_parameter(token) {
                let Some((_, value)) = tokens.next() else {
                    return Err(Error::MalformedInput {
                        location: InputLocation::Argument(index),
                        reason: format!("parameter '{token}' has no value"),
                    });
                };
                plan.directives.push(Directive::Parameter {
                    name: name.to_string(),
                    value: value.as_ref().to_string(),
                });
            } else if let Some(name) = registry.match_flag(token) {
                plan.directives.push(Directive::Flag {
                    name: name.to_string(),
                });
            } else {
                log::debug!("Ignoring unrecognized argument {index}: '{token}'");
                plan.ignored += 1;
            }
        }

        Ok(plan)
    }

    /// Scans a configuration file.
    ///
    /// The file is closed before this returns, on success or failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened or read and
    /// [`Error::MalformedInput`] if a parameter line has no value.
    pub fn from_file(registry: &Registry, path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(registry, BufReader::new(file), path)
    }

    /// Scans line-oriented input; `path` is used only in error locations.
    ///
    /// Lines are decoded leniently: invalid UTF-8 is replaced with U+FFFD
    /// rather than rejecting the input.
    ///
    /// # Errors
    ///
    /// Same as [`ParsePlan::from_file`].
    pub fn from_reader<R: BufRead>(
        registry: &Registry,
        mut reader: R,
        path: &Path,
    ) -> Result<Self> {
        let mut plan = Self::default();
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
            if read == 0 {
                break;
            }
            line_number += 1;

            let line = String::from_utf8_lossy(&buf);

            let mut tokens = line.split_whitespace();
            let Some(first) = tokens.next() else {
                continue;
            };
            if first.starts_with('#') {
                continue;
            }

            if let Some(name) = registry.match_parameter(first) {
                let Some(value) = tokens.next() else {
                    return Err(Error::MalformedInput {
                        location: InputLocation::Line {
                            path: path.to_path_buf(),
                            line: line_number,
                        },
                        reason: format!("parameter '{first}' has no value"),
                    });
                };
                plan.directives.push(Directive::Parameter {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            } else if let Some(name) = registry.match_flag(first) {
                plan.directives.push(Directive::Flag {
                    name: name.to_string(),
                });
            } else {
                log::debug!(
                    "Ignoring unrecognized line {}:{line_number}: '{first}'",
                    path.display()
                );
                plan.ignored += 1;
                continue;
            }

            if tokens.next().is_some() {
                log::debug!(
                    "Ignoring trailing tokens on {}:{line_number}",
                    path.display()
                );
            }
        }

        Ok(plan)
    }

    /// The recognized directives, in input order.
    #[must_use]
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Number of recognized directives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Returns true if no directive was recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Number of tokens (arguments) or lines (files) that were ignored.
    #[must_use]
    pub fn ignored(&self) -> usize {
        self.ignored
    }

    /// Consumes the plan, yielding its directives.
    #[must_use]
    pub fn into_directives(self) -> Vec<Directive> {
        self.directives
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.add_parameter("port", true).unwrap();
        registry.add_parameter("host", false).unwrap();
        registry.add_flag("verbose").unwrap();
        registry
    }

    fn parse_text(text: &str) -> Result<ParsePlan> {
        ParsePlan::from_reader(&registry(), Cursor::new(text), Path::new("test.conf"))
    }

    #[test]
    fn test_args_parameter_and_flag() {
        let plan = ParsePlan::from_args(&registry(), ["-port", "8080", "--verbose"]).unwrap();
        assert_eq!(
            plan.directives(),
            [
                Directive::Parameter {
                    name: "port".into(),
                    value: "8080".into()
                },
                Directive::Flag {
                    name: "verbose".into()
                },
            ]
        );
        assert_eq!(plan.ignored(), 0);
    }

    #[test]
    fn test_args_value_is_not_rescanned() {
        let plan = ParsePlan::from_args(&registry(), ["-host", "--verbose"]).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.directives()[0].key(), "host");
        assert_eq!(plan.directives()[0].value(), "--verbose");
    }

    #[test]
    fn test_args_trailing_parameter_is_malformed() {
        let err = ParsePlan::from_args(&registry(), ["--verbose", "-port"]).unwrap_err();
        match err {
            Error::MalformedInput { location, reason } => {
                assert_eq!(location, InputLocation::Argument(1));
                assert!(reason.contains("-port"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_args_unregistered_tokens_ignored() {
        let plan =
            ParsePlan::from_args(&registry(), ["-unknown", "x", "--quiet", "port"]).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.ignored(), 4);
    }

    #[test]
    fn test_args_wrong_marker_ignored() {
        let plan = ParsePlan::from_args(&registry(), ["--port", "8080", "-verbose"]).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_args_accepts_owned_strings() {
        let args: Vec<String> = vec!["-port".into(), "1".into()];
        let plan = ParsePlan::from_args(&registry(), &args).unwrap();
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_file_lines() {
        let plan = parse_text("-port 8080\n--verbose\n-host localhost\n").unwrap();
        let keys: Vec<_> = plan.directives().iter().map(Directive::key).collect();
        assert_eq!(keys, ["port", "verbose", "host"]);
    }

    #[test]
    fn test_file_skips_blank_and_comment_lines() {
        let plan = parse_text("\n# -port 1\n   \n-port 2\n").unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.directives()[0].value(), "2");
        assert_eq!(plan.ignored(), 0);
    }

    #[test]
    fn test_file_crlf_and_extra_whitespace() {
        let plan = parse_text("-port   8080\r\n--verbose\r\n").unwrap();
        assert_eq!(plan.directives()[0].value(), "8080");
        assert_eq!(plan.directives()[1].key(), "verbose");
    }

    #[test]
    fn test_file_trailing_tokens_ignored() {
        let plan = parse_text("-port 8080 9090\n--verbose yes\n").unwrap();
        assert_eq!(plan.directives()[0].value(), "8080");
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn test_file_missing_value_names_line() {
        let err = parse_text("--verbose\n\n-port\n").unwrap_err();
        match err {
            Error::MalformedInput { location, .. } => assert_eq!(
                location,
                InputLocation::Line {
                    path: "test.conf".into(),
                    line: 3
                }
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_file_unregistered_lines_ignored() {
        let plan = parse_text("port 8080\n-timeout 5\n").unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.ignored(), 2);
    }

    #[test]
    fn test_file_tolerates_non_utf8_bytes() {
        let bytes: &[u8] = b"# caf\xe9 settings\n-port 8080\n-host caf\xe9\n";
        let plan = ParsePlan::from_reader(&registry(), bytes, Path::new("test.conf")).unwrap();

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.directives()[0].value(), "8080");
        assert_eq!(plan.directives()[1].value(), "caf\u{fffd}");
    }

    #[test]
    fn test_file_last_line_without_newline() {
        let plan = parse_text("--verbose\n-port 8080").unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.directives()[1].value(), "8080");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ParsePlan::from_file(&registry(), Path::new("/nonexistent/app.conf"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_stats_record() {
        let mut stats = ParseStats::default();
        stats.record(&Directive::Flag {
            name: "verbose".into(),
        });
        stats.record(&Directive::Parameter {
            name: "port".into(),
            value: "1".into(),
        });
        assert_eq!(stats.parameters_set, 1);
        assert_eq!(stats.flags_set, 1);
        assert_eq!(stats.total(), 2);
    }

    #[test]
    fn test_directive_description() {
        let directive = Directive::Parameter {
            name: "port".into(),
            value: "80".into(),
        };
        assert_eq!(directive.description(), "Set parameter port to '80'");
    }
}
