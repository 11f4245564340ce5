//! Configuration source layering
//!
//! Raw key/value collection from the three external sources the schema is
//! resolved from: a TOML config file, prefixed environment variables and
//! explicit overrides. Layering keeps values as raw strings; typed conversion
//! happens once, during [`SwaggerUiConfig::resolve`](crate::SwaggerUiConfig::resolve).
//!
//! Keys are canonical kebab-case names under the `swagger-ui` namespace:
//! `path`, `always-include`, `urls.<name>`, `urls-primary-name`, and so on.
//!
//! # Example
//!
//! ```rust,no_run
//! use swagger_ui_config::{ConfigSources, SwaggerUiConfig};
//!
//! let sources = ConfigSources::new()
//!     .with_file("app.toml")?
//!     .with_env()
//!     .set("path", "/q/docs");
//! let config = SwaggerUiConfig::resolve(&sources)?;
//! # Ok::<(), swagger_ui_config::ConfigError>(())
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Environment variable prefix for the `swagger-ui` namespace.
pub const ENV_PREFIX: &str = "SWAGGER_UI_";

/// Top-level table name expected in config files.
const FILE_TABLE: &str = "swagger-ui";

/// A raw configuration value, before typed conversion.
///
/// Environment variables and overrides always supply scalars; config files
/// additionally supply native lists for the list-typed options.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Scalar(String),
    List(Vec<String>),
}

/// Layered raw configuration, highest priority last: compiled defaults are
/// overridden by the config file, then the environment, then explicit
/// overrides.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    file: BTreeMap<String, RawValue>,
    env: BTreeMap<String, RawValue>,
    overrides: BTreeMap<String, RawValue>,
}

impl ConfigSources {
    /// Create an empty source stack; resolution then yields compiled defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer in a TOML config file.
    ///
    /// The file's `[swagger-ui]` table supplies the namespace; a file without
    /// that table contributes nothing. `urls` entries come from a
    /// `[swagger-ui.urls]` sub-table, list options from TOML arrays.
    ///
    /// # Errors
    ///
    /// Unreadable or unparseable files fail here, at layering time, so the
    /// process never starts with a half-read configuration.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let value: toml::Value = toml::from_str(&raw).map_err(|source| ConfigError::FileFormat {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(table) = value.get(FILE_TABLE).and_then(toml::Value::as_table) {
            for (key, value) in table {
                flatten_file_value(&mut self.file, key, value)?;
            }
        }
        debug!(path = %path.display(), keys = self.file.len(), "layered config file");
        Ok(self)
    }

    /// Layer in `SWAGGER_UI_*` environment variables.
    ///
    /// The remainder after the prefix is lowercased with `_` mapped to `-`
    /// (`SWAGGER_UI_ALWAYS_INCLUDE` becomes `always-include`). `urls` entries
    /// are supplied as `SWAGGER_UI_URLS_<NAME>` with the name lowercased;
    /// `SWAGGER_UI_URLS_PRIMARY_NAME` is the `urls-primary-name` field, not a
    /// map entry.
    pub fn with_env(mut self) -> Self {
        for (name, value) in std::env::vars() {
            let Some(rest) = name.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let key = rest.to_ascii_lowercase().replace('_', "-");
            // `urls-primary-name` is the one field name sharing the `urls` stem.
            let key = if key.starts_with("urls-") && key != "urls-primary-name" {
                format!("urls.{}", &key["urls-".len()..])
            } else {
                key
            };
            self.env.insert(key, RawValue::Scalar(value));
        }
        debug!(keys = self.env.len(), "layered environment variables");
        self
    }

    /// Set an explicit override, the highest-priority layer.
    ///
    /// List-typed options take comma-separated values, as in the environment.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides
            .insert(key.into(), RawValue::Scalar(value.into()));
        self
    }

    /// Look up a key, honoring precedence: override > env > file.
    pub(crate) fn get(&self, key: &str) -> Option<&RawValue> {
        self.overrides
            .get(key)
            .or_else(|| self.env.get(key))
            .or_else(|| self.file.get(key))
    }

    /// All keys present in any layer, deduplicated.
    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        let mut keys: Vec<&str> = self
            .file
            .keys()
            .chain(self.env.keys())
            .chain(self.overrides.keys())
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys.into_iter()
    }

    /// Collect the `urls.<name>` map entries, each resolved with the usual
    /// layer precedence.
    pub(crate) fn url_entries(&self) -> BTreeMap<String, String> {
        let mut entries = BTreeMap::new();
        for layer in [&self.file, &self.env, &self.overrides] {
            for (key, value) in layer {
                if let (Some(name), RawValue::Scalar(url)) = (key.strip_prefix("urls."), value) {
                    entries.insert(name.to_string(), url.clone());
                }
            }
        }
        entries
    }
}

fn flatten_file_value(
    target: &mut BTreeMap<String, RawValue>,
    key: &str,
    value: &toml::Value,
) -> Result<()> {
    match value {
        toml::Value::Table(urls) if key == "urls" => {
            for (name, url) in urls {
                let url = url.as_str().ok_or_else(|| {
                    ConfigError::malformed(&format!("urls.{}", name), url.to_string(), "a string")
                })?;
                target.insert(format!("urls.{}", name), RawValue::Scalar(url.to_string()));
            }
        }
        toml::Value::String(s) => {
            target.insert(key.to_string(), RawValue::Scalar(s.clone()));
        }
        toml::Value::Integer(n) => {
            target.insert(key.to_string(), RawValue::Scalar(n.to_string()));
        }
        toml::Value::Boolean(b) => {
            target.insert(key.to_string(), RawValue::Scalar(b.to_string()));
        }
        toml::Value::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                match item.as_str() {
                    Some(s) => list.push(s.to_string()),
                    None => {
                        return Err(ConfigError::malformed(
                            key,
                            item.to_string(),
                            "an array of strings",
                        ))
                    }
                }
            }
            target.insert(key.to_string(), RawValue::List(list));
        }
        other => {
            return Err(ConfigError::malformed(
                key,
                other.to_string(),
                "a string, boolean, integer, or array of strings",
            ))
        }
    }
    Ok(())
}

/// Load environment variables from a `.env` file in the current directory.
///
/// Call this before [`ConfigSources::with_env`]; existing environment
/// variables take precedence over `.env` values, and a missing file is not an
/// error.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Load environment variables from a specific file path.
pub fn load_dotenv_from<P: AsRef<Path>>(path: P) {
    let _ = dotenvy::from_path(path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_precedence() {
        let sources = ConfigSources::new()
            .set("path", "/docs")
            .set("path", "/q/docs");
        assert_eq!(
            sources.get("path"),
            Some(&RawValue::Scalar("/q/docs".to_string()))
        );
    }

    #[test]
    fn test_url_entries_across_layers() {
        let sources = ConfigSources::new()
            .set("urls.default", "/openapi.json")
            .set("urls.internal", "/internal.json");
        let entries = sources.url_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries["default"], "/openapi.json");
        assert_eq!(entries["internal"], "/internal.json");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = ConfigSources::new()
            .with_file("/definitely/not/here.toml")
            .unwrap_err();
        assert!(matches!(err, ConfigError::File { .. }));
    }
}
