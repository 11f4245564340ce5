//! Error types for configuration resolution

use std::path::PathBuf;

use thiserror::Error;

/// Error raised while layering sources or resolving the schema.
///
/// Every variant is fatal at startup: the schema is immutable once resolved,
/// so there is no degraded mode to fall back to and no retry that could help.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A raw value could not be converted to the declared field type.
    #[error("malformed value {value:?} for `{field}`: expected {expected}")]
    MalformedValue {
        /// Canonical key name of the offending field (e.g. `query-config-enabled`).
        field: String,
        /// The raw input exactly as supplied.
        value: String,
        /// Human-readable description of the accepted input.
        expected: &'static str,
    },

    /// The mount path would shadow the whole application.
    ///
    /// Raised by [`RouteSettings::from_config`](crate::RouteSettings::from_config),
    /// not by schema resolution: the `path` constraint belongs to the route
    /// collaborator, the schema itself carries no business rules.
    #[error("invalid Swagger UI path {path:?}: \"/\" would block the application from serving anything else")]
    InvalidPath {
        /// The rejected path value.
        path: String,
    },

    /// A configuration file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file is not valid TOML.
    #[error("failed to parse config file {}: {source}", path.display())]
    FileFormat {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub(crate) fn malformed(
        field: &str,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::MalformedValue {
            field: field.to_string(),
            value: value.into(),
            expected,
        }
    }
}

/// Result type alias for configuration operations
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_value_names_field_and_raw_value() {
        let err = ConfigError::malformed("query-config-enabled", "maybe", "true or false");
        let msg = err.to_string();
        assert!(msg.contains("query-config-enabled"), "message: {}", msg);
        assert!(msg.contains("maybe"), "message: {}", msg);
    }

    #[test]
    fn test_invalid_path_message() {
        let err = ConfigError::InvalidPath {
            path: "/".to_string(),
        };
        assert!(err.to_string().contains("\"/\""));
    }
}
