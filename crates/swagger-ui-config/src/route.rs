//! Route-registration contract
//!
//! The route collaborator reads exactly two schema fields: the mount path and
//! the `always-include` toggle. The `path != "/"` rule lives here rather than
//! in the schema, which stays a pure data holder.

use std::fmt;

use crate::config::SwaggerUiConfig;
use crate::error::{ConfigError, Result};

/// Run mode of the host application, detected from `APP_ENV`.
///
/// Decides whether a not-`always-include` Swagger UI route is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Development mode: the UI route is registered unconditionally.
    Development,
    /// Production mode: only `always-include` routes are registered.
    Production,
    /// Any other named deployment; treated like production for registration.
    Custom(String),
}

impl Environment {
    /// Detect the current run mode from the `APP_ENV` environment variable.
    ///
    /// `production`/`prod` and `development`/`dev` map to the two main modes;
    /// an unset variable means development, anything else is `Custom`.
    pub fn current() -> Self {
        match std::env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Self::Production,
            Ok("development") | Ok("dev") => Self::Development,
            Ok(other) => Self::Custom(other.to_string()),
            Err(_) => Self::Development,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// The environment name as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Custom(name) => name,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The slice of the schema the route collaborator consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSettings {
    /// Validated mount path for the UI route.
    pub path: String,
    /// Register the route in every run mode, not just development.
    pub always_include: bool,
}

impl RouteSettings {
    /// Extract and validate the route settings from a resolved schema.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPath`] when the configured path is `/`, which
    /// would block the application from serving anything else. Like every
    /// configuration error, this is fatal at startup.
    pub fn from_config(config: &SwaggerUiConfig) -> Result<Self> {
        if config.path == "/" {
            return Err(ConfigError::InvalidPath {
                path: config.path.clone(),
            });
        }
        Ok(Self {
            path: config.path.clone(),
            always_include: config.always_include,
        })
    }

    /// Whether the route should be registered in the given run mode.
    pub fn should_register(&self, environment: &Environment) -> bool {
        self.always_include || environment.is_development()
    }
}
