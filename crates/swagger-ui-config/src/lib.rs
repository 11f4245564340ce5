//! Typed configuration schema for exposing Swagger UI
//!
//! This crate declares the full set of options controlling how a host web
//! framework exposes the bundled Swagger UI viewer: where the route is
//! mounted, which API documents it points at, and every viewer option that is
//! forwarded to the client-side initializer. The schema is resolved once at
//! startup from layered sources (config file, `SWAGGER_UI_*` environment
//! variables, explicit overrides) and is read-only afterwards, so it can be
//! shared freely across threads.
//!
//! Resolution fails fast: a raw value that does not convert to its declared
//! field type aborts startup with an error naming the field and the value.
//! There is no silent coercion and no degraded mode.
//!
//! The crate does not serve HTTP or render HTML. Two views hand the resolved
//! data to those collaborators:
//!
//! - [`RouteSettings`] for route registration (the mount path, the
//!   `always-include` toggle, and the `path != "/"` rule)
//! - [`InitOptions`] for page rendering (the `SwaggerUIBundle` options
//!   object, OAuth and preauthorization data, page chrome)
//!
//! # Example
//!
//! ```rust,no_run
//! use swagger_ui_config::{
//!     ConfigSources, Environment, InitOptions, RouteSettings, SwaggerUiConfig,
//! };
//!
//! let sources = ConfigSources::new().with_file("app.toml")?.with_env();
//! let config = SwaggerUiConfig::resolve(&sources)?;
//!
//! let route = RouteSettings::from_config(&config)?;
//! if route.should_register(&Environment::current()) {
//!     let init = InitOptions::from_config(&config, "/openapi.json");
//!     let _options = init.to_json();
//!     // hand `route.path` and `options` to the framework
//! }
//! # Ok::<(), swagger_ui_config::ConfigError>(())
//! ```

mod config;
mod error;
mod init;
mod options;
mod resolve;
mod route;
mod source;

pub use config::SwaggerUiConfig;
pub use error::{ConfigError, Result};
pub use init::InitOptions;
pub use options::{DocExpansion, HttpMethod, Theme};
pub use route::{Environment, RouteSettings};
pub use source::{load_dotenv, load_dotenv_from, ConfigSources, RawValue, ENV_PREFIX};
