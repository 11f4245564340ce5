//! Schema resolution
//!
//! One-shot, deterministic conversion of layered raw input into a
//! [`SwaggerUiConfig`]. Conversion never coerces: a boolean field takes
//! exactly `true` or `false`, an enum field takes exactly its token set, and
//! anything else fails with [`ConfigError::MalformedValue`] naming the field
//! and the offending raw value. A failed resolution should abort startup; the
//! schema is immutable afterwards, so there is nothing to recover into.

use std::str::FromStr;

use tracing::{debug, warn};

use crate::config::SwaggerUiConfig;
use crate::error::{ConfigError, Result};
use crate::options::{DocExpansion, HttpMethod, Theme};
use crate::source::{ConfigSources, RawValue};

/// Every canonical key the schema recognizes, `urls.<name>` entries aside.
const KNOWN_KEYS: &[&str] = &[
    "path",
    "always-include",
    "urls-primary-name",
    "title",
    "theme",
    "footer",
    "deep-linking",
    "display-operation-id",
    "default-models-expand-depth",
    "default-model-expand-depth",
    "default-model-rendering",
    "display-request-duration",
    "doc-expansion",
    "filter",
    "max-displayed-tags",
    "operations-sorter",
    "show-extensions",
    "show-common-extensions",
    "tags-sorter",
    "on-complete",
    "syntax-highlight",
    "oauth2-redirect-url",
    "request-interceptor",
    "request-curl-options",
    "response-interceptor",
    "show-mutated-request",
    "supported-submit-methods",
    "validator-url",
    "with-credentials",
    "model-property-macro",
    "parameter-macro",
    "persist-authorization",
    "layout",
    "plugins",
    "scripts",
    "presets",
    "oauth-client-id",
    "oauth-client-secret",
    "oauth-realm",
    "oauth-app-name",
    "oauth-scope-separator",
    "oauth-scopes",
    "oauth-additional-query-string-params",
    "oauth-use-basic-authentication-with-access-code-grant",
    "oauth-use-pkce-with-authorization-code-grant",
    "preauthorize-basic-auth-definition-key",
    "preauthorize-basic-username",
    "preauthorize-basic-password",
    "preauthorize-api-key-auth-definition-key",
    "preauthorize-api-key-api-key-value",
    "query-config-enabled",
    "try-it-out-enabled",
];

fn scalar<'a>(sources: &'a ConfigSources, key: &str) -> Result<Option<&'a str>> {
    match sources.get(key) {
        None => Ok(None),
        Some(RawValue::Scalar(value)) => Ok(Some(value)),
        Some(RawValue::List(items)) => Err(ConfigError::malformed(
            key,
            items.join(","),
            "a single value, not a list",
        )),
    }
}

fn string_field(sources: &ConfigSources, key: &str) -> Result<Option<String>> {
    Ok(scalar(sources, key)?.map(str::to_string))
}

fn bool_field(sources: &ConfigSources, key: &str) -> Result<Option<bool>> {
    match scalar(sources, key)? {
        None => Ok(None),
        Some(raw) if raw.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Some(raw) if raw.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Some(raw) => Err(ConfigError::malformed(key, raw, "`true` or `false`")),
    }
}

fn int_field(sources: &ConfigSources, key: &str) -> Result<Option<i32>> {
    match scalar(sources, key)? {
        None => Ok(None),
        Some(raw) => raw
            .parse::<i32>()
            .map(Some)
            .map_err(|_| ConfigError::malformed(key, raw, "an integer")),
    }
}

fn enum_field<T: FromStr>(
    sources: &ConfigSources,
    key: &str,
    expected: &'static str,
) -> Result<Option<T>> {
    match scalar(sources, key)? {
        None => Ok(None),
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::malformed(key, raw, expected)),
    }
}

/// List options: native arrays from the file layer, comma-separated scalars
/// from the environment and overrides. An empty scalar is an empty list, a
/// distinct state from absence (it disables "Try it out" entirely for
/// `supported-submit-methods`).
fn list_field(sources: &ConfigSources, key: &str) -> Result<Option<Vec<String>>> {
    match sources.get(key) {
        None => Ok(None),
        Some(RawValue::List(items)) => Ok(Some(items.clone())),
        Some(RawValue::Scalar(raw)) => Ok(Some(
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
        )),
    }
}

fn methods_field(sources: &ConfigSources, key: &str) -> Result<Option<Vec<HttpMethod>>> {
    let Some(items) = list_field(sources, key)? else {
        return Ok(None);
    };
    let mut methods = Vec::with_capacity(items.len());
    for item in items {
        let method = item
            .parse::<HttpMethod>()
            .map_err(|_| ConfigError::malformed(key, item.clone(), HttpMethod::EXPECTED))?;
        methods.push(method);
    }
    Ok(Some(methods))
}

impl SwaggerUiConfig {
    /// Resolve the schema from layered sources.
    ///
    /// Absent keys leave optional fields unset and required fields at their
    /// compiled defaults. Keys inside the namespace that the schema does not
    /// recognize are skipped with a warning.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MalformedValue`] on the first raw value that does not
    /// convert to its declared field type.
    pub fn resolve(sources: &ConfigSources) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = string_field(sources, "path")? {
            config.path = path;
        }
        if let Some(always_include) = bool_field(sources, "always-include")? {
            config.always_include = always_include;
        }
        config.urls = sources.url_entries();
        config.urls_primary_name = string_field(sources, "urls-primary-name")?;
        config.title = string_field(sources, "title")?;
        config.theme = enum_field(sources, "theme", Theme::EXPECTED)?;
        config.footer = string_field(sources, "footer")?;
        config.deep_linking = bool_field(sources, "deep-linking")?;
        config.display_operation_id = bool_field(sources, "display-operation-id")?;
        config.default_models_expand_depth = int_field(sources, "default-models-expand-depth")?;
        config.default_model_expand_depth = int_field(sources, "default-model-expand-depth")?;
        config.default_model_rendering = string_field(sources, "default-model-rendering")?;
        config.display_request_duration = bool_field(sources, "display-request-duration")?;
        config.doc_expansion = enum_field(sources, "doc-expansion", DocExpansion::EXPECTED)?;
        config.filter = string_field(sources, "filter")?;
        config.max_displayed_tags = int_field(sources, "max-displayed-tags")?;
        config.operations_sorter = string_field(sources, "operations-sorter")?;
        config.show_extensions = bool_field(sources, "show-extensions")?;
        config.show_common_extensions = bool_field(sources, "show-common-extensions")?;
        config.tags_sorter = string_field(sources, "tags-sorter")?;
        config.on_complete = string_field(sources, "on-complete")?;
        config.syntax_highlight = string_field(sources, "syntax-highlight")?;
        config.oauth2_redirect_url = string_field(sources, "oauth2-redirect-url")?;
        config.request_interceptor = string_field(sources, "request-interceptor")?;
        config.request_curl_options = list_field(sources, "request-curl-options")?;
        config.response_interceptor = string_field(sources, "response-interceptor")?;
        config.show_mutated_request = bool_field(sources, "show-mutated-request")?;
        config.supported_submit_methods = methods_field(sources, "supported-submit-methods")?;
        config.validator_url = string_field(sources, "validator-url")?;
        config.with_credentials = bool_field(sources, "with-credentials")?;
        config.model_property_macro = string_field(sources, "model-property-macro")?;
        config.parameter_macro = string_field(sources, "parameter-macro")?;
        config.persist_authorization = bool_field(sources, "persist-authorization")?;
        config.layout = string_field(sources, "layout")?;
        config.plugins = list_field(sources, "plugins")?;
        config.scripts = list_field(sources, "scripts")?;
        config.presets = list_field(sources, "presets")?;
        config.oauth_client_id = string_field(sources, "oauth-client-id")?;
        config.oauth_client_secret = string_field(sources, "oauth-client-secret")?;
        config.oauth_realm = string_field(sources, "oauth-realm")?;
        config.oauth_app_name = string_field(sources, "oauth-app-name")?;
        config.oauth_scope_separator = string_field(sources, "oauth-scope-separator")?;
        config.oauth_scopes = string_field(sources, "oauth-scopes")?;
        config.oauth_additional_query_string_params =
            string_field(sources, "oauth-additional-query-string-params")?;
        config.oauth_use_basic_authentication_with_access_code_grant =
            bool_field(sources, "oauth-use-basic-authentication-with-access-code-grant")?;
        config.oauth_use_pkce_with_authorization_code_grant =
            bool_field(sources, "oauth-use-pkce-with-authorization-code-grant")?;
        config.preauthorize_basic_auth_definition_key =
            string_field(sources, "preauthorize-basic-auth-definition-key")?;
        config.preauthorize_basic_username = string_field(sources, "preauthorize-basic-username")?;
        config.preauthorize_basic_password = string_field(sources, "preauthorize-basic-password")?;
        config.preauthorize_api_key_auth_definition_key =
            string_field(sources, "preauthorize-api-key-auth-definition-key")?;
        config.preauthorize_api_key_api_key_value =
            string_field(sources, "preauthorize-api-key-api-key-value")?;
        if let Some(enabled) = bool_field(sources, "query-config-enabled")? {
            config.query_config_enabled = enabled;
        }
        if let Some(enabled) = bool_field(sources, "try-it-out-enabled")? {
            config.try_it_out_enabled = enabled;
        }

        if let Some(primary) = &config.urls_primary_name {
            if !config.urls.contains_key(primary) {
                warn!(
                    primary = %primary,
                    "urls-primary-name does not match any configured urls entry"
                );
            }
        }
        for key in sources.keys() {
            if !KNOWN_KEYS.contains(&key) && !key.starts_with("urls.") {
                warn!(key = %key, "unrecognized swagger-ui configuration key, skipping");
            }
        }

        debug!(
            path = %config.path,
            urls = config.urls.len(),
            "resolved swagger ui configuration"
        );
        Ok(config)
    }

    /// Resolve from `SWAGGER_UI_*` environment variables only.
    ///
    /// Shorthand for [`resolve`](Self::resolve) over
    /// [`ConfigSources::with_env`].
    pub fn from_env() -> Result<Self> {
        Self::resolve(&ConfigSources::new().with_env())
    }
}
