//! The Swagger UI configuration schema

use std::collections::BTreeMap;

use serde::Serialize;

use crate::options::{DocExpansion, HttpMethod, Theme};

/// Resolved configuration for exposing Swagger UI.
///
/// One instance is resolved at startup (see [`SwaggerUiConfig::resolve`]) and
/// then shared read-only for the process lifetime. Every field is either a
/// required scalar with a compiled default or an `Option` whose `None` state
/// means "not configured"; consumers must branch on presence instead of
/// assuming a default, because the viewer itself distinguishes an omitted
/// option from any explicit value.
///
/// Fields are plain `pub`: the schema is a data contract, not a behavior
/// carrier. The `path != "/"` rule is enforced by
/// [`RouteSettings`](crate::RouteSettings), not here.
///
/// # Example
///
/// ```rust
/// use swagger_ui_config::SwaggerUiConfig;
///
/// let config = SwaggerUiConfig::default()
///     .title("Petstore API")
///     .try_it_out_enabled(true);
/// assert_eq!(config.path, "swagger-ui");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwaggerUiConfig {
    /// The path where Swagger UI is served.
    ///
    /// The value `/` is not allowed as it would block the application from
    /// serving anything else.
    pub path: String,

    /// Whether the UI route is registered in every run mode. By default it is
    /// only registered when the application runs in development mode.
    pub always_include: bool,

    /// API document sources offered in the top-bar selector, keyed by display
    /// name. When empty, the renderer falls back to the host's own OpenAPI
    /// document path.
    pub urls: BTreeMap<String, String>,

    /// If `urls` is used, the name of the entry selected by default.
    pub urls_primary_name: Option<String>,

    /// The html title for the page.
    pub title: Option<String>,

    /// Stylesheet theme for the page.
    pub theme: Option<Theme>,

    /// A footer for the html page. Nothing by default.
    pub footer: Option<String>,

    /// Enables deep linking for tags and operations.
    pub deep_linking: Option<bool>,

    /// Controls the display of operationId in the operations list.
    pub display_operation_id: Option<bool>,

    /// Default expansion depth for models (`-1` hides the models entirely).
    pub default_models_expand_depth: Option<i32>,

    /// Default expansion depth for the model on the model-example section.
    pub default_model_expand_depth: Option<i32>,

    /// Controls how the model is shown when the API is first rendered.
    pub default_model_rendering: Option<String>,

    /// Controls the display of the request duration for "Try it out" requests.
    pub display_request_duration: Option<bool>,

    /// Default expansion setting for the operations and tags.
    pub doc_expansion: Option<DocExpansion>,

    /// Enables filtering of tagged operations. `"true"` enables the filter
    /// box, any other string is used as the initial filter expression.
    pub filter: Option<String>,

    /// Limits the number of tagged operations displayed to at most this many.
    pub max_displayed_tags: Option<i32>,

    /// Sort applied to the operation list of each API: `alpha`, `method`, or
    /// the name of a client-side sort function.
    pub operations_sorter: Option<String>,

    /// Controls the display of vendor extension (`x-`) fields and values.
    pub show_extensions: Option<bool>,

    /// Controls the display of pattern/maxLength/minLength/maximum/minimum
    /// extensions for parameters.
    pub show_common_extensions: Option<bool>,

    /// Sort applied to the tag list of each API: `alpha` or the name of a
    /// client-side sort function.
    pub tags_sorter: Option<String>,

    /// Name of a client-side callback invoked when the viewer has finished
    /// rendering a newly provided definition. Stored as an opaque string.
    pub on_complete: Option<String>,

    /// Syntax highlighting of payloads and cURL commands: `false` to
    /// deactivate, or an object literal with `activate` and `theme`.
    pub syntax_highlight: Option<String>,

    /// OAuth redirect URL.
    pub oauth2_redirect_url: Option<String>,

    /// Name of a client-side function intercepting remote definition,
    /// "Try it out" and OAuth 2.0 requests. Stored as an opaque string.
    pub request_interceptor: Option<String>,

    /// Command line options made available to the generated curl command.
    pub request_curl_options: Option<Vec<String>>,

    /// Name of a client-side function intercepting responses. Stored as an
    /// opaque string.
    pub response_interceptor: Option<String>,

    /// Build the displayed curl command from the mutated request returned by
    /// the request interceptor rather than the original request.
    pub show_mutated_request: Option<bool>,

    /// HTTP methods with "Try it out" enabled. An empty list disables
    /// "Try it out" for all operations without hiding them.
    pub supported_submit_methods: Option<Vec<HttpMethod>>,

    /// Validator URL used for the validation badge. `none`, `127.0.0.1` or
    /// `localhost` disable validation.
    pub validator_url: Option<String>,

    /// Pass browser credentials in CORS requests sent by the viewer.
    pub with_credentials: Option<bool>,

    /// Name of a client-side macro supplying default values for model
    /// properties. Stored as an opaque string.
    pub model_property_macro: Option<String>,

    /// Name of a client-side macro supplying default values for parameters.
    /// Stored as an opaque string.
    pub parameter_macro: Option<String>,

    /// Persist authorization data across browser close/refresh.
    pub persist_authorization: Option<bool>,

    /// Name of the component used as the top-level layout.
    pub layout: Option<String>,

    /// Plugin functions to load into the viewer.
    pub plugins: Option<Vec<String>>,

    /// External scripts (usually plugins) to load into the page.
    pub scripts: Option<Vec<String>>,

    /// Presets to load into the viewer.
    pub presets: Option<Vec<String>>,

    /// OAuth default clientId, forwarded to the viewer's OAuth initializer.
    pub oauth_client_id: Option<String>,

    /// OAuth default clientSecret, forwarded to the viewer's OAuth initializer.
    pub oauth_client_secret: Option<String>,

    /// OAuth1 realm query parameter added to authorizationUrl and tokenUrl.
    pub oauth_realm: Option<String>,

    /// OAuth application name shown in the authorization popup.
    pub oauth_app_name: Option<String>,

    /// Separator used when passing OAuth scopes.
    pub oauth_scope_separator: Option<String>,

    /// OAuth scopes, separated by `oauth_scope_separator`.
    pub oauth_scopes: Option<String>,

    /// Additional query parameters added to authorizationUrl and tokenUrl.
    pub oauth_additional_query_string_params: Option<String>,

    /// For the accessCode flow, pass the client password using HTTP Basic
    /// authentication during the authorization_code token request.
    pub oauth_use_basic_authentication_with_access_code_grant: Option<bool>,

    /// Enable Proof Key for Code Exchange for authorization code flows.
    pub oauth_use_pkce_with_authorization_code_grant: Option<bool>,

    /// Security scheme key pre-authorized with Basic credentials.
    pub preauthorize_basic_auth_definition_key: Option<String>,

    /// Username pre-filled for the Basic scheme.
    pub preauthorize_basic_username: Option<String>,

    /// Password pre-filled for the Basic scheme.
    pub preauthorize_basic_password: Option<String>,

    /// Security scheme key pre-authorized with an API key or Bearer value.
    pub preauthorize_api_key_auth_definition_key: Option<String>,

    /// API key value pre-filled for the API key scheme.
    pub preauthorize_api_key_api_key_value: Option<String>,

    /// Allow the user to modify and test different query parameters in the
    /// API request.
    pub query_config_enabled: bool,

    /// Whether "Try it out" is enabled by default.
    pub try_it_out_enabled: bool,
}

impl Default for SwaggerUiConfig {
    fn default() -> Self {
        Self {
            path: "swagger-ui".to_string(),
            always_include: false,
            urls: BTreeMap::new(),
            urls_primary_name: None,
            title: None,
            theme: None,
            footer: None,
            deep_linking: None,
            display_operation_id: None,
            default_models_expand_depth: None,
            default_model_expand_depth: None,
            default_model_rendering: None,
            display_request_duration: None,
            doc_expansion: None,
            filter: None,
            max_displayed_tags: None,
            operations_sorter: None,
            show_extensions: None,
            show_common_extensions: None,
            tags_sorter: None,
            on_complete: None,
            syntax_highlight: None,
            oauth2_redirect_url: None,
            request_interceptor: None,
            request_curl_options: None,
            response_interceptor: None,
            show_mutated_request: None,
            supported_submit_methods: None,
            validator_url: None,
            with_credentials: None,
            model_property_macro: None,
            parameter_macro: None,
            persist_authorization: None,
            layout: None,
            plugins: None,
            scripts: None,
            presets: None,
            oauth_client_id: None,
            oauth_client_secret: None,
            oauth_realm: None,
            oauth_app_name: None,
            oauth_scope_separator: None,
            oauth_scopes: None,
            oauth_additional_query_string_params: None,
            oauth_use_basic_authentication_with_access_code_grant: None,
            oauth_use_pkce_with_authorization_code_grant: None,
            preauthorize_basic_auth_definition_key: None,
            preauthorize_basic_username: None,
            preauthorize_basic_password: None,
            preauthorize_api_key_auth_definition_key: None,
            preauthorize_api_key_api_key_value: None,
            query_config_enabled: false,
            try_it_out_enabled: false,
        }
    }
}

impl SwaggerUiConfig {
    /// Create a configuration with compiled defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mount path for the UI route.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Register the UI route in every run mode, not just development.
    pub fn always_include(mut self, always_include: bool) -> Self {
        self.always_include = always_include;
        self
    }

    /// Set the html page title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the html page footer.
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Set the stylesheet theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Add a named API document source to the top-bar selector.
    pub fn url(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.urls.insert(name.into(), url.into());
        self
    }

    /// Select the default entry of the top-bar selector.
    pub fn urls_primary_name(mut self, name: impl Into<String>) -> Self {
        self.urls_primary_name = Some(name.into());
        self
    }

    /// Set the default expansion for operations and tags.
    pub fn doc_expansion(mut self, doc_expansion: DocExpansion) -> Self {
        self.doc_expansion = Some(doc_expansion);
        self
    }

    /// Enable "Try it out" by default.
    pub fn try_it_out_enabled(mut self, enabled: bool) -> Self {
        self.try_it_out_enabled = enabled;
        self
    }

    /// Allow the user to modify query parameters in the API request.
    pub fn query_config_enabled(mut self, enabled: bool) -> Self {
        self.query_config_enabled = enabled;
        self
    }

    /// Set the OAuth default clientId.
    pub fn oauth_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.oauth_client_id = Some(client_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_defaults() {
        let config = SwaggerUiConfig::default();
        assert_eq!(config.path, "swagger-ui");
        assert!(!config.always_include);
        assert!(config.urls.is_empty());
        assert!(!config.query_config_enabled);
        assert!(!config.try_it_out_enabled);
        // Absence of an optional bool is distinct from false.
        assert_eq!(config.deep_linking, None);
        assert_eq!(config.show_mutated_request, None);
    }

    #[test]
    fn test_builder_methods() {
        let config = SwaggerUiConfig::new()
            .path("/q/docs")
            .title("Petstore API")
            .theme(Theme::Monokai)
            .url("default", "/openapi.json")
            .url("internal", "/internal/openapi.json")
            .urls_primary_name("default")
            .doc_expansion(DocExpansion::None)
            .try_it_out_enabled(true);

        assert_eq!(config.path, "/q/docs");
        assert_eq!(config.title.as_deref(), Some("Petstore API"));
        assert_eq!(config.theme, Some(Theme::Monokai));
        assert_eq!(config.urls.len(), 2);
        assert_eq!(config.urls_primary_name.as_deref(), Some("default"));
        assert_eq!(config.doc_expansion, Some(DocExpansion::None));
        assert!(config.try_it_out_enabled);
    }
}
