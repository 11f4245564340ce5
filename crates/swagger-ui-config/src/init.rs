//! Viewer initializer data
//!
//! The page-rendering collaborator reads the resolved schema through this
//! view: a `SwaggerUIBundle(...)` options object, an optional `initOAuth(...)`
//! object, optional preauthorization entries, and the page chrome (title,
//! theme stylesheet, footer, extra scripts). Every present option is forwarded
//! verbatim under its camelCase viewer name; absent options are omitted
//! entirely rather than defaulted, so the viewer's own defaults stay in
//! charge.
//!
//! No HTML is produced here. Callback hook options (`onComplete`, the
//! interceptors, the macros) are carried as opaque strings; how they are
//! spliced into the page is the renderer's concern.

use serde_json::{json, Map, Value};

use crate::config::SwaggerUiConfig;

/// DOM element the viewer mounts into.
const DOM_ID: &str = "#swagger-ui";

/// Read-only initializer view over a resolved configuration.
///
/// # Example
///
/// ```rust
/// use swagger_ui_config::{InitOptions, SwaggerUiConfig};
///
/// let config = SwaggerUiConfig::default().try_it_out_enabled(true);
/// let init = InitOptions::from_config(&config, "/openapi.json");
/// let options = init.to_json();
/// assert_eq!(options["url"], "/openapi.json");
/// assert_eq!(options["tryItOutEnabled"], true);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct InitOptions<'a> {
    config: &'a SwaggerUiConfig,
    default_url: &'a str,
}

impl<'a> InitOptions<'a> {
    /// Build the view. `default_url` is the host's own OpenAPI document path,
    /// used when no `urls` entries were configured.
    pub fn from_config(config: &'a SwaggerUiConfig, default_url: &'a str) -> Self {
        Self {
            config,
            default_url,
        }
    }

    /// The `SwaggerUIBundle(...)` options object.
    pub fn to_json(&self) -> Value {
        let config = self.config;
        let mut options = Map::new();
        options.insert("dom_id".to_string(), json!(DOM_ID));

        if config.urls.is_empty() {
            options.insert("url".to_string(), json!(self.default_url));
        } else {
            let urls: Vec<Value> = config
                .urls
                .iter()
                .map(|(name, url)| json!({ "url": url, "name": name }))
                .collect();
            options.insert("urls".to_string(), json!(urls));
            if let Some(primary) = &config.urls_primary_name {
                options.insert("urls.primaryName".to_string(), json!(primary));
            }
        }

        insert_bool(&mut options, "deepLinking", config.deep_linking);
        insert_bool(&mut options, "displayOperationId", config.display_operation_id);
        insert_int(
            &mut options,
            "defaultModelsExpandDepth",
            config.default_models_expand_depth,
        );
        insert_int(
            &mut options,
            "defaultModelExpandDepth",
            config.default_model_expand_depth,
        );
        insert_str(
            &mut options,
            "defaultModelRendering",
            &config.default_model_rendering,
        );
        insert_bool(
            &mut options,
            "displayRequestDuration",
            config.display_request_duration,
        );
        if let Some(doc_expansion) = config.doc_expansion {
            options.insert("docExpansion".to_string(), json!(doc_expansion.as_str()));
        }
        insert_str(&mut options, "filter", &config.filter);
        insert_int(&mut options, "maxDisplayedTags", config.max_displayed_tags);
        insert_str(&mut options, "operationsSorter", &config.operations_sorter);
        insert_bool(&mut options, "showExtensions", config.show_extensions);
        insert_bool(
            &mut options,
            "showCommonExtensions",
            config.show_common_extensions,
        );
        insert_str(&mut options, "tagsSorter", &config.tags_sorter);
        insert_str(&mut options, "onComplete", &config.on_complete);
        insert_str(&mut options, "syntaxHighlight", &config.syntax_highlight);
        insert_str(&mut options, "oauth2RedirectUrl", &config.oauth2_redirect_url);
        insert_str(&mut options, "requestInterceptor", &config.request_interceptor);
        insert_list(
            &mut options,
            "request.curlOptions",
            &config.request_curl_options,
        );
        insert_str(
            &mut options,
            "responseInterceptor",
            &config.response_interceptor,
        );
        insert_bool(&mut options, "showMutatedRequest", config.show_mutated_request);
        if let Some(methods) = &config.supported_submit_methods {
            let methods: Vec<&str> = methods.iter().map(|m| m.as_str()).collect();
            options.insert("supportedSubmitMethods".to_string(), json!(methods));
        }
        insert_str(&mut options, "validatorUrl", &config.validator_url);
        insert_bool(&mut options, "withCredentials", config.with_credentials);
        insert_str(
            &mut options,
            "modelPropertyMacro",
            &config.model_property_macro,
        );
        insert_str(&mut options, "parameterMacro", &config.parameter_macro);
        insert_bool(
            &mut options,
            "persistAuthorization",
            config.persist_authorization,
        );
        insert_str(&mut options, "layout", &config.layout);
        insert_list(&mut options, "plugins", &config.plugins);
        insert_list(&mut options, "presets", &config.presets);
        if config.query_config_enabled {
            options.insert("queryConfigEnabled".to_string(), json!(true));
        }
        if config.try_it_out_enabled {
            options.insert("tryItOutEnabled".to_string(), json!(true));
        }

        Value::Object(options)
    }

    /// The `initOAuth(...)` object, or `None` when no OAuth option is set.
    pub fn oauth_json(&self) -> Option<Value> {
        let config = self.config;
        let mut oauth = Map::new();
        insert_str(&mut oauth, "clientId", &config.oauth_client_id);
        insert_str(&mut oauth, "clientSecret", &config.oauth_client_secret);
        insert_str(&mut oauth, "realm", &config.oauth_realm);
        insert_str(&mut oauth, "appName", &config.oauth_app_name);
        insert_str(&mut oauth, "scopeSeparator", &config.oauth_scope_separator);
        insert_str(&mut oauth, "scopes", &config.oauth_scopes);
        insert_str(
            &mut oauth,
            "additionalQueryStringParams",
            &config.oauth_additional_query_string_params,
        );
        insert_bool(
            &mut oauth,
            "useBasicAuthenticationWithAccessCodeGrant",
            config.oauth_use_basic_authentication_with_access_code_grant,
        );
        insert_bool(
            &mut oauth,
            "usePkceWithAuthorizationCodeGrant",
            config.oauth_use_pkce_with_authorization_code_grant,
        );

        if oauth.is_empty() {
            None
        } else {
            Some(Value::Object(oauth))
        }
    }

    /// Arguments for `preauthorizeBasic(...)`, gated on the definition key.
    pub fn preauthorize_basic_json(&self) -> Option<Value> {
        let config = self.config;
        let key = config.preauthorize_basic_auth_definition_key.as_ref()?;
        Some(json!({
            "authDefinitionKey": key,
            "username": config.preauthorize_basic_username,
            "password": config.preauthorize_basic_password,
        }))
    }

    /// Arguments for `preauthorizeApiKey(...)`, gated on the definition key.
    pub fn preauthorize_api_key_json(&self) -> Option<Value> {
        let config = self.config;
        let key = config.preauthorize_api_key_auth_definition_key.as_ref()?;
        Some(json!({
            "authDefinitionKey": key,
            "apiKeyValue": config.preauthorize_api_key_api_key_value,
        }))
    }

    /// The html page title.
    pub fn page_title(&self) -> &str {
        self.config.title.as_deref().unwrap_or("Swagger UI")
    }

    /// Stylesheet href for the configured theme, falling back to the stock
    /// stylesheet.
    pub fn theme_href(&self) -> &'static str {
        self.config
            .theme
            .map(|theme| theme.href())
            .unwrap_or("style.css")
    }

    /// The html page footer, if configured.
    pub fn footer(&self) -> Option<&str> {
        self.config.footer.as_deref()
    }

    /// External scripts the renderer should add to the page.
    pub fn scripts(&self) -> &[String] {
        self.config.scripts.as_deref().unwrap_or(&[])
    }
}

fn insert_str(options: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        options.insert(key.to_string(), json!(value));
    }
}

fn insert_bool(options: &mut Map<String, Value>, key: &str, value: Option<bool>) {
    if let Some(value) = value {
        options.insert(key.to_string(), json!(value));
    }
}

fn insert_int(options: &mut Map<String, Value>, key: &str, value: Option<i32>) {
    if let Some(value) = value {
        options.insert(key.to_string(), json!(value));
    }
}

fn insert_list(options: &mut Map<String, Value>, key: &str, value: &Option<Vec<String>>) {
    if let Some(value) = value {
        options.insert(key.to_string(), json!(value));
    }
}
