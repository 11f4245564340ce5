//! End-to-end resolution tests across real sources
//!
//! These tests exercise the full path from config files and environment
//! variables to the resolved schema, including layer precedence. Environment
//! tests are serialized because the process environment is shared.

use std::io::Write;

use proptest::prelude::*;
use serial_test::serial;
use swagger_ui_config::{
    ConfigError, ConfigSources, DocExpansion, Environment, HttpMethod, InitOptions, RouteSettings,
    SwaggerUiConfig, Theme,
};

fn write_config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn resolves_compiled_defaults_without_input() {
    let config = SwaggerUiConfig::resolve(&ConfigSources::new()).unwrap();
    assert_eq!(config.path, "swagger-ui");
    assert!(!config.always_include);
    assert!(!config.query_config_enabled);
    assert!(!config.try_it_out_enabled);
    assert!(config.urls.is_empty());
    assert_eq!(config.title, None);
    assert_eq!(config.deep_linking, None);
}

#[test]
fn resolves_a_full_config_file() {
    let file = write_config_file(
        r#"
[swagger-ui]
path = "/q/docs"
always-include = true
urls-primary-name = "default"
title = "Petstore API"
theme = "monokai"
footer = "internal use only"
deep-linking = true
default-models-expand-depth = -1
doc-expansion = "none"
supported-submit-methods = ["get", "post"]
plugins = ["TopBar"]
try-it-out-enabled = true

[swagger-ui.urls]
default = "/openapi.json"
internal = "/internal/openapi.json"
"#,
    );

    let sources = ConfigSources::new().with_file(file.path()).unwrap();
    let config = SwaggerUiConfig::resolve(&sources).unwrap();

    assert_eq!(config.path, "/q/docs");
    assert!(config.always_include);
    assert_eq!(config.urls.len(), 2);
    assert_eq!(config.urls["default"], "/openapi.json");
    assert_eq!(config.urls_primary_name.as_deref(), Some("default"));
    assert_eq!(config.title.as_deref(), Some("Petstore API"));
    assert_eq!(config.theme, Some(Theme::Monokai));
    assert_eq!(config.footer.as_deref(), Some("internal use only"));
    assert_eq!(config.deep_linking, Some(true));
    assert_eq!(config.default_models_expand_depth, Some(-1));
    assert_eq!(config.doc_expansion, Some(DocExpansion::None));
    assert_eq!(
        config.supported_submit_methods,
        Some(vec![HttpMethod::Get, HttpMethod::Post])
    );
    assert_eq!(config.plugins, Some(vec!["TopBar".to_string()]));
    assert!(config.try_it_out_enabled);
}

#[test]
fn file_without_the_namespace_table_contributes_nothing() {
    let file = write_config_file("[server]\nport = 8080\n");
    let sources = ConfigSources::new().with_file(file.path()).unwrap();
    let config = SwaggerUiConfig::resolve(&sources).unwrap();
    assert_eq!(config, SwaggerUiConfig::default());
}

#[test]
fn malformed_toml_fails_at_layering_time() {
    let file = write_config_file("[swagger-ui\npath =");
    let err = ConfigSources::new().with_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::FileFormat { .. }));
}

#[test]
fn malformed_bool_in_file_names_the_field() {
    // TOML itself types booleans; a quoted string reaches the field parser
    // and must fail there instead of coercing.
    let file = write_config_file("[swagger-ui]\nquery-config-enabled = \"maybe\"\n");
    let sources = ConfigSources::new().with_file(file.path()).unwrap();
    let err = SwaggerUiConfig::resolve(&sources).unwrap_err();
    match err {
        ConfigError::MalformedValue { field, value, .. } => {
            assert_eq!(field, "query-config-enabled");
            assert_eq!(value, "maybe");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn list_valued_file_key_rejected_for_scalar_field() {
    let file = write_config_file("[swagger-ui]\ntitle = [\"a\", \"b\"]\n");
    let sources = ConfigSources::new().with_file(file.path()).unwrap();
    let err = SwaggerUiConfig::resolve(&sources).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MalformedValue { ref field, .. } if field == "title"
    ));
}

#[test]
#[serial]
fn resolves_from_environment_variables() {
    std::env::set_var("SWAGGER_UI_PATH", "/env/docs");
    std::env::set_var("SWAGGER_UI_ALWAYS_INCLUDE", "true");
    std::env::set_var("SWAGGER_UI_DOC_EXPANSION", "list");
    std::env::set_var("SWAGGER_UI_URLS_DEFAULT", "/openapi.json");
    std::env::set_var("SWAGGER_UI_URLS_PRIMARY_NAME", "default");
    std::env::set_var("SWAGGER_UI_SUPPORTED_SUBMIT_METHODS", "get,put");

    let config = SwaggerUiConfig::from_env().unwrap();

    std::env::remove_var("SWAGGER_UI_PATH");
    std::env::remove_var("SWAGGER_UI_ALWAYS_INCLUDE");
    std::env::remove_var("SWAGGER_UI_DOC_EXPANSION");
    std::env::remove_var("SWAGGER_UI_URLS_DEFAULT");
    std::env::remove_var("SWAGGER_UI_URLS_PRIMARY_NAME");
    std::env::remove_var("SWAGGER_UI_SUPPORTED_SUBMIT_METHODS");

    assert_eq!(config.path, "/env/docs");
    assert!(config.always_include);
    assert_eq!(config.doc_expansion, Some(DocExpansion::List));
    assert_eq!(config.urls["default"], "/openapi.json");
    assert_eq!(config.urls_primary_name.as_deref(), Some("default"));
    assert_eq!(
        config.supported_submit_methods,
        Some(vec![HttpMethod::Get, HttpMethod::Put])
    );
}

#[test]
#[serial]
fn malformed_env_bool_fails_resolution() {
    std::env::set_var("SWAGGER_UI_TRY_IT_OUT_ENABLED", "yes please");

    let result = SwaggerUiConfig::from_env();

    std::env::remove_var("SWAGGER_UI_TRY_IT_OUT_ENABLED");

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MalformedValue { ref field, .. } if field == "try-it-out-enabled"
    ));
}

#[test]
#[serial]
fn precedence_is_override_env_file() {
    let file = write_config_file("[swagger-ui]\npath = \"/from-file\"\ntitle = \"from file\"\n");
    std::env::set_var("SWAGGER_UI_PATH", "/from-env");

    let sources = ConfigSources::new()
        .with_file(file.path())
        .unwrap()
        .with_env();
    let config = SwaggerUiConfig::resolve(&sources).unwrap();
    // Env beats file; the untouched key falls through to the file.
    assert_eq!(config.path, "/from-env");
    assert_eq!(config.title.as_deref(), Some("from file"));

    let sources = ConfigSources::new()
        .with_file(file.path())
        .unwrap()
        .with_env()
        .set("path", "/from-override");
    let config = SwaggerUiConfig::resolve(&sources).unwrap();
    assert_eq!(config.path, "/from-override");

    std::env::remove_var("SWAGGER_UI_PATH");
}

#[test]
fn root_path_fails_route_registration_not_resolution() {
    let sources = ConfigSources::new().set("path", "/");
    // Resolution itself carries no business rules.
    let config = SwaggerUiConfig::resolve(&sources).unwrap();
    assert_eq!(config.path, "/");

    let err = RouteSettings::from_config(&config).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPath { .. }));
}

#[test]
fn resolved_config_feeds_the_initializer() {
    let sources = ConfigSources::new()
        .set("urls.a", "u1")
        .set("urls.b", "u2")
        .set("urls-primary-name", "b")
        .set("oauth-client-id", "petstore")
        .set("query-config-enabled", "true");
    let config = SwaggerUiConfig::resolve(&sources).unwrap();
    let init = InitOptions::from_config(&config, "/openapi.json");

    let options = init.to_json();
    assert_eq!(options["urls.primaryName"], "b");
    assert_eq!(options["queryConfigEnabled"], true);
    let oauth = init.oauth_json().unwrap();
    assert_eq!(oauth["clientId"], "petstore");
}

#[test]
fn dev_only_registration_contract() {
    let config = SwaggerUiConfig::resolve(&ConfigSources::new()).unwrap();
    let route = RouteSettings::from_config(&config).unwrap();
    assert!(route.should_register(&Environment::Development));
    assert!(!route.should_register(&Environment::Production));

    let sources = ConfigSources::new().set("always-include", "true");
    let config = SwaggerUiConfig::resolve(&sources).unwrap();
    let route = RouteSettings::from_config(&config).unwrap();
    assert!(route.should_register(&Environment::Production));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Any literal supplied for a pass-through string option resolves to
    // exactly that value.
    #[test]
    fn prop_string_options_round_trip(value in "[a-zA-Z0-9 ./_-]{1,40}") {
        for key in ["title", "footer", "operations-sorter", "validator-url", "on-complete"] {
            let sources = ConfigSources::new().set(key, value.clone());
            let config = SwaggerUiConfig::resolve(&sources).unwrap();
            let resolved = match key {
                "title" => &config.title,
                "footer" => &config.footer,
                "operations-sorter" => &config.operations_sorter,
                "validator-url" => &config.validator_url,
                "on-complete" => &config.on_complete,
                _ => unreachable!(),
            };
            prop_assert_eq!(resolved.as_deref(), Some(value.as_str()));
        }
    }

    // Integer options accept every i32 and nothing else is tested here;
    // rejection is covered by the unit tests.
    #[test]
    fn prop_int_options_round_trip(value in any::<i32>()) {
        let sources = ConfigSources::new().set("max-displayed-tags", value.to_string());
        let config = SwaggerUiConfig::resolve(&sources).unwrap();
        prop_assert_eq!(config.max_displayed_tags, Some(value));
    }

    // The urls map holds arbitrary names without collision as long as names
    // are unique, and the primary accessor returns what was supplied.
    #[test]
    fn prop_urls_round_trip(names in proptest::collection::btree_set("[a-z][a-z0-9]{0,10}", 1..5)) {
        let mut sources = ConfigSources::new();
        for name in &names {
            sources = sources.set(format!("urls.{}", name), format!("/specs/{}.json", name));
        }
        let primary = names.iter().next().unwrap().clone();
        sources = sources.set("urls-primary-name", primary.clone());

        let config = SwaggerUiConfig::resolve(&sources).unwrap();
        prop_assert_eq!(config.urls.len(), names.len());
        for name in &names {
            prop_assert_eq!(&config.urls[name], &format!("/specs/{}.json", name));
        }
        prop_assert_eq!(config.urls_primary_name.as_deref(), Some(primary.as_str()));
    }
}
