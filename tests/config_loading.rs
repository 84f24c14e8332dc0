//! Route file loading and validation.

use std::path::Path;

use resource_router::config::{build_router, load_config, parse_config, ConfigError, ValidationError};
use resource_router::routing::{list_routes, HandlerRegistry, InvalidConfig, ParamKind, Value};

mod common;

fn example_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("routes.toml")
}

#[test]
fn test_example_route_file_loads() {
    let config = load_config(&example_path()).unwrap();

    assert_eq!(config.router.namespace, "Project::Http");
    assert_eq!(config.handlers.len(), 17);
    assert_eq!(config.server.request_timeout_secs, 30);
    assert!(!config.observability.metrics_enabled);

    let businesses = config
        .handlers
        .iter()
        .find(|h| h.address.ends_with("RegisteredBusinesses::GetAllAction"))
        .unwrap();
    assert_eq!(businesses.params[2].kind, ParamKind::Variadic);
}

#[test]
fn test_example_route_file_matches_fixtures() {
    let router = build_router(&load_config(&example_path()).unwrap()).unwrap();
    let fixtures = common::registry();

    for (address, signature) in router.registry().iter() {
        assert_eq!(fixtures.lookup(address), Some(signature), "{address}");
    }
}

#[test]
fn test_example_router_resolves() {
    let router = build_router(&load_config(&example_path()).unwrap()).unwrap();

    let outcome = router.route("get", "/archives/2022").unwrap();
    assert_eq!(outcome.route().unwrap().handler(), &common::address("Archives::GetAllAction"));
    assert_eq!(outcome.route().unwrap().arguments(), &[Value::Int(2022)]);
}

#[test]
fn test_example_route_listing() {
    let router = build_router(&load_config(&example_path()).unwrap()).unwrap();
    let listing = list_routes(&router);

    let path_of = |handler: &str| {
        listing
            .iter()
            .find(|r| r.handler == common::address(handler))
            .map(|r| r.path.clone())
    };

    assert_eq!(path_of("Home::GetAction").as_deref(), Some("/"));
    assert_eq!(path_of("Users::GetOneAction").as_deref(), Some("/users/{id}"));
    assert_eq!(
        path_of("States::Suburbs::RegisteredBusinesses::GetAllAction").as_deref(),
        Some("/states/{stateAbbr}/suburbs/{suburbName}/registered-businesses/{offersTheseServices...}")
    );
    assert_eq!(
        path_of("Music::TrackInfo::GetAction").as_deref(),
        Some("/music/{artist}/{album}/track-info/{trackName}")
    );
}

#[test]
fn test_minimal_config_uses_defaults() {
    let config = parse_config("[router]\nnamespace = \"App\"").unwrap();

    assert!(config.handlers.is_empty());
    assert_eq!(config.router.root_namespace, "Home");
    assert_eq!(config.router.invoke_method, "__invoke");
    assert_eq!(config.server.bind_address, "0.0.0.0:8080");
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn test_custom_naming_rules() {
    let config = parse_config(
        r#"
        [router]
        namespace = "App"
        prefix = "Handle"
        suffix = ""
        plural_indicator = "Many"
        root_namespace = "Index"
        invoke_method = "handle"

        [[handlers]]
        address = "App::Index::HandleGet"

        [[handlers]]
        address = "App::Users::HandleGetMany"
        "#,
    )
    .unwrap();
    let router = build_router(&config).unwrap();

    let outcome = router.route("get", "/").unwrap();
    assert_eq!(outcome.route().unwrap().target(), "App::Index::HandleGet::handle");

    let outcome = router.route("get", "/users").unwrap();
    assert_eq!(outcome.route().unwrap().handler().name(), "HandleGetMany");
}

#[test]
fn test_invalid_files_report_every_problem() {
    let err = parse_config(
        r#"
        [router]
        namespace = ""

        [[handlers]]
        address = "App::Users::GetOneAction"
        params = [{ name = "id", types = [] }]
        "#,
    )
    .unwrap_err();

    let ConfigError::Validation(errors) = err else {
        panic!("expected validation errors");
    };
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0], ValidationError::Router(InvalidConfig::NamespaceMissing));
    assert!(matches!(errors[1], ValidationError::Signature { .. }));
}

#[test]
fn test_unknown_param_kind_is_parse_error() {
    let err = parse_config(
        r#"
        [router]
        namespace = "App"

        [[handlers]]
        address = "App::Users::GetOneAction"
        params = [{ name = "id", types = ["int"], kind = "sometimes" }]
        "#,
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
}
