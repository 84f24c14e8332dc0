//! Shared fixtures for integration tests.
//!
//! A small handler tree under `Project::Http`:
//!
//! ```text
//! Home::GetAction()
//! Contact::{Get,Post}Action(string person)
//! Contact::Email::GetAction(string person)
//! Contacts::{GetAll,PostAll}Action()
//! Ping::PostAction()
//! Users::GetAllAction()
//! Users::GetOneAction(int|string id)
//! Users::Profile::GetOneAction(int|string id)
//! States::GetOneAction(string stateAbbr)
//! States::Suburbs::GetAllAction(string stateAbbr)
//! States::Suburbs::GetOneAction(string stateAbbr, string suburbName)
//! States::Suburbs::RegisteredBusinesses::GetAllAction(string stateAbbr, string suburbName, string ...services)
//! Archives::GetAllAction(int year?, int month?, int day?)
//! Music::GetAllAction(string artist?, string album?)
//! Music::TrackInfo::GetAction(string artist, string album, string trackName)
//! VariadicParamsInParent::GetAction(int ...params)
//! VariadicParamsInParent::Act::GetAction()
//! MissingParameter::GetAction(string person)
//! MissingParameter::Act::GetAction()
//! ```

#![allow(dead_code)]

use resource_router::config::ServerConfig;
use resource_router::http::HttpServer;
use resource_router::routing::{HandlerAddress, ParamType::*, Router, RouterConfig, Signature, StaticRegistry};

pub const NAMESPACE: &str = "Project::Http";

/// Address of a fixture handler, relative to [`NAMESPACE`].
pub fn address(relative: &str) -> HandlerAddress {
    HandlerAddress::parse(&format!("{}::{}", NAMESPACE, relative)).unwrap()
}

pub fn registry() -> StaticRegistry {
    let person = || Signature::builder().required("person", [String]).build().unwrap();
    let id = || Signature::builder().required("id", [Int, String]).build().unwrap();

    StaticRegistry::new()
        .register(address("Home::GetAction"), Signature::empty())
        .register(address("Contact::GetAction"), person())
        .register(address("Contact::PostAction"), person())
        .register(address("Contact::Email::GetAction"), person())
        .register(address("Contacts::GetAllAction"), Signature::empty())
        .register(address("Contacts::PostAllAction"), Signature::empty())
        .register(address("Ping::PostAction"), Signature::empty())
        .register(address("Users::GetAllAction"), Signature::empty())
        .register(address("Users::GetOneAction"), id())
        .register(address("Users::Profile::GetOneAction"), id())
        .register(
            address("States::GetOneAction"),
            Signature::builder().required("stateAbbr", [String]).build().unwrap(),
        )
        .register(
            address("States::Suburbs::GetAllAction"),
            Signature::builder().required("stateAbbr", [String]).build().unwrap(),
        )
        .register(
            address("States::Suburbs::GetOneAction"),
            Signature::builder()
                .required("stateAbbr", [String])
                .required("suburbName", [String])
                .build()
                .unwrap(),
        )
        .register(
            address("States::Suburbs::RegisteredBusinesses::GetAllAction"),
            Signature::builder()
                .required("stateAbbr", [String])
                .required("suburbName", [String])
                .variadic("offersTheseServices", [String])
                .build()
                .unwrap(),
        )
        .register(
            address("Archives::GetAllAction"),
            Signature::builder()
                .optional("year", [Int])
                .optional("month", [Int])
                .optional("day", [Int])
                .build()
                .unwrap(),
        )
        .register(
            address("Music::GetAllAction"),
            Signature::builder()
                .optional("artist", [String])
                .optional("album", [String])
                .build()
                .unwrap(),
        )
        .register(
            address("Music::TrackInfo::GetAction"),
            Signature::builder()
                .required("artist", [String])
                .required("album", [String])
                .required("trackName", [String])
                .build()
                .unwrap(),
        )
        .register(
            address("VariadicParamsInParent::GetAction"),
            Signature::builder().variadic("params", [Int]).build().unwrap(),
        )
        .register(address("VariadicParamsInParent::Act::GetAction"), Signature::empty())
        .register(address("MissingParameter::GetAction"), person())
        .register(address("MissingParameter::Act::GetAction"), Signature::empty())
}

pub fn default_config() -> RouterConfig {
    RouterConfig::new(NAMESPACE).unwrap()
}

/// Router over the fixture tree with default naming rules.
pub fn router() -> Router<StaticRegistry> {
    router_with(default_config())
}

pub fn router_with(config: RouterConfig) -> Router<StaticRegistry> {
    Router::new(config, registry())
}

/// Dispatch server over the fixture tree, with every collection word excluded
/// the way `routes.toml` does it.
pub fn server() -> HttpServer {
    let config = default_config().exclude_plural_words(["archives", "music", "registered-businesses"]);
    HttpServer::new(router_with(config), ServerConfig::default())
}
