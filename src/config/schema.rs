//! Configuration schema definitions.
//!
//! This module defines the complete configuration file structure.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::config::{
    DEFAULT_INVOKE_METHOD, DEFAULT_PLURAL_INDICATOR, DEFAULT_ROOT_NAMESPACE, DEFAULT_SINGULAR_INDICATOR,
    DEFAULT_SUFFIX,
};
use crate::routing::ParamKind;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Naming rules for handler resolution.
    pub router: RouterSettings,

    /// Handlers known to the registry.
    pub handlers: Vec<HandlerConfig>,

    /// Dispatch server settings.
    pub server: ServerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Handler naming configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RouterSettings {
    /// Base namespace every handler lives under (e.g., "Project::Http").
    pub namespace: String,

    /// Prepended to every handler name.
    pub prefix: String,

    /// Appended to every handler name.
    pub suffix: String,

    /// Marks collection handlers (`GetAllAction`).
    pub plural_indicator: String,

    /// Marks single-item handlers (`GetOneAction`).
    pub singular_indicator: String,

    /// Resources always routed to the collection handler.
    pub excluded_plural_words: Vec<String>,

    /// Resources never treated as plural.
    pub excluded_singular_words: Vec<String>,

    /// Sub-namespace for the root path `/`.
    pub root_namespace: String,

    /// Method invoked on every resolved handler.
    pub invoke_method: String,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            prefix: String::new(),
            suffix: DEFAULT_SUFFIX.to_string(),
            plural_indicator: DEFAULT_PLURAL_INDICATOR.to_string(),
            singular_indicator: DEFAULT_SINGULAR_INDICATOR.to_string(),
            excluded_plural_words: Vec::new(),
            excluded_singular_words: Vec::new(),
            root_namespace: DEFAULT_ROOT_NAMESPACE.to_string(),
            invoke_method: DEFAULT_INVOKE_METHOD.to_string(),
        }
    }
}

/// A registered request handler.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct HandlerConfig {
    /// Fully qualified address (e.g., "Project::Http::Contact::GetAction").
    pub address: String,

    /// Declared parameters, in order.
    #[serde(default)]
    pub params: Vec<ParamConfig>,
}

/// A declared handler parameter.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ParamConfig {
    pub name: String,

    /// Accepted types, tried in order ("int", "float", "string", "list").
    pub types: Vec<String>,

    #[serde(default)]
    pub kind: ParamKind,
}

/// Dispatch server configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
