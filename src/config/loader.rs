//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{handler_signature, validate_config, ValidationError};
use crate::routing::{HandlerAddress, Router, RouterConfig, StaticRegistry};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ValidationError> for ConfigError {
    fn from(e: ValidationError) -> Self {
        ConfigError::Validation(vec![e])
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Build the router described by a validated configuration.
pub fn build_router(config: &AppConfig) -> Result<Router<StaticRegistry>, ConfigError> {
    let settings = &config.router;
    let router_config = RouterConfig::new(&settings.namespace)
        .map_err(ValidationError::from)?
        .with_prefix(settings.prefix.as_str())
        .with_suffix(settings.suffix.as_str())
        .with_plural_indicator(settings.plural_indicator.as_str())
        .with_singular_indicator(settings.singular_indicator.as_str())
        .exclude_plural_words(&settings.excluded_plural_words)
        .exclude_singular_words(&settings.excluded_singular_words)
        .with_root_namespace(&settings.root_namespace)
        .with_invoke_method(settings.invoke_method.as_str());

    let mut registry = StaticRegistry::new();
    for handler in &config.handlers {
        let address = HandlerAddress::parse(&handler.address)
            .ok_or_else(|| ValidationError::MalformedAddress(handler.address.clone()))?;
        let signature = handler_signature(handler).map_err(ConfigError::Validation)?;
        registry.insert(address, signature);
    }

    tracing::debug!(
        namespace = %router_config.namespace(),
        handlers = registry.len(),
        "Router built"
    );
    Ok(Router::new(router_config, registry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{ParamType, Value};

    const CONFIG: &str = r#"
        [router]
        namespace = "Project::Http"
        excluded_plural_words = ["music"]

        [[handlers]]
        address = "Project::Http::Home::GetAction"

        [[handlers]]
        address = "Project::Http::Users::GetOneAction"
        params = [{ name = "id", types = ["int", "string"] }]

        [server]
        bind_address = "127.0.0.1:3000"
    "#;

    #[test]
    fn test_parse_and_build() {
        let config = parse_config(CONFIG).unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1:3000");
        assert_eq!(config.server.request_timeout_secs, 30);
        assert_eq!(config.router.suffix, "Action");

        let router = build_router(&config).unwrap();
        assert_eq!(router.registry().len(), 2);
        assert_eq!(router.config().excluded_plural_words(), &["music".to_string()]);

        let outcome = router.route("get", "/users/7").unwrap();
        let route = outcome.route().unwrap();
        assert_eq!(route.arguments(), &[Value::Int(7)]);
        assert!(route.signature().required()[0].has_type(ParamType::String));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[router\nnamespace = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_display() {
        let err = parse_config("[router]\nnamespace = \"::\"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
        assert!(err.to_string().starts_with("Validation failed: "));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/routes.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
