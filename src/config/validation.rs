//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check handler addresses lie inside the configured namespace
//! - Check parameter declarations are well ordered and typed
//! - Detect duplicate handler registrations
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::{AppConfig, HandlerConfig};
use crate::routing::{HandlerAddress, InvalidConfig, InvalidSignature, ParamType, RouterConfig, Signature};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("router: {0}")]
    Router(#[from] InvalidConfig),

    #[error("handler '{0}': address must be a namespaced handler name")]
    MalformedAddress(String),

    #[error("handler '{address}': outside namespace '{namespace}'")]
    OutsideNamespace { address: String, namespace: String },

    #[error("handler '{0}': registered more than once")]
    DuplicateHandler(String),

    #[error("handler '{address}': parameter ${param}: unsupported type '{ty}'")]
    UnsupportedType { address: String, param: String, ty: String },

    #[error("handler '{address}': {source}")]
    Signature { address: String, source: InvalidSignature },
}

/// Validate a loaded configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let namespace = match RouterConfig::new(&config.router.namespace) {
        Ok(router) => Some(router.namespace().to_string()),
        Err(e) => {
            errors.push(ValidationError::Router(e));
            None
        }
    };

    let mut seen = HashSet::new();
    for handler in &config.handlers {
        let Some(address) = HandlerAddress::parse(&handler.address) else {
            errors.push(ValidationError::MalformedAddress(handler.address.clone()));
            continue;
        };

        if let Some(namespace) = &namespace {
            if address.relative_to(namespace).is_none() {
                errors.push(ValidationError::OutsideNamespace {
                    address: handler.address.clone(),
                    namespace: namespace.clone(),
                });
            }
        }

        if !seen.insert(address) {
            errors.push(ValidationError::DuplicateHandler(handler.address.clone()));
        }

        if let Err(e) = handler_signature(handler) {
            errors.extend(e);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Build the signature declared by a handler entry.
pub fn handler_signature(handler: &HandlerConfig) -> Result<Signature, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut builder = Signature::builder();

    for param in &handler.params {
        let mut types = Vec::with_capacity(param.types.len());
        for ty in &param.types {
            match ty.parse::<ParamType>() {
                Ok(ty) => types.push(ty),
                Err(_) => errors.push(ValidationError::UnsupportedType {
                    address: handler.address.clone(),
                    param: param.name.clone(),
                    ty: ty.clone(),
                }),
            }
        }
        builder = builder.param(param.kind, param.name.clone(), types);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    builder.build().map_err(|source| {
        vec![ValidationError::Signature {
            address: handler.address.clone(),
            source,
        }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ParamConfig;
    use crate::routing::ParamKind;

    fn param(name: &str, types: &[&str], kind: ParamKind) -> ParamConfig {
        ParamConfig {
            name: name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
            kind,
        }
    }

    #[test]
    fn test_valid_config() {
        let mut config = AppConfig::default();
        config.router.namespace = "Project::Http".into();
        config.handlers.push(HandlerConfig {
            address: "Project::Http::Users::GetOneAction".into(),
            params: vec![param("id", &["int", "string"], ParamKind::Required)],
        });

        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = AppConfig::default();
        config.router.namespace = "Project::Http".into();
        config.handlers = vec![
            HandlerConfig {
                address: "Other::Users::GetAllAction".into(),
                params: vec![],
            },
            HandlerConfig {
                address: "GetAction".into(),
                params: vec![],
            },
            HandlerConfig {
                address: "Project::Http::Archives::GetAllAction".into(),
                params: vec![
                    param("year", &["int"], ParamKind::Optional),
                    param("month", &["int"], ParamKind::Required),
                ],
            },
            HandlerConfig {
                address: "Project::Http::Tags::GetAllAction".into(),
                params: vec![param("tag", &["bool"], ParamKind::Required)],
            },
            HandlerConfig {
                address: "Project::Http::Tags::GetAllAction".into(),
                params: vec![],
            },
        ];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(matches!(errors[0], ValidationError::OutsideNamespace { .. }));
        assert!(matches!(errors[1], ValidationError::MalformedAddress(_)));
        assert!(matches!(
            errors[2],
            ValidationError::Signature {
                source: InvalidSignature::RequiredAfterOptional { .. },
                ..
            }
        ));
        assert!(matches!(errors[3], ValidationError::UnsupportedType { .. }));
        assert!(matches!(errors[4], ValidationError::DuplicateHandler(_)));
    }

    #[test]
    fn test_missing_namespace() {
        let errors = validate_config(&AppConfig::default()).unwrap_err();
        assert_eq!(errors, vec![ValidationError::Router(InvalidConfig::NamespaceMissing)]);
    }
}
