//! Routing errors.
//!
//! Not-found and method-not-allowed are outcomes, not errors. What lives
//! here either rejects a configuration up front or aborts a resolution
//! because the handler hierarchy itself is broken.

use thiserror::Error;

use crate::routing::route::Route;
use crate::routing::signature::Parameter;

/// Invalid router configuration, raised before any resolution happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidConfig {
    #[error("a value was not provided for the namespace")]
    NamespaceMissing,

    #[error("namespace cannot be in the global scope")]
    NamespaceInGlobalScope,
}

/// A child handler whose required parameters do not line up with its parent's.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureMismatch {
    #[error(
        "parameter #{position} (${name}) from parent request-handler \"{parent}\" is missing from \
         child request-handler \"{child}\", or is not in the same position"
    )]
    MissingRequiredParameter {
        parent: String,
        child: String,
        position: usize,
        name: String,
    },

    #[error(
        "route \"{child}\" must have the same type signature as parent resource \"{parent}\": \
         expected type[s] \"{expected}\" at position {position}, got \"{actual}\""
    )]
    IncorrectTypes {
        parent: String,
        child: String,
        position: usize,
        expected: String,
        actual: String,
    },
}

impl SignatureMismatch {
    pub fn missing_required_parameter(parent: &Route, child: &Route, parent_param: &Parameter) -> Self {
        SignatureMismatch::MissingRequiredParameter {
            parent: parent.handler().to_string(),
            child: child.handler().to_string(),
            position: parent_param.position,
            name: parent_param.name.clone(),
        }
    }

    pub fn incorrect_types(
        parent: &Route,
        child: &Route,
        parent_param: &Parameter,
        child_param: &Parameter,
    ) -> Self {
        SignatureMismatch::IncorrectTypes {
            parent: parent.target(),
            child: child.target(),
            position: parent_param.position,
            expected: parent_param.types_as_string(),
            actual: child_param.types_as_string(),
        }
    }
}

/// Fatal structural errors that abort a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("parent route '{parent}' cannot contain variadic parameters (nested route '{child}')")]
    UnallowedVariadicParameter { parent: String, child: String },

    #[error(transparent)]
    SignatureMismatch(#[from] SignatureMismatch),
}

impl RouteError {
    pub fn unallowed_variadic_parameter(parent: &Route, child: &Route) -> Self {
        RouteError::UnallowedVariadicParameter {
            parent: parent.to_string(),
            child: child.target(),
        }
    }
}

/// Convenience alias for resolution results.
pub type RouteResult<T> = Result<T, RouteError>;
