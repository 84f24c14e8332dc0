//! Resolution outcomes.
//!
//! Every resolution that does not hit a structural error ends in one of
//! these. The dispatch layer inspects [`Outcome::status`] to decide
//! between invoking the handler and rendering an error response.

use serde::Serialize;

use crate::routing::route::{HandlerAddress, Route};

/// Outcome-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    Found {
        route: Route,
        closest_matches: Vec<Route>,
    },
    /// Reserved for parameter validation; never produced by the router yet.
    BadRequest {
        handler: Option<HandlerAddress>,
        closest_matches: Vec<Route>,
    },
    NotFound {
        handler: Option<HandlerAddress>,
        closest_matches: Vec<Route>,
    },
    MethodNotAllowed {
        allowed_methods: Vec<String>,
        handler: Option<HandlerAddress>,
        closest_matches: Vec<Route>,
    },
}

/// The result of resolving one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub status: u16,
    /// Method as received, lower-cased, before any HEAD → GET fallback.
    pub method: String,
    pub request_target: String,
    #[serde(flatten)]
    pub resolution: Resolution,
}

impl Outcome {
    pub fn found(method: &str, request_target: &str, route: Route, closest_matches: Vec<Route>) -> Self {
        Self::new(
            200,
            method,
            request_target,
            Resolution::Found {
                route,
                closest_matches,
            },
        )
    }

    pub fn bad_request(
        method: &str,
        request_target: &str,
        handler: Option<HandlerAddress>,
        closest_matches: Vec<Route>,
    ) -> Self {
        Self::new(
            400,
            method,
            request_target,
            Resolution::BadRequest {
                handler,
                closest_matches,
            },
        )
    }

    pub fn not_found(
        method: &str,
        request_target: &str,
        handler: Option<HandlerAddress>,
        closest_matches: Vec<Route>,
    ) -> Self {
        Self::new(
            404,
            method,
            request_target,
            Resolution::NotFound {
                handler,
                closest_matches,
            },
        )
    }

    pub fn method_not_allowed(
        method: &str,
        request_target: &str,
        allowed_methods: Vec<String>,
        handler: Option<HandlerAddress>,
        closest_matches: Vec<Route>,
    ) -> Self {
        Self::new(
            405,
            method,
            request_target,
            Resolution::MethodNotAllowed {
                allowed_methods,
                handler,
                closest_matches,
            },
        )
    }

    fn new(status: u16, method: &str, request_target: &str, resolution: Resolution) -> Self {
        Self {
            status,
            method: method.to_string(),
            request_target: request_target.to_string(),
            resolution,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self.resolution, Resolution::Found { .. })
    }

    /// The resolved handler, on 200.
    pub fn route(&self) -> Option<&Route> {
        match &self.resolution {
            Resolution::Found { route, .. } => Some(route),
            _ => None,
        }
    }

    /// The best-guess handler address, on 400/404/405.
    pub fn handler(&self) -> Option<&HandlerAddress> {
        match &self.resolution {
            Resolution::Found { .. } => None,
            Resolution::BadRequest { handler, .. }
            | Resolution::NotFound { handler, .. }
            | Resolution::MethodNotAllowed { handler, .. } => handler.as_ref(),
        }
    }

    pub fn closest_matches(&self) -> &[Route] {
        match &self.resolution {
            Resolution::Found { closest_matches, .. }
            | Resolution::BadRequest { closest_matches, .. }
            | Resolution::NotFound { closest_matches, .. }
            | Resolution::MethodNotAllowed { closest_matches, .. } => closest_matches,
        }
    }

    /// Methods that would have matched, on 405. Empty otherwise.
    pub fn allowed_methods(&self) -> &[String] {
        match &self.resolution {
            Resolution::MethodNotAllowed { allowed_methods, .. } => allowed_methods,
            _ => &[],
        }
    }
}
