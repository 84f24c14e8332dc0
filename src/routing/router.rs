//! Request resolution.
//!
//! # Responsibilities
//! - Walk the request path one segment at a time
//! - Name a candidate handler per segment and ask the registry for it
//! - Bind trailing segments to the matched handler's parameters
//! - Chain nested handlers, checking their signatures line up
//! - Return an explicit outcome rather than a silent default
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - All per-request state lives in a [`Walk`] owned by one call
//! - Deterministic: same input always resolves to the same outcome
//! - HEAD falls back to the GET handler when no HEAD handler exists

use tracing::{debug, trace};

use crate::routing::coercion::{coerce_first, ParamType, Value};
use crate::routing::config::RouterConfig;
use crate::routing::error::{RouteError, RouteResult, SignatureMismatch};
use crate::routing::outcome::Outcome;
use crate::routing::registry::HandlerRegistry;
use crate::routing::route::{HandlerAddress, Route, NAMESPACE_SEPARATOR};
use crate::routing::segments::Segments;
use crate::routing::signature::{Parameter, Signature};
use crate::routing::translator::Translator;

/// Methods probed when building the allowed-methods list.
pub const SUPPORTED_METHODS: [&str; 9] = [
    "get", "head", "post", "put", "delete", "connect", "options", "trace", "patch",
];

/// Convention-based resolver over a handler registry.
#[derive(Debug, Clone)]
pub struct Router<R> {
    config: RouterConfig,
    registry: R,
}

impl<R: HandlerRegistry> Router<R> {
    pub fn new(config: RouterConfig, registry: R) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn translator(&self) -> Translator<'_> {
        Translator::new(&self.config)
    }

    /// Resolve `method` and `request_target` to a handler.
    ///
    /// Not-found and method-not-allowed come back as `Ok` outcomes; only a
    /// misconfigured handler hierarchy is an `Err`.
    pub fn route(&self, method: &str, request_target: &str) -> RouteResult<Outcome> {
        let mut walk = Walk::new(self, method, request_target);
        walk.run()?;
        let outcome = walk.finish();

        debug!(
            method = %outcome.method,
            request_target = %outcome.request_target,
            status = outcome.status,
            "Resolved request"
        );
        Ok(outcome)
    }

    /// Namespace part contributed by one path segment.
    fn namespace_fragment(&self, segment: &str) -> String {
        let part = if segment.is_empty() {
            self.config.root_namespace().to_string()
        } else {
            self.translator().url_segment_to_namespace_segment(segment)
        };
        format!("{}{}", NAMESPACE_SEPARATOR, part)
    }

    /// Bind `segment` to the first of `types` it coerces to losslessly.
    fn bind(&self, segment: &str, types: &[ParamType]) -> Option<Value> {
        coerce_first(segment, types)
    }
}

/// Working state of a single resolution.
struct Walk<'r, R> {
    router: &'r Router<R>,
    original_method: String,
    method: String,
    request_target: String,
    segments: Segments,
    namespace: String,
    matches: Vec<Route>,
    allowed_methods: Vec<String>,
    candidate: Option<HandlerAddress>,
    previous_segment: String,
}

impl<'r, R: HandlerRegistry> Walk<'r, R> {
    fn new(router: &'r Router<R>, method: &str, request_target: &str) -> Self {
        let method = method.to_lowercase();
        Self {
            router,
            original_method: method.clone(),
            method,
            request_target: request_target.to_string(),
            segments: Segments::from_request_target(request_target),
            namespace: router.config.namespace().to_string(),
            matches: Vec::new(),
            allowed_methods: Vec::new(),
            candidate: None,
            previous_segment: String::new(),
        }
    }

    fn run(&mut self) -> RouteResult<()> {
        let router = self.router;
        let translator = router.translator();

        while let Some(segment) = self.segments.pop() {
            let has_next = self.segments.has_next();
            let name = translator.translate(&self.method, &self.previous_segment, &segment, has_next);
            let namespace_len = self.namespace.len();
            self.namespace.push_str(&router.namespace_fragment(&segment));

            let candidate = HandlerAddress::new(self.namespace.clone(), name);
            self.candidate = Some(candidate.clone());
            trace!(candidate = %candidate, segment = %segment, "Trying handler");

            if let Some(signature) = router.registry.lookup(&candidate) {
                self.previous_segment = segment;
                self.add_match(candidate, signature.clone())?;
                continue;
            }

            if self.method == "head" {
                debug!(segment = %segment, "No HEAD handler, retrying as GET");
                self.method = "get".to_string();
                self.segments.push(segment);
                self.namespace.truncate(namespace_len);
                continue;
            }

            if self.matches.len() == 1 && self.matches[0].signature().has_variadic() {
                self.bind_variadic(segment);
                break;
            }

            if self.matches.is_empty() {
                self.find_allowed_methods(&segment, has_next);
                break;
            }

            self.segments.push(segment);
            break;
        }

        Ok(())
    }

    /// Record a matched handler, inheriting arguments from its parent.
    fn add_match(&mut self, address: HandlerAddress, signature: Signature) -> RouteResult<()> {
        let mut route = Route::new(address, self.router.config.invoke_method(), signature);
        let mut bound_positions = 0;

        if !self.matches.is_empty() {
            let parent = self.matches.remove(0);
            check_nesting(&parent, &route)?;
            bound_positions = parent.signature().len();
            route = route.with_arguments(parent.arguments().iter().cloned());
        }

        let params: Vec<Parameter> = route
            .signature()
            .all_except_variadic()
            .skip(bound_positions)
            .cloned()
            .collect();

        for param in params {
            let Some(segment) = self.segments.pop() else {
                break;
            };
            match self.router.bind(&segment, &param.types) {
                Some(value) => route = route.with_argument(value),
                None => debug!(
                    segment = %segment,
                    parameter = %param,
                    handler = %route.handler(),
                    "Segment does not fit any declared type, leaving parameter unbound"
                ),
            }
        }

        debug!(route = %route, arguments = route.arguments().len(), "Matched handler");
        self.matches.push(route);
        Ok(())
    }

    /// Bind `first` and every remaining segment to the variadic parameter.
    fn bind_variadic(&mut self, first: String) {
        let route = self.matches.remove(0);
        let Some(variadic) = route.signature().variadic().cloned() else {
            self.matches.insert(0, route);
            return;
        };

        let segments: Vec<String> = std::iter::once(first).chain(self.segments.drain()).collect();
        let route = segments.iter().fold(route, |route, segment| {
            match self.router.bind(segment, &variadic.types) {
                Some(value) => route.with_argument(value),
                None => {
                    debug!(segment = %segment, parameter = %variadic.name, "Dropping unbindable variadic segment");
                    route
                }
            }
        });

        self.matches.insert(0, route);
    }

    /// Probe every other method at the current address.
    fn find_allowed_methods(&mut self, segment: &str, has_next: bool) {
        let router = self.router;
        let translator = router.translator();

        for method in SUPPORTED_METHODS {
            if method == self.method {
                continue;
            }
            let name = translator.translate(method, &self.previous_segment, segment, has_next);
            let address = HandlerAddress::new(self.namespace.clone(), name);
            if router.registry.contains(&address) {
                self.allowed_methods.push(method.to_string());
            }
        }

        if self.allowed_methods.iter().any(|m| m == "get") && !self.allowed_methods.iter().any(|m| m == "head") {
            self.allowed_methods.push("head".to_string());
        }
    }

    fn finish(mut self) -> Outcome {
        if !self.matches.is_empty() && self.segments.is_empty() {
            let route = self.matches.remove(0);
            return Outcome::found(&self.original_method, &self.request_target, route, self.matches);
        }

        if !self.allowed_methods.is_empty() {
            return Outcome::method_not_allowed(
                &self.original_method,
                &self.request_target,
                self.allowed_methods,
                self.candidate,
                self.matches,
            );
        }

        Outcome::not_found(&self.original_method, &self.request_target, self.candidate, self.matches)
    }
}

/// A child may only nest under a parent whose required parameters it repeats.
fn check_nesting(parent: &Route, child: &Route) -> RouteResult<()> {
    if parent.signature().has_variadic() {
        return Err(RouteError::unallowed_variadic_parameter(parent, child));
    }

    let child_required = child.signature().required();
    for (index, parent_param) in parent.signature().all_except_variadic().enumerate() {
        let Some(child_param) = child_required.get(index) else {
            return Err(SignatureMismatch::missing_required_parameter(parent, child, parent_param).into());
        };
        if !child_param.same_types_as(parent_param) {
            return Err(SignatureMismatch::incorrect_types(parent, child, parent_param, child_param).into());
        }
    }

    Ok(())
}
