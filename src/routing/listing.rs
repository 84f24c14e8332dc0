//! Reverse mapping from registered handlers to the URLs that reach them.

use std::fmt;

use serde::Serialize;

use crate::routing::config::RouterConfig;
use crate::routing::registry::{HandlerRegistry, StaticRegistry};
use crate::routing::route::{HandlerAddress, NAMESPACE_SEPARATOR};
use crate::routing::router::{Router, SUPPORTED_METHODS};
use crate::routing::signature::Signature;

/// One registered handler and the URL shape that resolves to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteListing {
    pub method: String,
    /// e.g. `/states/{stateAbbr}/suburbs/{suburbName?}/{services...}`
    pub path: String,
    pub handler: HandlerAddress,
}

impl fmt::Display for RouteListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<8}{:<48}{}", self.method.to_uppercase(), self.path, self.handler)
    }
}

/// List every handler that follows the naming convention, in address order.
///
/// Handlers outside the namespace or whose name does not decode to an HTTP
/// method are skipped.
pub fn list_routes(router: &Router<StaticRegistry>) -> Vec<RouteListing> {
    router
        .registry()
        .iter()
        .filter_map(|(address, signature)| {
            let parts = address.relative_to(router.config().namespace())?;
            let method = handler_method(router.config(), address.name())?;
            Some(RouteListing {
                method,
                path: url_shape(router, &parts, signature),
                handler: address.clone(),
            })
        })
        .collect()
}

/// `GetOneAction` → `get`.
fn handler_method(config: &RouterConfig, name: &str) -> Option<String> {
    let core = name.strip_prefix(config.prefix())?.strip_suffix(config.suffix())?;
    let core = [config.plural_indicator(), config.singular_indicator()]
        .into_iter()
        .filter(|indicator| !indicator.is_empty())
        .find_map(|indicator| core.strip_suffix(indicator))
        .unwrap_or(core);

    let method = core.to_lowercase();
    SUPPORTED_METHODS.contains(&method.as_str()).then_some(method)
}

fn url_shape(router: &Router<StaticRegistry>, parts: &[&str], signature: &Signature) -> String {
    let config = router.config();
    let translator = router.translator();
    let placeholders = placeholders(signature);

    let mut path = String::new();
    let mut bound = 0;
    let mut previous = String::new();
    let mut namespace = config.namespace().to_string();

    let is_root = parts.len() == 1 && parts[0] == config.root_namespace();
    for (depth, part) in parts.iter().enumerate() {
        namespace.push_str(NAMESPACE_SEPARATOR);
        namespace.push_str(part);
        if is_root {
            break;
        }

        let segment = translator.namespace_segment_to_url_segment(part);
        path.push('/');
        path.push_str(&segment);

        // arguments owned by the ancestor handler follow its own segment
        if depth + 1 < parts.len() {
            let name = translator.translate("get", &previous, &segment, true);
            if let Some(parent) = router.registry().lookup(&HandlerAddress::new(namespace.clone(), name)) {
                let upto = parent.len().clamp(bound, placeholders.len());
                for placeholder in &placeholders[bound..upto] {
                    path.push('/');
                    path.push_str(placeholder);
                }
                bound = upto;
            }
            previous = segment;
        }
    }

    for placeholder in &placeholders[bound..] {
        path.push('/');
        path.push_str(placeholder);
    }

    if path.is_empty() {
        path.push('/');
    }
    path
}

fn placeholders(signature: &Signature) -> Vec<String> {
    let required = signature.required().iter().map(|p| format!("{{{}}}", p.name));
    let optional = signature.optional().iter().map(|p| format!("{{{}?}}", p.name));
    let variadic = signature.variadic().map(|p| format!("{{{}...}}", p.name));
    required.chain(optional).chain(variadic).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::coercion::ParamType::*;

    fn address(s: &str) -> HandlerAddress {
        HandlerAddress::parse(s).unwrap()
    }

    fn router() -> Router<StaticRegistry> {
        let registry = StaticRegistry::new()
            .register(address("App::Home::GetAction"), Signature::empty())
            .register(
                address("App::States::GetOneAction"),
                Signature::builder().required("stateAbbr", [String]).build().unwrap(),
            )
            .register(
                address("App::States::Suburbs::GetAllAction"),
                Signature::builder()
                    .required("stateAbbr", [String])
                    .optional("suburbName", [String])
                    .variadic("services", [String])
                    .build()
                    .unwrap(),
            )
            .register(address("App::Music::TrackInfo::PostAction"), Signature::empty())
            .register(address("Other::Users::GetAction"), Signature::empty())
            .register(address("App::Users::Helper"), Signature::empty());

        Router::new(RouterConfig::new("App").unwrap(), registry)
    }

    #[test]
    fn test_lists_url_shapes() {
        let listing = list_routes(&router());
        let paths: Vec<(&str, &str)> = listing.iter().map(|r| (r.method.as_str(), r.path.as_str())).collect();

        assert_eq!(
            paths,
            vec![
                ("get", "/"),
                ("post", "/music/track-info"),
                ("get", "/states/{stateAbbr}"),
                ("get", "/states/{stateAbbr}/suburbs/{suburbName?}/{services...}"),
            ]
        );
    }

    #[test]
    fn test_handler_method() {
        let config = RouterConfig::new("App").unwrap();
        assert_eq!(handler_method(&config, "GetAllAction").as_deref(), Some("get"));
        assert_eq!(handler_method(&config, "DeleteOneAction").as_deref(), Some("delete"));
        assert_eq!(handler_method(&config, "PostAction").as_deref(), Some("post"));
        assert_eq!(handler_method(&config, "Helper"), None);
        assert_eq!(handler_method(&config, "FetchAction"), None);
    }
}
