//! Resolved handler references.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::routing::coercion::Value;
use crate::routing::signature::Signature;

/// Separator between namespace parts in a symbolic address.
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Fully qualified handler name: namespace plus short name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerAddress {
    namespace: String,
    name: String,
}

impl HandlerAddress {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Split `Project::Http::Contact::GetAction` at its last separator.
    ///
    /// Returns `None` for an empty string or a bare name without namespace.
    pub fn parse(address: &str) -> Option<Self> {
        let address = address.trim().trim_matches(':');
        let (namespace, name) = address.rsplit_once(NAMESPACE_SEPARATOR)?;
        if namespace.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self::new(namespace, name))
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace parts below `base`, e.g. `["States", "Suburbs"]`.
    ///
    /// `None` if the address does not live under `base`.
    pub fn relative_to<'a>(&'a self, base: &str) -> Option<Vec<&'a str>> {
        if self.namespace == base {
            return Some(Vec::new());
        }
        let rest = self
            .namespace
            .strip_prefix(base)?
            .strip_prefix(NAMESPACE_SEPARATOR)?;
        Some(rest.split(NAMESPACE_SEPARATOR).collect())
    }
}

impl fmt::Display for HandlerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.namespace, NAMESPACE_SEPARATOR, self.name)
    }
}

impl Serialize for HandlerAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A matched handler with the arguments bound to it so far.
///
/// Immutable: adding arguments produces a new `Route`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    handler: HandlerAddress,
    invoke_method: String,
    arguments: Vec<Value>,
    #[serde(serialize_with = "serialize_display")]
    signature: Signature,
}

impl Route {
    pub fn new(handler: HandlerAddress, invoke_method: impl Into<String>, signature: Signature) -> Self {
        Self {
            handler,
            invoke_method: invoke_method.into(),
            arguments: Vec::new(),
            signature,
        }
    }

    pub fn handler(&self) -> &HandlerAddress {
        &self.handler
    }

    pub fn invoke_method(&self) -> &str {
        &self.invoke_method
    }

    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Replace the argument list.
    pub fn with_arguments(self, arguments: impl IntoIterator<Item = Value>) -> Self {
        Self {
            arguments: arguments.into_iter().collect(),
            ..self
        }
    }

    /// Append one argument.
    pub fn with_argument(mut self, argument: Value) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_signature(self, signature: Signature) -> Self {
        Self { signature, ..self }
    }

    /// `Handler::method` without the parameter list.
    pub fn target(&self) -> String {
        format!("{}{}{}", self.handler, NAMESPACE_SEPARATOR, self.invoke_method)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.target(), self.signature)
    }
}

fn serialize_display<T: fmt::Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::coercion::ParamType;

    fn archives() -> Route {
        let signature = Signature::builder()
            .optional("year", [ParamType::Int])
            .optional("month", [ParamType::Int])
            .build()
            .unwrap();
        Route::new(
            HandlerAddress::new("Project::Http::Archives", "GetAllAction"),
            "__invoke",
            signature,
        )
    }

    #[test]
    fn test_new_route_has_no_arguments() {
        let route = archives();
        assert_eq!(route.handler().to_string(), "Project::Http::Archives::GetAllAction");
        assert_eq!(route.invoke_method(), "__invoke");
        assert!(route.arguments().is_empty());
    }

    #[test]
    fn test_with_argument_appends() {
        let route = archives()
            .with_argument(Value::Int(2022))
            .with_argument(Value::Int(12));
        assert_eq!(route.arguments(), &[Value::Int(2022), Value::Int(12)]);

        let replaced = route.with_arguments([Value::Int(1)]);
        assert_eq!(replaced.arguments(), &[Value::Int(1)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            archives().to_string(),
            "Project::Http::Archives::GetAllAction::__invoke(int $year, int $month)"
        );
    }

    #[test]
    fn test_address_parse_and_relative_path() {
        let address = HandlerAddress::parse("Project::Http::States::Suburbs::GetOneAction").unwrap();
        assert_eq!(address.namespace(), "Project::Http::States::Suburbs");
        assert_eq!(address.name(), "GetOneAction");
        assert_eq!(address.relative_to("Project::Http"), Some(vec!["States", "Suburbs"]));
        assert_eq!(address.relative_to("Other"), None);
        assert_eq!(address.relative_to("Project::Ht"), None);

        assert!(HandlerAddress::parse("GetAction").is_none());
        assert!(HandlerAddress::parse("").is_none());
    }
}
