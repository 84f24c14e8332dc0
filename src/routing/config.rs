//! Router naming configuration.
//!
//! Immutable once built: every `with_*` method returns a new value, so a
//! config can be shared by any number of concurrent resolutions.

use std::collections::HashMap;
use std::sync::Arc;

use crate::routing::coercion::ParamType;
use crate::routing::error::InvalidConfig;
use crate::routing::inflector::{EnglishInflector, Inflector};

/// Predicate a segment must satisfy before it is coerced to a type.
pub type TypeValidator = fn(&str) -> bool;

pub const DEFAULT_SUFFIX: &str = "Action";
pub const DEFAULT_PLURAL_INDICATOR: &str = "All";
pub const DEFAULT_SINGULAR_INDICATOR: &str = "One";
pub const DEFAULT_ROOT_NAMESPACE: &str = "Home";
pub const DEFAULT_INVOKE_METHOD: &str = "__invoke";

#[derive(Debug, Clone)]
pub struct RouterConfig {
    namespace: String,
    prefix: String,
    suffix: String,
    plural_indicator: String,
    singular_indicator: String,
    excluded_plural_words: Vec<String>,
    excluded_singular_words: Vec<String>,
    root_namespace: String,
    invoke_method: String,
    type_validators: HashMap<ParamType, TypeValidator>,
    inflector: Arc<dyn Inflector>,
}

impl RouterConfig {
    /// Create a config rooted at `namespace` (e.g. `Project::Http`).
    pub fn new(namespace: &str) -> Result<Self, InvalidConfig> {
        Ok(Self {
            namespace: normalize_namespace(namespace)?,
            prefix: String::new(),
            suffix: DEFAULT_SUFFIX.to_string(),
            plural_indicator: DEFAULT_PLURAL_INDICATOR.to_string(),
            singular_indicator: DEFAULT_SINGULAR_INDICATOR.to_string(),
            excluded_plural_words: Vec::new(),
            excluded_singular_words: Vec::new(),
            root_namespace: DEFAULT_ROOT_NAMESPACE.to_string(),
            invoke_method: DEFAULT_INVOKE_METHOD.to_string(),
            type_validators: default_type_validators(),
            inflector: Arc::new(EnglishInflector::new()),
        })
    }

    pub fn with_namespace(self, namespace: &str) -> Result<Self, InvalidConfig> {
        Ok(Self {
            namespace: normalize_namespace(namespace)?,
            ..self
        })
    }

    pub fn with_prefix(self, prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..self
        }
    }

    pub fn with_suffix(self, suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            ..self
        }
    }

    pub fn with_plural_indicator(self, indicator: impl Into<String>) -> Self {
        Self {
            plural_indicator: indicator.into(),
            ..self
        }
    }

    pub fn with_singular_indicator(self, indicator: impl Into<String>) -> Self {
        Self {
            singular_indicator: indicator.into(),
            ..self
        }
    }

    /// Words always routed to the plural handler variant.
    pub fn exclude_plural_words<I, S>(self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_plural_words: lowercase_all(words),
            ..self
        }
    }

    /// Words never classified as plural.
    pub fn exclude_singular_words<I, S>(self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_singular_words: lowercase_all(words),
            ..self
        }
    }

    /// Sub-namespace used for the root path `/`.
    pub fn with_root_namespace(self, namespace: &str) -> Self {
        Self {
            root_namespace: namespace.trim_matches(':').to_string(),
            ..self
        }
    }

    pub fn with_invoke_method(self, method: impl Into<String>) -> Self {
        Self {
            invoke_method: method.into(),
            ..self
        }
    }

    pub fn with_inflector(self, inflector: Arc<dyn Inflector>) -> Self {
        Self { inflector, ..self }
    }

    pub fn with_type_validator(mut self, ty: ParamType, validator: TypeValidator) -> Self {
        self.type_validators.insert(ty, validator);
        self
    }

    pub fn without_type_validator(mut self, ty: ParamType) -> Self {
        self.type_validators.remove(&ty);
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn plural_indicator(&self) -> &str {
        &self.plural_indicator
    }

    pub fn singular_indicator(&self) -> &str {
        &self.singular_indicator
    }

    pub fn excluded_plural_words(&self) -> &[String] {
        &self.excluded_plural_words
    }

    pub fn excluded_singular_words(&self) -> &[String] {
        &self.excluded_singular_words
    }

    pub fn root_namespace(&self) -> &str {
        &self.root_namespace
    }

    pub fn invoke_method(&self) -> &str {
        &self.invoke_method
    }

    pub fn inflector(&self) -> &dyn Inflector {
        self.inflector.as_ref()
    }

    /// Whether `segment` passes the validator registered for `ty`.
    ///
    /// Types without a validator accept every segment. Argument binding
    /// does not consult validators; it relies on lossless coercion alone.
    pub fn accepts(&self, ty: ParamType, segment: &str) -> bool {
        self.type_validators
            .get(&ty)
            .map_or(true, |validator| validator(segment))
    }
}

fn normalize_namespace(namespace: &str) -> Result<String, InvalidConfig> {
    let trimmed = namespace.trim();
    if trimmed.is_empty() {
        return Err(InvalidConfig::NamespaceMissing);
    }
    let normalized = trimmed.trim_matches(':');
    if normalized.is_empty() {
        return Err(InvalidConfig::NamespaceInGlobalScope);
    }
    Ok(normalized.to_string())
}

fn lowercase_all<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    words.into_iter().map(|w| w.into().to_lowercase()).collect()
}

fn default_type_validators() -> HashMap<ParamType, TypeValidator> {
    let mut validators: HashMap<ParamType, TypeValidator> = HashMap::new();
    validators.insert(ParamType::Int, is_digits);
    validators.insert(ParamType::String, is_non_empty);
    validators.insert(ParamType::Float, is_float_literal);
    validators
}

fn is_digits(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

fn is_non_empty(segment: &str) -> bool {
    !segment.is_empty()
}

/// `[+-]?digits(.digits)?([eE][+-]?digits)?`
fn is_float_literal(segment: &str) -> bool {
    fn digits(s: &str) -> usize {
        s.bytes().take_while(u8::is_ascii_digit).count()
    }

    let s = segment.strip_prefix(['+', '-']).unwrap_or(segment);
    let int_len = digits(s);
    if int_len == 0 {
        return false;
    }
    let mut rest = &s[int_len..];

    if let Some(fraction) = rest.strip_prefix('.') {
        let frac_len = digits(fraction);
        if frac_len == 0 {
            return false;
        }
        rest = &fraction[frac_len..];
    }

    if let Some(exponent) = rest.strip_prefix(['e', 'E']) {
        let exponent = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        let exp_len = digits(exponent);
        return exp_len > 0 && exp_len == exponent.len();
    }

    rest.is_empty()
}

impl PartialEq for RouterConfig {
    fn eq(&self, other: &Self) -> bool {
        self.namespace == other.namespace
            && self.prefix == other.prefix
            && self.suffix == other.suffix
            && self.plural_indicator == other.plural_indicator
            && self.singular_indicator == other.singular_indicator
            && self.excluded_plural_words == other.excluded_plural_words
            && self.excluded_singular_words == other.excluded_singular_words
            && self.root_namespace == other.root_namespace
            && self.invoke_method == other.invoke_method
    }
}
