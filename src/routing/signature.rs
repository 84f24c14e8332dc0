//! Handler parameter signatures.
//!
//! A signature lists what a handler accepts, in declaration order:
//! required parameters, then optional ones, then at most one variadic
//! parameter that captures every trailing segment.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::routing::coercion::ParamType;

/// How a declared parameter is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    #[default]
    Required,
    Optional,
    Variadic,
}

/// A single declared parameter.
///
/// Equality is structural: position and accepted types. The name is
/// carried for diagnostics only.
#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    pub position: usize,
    pub types: Vec<ParamType>,
    pub name: String,
}

impl Parameter {
    pub fn new(position: usize, types: impl Into<Vec<ParamType>>, name: impl Into<String>) -> Self {
        Self {
            position,
            types: types.into(),
            name: name.into(),
        }
    }

    pub fn has_type(&self, ty: ParamType) -> bool {
        self.types.contains(&ty)
    }

    pub fn same_types_as(&self, other: &Parameter) -> bool {
        self.types == other.types
    }

    /// Declared types joined as `int|string`.
    pub fn types_as_string(&self) -> String {
        self.types
            .iter()
            .map(ParamType::as_str)
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.types == other.types
    }
}

impl Eq for Parameter {}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ${}", self.types_as_string(), self.name)
    }
}

/// Rejected parameter declarations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSignature {
    #[error("parameter ${name} declares no types")]
    NoTypes { name: String },

    #[error("required parameter ${name} cannot follow an optional parameter")]
    RequiredAfterOptional { name: String },

    #[error("parameter ${name} cannot follow variadic parameter ${variadic}")]
    ParameterAfterVariadic { name: String, variadic: String },
}

/// The full parameter list of a handler.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Signature {
    required: Vec<Parameter>,
    optional: Vec<Parameter>,
    variadic: Option<Parameter>,
}

impl Signature {
    /// A handler that takes no arguments.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> SignatureBuilder {
        SignatureBuilder::default()
    }

    pub fn required(&self) -> &[Parameter] {
        &self.required
    }

    pub fn optional(&self) -> &[Parameter] {
        &self.optional
    }

    pub fn variadic(&self) -> Option<&Parameter> {
        self.variadic.as_ref()
    }

    pub fn has_variadic(&self) -> bool {
        self.variadic.is_some()
    }

    /// Required then optional parameters, in position order.
    pub fn all_except_variadic(&self) -> impl Iterator<Item = &Parameter> {
        self.required.iter().chain(self.optional.iter())
    }

    pub fn all(&self) -> impl Iterator<Item = &Parameter> {
        self.all_except_variadic().chain(self.variadic.iter())
    }

    pub fn at_position(&self, position: usize) -> Option<&Parameter> {
        self.all().find(|p| p.position == position)
    }

    /// Number of declared parameters, counting the variadic one.
    pub fn len(&self) -> usize {
        self.required.len() + self.optional.len() + usize::from(self.variadic.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, param) in self.all().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if self.variadic.as_ref() == Some(param) {
                write!(f, "{} ...${}", param.types_as_string(), param.name)?;
            } else {
                write!(f, "{}", param)?;
            }
        }
        Ok(())
    }
}

/// Collects declarations in order and checks their layout on `build`.
#[derive(Debug, Clone, Default)]
pub struct SignatureBuilder {
    declared: Vec<(ParamKind, Parameter)>,
}

impl SignatureBuilder {
    pub fn param(mut self, kind: ParamKind, name: impl Into<String>, types: impl Into<Vec<ParamType>>) -> Self {
        let position = self.declared.len();
        self.declared.push((kind, Parameter::new(position, types, name)));
        self
    }

    pub fn required(self, name: impl Into<String>, types: impl Into<Vec<ParamType>>) -> Self {
        self.param(ParamKind::Required, name, types)
    }

    pub fn optional(self, name: impl Into<String>, types: impl Into<Vec<ParamType>>) -> Self {
        self.param(ParamKind::Optional, name, types)
    }

    pub fn variadic(self, name: impl Into<String>, types: impl Into<Vec<ParamType>>) -> Self {
        self.param(ParamKind::Variadic, name, types)
    }

    pub fn build(self) -> Result<Signature, InvalidSignature> {
        let mut signature = Signature::default();

        for (kind, param) in self.declared {
            if param.types.is_empty() {
                return Err(InvalidSignature::NoTypes { name: param.name });
            }
            if let Some(variadic) = &signature.variadic {
                return Err(InvalidSignature::ParameterAfterVariadic {
                    name: param.name,
                    variadic: variadic.name.clone(),
                });
            }

            match kind {
                ParamKind::Required if !signature.optional.is_empty() => {
                    return Err(InvalidSignature::RequiredAfterOptional { name: param.name });
                }
                ParamKind::Required => signature.required.push(param),
                ParamKind::Optional => signature.optional.push(param),
                ParamKind::Variadic => signature.variadic = Some(param),
            }
        }

        Ok(signature)
    }
}
