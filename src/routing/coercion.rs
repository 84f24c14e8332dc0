//! Segment value coercion.
//!
//! # Responsibilities
//! - Convert a raw path segment into a typed argument value
//! - Refuse any conversion that would lose information
//!
//! # Design Decisions
//! - A conversion is accepted only if re-rendering the parsed value gives
//!   back the exact input (`"007"`, `"+4"` and `"3.14foo"` are rejected)
//! - Floats render through `{:?}`, the shortest representation that
//!   parses back to the same `f64`
//! - Lists are homogeneous: the first element picks the element type

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Argument types a handler parameter can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ParamType {
    Int,
    Float,
    String,
    List,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Int => "int",
            ParamType::Float => "float",
            ParamType::String => "string",
            ParamType::List => "list",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamType {
    type Err = CoercionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "int" | "integer" => Ok(ParamType::Int),
            "float" => Ok(ParamType::Float),
            "string" => Ok(ParamType::String),
            "list" | "array" => Ok(ParamType::List),
            _ => Err(CoercionError::UnsupportedTarget(s.to_string())),
        }
    }
}

impl TryFrom<String> for ParamType {
    type Error = CoercionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ParamType> for String {
    fn from(value: ParamType) -> Self {
        value.as_str().to_string()
    }
}

/// A typed argument bound from a path segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
}

impl Value {
    pub fn param_type(&self) -> ParamType {
        match self {
            Value::Int(_) => ParamType::Int,
            Value::Float(_) => ParamType::Float,
            Value::String(_) => ParamType::String,
            Value::List(_) => ParamType::List,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{:?}", v),
            Value::String(v) => f.write_str(v),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

/// Coercion failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    #[error("cannot cast '{value}' to {target}: casting will lose information")]
    LossyCast { value: String, target: ParamType },

    #[error("cannot cast to list: list is empty")]
    EmptyList,

    #[error("cannot cast to list: missing element at index {0}")]
    MissingElement(usize),

    #[error("cannot cast to list: elements are not all of type {0}")]
    MixedElementTypes(ParamType),

    #[error("cannot cast to '{0}': type is not supported")]
    UnsupportedTarget(String),
}

/// Coerce a raw segment into `target`.
pub fn coerce(raw: &str, target: ParamType) -> Result<Value, CoercionError> {
    match target {
        ParamType::String => Ok(Value::String(raw.to_string())),
        ParamType::Int => coerce_int(raw).map(Value::Int),
        ParamType::Float => coerce_float(raw).map(Value::Float),
        ParamType::List => coerce_list(raw).map(Value::List),
    }
}

/// Coerce against each type in order; the first success wins.
pub fn coerce_first(raw: &str, targets: &[ParamType]) -> Option<Value> {
    targets.iter().find_map(|ty| coerce(raw, *ty).ok())
}

fn coerce_int(raw: &str) -> Result<i64, CoercionError> {
    raw.parse::<i64>()
        .ok()
        .filter(|v| v.to_string() == raw)
        .ok_or_else(|| lossy(raw, ParamType::Int))
}

fn coerce_float(raw: &str) -> Result<f64, CoercionError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && format!("{:?}", v) == raw)
        .ok_or_else(|| lossy(raw, ParamType::Float))
}

fn coerce_list(raw: &str) -> Result<Vec<Value>, CoercionError> {
    if raw.is_empty() {
        return Err(CoercionError::EmptyList);
    }

    let elements: Vec<&str> = raw.split(',').collect();

    // string always succeeds, so an element type is always found
    let element_type = [ParamType::Int, ParamType::Float, ParamType::String]
        .into_iter()
        .find(|ty| coerce(elements[0], *ty).is_ok())
        .unwrap_or(ParamType::String);

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            if element.is_empty() {
                return Err(CoercionError::MissingElement(index));
            }
            coerce(element, element_type)
                .map_err(|_| CoercionError::MixedElementTypes(element_type))
        })
        .collect()
}

fn lossy(raw: &str, target: ParamType) -> CoercionError {
    CoercionError::LossyCast {
        value: raw.to_string(),
        target,
    }
}
