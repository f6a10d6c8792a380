//! Tagged input values and named field collections.

use indexmap::IndexMap;
use ndarray::ArrayD;

use crate::field::Field;

/// Insertion-ordered mapping from name to value, e.g. a process state or its
/// diagnostics.
pub type State = IndexMap<String, Value>;

/// Anything a caller may hand to the conversion layer.
///
/// Only [`Value::Field`] and [`Value::State`] are convertible; the other
/// variants model the plain numbers, strings and bare arrays that show up
/// alongside fields in a state or diagnostics bundle.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A field tied to a domain.
    Field(Field),
    /// A named collection of values.
    State(State),
    /// A bare array without a domain.
    Array(ArrayD<f64>),
    /// A floating-point scalar.
    Float(f64),
    /// An integer scalar.
    Int(i64),
    /// A boolean flag.
    Bool(bool),
    /// A string.
    Str(String),
}

impl Value {
    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Field(_) => "field",
            Self::State(_) => "state",
            Self::Array(_) => "array",
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::Bool(_) => "bool",
            Self::Str(_) => "str",
        }
    }

    /// Returns the field if this value is one.
    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Self::Field(f) => Some(f),
            _ => None,
        }
    }
}

impl From<Field> for Value {
    fn from(f: Field) -> Self {
        Self::Field(f)
    }
}

impl From<State> for Value {
    fn from(s: State) -> Self {
        Self::State(s)
    }
}

impl From<ArrayD<f64>> for Value {
    fn from(a: ArrayD<f64>) -> Self {
        Self::Array(a)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}
