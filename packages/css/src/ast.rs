use serde::{Deserialize, Serialize};
use std::fmt;

/// Easing keywords accepted in the timing-function slot.
pub const TIMING_KEYWORDS: &[&str] = &[
    "ease",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "linear",
    "step-start",
    "step-end",
];

/// CSS-wide keywords that cannot name a transition property.
pub const CSS_WIDE_KEYWORDS: &[&str] = &["inherit", "initial", "unset", "revert", "default"];

pub fn is_timing_keyword(name: &str) -> bool {
    TIMING_KEYWORDS.contains(&name)
}

/// One typed value inside a transition layer tuple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Value {
    /// Numeric value with a unit (a duration or delay, e.g. 200ms)
    Unit(UnitValue),

    /// Keyword token (a property name or easing keyword)
    Keyword(KeywordValue),

    /// Function token (an easing function, e.g. cubic-bezier)
    Function(FunctionValue),
}

/// Numeric value plus unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitValue {
    pub value: f64,
    pub unit: String,
}

impl UnitValue {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

/// Keyword token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordValue {
    pub name: String,
}

impl KeywordValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Function token with parsed arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionValue {
    pub name: String,
    pub args: Vec<FunctionArg>,
}

impl FunctionValue {
    pub fn new(name: impl Into<String>, args: Vec<FunctionArg>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// Argument of a timing function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FunctionArg {
    Number(f64),
    Keyword(String),
}

/// The easing slot: either a keyword or a function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TimingFunction {
    Keyword(KeywordValue),
    Function(FunctionValue),
}

impl TimingFunction {
    pub fn into_value(self) -> Value {
        match self {
            TimingFunction::Keyword(keyword) => Value::Keyword(keyword),
            TimingFunction::Function(function) => Value::Function(function),
        }
    }
}

/// One entry of a multi-layer `transition` value.
///
/// The tuple holds at most four values in canonical order (property,
/// duration, delay, timing); only present fields are stored. Which slot
/// a unit value fills is decided by the parser, not by magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionLayer {
    pub values: Vec<Value>,
}

impl TransitionLayer {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

impl fmt::Display for KeywordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for FunctionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionArg::Number(n) => write!(f, "{}", n),
            FunctionArg::Keyword(k) => write!(f, "{}", k),
        }
    }
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingFunction::Keyword(keyword) => write!(f, "{}", keyword),
            TimingFunction::Function(function) => write!(f, "{}", function),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit(unit) => write!(f, "{}", unit),
            Value::Keyword(keyword) => write!(f, "{}", keyword),
            Value::Function(function) => write!(f, "{}", function),
        }
    }
}
