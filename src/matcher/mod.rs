//! Matcher contract and result types.

pub mod update_components;

pub use update_components::UpdateComponentsMatcher;

use serde::Serialize;
use serde_json::Value;

/// Outcome of checking a message against a matcher.
///
/// Always a returned value: matchers report every failure here rather than
/// panicking, so harnesses can aggregate and snapshot reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn pass() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

/// Expected property value: a literal to compare against, or a predicate
/// invoked with the actual value.
pub enum Expected {
    Literal(Value),
    Predicate(Box<dyn Fn(&Value) -> bool + Send + Sync>),
}

impl Expected {
    pub fn predicate(f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Box::new(f))
    }

    /// How the expectation reads in failure messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Literal(v) => v.to_string(),
            Self::Predicate(_) => "<predicate>".to_string(),
        }
    }
}

impl std::fmt::Debug for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<Value> for Expected {
    fn from(v: Value) -> Self {
        Self::Literal(v)
    }
}

impl From<&str> for Expected {
    fn from(s: &str) -> Self {
        Self::Literal(Value::String(s.to_string()))
    }
}

impl From<String> for Expected {
    fn from(s: String) -> Self {
        Self::Literal(Value::String(s))
    }
}

impl From<bool> for Expected {
    fn from(b: bool) -> Self {
        Self::Literal(Value::Bool(b))
    }
}

impl From<i64> for Expected {
    fn from(n: i64) -> Self {
        Self::Literal(Value::from(n))
    }
}

impl From<f64> for Expected {
    fn from(n: f64) -> Self {
        Self::Literal(Value::from(n))
    }
}

/// A reusable validation rule checked against an A2UI message.
///
/// Object-safe so harnesses can hold heterogeneous matcher lists.
pub trait SchemaMatcher {
    /// Human-readable description of what this matcher checks, for reporting.
    fn description(&self) -> String;

    /// Check the given message, returning a pass/fail outcome.
    fn validate(&self, message: &Value) -> ValidationResult;
}
