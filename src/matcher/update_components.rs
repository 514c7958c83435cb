//! Matcher for `updateComponents` messages.

use serde_json::Value;

use crate::matcher::{Expected, SchemaMatcher, ValidationResult};
use crate::message::{Component, UpdateComponents};

/// Checks that a message contains a component of a given type, optionally
/// carrying a given property with an expected value.
///
/// Immutable after construction; build with [`UpdateComponentsMatcher::new`]
/// and the `with_property` / `case_insensitive` builder methods.
#[derive(Debug)]
pub struct UpdateComponentsMatcher {
    component_type: String,
    property: Option<String>,
    expected: Option<Expected>,
    case_insensitive: bool,
}

impl UpdateComponentsMatcher {
    /// Match any component whose `props.component` equals `component_type`.
    pub fn new(component_type: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            property: None,
            expected: None,
            case_insensitive: false,
        }
    }

    /// Additionally require the named property to hold the expected value.
    pub fn with_property(mut self, name: impl Into<String>, expected: impl Into<Expected>) -> Self {
        self.property = Some(name.into());
        self.expected = Some(expected.into());
        self
    }

    /// Compare string values case-insensitively.
    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    fn component_matches(&self, component: &Component, all: &UpdateComponents) -> bool {
        let (Some(property), Some(expected)) = (&self.property, &self.expected) else {
            return true;
        };

        if let Some(actual) = component.prop(property) {
            if self.value_matches(actual, expected) {
                return true;
            }
        }

        // A Button often carries its label as a child Text component rather
        // than a direct `label` prop. Resolve the child by id and match
        // against its `text`.
        if component.kind_name() == "Button" && property == "label" {
            if let Some(child) = component.child().and_then(|id| all.component(id)) {
                if child.kind_name() == "Text" {
                    if let Some(text) = child.prop("text") {
                        return self.value_matches(text, expected);
                    }
                }
            }
        }

        false
    }

    fn value_matches(&self, actual: &Value, expected: &Expected) -> bool {
        let literal = match expected {
            Expected::Predicate(pred) => return pred(actual),
            Expected::Literal(v) => v,
        };

        match (actual, literal) {
            (Value::String(a), Value::String(e)) => {
                if self.case_insensitive {
                    a.to_lowercase() == e.to_lowercase()
                } else {
                    a == e
                }
            }
            (Value::Number(a), Value::Number(e)) => a == e,
            (Value::Bool(a), Value::Bool(e)) => a == e,
            // A `path`-carrying object is a data-binding reference, not a
            // literal value.
            (Value::Object(obj), _) if obj.contains_key("path") => false,
            (Value::Array(items), _) => items.iter().any(|item| {
                if self.value_matches(item, expected) {
                    return true;
                }
                // Choice-option structures: { "label": ..., "value": ... }
                if let Value::Object(obj) = item {
                    for key in ["label", "value"] {
                        if let Some(sub) = obj.get(key) {
                            if self.value_matches(sub, expected) {
                                return true;
                            }
                        }
                    }
                }
                false
            }),
            (a, e) => a == e,
        }
    }
}

impl SchemaMatcher for UpdateComponentsMatcher {
    fn description(&self) -> String {
        match (&self.property, &self.expected) {
            (Some(property), Some(expected)) => format!(
                "updateComponents has a {} component with {} = {}",
                self.component_type,
                property,
                expected.describe()
            ),
            _ => format!("updateComponents has a {} component", self.component_type),
        }
    }

    fn validate(&self, message: &Value) -> ValidationResult {
        let update = match UpdateComponents::from_message(message) {
            Ok(u) => u,
            Err(e) => return ValidationResult::fail(e.to_string()),
        };

        let candidates: Vec<&Component> = update.of_kind(&self.component_type).collect();
        if candidates.is_empty() {
            return ValidationResult::fail(format!(
                "No component of type {} found in updateComponents",
                self.component_type
            ));
        }

        let (Some(property), Some(expected)) = (&self.property, &self.expected) else {
            return ValidationResult::pass();
        };

        if candidates.iter().any(|c| self.component_matches(c, &update)) {
            return ValidationResult::pass();
        }

        ValidationResult::fail(format!(
            "No {} component with {} = {} found in updateComponents",
            self.component_type,
            property,
            expected.describe()
        ))
    }
}
