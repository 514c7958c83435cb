//! Typed model of an A2UI `updateComponents` message.
//!
//! The wire form is loosely-typed JSON: a message object with an
//! `updateComponents` field whose `components` array holds records of
//! `{ "id": ..., "props": { "component": <kind>, ... } }`. Parsing lifts the
//! two kinds the matchers treat specially (`Button`, `Text`) into dedicated
//! variants and preserves everything else verbatim, so unknown component
//! kinds are data rather than errors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stable component identifier, used for child lookup within a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(pub String);

impl ComponentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Message shape errors surfaced to matchers.
///
/// Display texts are stable: harness assertions key on the field names
/// `updateComponents` and `components` appearing in the error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    #[error("Message does not contain an updateComponents field")]
    MissingUpdateComponents,
    #[error("updateComponents.components is missing or not an array")]
    ComponentsNotSequence,
}

/// Component kind, discriminated by the `component` property.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentKind {
    Button {
        label: Option<Value>,
        child: Option<ComponentId>,
        rest: Map<String, Value>,
    },
    Text {
        text: Option<Value>,
        rest: Map<String, Value>,
    },
    /// Any kind without a dedicated variant, carrying its full property bag.
    Other {
        component: String,
        props: Map<String, Value>,
    },
}

impl ComponentKind {
    /// The component type name as it appears in `props.component`.
    pub fn name(&self) -> &str {
        match self {
            Self::Button { .. } => "Button",
            Self::Text { .. } => "Text",
            Self::Other { component, .. } => component,
        }
    }

    fn from_props(props: &Map<String, Value>) -> Self {
        let component = props
            .get("component")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        match component.as_str() {
            "Button" => {
                let child = props
                    .get("child")
                    .and_then(Value::as_str)
                    .map(ComponentId::from);
                let mut rest = props.clone();
                rest.remove("component");
                rest.remove("label");
                rest.remove("child");
                Self::Button {
                    label: props.get("label").cloned(),
                    child,
                    rest,
                }
            }
            "Text" => {
                let mut rest = props.clone();
                rest.remove("component");
                rest.remove("text");
                Self::Text {
                    text: props.get("text").cloned(),
                    rest,
                }
            }
            _ => Self::Other {
                component,
                props: props.clone(),
            },
        }
    }
}

/// One component record from the `components` array.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub id: ComponentId,
    pub kind: ComponentKind,
}

impl Component {
    /// The component type name (`props.component` on the wire).
    pub fn kind_name(&self) -> &str {
        self.kind.name()
    }

    /// Look up a named property, regardless of kind.
    pub fn prop(&self, name: &str) -> Option<&Value> {
        match &self.kind {
            ComponentKind::Button { label, rest, .. } => match name {
                "label" => label.as_ref(),
                _ => rest.get(name),
            },
            ComponentKind::Text { text, rest } => match name {
                "text" => text.as_ref(),
                _ => rest.get(name),
            },
            ComponentKind::Other { props, .. } => props.get(name),
        }
    }

    /// The referenced child component, when this kind carries one.
    pub fn child(&self) -> Option<&ComponentId> {
        match &self.kind {
            ComponentKind::Button { child, .. } => child.as_ref(),
            _ => None,
        }
    }

    fn from_value(value: &Value) -> Self {
        let id = value
            .get("id")
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_default();

        let kind = match value.get("props").and_then(Value::as_object) {
            Some(props) => ComponentKind::from_props(props),
            // Malformed record: keep it as an anonymous Other so the rest of
            // the message still parses; matchers then report absence of the
            // sought kind.
            None => ComponentKind::Other {
                component: String::new(),
                props: Map::new(),
            },
        };

        Self {
            id: ComponentId(id),
            kind,
        }
    }
}

/// The parsed component list of an `updateComponents` message.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateComponents {
    components: Vec<Component>,
}

impl UpdateComponents {
    /// Parse the component list out of a full A2UI message.
    ///
    /// Only the two envelope shapes are hard errors: a missing
    /// `updateComponents` field, and a `components` field that is not an
    /// array. Individual malformed records degrade to anonymous components.
    pub fn from_message(message: &Value) -> Result<Self, MessageError> {
        let update = message
            .get("updateComponents")
            .ok_or(MessageError::MissingUpdateComponents)?;

        let components = update
            .get("components")
            .and_then(Value::as_array)
            .ok_or(MessageError::ComponentsNotSequence)?;

        Ok(Self {
            components: components.iter().map(Component::from_value).collect(),
        })
    }

    /// All components, in message order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Look up a component by identifier.
    pub fn component(&self, id: &ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| &c.id == id)
    }

    /// Iterate the components of a given kind, in message order.
    pub fn of_kind<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Component> + 'a {
        self.components.iter().filter(move |c| c.kind_name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_update_components_is_an_error() {
        let err = UpdateComponents::from_message(&json!({"other": 1})).unwrap_err();
        assert_eq!(err, MessageError::MissingUpdateComponents);
        assert!(err.to_string().contains("updateComponents"));
    }

    #[test]
    fn non_array_components_is_an_error() {
        let msg = json!({"updateComponents": {"components": {"not": "an array"}}});
        let err = UpdateComponents::from_message(&msg).unwrap_err();
        assert_eq!(err, MessageError::ComponentsNotSequence);
        assert!(err.to_string().contains("components"));
    }

    #[test]
    fn button_and_text_get_typed_variants() {
        let msg = json!({
            "updateComponents": {
                "components": [
                    {"id": "b1", "props": {"component": "Button", "child": "t1"}},
                    {"id": "t1", "props": {"component": "Text", "text": "Go"}}
                ]
            }
        });
        let parsed = UpdateComponents::from_message(&msg).unwrap();

        let button = parsed.component(&ComponentId::from("b1")).unwrap();
        assert_eq!(button.kind_name(), "Button");
        assert_eq!(button.child(), Some(&ComponentId::from("t1")));

        let text = parsed.component(&ComponentId::from("t1")).unwrap();
        assert_eq!(text.kind_name(), "Text");
        assert_eq!(text.prop("text"), Some(&json!("Go")));
    }

    #[test]
    fn unknown_kinds_are_preserved_not_rejected() {
        let msg = json!({
            "updateComponents": {
                "components": [
                    {"id": "c1", "props": {"component": "Carousel", "speed": 3}}
                ]
            }
        });
        let parsed = UpdateComponents::from_message(&msg).unwrap();
        let carousel = parsed.component(&ComponentId::from("c1")).unwrap();
        assert_eq!(carousel.kind_name(), "Carousel");
        assert_eq!(carousel.prop("speed"), Some(&json!(3)));
    }

    #[test]
    fn malformed_record_degrades_instead_of_failing() {
        let msg = json!({
            "updateComponents": {
                "components": [42, {"id": "ok", "props": {"component": "Text"}}]
            }
        });
        let parsed = UpdateComponents::from_message(&msg).unwrap();
        assert_eq!(parsed.components().len(), 2);
        assert_eq!(parsed.of_kind("Text").count(), 1);
    }
}
