//! Golden tests for the bundled updateComponents envelope schema.

use serde_json::json;

use a2ui_matchers::schema::{validate_envelope, validate_json, SchemaValidationError};

#[test]
fn well_formed_message_passes_envelope_schema() {
    let msg = json!({
        "updateComponents": {
            "components": [
                {"id": "root", "props": {"component": "Card"}},
                {"id": "t1", "props": {"component": "Text", "text": "Hi"}}
            ]
        }
    });

    validate_envelope(&msg).expect("well-formed envelope must validate");
}

#[test]
fn empty_component_list_is_valid() {
    let msg = json!({"updateComponents": {"components": []}});
    validate_envelope(&msg).expect("empty component list is a valid envelope");
}

#[test]
fn missing_update_components_is_rejected() {
    let err = validate_envelope(&json!({"beginRendering": {}})).unwrap_err();

    match err {
        SchemaValidationError::ValidationFailed(detail) => {
            assert!(
                detail.contains("updateComponents"),
                "detail should name the missing field: {detail}"
            );
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn component_without_props_is_rejected() {
    let msg = json!({
        "updateComponents": {
            "components": [{"id": "orphan"}]
        }
    });

    let err = validate_envelope(&msg).unwrap_err();
    let SchemaValidationError::ValidationFailed(detail) = err else {
        panic!("expected ValidationFailed");
    };
    // Instance paths point at the offending record.
    assert!(detail.contains("/updateComponents/components/0"), "{detail}");
}

#[test]
fn validate_json_accepts_caller_schemas() {
    let schema = r#"{
  "$schema": "https://json-schema.org/draft/2020-12/schema",
  "type": "object",
  "required": ["surfaceId"],
  "properties": { "surfaceId": { "type": "string" } }
}"#;

    validate_json(schema, r#"{"surfaceId": "main"}"#).unwrap();
    assert!(validate_json(schema, r#"{"surfaceId": 7}"#).is_err());
}

#[test]
fn validate_json_reports_bad_schema_input() {
    let err = validate_json("not json", "{}").unwrap_err();
    assert!(matches!(err, SchemaValidationError::SchemaParse(_)));
}
