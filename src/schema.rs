//! JSON Schema validation for A2UI message envelopes.

use jsonschema::validator_for;
use serde_json::Value;

/// Bundled schema (draft 2020-12) for the `updateComponents` envelope.
///
/// Deliberately shallow: it pins the envelope shape (component records with an
/// `id` and a `props` bag naming the component type) without constraining
/// per-kind properties, which evolve with the protocol.
pub const UPDATE_COMPONENTS_SCHEMA: &str = r#"{
  "$schema": "https://json-schema.org/draft/2020-12/schema",
  "$id": "https://a2ui.dev/schemas/update-components-v0.json",
  "title": "A2UI updateComponents message v0",
  "type": "object",
  "required": ["updateComponents"],
  "properties": {
    "updateComponents": {
      "type": "object",
      "required": ["components"],
      "properties": {
        "components": {
          "type": "array",
          "items": {
            "type": "object",
            "required": ["id", "props"],
            "properties": {
              "id": { "type": "string" },
              "props": {
                "type": "object",
                "required": ["component"],
                "properties": {
                  "component": { "type": "string" }
                }
              }
            }
          }
        }
      }
    }
  }
}"#;

#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("Schema parse error: {0}")]
    SchemaParse(#[from] serde_json::Error),
    #[error("Schema compile error: {0}")]
    SchemaCompile(String),
    #[error("Instance validation failed:\n{0}")]
    ValidationFailed(String),
}

/// Validate a message against the bundled `updateComponents` envelope schema.
pub fn validate_envelope(message: &Value) -> Result<(), SchemaValidationError> {
    let schema_json: Value = serde_json::from_str(UPDATE_COMPONENTS_SCHEMA)?;
    validate_instance(&schema_json, message)
}

/// Validate a JSON instance against a caller-supplied JSON Schema
/// (draft 2020-12). Returns Ok(()) if valid, Err otherwise.
pub fn validate_json(schema_str: &str, instance_str: &str) -> Result<(), SchemaValidationError> {
    let schema_json: Value = serde_json::from_str(schema_str)?;
    let instance_json: Value = serde_json::from_str(instance_str)?;
    validate_instance(&schema_json, &instance_json)
}

fn validate_instance(schema: &Value, instance: &Value) -> Result<(), SchemaValidationError> {
    let validator =
        validator_for(schema).map_err(|e| SchemaValidationError::SchemaCompile(e.to_string()))?;

    let errors: Vec<String> = validator
        .iter_errors(instance)
        .map(|e| format!("  - {} (at {})", e, e.instance_path()))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaValidationError::ValidationFailed(errors.join("\n")))
    }
}
