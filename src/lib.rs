//! Schema matchers for A2UI protocol messages.
//!
//! Validates that generated `updateComponents` messages contain a component of
//! a given type, optionally carrying a given property with an expected value.
//! Built for test harnesses: construct a matcher, call `validate`, inspect the
//! returned [`matcher::ValidationResult`]. Every failure is a returned value
//! with a human-readable error, never a panic.

pub mod matcher;
pub mod message;
pub mod schema;

pub use matcher::{Expected, SchemaMatcher, UpdateComponentsMatcher, ValidationResult};
pub use message::{Component, ComponentId, ComponentKind, MessageError, UpdateComponents};
