//! Form-state and validation engine boundary

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FormError;
use resize_form_validation::Rule;

/// Validated values keyed by field name
pub type Values = BTreeMap<String, Value>;

/// Error messages keyed by field name
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// What a field tells the engine when the form is built
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRegistration {
    pub name: String,
    pub label: String,
    pub rules: Vec<Rule>,
    /// Value restored by `reset_fields`
    pub initial_value: Value,
}

/// Trait for engines that own field values and validate them
#[async_trait]
pub trait FormEngine: Send + Sync {
    /// Register a field; names must be unique
    fn register(&mut self, field: FieldRegistration) -> Result<(), FormError>;

    /// Current value of a registered field
    fn value(&self, name: &str) -> Option<&Value>;

    fn set_value(&mut self, name: &str, value: Value) -> Result<(), FormError>;

    /// Validate every registered field.
    ///
    /// On failure the engine keeps the per-field messages so they can be
    /// shown next to the fields.
    async fn validate_fields(&mut self) -> Result<Values, FieldErrors>;

    /// Restore every field to its initial value and clear errors
    fn reset_fields(&mut self);

    /// Messages from the last failed validation for `name`
    fn errors(&self, name: &str) -> &[String];
}
