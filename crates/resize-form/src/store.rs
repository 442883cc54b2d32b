//! In-memory form engine

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::engine::{FieldErrors, FieldRegistration, FormEngine, Values};
use crate::error::FormError;

/// Default [`FormEngine`]: values and errors kept in maps, rules run
/// synchronously in declaration order.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    fields: Vec<FieldRegistration>,
    values: BTreeMap<String, Value>,
    errors: FieldErrors,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every current value, including unvalidated ones
    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn check(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in &self.fields {
            let value = self.values.get(&field.name).unwrap_or(&Value::Null);
            let messages: Vec<String> = field
                .rules
                .iter()
                .filter_map(|rule| rule.check(&field.label, value).err())
                .collect();
            if !messages.is_empty() {
                errors.insert(field.name.clone(), messages);
            }
        }
        errors
    }
}

#[async_trait]
impl FormEngine for FormStore {
    fn register(&mut self, field: FieldRegistration) -> Result<(), FormError> {
        if self.values.contains_key(&field.name) {
            return Err(FormError::DuplicateField(field.name));
        }
        self.values.insert(field.name.clone(), field.initial_value.clone());
        self.fields.push(field);
        Ok(())
    }

    fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    fn set_value(&mut self, name: &str, value: Value) -> Result<(), FormError> {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(FormError::UnknownField(name.to_string())),
        }
    }

    async fn validate_fields(&mut self) -> Result<Values, FieldErrors> {
        self.errors = self.check();
        if self.errors.is_empty() {
            Ok(self.values.clone())
        } else {
            Err(self.errors.clone())
        }
    }

    fn reset_fields(&mut self) {
        for field in &self.fields {
            self.values.insert(field.name.clone(), field.initial_value.clone());
        }
        self.errors.clear();
    }

    fn errors(&self, name: &str) -> &[String] {
        self.errors.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use resize_form_validation::Rule;
    use serde_json::json;

    fn registration(name: &str, rules: Vec<Rule>) -> FieldRegistration {
        FieldRegistration {
            name: name.to_string(),
            label: name.to_string(),
            rules,
            initial_value: Value::Null,
        }
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut store = FormStore::new();
        store.register(registration("a", vec![])).unwrap();
        assert_eq!(
            store.register(registration("a", vec![])),
            Err(FormError::DuplicateField("a".to_string()))
        );
    }

    #[test]
    fn test_set_unknown_field() {
        let mut store = FormStore::new();
        assert_eq!(
            store.set_value("nope", json!("x")),
            Err(FormError::UnknownField("nope".to_string()))
        );
    }

    #[tokio::test]
    async fn test_validate_collects_errors_per_field() {
        let mut store = FormStore::new();
        store.register(registration("a", vec![Rule::required().with_message("必填")])).unwrap();
        store.register(registration("b", vec![Rule::required(), Rule::min_length(3)])).unwrap();
        store.register(registration("c", vec![])).unwrap();

        let errors = store.validate_fields().await.unwrap_err();
        assert_eq!(errors.get("a"), Some(&vec!["必填".to_string()]));
        assert_eq!(errors.get("b"), Some(&vec!["b is required".to_string()]));
        assert!(errors.get("c").is_none());
        assert_eq!(store.errors("a"), ["必填".to_string()]);

        store.set_value("a", json!("x")).unwrap();
        store.set_value("b", json!("ab")).unwrap();
        let errors = store.validate_fields().await.unwrap_err();
        assert!(errors.get("a").is_none());
        assert_eq!(errors.get("b"), Some(&vec!["Must be at least 3 characters".to_string()]));
    }

    #[tokio::test]
    async fn test_every_failing_rule_is_reported() {
        let mut store = FormStore::new();
        store.register(registration("mail", vec![Rule::min_length(5), Rule::email()])).unwrap();
        store.set_value("mail", json!("ab")).unwrap();

        let errors = store.validate_fields().await.unwrap_err();
        assert_eq!(
            errors.get("mail"),
            Some(&vec!["Must be at least 5 characters".to_string(), "Invalid email address".to_string()])
        );
    }

    #[tokio::test]
    async fn test_successful_validation_clears_errors() {
        let mut store = FormStore::new();
        store.register(registration("a", vec![Rule::required()])).unwrap();
        assert!(store.validate_fields().await.is_err());
        assert!(store.has_errors());

        store.set_value("a", json!("filled")).unwrap();
        let values = store.validate_fields().await.unwrap();
        assert_eq!(values.get("a"), Some(&json!("filled")));
        assert!(!store.has_errors());
        assert!(store.errors("a").is_empty());
    }

    #[tokio::test]
    async fn test_reset_restores_initial_values() {
        let mut store = FormStore::new();
        store
            .register(FieldRegistration {
                initial_value: json!("start"),
                ..registration("a", vec![Rule::max_length(5)])
            })
            .unwrap();
        store.set_value("a", json!("far too long")).unwrap();
        assert!(store.validate_fields().await.is_err());

        store.reset_fields();
        assert_eq!(store.values().get("a"), Some(&json!("start")));
        assert!(!store.has_errors());
    }
}
