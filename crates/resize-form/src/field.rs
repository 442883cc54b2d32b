// File: src/field.rs
// Purpose: Declarative per-field configuration

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::engine::FieldRegistration;
use resize_form_validation::Rule;

/// Opaque props handed to a field's renderer
pub type Props = Map<String, Value>;

/// Form-item attributes that are not about layout.
///
/// `extra` is forwarded verbatim to the rendered item as a JSON
/// `data-item` attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldItem {
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub rules: Vec<Rule>,

    #[serde(default)]
    pub initial_value: Option<Value>,

    #[serde(default)]
    pub extra: BTreeMap<String, Value>,
}

/// One field of a [`crate::ResizeForm`]
#[derive(Debug, Clone)]
pub struct FieldConfig<R> {
    pub name: String,
    pub renderer: R,
    /// Multiplier over the layout's per-field span (default 1)
    pub grid_span_units: Option<u32>,
    pub hidden: bool,
    pub renderer_props: Props,
    pub item: FieldItem,
}

impl<R> FieldConfig<R> {
    pub fn new(name: impl Into<String>, renderer: R) -> Self {
        Self {
            name: name.into(),
            renderer,
            grid_span_units: None,
            hidden: false,
            renderer_props: Props::new(),
            item: FieldItem::default(),
        }
    }

    pub fn span_units(mut self, units: u32) -> Self {
        self.grid_span_units = Some(units);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.item.label = Some(label.into());
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.item.rules.push(rule);
        self
    }

    pub fn initial_value(mut self, value: impl Into<Value>) -> Self {
        self.item.initial_value = Some(value.into());
        self
    }

    /// Set one renderer prop
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.renderer_props.insert(key.into(), value.into());
        self
    }

    /// Set one passthrough item attribute
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.item.extra.insert(key.into(), value.into());
        self
    }

    /// Label shown to users and used in default error messages
    pub fn label_text(&self) -> &str {
        self.item.label.as_deref().unwrap_or(&self.name)
    }

    pub fn is_required(&self) -> bool {
        self.item.rules.iter().any(Rule::is_required)
    }

    pub fn registration(&self) -> FieldRegistration {
        FieldRegistration {
            name: self.name.clone(),
            label: self.label_text().to_string(),
            rules: self.item.rules.clone(),
            initial_value: self.item.initial_value.clone().unwrap_or(Value::Null),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let field = FieldConfig::new("key1", ())
            .label("表单1")
            .rule(Rule::required().with_message("必填"))
            .prop("allowClear", true)
            .prop("placeholder", "请输入key1")
            .attr("tooltip", "first key")
            .span_units(2);

        assert_eq!(field.label_text(), "表单1");
        assert!(field.is_required());
        assert_eq!(field.grid_span_units, Some(2));
        assert_eq!(field.renderer_props.get("allowClear"), Some(&json!(true)));
        assert_eq!(field.item.extra.get("tooltip"), Some(&json!("first key")));
    }

    #[test]
    fn test_label_defaults_to_name() {
        let field = FieldConfig::new("key2", ());
        assert_eq!(field.label_text(), "key2");
        assert!(!field.is_required());
    }

    #[test]
    fn test_registration() {
        let field = FieldConfig::new("city", ()).label("City").initial_value("Oslo");
        let registration = field.registration();
        assert_eq!(registration.name, "city");
        assert_eq!(registration.label, "City");
        assert_eq!(registration.initial_value, json!("Oslo"));

        let blank = FieldConfig::new("zip", ()).registration();
        assert_eq!(blank.initial_value, Value::Null);
    }
}
