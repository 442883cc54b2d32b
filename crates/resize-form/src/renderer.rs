//! Field renderers
//!
//! A renderer turns a field's current value and props into an editable
//! control, and turns the raw string a browser posts back into a value.

use std::sync::Arc;

use maud::{html, Markup};
use serde_json::Value;

use crate::field::Props;

/// Everything a renderer gets to see for one field
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    pub name: &'a str,
    pub value: Option<&'a Value>,
    pub props: &'a Props,
    pub required: bool,
    pub invalid: bool,
}

impl<'a> FieldContext<'a> {
    /// Current value as form text; `null` renders as empty
    pub fn value_text(&self) -> String {
        match self.value {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn prop_str(&self, key: &str) -> Option<&'a str> {
        self.props.get(key).and_then(Value::as_str)
    }

    pub fn prop_bool(&self, key: &str) -> bool {
        self.props.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn prop_number(&self, key: &str) -> Option<f64> {
        self.props.get(key).and_then(Value::as_f64)
    }
}

/// Capability a field's control must provide
pub trait FieldRenderer: Send + Sync {
    fn render(&self, ctx: &FieldContext<'_>) -> Markup;

    /// Convert a posted raw string into the field's value
    fn parse(&self, raw: &str) -> Value {
        if raw.is_empty() {
            Value::Null
        } else {
            Value::String(raw.to_string())
        }
    }
}

impl FieldRenderer for Box<dyn FieldRenderer> {
    fn render(&self, ctx: &FieldContext<'_>) -> Markup {
        (**self).render(ctx)
    }

    fn parse(&self, raw: &str) -> Value {
        (**self).parse(raw)
    }
}

impl FieldRenderer for Arc<dyn FieldRenderer> {
    fn render(&self, ctx: &FieldContext<'_>) -> Markup {
        (**self).render(ctx)
    }

    fn parse(&self, raw: &str) -> Value {
        (**self).parse(raw)
    }
}

/// Single-line text input.
///
/// Props: `placeholder`, `type` (default `text`), `allowClear` (renders a
/// native search box, which has its own clear affordance).
#[derive(Debug, Clone, Copy, Default)]
pub struct Input;

impl FieldRenderer for Input {
    fn render(&self, ctx: &FieldContext<'_>) -> Markup {
        let allow_clear = ctx.prop_bool("allowClear");
        let input_type = ctx
            .prop_str("type")
            .unwrap_or(if allow_clear { "search" } else { "text" });

        html! {
            input.rf-input
                type=(input_type)
                id=(ctx.name)
                name=(ctx.name)
                value=(ctx.value_text())
                placeholder=[ctx.prop_str("placeholder")]
                required[ctx.required]
                aria-invalid=[ctx.invalid.then_some("true")]
                data-allow-clear[allow_clear];
        }
    }
}

/// Numeric input; posted text that parses as a number becomes a JSON number.
///
/// Props: `min`, `max`, `step`, `placeholder`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberInput;

impl FieldRenderer for NumberInput {
    fn render(&self, ctx: &FieldContext<'_>) -> Markup {
        html! {
            input.rf-input.rf-input-number
                type="number"
                id=(ctx.name)
                name=(ctx.name)
                value=(ctx.value_text())
                min=[ctx.prop_number("min")]
                max=[ctx.prop_number("max")]
                step=[ctx.prop_number("step")]
                placeholder=[ctx.prop_str("placeholder")]
                required[ctx.required]
                aria-invalid=[ctx.invalid.then_some("true")];
        }
    }

    fn parse(&self, raw: &str) -> Value {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Value::Null;
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return Value::from(n);
        }
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            // left as text so a `min`/`max` rule can report it
            .unwrap_or_else(|| Value::String(raw.to_string()))
    }
}

/// Drop-down select.
///
/// Props: `options` (array of strings or `{ label, value }` objects),
/// `placeholder` (an empty first option).
#[derive(Debug, Clone, Copy, Default)]
pub struct Select;

impl Select {
    fn options(props: &Props) -> Vec<(String, String)> {
        let Some(Value::Array(items)) = props.get("options") else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some((s.clone(), s.clone())),
                Value::Object(obj) => {
                    let value = match obj.get("value")? {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    let label = obj
                        .get("label")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .unwrap_or_else(|| value.clone());
                    Some((label, value))
                }
                _ => None,
            })
            .collect()
    }
}

impl FieldRenderer for Select {
    fn render(&self, ctx: &FieldContext<'_>) -> Markup {
        let current = ctx.value_text();
        html! {
            select.rf-select
                id=(ctx.name)
                name=(ctx.name)
                required[ctx.required]
                aria-invalid=[ctx.invalid.then_some("true")] {
                @if let Some(placeholder) = ctx.prop_str("placeholder") {
                    option value="" selected[current.is_empty()] { (placeholder) }
                }
                @for (label, value) in Self::options(ctx.props) {
                    option value=(value) selected[value == current] { (label) }
                }
            }
        }
    }
}
