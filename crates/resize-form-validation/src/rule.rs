//! Declarative field rules
//!
//! Rules are plain data so they can be written in code or in a TOML/JSON
//! form definition:
//!
//! ```toml
//! rules = [
//!     { rule = "required", message = "必填" },
//!     { rule = "max_length", max = 20 },
//! ]
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{as_number, is_empty_value, is_one_of, is_valid_email, is_valid_url, matches_regex};
use crate::{validate_max, validate_max_length, validate_min, validate_min_length};

/// One validation rule attached to a form item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    Required {
        #[serde(default)]
        message: Option<String>,
    },
    MinLength {
        min: usize,
        #[serde(default)]
        message: Option<String>,
    },
    MaxLength {
        max: usize,
        #[serde(default)]
        message: Option<String>,
    },
    Pattern {
        pattern: String,
        #[serde(default)]
        message: Option<String>,
    },
    Email {
        #[serde(default)]
        message: Option<String>,
    },
    Url {
        #[serde(default)]
        message: Option<String>,
    },
    Min {
        min: f64,
        #[serde(default)]
        message: Option<String>,
    },
    Max {
        max: f64,
        #[serde(default)]
        message: Option<String>,
    },
    OneOf {
        values: Vec<String>,
        #[serde(default)]
        message: Option<String>,
    },
}

impl Rule {
    pub fn required() -> Self {
        Rule::Required { message: None }
    }

    pub fn min_length(min: usize) -> Self {
        Rule::MinLength { min, message: None }
    }

    pub fn max_length(max: usize) -> Self {
        Rule::MaxLength { max, message: None }
    }

    pub fn pattern(pattern: impl Into<String>) -> Self {
        Rule::Pattern { pattern: pattern.into(), message: None }
    }

    pub fn email() -> Self {
        Rule::Email { message: None }
    }

    pub fn url() -> Self {
        Rule::Url { message: None }
    }

    pub fn min(min: f64) -> Self {
        Rule::Min { min, message: None }
    }

    pub fn max(max: f64) -> Self {
        Rule::Max { max, message: None }
    }

    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Rule::OneOf { values: values.into_iter().map(Into::into).collect(), message: None }
    }

    /// Override the default error message
    pub fn with_message(mut self, text: impl Into<String>) -> Self {
        let slot = match &mut self {
            Rule::Required { message }
            | Rule::MinLength { message, .. }
            | Rule::MaxLength { message, .. }
            | Rule::Pattern { message, .. }
            | Rule::Email { message }
            | Rule::Url { message }
            | Rule::Min { message, .. }
            | Rule::Max { message, .. }
            | Rule::OneOf { message, .. } => message,
        };
        *slot = Some(text.into());
        self
    }

    fn custom_message(&self) -> Option<&str> {
        match self {
            Rule::Required { message }
            | Rule::MinLength { message, .. }
            | Rule::MaxLength { message, .. }
            | Rule::Pattern { message, .. }
            | Rule::Email { message }
            | Rule::Url { message }
            | Rule::Min { message, .. }
            | Rule::Max { message, .. }
            | Rule::OneOf { message, .. } => message.as_deref(),
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Rule::Required { .. })
    }

    /// Checks `value` against this rule.
    ///
    /// Only `required` looks at empty values; every other rule passes when
    /// the field was left blank.
    pub fn check(&self, label: &str, value: &Value) -> Result<(), String> {
        let empty = is_empty_value(value);
        if empty && !self.is_required() {
            return Ok(());
        }

        let outcome = match self {
            Rule::Required { .. } => {
                if empty {
                    Err(format!("{} is required", label))
                } else {
                    Ok(())
                }
            }
            Rule::MinLength { min, .. } => validate_min_length(&text_of(value), *min),
            Rule::MaxLength { max, .. } => validate_max_length(&text_of(value), *max),
            Rule::Pattern { pattern, .. } => {
                if matches_regex(&text_of(value), pattern) {
                    Ok(())
                } else {
                    Err(format!("{} does not match the required format", label))
                }
            }
            Rule::Email { .. } => {
                if is_valid_email(&text_of(value)) {
                    Ok(())
                } else {
                    Err("Invalid email address".to_string())
                }
            }
            Rule::Url { .. } => {
                if is_valid_url(&text_of(value)) {
                    Ok(())
                } else {
                    Err("Invalid URL".to_string())
                }
            }
            Rule::Min { min, .. } => match as_number(value) {
                Some(n) => validate_min(n, *min),
                None => Err(format!("{} must be a number", label)),
            },
            Rule::Max { max, .. } => match as_number(value) {
                Some(n) => validate_max(n, *max),
                None => Err(format!("{} must be a number", label)),
            },
            Rule::OneOf { values, .. } => {
                if is_one_of(&text_of(value), values) {
                    Ok(())
                } else {
                    Err(format!("{} must be one of: {}", label, values.join(", ")))
                }
            }
        };

        outcome.map_err(|default| self.custom_message().map(str::to_string).unwrap_or(default))
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
