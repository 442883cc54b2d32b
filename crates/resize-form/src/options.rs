// File: src/options.rs
// Purpose: Caller-facing form options, loadable from TOML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::breakpoint::BreakpointTable;
use crate::error::FormError;

/// Form options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormOptions {
    /// Width of every field label
    #[serde(default)]
    pub label_width: LabelWidth,

    /// Whether the form starts collapsed (default: true)
    #[serde(default = "default_true")]
    pub default_collapse: bool,

    /// Fixed number of fields visible while collapsed
    #[serde(default)]
    pub default_form_item_num: Option<u32>,

    /// Fixed grid units per field, ignoring the container width
    #[serde(default)]
    pub default_form_item_span_size: Option<u32>,

    #[serde(default)]
    pub breakpoints: BreakpointTable,

    /// Width assumed until the first resize notification arrives
    #[serde(default = "default_initial_width")]
    pub initial_width: f64,

    #[serde(default)]
    pub labels: Labels,

    /// Target of the form's POST
    #[serde(default = "default_action")]
    pub action: String,
}

/// Label column width: fixed pixels or sized to content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LabelWidthRepr", into = "LabelWidthRepr")]
pub enum LabelWidth {
    Px(u32),
    Auto,
}

impl LabelWidth {
    /// Inline flex style for the label column
    pub fn flex_style(&self) -> String {
        match self {
            LabelWidth::Px(px) => format!("flex: 0 0 {}px", px),
            LabelWidth::Auto => "flex: auto".to_string(),
        }
    }
}

impl Default for LabelWidth {
    fn default() -> Self {
        LabelWidth::Px(100)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum LabelWidthRepr {
    Px(u32),
    Keyword(String),
}

impl TryFrom<LabelWidthRepr> for LabelWidth {
    type Error = String;

    fn try_from(repr: LabelWidthRepr) -> Result<Self, Self::Error> {
        match repr {
            LabelWidthRepr::Px(px) => Ok(LabelWidth::Px(px)),
            LabelWidthRepr::Keyword(k) if k == "auto" => Ok(LabelWidth::Auto),
            LabelWidthRepr::Keyword(k) => Err(format!(
                "label_width must be a pixel count or \"auto\", got {:?}",
                k
            )),
        }
    }
}

impl From<LabelWidth> for LabelWidthRepr {
    fn from(width: LabelWidth) -> Self {
        match width {
            LabelWidth::Px(px) => LabelWidthRepr::Px(px),
            LabelWidth::Auto => LabelWidthRepr::Keyword("auto".to_string()),
        }
    }
}

/// Texts of the action controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default = "default_submit")]
    pub submit: String,

    #[serde(default = "default_reset")]
    pub reset: String,

    /// Shown while collapsed
    #[serde(default = "default_expand")]
    pub expand: String,

    /// Shown while expanded
    #[serde(default = "default_collapse")]
    pub collapse: String,
}

// Default values
fn default_true() -> bool {
    true
}

fn default_initial_width() -> f64 {
    1024.0
}

fn default_action() -> String {
    "".to_string()
}

fn default_submit() -> String {
    "Search".to_string()
}

fn default_reset() -> String {
    "Reset".to_string()
}

fn default_expand() -> String {
    "Expand".to_string()
}

fn default_collapse() -> String {
    "Collapse".to_string()
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            label_width: LabelWidth::default(),
            default_collapse: true,
            default_form_item_num: None,
            default_form_item_span_size: None,
            breakpoints: BreakpointTable::default(),
            initial_width: default_initial_width(),
            labels: Labels::default(),
            action: default_action(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            submit: default_submit(),
            reset: default_reset(),
            expand: default_expand(),
            collapse: default_collapse(),
        }
    }
}

impl FormOptions {
    /// Load options from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default options
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form options: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse form options: {:?}", path))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let options: FormOptions = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Checks values serde cannot rule out on its own
    pub fn validate(&self) -> Result<(), FormError> {
        if !self.initial_width.is_finite() || self.initial_width < 0.0 {
            return Err(FormError::InvalidOptions(format!(
                "initial_width must be a finite, non-negative number, got {}",
                self.initial_width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_options() {
        let options = FormOptions::default();
        assert_eq!(options.label_width, LabelWidth::Px(100));
        assert!(options.default_collapse);
        assert_eq!(options.default_form_item_num, None);
        assert_eq!(options.default_form_item_span_size, None);
        assert_eq!(options.initial_width, 1024.0);
        assert_eq!(options.breakpoints, BreakpointTable::default());
    }

    #[test]
    fn test_empty_options() {
        let options = FormOptions::from_toml_str("").unwrap();
        assert_eq!(options, FormOptions::default());
    }

    #[test]
    fn test_custom_options() {
        let toml = r#"
            label_width = "auto"
            default_collapse = false
            default_form_item_span_size = 12

            [labels]
            submit = "搜索"
            reset = "重置"
            expand = "展开"
            collapse = "收起"
        "#;
        let options = FormOptions::from_toml_str(toml).unwrap();
        assert_eq!(options.label_width, LabelWidth::Auto);
        assert!(!options.default_collapse);
        assert_eq!(options.default_form_item_span_size, Some(12));
        assert_eq!(options.labels.expand, "展开");
        assert_eq!(options.initial_width, 1024.0);
    }

    #[test]
    fn test_pixel_label_width() {
        let options = FormOptions::from_toml_str("label_width = 80").unwrap();
        assert_eq!(options.label_width, LabelWidth::Px(80));
        assert_eq!(options.label_width.flex_style(), "flex: 0 0 80px");
        assert_eq!(LabelWidth::Auto.flex_style(), "flex: auto");
    }

    #[test]
    fn test_rejects_unknown_label_keyword() {
        assert!(FormOptions::from_toml_str(r#"label_width = "wide""#).is_err());
    }

    #[test]
    fn test_rejects_negative_initial_width() {
        assert!(FormOptions::from_toml_str("initial_width = -5.0").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let options = FormOptions::load("does/not/exist/resize-form.toml").unwrap();
        assert_eq!(options, FormOptions::default());
    }
}
