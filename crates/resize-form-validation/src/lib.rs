//! Resize Form Validation
//!
//! Pure validators for submitted field values, plus the serializable [`Rule`]
//! type that form items carry. The form engine in `resize-form` runs every
//! rule of a field in declaration order and reports each failure.

pub mod email;
pub mod numeric;
pub mod rule;
pub mod string;

pub use email::*;
pub use numeric::*;
pub use rule::Rule;
pub use string::*;

use serde_json::Value;

/// Whether a value counts as "not filled in" for `required` checks.
///
/// `null`, the empty string and the empty array are empty; everything else,
/// including `false` and `0`, is a value the user supplied.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
