//! Numeric validation functions

use serde_json::Value;

/// Validates minimum value for numeric types
pub fn validate_min<T: PartialOrd + std::fmt::Display>(value: T, min: T) -> Result<(), String> {
    if value >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {}", min))
    }
}

/// Validates maximum value for numeric types
pub fn validate_max<T: PartialOrd + std::fmt::Display>(value: T, max: T) -> Result<(), String> {
    if value <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {}", max))
    }
}

/// Reads a number out of a submitted value.
///
/// Form posts deliver numbers as strings, so numeric strings are accepted
/// alongside JSON numbers.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
