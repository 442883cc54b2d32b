//! Error types for form construction and engine access

use thiserror::Error;

/// Errors raised while building a form or addressing its fields.
///
/// Validation failures are not errors in this sense: they are reported
/// through [`crate::SubmitOutcome::Rejected`] and the engine's per-field
/// messages.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormError {
    #[error("invalid breakpoint table: {0}")]
    InvalidBreakpoints(String),

    #[error("duplicate field name `{0}`")]
    DuplicateField(String),

    #[error("field name `{0}` is reserved for the form's own inputs")]
    ReservedField(String),

    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("invalid form options: {0}")]
    InvalidOptions(String),
}
