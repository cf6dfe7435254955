//! State sheet errors.

use thiserror::Error;

/// Errors that can occur loading, validating or installing a state sheet
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SheetError {
    /// The document is not a valid sheet
    #[error("Failed to parse state sheet: {0}")]
    Parse(String),

    #[error("Failed to serialize state sheet: {0}")]
    Serialize(String),

    #[error("State sheet contains an empty state name")]
    EmptyStateName,

    #[error("State '{state}' has an attribute with an empty name")]
    EmptyAttributeName { state: String },

    /// Every problem found by validation, in sheet order
    #[error("State sheet failed validation with {} problem(s)", .0.len())]
    Invalid(Vec<SheetError>),
}
