use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    UnknownAgent,
    UnknownAction,
    ParamOutOfBounds,
    PremiumRequired,
}

/// Pre-dispatch rejection of a single decision request. The message is for
/// the calling layer to interpret or log, never shown raw to the end user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

pub fn unknown_agent(message: impl Into<String>) -> ValidationError {
    ValidationError::new(ValidationErrorKind::UnknownAgent, message)
}

pub fn unknown_action(message: impl Into<String>) -> ValidationError {
    ValidationError::new(ValidationErrorKind::UnknownAction, message)
}

pub fn param_out_of_bounds(message: impl Into<String>) -> ValidationError {
    ValidationError::new(ValidationErrorKind::ParamOutOfBounds, message)
}

pub fn premium_required(message: impl Into<String>) -> ValidationError {
    ValidationError::new(ValidationErrorKind::PremiumRequired, message)
}
