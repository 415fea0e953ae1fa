use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollaboratorErrorKind {
    Unavailable,
    InvalidInput,
    Internal,
}

/// Failure raised by a collaborator behind one of the ports. The
/// orchestrator converts it into a failed per-request result; it never
/// aborts a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaboratorError {
    pub kind: CollaboratorErrorKind,
    pub message: String,
}

impl CollaboratorError {
    pub fn new(kind: CollaboratorErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CollaboratorError {}

pub fn unavailable(message: impl Into<String>) -> CollaboratorError {
    CollaboratorError::new(CollaboratorErrorKind::Unavailable, message)
}
