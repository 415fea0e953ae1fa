use std::fmt;

use serde::{Deserialize, Serialize};

use crate::collaborators::CollaboratorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrchestratorErrorKind {
    /// Startup wiring problems: a handler route outside the whitelist,
    /// a whitelisted route with no handler, or a duplicate registration.
    DuplicateRoute,
    UnknownRoute,
    MissingHandler,
    /// Handler-scoped failures, captured per request at dispatch time.
    MissingParam,
    Collaborator,
    Timeout,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestratorError {
    pub kind: OrchestratorErrorKind,
    pub message: String,
}

impl OrchestratorError {
    pub fn new(kind: OrchestratorErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for OrchestratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for OrchestratorError {}

impl From<CollaboratorError> for OrchestratorError {
    fn from(err: CollaboratorError) -> Self {
        OrchestratorError::new(OrchestratorErrorKind::Collaborator, err.message)
    }
}

pub fn duplicate_route(message: impl Into<String>) -> OrchestratorError {
    OrchestratorError::new(OrchestratorErrorKind::DuplicateRoute, message)
}

pub fn unknown_route(message: impl Into<String>) -> OrchestratorError {
    OrchestratorError::new(OrchestratorErrorKind::UnknownRoute, message)
}

pub fn missing_handler(message: impl Into<String>) -> OrchestratorError {
    OrchestratorError::new(OrchestratorErrorKind::MissingHandler, message)
}

pub fn missing_param(message: impl Into<String>) -> OrchestratorError {
    OrchestratorError::new(OrchestratorErrorKind::MissingParam, message)
}

pub fn timeout(message: impl Into<String>) -> OrchestratorError {
    OrchestratorError::new(OrchestratorErrorKind::Timeout, message)
}

pub fn internal_error(message: impl Into<String>) -> OrchestratorError {
    OrchestratorError::new(OrchestratorErrorKind::Internal, message)
}
