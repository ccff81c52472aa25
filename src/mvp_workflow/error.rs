//! Error types for the MVP workflow.

use super::validation::IdeaValidation;
use thiserror::Error;

/// Errors that can occur while driving an MVP session.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MvpError {
    /// The session id is unknown (never started, or already finished).
    #[error("MVP session not found: {0}")]
    NotFound(String),

    /// The idea did not pass the submission checks.
    #[error("Idea validation failed: {0}")]
    Validation(IdeaValidation),

    /// The host refused the event under its step policy.
    #[error("Transition rejected: {0}")]
    Rejected(String),

    /// An error occurred while communicating with the session host.
    #[error("Session host communication error: {0}")]
    HostCommunication(String),
}
