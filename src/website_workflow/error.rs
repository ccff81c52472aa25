//! Error types for the website workflow.

use thiserror::Error;

/// Errors that can occur while driving a website session.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WebsiteError {
    #[error("Website session not found: {0}")]
    NotFound(String),

    /// The current step still has unmet requirements.
    #[error("Step incomplete: {}", .0.join("; "))]
    Incomplete(Vec<&'static str>),

    /// `next` was requested on the last step.
    #[error("Already at the final step")]
    AtFinalStep,

    #[error("Transition rejected: {0}")]
    Rejected(String),

    #[error("Session host communication error: {0}")]
    HostCommunication(String),
}
