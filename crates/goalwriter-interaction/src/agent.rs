//! Generative agent abstraction.
//!
//! The questionnaire calls a text-generation backend exactly once per goal
//! submission. The trait keeps the state machine independent of the
//! concrete HTTP client and testable with a mock backend.

use goalwriter_core::GoalWriterError;
use thiserror::Error;

/// Errors surfaced by a generative agent call.
///
/// There is no retry path: a failed call fails that submission and leaves
/// the session untouched, so the user can resubmit.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The agent could not be constructed or executed.
    #[error("agent execution failed: {0}")]
    ExecutionFailed(String),

    /// The remote service rejected the request.
    #[error("agent process error: {message}")]
    ProcessError {
        status_code: Option<u16>,
        message: String,
    },

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

impl From<AgentError> for GoalWriterError {
    fn from(err: AgentError) -> Self {
        GoalWriterError::Agent(err.to_string())
    }
}

/// A text-completion backend.
#[async_trait::async_trait]
pub trait GenerativeAgent: Send + Sync {
    /// Sends `input` to the backing model and returns its text completion.
    async fn generate(&self, input: &str) -> Result<String, AgentError>;
}
