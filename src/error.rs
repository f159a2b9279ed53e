//! Client Errors
//!
//! Transport failures from the API binding and the user-facing errors built
//! on top of them.

use thiserror::Error;

/// The user action a request was made for; picks the alert wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Add,
    Update,
    Rename,
    Delete,
}

impl Action {
    pub fn failure_message(&self) -> &'static str {
        match self {
            Action::Load => "Failed to load tasks",
            Action::Add => "Failed to add task",
            Action::Update => "Failed to update task",
            Action::Rename => "Failed to rename task",
            Action::Delete => "Failed to delete task",
        }
    }
}

/// Why a request did not produce a usable response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Any unsuccessful request, regardless of status or transport cause
    #[error("{}", .action.failure_message())]
    RequestFailed {
        action: Action,
        #[source]
        source: ApiError,
    },
    #[error("Title cannot be empty")]
    ValidationFailed,
}
