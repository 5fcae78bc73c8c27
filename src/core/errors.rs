use serde::Serialize;
use thiserror::Error;

use crate::core::models::{GroupId, Money, UserId};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

impl FieldError {
    pub fn new(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Broad class of a [`SplitwiseError`], used by callers that need to tell
/// "fix your input" apart from "the ledger is broken".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    InconsistentLedger,
    Internal,
}

#[derive(Error, Debug, Serialize)]
pub enum SplitwiseError {
    #[error("User {0} not found")]
    UserNotFound(UserId),
    #[error("Group {0} not found")]
    GroupNotFound(GroupId),
    #[error("User name {0} already taken")]
    UserNameTaken(String),
    #[error("User {0} is not a group member")]
    NotGroupMember(UserId),
    #[error("Invalid split user: {0}")]
    InvalidSplitUser(UserId),
    #[error("Invalid split: {0}")]
    InvalidSplit(String),
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),
    #[error("Ledger for group {group_id} does not balance: off by {imbalance}")]
    InconsistentLedger { group_id: GroupId, imbalance: Money },
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Logging error: {0}")]
    LoggingError(String),
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl SplitwiseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SplitwiseError::UserNotFound(_) | SplitwiseError::GroupNotFound(_) => ErrorKind::NotFound,
            SplitwiseError::UserNameTaken(_) => ErrorKind::Conflict,
            SplitwiseError::NotGroupMember(_)
            | SplitwiseError::InvalidSplitUser(_)
            | SplitwiseError::InvalidSplit(_)
            | SplitwiseError::InvalidInput(..) => ErrorKind::Validation,
            SplitwiseError::InconsistentLedger { .. } => ErrorKind::InconsistentLedger,
            SplitwiseError::StorageError(_)
            | SplitwiseError::LoggingError(_)
            | SplitwiseError::InternalServerError(_) => ErrorKind::Internal,
        }
    }

    pub(crate) fn invalid_input(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        SplitwiseError::InvalidInput(field.to_string(), FieldError::new(field, title, description))
    }
}
