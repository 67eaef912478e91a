use serde::{Deserialize, Serialize};

use crate::data::RecordId;

/// Failure detail recorded by the store after an unsuccessful save or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: Option<String>,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorInfo {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorInfo {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

impl std::error::Error for ErrorInfo {}

impl std::fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Per-key request tracking, shared by saves and deletes.
///
/// Transitions: idle -> in flight -> idle with success (error cleared) or
/// idle with the failure recorded in `last_error`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestState {
    pub in_flight: bool,
    pub last_error: Option<ErrorInfo>,
}

/// What a save is aimed at: an existing record, or a draft that has no id
/// until the backend assigns one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum SaveTarget {
    Draft,
    Existing(RecordId),
}

impl std::fmt::Display for SaveTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveTarget::Draft => write!(f, "new"),
            SaveTarget::Existing(id) => write!(f, "{}", id),
        }
    }
}
