// Copyright 2024 The Topic Admin Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Unified error type for topic administration
//!
//! Every failure is categorised so that the reconciler can decide whether it
//! is scoped to one topic (the batch keeps going) or invalidates the whole
//! operation before anything is mutated.

mod registry;

use std::fmt;
use std::io;

pub use registry::RegistryError;
use thiserror::Error;

/// Result alias used across the workspace
pub type TopicAdminResult<T> = std::result::Result<T, TopicAdminError>;

/// Existence state a verification re-check expected to observe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedState {
    /// The topic should exist after a create
    Present,
    /// The topic should be gone after a delete
    Absent,
}

impl fmt::Display for ExpectedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedState::Present => f.pad("present"),
            ExpectedState::Absent => f.pad("absent"),
        }
    }
}

/// Coarse classification of an error, matching the categories an operator
/// sees in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Target absent; reported as a warning
    NotFound,
    /// Target already present; reported as a warning
    AlreadyExists,
    /// A delete did not take effect
    ResourceExists,
    /// A create did not take effect
    ResourceUnavailable,
    /// Missing file or directory, bad option combination
    InvalidArgument,
    /// Backup document could not be read or parsed
    OpenError,
    /// The registry collaborator raised an error
    Transport,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::NotFound => "NotFound",
            ErrorCategory::AlreadyExists => "AlreadyExists",
            ErrorCategory::ResourceExists => "ResourceExists",
            ErrorCategory::ResourceUnavailable => "ResourceUnavailable",
            ErrorCategory::InvalidArgument => "InvalidArgument",
            ErrorCategory::OpenError => "OpenError",
            ErrorCategory::Transport => "Transport",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Main error type for all topic administration operations
#[derive(Debug, Error)]
pub enum TopicAdminError {
    // ============================================================================
    // Warnings (non-fatal)
    // ============================================================================
    /// Topic does not exist
    #[error("Topic '{topic}' does not exist")]
    NotFound { topic: String },

    /// Topic already exists
    #[error("Topic '{topic}' already exists and will not be re-created")]
    AlreadyExists { topic: String },

    // ============================================================================
    // Per-item failures
    // ============================================================================
    /// The existence re-check after a mutation contradicted the expected state
    #[error("Verification failed for topic '{topic}': expected it to be {expected} after {operation}")]
    VerificationFailed {
        topic: String,
        operation: &'static str,
        expected: ExpectedState,
    },

    /// Migration deleted the topic but could not bring it back
    #[error("Topic '{topic}' was deleted but could not be recreated: {source}")]
    TopicLost {
        topic: String,
        #[source]
        source: Box<TopicAdminError>,
    },

    /// Registry collaborator failure
    #[error(transparent)]
    Transport(#[from] RegistryError),

    // ============================================================================
    // Input validation (abort before any remote call)
    // ============================================================================
    /// Invalid argument such as a missing file or directory
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A backup document could not be opened or parsed
    #[error("Failed to open '{path}': {reason}")]
    OpenError { path: String, reason: String },

    // ============================================================================
    // System Errors
    // ============================================================================
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl TopicAdminError {
    /// Create a topic not found warning
    #[inline]
    pub fn not_found(topic: impl Into<String>) -> Self {
        Self::NotFound { topic: topic.into() }
    }

    /// Create a topic already exists warning
    #[inline]
    pub fn already_exists(topic: impl Into<String>) -> Self {
        Self::AlreadyExists { topic: topic.into() }
    }

    /// A create whose re-check did not find the topic
    #[inline]
    pub fn create_not_visible(topic: impl Into<String>) -> Self {
        Self::VerificationFailed {
            topic: topic.into(),
            operation: "create",
            expected: ExpectedState::Present,
        }
    }

    /// A delete whose re-check still found the topic
    #[inline]
    pub fn delete_not_applied(topic: impl Into<String>) -> Self {
        Self::VerificationFailed {
            topic: topic.into(),
            operation: "delete",
            expected: ExpectedState::Absent,
        }
    }

    /// Wrap the recreate failure of a migration whose delete already succeeded
    #[inline]
    pub fn topic_lost(topic: impl Into<String>, source: TopicAdminError) -> Self {
        Self::TopicLost {
            topic: topic.into(),
            source: Box::new(source),
        }
    }

    /// Create an invalid argument error
    #[inline]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an open error for a backup document
    #[inline]
    pub fn open_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::OpenError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// The category an operator sees for this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::AlreadyExists { .. } => ErrorCategory::AlreadyExists,
            Self::VerificationFailed {
                expected: ExpectedState::Absent,
                ..
            } => ErrorCategory::ResourceExists,
            Self::VerificationFailed {
                expected: ExpectedState::Present,
                ..
            } => ErrorCategory::ResourceUnavailable,
            Self::TopicLost { .. } => ErrorCategory::ResourceUnavailable,
            Self::Transport(_) => ErrorCategory::Transport,
            Self::InvalidArgument { .. } | Self::Config(_) => ErrorCategory::InvalidArgument,
            Self::OpenError { .. } | Self::Json(_) | Self::Io(_) => ErrorCategory::OpenError,
        }
    }

    /// Input-validation failures abort the whole operation; everything else
    /// is scoped to the item being processed
    pub fn aborts_batch(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::InvalidArgument | ErrorCategory::OpenError
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_errors() {
        let err = TopicAdminError::not_found("orders");
        assert_eq!(err.to_string(), "Topic 'orders' does not exist");
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(!err.aborts_batch());

        let err = TopicAdminError::already_exists("orders");
        assert_eq!(
            err.to_string(),
            "Topic 'orders' already exists and will not be re-created"
        );
        assert_eq!(err.category(), ErrorCategory::AlreadyExists);
    }

    #[test]
    fn test_verification_categories() {
        let err = TopicAdminError::delete_not_applied("orders");
        assert_eq!(err.category(), ErrorCategory::ResourceExists);
        assert_eq!(
            err.to_string(),
            "Verification failed for topic 'orders': expected it to be absent after delete"
        );

        let err = TopicAdminError::create_not_visible("orders");
        assert_eq!(err.category(), ErrorCategory::ResourceUnavailable);
        assert!(!err.aborts_batch());
    }

    #[test]
    fn test_topic_lost_keeps_cause() {
        let cause = TopicAdminError::create_not_visible("orders");
        let err = TopicAdminError::topic_lost("orders", cause);
        assert_eq!(err.category(), ErrorCategory::ResourceUnavailable);
        assert!(err.to_string().contains("was deleted but could not be recreated"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_input_errors_abort_batch() {
        let err = TopicAdminError::invalid_argument("File '/tmp/x.json' does not exist");
        assert_eq!(err.category(), ErrorCategory::InvalidArgument);
        assert!(err.aborts_batch());

        let err = TopicAdminError::open_error("/tmp/x.json", "expected value at line 1 column 1");
        assert_eq!(err.category(), ErrorCategory::OpenError);
        assert!(err.aborts_batch());
        assert_eq!(
            err.to_string(),
            "Failed to open '/tmp/x.json': expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_transport_conversion() {
        let err: TopicAdminError = RegistryError::unreachable("ns", "timeout").into();
        assert_eq!(err.category(), ErrorCategory::Transport);
        assert!(!err.aborts_batch());
        assert_eq!(err.to_string(), "Namespace 'ns' is unreachable: timeout");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::ResourceExists.to_string(), "ResourceExists");
        assert_eq!(ErrorCategory::OpenError.as_str(), "OpenError");
        assert_eq!(ExpectedState::Present.to_string(), "present");
    }
}
