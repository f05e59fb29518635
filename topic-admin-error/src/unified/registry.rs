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

//! Errors raised by the topic registry collaborator

use thiserror::Error;

/// Failure of a call into the remote topic registry.
///
/// The engine surfaces these as-is; it never retries a failed mutation.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The registry could not be reached at all
    #[error("Namespace '{namespace}' is unreachable: {reason}")]
    Unreachable { namespace: String, reason: String },

    /// The registry rejected the request
    #[error("Registry rejected '{operation}' for topic '{topic}': {reason}")]
    Rejected {
        operation: &'static str,
        topic: String,
        reason: String,
    },

    /// The request failed underneath (I/O, transport, decoding)
    #[error("Registry call '{operation}' failed: {source}")]
    CallFailed {
        operation: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl RegistryError {
    /// Helper to construct an `Unreachable` error.
    pub fn unreachable(namespace: impl Into<String>, reason: impl Into<String>) -> Self {
        RegistryError::Unreachable {
            namespace: namespace.into(),
            reason: reason.into(),
        }
    }

    /// Helper to construct a `Rejected` error.
    pub fn rejected(operation: &'static str, topic: impl Into<String>, reason: impl Into<String>) -> Self {
        RegistryError::Rejected {
            operation,
            topic: topic.into(),
            reason: reason.into(),
        }
    }

    /// Helper to construct a `CallFailed` error.
    pub fn call_failed<E>(operation: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        RegistryError::CallFailed {
            operation,
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_error_messages() {
        let err = RegistryError::unreachable("prod-ns", "connection refused");
        assert_eq!(err.to_string(), "Namespace 'prod-ns' is unreachable: connection refused");

        let err = RegistryError::rejected("createTopic", "orders", "conflict");
        assert_eq!(
            err.to_string(),
            "Registry rejected 'createTopic' for topic 'orders': conflict"
        );

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = RegistryError::call_failed("listTopics", io);
        assert!(err.to_string().contains("listTopics"));
        assert!(err.to_string().contains("pipe closed"));
    }
}
