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

//! # Topic Admin Error Handling
//!
//! A single error enum, [`TopicAdminError`], covers every failure the topic
//! administration engine can report. Each error maps onto an
//! [`ErrorCategory`] so callers can tell per-item failures (which let a batch
//! continue) from input-validation failures (which abort the operation
//! before any remote call).
//!
//! ```rust
//! use topic_admin_error::ErrorCategory;
//! use topic_admin_error::TopicAdminError;
//! use topic_admin_error::TopicAdminResult;
//!
//! fn require_file(path: &str) -> TopicAdminResult<()> {
//!     if path.is_empty() {
//!         return Err(TopicAdminError::invalid_argument("file path cannot be empty"));
//!     }
//!     Ok(())
//! }
//!
//! let err = require_file("").unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::InvalidArgument);
//! assert!(err.aborts_batch());
//! ```

pub mod unified;

pub use unified::ErrorCategory;
pub use unified::ExpectedState;
pub use unified::RegistryError;
pub use unified::TopicAdminError;
pub use unified::TopicAdminResult;
