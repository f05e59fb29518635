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

//! CLI input validators
//!
//! Provides validation for command-line arguments

use crate::core::pattern::has_wildcards;
use crate::core::TopicAdminError;
use crate::core::TopicAdminResult;

/// Longest topic path the management API accepts
pub const MAX_TOPIC_PATH_LEN: usize = 260;

/// Validate a literal topic path (create, delete)
pub fn validate_topic_path(path: &str) -> TopicAdminResult<()> {
    if path.trim().is_empty() {
        return Err(TopicAdminError::invalid_argument("topic path cannot be empty"));
    }

    if path.chars().count() > MAX_TOPIC_PATH_LEN {
        return Err(TopicAdminError::invalid_argument(format!(
            "topic path '{path}' exceeds maximum length of {MAX_TOPIC_PATH_LEN} characters"
        )));
    }

    if has_wildcards(path) {
        return Err(TopicAdminError::invalid_argument(format!(
            "topic path '{path}' contains a wildcard; this command takes literal paths"
        )));
    }

    Ok(())
}

/// Validate a topic pattern (migrate, backup, restore)
pub fn validate_pattern(pattern: &str) -> TopicAdminResult<()> {
    if pattern.trim().is_empty() {
        return Err(TopicAdminError::invalid_argument("topic pattern cannot be empty"));
    }
    Ok(())
}

pub fn validate_topic_paths(paths: &[String]) -> TopicAdminResult<()> {
    paths.iter().try_for_each(|p| validate_topic_path(p))
}

pub fn validate_patterns(patterns: &[String]) -> TopicAdminResult<()> {
    patterns.iter().try_for_each(|p| validate_pattern(p))
}
