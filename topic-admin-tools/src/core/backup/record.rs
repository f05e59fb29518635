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

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::core::topic::duration_secs;
use crate::core::topic::TopicDescriptor;

/// Portable form of a [`TopicDescriptor`] as stored in a backup file.
///
/// Every field is required on read. Durations are seconds, fractional when
/// the value has a sub-second part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TopicRecord {
    pub path: String,
    #[serde(with = "duration_secs")]
    pub default_message_time_to_live: Duration,
    #[serde(with = "duration_secs")]
    pub auto_delete_on_idle: Duration,
    pub max_size_megabytes: u64,
    pub requires_duplicate_detection: bool,
    #[serde(with = "duration_secs")]
    pub duplicate_detection_window: Duration,
    pub enable_batched_operations: bool,
    pub support_ordering: bool,
    pub enable_filtering_before_publishing: bool,
    pub is_anonymous_accessible: bool,
    pub enable_partitioning: bool,
    pub enable_express: bool,
}

// Both conversions destructure every field so a new field cannot be left unmapped.

impl From<&TopicDescriptor> for TopicRecord {
    fn from(topic: &TopicDescriptor) -> Self {
        let TopicDescriptor {
            path,
            max_size_megabytes,
            default_message_time_to_live,
            auto_delete_on_idle,
            requires_duplicate_detection,
            duplicate_detection_window,
            enable_batched_operations,
            support_ordering,
            enable_filtering_before_publishing,
            is_anonymous_accessible,
            enable_partitioning,
            enable_express,
        } = topic;

        Self {
            path: path.clone(),
            default_message_time_to_live: *default_message_time_to_live,
            auto_delete_on_idle: *auto_delete_on_idle,
            max_size_megabytes: *max_size_megabytes,
            requires_duplicate_detection: *requires_duplicate_detection,
            duplicate_detection_window: *duplicate_detection_window,
            enable_batched_operations: *enable_batched_operations,
            support_ordering: *support_ordering,
            enable_filtering_before_publishing: *enable_filtering_before_publishing,
            is_anonymous_accessible: *is_anonymous_accessible,
            enable_partitioning: *enable_partitioning,
            enable_express: *enable_express,
        }
    }
}

impl From<TopicRecord> for TopicDescriptor {
    fn from(record: TopicRecord) -> Self {
        let TopicRecord {
            path,
            default_message_time_to_live,
            auto_delete_on_idle,
            max_size_megabytes,
            requires_duplicate_detection,
            duplicate_detection_window,
            enable_batched_operations,
            support_ordering,
            enable_filtering_before_publishing,
            is_anonymous_accessible,
            enable_partitioning,
            enable_express,
        } = record;

        Self {
            path,
            max_size_megabytes,
            default_message_time_to_live,
            auto_delete_on_idle,
            requires_duplicate_detection,
            duplicate_detection_window,
            enable_batched_operations,
            support_ordering,
            enable_filtering_before_publishing,
            is_anonymous_accessible,
            enable_partitioning,
            enable_express,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::topic::AUTO_DELETE_DISABLED;

    #[test]
    fn descriptor_survives_projection() {
        let topic = TopicDescriptor::builder("orders")
            .max_size_megabytes(5120)
            .default_message_time_to_live(Duration::from_secs(600))
            .requires_duplicate_detection(true)
            .duplicate_detection_window(Duration::from_secs(45))
            .enable_batched_operations(false)
            .support_ordering(true)
            .enable_filtering_before_publishing(true)
            .is_anonymous_accessible(true)
            .enable_express(true)
            .build();

        let record = TopicRecord::from(&topic);
        assert_eq!(record.default_message_time_to_live, Duration::from_secs(600));
        assert_eq!(record.auto_delete_on_idle, AUTO_DELETE_DISABLED);
        assert_eq!(TopicDescriptor::from(record), topic);
    }

    #[test]
    fn record_uses_camel_case_fields() {
        let record = TopicRecord::from(&TopicDescriptor::new("orders"));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["defaultMessageTimeToLive"], 1_209_600);
        assert_eq!(value["isAnonymousAccessible"], false);
        assert!(value.get("default_message_time_to_live").is_none());
    }

    #[test]
    fn sub_second_durations_survive_the_file_format() {
        let topic = TopicDescriptor::builder("orders")
            .default_message_time_to_live(Duration::from_millis(1500))
            .auto_delete_on_idle(Duration::new(86_400, 250_000_000))
            .duplicate_detection_window(Duration::from_millis(100))
            .build();

        let json = serde_json::to_string(&TopicRecord::from(&topic)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["defaultMessageTimeToLive"], 1.5);

        let record: TopicRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(TopicDescriptor::from(record), topic);
    }

    #[test]
    fn negative_durations_are_rejected() {
        let mut value = serde_json::to_value(TopicRecord::from(&TopicDescriptor::new("orders"))).unwrap();
        value["duplicateDetectionWindow"] = serde_json::json!(-1);
        assert!(serde_json::from_value::<TopicRecord>(value).is_err());
    }
}
