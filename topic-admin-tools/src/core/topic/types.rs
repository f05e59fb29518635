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

//! Topic-related types and data structures

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

/// Default message time-to-live applied on create: 14 days
pub const DEFAULT_MESSAGE_TTL: Duration = Duration::from_secs(14 * 24 * 60 * 60);

/// Default duplicate detection window applied on create: 30 seconds
pub const DEFAULT_DUPLICATE_DETECTION_WINDOW: Duration = Duration::from_secs(30);

/// Default capacity of a new topic, in megabytes
pub const DEFAULT_MAX_SIZE_MEGABYTES: u64 = 1024;

/// Idle auto-delete disabled
pub const AUTO_DELETE_DISABLED: Duration = Duration::from_secs(u64::MAX);

/// The authoritative configuration of one remote topic.
///
/// `path` identifies the topic within its namespace. `enable_partitioning`
/// cannot be changed on a live topic; the only way to flip it is to delete
/// and recreate the topic (see `Reconciler::migrate`).
///
/// Durations are written as seconds and keep sub-second precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDescriptor {
    pub path: String,
    pub max_size_megabytes: u64,
    #[serde(with = "duration_secs")]
    pub default_message_time_to_live: Duration,
    #[serde(with = "duration_secs")]
    pub auto_delete_on_idle: Duration,
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

impl TopicDescriptor {
    /// A descriptor carrying the service defaults
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            max_size_megabytes: DEFAULT_MAX_SIZE_MEGABYTES,
            default_message_time_to_live: DEFAULT_MESSAGE_TTL,
            auto_delete_on_idle: AUTO_DELETE_DISABLED,
            requires_duplicate_detection: false,
            duplicate_detection_window: DEFAULT_DUPLICATE_DETECTION_WINDOW,
            enable_batched_operations: true,
            support_ordering: false,
            enable_filtering_before_publishing: false,
            is_anonymous_accessible: false,
            enable_partitioning: false,
            enable_express: false,
        }
    }

    #[inline]
    pub fn builder(path: impl Into<String>) -> TopicDescriptorBuilder {
        TopicDescriptorBuilder::new(path)
    }

    /// Same path and attributes, with partitioning switched on
    pub fn with_partitioning(&self) -> Self {
        Self {
            enable_partitioning: true,
            ..self.clone()
        }
    }

    /// Path identity is case-insensitive within a namespace
    #[inline]
    pub fn is_path(&self, path: &str) -> bool {
        self.path.to_lowercase() == path.to_lowercase()
    }
}

/// Fluent builder for [`TopicDescriptor`]
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
///
/// use topic_admin_tools::core::topic::TopicDescriptor;
///
/// let topic = TopicDescriptor::builder("orders")
///     .max_size_megabytes(2048)
///     .default_message_time_to_live(Duration::from_secs(600))
///     .enable_partitioning(true)
///     .build();
///
/// assert_eq!(topic.path, "orders");
/// assert!(topic.enable_partitioning);
/// assert!(topic.enable_batched_operations);
/// ```
#[derive(Debug, Clone)]
pub struct TopicDescriptorBuilder {
    inner: TopicDescriptor,
}

impl TopicDescriptorBuilder {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            inner: TopicDescriptor::new(path),
        }
    }

    #[inline]
    pub fn max_size_megabytes(mut self, value: u64) -> Self {
        self.inner.max_size_megabytes = value;
        self
    }

    #[inline]
    pub fn default_message_time_to_live(mut self, value: Duration) -> Self {
        self.inner.default_message_time_to_live = value;
        self
    }

    #[inline]
    pub fn auto_delete_on_idle(mut self, value: Duration) -> Self {
        self.inner.auto_delete_on_idle = value;
        self
    }

    #[inline]
    pub fn requires_duplicate_detection(mut self, value: bool) -> Self {
        self.inner.requires_duplicate_detection = value;
        self
    }

    #[inline]
    pub fn duplicate_detection_window(mut self, value: Duration) -> Self {
        self.inner.duplicate_detection_window = value;
        self
    }

    #[inline]
    pub fn enable_batched_operations(mut self, value: bool) -> Self {
        self.inner.enable_batched_operations = value;
        self
    }

    #[inline]
    pub fn support_ordering(mut self, value: bool) -> Self {
        self.inner.support_ordering = value;
        self
    }

    #[inline]
    pub fn enable_filtering_before_publishing(mut self, value: bool) -> Self {
        self.inner.enable_filtering_before_publishing = value;
        self
    }

    #[inline]
    pub fn is_anonymous_accessible(mut self, value: bool) -> Self {
        self.inner.is_anonymous_accessible = value;
        self
    }

    #[inline]
    pub fn enable_partitioning(mut self, value: bool) -> Self {
        self.inner.enable_partitioning = value;
        self
    }

    #[inline]
    pub fn enable_express(mut self, value: bool) -> Self {
        self.inner.enable_express = value;
        self
    }

    #[inline]
    pub fn build(self) -> TopicDescriptor {
        self.inner
    }
}

/// Settings for a fresh topic, before defaulting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOptions {
    pub max_size_megabytes: Option<u64>,
    /// Seconds; unset or non-positive falls back to 14 days
    pub ttl_seconds: Option<i64>,
    pub enable_partitioning: bool,
    pub enable_duplicate_detection: bool,
    /// Seconds; unset or non-positive falls back to 30 seconds
    pub duplicate_detection_seconds: Option<i64>,
    pub dry_run: bool,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            max_size_megabytes: None,
            ttl_seconds: None,
            enable_partitioning: true,
            enable_duplicate_detection: false,
            duplicate_detection_seconds: None,
            dry_run: false,
        }
    }
}

impl CreateOptions {
    /// Build the descriptor for `path`, applying the create-time defaults
    pub fn to_descriptor(&self, path: &str) -> TopicDescriptor {
        let mut builder = TopicDescriptor::builder(path)
            .default_message_time_to_live(positive_secs(self.ttl_seconds).unwrap_or(DEFAULT_MESSAGE_TTL))
            .enable_partitioning(self.enable_partitioning);

        if let Some(max_size) = self.max_size_megabytes {
            builder = builder.max_size_megabytes(max_size);
        }

        if self.enable_duplicate_detection {
            builder = builder.requires_duplicate_detection(true).duplicate_detection_window(
                positive_secs(self.duplicate_detection_seconds).unwrap_or(DEFAULT_DUPLICATE_DETECTION_WINDOW),
            );
        }

        builder.build()
    }
}

fn positive_secs(value: Option<i64>) -> Option<Duration> {
    value.filter(|secs| *secs > 0).map(|secs| Duration::from_secs(secs as u64))
}

/// Options for delete
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteOptions {
    pub dry_run: bool,
}

/// Options for migrate
///
/// Migration deletes each topic before recreating it. If the process dies in
/// between, the topic and its messages are gone. A live run therefore has to
/// set `accept_data_loss`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrateOptions {
    pub dry_run: bool,
    pub accept_data_loss: bool,
}

/// Durations as seconds on the wire.
///
/// Whole values are written as integers. A sub-second remainder is written
/// as a fractional number, and a value a double cannot carry exactly is a
/// serialization error rather than a silent truncation.
pub(crate) mod duration_secs {
    use std::fmt;
    use std::time::Duration;

    use serde::de;
    use serde::de::Visitor;
    use serde::ser;
    use serde::Deserializer;
    use serde::Serializer;

    const NANOS_PER_SEC: f64 = 1_000_000_000.0;

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.subsec_nanos() == 0 {
            return serializer.serialize_u64(value.as_secs());
        }
        let secs = value.as_secs_f64();
        if from_fractional(secs) != Some(*value) {
            return Err(ser::Error::custom(format!(
                "duration {value:?} cannot be written exactly as seconds"
            )));
        }
        serializer.serialize_f64(secs)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SecondsVisitor)
    }

    fn from_fractional(secs: f64) -> Option<Duration> {
        if !secs.is_finite() || secs < 0.0 || secs >= u64::MAX as f64 {
            return None;
        }
        let whole = secs.trunc();
        let nanos = ((secs - whole) * NANOS_PER_SEC).round();
        if nanos >= NANOS_PER_SEC {
            return Some(Duration::from_secs(whole as u64 + 1));
        }
        Some(Duration::new(whole as u64, nanos as u32))
    }

    struct SecondsVisitor;

    impl Visitor<'_> for SecondsVisitor {
        type Value = Duration;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative number of seconds")
        }

        fn visit_u64<E: de::Error>(self, secs: u64) -> Result<Duration, E> {
            Ok(Duration::from_secs(secs))
        }

        fn visit_i64<E: de::Error>(self, secs: i64) -> Result<Duration, E> {
            u64::try_from(secs)
                .map(Duration::from_secs)
                .map_err(|_| E::invalid_value(de::Unexpected::Signed(secs), &self))
        }

        fn visit_f64<E: de::Error>(self, secs: f64) -> Result<Duration, E> {
            from_fractional(secs).ok_or_else(|| E::invalid_value(de::Unexpected::Float(secs), &self))
        }
    }
}
