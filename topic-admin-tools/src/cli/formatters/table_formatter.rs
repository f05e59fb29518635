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

//! Table formatter
//!
//! One row per topic with the attributes operators look at most.

use tabled::settings::object::Rows;
use tabled::settings::themes::Colorization;
use tabled::settings::Color;
use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

use super::TopicFormatter;
use crate::core::topic::TopicDescriptor;

pub struct TableFormatter;

impl TopicFormatter for TableFormatter {
    fn format(&self, topics: &[TopicDescriptor]) -> String {
        let mut table = Table::new(topics.iter().map(TopicRow::from));
        table.with(Style::modern());
        table.with(Colorization::exact([Color::FG_CYAN], Rows::first()));
        table.to_string()
    }
}

#[derive(Debug, Clone, Tabled)]
struct TopicRow {
    #[tabled(rename = "Topic")]
    path: String,
    #[tabled(rename = "Max Size (MB)")]
    max_size_megabytes: u64,
    #[tabled(rename = "TTL")]
    ttl: String,
    #[tabled(rename = "Partitioned")]
    partitioned: bool,
    #[tabled(rename = "Duplicate Detection")]
    duplicate_detection: String,
    #[tabled(rename = "Ordering")]
    ordering: bool,
}

impl From<&TopicDescriptor> for TopicRow {
    fn from(topic: &TopicDescriptor) -> Self {
        let duplicate_detection = if topic.requires_duplicate_detection {
            format!("{:?}", topic.duplicate_detection_window)
        } else {
            "off".to_string()
        };
        Self {
            path: topic.path.clone(),
            max_size_megabytes: topic.max_size_megabytes,
            ttl: format!("{:?}", topic.default_message_time_to_live),
            partitioned: topic.enable_partitioning,
            duplicate_detection,
            ordering: topic.support_ordering,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_table_formatter_rows() {
        let topics = vec![
            TopicDescriptor::builder("orders").enable_partitioning(true).build(),
            TopicDescriptor::new("payments"),
        ];
        let output = TableFormatter.format(&topics);
        assert!(output.contains("Topic"));
        assert!(output.contains("orders"));
        assert!(output.contains("payments"));
        assert!(output.contains("false"));
    }

    #[test]
    fn test_duplicate_detection_column() {
        let topic = TopicDescriptor::builder("orders")
            .requires_duplicate_detection(true)
            .build();
        assert_eq!(TopicRow::from(&topic).duplicate_detection, "30s");
        assert_eq!(TopicRow::from(&TopicDescriptor::new("A")).duplicate_detection, "off");
    }

    #[test]
    fn test_ttl_keeps_sub_second_precision() {
        let topic = TopicDescriptor::builder("orders")
            .default_message_time_to_live(Duration::from_millis(1500))
            .build();
        assert_eq!(TopicRow::from(&topic).ttl, "1.5s");
    }
}
