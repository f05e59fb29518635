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

use topic_admin_common::SerdeJsonUtils;
use topic_admin_error::TopicAdminError;

use super::record::TopicRecord;
use crate::core::TopicAdminResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Indent the written document
    pub pretty: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Reads and writes backup documents: a JSON array of [`TopicRecord`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct TopicRecordCodec {
    config: CodecConfig,
}

impl TopicRecordCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn encode(&self, records: &[TopicRecord]) -> TopicAdminResult<String> {
        if self.config.pretty {
            SerdeJsonUtils::to_json_pretty(&records)
        } else {
            SerdeJsonUtils::to_json(&records)
        }
    }

    /// Parse a backup document.
    ///
    /// `source` names the document in the error when it cannot be parsed.
    pub fn decode(&self, source: &str, text: &str) -> TopicAdminResult<Vec<TopicRecord>> {
        SerdeJsonUtils::from_json_str(text).map_err(|e| TopicAdminError::open_error(source, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use topic_admin_error::ErrorCategory;

    use super::*;
    use crate::core::topic::TopicDescriptor;

    fn records() -> Vec<TopicRecord> {
        vec![
            TopicRecord::from(&TopicDescriptor::new("A")),
            TopicRecord::from(&TopicDescriptor::builder("B").enable_partitioning(true).build()),
        ]
    }

    #[test]
    fn compact_and_pretty_decode_alike() {
        let pretty = TopicRecordCodec::default().encode(&records()).unwrap();
        let compact = TopicRecordCodec::new(CodecConfig { pretty: false })
            .encode(&records())
            .unwrap();

        assert!(pretty.contains('\n'));
        assert!(!compact.contains('\n'));

        let codec = TopicRecordCodec::default();
        assert_eq!(codec.decode("pretty", &pretty).unwrap(), records());
        assert_eq!(codec.decode("compact", &compact).unwrap(), records());
    }

    #[test]
    fn missing_field_is_an_open_error() {
        let text = r#"[{"path":"A","maxSizeMegabytes":1024}]"#;
        let err = TopicRecordCodec::default().decode("backup.json", text).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::OpenError);
        assert!(err.to_string().contains("backup.json"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut value = serde_json::to_value(records()).unwrap();
        value[0]["lockDuration"] = serde_json::json!(60);
        let text = value.to_string();
        assert!(TopicRecordCodec::default().decode("backup.json", &text).is_err());
    }
}
