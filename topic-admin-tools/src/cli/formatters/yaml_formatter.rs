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

//! YAML formatter

use super::TopicFormatter;
use crate::core::topic::TopicDescriptor;

pub struct YamlFormatter;

impl TopicFormatter for YamlFormatter {
    fn format(&self, topics: &[TopicDescriptor]) -> String {
        serde_yaml::to_string(topics).unwrap_or_else(|e| format!("error: failed to format as YAML: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_formatter() {
        let topic = TopicDescriptor::builder("orders").max_size_megabytes(2048).build();
        let output = YamlFormatter.format(&[topic]);
        assert!(output.contains("path: orders"));
        assert!(output.contains("maxSizeMegabytes: 2048"));
    }
}
