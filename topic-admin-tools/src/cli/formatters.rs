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

//! Rendering of topic listings for the terminal
//!
//! `topic list -o <format>` picks one of the formatters below. Table is the
//! default; JSON and YAML emit the same field names as a backup file.

mod json_formatter;
mod table_formatter;
mod yaml_formatter;

pub use json_formatter::JsonFormatter;
pub use table_formatter::TableFormatter;
pub use yaml_formatter::YamlFormatter;

use crate::core::topic::TopicDescriptor;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

/// Unknown names fall back to the table
impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "yaml" | "yml" => Self::Yaml,
            _ => Self::Table,
        }
    }
}

impl OutputFormat {
    pub fn render(self, topics: &[TopicDescriptor]) -> String {
        match self {
            Self::Table => TableFormatter.format(topics),
            Self::Json => JsonFormatter.format(topics),
            Self::Yaml => YamlFormatter.format(topics),
        }
    }
}

/// Turns a topic listing into printable text
pub trait TopicFormatter {
    fn format(&self, topics: &[TopicDescriptor]) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("yml"), OutputFormat::Yaml);
        assert_eq!(OutputFormat::from("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::from("unknown"), OutputFormat::Table);
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let topics = vec![TopicDescriptor::new("orders")];
        assert!(OutputFormat::Json.render(&topics).starts_with('['));
        assert!(OutputFormat::Yaml.render(&topics).contains("path: orders"));
        assert!(OutputFormat::Table.render(&topics).contains("Max Size (MB)"));
    }
}
