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

use clap::Parser;

use crate::cli::formatters::OutputFormat;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::commands::ExitStatus;
use crate::core::TopicAdminResult;
use crate::ui::output;
use crate::ui::progress;

/// List topics
#[derive(Debug, Clone, Parser)]
pub struct TopicListCommand {
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(short = 'p', long = "path", num_args = 1.., help = "Only these exact topic paths")]
    paths: Vec<String>,

    #[arg(
        long = "match",
        num_args = 1..,
        conflicts_with = "paths",
        help = "Only topics matching these patterns ('*' and '?' allowed)"
    )]
    patterns: Vec<String>,

    #[arg(short = 'o', long = "output", default_value = "table", help = "Output format: table, json or yaml")]
    output: String,
}

impl CommandExecute for TopicListCommand {
    async fn execute(&self) -> TopicAdminResult<ExitStatus> {
        let context = self.common_args.open().await?;
        let format = OutputFormat::from(self.output.as_str());

        let spinner = progress::create_spinner("Fetching topics...");
        let listed = if self.patterns.is_empty() {
            context.reconciler().list(&self.paths).await
        } else {
            context.reconciler().list_matching(&self.patterns).await
        };
        spinner.finish_and_clear();
        let topics = listed?;

        if topics.is_empty() {
            output::print_empty_result("topics");
            return Ok(ExitStatus::Success);
        }

        if format == OutputFormat::Table {
            output::print_header(&format!("Topics in namespace '{}'", context.namespace()));
            println!("{}", format.render(&topics));
            output::print_info(&format!(
                "Found {}",
                output::format_count(topics.len(), "topic", "topics")
            ));
        } else {
            println!("{}", format.render(&topics));
        }

        Ok(ExitStatus::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parsing() {
        let cmd = TopicListCommand::try_parse_from(["list"]).unwrap();
        assert!(cmd.paths.is_empty());
        assert!(cmd.patterns.is_empty());
        assert_eq!(cmd.output, "table");
    }

    #[test]
    fn test_command_with_paths_and_output() {
        let cmd = TopicListCommand::try_parse_from(["list", "-p", "A", "B", "-o", "json"]).unwrap();
        assert_eq!(cmd.paths, vec!["A", "B"]);
        assert_eq!(OutputFormat::from(cmd.output.as_str()), OutputFormat::Json);
    }

    #[test]
    fn test_paths_conflict_with_patterns() {
        let cmd = TopicListCommand::try_parse_from(["list", "-p", "A", "--match", "orders-*"]);
        assert!(cmd.is_err());
    }
}
