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

//! Create topic command - CLI layer

use clap::Parser;

use crate::cli::commands::print_report;
use crate::cli::validators;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::commands::ExitStatus;
use crate::core::topic::CreateOptions;
use crate::core::TopicAdminResult;
use crate::ui::output;
use crate::ui::progress;

#[derive(Debug, Clone, Parser)]
pub struct CreateTopicCommand {
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(short = 'p', long = "path", required = true, num_args = 1.., help = "Topic paths to create")]
    paths: Vec<String>,

    #[arg(long = "max-size", value_name = "MB", help = "Maximum topic size in megabytes")]
    max_size: Option<u64>,

    #[arg(
        long = "ttl",
        value_name = "SECS",
        allow_negative_numbers = true,
        help = "Default message time-to-live; unset or non-positive means 14 days"
    )]
    ttl: Option<i64>,

    #[arg(long = "no-partitioning", help = "Create the topics without partitioning")]
    no_partitioning: bool,

    #[arg(long = "duplicate-detection", help = "Enable duplicate detection")]
    duplicate_detection: bool,

    #[arg(
        long = "duplicate-window",
        value_name = "SECS",
        allow_negative_numbers = true,
        requires = "duplicate_detection",
        help = "Duplicate detection window; unset or non-positive means 30 seconds"
    )]
    duplicate_window: Option<i64>,

    #[arg(long = "dry-run", help = "Log what would be created without creating anything")]
    dry_run: bool,
}

impl CreateTopicCommand {
    fn options(&self) -> CreateOptions {
        CreateOptions {
            max_size_megabytes: self.max_size,
            ttl_seconds: self.ttl,
            enable_partitioning: !self.no_partitioning,
            enable_duplicate_detection: self.duplicate_detection,
            duplicate_detection_seconds: self.duplicate_window,
            dry_run: self.dry_run,
        }
    }
}

impl CommandExecute for CreateTopicCommand {
    async fn execute(&self) -> TopicAdminResult<ExitStatus> {
        validators::validate_topic_paths(&self.paths)?;
        let context = self.common_args.open().await?;

        output::print_operation_start(&format!(
            "Creating {} in namespace '{}'",
            output::format_count(self.paths.len(), "topic", "topics"),
            context.namespace()
        ));
        let spinner = progress::create_spinner("Creating topics...");
        let report = context.reconciler().create(&self.paths, &self.options()).await;
        spinner.finish_and_clear();

        print_report(&report);
        Ok(ExitStatus::from(&report))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_command_parsing() {
        let cmd = CreateTopicCommand::try_parse_from(["create", "-p", "orders", "payments"]).unwrap();
        assert_eq!(cmd.paths, vec!["orders", "payments"]);

        let options = cmd.options();
        assert!(options.enable_partitioning);
        assert!(!options.enable_duplicate_detection);
        assert!(!options.dry_run);
    }

    #[test]
    fn test_command_requires_path() {
        assert!(CreateTopicCommand::try_parse_from(["create", "--max-size", "2048"]).is_err());
    }

    #[test]
    fn test_command_with_all_flags() {
        let cmd = CreateTopicCommand::try_parse_from([
            "create",
            "-p",
            "orders",
            "--max-size",
            "2048",
            "--ttl",
            "600",
            "--no-partitioning",
            "--duplicate-detection",
            "--duplicate-window",
            "90",
            "--dry-run",
        ])
        .unwrap();

        let options = cmd.options();
        assert!(options.dry_run);
        let topic = options.to_descriptor("orders");
        assert_eq!(topic.max_size_megabytes, 2048);
        assert_eq!(topic.default_message_time_to_live, Duration::from_secs(600));
        assert!(!topic.enable_partitioning);
        assert!(topic.requires_duplicate_detection);
        assert_eq!(topic.duplicate_detection_window, Duration::from_secs(90));
    }

    #[test]
    fn test_negative_ttl_falls_back_to_default() {
        let cmd = CreateTopicCommand::try_parse_from(["create", "-p", "orders", "--ttl", "-1"]).unwrap();
        let topic = cmd.options().to_descriptor("orders");
        assert_eq!(topic.default_message_time_to_live, Duration::from_secs(1_209_600));
    }

    #[test]
    fn test_duplicate_window_requires_detection() {
        let cmd = CreateTopicCommand::try_parse_from(["create", "-p", "orders", "--duplicate-window", "90"]);
        assert!(cmd.is_err());
    }
}
