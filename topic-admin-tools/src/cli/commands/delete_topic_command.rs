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

//! Delete topic command - CLI layer

use clap::Parser;

use crate::cli::commands::print_report;
use crate::cli::validators;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::commands::ExitStatus;
use crate::core::topic::DeleteOptions;
use crate::core::TopicAdminResult;
use crate::ui::output;
use crate::ui::progress;
use crate::ui::prompt;

#[derive(Debug, Clone, Parser)]
pub struct DeleteTopicCommand {
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(short = 'p', long = "path", required = true, num_args = 1.., help = "Topic paths to delete")]
    paths: Vec<String>,

    #[arg(long = "dry-run", help = "Log what would be deleted without deleting anything")]
    dry_run: bool,
}

impl CommandExecute for DeleteTopicCommand {
    async fn execute(&self) -> TopicAdminResult<ExitStatus> {
        validators::validate_topic_paths(&self.paths)?;
        let context = self.common_args.open().await?;

        if !self.dry_run && !self.common_args.skip_confirm {
            let target = format!(
                "{} from namespace '{}'",
                output::format_count(self.paths.len(), "topic", "topics"),
                context.namespace()
            );
            if !prompt::confirm_dangerous_operation("delete", &target) {
                output::print_warning("Operation cancelled by user");
                return Ok(ExitStatus::Success);
            }
        }

        output::print_operation_start(&format!("Deleting topics from namespace '{}'", context.namespace()));
        let spinner = progress::create_spinner("Deleting topics...");
        let report = context
            .reconciler()
            .delete(&self.paths, DeleteOptions { dry_run: self.dry_run })
            .await;
        if report.is_success() {
            progress::finish_progress_success(&spinner, "Done");
        } else {
            progress::finish_progress_error(&spinner, "Some deletions failed");
        }

        print_report(&report);
        Ok(ExitStatus::from(&report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parsing() {
        let cmd = DeleteTopicCommand::try_parse_from(["delete", "-p", "A", "B"]).unwrap();
        assert_eq!(cmd.paths, vec!["A", "B"]);
        assert!(!cmd.dry_run);
        assert!(!cmd.common_args.skip_confirm);
    }

    #[test]
    fn test_command_requires_path() {
        assert!(DeleteTopicCommand::try_parse_from(["delete"]).is_err());
    }

    #[test]
    fn test_command_with_yes_flag() {
        let cmd = DeleteTopicCommand::try_parse_from(["delete", "-p", "A", "--yes", "--dry-run"]).unwrap();
        assert!(cmd.common_args.skip_confirm);
        assert!(cmd.dry_run);
    }
}
