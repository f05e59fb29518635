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

//! Migrate topic command - CLI layer

use clap::Parser;

use crate::cli::commands::print_report;
use crate::cli::validators;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::commands::ExitStatus;
use crate::core::topic::MigrateOptions;
use crate::core::TopicAdminResult;
use crate::ui::output;
use crate::ui::progress;
use crate::ui::prompt;

#[derive(Debug, Clone, Parser)]
pub struct MigrateTopicCommand {
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(
        short = 'p',
        long = "pattern",
        required = true,
        num_args = 1..,
        help = "Topic patterns to migrate ('*' and '?' allowed)"
    )]
    patterns: Vec<String>,

    #[arg(long = "dry-run", help = "Log what would be recreated without touching any topic")]
    dry_run: bool,
}

impl MigrateTopicCommand {
    /// Live runs need the data-loss risk accepted, by `--yes` or at the prompt
    fn options(&self, namespace: &str) -> Option<MigrateOptions> {
        if self.dry_run {
            return Some(MigrateOptions {
                dry_run: true,
                accept_data_loss: false,
            });
        }

        let accepted = self.common_args.skip_confirm || {
            let target = format!(
                "every unpartitioned topic matching {} in namespace '{namespace}', discarding their messages",
                self.patterns.join(", ")
            );
            output::print_warning("A topic whose recreation fails stays deleted.");
            prompt::confirm_dangerous_operation("delete and recreate", &target)
        };

        accepted.then_some(MigrateOptions {
            dry_run: false,
            accept_data_loss: true,
        })
    }
}

impl CommandExecute for MigrateTopicCommand {
    async fn execute(&self) -> TopicAdminResult<ExitStatus> {
        validators::validate_patterns(&self.patterns)?;
        let context = self.common_args.open().await?;

        let Some(options) = self.options(context.namespace()) else {
            output::print_warning("Operation cancelled by user");
            return Ok(ExitStatus::Success);
        };

        output::print_operation_start(&format!(
            "Migrating topics in namespace '{}' to partitioning",
            context.namespace()
        ));
        let spinner = progress::create_spinner("Recreating topics...");
        let migrated = context.reconciler().migrate(&self.patterns, options).await;
        spinner.finish_and_clear();
        let report = migrated?;

        print_report(&report);
        Ok(ExitStatus::from(&report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parsing() {
        let cmd = MigrateTopicCommand::try_parse_from(["migrate", "-p", "orders-*", "A"]).unwrap();
        assert_eq!(cmd.patterns, vec!["orders-*", "A"]);
        assert!(!cmd.dry_run);
    }

    #[test]
    fn test_command_requires_pattern() {
        assert!(MigrateTopicCommand::try_parse_from(["migrate", "--dry-run"]).is_err());
    }

    #[test]
    fn test_dry_run_needs_no_acceptance() {
        let cmd = MigrateTopicCommand::try_parse_from(["migrate", "-p", "A", "--dry-run"]).unwrap();
        let options = cmd.options("test-ns").unwrap();
        assert!(options.dry_run);
        assert!(!options.accept_data_loss);
    }

    #[test]
    fn test_yes_flag_accepts_data_loss() {
        let cmd = MigrateTopicCommand::try_parse_from(["migrate", "-p", "A", "-y"]).unwrap();
        let options = cmd.options("test-ns").unwrap();
        assert!(!options.dry_run);
        assert!(options.accept_data_loss);
    }
}
