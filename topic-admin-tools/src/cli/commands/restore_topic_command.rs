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

//! Restore topic command - CLI layer

use std::path::PathBuf;

use clap::Parser;

use crate::cli::commands::print_report;
use crate::cli::validators;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::commands::ExitStatus;
use crate::core::backup;
use crate::core::TopicAdminResult;
use crate::ui::output;
use crate::ui::progress;

#[derive(Debug, Clone, Parser)]
pub struct RestoreTopicCommand {
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(short = 'f', long = "file", required = true, help = "Backup file to read")]
    file: PathBuf,

    #[arg(
        short = 'p',
        long = "pattern",
        required = true,
        num_args = 1..,
        help = "Patterns selecting the topics to restore ('*' and '?' allowed)"
    )]
    patterns: Vec<String>,

    #[arg(long = "dry-run", help = "Log what would be restored without creating anything")]
    dry_run: bool,
}

impl CommandExecute for RestoreTopicCommand {
    async fn execute(&self) -> TopicAdminResult<ExitStatus> {
        validators::validate_patterns(&self.patterns)?;
        let context = self.common_args.open().await?;

        output::print_operation_start(&format!(
            "Restoring topics from '{}' into namespace '{}'",
            self.file.display(),
            context.namespace()
        ));
        let spinner = progress::create_spinner("Restoring topics...");
        let reconciler = context.reconciler();
        let restored = backup::restore(&reconciler, &self.patterns, &self.file, &context.codec, self.dry_run).await;
        spinner.finish_and_clear();
        let report = restored?;

        print_report(&report);
        Ok(ExitStatus::from(&report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parsing() {
        let cmd =
            RestoreTopicCommand::try_parse_from(["restore", "-f", "/tmp/out.json", "-p", "A", "orders-*", "--dry-run"])
                .unwrap();
        assert_eq!(cmd.file, PathBuf::from("/tmp/out.json"));
        assert_eq!(cmd.patterns, vec!["A", "orders-*"]);
        assert!(cmd.dry_run);
    }

    #[test]
    fn test_command_requires_file() {
        assert!(RestoreTopicCommand::try_parse_from(["restore", "-p", "A"]).is_err());
    }
}
