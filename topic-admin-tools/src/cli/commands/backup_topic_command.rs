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

//! Backup topic command - CLI layer

use std::path::PathBuf;

use clap::Parser;

use crate::cli::validators;
use crate::commands::CommandExecute;
use crate::commands::CommonArgs;
use crate::commands::ExitStatus;
use crate::core::backup;
use crate::core::TopicAdminResult;
use crate::ui::output;
use crate::ui::progress;

#[derive(Debug, Clone, Parser)]
pub struct BackupTopicCommand {
    #[command(flatten)]
    common_args: CommonArgs,

    #[arg(short = 'f', long = "file", required = true, help = "Backup file to write")]
    file: PathBuf,

    #[arg(
        short = 'p',
        long = "pattern",
        required = true,
        num_args = 1..,
        help = "Topic patterns to back up ('*' and '?' allowed)"
    )]
    patterns: Vec<String>,
}

impl CommandExecute for BackupTopicCommand {
    async fn execute(&self) -> TopicAdminResult<ExitStatus> {
        validators::validate_patterns(&self.patterns)?;
        let context = self.common_args.open().await?;

        output::print_operation_start(&format!("Backing up topics of namespace '{}'", context.namespace()));
        let spinner = progress::create_spinner("Writing backup...");
        match backup::backup(&context.registry, &self.patterns, &self.file, &context.codec).await {
            Ok(report) => {
                progress::finish_progress_success(&spinner, "Backup written");
                if report.records.is_empty() {
                    output::print_empty_result("matching topics");
                }
                output::print_success(&format!(
                    "Wrote {} to '{}'",
                    output::format_count(report.records.len(), "topic", "topics"),
                    report.file.display()
                ));
                Ok(ExitStatus::Success)
            }
            Err(e) => {
                progress::finish_progress_error(&spinner, "Backup failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parsing() {
        let cmd = BackupTopicCommand::try_parse_from(["backup", "-f", "/tmp/out.json", "-p", "*"]).unwrap();
        assert_eq!(cmd.file, PathBuf::from("/tmp/out.json"));
        assert_eq!(cmd.patterns, vec!["*"]);
    }

    #[test]
    fn test_command_requires_file_and_pattern() {
        assert!(BackupTopicCommand::try_parse_from(["backup", "-p", "*"]).is_err());
        assert!(BackupTopicCommand::try_parse_from(["backup", "-f", "/tmp/out.json"]).is_err());
    }
}
