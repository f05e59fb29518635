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

use clap::Subcommand;

use crate::cli::commands::BackupTopicCommand;
use crate::cli::commands::CreateTopicCommand;
use crate::cli::commands::DeleteTopicCommand;
use crate::cli::commands::MigrateTopicCommand;
use crate::cli::commands::RestoreTopicCommand;
use crate::cli::commands::TopicListCommand;
use crate::commands::CommandExecute;
use crate::commands::ExitStatus;
use crate::core::TopicAdminResult;

#[derive(Subcommand)]
pub enum TopicCommands {
    #[command(
        name = "list",
        about = "List topics",
        long_about = r#"List the topics of a namespace. Paths given with -p are compared exactly;
patterns given with --match may use '*' and '?' and are compared case-insensitively."#
    )]
    List(TopicListCommand),

    #[command(
        name = "create",
        about = "Create topics",
        long_about = r#"Create one topic per path. Topics that already exist are skipped with a warning
and never modified."#
    )]
    Create(CreateTopicCommand),

    #[command(
        name = "delete",
        about = "Delete topics",
        long_about = r#"Delete one topic per path. Paths that do not exist are skipped with a warning."#
    )]
    Delete(DeleteTopicCommand),

    #[command(
        name = "migrate",
        about = "Recreate topics with partitioning enabled",
        long_about = r#"Partitioning cannot be changed on a live topic. Every matched topic without
partitioning is deleted and recreated with partitioning enabled and all other
attributes preserved. Messages in a migrated topic are lost, and a topic whose
recreation fails stays deleted."#
    )]
    Migrate(MigrateTopicCommand),

    #[command(
        name = "backup",
        about = "Back up topic configuration",
        long_about = r#"Write the configuration of every topic matched by the patterns to a JSON file.
An existing file is overwritten."#
    )]
    Backup(BackupTopicCommand),

    #[command(
        name = "restore",
        about = "Restore topics from a backup",
        long_about = r#"Create the topics of a backup file whose path is matched by the patterns.
Topics that already exist are skipped."#
    )]
    Restore(RestoreTopicCommand),
}

impl CommandExecute for TopicCommands {
    async fn execute(&self) -> TopicAdminResult<ExitStatus> {
        match self {
            TopicCommands::List(cmd) => cmd.execute().await,
            TopicCommands::Create(cmd) => cmd.execute().await,
            TopicCommands::Delete(cmd) => cmd.execute().await,
            TopicCommands::Migrate(cmd) => cmd.execute().await,
            TopicCommands::Backup(cmd) => cmd.execute().await,
            TopicCommands::Restore(cmd) => cmd.execute().await,
        }
    }
}
