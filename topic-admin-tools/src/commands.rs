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

mod topic_commands;

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;
use topic_admin_common::log;
use tracing::debug;

use crate::core::backup::TopicRecordCodec;
use crate::core::config::AdminConfig;
use crate::core::registry::SnapshotTopicRegistry;
use crate::core::registry::TopicRegistry;
use crate::core::report::OperationReport;
use crate::core::topic::Reconciler;
use crate::core::topic::VerifyPolicy;
use crate::core::TopicAdminResult;

/// How a command finished once it ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// At least one item of the batch failed
    Failure,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
        }
    }
}

impl From<&OperationReport> for ExitStatus {
    fn from(report: &OperationReport) -> Self {
        if report.is_success() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

/// A trait that defines the execution behavior for commands.
///
/// Per-item failures are reported through [`ExitStatus::Failure`]; an `Err`
/// means the command could not run at all (bad input, unreadable files, the
/// namespace could not be opened).
#[allow(async_fn_in_trait)]
pub trait CommandExecute {
    async fn execute(&self) -> TopicAdminResult<ExitStatus>;
}

#[derive(Debug, Parser, Clone, Default)]
pub struct CommonArgs {
    /// Namespace to operate on
    #[arg(short = 'n', long = "namespace", help = "Namespace to operate on (overrides the config file)")]
    pub namespace: Option<String>,

    #[arg(
        long = "namespace-file",
        value_name = "FILE",
        help = "Namespace snapshot file backing the registry, default '<namespace>.json'"
    )]
    pub namespace_file: Option<PathBuf>,

    #[arg(short = 'c', long = "config", value_name = "FILE", help = "Admin configuration file (toml, json or yaml)")]
    pub config: Option<PathBuf>,

    #[arg(
        long = "verify-attempts",
        value_name = "N",
        help = "Existence checks after each create or delete before reporting failure"
    )]
    pub verify_attempts: Option<u32>,

    #[arg(short = 'v', long = "verbose", help = "Log every decision at debug level")]
    pub verbose: bool,

    /// Skip confirmation prompts (automatically answer 'yes')
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation prompts for dangerous operations"
    )]
    pub skip_confirm: bool,
}

impl CommonArgs {
    /// Initialize logging, load the configuration and open the namespace.
    pub async fn open(&self) -> TopicAdminResult<CommandContext> {
        if self.verbose {
            log::init_logger_with_level(log::Level::DEBUG);
        } else {
            log::init_logger();
        }

        let config = self.resolve_config()?;
        let verify = match self.verify_attempts {
            Some(attempts) => VerifyPolicy::new(attempts, config.verify_policy().backoff),
            None => config.verify_policy(),
        };
        let file = config
            .namespace_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.json", config.namespace)));

        debug!("Opening namespace '{}' from '{}'", config.namespace, file.display());
        let registry = SnapshotTopicRegistry::open(file, config.namespace.clone()).await?;

        Ok(CommandContext {
            codec: TopicRecordCodec::new(config.codec_config()),
            config,
            registry,
            verify,
        })
    }

    /// The config file, with command-line flags layered on top
    fn resolve_config(&self) -> TopicAdminResult<AdminConfig> {
        let mut config = match &self.config {
            Some(file) => AdminConfig::load(file)?,
            None => AdminConfig::default(),
        };
        if let Some(namespace) = &self.namespace {
            config.namespace = namespace.clone();
        }
        if let Some(file) = &self.namespace_file {
            config.namespace_file = Some(file.clone());
        }
        Ok(config)
    }
}

/// Everything a topic command needs once its arguments are resolved
pub struct CommandContext {
    pub config: AdminConfig,
    pub registry: SnapshotTopicRegistry,
    pub verify: VerifyPolicy,
    pub codec: TopicRecordCodec,
}

impl CommandContext {
    pub fn reconciler(&self) -> Reconciler<'_, SnapshotTopicRegistry> {
        Reconciler::new(&self.registry).with_verify_policy(self.verify)
    }

    #[inline]
    pub fn namespace(&self) -> &str {
        self.registry.namespace()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(subcommand)]
    #[command(about = "Topic commands")]
    Topic(topic_commands::TopicCommands),

    #[command(about = "Category commands show")]
    Show(ClassificationTablePrint),
}

impl CommandExecute for Commands {
    async fn execute(&self) -> TopicAdminResult<ExitStatus> {
        match self {
            Commands::Topic(value) => value.execute().await,
            Commands::Show(value) => value.execute().await,
        }
    }
}

// ================for commands table print================
#[derive(Tabled, Clone)]
struct Command {
    #[tabled(rename = "Category")]
    category: &'static str,

    #[tabled(rename = "Command")]
    command: &'static str,

    #[tabled(rename = "Remark")]
    remark: &'static str,
}

#[derive(Parser)]
pub(crate) struct ClassificationTablePrint;

impl CommandExecute for ClassificationTablePrint {
    async fn execute(&self) -> TopicAdminResult<ExitStatus> {
        let commands: Vec<Command> = vec![
            Command {
                category: "Topic",
                command: "list",
                remark: "List topics by path or pattern.",
            },
            Command {
                category: "Topic",
                command: "create",
                remark: "Create topics.",
            },
            Command {
                category: "Topic",
                command: "delete",
                remark: "Delete topics.",
            },
            Command {
                category: "Topic",
                command: "migrate",
                remark: "Recreate topics with partitioning enabled.",
            },
            Command {
                category: "Topic",
                command: "backup",
                remark: "Write topic configuration to a file.",
            },
            Command {
                category: "Topic",
                command: "restore",
                remark: "Recreate topics from a backup file.",
            },
        ];
        let mut table = Table::new(commands);
        table.with(Style::extended());
        println!("{table}");
        Ok(ExitStatus::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::ItemOutcome;
    use crate::core::report::Operation;
    use crate::core::TopicAdminError;

    #[test]
    fn test_common_args_parsing() {
        let args = CommonArgs::try_parse_from([
            "common",
            "-n",
            "orders-prod",
            "--namespace-file",
            "/tmp/orders-prod.json",
            "--verify-attempts",
            "5",
            "-v",
            "-y",
        ])
        .unwrap();
        assert_eq!(args.namespace.as_deref(), Some("orders-prod"));
        assert_eq!(args.namespace_file, Some(PathBuf::from("/tmp/orders-prod.json")));
        assert_eq!(args.verify_attempts, Some(5));
        assert!(args.verbose);
        assert!(args.skip_confirm);
    }

    #[test]
    fn test_flags_override_config() {
        let args = CommonArgs {
            namespace: Some("orders-prod".to_string()),
            ..CommonArgs::default()
        };
        let config = args.resolve_config().unwrap();
        assert_eq!(config.namespace, "orders-prod");
        assert_eq!(config.namespace_file, None);
    }

    #[test]
    fn test_exit_status_from_report() {
        let mut report = OperationReport::new(Operation::Create, "test-ns");
        report.record("A", Some("A"), ItemOutcome::Succeeded);
        assert_eq!(ExitStatus::from(&report), ExitStatus::Success);

        report.record("B", Some("B"), ItemOutcome::Failed(TopicAdminError::create_not_visible("B")));
        assert_eq!(ExitStatus::from(&report).code(), 1);
    }

    #[tokio::test]
    async fn test_open_uses_namespace_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("ns.json");
        let args = CommonArgs {
            namespace: Some("orders-prod".to_string()),
            namespace_file: Some(file.clone()),
            verify_attempts: Some(1),
            ..CommonArgs::default()
        };

        let context = args.open().await.unwrap();
        assert_eq!(context.namespace(), "orders-prod");
        assert_eq!(context.registry.file(), file.as_path());
        assert_eq!(context.verify.attempts, 1);
    }
}
