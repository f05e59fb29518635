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

//! CLI commands module
//!
//! Thin wrappers around the core engine. Each command handles:
//! - Argument parsing (clap)
//! - Input validation
//! - Confirmation of destructive operations
//! - Output formatting

mod backup_topic_command;
mod create_topic_command;
mod delete_topic_command;
mod migrate_topic_command;
mod restore_topic_command;
mod topic_list_command;

pub use self::backup_topic_command::BackupTopicCommand;
pub use self::create_topic_command::CreateTopicCommand;
pub use self::delete_topic_command::DeleteTopicCommand;
pub use self::migrate_topic_command::MigrateTopicCommand;
pub use self::restore_topic_command::RestoreTopicCommand;
pub use self::topic_list_command::TopicListCommand;

use tabled::settings::Style;
use tabled::Table;

use crate::core::report::OperationReport;
use crate::ui::output;

/// Per-item table followed by the summary line
pub(crate) fn print_report(report: &OperationReport) {
    if report.items.is_empty() {
        output::print_empty_result("matching topics");
    } else {
        let mut table = Table::new(report.rows());
        table.with(Style::modern());
        println!("{table}");
    }
    output::print_report_summary(report);
}
