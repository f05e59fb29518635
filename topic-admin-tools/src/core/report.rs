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

//! Per-item result sets
//!
//! Every operation reports one entry per pattern/topic it touched instead of
//! a single pass/fail. Skips are warnings; only `Failed` entries make an
//! operation unsuccessful.

use std::fmt;

use serde::Serialize;
use tabled::Tabled;

use crate::core::TopicAdminError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operation {
    Create,
    Delete,
    Migrate,
    Restore,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Create => "create",
            Operation::Delete => "delete",
            Operation::Migrate => "migrate",
            Operation::Restore => "restore",
        };
        f.pad(name)
    }
}

/// Why an item was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// Target absent (or pattern matched nothing)
    NotFound,
    /// Target already present
    AlreadyExists,
    /// Migration not needed
    AlreadyPartitioned,
    /// Handled by an earlier, overlapping pattern
    DuplicateMatch,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::NotFound => "not found",
            SkipReason::AlreadyExists => "already exists",
            SkipReason::AlreadyPartitioned => "already partitioned",
            SkipReason::DuplicateMatch => "matched by an earlier pattern",
        };
        f.pad(text)
    }
}

#[derive(Debug)]
pub enum ItemOutcome {
    Succeeded,
    /// Intended mutation logged, not issued
    DryRun,
    Skipped(SkipReason),
    Failed(TopicAdminError),
}

impl ItemOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            ItemOutcome::Succeeded => "succeeded",
            ItemOutcome::DryRun => "dry-run",
            ItemOutcome::Skipped(_) => "skipped",
            ItemOutcome::Failed(_) => "failed",
        }
    }
}

#[derive(Debug)]
pub struct ItemReport {
    /// The pattern (or literal path) the item came from
    pub pattern: String,
    /// The matched topic; `None` when a pattern matched nothing
    pub topic: Option<String>,
    pub outcome: ItemOutcome,
}

/// Flat view of an item for table/JSON/YAML output
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct ItemRow {
    #[tabled(rename = "Pattern")]
    pub pattern: String,
    #[tabled(rename = "Topic")]
    pub topic: String,
    #[tabled(rename = "Outcome")]
    pub outcome: String,
    #[tabled(rename = "Detail")]
    pub detail: String,
}

impl From<&ItemReport> for ItemRow {
    fn from(item: &ItemReport) -> Self {
        let detail = match &item.outcome {
            ItemOutcome::Succeeded | ItemOutcome::DryRun => String::new(),
            ItemOutcome::Skipped(reason) => reason.to_string(),
            ItemOutcome::Failed(error) => format!("[{}] {error}", error.category()),
        };
        Self {
            pattern: item.pattern.clone(),
            topic: item.topic.clone().unwrap_or_default(),
            outcome: item.outcome.label().to_string(),
            detail,
        }
    }
}

#[derive(Debug)]
pub struct OperationReport {
    pub operation: Operation,
    pub namespace: String,
    pub items: Vec<ItemReport>,
}

impl OperationReport {
    pub fn new(operation: Operation, namespace: impl Into<String>) -> Self {
        Self {
            operation,
            namespace: namespace.into(),
            items: Vec::new(),
        }
    }

    pub fn record(&mut self, pattern: &str, topic: Option<&str>, outcome: ItemOutcome) {
        self.items.push(ItemReport {
            pattern: pattern.to_string(),
            topic: topic.map(str::to_string),
            outcome,
        });
    }

    pub fn succeeded(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Succeeded))
    }

    pub fn dry_runs(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::DryRun))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Failed(_)))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&ItemReport, &TopicAdminError)> {
        self.items.iter().filter_map(|item| match &item.outcome {
            ItemOutcome::Failed(error) => Some((item, error)),
            _ => None,
        })
    }

    /// Warnings and skips still count as success
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn rows(&self) -> Vec<ItemRow> {
        self.items.iter().map(ItemRow::from).collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: {} succeeded, {} dry-run, {} skipped, {} failed",
            self.operation,
            self.succeeded(),
            self.dry_runs(),
            self.skipped(),
            self.failed()
        )
    }

    fn count(&self, predicate: impl Fn(&ItemOutcome) -> bool) -> usize {
        self.items.iter().filter(|item| predicate(&item.outcome)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_success() {
        let mut report = OperationReport::new(Operation::Delete, "ns");
        report.record("A", Some("A"), ItemOutcome::Succeeded);
        report.record("Z", Some("Z"), ItemOutcome::Skipped(SkipReason::NotFound));
        report.record("B", Some("B"), ItemOutcome::DryRun);

        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.dry_runs(), 1);
        assert!(report.is_success());
        assert_eq!(
            report.summary(),
            "delete: 1 succeeded, 1 dry-run, 1 skipped, 0 failed"
        );

        report.record("C", Some("C"), ItemOutcome::Failed(TopicAdminError::delete_not_applied("C")));
        assert!(!report.is_success());
        let (item, error) = report.failures().next().unwrap();
        assert_eq!(item.pattern, "C");
        assert_eq!(error.category(), topic_admin_error::ErrorCategory::ResourceExists);
    }

    #[test]
    fn rows_flatten_outcomes() {
        let mut report = OperationReport::new(Operation::Migrate, "ns");
        report.record("orders-*", None, ItemOutcome::Skipped(SkipReason::NotFound));
        report.record("A", Some("A"), ItemOutcome::Failed(TopicAdminError::create_not_visible("A")));

        let rows = report.rows();
        assert_eq!(rows[0].topic, "");
        assert_eq!(rows[0].outcome, "skipped");
        assert_eq!(rows[0].detail, "not found");
        assert!(rows[1].detail.starts_with("[ResourceUnavailable]"));
    }
}
