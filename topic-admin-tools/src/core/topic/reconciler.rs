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

//! Reconciliation engine
//!
//! Create, delete and migrate operations against a [`TopicRegistry`]. Each
//! mutation is followed by an existence re-check; a failure is recorded
//! against the item being processed and the batch moves on. Registry calls
//! are awaited one at a time.

use std::collections::HashSet;

use topic_admin_error::ExpectedState;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::trace;
use tracing::warn;

use super::types::CreateOptions;
use super::types::DeleteOptions;
use super::types::MigrateOptions;
use super::types::TopicDescriptor;
use super::verify::VerifyPolicy;
use crate::core::pattern::WildcardPattern;
use crate::core::registry::TopicRegistry;
use crate::core::report::ItemOutcome;
use crate::core::report::Operation;
use crate::core::report::OperationReport;
use crate::core::report::SkipReason;
use crate::core::TopicAdminError;
use crate::core::TopicAdminResult;

pub struct Reconciler<'a, R> {
    registry: &'a R,
    verify: VerifyPolicy,
}

impl<'a, R> Reconciler<'a, R>
where
    R: TopicRegistry,
{
    pub fn new(registry: &'a R) -> Self {
        Self {
            registry,
            verify: VerifyPolicy::default(),
        }
    }

    #[inline]
    pub fn with_verify_policy(mut self, verify: VerifyPolicy) -> Self {
        self.verify = verify;
        self
    }

    #[inline]
    pub fn registry(&self) -> &R {
        self.registry
    }

    /// Topics whose path is one of `paths`, compared exactly.
    ///
    /// An empty `paths` lists the whole namespace.
    pub async fn list<S: AsRef<str>>(&self, paths: &[S]) -> TopicAdminResult<Vec<TopicDescriptor>> {
        let topics = self.registry.list_topics().await?;
        if paths.is_empty() {
            return Ok(topics);
        }
        Ok(topics
            .into_iter()
            .filter(|topic| paths.iter().any(|p| p.as_ref() == topic.path))
            .collect())
    }

    /// Topics matched by any of `patterns` (wildcards allowed), each listed once
    pub async fn list_matching<S: AsRef<str>>(&self, patterns: &[S]) -> TopicAdminResult<Vec<TopicDescriptor>> {
        let topics = self.registry.list_topics().await?;
        let patterns: Vec<WildcardPattern> = patterns.iter().map(|p| WildcardPattern::new(p.as_ref())).collect();
        Ok(topics
            .into_iter()
            .filter(|topic| patterns.iter().any(|p| p.is_match(&topic.path)))
            .collect())
    }

    /// Create one topic per literal path.
    ///
    /// Existing paths are skipped with a warning.
    pub async fn create<S: AsRef<str>>(&self, paths: &[S], options: &CreateOptions) -> OperationReport {
        let mut report = OperationReport::new(Operation::Create, self.registry.namespace());
        for path in paths {
            let path = path.as_ref();
            let topic = options.to_descriptor(path);
            self.apply_create(path, topic, options.dry_run, &mut report).await;
        }
        report
    }

    /// Create `topic` exactly as given, with create semantics: skip when it
    /// exists, log only under dry-run, otherwise create and verify presence.
    pub async fn apply_create(&self, pattern: &str, topic: TopicDescriptor, dry_run: bool, report: &mut OperationReport) {
        let path = topic.path.as_str();
        match self.registry.topic_exists(path).await {
            Ok(true) => {
                warn!("{}", TopicAdminError::already_exists(path));
                report.record(pattern, Some(path), ItemOutcome::Skipped(SkipReason::AlreadyExists));
                return;
            }
            Ok(false) => {}
            Err(e) => {
                error!("Failed to check whether topic '{path}' exists: {e}");
                report.record(pattern, Some(path), ItemOutcome::Failed(e));
                return;
            }
        }

        if dry_run {
            info!("Dry run: topic '{path}' would be created - no action taken.");
            report.record(pattern, Some(path), ItemOutcome::DryRun);
            return;
        }

        match self.create_and_verify(&topic).await {
            Ok(()) => {
                info!("Topic {path} created.");
                report.record(pattern, Some(path), ItemOutcome::Succeeded);
            }
            Err(e) => {
                error!("Failed to create topic {path}: {e}");
                report.record(pattern, Some(path), ItemOutcome::Failed(e));
            }
        }
    }

    /// Delete one topic per literal path.
    ///
    /// Missing paths are skipped with a warning.
    pub async fn delete<S: AsRef<str>>(&self, paths: &[S], options: DeleteOptions) -> OperationReport {
        let mut report = OperationReport::new(Operation::Delete, self.registry.namespace());
        for path in paths {
            let path = path.as_ref();
            debug!("Attempting to delete topic '{path}' ...");

            match self.registry.topic_exists(path).await {
                Ok(true) => {}
                Ok(false) => {
                    warn!("{}", TopicAdminError::not_found(path));
                    report.record(path, Some(path), ItemOutcome::Skipped(SkipReason::NotFound));
                    continue;
                }
                Err(e) => {
                    error!("Failed to check whether topic '{path}' exists: {e}");
                    report.record(path, Some(path), ItemOutcome::Failed(e));
                    continue;
                }
            }

            if options.dry_run {
                info!("Dry run: topic '{path}' would be deleted - no action taken.");
                report.record(path, Some(path), ItemOutcome::DryRun);
                continue;
            }

            match self.delete_and_verify(path).await {
                Ok(()) => {
                    info!("Topic '{path}' deleted.");
                    report.record(path, Some(path), ItemOutcome::Succeeded);
                }
                Err(e) => {
                    error!("Failed to delete topic {path}: {e}");
                    report.record(path, Some(path), ItemOutcome::Failed(e));
                }
            }
        }
        report
    }

    /// Recreate every matched, unpartitioned topic with partitioning on.
    ///
    /// Partitioning cannot be changed on a live topic, so each match is
    /// deleted and then recreated with all other attributes copied. This is
    /// not atomic: if the recreate fails, or the process stops between the
    /// two calls, the topic is gone. A live run must therefore set
    /// [`MigrateOptions::accept_data_loss`].
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when neither `dry_run` nor `accept_data_loss` is set,
    /// or the registry error when the live topic list cannot be read. Per-topic
    /// failures are recorded in the report.
    pub async fn migrate<S: AsRef<str>>(
        &self,
        patterns: &[S],
        options: MigrateOptions,
    ) -> TopicAdminResult<OperationReport> {
        if !options.dry_run && !options.accept_data_loss {
            return Err(TopicAdminError::invalid_argument(
                "migration deletes and recreates topics; accept the data-loss risk or use dry-run",
            ));
        }

        let topics = self.registry.list_topics().await?;
        let mut report = OperationReport::new(Operation::Migrate, self.registry.namespace());
        let mut seen: HashSet<String> = HashSet::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            debug!("Attempting to remove and recreate topic/s named \"{pattern}\" with partitioning enabled.");
            let wildcard = WildcardPattern::new(pattern);
            let mut matched = false;

            for topic in &topics {
                if !wildcard.is_match(&topic.path) {
                    trace!("Topic '{}' did not match '{pattern}' - skipping.", topic.path);
                    continue;
                }
                matched = true;

                if !seen.insert(topic.path.to_lowercase()) {
                    debug!("Topic '{}' already handled by an earlier pattern - skipping.", topic.path);
                    report.record(pattern, Some(topic.path.as_str()), ItemOutcome::Skipped(SkipReason::DuplicateMatch));
                    continue;
                }

                if topic.enable_partitioning {
                    debug!("Topic '{}' already has partitioning enabled - skipping.", topic.path);
                    report.record(
                        pattern,
                        Some(topic.path.as_str()),
                        ItemOutcome::Skipped(SkipReason::AlreadyPartitioned),
                    );
                    continue;
                }

                let outcome = self.migrate_one(topic, options.dry_run).await;
                report.record(pattern, Some(topic.path.as_str()), outcome);
            }

            if !matched {
                warn!("No topic matched '{pattern}'.");
                report.record(pattern, None, ItemOutcome::Skipped(SkipReason::NotFound));
            }
        }

        Ok(report)
    }

    async fn migrate_one(&self, topic: &TopicDescriptor, dry_run: bool) -> ItemOutcome {
        let path = topic.path.as_str();
        let recreated = topic.with_partitioning();

        // The listing may be stale by now.
        match self.registry.topic_exists(path).await {
            Ok(true) => {}
            Ok(false) => {
                warn!("{}", TopicAdminError::not_found(path));
                return ItemOutcome::Skipped(SkipReason::NotFound);
            }
            Err(e) => {
                error!("Failed to check whether topic '{path}' exists: {e}");
                return ItemOutcome::Failed(e);
            }
        }

        if dry_run {
            info!("Dry run: topic '{path}' would be removed - no action taken.");
            info!("Dry run: topic '{path}' would be recreated with partitioning enabled - no action taken.");
            return ItemOutcome::DryRun;
        }

        info!("Removing topic '{path}' ...");
        if let Err(e) = self.delete_and_verify(path).await {
            error!("Failed to delete topic {path}: {e}");
            return ItemOutcome::Failed(e);
        }
        info!("Topic '{path}' removed.");

        info!("Recreating topic '{path}' ...");
        match self.create_and_verify(&recreated).await {
            Ok(()) => {
                info!("Topic '{path}' recreated.");
                ItemOutcome::Succeeded
            }
            Err(e) => {
                error!("Topic '{path}' was deleted but could not be recreated: {e}. Last known configuration: {recreated:?}");
                ItemOutcome::Failed(TopicAdminError::topic_lost(path, e))
            }
        }
    }

    async fn create_and_verify(&self, topic: &TopicDescriptor) -> TopicAdminResult<()> {
        self.registry.create_topic(topic).await?;
        if self
            .verify
            .confirm(self.registry, &topic.path, ExpectedState::Present)
            .await?
        {
            Ok(())
        } else {
            Err(TopicAdminError::create_not_visible(topic.path.as_str()))
        }
    }

    async fn delete_and_verify(&self, path: &str) -> TopicAdminResult<()> {
        self.registry.delete_topic(path).await?;
        if self.verify.confirm(self.registry, path, ExpectedState::Absent).await? {
            Ok(())
        } else {
            Err(TopicAdminError::delete_not_applied(path))
        }
    }
}
