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

use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use topic_admin_error::TopicAdminError;
use tracing::debug;
use tracing::info;
use tracing::warn;

use super::codec::TopicRecordCodec;
use super::record::TopicRecord;
use crate::core::pattern::WildcardPattern;
use crate::core::registry::TopicRegistry;
use crate::core::report::ItemOutcome;
use crate::core::report::Operation;
use crate::core::report::OperationReport;
use crate::core::report::SkipReason;
use crate::core::topic::Reconciler;
use crate::core::topic::TopicDescriptor;
use crate::core::TopicAdminResult;

/// What a backup wrote
#[derive(Debug, Clone)]
pub struct BackupReport {
    pub file: PathBuf,
    pub records: Vec<TopicRecord>,
}

/// Write the configuration of every live topic matched by `patterns` to `file`.
///
/// A topic matched by several patterns is written once. An existing `file`
/// is overwritten.
pub async fn backup<R, S>(
    registry: &R,
    patterns: &[S],
    file: impl AsRef<Path>,
    codec: &TopicRecordCodec,
) -> TopicAdminResult<BackupReport>
where
    R: TopicRegistry,
    S: AsRef<str>,
{
    let file = file.as_ref();
    if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        let is_dir = tokio::fs::metadata(parent).await.map(|m| m.is_dir()).unwrap_or(false);
        if !is_dir {
            return Err(TopicAdminError::invalid_argument(format!(
                "directory '{}' does not exist",
                parent.display()
            )));
        }
    }

    let topics = registry.list_topics().await?;
    let mut seen: HashSet<String> = HashSet::new();
    let mut records = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let wildcard = WildcardPattern::new(pattern);
        let mut matched = false;
        for topic in topics.iter().filter(|t| wildcard.is_match(&t.path)) {
            matched = true;
            if seen.insert(topic.path.to_lowercase()) {
                debug!("Backing up topic '{}' ...", topic.path);
                records.push(TopicRecord::from(topic));
            }
        }
        if !matched {
            warn!("No topic matched '{pattern}'.");
        }
    }

    if tokio::fs::try_exists(file).await.unwrap_or(false) {
        warn!("File '{}' already exists and will be overwritten.", file.display());
    }

    let text = codec.encode(&records)?;
    tokio::fs::write(file, text).await?;
    info!("{} topic(s) written to '{}'.", records.len(), file.display());

    Ok(BackupReport {
        file: file.to_path_buf(),
        records,
    })
}

/// Recreate the topics in `file` whose path is matched by `patterns`.
///
/// Records are applied with create semantics: topics that already exist are
/// skipped, and a dry run issues no mutating call.
///
/// # Errors
///
/// `InvalidArgument` when `file` does not exist and `OpenError` when it cannot
/// be read or parsed. Both are raised before any registry call.
pub async fn restore<R, S>(
    reconciler: &Reconciler<'_, R>,
    patterns: &[S],
    file: impl AsRef<Path>,
    codec: &TopicRecordCodec,
    dry_run: bool,
) -> TopicAdminResult<OperationReport>
where
    R: TopicRegistry,
    S: AsRef<str>,
{
    let file = file.as_ref();
    let source = file.display().to_string();
    if !tokio::fs::try_exists(file).await.unwrap_or(false) {
        return Err(TopicAdminError::invalid_argument(format!(
            "backup file '{source}' does not exist"
        )));
    }

    let text = tokio::fs::read_to_string(file)
        .await
        .map_err(|e| TopicAdminError::open_error(source.as_str(), e.to_string()))?;
    let records = codec.decode(&source, &text)?;
    debug!("{} record(s) read from '{source}'.", records.len());

    let mut report = OperationReport::new(Operation::Restore, reconciler.registry().namespace());
    let mut seen: HashSet<String> = HashSet::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let wildcard = WildcardPattern::new(pattern);
        let matched: Vec<&TopicRecord> = records.iter().filter(|r| wildcard.is_match(&r.path)).collect();

        if matched.is_empty() {
            warn!("No record in '{source}' matched '{pattern}'.");
            report.record(pattern, None, ItemOutcome::Skipped(SkipReason::NotFound));
            continue;
        }

        for record in matched {
            if !seen.insert(record.path.to_lowercase()) {
                report.record(pattern, Some(record.path.as_str()), ItemOutcome::Skipped(SkipReason::DuplicateMatch));
                continue;
            }
            let topic = TopicDescriptor::from(record.clone());
            reconciler.apply_create(pattern, topic, dry_run, &mut report).await;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use topic_admin_error::ErrorCategory;

    use super::*;
    use crate::core::registry::InMemoryTopicRegistry;
    use crate::core::topic::VerifyPolicy;

    fn namespace() -> InMemoryTopicRegistry {
        InMemoryTopicRegistry::with_topics(
            "test-ns",
            vec![
                TopicDescriptor::builder("A")
                    .default_message_time_to_live(Duration::from_secs(600))
                    .build(),
                TopicDescriptor::builder("B").enable_partitioning(true).build(),
            ],
        )
    }

    #[tokio::test]
    async fn backup_writes_each_match_once() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("out.json");
        let registry = namespace();

        let report = backup(&registry, &["*", "A"], &file, &TopicRecordCodec::default())
            .await
            .unwrap();

        let paths: Vec<_> = report.records.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["A", "B"]);

        let text = std::fs::read_to_string(&file).unwrap();
        let written = TopicRecordCodec::default().decode("out.json", &text).unwrap();
        assert_eq!(written, report.records);
    }

    #[tokio::test]
    async fn backup_into_missing_directory_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("missing").join("out.json");

        let err = backup(&namespace(), &["*"], &file, &TopicRecordCodec::default())
            .await
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::InvalidArgument);
        assert!(!file.exists());
    }

    #[tokio::test]
    async fn backup_under_a_regular_file_is_an_invalid_argument() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("plain.txt");
        std::fs::write(&not_a_dir, "x").unwrap();
        let file = not_a_dir.join("out.json");

        let err = backup(&namespace(), &["*"], &file, &TopicRecordCodec::default())
            .await
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::InvalidArgument);
    }

    #[tokio::test]
    async fn sub_second_ttl_is_restored_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("out.json");
        let source = InMemoryTopicRegistry::with_topics(
            "test-ns",
            vec![TopicDescriptor::builder("A")
                .default_message_time_to_live(Duration::from_millis(1500))
                .build()],
        );
        backup(&source, &["*"], &file, &TopicRecordCodec::default())
            .await
            .unwrap();

        let target = InMemoryTopicRegistry::new("empty-ns");
        let reconciler = Reconciler::new(&target).with_verify_policy(VerifyPolicy::single());
        restore(&reconciler, &["A"], &file, &TopicRecordCodec::default(), false)
            .await
            .unwrap();

        let restored = target.get("A").unwrap();
        assert_eq!(restored.default_message_time_to_live, Duration::from_millis(1500));
        assert_eq!(target.snapshot(), source.snapshot());
    }

    #[tokio::test]
    async fn restore_reproduces_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("out.json");
        let source = namespace();
        backup(&source, &["*"], &file, &TopicRecordCodec::default())
            .await
            .unwrap();

        let target = InMemoryTopicRegistry::new("empty-ns");
        let reconciler = Reconciler::new(&target).with_verify_policy(VerifyPolicy::single());
        let report = restore(&reconciler, &["*"], &file, &TopicRecordCodec::default(), false)
            .await
            .unwrap();

        assert_eq!(report.succeeded(), 2);
        assert_eq!(target.snapshot(), source.snapshot());
    }

    #[tokio::test]
    async fn restore_of_existing_topic_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("out.json");
        let registry = namespace();
        backup(&registry, &["*"], &file, &TopicRecordCodec::default())
            .await
            .unwrap();

        let reconciler = Reconciler::new(&registry).with_verify_policy(VerifyPolicy::single());
        let report = restore(&reconciler, &["A"], &file, &TopicRecordCodec::default(), false)
            .await
            .unwrap();

        assert!(report.is_success());
        assert!(matches!(
            report.items[0].outcome,
            ItemOutcome::Skipped(SkipReason::AlreadyExists)
        ));
        assert_eq!(registry.mutation_count(), 0);
    }

    #[tokio::test]
    async fn restore_dry_run_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("out.json");
        backup(&namespace(), &["*"], &file, &TopicRecordCodec::default())
            .await
            .unwrap();

        let target = InMemoryTopicRegistry::new("empty-ns");
        let reconciler = Reconciler::new(&target);
        let report = restore(&reconciler, &["a", "b"], &file, &TopicRecordCodec::default(), true)
            .await
            .unwrap();

        assert_eq!(report.dry_runs(), 2);
        assert_eq!(target.mutation_count(), 0);
    }

    #[tokio::test]
    async fn restore_input_errors_abort_before_registry_calls() {
        let dir = tempfile::tempdir().unwrap();
        let target = InMemoryTopicRegistry::new("empty-ns");
        let reconciler = Reconciler::new(&target);
        let codec = TopicRecordCodec::default();

        let missing = dir.path().join("missing.json");
        let err = restore(&reconciler, &["*"], &missing, &codec, false).await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::InvalidArgument);

        let garbage = dir.path().join("garbage.json");
        std::fs::write(&garbage, "not json").unwrap();
        let err = restore(&reconciler, &["*"], &garbage, &codec, false).await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::OpenError);

        assert_eq!(target.mutation_count(), 0);
    }
}
