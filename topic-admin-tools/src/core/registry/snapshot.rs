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

//! Namespace snapshot registry
//!
//! Keeps a namespace's topics in a local JSON file so the CLI can be driven
//! without a remote management endpoint. The file is rewritten after every
//! successful mutation.

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use topic_admin_error::RegistryError;
use tracing::debug;

use super::InMemoryTopicRegistry;
use super::TopicRegistry;
use crate::core::topic::TopicDescriptor;
use crate::core::TopicAdminResult;

/// On-disk layout of a namespace snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamespaceSnapshot {
    pub namespace: String,
    #[serde(default)]
    pub topics: Vec<TopicDescriptor>,
}

#[derive(Debug)]
pub struct SnapshotTopicRegistry {
    file: PathBuf,
    inner: InMemoryTopicRegistry,
}

impl SnapshotTopicRegistry {
    /// Load `file`, or start an empty namespace when it does not exist yet
    pub async fn open(file: impl Into<PathBuf>, namespace: impl Into<String>) -> TopicAdminResult<Self> {
        let file = file.into();
        let namespace = namespace.into();

        let snapshot = if tokio::fs::try_exists(&file).await.unwrap_or(false) {
            let text = tokio::fs::read_to_string(&file)
                .await
                .map_err(|e| RegistryError::call_failed("openNamespace", e))?;
            serde_json::from_str::<NamespaceSnapshot>(&text)
                .map_err(|e| RegistryError::call_failed("openNamespace", e))?
        } else {
            debug!("Namespace file '{}' not found, starting empty", file.display());
            NamespaceSnapshot {
                namespace: namespace.clone(),
                topics: Vec::new(),
            }
        };

        let namespace = if snapshot.namespace.is_empty() {
            namespace
        } else {
            snapshot.namespace
        };

        Ok(Self {
            file,
            inner: InMemoryTopicRegistry::with_topics(namespace, snapshot.topics),
        })
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    async fn flush(&self, operation: &'static str) -> TopicAdminResult<()> {
        let snapshot = NamespaceSnapshot {
            namespace: self.inner.namespace().to_string(),
            topics: self.inner.snapshot(),
        };
        let text =
            serde_json::to_string_pretty(&snapshot).map_err(|e| RegistryError::call_failed(operation, e))?;
        tokio::fs::write(&self.file, text)
            .await
            .map_err(|e| RegistryError::call_failed(operation, e))?;
        Ok(())
    }
}

impl TopicRegistry for SnapshotTopicRegistry {
    fn namespace(&self) -> &str {
        self.inner.namespace()
    }

    async fn list_topics(&self) -> TopicAdminResult<Vec<TopicDescriptor>> {
        self.inner.list_topics().await
    }

    async fn topic_exists(&self, path: &str) -> TopicAdminResult<bool> {
        self.inner.topic_exists(path).await
    }

    async fn create_topic(&self, topic: &TopicDescriptor) -> TopicAdminResult<()> {
        self.inner.create_topic(topic).await?;
        self.flush("createTopic").await
    }

    async fn delete_topic(&self, path: &str) -> TopicAdminResult<()> {
        self.inner.delete_topic(path).await?;
        self.flush("deleteTopic").await
    }
}
