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

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use parking_lot::RwLock;
use topic_admin_error::RegistryError;

use super::TopicRegistry;
use crate::core::topic::TopicDescriptor;
use crate::core::TopicAdminResult;

/// Registry held entirely in memory.
///
/// Topics keep insertion order. Creating a path that exists or deleting one
/// that does not is rejected, the way a remote service would.
#[derive(Debug, Default)]
pub struct InMemoryTopicRegistry {
    namespace: String,
    topics: RwLock<Vec<TopicDescriptor>>,
    mutations: AtomicUsize,
}

impl InMemoryTopicRegistry {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self::with_topics(namespace, Vec::new())
    }

    pub fn with_topics(namespace: impl Into<String>, topics: Vec<TopicDescriptor>) -> Self {
        Self {
            namespace: namespace.into(),
            topics: RwLock::new(topics),
            mutations: AtomicUsize::new(0),
        }
    }

    /// Copy of the current topic set
    pub fn snapshot(&self) -> Vec<TopicDescriptor> {
        self.topics.read().clone()
    }

    pub fn get(&self, path: &str) -> Option<TopicDescriptor> {
        self.topics.read().iter().find(|t| t.is_path(path)).cloned()
    }

    /// Number of create/delete calls that changed state
    pub fn mutation_count(&self) -> usize {
        self.mutations.load(Ordering::Relaxed)
    }
}

impl TopicRegistry for InMemoryTopicRegistry {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    async fn list_topics(&self) -> TopicAdminResult<Vec<TopicDescriptor>> {
        Ok(self.snapshot())
    }

    async fn topic_exists(&self, path: &str) -> TopicAdminResult<bool> {
        Ok(self.topics.read().iter().any(|t| t.is_path(path)))
    }

    async fn create_topic(&self, topic: &TopicDescriptor) -> TopicAdminResult<()> {
        let mut topics = self.topics.write();
        if topics.iter().any(|t| t.is_path(&topic.path)) {
            return Err(RegistryError::rejected("createTopic", topic.path.clone(), "conflict: topic exists").into());
        }
        topics.push(topic.clone());
        self.mutations.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    async fn delete_topic(&self, path: &str) -> TopicAdminResult<()> {
        let mut topics = self.topics.write();
        let Some(index) = topics.iter().position(|t| t.is_path(path)) else {
            return Err(RegistryError::rejected("deleteTopic", path, "topic not found").into());
        };
        topics.remove(index);
        self.mutations.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
