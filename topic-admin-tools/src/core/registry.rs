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

//! Topic registry capability
//!
//! The registry is the single source of truth for what exists in a
//! namespace. The engine only talks to it through [`TopicRegistry`] and
//! never assumes that a call is idempotent or atomic.

mod memory;
mod snapshot;

pub use memory::InMemoryTopicRegistry;
pub use snapshot::NamespaceSnapshot;
pub use snapshot::SnapshotTopicRegistry;

use crate::core::topic::TopicDescriptor;
use crate::core::TopicAdminResult;

/// List/exists/create/delete for the topics of one namespace.
///
/// Implementations report collaborator failures as
/// [`TopicAdminError::Transport`](crate::core::TopicAdminError::Transport).
#[allow(async_fn_in_trait)]
pub trait TopicRegistry {
    /// The namespace this registry is bound to
    fn namespace(&self) -> &str;

    /// Every topic in the namespace, in registry order
    async fn list_topics(&self) -> TopicAdminResult<Vec<TopicDescriptor>>;

    async fn topic_exists(&self, path: &str) -> TopicAdminResult<bool>;

    async fn create_topic(&self, topic: &TopicDescriptor) -> TopicAdminResult<()>;

    async fn delete_topic(&self, path: &str) -> TopicAdminResult<()>;
}
