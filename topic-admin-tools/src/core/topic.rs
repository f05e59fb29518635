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

//! Topic management: descriptor model and reconciliation engine

mod reconciler;
mod types;
mod verify;

pub use reconciler::Reconciler;
pub(crate) use types::duration_secs;
pub use types::CreateOptions;
pub use types::DeleteOptions;
pub use types::MigrateOptions;
pub use types::TopicDescriptor;
pub use types::TopicDescriptorBuilder;
pub use types::AUTO_DELETE_DISABLED;
pub use types::DEFAULT_DUPLICATE_DETECTION_WINDOW;
pub use types::DEFAULT_MAX_SIZE_MEGABYTES;
pub use types::DEFAULT_MESSAGE_TTL;
pub use verify::VerifyPolicy;
