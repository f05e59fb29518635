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

//! Admin configuration file
//!
//! ```toml
//! namespace = "orders-prod"
//! namespace_file = "namespace.json"
//!
//! [verify]
//! attempts = 3
//! backoff_millis = 250
//!
//! [backup]
//! pretty = true
//! ```

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use topic_admin_common::parse_config_file;

use crate::core::backup::CodecConfig;
use crate::core::topic::VerifyPolicy;
use crate::core::TopicAdminResult;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub namespace: String,
    /// Local snapshot backing the namespace
    pub namespace_file: Option<PathBuf>,
    pub verify: VerifyConfig,
    pub backup: BackupConfig,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            namespace: "default".to_string(),
            namespace_file: None,
            verify: VerifyConfig::default(),
            backup: BackupConfig::default(),
        }
    }
}

impl AdminConfig {
    pub fn load(file: impl AsRef<Path>) -> TopicAdminResult<Self> {
        parse_config_file(file)
    }

    #[inline]
    pub fn verify_policy(&self) -> VerifyPolicy {
        VerifyPolicy::new(self.verify.attempts, Duration::from_millis(self.verify.backoff_millis))
    }

    #[inline]
    pub fn codec_config(&self) -> CodecConfig {
        CodecConfig {
            pretty: self.backup.pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    pub attempts: u32,
    pub backoff_millis: u64,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            attempts: 3,
            backoff_millis: 250,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackupConfig {
    pub pretty: bool,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}
