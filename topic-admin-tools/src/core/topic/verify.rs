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

//! Verify-after-mutate
//!
//! The registry gives no transactional guarantee, so every create/delete is
//! followed by an existence re-check. Some namespaces are eventually
//! consistent; the policy lets the re-check (never the mutation) be retried
//! a bounded number of times with linear backoff.

use std::time::Duration;

use topic_admin_error::ExpectedState;
use tracing::debug;

use crate::core::registry::TopicRegistry;
use crate::core::TopicAdminResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyPolicy {
    /// Existence checks per mutation, at least one
    pub attempts: u32,
    /// Sleep before check `n + 1` is `backoff * n`
    pub backoff: Duration,
}

impl Default for VerifyPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            backoff: Duration::from_millis(250),
        }
    }
}

impl VerifyPolicy {
    /// One immediate check, no retry
    pub const fn single() -> Self {
        Self {
            attempts: 1,
            backoff: Duration::ZERO,
        }
    }

    pub const fn new(attempts: u32, backoff: Duration) -> Self {
        Self { attempts, backoff }
    }

    /// Re-query `path` until it reaches `expected` or attempts run out.
    ///
    /// Returns `Ok(false)` when the registry never showed the expected state.
    pub async fn confirm<R>(&self, registry: &R, path: &str, expected: ExpectedState) -> TopicAdminResult<bool>
    where
        R: TopicRegistry,
    {
        let attempts = self.attempts.max(1);
        for attempt in 1..=attempts {
            let exists = registry.topic_exists(path).await?;
            let reached = match expected {
                ExpectedState::Present => exists,
                ExpectedState::Absent => !exists,
            };
            if reached {
                return Ok(true);
            }
            if attempt < attempts {
                debug!("Topic '{path}' not yet {expected} (check {attempt}/{attempts}), re-checking");
                tokio::time::sleep(self.backoff * attempt).await;
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicU32;
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::core::topic::TopicDescriptor;

    /// Reports the topic as present only from the `visible_after`-th check on
    struct LaggingRegistry {
        visible_after: u32,
        checks: AtomicU32,
    }

    impl TopicRegistry for LaggingRegistry {
        fn namespace(&self) -> &str {
            "lagging"
        }

        async fn list_topics(&self) -> TopicAdminResult<Vec<TopicDescriptor>> {
            Ok(Vec::new())
        }

        async fn topic_exists(&self, _path: &str) -> TopicAdminResult<bool> {
            let check = self.checks.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(check >= self.visible_after)
        }

        async fn create_topic(&self, _topic: &TopicDescriptor) -> TopicAdminResult<()> {
            Ok(())
        }

        async fn delete_topic(&self, _path: &str) -> TopicAdminResult<()> {
            Ok(())
        }
    }

    fn lagging(visible_after: u32) -> LaggingRegistry {
        LaggingRegistry {
            visible_after,
            checks: AtomicU32::new(0),
        }
    }

    #[tokio::test]
    async fn single_check_sees_stale_state() {
        let registry = lagging(2);
        let ok = VerifyPolicy::single()
            .confirm(&registry, "A", ExpectedState::Present)
            .await
            .unwrap();
        assert!(!ok);
        assert_eq!(registry.checks.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_absorb_lag() {
        let registry = lagging(3);
        let ok = VerifyPolicy::new(3, Duration::ZERO)
            .confirm(&registry, "A", ExpectedState::Present)
            .await
            .unwrap();
        assert!(ok);
        assert_eq!(registry.checks.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn stops_at_first_confirmation() {
        let registry = lagging(1);
        let ok = VerifyPolicy::new(5, Duration::ZERO)
            .confirm(&registry, "A", ExpectedState::Present)
            .await
            .unwrap();
        assert!(ok);
        assert_eq!(registry.checks.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn zero_attempts_still_checks_once() {
        let registry = lagging(100);
        let ok = VerifyPolicy::new(0, Duration::ZERO)
            .confirm(&registry, "A", ExpectedState::Absent)
            .await
            .unwrap();
        assert!(ok);
        assert_eq!(registry.checks.load(Ordering::SeqCst), 1);
    }
}
