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

//! Topic Admin Tools - topic lifecycle engine and CLI
//!
//! This crate provides both:
//! - **Core**: the reconciliation engine for one broker namespace
//! - **CLI**: the `topic-admin-cli` command-line interface on top of it
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           CLI Layer (bin/)              │
//! │  - Command parsing (clap)               │
//! │  - Output formatting (formatters/)      │
//! │  - Input validation (validators/)       │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │         Core Logic (core/)              │
//! │  - Pattern matching                     │
//! │  - Create / delete / migrate            │
//! │  - Backup / restore                     │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │        Registry (core/registry)         │
//! │  - TopicRegistry trait                  │
//! │  - in-memory and snapshot-file backends │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ## As a Library (using core)
//!
//! ```rust
//! use topic_admin_tools::core::registry::InMemoryTopicRegistry;
//! use topic_admin_tools::core::topic::CreateOptions;
//! use topic_admin_tools::core::topic::Reconciler;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let registry = InMemoryTopicRegistry::new("orders-prod");
//! let reconciler = Reconciler::new(&registry);
//!
//! let report = reconciler.create(&["orders"], &CreateOptions::default()).await;
//! assert!(report.is_success());
//! assert!(registry.get("orders").unwrap().enable_partitioning);
//! # });
//! ```
//!
//! ## As a CLI Tool
//!
//! ```bash
//! topic-admin-cli topic migrate -p 'orders-*' --namespace-file orders-prod.json --dry-run
//! ```

pub mod core {
    //! Core business logic module
    //!
    //! Independent of any presentation layer. Every registry call is awaited
    //! before the next one is issued.
    //!
    //! - [`pattern`] - case-insensitive wildcard matching of topic paths
    //! - [`registry`] - the remote topic store and its local backends
    //! - [`topic`] - descriptor model and the reconciler
    //! - [`backup`] - backup file format and backup/restore driver
    //! - [`report`] - per-item outcomes of a batch operation

    pub mod backup;
    pub mod config;
    pub mod pattern;
    pub mod registry;
    pub mod report;
    pub mod topic;

    // Re-export error types from topic-admin-error
    pub use topic_admin_error::ErrorCategory;
    pub use topic_admin_error::TopicAdminError;
    pub use topic_admin_error::TopicAdminResult;
}

// CLI presentation layer
pub mod cli {
    //! CLI presentation layer
    //!
    //! - [`commands`] - one command per topic operation
    //! - [`formatters`] - Output formatters (JSON, YAML, Table)
    //! - [`validators`] - Input validators

    pub mod commands;
    pub mod formatters;
    pub mod validators;
}

// UI utilities for enhanced CLI experience
pub mod ui;

pub(crate) mod commands;

// CLI entry point
pub mod topic_admin_cli;
