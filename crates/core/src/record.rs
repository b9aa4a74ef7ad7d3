// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted records describing an indexing job and its captured execution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One captured execution step: the command that ran, how it exited, when,
/// and what it printed.
///
/// The `key` correlates the entry to a logical step of the job lifecycle
/// (`"setup.0"`, `"step.docker.2"`, `"step.src.0"`, `"teardown.1"`).
/// Within one [`IndexRecord`] the key is unique, but the log list carries
/// no ordering guarantee; correlation is by exact key or key prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionLogEntry {
    pub key: String,
    /// Invoked command and arguments, in order. May be empty.
    pub command: Vec<String>,
    pub exit_code: i32,
    pub start_time: DateTime<Utc>,
    /// Elapsed wall clock. Sub-millisecond precision is preserved here;
    /// API projection truncates to whole milliseconds.
    pub duration: Duration,
    /// Captured combined output. Sensitive: only surfaced to site admins.
    pub out: String,
}

/// One configured unit of work: a container image run against a root path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerStep {
    pub root: String,
    pub image: String,
    pub commands: Vec<String>,
}

/// Snapshot of one indexing job: its configured steps and whatever the
/// executor has logged so far.
///
/// Records are immutable value snapshots produced upstream by the store and
/// worker subsystems; nothing in this workspace mutates one after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    pub id: String,
    /// Configured docker steps; index `i` corresponds to log key
    /// `"step.docker.<i>"`. The final step doubles as the index step.
    pub docker_steps: Vec<DockerStep>,
    pub indexer_args: Vec<String>,
    /// Empty string means "no outfile configured" and is surfaced as null.
    #[serde(default)]
    pub outfile: String,
    #[serde(default)]
    pub execution_logs: Vec<ExecutionLogEntry>,
}

impl IndexRecord {
    /// Find the log entry with exactly this key, if the executor produced one.
    pub fn find_log_entry(&self, key: &str) -> Option<&ExecutionLogEntry> {
        self.execution_logs.iter().find(|entry| entry.key == key)
    }

    /// All log entries whose key starts with `prefix`, in stored order.
    pub fn log_entries_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a ExecutionLogEntry> {
        self.execution_logs
            .iter()
            .filter(move |entry| entry.key.starts_with(prefix))
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
