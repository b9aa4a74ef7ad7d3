// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::auth::{AuthzClient, AuthzError, Viewer};
use crate::record::{DockerStep, ExecutionLogEntry, IndexRecord};
use chrono::{DateTime, TimeZone, Utc};
use std::time::Duration;

/// Fixed start time used by builders so snapshots compare deterministically.
pub fn fixed_start_time() -> DateTime<Utc> {
    // Safe constant: valid calendar date.
    match Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 0) {
        chrono::LocalResult::Single(t) => t,
        _ => Utc::now(),
    }
}

// ── Record builders ─────────────────────────────────────────────────────

pub struct ExecutionLogEntryBuilder {
    entry: ExecutionLogEntry,
}

impl ExecutionLogEntryBuilder {
    pub fn new(key: &str) -> Self {
        ExecutionLogEntryBuilder {
            entry: ExecutionLogEntry {
                key: key.to_string(),
                command: vec!["run".to_string()],
                exit_code: 0,
                start_time: fixed_start_time(),
                duration: Duration::from_millis(250),
                out: String::new(),
            },
        }
    }

    pub fn command(mut self, command: &[&str]) -> Self {
        self.entry.command = command.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn exit_code(mut self, code: i32) -> Self {
        self.entry.exit_code = code;
        self
    }

    pub fn start_time(mut self, t: DateTime<Utc>) -> Self {
        self.entry.start_time = t;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.entry.duration = duration;
        self
    }

    pub fn out(mut self, out: &str) -> Self {
        self.entry.out = out.to_string();
        self
    }

    pub fn build(self) -> ExecutionLogEntry {
        self.entry
    }
}

/// Shorthand for a default entry with the given key.
pub fn log_entry(key: &str) -> ExecutionLogEntry {
    ExecutionLogEntryBuilder::new(key).build()
}

pub fn docker_step(root: &str, image: &str, commands: &[&str]) -> DockerStep {
    DockerStep {
        root: root.to_string(),
        image: image.to_string(),
        commands: commands.iter().map(|s| s.to_string()).collect(),
    }
}

pub struct IndexRecordBuilder {
    record: IndexRecord,
}

impl IndexRecordBuilder {
    pub fn new(id: &str) -> Self {
        IndexRecordBuilder {
            record: IndexRecord {
                id: id.to_string(),
                docker_steps: Vec::new(),
                indexer_args: Vec::new(),
                outfile: String::new(),
                execution_logs: Vec::new(),
            },
        }
    }

    pub fn docker_step(mut self, step: DockerStep) -> Self {
        self.record.docker_steps.push(step);
        self
    }

    pub fn indexer_args(mut self, args: &[&str]) -> Self {
        self.record.indexer_args = args.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn outfile(mut self, outfile: &str) -> Self {
        self.record.outfile = outfile.to_string();
        self
    }

    pub fn log(mut self, entry: ExecutionLogEntry) -> Self {
        self.record.execution_logs.push(entry);
        self
    }

    pub fn build(self) -> IndexRecord {
        self.record
    }
}

// ── Fake authorization ──────────────────────────────────────────────────

/// Canned [`AuthzClient`] responses for resolver tests.
#[derive(Debug, Clone)]
pub enum StaticAuthz {
    /// Every viewer is a site admin.
    Admin,
    /// No viewer is a site admin.
    NotAdmin,
    /// The subsystem itself fails.
    Broken(String),
}

#[async_trait::async_trait]
impl AuthzClient for StaticAuthz {
    async fn ensure_site_admin(&self, _viewer: &Viewer) -> Result<(), AuthzError> {
        match self {
            StaticAuthz::Admin => Ok(()),
            StaticAuthz::NotAdmin => Err(AuthzError::NotSiteAdmin),
            StaticAuthz::Broken(msg) => Err(AuthzError::Backend(msg.clone())),
        }
    }
}
