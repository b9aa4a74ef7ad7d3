// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase partitioning of an index record's execution logs.

use crate::execution_log_entry::ExecutionLogEntryResolver;
use crate::index_step::IndexStepResolver;
use crate::pre_index_step::PreIndexStepResolver;
use async_graphql::Object;
use idx_core::{
    docker_step_key, index_step_key, IndexRecord, SETUP_PREFIX, TEARDOWN_PREFIX, UPLOAD_KEY,
};

/// Splits one record's flat log list into named lifecycle phases by key.
///
/// Every field re-scans `execution_logs`; the list is bounded by the
/// pipeline step count and each GraphQL field resolves at most once per
/// query, so nothing is cached.
pub struct IndexStepsResolver {
    index: IndexRecord,
}

impl IndexStepsResolver {
    pub fn new(index: IndexRecord) -> Self {
        IndexStepsResolver { index }
    }

    fn entries_with_prefix(&self, prefix: &str) -> Vec<ExecutionLogEntryResolver> {
        self.index
            .log_entries_with_prefix(prefix)
            .cloned()
            .map(ExecutionLogEntryResolver::new)
            .collect()
    }

    /// True when any docker step after position `i` has a log entry. A gap
    /// like that means the executor skipped a step's log, which is a
    /// producer bug worth flagging; a missing tail just means the run has
    /// not reached that step yet.
    fn docker_step_logged_after(&self, i: usize) -> bool {
        (i + 1..self.index.docker_steps.len())
            .any(|j| self.index.find_log_entry(&docker_step_key(j)).is_some())
    }

    /// Setup-phase entries, in stored order.
    pub async fn setup(&self) -> Vec<ExecutionLogEntryResolver> {
        self.entries_with_prefix(SETUP_PREFIX)
    }

    /// One resolver per configured docker step, in configuration order, each
    /// paired with the entry exactly matching `"step.docker.<i>"`.
    pub async fn pre_index(&self) -> Vec<PreIndexStepResolver> {
        self.index
            .docker_steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let key = docker_step_key(i);
                let entry = self.index.find_log_entry(&key).cloned();
                if entry.is_none() && self.docker_step_logged_after(i) {
                    tracing::warn!(
                        index_id = %self.index.id,
                        key = %key,
                        "no execution log entry matched configured docker step"
                    );
                }
                PreIndexStepResolver::new(step.clone(), entry)
            })
            .collect()
    }

    /// The index step, always present. Its log entry is the last docker-step
    /// key; with no configured docker steps there is no key to match and the
    /// entry is silently absent.
    pub async fn index(&self) -> IndexStepResolver {
        let entry = index_step_key(self.index.docker_steps.len())
            .and_then(|key| self.index.find_log_entry(&key).cloned());
        IndexStepResolver::new(self.index.clone(), entry)
    }

    /// The upload entry, keyed `"step.src.0"`.
    pub async fn upload(&self) -> Option<ExecutionLogEntryResolver> {
        self.index
            .find_log_entry(UPLOAD_KEY)
            .cloned()
            .map(ExecutionLogEntryResolver::new)
    }

    /// Teardown-phase entries, in stored order.
    pub async fn teardown(&self) -> Vec<ExecutionLogEntryResolver> {
        self.entries_with_prefix(TEARDOWN_PREFIX)
    }
}

// The `#[Object]` macro rewrites resolver signatures (injecting a `Context`
// parameter and wrapping returns in `Result`), so the field methods above
// live in a plain impl to stay directly callable; this impl only delegates.
#[Object]
impl IndexStepsResolver {
    #[graphql(name = "setup")]
    async fn setup_field(&self) -> Vec<ExecutionLogEntryResolver> {
        self.setup().await
    }

    #[graphql(name = "preIndex")]
    async fn pre_index_field(&self) -> Vec<PreIndexStepResolver> {
        self.pre_index().await
    }

    #[graphql(name = "index")]
    async fn index_field(&self) -> IndexStepResolver {
        self.index().await
    }

    #[graphql(name = "upload")]
    async fn upload_field(&self) -> Option<ExecutionLogEntryResolver> {
        self.upload().await
    }

    #[graphql(name = "teardown")]
    async fn teardown_field(&self) -> Vec<ExecutionLogEntryResolver> {
        self.teardown().await
    }
}

#[cfg(test)]
#[path = "index_steps_tests.rs"]
mod tests;
