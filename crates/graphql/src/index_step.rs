// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolver for the final "index" step.

use crate::execution_log_entry::ExecutionLogEntryResolver;
use async_graphql::Object;
use idx_core::{ExecutionLogEntry, IndexRecord};

/// Projects the index step: the last configured docker step reinterpreted as
/// the indexer invocation (indexer args and outfile instead of image and
/// commands), plus its correlated log entry.
pub struct IndexStepResolver {
    index: IndexRecord,
    entry: Option<ExecutionLogEntry>,
}

impl IndexStepResolver {
    pub fn new(index: IndexRecord, entry: Option<ExecutionLogEntry>) -> Self {
        IndexStepResolver { index, entry }
    }
}

impl IndexStepResolver {
    pub async fn indexer_args(&self) -> &[String] {
        &self.index.indexer_args
    }

    /// Configured output file. Stored as an empty string when unset, which
    /// surfaces as null.
    pub async fn outfile(&self) -> Option<&str> {
        if self.index.outfile.is_empty() {
            None
        } else {
            Some(self.index.outfile.as_str())
        }
    }

    pub async fn log_entry(&self) -> Option<ExecutionLogEntryResolver> {
        self.entry.clone().map(ExecutionLogEntryResolver::new)
    }
}

// The `#[Object]` macro rewrites resolver signatures (injecting a `Context`
// parameter and wrapping returns in `Result`), so the field methods above
// live in a plain impl to stay directly callable; this impl only delegates.
#[Object]
impl IndexStepResolver {
    #[graphql(name = "indexerArgs")]
    async fn indexer_args_field(&self) -> &[String] {
        self.indexer_args().await
    }

    #[graphql(name = "outfile")]
    async fn outfile_field(&self) -> Option<&str> {
        self.outfile().await
    }

    #[graphql(name = "logEntry")]
    async fn log_entry_field(&self) -> Option<ExecutionLogEntryResolver> {
        self.log_entry().await
    }
}
