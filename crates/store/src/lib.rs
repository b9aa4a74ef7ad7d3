// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! idx-store: Store seam providing [`IndexRecord`] snapshots by identifier.
//!
//! The real persistence backend lives outside this workspace; [`IndexStore`]
//! is the seam the resolver layer consumes, and [`MemoryStore`] is the
//! in-process implementation used by tests and embedding processes that
//! materialize records out of band.

use idx_core::IndexRecord;
use parking_lot::RwLock;
use std::collections::HashMap;
use thiserror::Error;

/// Failures from the record store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// Read access to persisted index records.
#[async_trait::async_trait]
pub trait IndexStore: Send + Sync {
    /// Fetch the record with this identifier. `Ok(None)` when unknown.
    async fn get_index(&self, id: &str) -> Result<Option<IndexRecord>, StoreError>;
}

/// In-memory record map behind an `RwLock`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, IndexRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Insert or replace a record snapshot, keyed by its id.
    pub fn insert(&self, record: IndexRecord) {
        self.records.write().insert(record.id.clone(), record);
    }
}

#[async_trait::async_trait]
impl IndexStore for MemoryStore {
    async fn get_index(&self, id: &str) -> Result<Option<IndexRecord>, StoreError> {
        Ok(self.records.read().get(id).cloned())
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
