// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Query root and schema construction.
//!
//! The transport (HTTP server, playground) lives outside this workspace; the
//! embedding process builds the schema here and injects the per-request
//! [`Viewer`] as request data.

use crate::index_steps::IndexStepsResolver;
use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Result, Schema};
use idx_core::{AuthzClient, IndexRecord};
use idx_store::IndexStore;
use std::sync::Arc;

pub type IndexSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Look up one index record by identifier. Null when unknown.
    pub async fn index(&self, ctx: &Context<'_>, id: String) -> Result<Option<IndexResolver>> {
        let store = ctx.data::<Arc<dyn IndexStore>>()?;
        let record = store.get_index(&id).await?;
        Ok(record.map(IndexResolver::new))
    }
}

/// Projects one [`IndexRecord`].
pub struct IndexResolver {
    index: IndexRecord,
}

impl IndexResolver {
    pub fn new(index: IndexRecord) -> Self {
        IndexResolver { index }
    }
}

#[Object]
impl IndexResolver {
    pub async fn id(&self) -> &str {
        &self.index.id
    }

    pub async fn steps(&self) -> IndexStepsResolver {
        IndexStepsResolver::new(self.index.clone())
    }
}

/// Build the read-only schema with its collaborator seams as context data.
pub fn build_schema(store: Arc<dyn IndexStore>, authz: Arc<dyn AuthzClient>) -> IndexSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(store)
        .data(authz)
        .finish()
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
