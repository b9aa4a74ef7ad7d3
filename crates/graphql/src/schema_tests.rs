// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use async_graphql::Request;
use idx_core::test_support::{log_entry, ExecutionLogEntryBuilder, IndexRecordBuilder, StaticAuthz};
use idx_core::Viewer;
use idx_store::{IndexStore, MemoryStore, StoreError};
use serde_json::json;
use std::sync::Arc;

fn schema_with(record: idx_core::IndexRecord, authz: StaticAuthz) -> IndexSchema {
    let store = MemoryStore::new();
    store.insert(record);
    build_schema(Arc::new(store), Arc::new(authz))
}

#[tokio::test]
async fn unknown_index_resolves_to_null() {
    let schema = build_schema(Arc::new(MemoryStore::new()), Arc::new(StaticAuthz::Admin));
    let response = schema.execute(r#"{ index(id: "nope") { id } }"#).await;

    assert!(response.errors.is_empty());
    assert_eq!(response.data.into_json().unwrap(), json!({ "index": null }));
}

#[tokio::test]
async fn admin_viewer_reads_out_verbatim() {
    let record = IndexRecordBuilder::new("idx-1")
        .log(
            ExecutionLogEntryBuilder::new("setup.0")
                .out("build succeeded\n")
                .build(),
        )
        .build();
    let schema = schema_with(record, StaticAuthz::Admin);

    let request =
        Request::new(r#"{ index(id: "idx-1") { steps { setup { out } } } }"#).data(Viewer::new("u-1"));
    let response = schema.execute(request).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "index": { "steps": { "setup": [{ "out": "build succeeded\n" }] } } })
    );
}

#[tokio::test]
async fn non_admin_viewer_gets_empty_out_without_error() {
    let record = IndexRecordBuilder::new("idx-1")
        .log(
            ExecutionLogEntryBuilder::new("setup.0")
                .out("build succeeded\n")
                .build(),
        )
        .build();
    let schema = schema_with(record, StaticAuthz::NotAdmin);

    let request =
        Request::new(r#"{ index(id: "idx-1") { steps { setup { out } } } }"#).data(Viewer::new("u-2"));
    let response = schema.execute(request).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "index": { "steps": { "setup": [{ "out": "" }] } } })
    );
}

#[tokio::test]
async fn missing_viewer_is_treated_as_anonymous() {
    let record = IndexRecordBuilder::new("idx-1")
        .log(ExecutionLogEntryBuilder::new("setup.0").out("secret").build())
        .build();
    let schema = schema_with(record, StaticAuthz::NotAdmin);

    // No Viewer request data at all.
    let response = schema
        .execute(r#"{ index(id: "idx-1") { steps { setup { out } } } }"#)
        .await;

    assert!(response.errors.is_empty());
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "index": { "steps": { "setup": [{ "out": "" }] } } })
    );
}

#[tokio::test]
async fn authz_backend_failure_surfaces_as_field_error() {
    let record = IndexRecordBuilder::new("idx-1")
        .log(log_entry("setup.0"))
        .build();
    let schema = schema_with(record, StaticAuthz::Broken("session store unreachable".to_string()));

    let request =
        Request::new(r#"{ index(id: "idx-1") { steps { setup { out } } } }"#).data(Viewer::new("u-1"));
    let response = schema.execute(request).await;

    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0]
        .message
        .contains("session store unreachable"));
}

struct FailingStore;

#[async_trait::async_trait]
impl IndexStore for FailingStore {
    async fn get_index(&self, _id: &str) -> Result<Option<idx_core::IndexRecord>, StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }
}

#[tokio::test]
async fn store_failure_surfaces_as_field_error() {
    let schema = build_schema(Arc::new(FailingStore), Arc::new(StaticAuthz::Admin));
    let response = schema.execute(r#"{ index(id: "idx-1") { id } }"#).await;

    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].message.contains("connection refused"));
}

#[tokio::test]
async fn outfile_null_when_empty_and_literal_otherwise() {
    let with_outfile = IndexRecordBuilder::new("idx-1").outfile("out.lsif").build();
    let schema = schema_with(with_outfile, StaticAuthz::Admin);
    let response = schema
        .execute(r#"{ index(id: "idx-1") { steps { index { outfile } } } }"#)
        .await;
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "index": { "steps": { "index": { "outfile": "out.lsif" } } } })
    );

    let without = IndexRecordBuilder::new("idx-2").build();
    let schema = schema_with(without, StaticAuthz::Admin);
    let response = schema
        .execute(r#"{ index(id: "idx-2") { steps { index { outfile } } } }"#)
        .await;
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "index": { "steps": { "index": { "outfile": null } } } })
    );
}
