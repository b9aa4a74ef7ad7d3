// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::{docker_step, log_entry, IndexRecordBuilder};

fn record_with_keys(keys: &[&str]) -> IndexRecord {
    let mut builder = IndexRecordBuilder::new("idx-1");
    for key in keys {
        builder = builder.log(log_entry(key));
    }
    builder.build()
}

#[test]
fn find_log_entry_matches_exact_key_only() {
    let record = record_with_keys(&["step.docker.0", "step.docker.10"]);
    assert_eq!(
        record.find_log_entry("step.docker.1").map(|e| e.key.as_str()),
        None
    );
    assert_eq!(
        record.find_log_entry("step.docker.10").map(|e| e.key.as_str()),
        Some("step.docker.10")
    );
}

#[test]
fn find_log_entry_on_empty_logs() {
    let record = IndexRecordBuilder::new("idx-1").build();
    assert!(record.find_log_entry("setup.0").is_none());
}

#[test]
fn prefix_filter_preserves_stored_order() {
    // Deliberately interleaved and unsorted.
    let record = record_with_keys(&["teardown.1", "setup.1", "step.docker.0", "setup.0"]);
    let keys: Vec<&str> = record
        .log_entries_with_prefix("setup.")
        .map(|e| e.key.as_str())
        .collect();
    assert_eq!(keys, vec!["setup.1", "setup.0"]);
}

#[test]
fn prefix_filter_with_no_matches_is_empty() {
    let record = record_with_keys(&["setup.0"]);
    assert_eq!(record.log_entries_with_prefix("teardown.").count(), 0);
}

#[test]
fn record_roundtrips_through_json() {
    let record = IndexRecordBuilder::new("idx-7")
        .docker_step(docker_step("web/", "node:18", &["yarn install"]))
        .indexer_args(&["lsif-go", "--no-animation"])
        .outfile("dump.lsif")
        .log(log_entry("setup.0"))
        .build();

    let json = serde_json::to_string(&record).unwrap();
    let parsed: IndexRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record, parsed);
}

#[test]
fn missing_optional_fields_default_when_deserializing() {
    let parsed: IndexRecord = serde_json::from_str(
        r#"{"id":"idx-2","docker_steps":[],"indexer_args":[]}"#,
    )
    .unwrap();
    assert_eq!(parsed.outfile, "");
    assert!(parsed.execution_logs.is_empty());
}
