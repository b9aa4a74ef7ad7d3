// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! idx-core: Domain records and collaborator seams for the code-intelligence
//! index metadata layer.

pub mod auth;
pub mod key;
pub mod record;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use auth::{AuthzClient, AuthzError, Viewer};
pub use key::{docker_step_key, index_step_key, SETUP_PREFIX, TEARDOWN_PREFIX, UPLOAD_KEY};
pub use record::{DockerStep, ExecutionLogEntry, IndexRecord};
#[cfg(any(test, feature = "test-support"))]
pub use test_support::{ExecutionLogEntryBuilder, IndexRecordBuilder, StaticAuthz};
