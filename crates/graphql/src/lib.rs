// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! idx-graphql: Read-only GraphQL resolvers over index metadata.
//!
//! Each resolver is a stateless view of one [`idx_core::IndexRecord`]
//! snapshot, owned by a single in-flight query evaluation. Log entries are
//! correlated to configured steps purely by key; a missing correlation is an
//! absent (null) field, never an error.

mod execution_log_entry;
mod index_step;
mod index_steps;
mod pre_index_step;
mod schema;

pub use execution_log_entry::ExecutionLogEntryResolver;
pub use index_step::IndexStepResolver;
pub use index_steps::IndexStepsResolver;
pub use pre_index_step::PreIndexStepResolver;
pub use schema::{build_schema, IndexResolver, IndexSchema, QueryRoot};
