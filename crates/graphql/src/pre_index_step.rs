// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolver for one configured docker step.

use crate::execution_log_entry::ExecutionLogEntryResolver;
use async_graphql::Object;
use idx_core::{DockerStep, ExecutionLogEntry};

/// Projects one [`DockerStep`] plus its correlated log entry, matched by
/// exact key `"step.docker.<i>"` when the steps resolver constructed it.
pub struct PreIndexStepResolver {
    step: DockerStep,
    entry: Option<ExecutionLogEntry>,
}

impl PreIndexStepResolver {
    pub fn new(step: DockerStep, entry: Option<ExecutionLogEntry>) -> Self {
        PreIndexStepResolver { step, entry }
    }
}

impl PreIndexStepResolver {
    pub async fn root(&self) -> &str {
        &self.step.root
    }

    pub async fn image(&self) -> &str {
        &self.step.image
    }

    pub async fn commands(&self) -> &[String] {
        &self.step.commands
    }

    pub async fn log_entry(&self) -> Option<ExecutionLogEntryResolver> {
        self.entry.clone().map(ExecutionLogEntryResolver::new)
    }
}

// The `#[Object]` macro rewrites resolver signatures (injecting a `Context`
// parameter and wrapping returns in `Result`), so the field methods above
// live in a plain impl to stay directly callable; this impl only delegates.
#[Object]
impl PreIndexStepResolver {
    #[graphql(name = "root")]
    async fn root_field(&self) -> &str {
        self.root().await
    }

    #[graphql(name = "image")]
    async fn image_field(&self) -> &str {
        self.image().await
    }

    #[graphql(name = "commands")]
    async fn commands_field(&self) -> &[String] {
        self.commands().await
    }

    #[graphql(name = "logEntry")]
    async fn log_entry_field(&self) -> Option<ExecutionLogEntryResolver> {
        self.log_entry().await
    }
}
