// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolver for one captured execution log entry.

use async_graphql::{Context, Object, Result};
use chrono::{DateTime, Utc};
use idx_core::{AuthzClient, AuthzError, ExecutionLogEntry, Viewer};
use std::sync::Arc;
use std::time::Duration;

/// Projects one [`ExecutionLogEntry`] into API fields.
///
/// Absence is handled at the call site: lookups that find no entry yield
/// `Option<ExecutionLogEntryResolver>` and the GraphQL layer surfaces null.
pub struct ExecutionLogEntryResolver {
    entry: ExecutionLogEntry,
}

impl ExecutionLogEntryResolver {
    pub fn new(entry: ExecutionLogEntry) -> Self {
        ExecutionLogEntryResolver { entry }
    }
}

/// Whole milliseconds of `duration`, truncating any sub-millisecond
/// remainder. Saturates at `i32::MAX` for pathological durations.
fn whole_milliseconds(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}

impl ExecutionLogEntryResolver {
    pub async fn key(&self) -> &str {
        &self.entry.key
    }

    pub async fn command(&self) -> &[String] {
        &self.entry.command
    }

    pub async fn exit_code(&self) -> i32 {
        self.entry.exit_code
    }

    pub async fn start_time(&self) -> DateTime<Utc> {
        self.entry.start_time
    }

    pub async fn duration_milliseconds(&self) -> i32 {
        whole_milliseconds(self.entry.duration)
    }
}

// The `#[Object]` macro rewrites resolver signatures (injecting a `Context`
// parameter and wrapping returns in `Result`), so the scalar field methods
// above live in a plain impl to stay directly callable; this impl delegates.
#[Object]
impl ExecutionLogEntryResolver {
    #[graphql(name = "key")]
    async fn key_field(&self) -> &str {
        self.key().await
    }

    #[graphql(name = "command")]
    async fn command_field(&self) -> &[String] {
        self.command().await
    }

    #[graphql(name = "exitCode")]
    async fn exit_code_field(&self) -> i32 {
        self.exit_code().await
    }

    #[graphql(name = "startTime")]
    async fn start_time_field(&self) -> DateTime<Utc> {
        self.start_time().await
    }

    #[graphql(name = "durationMilliseconds")]
    async fn duration_milliseconds_field(&self) -> i32 {
        self.duration_milliseconds().await
    }

    /// Captured combined output.
    ///
    /// Only site admins may read executor output. Non-admin callers get an
    /// empty string rather than a denial error, so the field reveals nothing
    /// about whether output exists. An authorization backend failure is the
    /// one error this layer surfaces to the API consumer.
    pub async fn out(&self, ctx: &Context<'_>) -> Result<String> {
        let authz = ctx.data::<Arc<dyn AuthzClient>>()?;
        let viewer = ctx
            .data_opt::<Viewer>()
            .cloned()
            .unwrap_or_else(Viewer::anonymous);

        match authz.ensure_site_admin(&viewer).await {
            Ok(()) => Ok(self.entry.out.clone()),
            Err(AuthzError::NotSiteAdmin) => Ok(String::new()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
#[path = "execution_log_entry_tests.rs"]
mod tests;
