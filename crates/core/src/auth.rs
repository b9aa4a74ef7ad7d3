// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Authorization seam for sensitive log output.
//!
//! The only privileged read in this layer is captured executor output; the
//! check is "is the current caller a site administrator", answered by an
//! external subsystem behind [`AuthzClient`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request-scoped caller identity, injected by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    /// Stable user identifier, empty for anonymous callers.
    pub user_id: String,
}

impl Viewer {
    pub fn new(user_id: impl Into<String>) -> Self {
        Viewer { user_id: user_id.into() }
    }

    /// Identity of an unauthenticated caller.
    pub fn anonymous() -> Self {
        Viewer { user_id: String::new() }
    }

    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_empty()
    }
}

/// Failures from the authorization subsystem.
///
/// `NotSiteAdmin` is an expected outcome and callers treat it as a redaction
/// signal, never an error surfaced to the API consumer. Every other variant
/// is an unexpected backend failure and propagates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("must be site admin")]
    NotSiteAdmin,

    #[error("authorization backend failure: {0}")]
    Backend(String),
}

/// External check for site-administrator privilege.
#[async_trait::async_trait]
pub trait AuthzClient: Send + Sync {
    /// Succeeds only when `viewer` is a site administrator.
    ///
    /// Returns [`AuthzError::NotSiteAdmin`] for ordinary non-admin callers;
    /// any other error means the subsystem itself failed.
    async fn ensure_site_admin(&self, viewer: &Viewer) -> Result<(), AuthzError>;
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
