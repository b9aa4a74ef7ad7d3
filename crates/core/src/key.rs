// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log-key scheme shared with the executor.
//!
//! The worker subsystem names each captured step with a stable key:
//! `"setup.<n>"` and `"teardown.<n>"` for lifecycle phases,
//! `"step.docker.<n>"` for configured docker steps, and `"step.src.0"` for
//! the upload. Everything here is purely lexical; nothing parses keys back.

/// Prefix of setup-phase log keys.
pub const SETUP_PREFIX: &str = "setup.";

/// Prefix of teardown-phase log keys.
pub const TEARDOWN_PREFIX: &str = "teardown.";

/// Key of the single upload step.
pub const UPLOAD_KEY: &str = "step.src.0";

/// Log key of the docker step at position `i`.
pub fn docker_step_key(i: usize) -> String {
    format!("step.docker.{i}")
}

/// Log key of the index step: the last configured docker step.
///
/// Returns `None` when no docker steps are configured, in which case no
/// stored key can match and the index step's log entry is absent.
pub fn index_step_key(docker_step_count: usize) -> Option<String> {
    docker_step_count.checked_sub(1).map(docker_step_key)
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
