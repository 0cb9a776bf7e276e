// crates/model-matchers/tests/support/controllers.rs
// ============================================================================
// Module: Fixture Controllers
// Description: Controller context that records dispatches.
// ============================================================================
//! ## Overview
//! `RecordingController` stands in for the controller layer. Each action has
//! a fixed whitelist; actions without one permit nothing.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    dead_code,
    reason = "Test-only fixtures; not every test binary uses every helper."
)]

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use model_matchers::ControllerContext;
use model_matchers::MatcherError;
use model_matchers::MatcherResult;
use model_matchers::Verb;

/// Controller context with per-action whitelists and a dispatch log.
#[derive(Debug, Clone, Default)]
pub struct RecordingController {
    /// Permitted parameter names per action.
    whitelists: BTreeMap<String, BTreeSet<String>>,
    /// Dispatches received, in order.
    calls: Vec<(Verb, String)>,
    /// Failure returned by every dispatch, if set.
    failure: Option<String>,
}

impl RecordingController {
    /// Controller without whitelists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whitelists `params` on `action`.
    pub fn permitting(mut self, action: &str, params: &[&str]) -> Self {
        self.whitelists
            .insert(action.to_string(), params.iter().map(ToString::to_string).collect());
        self
    }

    /// Makes every dispatch fail with `reason`.
    pub fn failing(mut self, reason: &str) -> Self {
        self.failure = Some(reason.to_string());
        self
    }

    /// Dispatches received so far.
    pub fn calls(&self) -> &[(Verb, String)] {
        &self.calls
    }
}

impl ControllerContext for RecordingController {
    fn dispatch(&mut self, verb: Verb, action: &str) -> MatcherResult<BTreeSet<String>> {
        self.calls.push((verb, action.to_string()));
        if let Some(reason) = &self.failure {
            return Err(MatcherError::dispatch(verb, action, reason.clone()));
        }
        Ok(self.whitelists.get(action).cloned().unwrap_or_default())
    }
}

/// Controller whose create and update actions permit `name` and `age`.
pub fn user_controller() -> RecordingController {
    RecordingController::new()
        .permitting("create", &["name", "age"])
        .permitting("update", &["name", "age"])
}
