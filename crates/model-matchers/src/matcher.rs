// crates/model-matchers/src/matcher.rs
// ============================================================================
// Module: Matcher Protocol
// Description: The predicate-matcher surface exposed to assertion frameworks.
// Purpose: Give every matcher family one evaluation and reporting contract.
// Dependencies: crate::error
// ============================================================================

//! ## Overview
//! An assertion framework drives a matcher by calling [`Matcher::matches`] (or
//! [`Matcher::does_not_match`] for negated assertions) and, on failure, reads
//! the message for the polarity it asserted.

use crate::error::MatcherResult;

// ============================================================================
// SECTION: Matcher Trait
// ============================================================================

/// Predicate matcher over subjects of type `S`.
pub trait Matcher<S: ?Sized> {
    /// Evaluates the matcher for a positive assertion.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MatcherError`] when the matcher is misconfigured or the
    /// subject rejects a probe. Mismatches are reported as `Ok(false)`.
    fn matches(&mut self, subject: &mut S) -> MatcherResult<bool>;

    /// Evaluates the matcher for a negated assertion.
    ///
    /// Defaults to the negation of [`Matcher::matches`]; matchers whose
    /// negated form has its own semantics override it.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Matcher::matches`].
    fn does_not_match(&mut self, subject: &mut S) -> MatcherResult<bool> {
        self.matches(subject).map(|matched| !matched)
    }

    /// Describes what the matcher asserts.
    fn description(&self) -> String;

    /// Message for a failed positive assertion, once evaluated.
    fn failure_message(&self) -> Option<String>;

    /// Message for a failed negated assertion, once evaluated.
    fn negated_failure_message(&self) -> Option<String>;
}
