// crates/model-matchers/src/numericality/submatcher.rs
// ============================================================================
// Module: Numericality Sub-Matchers
// Description: Contract shared by every constraint a numericality matcher checks.
// Purpose: Let the composite evaluate, describe, and report constraints uniformly.
// Dependencies: crate::{allow_value, error, message, subject}
// ============================================================================

//! ## Overview
//! A sub-matcher checks one orthogonal constraint against a subject. The
//! composite only relies on the capabilities listed in [`Submatcher`]; its
//! description is assembled from each sub-matcher's [`DescriptionFragment`].

use std::fmt;

use crate::allow_value::DisallowValueMatcher;
use crate::error::MatcherResult;
use crate::message::ExpectedMessage;
use crate::subject::ValidationSubject;

// ============================================================================
// SECTION: Description Fragments
// ============================================================================

/// Parity a number is required to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Odd numbers only.
    Odd,
    /// Even numbers only.
    Even,
}

impl Parity {
    /// Returns the lower-case parity word.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Odd => "odd",
            Self::Even => "even",
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a sub-matcher contributes to the composite description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionFragment {
    /// Nothing beyond the baseline wording.
    None,
    /// Turns "numbers" into "integers".
    Integer,
    /// Prefixes the noun with a parity word.
    Parity(Parity),
    /// Adds a "which are ..." clause, such as `greater than 18`.
    Clause(String),
}

// ============================================================================
// SECTION: Sub-Matcher Trait
// ============================================================================

/// One independently evaluable constraint of a numericality matcher.
pub trait Submatcher: fmt::Debug {
    /// Evaluates the constraint against `subject`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MatcherError`] when the subject refuses a probe.
    fn matches(&mut self, subject: &mut dyn ValidationSubject) -> MatcherResult<bool>;

    /// Message for a failed positive assertion, once evaluated.
    fn failure_message(&self) -> Option<String>;

    /// Message for a failed negated assertion, once evaluated.
    fn negated_failure_message(&self) -> Option<String>;

    /// Replaces the expected error text.
    fn override_message(&mut self, message: &ExpectedMessage);

    /// Returns this constraint's contribution to the description.
    fn fragment(&self) -> DescriptionFragment;
}

// ============================================================================
// SECTION: Disallow Value Sub-Matcher
// ============================================================================

impl Submatcher for DisallowValueMatcher {
    fn matches(&mut self, subject: &mut dyn ValidationSubject) -> MatcherResult<bool> {
        self.evaluate(subject)
    }

    fn failure_message(&self) -> Option<String> {
        Self::failure_message(self)
    }

    fn negated_failure_message(&self) -> Option<String> {
        Self::negated_failure_message(self)
    }

    fn override_message(&mut self, message: &ExpectedMessage) {
        self.set_expected(message);
    }

    fn fragment(&self) -> DescriptionFragment {
        DescriptionFragment::None
    }
}
