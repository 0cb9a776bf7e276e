// crates/model-matchers/src/error.rs
// ============================================================================
// Module: Matcher Errors
// Description: Structured failures raised while evaluating a matcher.
// Purpose: Keep misconfiguration and collaborator failures apart from mismatches.
// Dependencies: thiserror, crate::controller
// ============================================================================

//! ## Overview
//! A matcher that disagrees with its subject never errors: it returns
//! `Ok(false)` and exposes failure messages. The variants here cover the cases
//! where a matcher cannot be evaluated at all, either because it was not
//! configured completely or because the subject refused a probe.

use thiserror::Error;

use crate::controller::Verb;

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// Errors raised synchronously when a matcher is evaluated.
///
/// # Invariants
/// - Configuration errors are detected at evaluation time, never at
///   construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatcherError {
    /// A permit matcher was evaluated without a target action.
    #[error("action not defined: call `for_action` before evaluating the matcher")]
    ActionNotDefined,

    /// The target action has no conventional verb and none was given.
    #[error("verb not defined for non-restful action `{action}`")]
    VerbNotDefined {
        /// Action that needs an explicit verb.
        action: String,
    },

    /// A setting was changed on a matcher that was already evaluated.
    #[error("{setting} cannot be changed after the matcher was evaluated")]
    ConfiguredAfterEvaluation {
        /// Name of the setting that was changed.
        setting: &'static str,
    },

    /// The validation subject has no attribute with the given name.
    #[error("subject has no attribute `{attribute}`")]
    UnknownAttribute {
        /// Attribute the matcher tried to assign.
        attribute: String,
    },

    /// The controller context failed to dispatch the simulated request.
    #[error("dispatching {verb} #{action} failed: {reason}")]
    Dispatch {
        /// Verb that was sent.
        verb: Verb,
        /// Action that was targeted.
        action: String,
        /// Collaborator-supplied failure description.
        reason: String,
    },
}

// ============================================================================
// SECTION: Convenience Helpers
// ============================================================================

impl MatcherError {
    /// Creates an unknown-attribute error.
    pub fn unknown_attribute(attribute: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            attribute: attribute.into(),
        }
    }

    /// Creates a dispatch failure for the given request.
    pub fn dispatch(verb: Verb, action: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Dispatch {
            verb,
            action: action.into(),
            reason: reason.into(),
        }
    }
}

// ============================================================================
// SECTION: Result Alias
// ============================================================================

/// Convenient Result type for matcher evaluation.
pub type MatcherResult<T = ()> = Result<T, MatcherError>;
