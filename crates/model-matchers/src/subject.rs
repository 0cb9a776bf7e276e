// crates/model-matchers/src/subject.rs
// ============================================================================
// Module: Validation Subject
// Description: Capability contract for the validation engine under test.
// Purpose: Replace dynamic attribute dispatch with explicit probe operations.
// Dependencies: crate::catalog, crate::error
// ============================================================================

//! ## Overview
//! Matchers never reimplement validation. They assign probe values through
//! this trait, ask the subject to validate, and read back the attribute's
//! error messages.

use crate::catalog::MessageCatalog;
use crate::error::MatcherResult;

// ============================================================================
// SECTION: Subject Trait
// ============================================================================

/// Model-like object whose validations a matcher probes.
pub trait ValidationSubject {
    /// Assigns a raw value to `attribute`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MatcherError::UnknownAttribute`] when the subject has
    /// no such attribute.
    fn assign(&mut self, attribute: &str, value: &str) -> MatcherResult;

    /// Runs the subject's validations against its current state.
    fn validate(&mut self);

    /// Returns the error messages recorded for `attribute` by the last run.
    fn errors_on(&self, attribute: &str) -> Vec<String>;

    /// Returns the catalog used to resolve default message keys.
    fn message_catalog(&self) -> &MessageCatalog {
        MessageCatalog::builtin()
    }
}
