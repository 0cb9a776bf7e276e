// crates/model-matchers/src/numericality/only_integer.rs
// ============================================================================
// Module: Only-Integer Sub-Matcher
// Description: Asserts an attribute rejects non-integer numbers.
// Purpose: Probe a decimal and an integer against the integer message.
// Dependencies: crate::{error, message, subject}
// ============================================================================

//! ## Overview
//! [`OnlyIntegerMatcher`] disallows [`NON_INTEGER_VALUE`] and allows
//! [`INTEGER_VALUE`], both scoped to `not_an_integer`. Under an exact or
//! pattern override only the rejection probe runs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::MatcherResult;
use crate::message::ExpectedMessage;
use crate::message::MessageKey;
use crate::numericality::probe::Probe;
use crate::numericality::probe::ProbeSet;
use crate::numericality::submatcher::DescriptionFragment;
use crate::numericality::submatcher::Submatcher;
use crate::subject::ValidationSubject;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Numeric probe that is not an integer.
pub const NON_INTEGER_VALUE: &str = "0.1";
/// Integer probe that must not raise `not_an_integer`.
pub const INTEGER_VALUE: &str = "1";

// ============================================================================
// SECTION: Only-Integer Matcher
// ============================================================================

/// Rejects [`NON_INTEGER_VALUE`] and accepts [`INTEGER_VALUE`] with respect to
/// the `not_an_integer` message.
#[derive(Debug, Clone)]
pub struct OnlyIntegerMatcher {
    /// Rejection probe, followed by the acceptance probe unless a non-key
    /// override removed it.
    probes: ProbeSet,
}

impl OnlyIntegerMatcher {
    /// Creates the sub-matcher for `attribute`.
    pub fn new(attribute: impl Into<String>) -> Self {
        let attribute = attribute.into();
        let expected = ExpectedMessage::key(MessageKey::NotAnInteger);
        Self {
            probes: ProbeSet::new(vec![
                Probe::new(false, &attribute, NON_INTEGER_VALUE, &expected),
                Probe::new(true, &attribute, INTEGER_VALUE, &expected),
            ]),
        }
    }
}

impl Submatcher for OnlyIntegerMatcher {
    fn matches(&mut self, subject: &mut dyn ValidationSubject) -> MatcherResult<bool> {
        self.probes.evaluate(subject)
    }

    fn failure_message(&self) -> Option<String> {
        self.probes.failure_message()
    }

    fn negated_failure_message(&self) -> Option<String> {
        self.probes.negated_failure_message()
    }

    fn override_message(&mut self, message: &ExpectedMessage) {
        if !message.is_key() {
            self.probes.retain_rejections();
        }
        self.probes.override_message(message);
    }

    fn fragment(&self) -> DescriptionFragment {
        DescriptionFragment::Integer
    }
}
