// crates/model-matchers/src/numericality/parity.rs
// ============================================================================
// Module: Parity Sub-Matcher
// Description: Asserts an attribute rejects numbers of the wrong parity.
// Purpose: Probe one odd and one even value against the parity message.
// Dependencies: crate::{error, message, subject}
// ============================================================================

//! ## Overview
//! [`ParityMatcher`] disallows the wrong-parity probe and allows the right
//! one, both scoped to the `odd` or `even` message. An exact or pattern
//! override can be shared with other rules on the attribute, so under such an
//! override only the rejection probe runs.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::MatcherResult;
use crate::message::ExpectedMessage;
use crate::message::MessageKey;
use crate::numericality::probe::Probe;
use crate::numericality::probe::ProbeSet;
use crate::numericality::submatcher::DescriptionFragment;
use crate::numericality::submatcher::Parity;
use crate::numericality::submatcher::Submatcher;
use crate::subject::ValidationSubject;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Even probe; rejected by odd-only attributes, accepted by even-only ones.
pub const EVEN_VALUE: &str = "2";
/// Odd probe; rejected by even-only attributes, accepted by odd-only ones.
pub const ODD_VALUE: &str = "1";

// ============================================================================
// SECTION: Parity Matcher
// ============================================================================

/// Rejects the wrong-parity probe and accepts the right one with respect to
/// the `odd` or `even` message.
#[derive(Debug, Clone)]
pub struct ParityMatcher {
    /// Required parity.
    parity: Parity,
    /// Rejection probe, followed by the acceptance probe unless a non-key
    /// override removed it.
    probes: ProbeSet,
}

impl ParityMatcher {
    /// Creates the sub-matcher for `attribute`.
    pub fn new(attribute: impl Into<String>, parity: Parity) -> Self {
        let attribute = attribute.into();
        let (rejected, accepted, key) = match parity {
            Parity::Odd => (EVEN_VALUE, ODD_VALUE, MessageKey::Odd),
            Parity::Even => (ODD_VALUE, EVEN_VALUE, MessageKey::Even),
        };
        let expected = ExpectedMessage::key(key);
        Self {
            parity,
            probes: ProbeSet::new(vec![
                Probe::new(false, &attribute, rejected, &expected),
                Probe::new(true, &attribute, accepted, &expected),
            ]),
        }
    }

    /// Returns the required parity.
    #[must_use]
    pub const fn parity(&self) -> Parity {
        self.parity
    }
}

impl Submatcher for ParityMatcher {
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
        DescriptionFragment::Parity(self.parity)
    }
}
