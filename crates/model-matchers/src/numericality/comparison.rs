// crates/model-matchers/src/numericality/comparison.rs
// ============================================================================
// Module: Comparison Sub-Matcher
// Description: Asserts an attribute enforces an ordering bound.
// Purpose: Probe just below, at, and just above the bound.
// Dependencies: bigdecimal, crate::{error, message, subject}
// ============================================================================

//! ## Overview
//! The bound is probed at `bound - 1`, `bound`, and `bound + 1`. Each probe is
//! an allow or disallow check depending on the operator, so strict and
//! inclusive bounds are told apart. All probes share one expectation: the
//! override when given, otherwise the operator's message with `%{count}` set
//! to the bound.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use bigdecimal::BigDecimal;

use crate::error::MatcherResult;
use crate::message::ExpectedMessage;
use crate::message::MessageKey;
use crate::numericality::probe::Probe;
use crate::numericality::probe::ProbeSet;
use crate::numericality::submatcher::DescriptionFragment;
use crate::numericality::submatcher::Submatcher;
use crate::subject::ValidationSubject;

// ============================================================================
// SECTION: Operators
// ============================================================================

/// Offsets from the bound that are probed, in order.
const PROBE_OFFSETS: [i32; 3] = [-1, 0, 1];

/// Ordering relation enforced against the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// `value > bound`
    GreaterThan,
    /// `value >= bound`
    GreaterThanOrEqualTo,
    /// `value == bound`
    EqualTo,
    /// `value < bound`
    LessThan,
    /// `value <= bound`
    LessThanOrEqualTo,
}

impl ComparisonOperator {
    /// Returns the relation in words, as used in descriptions.
    #[must_use]
    pub const fn expectation(self) -> &'static str {
        match self {
            Self::GreaterThan => "greater than",
            Self::GreaterThanOrEqualTo => "greater than or equal to",
            Self::EqualTo => "equal to",
            Self::LessThan => "less than",
            Self::LessThanOrEqualTo => "less than or equal to",
        }
    }

    /// Returns the default message key for a violated bound.
    #[must_use]
    pub const fn message_key(self) -> MessageKey {
        match self {
            Self::GreaterThan => MessageKey::GreaterThan,
            Self::GreaterThanOrEqualTo => MessageKey::GreaterThanOrEqualTo,
            Self::EqualTo => MessageKey::EqualTo,
            Self::LessThan => MessageKey::LessThan,
            Self::LessThanOrEqualTo => MessageKey::LessThanOrEqualTo,
        }
    }

    /// Whether each of `bound - 1`, `bound`, `bound + 1` must be accepted.
    #[must_use]
    pub const fn assertions(self) -> [bool; 3] {
        match self {
            Self::GreaterThan => [false, false, true],
            Self::GreaterThanOrEqualTo => [false, true, true],
            Self::EqualTo => [false, true, false],
            Self::LessThan => [true, false, false],
            Self::LessThanOrEqualTo => [true, true, false],
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expectation())
    }
}

// ============================================================================
// SECTION: Comparison Matcher
// ============================================================================

/// Probes the acceptance boundary of a numeric bound.
#[derive(Debug, Clone)]
pub struct ComparisonMatcher {
    /// Bound the attribute is compared against.
    bound: BigDecimal,
    /// Relation enforced against the bound.
    operator: ComparisonOperator,
    /// Boundary probes in offset order.
    probes: ProbeSet,
}

impl ComparisonMatcher {
    /// Creates the sub-matcher for `attribute`.
    pub fn new(
        attribute: impl Into<String>,
        bound: impl Into<BigDecimal>,
        operator: ComparisonOperator,
    ) -> Self {
        let attribute = attribute.into();
        let bound = bound.into();
        let expected = ExpectedMessage::key_with_count(operator.message_key(), &bound);
        let probes = PROBE_OFFSETS
            .into_iter()
            .zip(operator.assertions())
            .map(|(offset, allowed)| {
                let value = bound.clone() + BigDecimal::from(offset);
                Probe::new(allowed, &attribute, value.to_string(), &expected)
            })
            .collect();
        Self {
            bound,
            operator,
            probes: ProbeSet::new(probes),
        }
    }

    /// Returns the bound.
    #[must_use]
    pub const fn bound(&self) -> &BigDecimal {
        &self.bound
    }

    /// Returns the operator.
    #[must_use]
    pub const fn operator(&self) -> ComparisonOperator {
        self.operator
    }

    /// Returns the description clause, such as `greater than 18`.
    #[must_use]
    pub fn comparison_description(&self) -> String {
        format!("{} {}", self.operator.expectation(), self.bound)
    }
}

impl Submatcher for ComparisonMatcher {
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
        self.probes.override_message(message);
    }

    fn fragment(&self) -> DescriptionFragment {
        DescriptionFragment::Clause(self.comparison_description())
    }
}
