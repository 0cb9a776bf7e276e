// crates/model-matchers/src/numericality/probe.rs
// ============================================================================
// Module: Probe Sets
// Description: Ordered allow/disallow probes evaluated as one constraint.
// Purpose: Share boundary probing between comparison, parity, and integer checks.
// Dependencies: crate::{allow_value, error, message, subject}
// ============================================================================

//! ## Overview
//! A [`ProbeSet`] runs every probe (no short-circuit), remembers the last one
//! that failed, and surfaces that probe's messages.

use crate::allow_value::AllowValueMatcher;
use crate::allow_value::DisallowValueMatcher;
use crate::error::MatcherResult;
use crate::message::ExpectedMessage;
use crate::subject::ValidationSubject;

// ============================================================================
// SECTION: Probe
// ============================================================================

/// A single value the subject must accept or reject.
#[derive(Debug, Clone)]
pub(crate) enum Probe {
    /// The value must not produce the expected error.
    Allow(AllowValueMatcher),
    /// The value must produce the expected error.
    Disallow(DisallowValueMatcher),
}

impl Probe {
    /// Builds an allow or disallow probe for `value` on `attribute`.
    pub(crate) fn new(
        allowed: bool,
        attribute: &str,
        value: impl Into<String>,
        expected: &ExpectedMessage,
    ) -> Self {
        if allowed {
            Self::Allow(
                AllowValueMatcher::new([value.into()])
                    .for_attribute(attribute)
                    .with_message(Some(expected.clone())),
            )
        } else {
            Self::Disallow(
                DisallowValueMatcher::new(value)
                    .for_attribute(attribute)
                    .with_message(Some(expected.clone())),
            )
        }
    }

    /// Evaluates the probe.
    fn evaluate(&mut self, subject: &mut dyn ValidationSubject) -> MatcherResult<bool> {
        match self {
            Self::Allow(matcher) => matcher.evaluate(subject),
            Self::Disallow(matcher) => matcher.evaluate(subject),
        }
    }

    /// Positive failure message.
    fn failure_message(&self) -> Option<String> {
        match self {
            Self::Allow(matcher) => matcher.failure_message(),
            Self::Disallow(matcher) => matcher.failure_message(),
        }
    }

    /// Negated failure message.
    fn negated_failure_message(&self) -> Option<String> {
        match self {
            Self::Allow(matcher) => matcher.negated_failure_message(),
            Self::Disallow(matcher) => matcher.negated_failure_message(),
        }
    }

    /// Replaces the expected error text.
    fn set_expected(&mut self, message: &ExpectedMessage) {
        match self {
            Self::Allow(matcher) => matcher.set_expected(message),
            Self::Disallow(matcher) => matcher.set_expected(message),
        }
    }
}

// ============================================================================
// SECTION: Probe Set
// ============================================================================

/// Ordered probes reporting through their last failure.
#[derive(Debug, Clone)]
pub(crate) struct ProbeSet {
    /// Probes in evaluation order.
    probes: Vec<Probe>,
    /// Index of the last probe that failed during the latest evaluation.
    last_failing: Option<usize>,
}

impl ProbeSet {
    /// Wraps probes in evaluation order.
    pub(crate) const fn new(probes: Vec<Probe>) -> Self {
        Self {
            probes,
            last_failing: None,
        }
    }

    /// Evaluates every probe; true when all passed.
    pub(crate) fn evaluate(&mut self, subject: &mut dyn ValidationSubject) -> MatcherResult<bool> {
        self.last_failing = None;
        for (index, probe) in self.probes.iter_mut().enumerate() {
            if !probe.evaluate(subject)? {
                self.last_failing = Some(index);
            }
        }
        Ok(self.last_failing.is_none())
    }

    /// Probe whose messages surface.
    fn reporter(&self) -> Option<&Probe> {
        self.last_failing.and_then(|index| self.probes.get(index))
    }

    /// Positive failure message of the last failing probe.
    pub(crate) fn failure_message(&self) -> Option<String> {
        self.reporter().and_then(Probe::failure_message)
    }

    /// Negated failure message of the last failing probe.
    pub(crate) fn negated_failure_message(&self) -> Option<String> {
        self.reporter().and_then(Probe::negated_failure_message)
    }

    /// Drops every acceptance probe, keeping the rejection probes in order.
    pub(crate) fn retain_rejections(&mut self) {
        self.probes.retain(|probe| matches!(probe, Probe::Disallow(_)));
        self.last_failing = None;
    }

    /// Replaces the expected error text on every probe.
    pub(crate) fn override_message(&mut self, message: &ExpectedMessage) {
        for probe in &mut self.probes {
            probe.set_expected(message);
        }
    }
}
