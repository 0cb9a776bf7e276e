// crates/model-matchers/src/allow_value.rs
// ============================================================================
// Module: Value Probes
// Description: Allow/disallow matchers that probe one attribute with raw values.
// Purpose: Provide the primitive every numericality sub-matcher is built from.
// Dependencies: tracing, crate::{error, matcher, message, subject, text}
// ============================================================================

//! ## Overview
//! [`AllowValueMatcher`] assigns each probe value to the attribute, validates
//! the subject, and passes when none of the resulting errors match the
//! expectation. Without an expectation any error on the attribute counts.
//! [`DisallowValueMatcher`] is its negation and swaps the two failure
//! messages.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::debug;

use crate::error::MatcherResult;
use crate::matcher::Matcher;
use crate::message::ExpectedMessage;
use crate::message::ResolvedMessage;
use crate::subject::ValidationSubject;
use crate::text::quoted;
use crate::text::to_sentence;

// ============================================================================
// SECTION: Constructors
// ============================================================================

/// Creates a matcher asserting the attribute accepts every one of `values`.
pub fn allow_value<I, V>(values: I) -> AllowValueMatcher
where
    I: IntoIterator<Item = V>,
    V: Into<String>,
{
    AllowValueMatcher::new(values)
}

/// Creates a matcher asserting the attribute rejects `value`.
pub fn disallow_value(value: impl Into<String>) -> DisallowValueMatcher {
    DisallowValueMatcher::new(value)
}

// ============================================================================
// SECTION: Probe Outcome
// ============================================================================

/// Observation recorded for the last probed value.
#[derive(Debug, Clone)]
struct ProbeOutcome {
    /// Raw value that was assigned.
    value: String,
    /// Expectation as resolved against the subject's catalog.
    expected: Option<ResolvedMessage>,
    /// Errors the subject reported for the attribute.
    errors: Vec<String>,
}

impl ProbeOutcome {
    /// Renders the expectation clause shared by both message polarities.
    fn expectation(&self, attribute: &str) -> String {
        let value = quoted(&self.value);
        match &self.expected {
            Some(expected) => {
                format!("errors to include {expected} when {attribute} is set to {value}")
            }
            None => format!("errors when {attribute} is set to {value}"),
        }
    }

    /// Renders the errors actually observed.
    fn observed(&self) -> String {
        if self.errors.is_empty() {
            "no errors".to_string()
        } else {
            let errors: Vec<String> = self.errors.iter().map(|error| quoted(error)).collect();
            format!("errors: {}", errors.join(", "))
        }
    }
}

// ============================================================================
// SECTION: Allow Value
// ============================================================================

/// Asserts that an attribute accepts each of a list of values.
///
/// # Invariants
/// - Values are probed in order; evaluation stops at the first rejected value.
#[derive(Debug, Clone)]
pub struct AllowValueMatcher {
    /// Attribute receiving the probe values.
    attribute: String,
    /// Raw values to probe.
    values: Vec<String>,
    /// Error text that counts as a rejection.
    expected: Option<ExpectedMessage>,
    /// Observation from the most recent evaluation.
    outcome: Option<ProbeOutcome>,
}

impl AllowValueMatcher {
    /// Creates a matcher probing `values` on an attribute set later.
    pub fn new<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            attribute: String::new(),
            values: values.into_iter().map(Into::into).collect(),
            expected: None,
            outcome: None,
        }
    }

    /// Sets the attribute receiving the probe values.
    #[must_use]
    pub fn for_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }

    /// Narrows rejections to errors matching `message`. `None` keeps the
    /// current expectation.
    #[must_use]
    pub fn with_message(mut self, message: Option<ExpectedMessage>) -> Self {
        if let Some(message) = message {
            self.expected = Some(message);
        }
        self
    }

    /// Replaces the expectation in place.
    pub(crate) fn set_expected(&mut self, message: &ExpectedMessage) {
        self.expected = Some(message.clone());
    }

    /// Returns the attribute under test.
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Probes every value and returns true when none was rejected.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MatcherError`] when the subject refuses an assignment.
    pub fn evaluate(&mut self, subject: &mut dyn ValidationSubject) -> MatcherResult<bool> {
        self.outcome = None;
        for value in &self.values {
            subject.assign(&self.attribute, value)?;
            subject.validate();
            let errors = subject.errors_on(&self.attribute);
            let expected =
                self.expected.as_ref().map(|message| message.resolve(subject.message_catalog()));
            let rejected = expected
                .as_ref()
                .map_or(!errors.is_empty(), |message| message.matches_any(&errors));
            debug!(
                attribute = %self.attribute,
                value = %value,
                errors = errors.len(),
                rejected,
                "probed attribute value"
            );
            self.outcome = Some(ProbeOutcome {
                value: value.clone(),
                expected,
                errors,
            });
            if rejected {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Message when the attribute was expected to accept but rejected.
    #[must_use]
    pub fn failure_message(&self) -> Option<String> {
        self.outcome.as_ref().map(|outcome| {
            format!(
                "Did not expect {}, got {}",
                outcome.expectation(&self.attribute),
                outcome.observed()
            )
        })
    }

    /// Message when the attribute was expected to reject but accepted.
    #[must_use]
    pub fn negated_failure_message(&self) -> Option<String> {
        self.outcome.as_ref().map(|outcome| {
            format!("Expected {}, got {}", outcome.expectation(&self.attribute), outcome.observed())
        })
    }

    /// Lists the probe values as quoted text.
    fn quoted_values(&self) -> String {
        let values: Vec<String> = self.values.iter().map(|value| quoted(value)).collect();
        to_sentence(&values)
    }
}

impl<S: ValidationSubject> Matcher<S> for AllowValueMatcher {
    fn matches(&mut self, subject: &mut S) -> MatcherResult<bool> {
        self.evaluate(subject)
    }

    fn description(&self) -> String {
        format!("allow {} to be set to {}", self.attribute, self.quoted_values())
    }

    fn failure_message(&self) -> Option<String> {
        Self::failure_message(self)
    }

    fn negated_failure_message(&self) -> Option<String> {
        Self::negated_failure_message(self)
    }
}

// ============================================================================
// SECTION: Disallow Value
// ============================================================================

/// Asserts that an attribute rejects a value.
#[derive(Debug, Clone)]
pub struct DisallowValueMatcher {
    /// Allow matcher whose result and messages are inverted.
    allow: AllowValueMatcher,
}

impl DisallowValueMatcher {
    /// Creates a matcher probing `value` on an attribute set later.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            allow: AllowValueMatcher::new([value.into()]),
        }
    }

    /// Sets the attribute receiving the probe value.
    #[must_use]
    pub fn for_attribute(self, attribute: impl Into<String>) -> Self {
        Self {
            allow: self.allow.for_attribute(attribute),
        }
    }

    /// Requires the rejection to carry an error matching `message`. `None`
    /// keeps the current expectation.
    #[must_use]
    pub fn with_message(self, message: Option<ExpectedMessage>) -> Self {
        Self {
            allow: self.allow.with_message(message),
        }
    }

    /// Replaces the expectation in place.
    pub(crate) fn set_expected(&mut self, message: &ExpectedMessage) {
        self.allow.set_expected(message);
    }

    /// Probes the value and returns true when it was rejected.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MatcherError`] when the subject refuses the assignment.
    pub fn evaluate(&mut self, subject: &mut dyn ValidationSubject) -> MatcherResult<bool> {
        self.allow.evaluate(subject).map(|allowed| !allowed)
    }

    /// Message when the attribute was expected to reject but accepted.
    #[must_use]
    pub fn failure_message(&self) -> Option<String> {
        self.allow.negated_failure_message()
    }

    /// Message when the attribute was expected to accept but rejected.
    #[must_use]
    pub fn negated_failure_message(&self) -> Option<String> {
        self.allow.failure_message()
    }
}

impl<S: ValidationSubject> Matcher<S> for DisallowValueMatcher {
    fn matches(&mut self, subject: &mut S) -> MatcherResult<bool> {
        self.evaluate(subject)
    }

    fn description(&self) -> String {
        format!("not allow {} to be set to {}", self.allow.attribute(), self.allow.quoted_values())
    }

    fn failure_message(&self) -> Option<String> {
        Self::failure_message(self)
    }

    fn negated_failure_message(&self) -> Option<String> {
        Self::negated_failure_message(self)
    }
}
