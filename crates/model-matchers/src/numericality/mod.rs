// crates/model-matchers/src/numericality/mod.rs
// ============================================================================
// Module: Numericality Matcher
// Description: Composite matcher for numericality validations on one attribute.
// Purpose: Combine ordered sub-matchers into one predicate with one description.
// Dependencies: tracing, crate::{allow_value, error, matcher, message, subject}
// ============================================================================

//! ## Overview
//! [`ValidateNumericalityMatcher`] always starts with a baseline check that the
//! attribute rejects a non-numeric value. Builder calls append further
//! sub-matchers in call order. Evaluation runs every sub-matcher and records
//! which ones failed; the messages surfaced afterwards come from the **last**
//! failing sub-matcher only.
//!
//! ```ignore
//! let mut matcher = validate_numericality_of("age")
//!     .only_integer()
//!     .is_greater_than(18)
//!     .is_less_than_or_equal_to(100);
//! assert_eq!(
//!     matcher.description(),
//!     "only allow integers for age which are greater than 18 and less than or equal to 100"
//! );
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod comparison;
pub mod only_integer;
pub mod parity;
mod probe;
pub mod submatcher;

// ============================================================================
// SECTION: Imports
// ============================================================================

use bigdecimal::BigDecimal;
use tracing::debug;

use crate::allow_value::DisallowValueMatcher;
use crate::error::MatcherResult;
use crate::matcher::Matcher;
use crate::message::ExpectedMessage;
use crate::message::MessageKey;
use crate::subject::ValidationSubject;
use self::comparison::ComparisonMatcher;
use self::comparison::ComparisonOperator;
use self::only_integer::OnlyIntegerMatcher;
use self::parity::ParityMatcher;
use self::submatcher::DescriptionFragment;
use self::submatcher::Parity;
use self::submatcher::Submatcher;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Probe every numericality validation must reject.
pub const NON_NUMERIC_VALUE: &str = "abcd";

// ============================================================================
// SECTION: Constructor
// ============================================================================

/// Creates a numericality matcher for `attribute`.
pub fn validate_numericality_of(attribute: impl Into<String>) -> ValidateNumericalityMatcher {
    ValidateNumericalityMatcher::new(attribute)
}

// ============================================================================
// SECTION: Composite Matcher
// ============================================================================

/// Composite matcher over an ordered list of numericality sub-matchers.
///
/// # Invariants
/// - The first sub-matcher is the non-numeric rejection check; it is never
///   removed.
/// - Sub-matchers keep registration order; descriptions and the reported
///   failure depend on it.
#[derive(Debug)]
pub struct ValidateNumericalityMatcher {
    /// Attribute under test.
    attribute: String,
    /// Sub-matchers in registration order.
    submatchers: Vec<Box<dyn Submatcher>>,
    /// Indices of sub-matchers that failed on the latest evaluation.
    failing: Option<Vec<usize>>,
}

impl ValidateNumericalityMatcher {
    /// Creates a matcher holding only the non-numeric rejection check.
    pub fn new(attribute: impl Into<String>) -> Self {
        let attribute = attribute.into();
        let baseline = DisallowValueMatcher::new(NON_NUMERIC_VALUE)
            .for_attribute(attribute.clone())
            .with_message(Some(ExpectedMessage::key(MessageKey::NotANumber)));
        Self {
            attribute,
            submatchers: vec![Box::new(baseline)],
            failing: None,
        }
    }

    /// Returns the attribute under test.
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Returns the number of registered sub-matchers, baseline included.
    #[must_use]
    pub fn submatcher_count(&self) -> usize {
        self.submatchers.len()
    }

    /// Appends a sub-matcher.
    #[must_use]
    pub fn with_submatcher(mut self, submatcher: Box<dyn Submatcher>) -> Self {
        self.submatchers.push(submatcher);
        self
    }

    /// Requires integer values.
    #[must_use]
    pub fn only_integer(self) -> Self {
        let submatcher = OnlyIntegerMatcher::new(self.attribute.clone());
        self.with_submatcher(Box::new(submatcher))
    }

    /// Requires values greater than `bound`.
    #[must_use]
    pub fn is_greater_than(self, bound: impl Into<BigDecimal>) -> Self {
        self.comparison(bound, ComparisonOperator::GreaterThan)
    }

    /// Requires values greater than or equal to `bound`.
    #[must_use]
    pub fn is_greater_than_or_equal_to(self, bound: impl Into<BigDecimal>) -> Self {
        self.comparison(bound, ComparisonOperator::GreaterThanOrEqualTo)
    }

    /// Requires values equal to `bound`.
    #[must_use]
    pub fn is_equal_to(self, bound: impl Into<BigDecimal>) -> Self {
        self.comparison(bound, ComparisonOperator::EqualTo)
    }

    /// Requires values less than `bound`.
    #[must_use]
    pub fn is_less_than(self, bound: impl Into<BigDecimal>) -> Self {
        self.comparison(bound, ComparisonOperator::LessThan)
    }

    /// Requires values less than or equal to `bound`.
    #[must_use]
    pub fn is_less_than_or_equal_to(self, bound: impl Into<BigDecimal>) -> Self {
        self.comparison(bound, ComparisonOperator::LessThanOrEqualTo)
    }

    /// Requires odd values.
    #[must_use]
    pub fn odd(self) -> Self {
        self.parity(Parity::Odd)
    }

    /// Requires even values.
    #[must_use]
    pub fn even(self) -> Self {
        self.parity(Parity::Even)
    }

    /// Overrides the expected error text of every sub-matcher registered so
    /// far. Sub-matchers added afterwards keep their defaults. `None` changes
    /// nothing.
    #[must_use]
    pub fn with_message(mut self, message: Option<ExpectedMessage>) -> Self {
        if let Some(message) = message {
            for submatcher in &mut self.submatchers {
                submatcher.override_message(&message);
            }
        }
        self
    }

    /// Appends a comparison sub-matcher.
    fn comparison(self, bound: impl Into<BigDecimal>, operator: ComparisonOperator) -> Self {
        let submatcher = ComparisonMatcher::new(self.attribute.clone(), bound, operator);
        self.with_submatcher(Box::new(submatcher))
    }

    /// Appends a parity sub-matcher.
    fn parity(self, parity: Parity) -> Self {
        let submatcher = ParityMatcher::new(self.attribute.clone(), parity);
        self.with_submatcher(Box::new(submatcher))
    }

    /// Evaluates every sub-matcher and records the failures.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MatcherError`] when the subject refuses a probe.
    pub fn evaluate(&mut self, subject: &mut dyn ValidationSubject) -> MatcherResult<bool> {
        let mut failing = Vec::new();
        for (index, submatcher) in self.submatchers.iter_mut().enumerate() {
            if !submatcher.matches(subject)? {
                failing.push(index);
            }
        }
        debug!(
            attribute = %self.attribute,
            submatchers = self.submatchers.len(),
            failing = failing.len(),
            "evaluated numericality matcher"
        );
        let matched = failing.is_empty();
        self.failing = Some(failing);
        Ok(matched)
    }

    /// Indices of the sub-matchers that failed on the latest evaluation.
    #[must_use]
    pub fn failing_submatchers(&self) -> &[usize] {
        self.failing.as_deref().unwrap_or_default()
    }

    /// The sub-matcher whose messages surface.
    fn last_failing(&self) -> Option<&dyn Submatcher> {
        let index = *self.failing.as_ref()?.last()?;
        let submatcher: &dyn Submatcher = self.submatchers.get(index)?.as_ref();
        Some(submatcher)
    }

    /// Builds the description from the registered sub-matchers: `integers`
    /// when integers are required, `numbers` after a parity word, and
    /// `numeric values` otherwise.
    #[must_use]
    pub fn description(&self) -> String {
        let mut integer = false;
        let mut parities = Vec::new();
        let mut clauses = Vec::new();
        for submatcher in &self.submatchers {
            match submatcher.fragment() {
                DescriptionFragment::None => {}
                DescriptionFragment::Integer => integer = true,
                DescriptionFragment::Parity(parity) => parities.push(parity.as_str()),
                DescriptionFragment::Clause(clause) => clauses.push(clause),
            }
        }

        let noun = match (integer, parities.is_empty()) {
            (true, _) => "integers",
            (false, false) => "numbers",
            (false, true) => "numeric values",
        };
        let mut description = String::from("only allow ");
        for parity in parities {
            description.push_str(parity);
            description.push(' ');
        }
        description.push_str(noun);
        description.push_str(" for ");
        description.push_str(&self.attribute);
        if !clauses.is_empty() {
            description.push_str(" which are ");
            description.push_str(&clauses.join(" and "));
        }
        description
    }

    /// Positive failure message of the last failing sub-matcher.
    #[must_use]
    pub fn failure_message(&self) -> Option<String> {
        self.last_failing().and_then(Submatcher::failure_message)
    }

    /// Negated failure message of the last failing sub-matcher.
    #[must_use]
    pub fn negated_failure_message(&self) -> Option<String> {
        self.last_failing().and_then(Submatcher::negated_failure_message)
    }
}

impl<S: ValidationSubject> Matcher<S> for ValidateNumericalityMatcher {
    fn matches(&mut self, subject: &mut S) -> MatcherResult<bool> {
        self.evaluate(subject)
    }

    fn description(&self) -> String {
        Self::description(self)
    }

    fn failure_message(&self) -> Option<String> {
        Self::failure_message(self)
    }

    fn negated_failure_message(&self) -> Option<String> {
        Self::negated_failure_message(self)
    }
}
