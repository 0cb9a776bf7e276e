// crates/model-matchers/tests/support/models.rs
// ============================================================================
// Module: Fixture Models
// Description: In-memory model with configurable numericality validation.
// ============================================================================
//! ## Overview
//! `ExampleModel` stands in for the validation engine under test. It validates
//! a single attribute according to `Numericality` rules and records error
//! messages the way a numericality validator reports them.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    dead_code,
    reason = "Test-only fixtures; not every test binary uses every helper."
)]

use std::str::FromStr;

use bigdecimal::BigDecimal;
use model_matchers::MatcherError;
use model_matchers::MatcherResult;
use model_matchers::MessageCatalog;
use model_matchers::MessageKey;
use model_matchers::ValidationSubject;

// ========================================================================
// Validation Rules
// ========================================================================

/// Numericality options applied by the fixture model.
#[derive(Debug, Clone, Default)]
pub struct Numericality {
    /// Reject non-integer numbers.
    only_integer: bool,
    /// Reject even numbers.
    odd: bool,
    /// Reject odd numbers.
    even: bool,
    /// Ordering bounds in check order.
    bounds: Vec<(MessageKey, BigDecimal)>,
    /// Message replacing every default error text.
    message: Option<String>,
}

impl Numericality {
    /// Plain numericality with no options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `only_integer`.
    pub fn only_integer(mut self) -> Self {
        self.only_integer = true;
        self
    }

    /// Adds `odd`.
    pub fn odd(mut self) -> Self {
        self.odd = true;
        self
    }

    /// Adds `even`.
    pub fn even(mut self) -> Self {
        self.even = true;
        self
    }

    /// Adds `greater_than`.
    pub fn greater_than(self, bound: impl Into<BigDecimal>) -> Self {
        self.bound(MessageKey::GreaterThan, bound)
    }

    /// Adds `greater_than_or_equal_to`.
    pub fn greater_than_or_equal_to(self, bound: impl Into<BigDecimal>) -> Self {
        self.bound(MessageKey::GreaterThanOrEqualTo, bound)
    }

    /// Adds `equal_to`.
    pub fn equal_to(self, bound: impl Into<BigDecimal>) -> Self {
        self.bound(MessageKey::EqualTo, bound)
    }

    /// Adds `less_than`.
    pub fn less_than(self, bound: impl Into<BigDecimal>) -> Self {
        self.bound(MessageKey::LessThan, bound)
    }

    /// Adds `less_than_or_equal_to`.
    pub fn less_than_or_equal_to(self, bound: impl Into<BigDecimal>) -> Self {
        self.bound(MessageKey::LessThanOrEqualTo, bound)
    }

    /// Replaces every error text with `message`.
    pub fn message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    /// Appends an ordering bound.
    fn bound(mut self, key: MessageKey, bound: impl Into<BigDecimal>) -> Self {
        self.bounds.push((key, bound.into()));
        self
    }

    /// Renders the error text for `key`.
    fn error(
        &self,
        catalog: &MessageCatalog,
        key: MessageKey,
        count: Option<&BigDecimal>,
    ) -> String {
        self.message.clone().unwrap_or_else(|| {
            let count = count.map(ToString::to_string);
            catalog.render(key, count.as_deref())
        })
    }

    /// Validates a raw value and returns the resulting errors.
    fn check(&self, raw: Option<&str>, catalog: &MessageCatalog) -> Vec<String> {
        let raw = raw.unwrap_or_default().trim();
        let Ok(number) = BigDecimal::from_str(raw) else {
            return vec![self.error(catalog, MessageKey::NotANumber, None)];
        };
        if self.only_integer && !is_integer_literal(raw) {
            return vec![self.error(catalog, MessageKey::NotAnInteger, None)];
        }

        let mut errors = Vec::new();
        for (key, bound) in &self.bounds {
            let satisfied = match key {
                MessageKey::GreaterThan => number > *bound,
                MessageKey::GreaterThanOrEqualTo => number >= *bound,
                MessageKey::EqualTo => number == *bound,
                MessageKey::LessThan => number < *bound,
                MessageKey::LessThanOrEqualTo => number <= *bound,
                _ => true,
            };
            if !satisfied {
                errors.push(self.error(catalog, *key, Some(bound)));
            }
        }
        if self.odd && !is_odd(&number) {
            errors.push(self.error(catalog, MessageKey::Odd, None));
        }
        if self.even && is_odd(&number) {
            errors.push(self.error(catalog, MessageKey::Even, None));
        }
        errors
    }
}

/// Returns true for an optionally signed run of digits.
fn is_integer_literal(raw: &str) -> bool {
    let digits = raw.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(raw);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Returns true when the integer part of `number` is odd.
fn is_odd(number: &BigDecimal) -> bool {
    number.with_scale(0).to_string().parse::<i128>().is_ok_and(|value| value % 2 != 0)
}

// ========================================================================
// Example Model
// ========================================================================

/// Model with one attribute and an optional numericality validation.
#[derive(Debug, Clone)]
pub struct ExampleModel {
    /// Name of the only attribute.
    attribute: String,
    /// Raw value currently assigned.
    raw: Option<String>,
    /// Validation applied to the attribute, if any.
    rules: Option<Numericality>,
    /// Errors from the last validation run.
    errors: Vec<String>,
    /// Catalog used for default messages.
    catalog: MessageCatalog,
    /// Number of validation runs so far.
    validations: usize,
}

impl ExampleModel {
    /// Model validating `attribute` with `rules`.
    pub fn validating(attribute: &str, rules: Numericality) -> Self {
        Self {
            rules: Some(rules),
            ..Self::unvalidated(attribute)
        }
    }

    /// Model with a plain string attribute and no validation.
    pub fn unvalidated(attribute: &str) -> Self {
        Self {
            attribute: attribute.to_string(),
            raw: None,
            rules: None,
            errors: Vec::new(),
            catalog: MessageCatalog::default(),
            validations: 0,
        }
    }

    /// Replaces the message catalog.
    pub fn with_catalog(mut self, catalog: MessageCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Number of validation runs so far.
    pub const fn validations(&self) -> usize {
        self.validations
    }

    /// Raw value currently assigned.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl ValidationSubject for ExampleModel {
    fn assign(&mut self, attribute: &str, value: &str) -> MatcherResult {
        if attribute != self.attribute {
            return Err(MatcherError::unknown_attribute(attribute));
        }
        self.raw = Some(value.to_string());
        Ok(())
    }

    fn validate(&mut self) {
        self.validations += 1;
        self.errors = match &self.rules {
            Some(rules) => rules.check(self.raw.as_deref(), &self.catalog),
            None => Vec::new(),
        };
    }

    fn errors_on(&self, attribute: &str) -> Vec<String> {
        if attribute == self.attribute { self.errors.clone() } else { Vec::new() }
    }

    fn message_catalog(&self) -> &MessageCatalog {
        &self.catalog
    }
}

/// Model validating `attr` with `rules`.
pub fn validating_numericality(rules: Numericality) -> ExampleModel {
    ExampleModel::validating("attr", rules)
}

/// Model whose `attr` has no validation.
pub fn not_validating_numericality() -> ExampleModel {
    ExampleModel::unvalidated("attr")
}
