// crates/model-matchers/src/message.rs
// ============================================================================
// Module: Expected Messages
// Description: Expected validation error text for value probes.
// Purpose: Model default keys, exact overrides, and pattern overrides uniformly.
// Dependencies: regex, crate::catalog, crate::text
// ============================================================================

//! ## Overview
//! A probe succeeds or fails depending on whether the subject's errors for an
//! attribute match an expectation. Expectations are either catalog keys
//! (resolved against the subject's [`MessageCatalog`] when evaluated), exact
//! strings, or regular expressions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use regex::Regex;

use crate::catalog::MessageCatalog;
use crate::text::quoted;

// ============================================================================
// SECTION: Message Keys
// ============================================================================

/// Default error message keys understood by numericality validations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKey {
    /// The value could not be parsed as a number.
    NotANumber,
    /// The value is numeric but not an integer.
    NotAnInteger,
    /// The value must be odd.
    Odd,
    /// The value must be even.
    Even,
    /// The value must exceed `%{count}`.
    GreaterThan,
    /// The value must be at least `%{count}`.
    GreaterThanOrEqualTo,
    /// The value must equal `%{count}`.
    EqualTo,
    /// The value must be below `%{count}`.
    LessThan,
    /// The value must be at most `%{count}`.
    LessThanOrEqualTo,
}

impl MessageKey {
    /// Every key, in catalog order.
    pub const ALL: [Self; 9] = [
        Self::NotANumber,
        Self::NotAnInteger,
        Self::Odd,
        Self::Even,
        Self::GreaterThan,
        Self::GreaterThanOrEqualTo,
        Self::EqualTo,
        Self::LessThan,
        Self::LessThanOrEqualTo,
    ];

    /// Returns the stable snake-case name used in catalog files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotANumber => "not_a_number",
            Self::NotAnInteger => "not_an_integer",
            Self::Odd => "odd",
            Self::Even => "even",
            Self::GreaterThan => "greater_than",
            Self::GreaterThanOrEqualTo => "greater_than_or_equal_to",
            Self::EqualTo => "equal_to",
            Self::LessThan => "less_than",
            Self::LessThanOrEqualTo => "less_than_or_equal_to",
        }
    }

    /// Returns the builtin English template for this key.
    #[must_use]
    pub const fn builtin_text(self) -> &'static str {
        match self {
            Self::NotANumber => "is not a number",
            Self::NotAnInteger => "must be an integer",
            Self::Odd => "must be odd",
            Self::Even => "must be even",
            Self::GreaterThan => "must be greater than %{count}",
            Self::GreaterThanOrEqualTo => "must be greater than or equal to %{count}",
            Self::EqualTo => "must be equal to %{count}",
            Self::LessThan => "must be less than %{count}",
            Self::LessThanOrEqualTo => "must be less than or equal to %{count}",
        }
    }

    /// Looks a key up by its catalog name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Expected Message
// ============================================================================

/// Error text a probe expects to find on the attribute under test.
#[derive(Debug, Clone)]
pub enum ExpectedMessage {
    /// Catalog key resolved through the subject's catalog at evaluation time.
    Key {
        /// Catalog key.
        key: MessageKey,
        /// Value interpolated into `%{count}`.
        count: Option<String>,
    },
    /// Errors must contain this exact string.
    Exact(String),
    /// Some error must match this pattern.
    Pattern(Regex),
}

impl ExpectedMessage {
    /// Expects the default text for `key`.
    #[must_use]
    pub const fn key(key: MessageKey) -> Self {
        Self::Key {
            key,
            count: None,
        }
    }

    /// Expects the default text for `key` with `%{count}` filled in.
    pub fn key_with_count(key: MessageKey, count: impl fmt::Display) -> Self {
        Self::Key {
            key,
            count: Some(count.to_string()),
        }
    }

    /// Expects an exact error string.
    pub fn exact(text: impl Into<String>) -> Self {
        Self::Exact(text.into())
    }

    /// Expects some error matching `pattern`.
    #[must_use]
    pub const fn pattern(pattern: Regex) -> Self {
        Self::Pattern(pattern)
    }

    /// Returns true for a catalog-key expectation.
    #[must_use]
    pub const fn is_key(&self) -> bool {
        matches!(self, Self::Key { .. })
    }

    /// Resolves catalog keys into concrete text.
    #[must_use]
    pub fn resolve(&self, catalog: &MessageCatalog) -> ResolvedMessage {
        match self {
            Self::Key {
                key,
                count,
            } => ResolvedMessage::Exact(catalog.render(*key, count.as_deref())),
            Self::Exact(text) => ResolvedMessage::Exact(text.clone()),
            Self::Pattern(pattern) => ResolvedMessage::Pattern(pattern.clone()),
        }
    }
}

impl From<&str> for ExpectedMessage {
    fn from(text: &str) -> Self {
        Self::exact(text)
    }
}

impl From<String> for ExpectedMessage {
    fn from(text: String) -> Self {
        Self::Exact(text)
    }
}

impl From<Regex> for ExpectedMessage {
    fn from(pattern: Regex) -> Self {
        Self::Pattern(pattern)
    }
}

// ============================================================================
// SECTION: Resolved Message
// ============================================================================

/// Expectation with every catalog lookup already applied.
#[derive(Debug, Clone)]
pub enum ResolvedMessage {
    /// Exact error string.
    Exact(String),
    /// Error pattern.
    Pattern(Regex),
}

impl ResolvedMessage {
    /// Returns true when any of `errors` satisfies the expectation.
    #[must_use]
    pub fn matches_any(&self, errors: &[String]) -> bool {
        match self {
            Self::Exact(text) => errors.iter().any(|error| error == text),
            Self::Pattern(pattern) => errors.iter().any(|error| pattern.is_match(error)),
        }
    }
}

impl fmt::Display for ResolvedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(text) => f.write_str(&quoted(text)),
            Self::Pattern(pattern) => write!(f, "/{}/", pattern.as_str()),
        }
    }
}
