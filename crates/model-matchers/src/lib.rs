// crates/model-matchers/src/lib.rs
// ============================================================================
// Module: Model Matchers Root
// Description: Public API surface for validation and parameter matchers.
// Purpose: Wire together the matcher protocol, probes, and matcher families.
// Dependencies: crate::{allow_value, catalog, controller, error, matcher, message,
//              numericality, permit, subject, text}
// ============================================================================

//! ## Overview
//! Declarative matchers for two externally supplied engines: a model's
//! numericality validations and a controller's parameter whitelist. Both
//! families implement [`Matcher`], so an assertion framework can evaluate them
//! and surface their failure messages uniformly.
//!
//! The engines themselves stay outside this crate. Models are reached through
//! [`ValidationSubject`]; controllers through [`ControllerContext`].

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod allow_value;
pub mod catalog;
pub mod controller;
pub mod error;
pub mod matcher;
pub mod message;
pub mod numericality;
pub mod permit;
pub mod subject;
mod text;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use allow_value::AllowValueMatcher;
pub use allow_value::DisallowValueMatcher;
pub use allow_value::allow_value;
pub use allow_value::disallow_value;
pub use catalog::CatalogError;
pub use catalog::MessageCatalog;
pub use controller::ControllerContext;
pub use controller::Verb;
pub use error::MatcherError;
pub use error::MatcherResult;
pub use matcher::Matcher;
pub use message::ExpectedMessage;
pub use message::MessageKey;
pub use message::ResolvedMessage;
pub use numericality::NON_NUMERIC_VALUE;
pub use numericality::ValidateNumericalityMatcher;
pub use numericality::comparison::ComparisonMatcher;
pub use numericality::comparison::ComparisonOperator;
pub use numericality::only_integer::OnlyIntegerMatcher;
pub use numericality::parity::ParityMatcher;
pub use numericality::submatcher::DescriptionFragment;
pub use numericality::submatcher::Parity;
pub use numericality::submatcher::Submatcher;
pub use numericality::validate_numericality_of;
pub use permit::PermitMatcher;
pub use permit::permit;
pub use subject::ValidationSubject;
