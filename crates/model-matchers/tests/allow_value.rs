// crates/model-matchers/tests/allow_value.rs
// ============================================================================
// Module: Value Probe Tests
// Description: Allow/disallow matchers against fixture models.
// Purpose: Validate probe ordering, expectation scoping, and message text.
// Dependencies: model_matchers
// ============================================================================
//! ## Overview
//! Covers the allow/disallow primitives directly, including their messages
//! with and without an expected error text.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

#[macro_use]
mod support;

use model_matchers::AllowValueMatcher;
use model_matchers::DisallowValueMatcher;
use model_matchers::ExpectedMessage;
use model_matchers::Matcher;
use model_matchers::MessageKey;
use model_matchers::allow_value;
use model_matchers::disallow_value;
use support::TestResult;
use support::message;
use support::models::ExampleModel;
use support::models::Numericality;
use support::models::not_validating_numericality;
use support::models::validating_numericality;

/// Description through the matcher protocol.
fn describe<M: Matcher<ExampleModel>>(matcher: &M) -> String {
    matcher.description()
}

// ============================================================================
// SECTION: Allow Value
// ============================================================================

#[test]
fn allow_value_accepts_valid_values() -> TestResult {
    let mut model = validating_numericality(Numericality::new());
    let mut matcher = allow_value(["1", "2.5", "-7"]).for_attribute("attr");
    check!(matcher.matches(&mut model)?);
    check_eq!(model.raw(), Some("-7"));
    Ok(())
}

#[test]
fn allow_value_stops_at_first_rejection() -> TestResult {
    let mut model = validating_numericality(Numericality::new());
    let mut matcher = allow_value(["1", "abc", "2"]).for_attribute("attr");
    check!(!matcher.matches(&mut model)?);
    check_eq!(model.validations(), 2);
    check_eq!(
        message(matcher.failure_message(), "failure message")?,
        "Did not expect errors when attr is set to \"abc\", got errors: \"is not a number\""
    );
    Ok(())
}

#[test]
fn allow_value_ignores_errors_outside_expectation() -> TestResult {
    let mut model = validating_numericality(Numericality::new().greater_than(10));
    let mut scoped = allow_value(["5"])
        .for_attribute("attr")
        .with_message(Some(ExpectedMessage::key(MessageKey::NotANumber)));
    check!(scoped.matches(&mut model)?);

    let mut unscoped = allow_value(["5"]).for_attribute("attr");
    check!(!unscoped.matches(&mut model)?);
    Ok(())
}

#[test]
fn allow_value_negated_message_reports_observed_errors() -> TestResult {
    let mut model = not_validating_numericality();
    let mut matcher = AllowValueMatcher::new(["abcd"])
        .for_attribute("attr")
        .with_message(Some("is not a number".into()));
    check!(matcher.matches(&mut model)?);
    check_eq!(
        message(matcher.negated_failure_message(), "negated failure message")?,
        "Expected errors to include \"is not a number\" when attr is set to \"abcd\", got no \
         errors"
    );
    Ok(())
}

#[test]
fn allow_value_messages_absent_before_evaluation() -> TestResult {
    let matcher = allow_value(["1"]).for_attribute("attr");
    check_eq!(matcher.failure_message(), None);
    check_eq!(matcher.negated_failure_message(), None);
    check_eq!(matcher.attribute(), "attr");
    Ok(())
}

#[test]
fn allow_value_description_lists_values() -> TestResult {
    let matcher = allow_value(["1", "2", "3"]).for_attribute("attr");
    check_eq!(describe(&matcher), "allow attr to be set to \"1\", \"2\", and \"3\"");
    Ok(())
}

// ============================================================================
// SECTION: Disallow Value
// ============================================================================

#[test]
fn disallow_value_passes_when_rejected() -> TestResult {
    let mut model = validating_numericality(Numericality::new());
    let mut matcher = disallow_value("abcd").for_attribute("attr");
    check!(matcher.matches(&mut model)?);
    check!(!matcher.does_not_match(&mut model)?);
    Ok(())
}

#[test]
fn disallow_value_swaps_messages() -> TestResult {
    let mut model = not_validating_numericality();
    let mut matcher = DisallowValueMatcher::new("abcd")
        .for_attribute("attr")
        .with_message(Some(ExpectedMessage::key(MessageKey::NotANumber)));
    check!(!matcher.matches(&mut model)?);
    check_eq!(
        message(matcher.failure_message(), "failure message")?,
        "Expected errors to include \"is not a number\" when attr is set to \"abcd\", got no \
         errors"
    );
    check_eq!(
        message(matcher.negated_failure_message(), "negated failure message")?,
        "Did not expect errors to include \"is not a number\" when attr is set to \"abcd\", got \
         no errors"
    );
    Ok(())
}

#[test]
fn disallow_value_with_message_none_keeps_expectation() -> TestResult {
    let mut model = validating_numericality(Numericality::new().message("custom"));
    let mut matcher = disallow_value("abcd")
        .for_attribute("attr")
        .with_message(Some("custom".into()))
        .with_message(None);
    check!(matcher.matches(&mut model)?);
    Ok(())
}

#[test]
fn disallow_value_description() -> TestResult {
    let matcher = disallow_value("abcd").for_attribute("attr");
    check_eq!(describe(&matcher), "not allow attr to be set to \"abcd\"");
    Ok(())
}

#[test]
fn quotes_in_values_are_escaped() -> TestResult {
    let mut model = validating_numericality(Numericality::new());
    let mut matcher = allow_value(["say \"hi\""]).for_attribute("attr");
    check!(!matcher.matches(&mut model)?);
    check_contains!(
        message(matcher.failure_message(), "failure message")?,
        "when attr is set to \"say \\\"hi\\\"\""
    );
    Ok(())
}
