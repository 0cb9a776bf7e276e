// crates/model-matchers/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result helpers and assertion macros for matcher tests.
// ============================================================================
//! ## Overview
//! Shared test helpers for consistent Result-based assertions.

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
    dead_code,
    unused_macros,
    reason = "Test-only helpers; not every test binary uses every helper."
)]

pub mod controllers;
pub mod models;

use std::error::Error;
use std::fmt;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across matcher integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl TestError {
    /// Creates a new test error with the provided message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition { Ok(()) } else { Err(Box::new(TestError::new(message))) }
}

/// Returns an error when two values differ.
///
/// Both operands are borrowed for the duration of the call, so temporaries in
/// the caller's expressions outlive the comparison.
///
/// # Errors
/// Returns a `TestError` naming both values when they are not equal.
pub fn ensure_eq<L, R>(left: &L, right: &R) -> TestResult
where
    L: PartialEq<R> + fmt::Debug + ?Sized,
    R: fmt::Debug + ?Sized,
{
    ensure(left == right, format!("Expected {left:?} == {right:?}"))
}

/// Returns an error when `haystack` does not contain `needle`.
///
/// # Errors
/// Returns a `TestError` naming both strings.
pub fn ensure_contains(haystack: &str, needle: &str) -> TestResult {
    ensure(haystack.contains(needle), format!("Expected {haystack:?} to include {needle:?}"))
}

/// Unwraps an optional message or fails the test.
///
/// # Errors
/// Returns a `TestError` when the message is absent.
pub fn message(value: Option<String>, what: &str) -> TestResult<String> {
    value.ok_or_else(|| -> Box<dyn Error> { Box::new(TestError::new(format!("{what} missing"))) })
}

// ========================================================================
// Assertion Macros
// ========================================================================

/// Checks a condition and returns a test error instead of panicking.
macro_rules! check {
    ($cond:expr $(,)?) => {{
        crate::support::ensure($cond, concat!("Assertion failed: ", stringify!($cond)))?;
    }};
    ($cond:expr, $($arg:tt)+) => {{
        crate::support::ensure($cond, format!($($arg)+))?;
    }};
}

/// Checks equality and returns a test error instead of panicking.
macro_rules! check_eq {
    ($left:expr, $right:expr $(,)?) => {{
        crate::support::ensure_eq(&$left, &$right)?;
    }};
    ($left:expr, $right:expr, $($arg:tt)+) => {{
        crate::support::ensure(&$left == &$right, format!($($arg)+))?;
    }};
}

/// Checks that `haystack` contains `needle`.
macro_rules! check_contains {
    ($haystack:expr, $needle:expr $(,)?) => {{
        crate::support::ensure_contains(&$haystack, &$needle)?;
    }};
}
