// crates/model-matchers/src/permit.rs
// ============================================================================
// Module: Permitted Parameters Matcher
// Description: Asserts which request attributes a controller action whitelists.
// Purpose: Dispatch one simulated request and compare the permitted set.
// Dependencies: tracing, crate::{controller, error, matcher, text}
// ============================================================================

//! ## Overview
//! A [`PermitMatcher`] moves through three states: unconfigured, action set
//! (via [`PermitMatcher::for_action`]), and evaluated. The first evaluation
//! dispatches the request and memoizes the permitted set; later evaluations
//! reuse it.
//!
//! [`Matcher::does_not_match`] is not the negation of
//! [`Matcher::matches`]: it passes when at least one requested attribute was
//! permitted, so both can pass at once when the permitted set only partially
//! overlaps the request.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use tracing::debug;
use tracing::warn;

use crate::controller::ControllerContext;
use crate::controller::Verb;
use crate::error::MatcherError;
use crate::error::MatcherResult;
use crate::matcher::Matcher;
use crate::text::to_sentence;

// ============================================================================
// SECTION: Constructor
// ============================================================================

/// Creates a matcher asserting that `attributes` are permitted.
pub fn permit<'c, I, A>(attributes: I) -> PermitMatcher<'c>
where
    I: IntoIterator<Item = A>,
    A: Into<String>,
{
    PermitMatcher::new(attributes)
}

// ============================================================================
// SECTION: Action Target
// ============================================================================

/// Action a simulated request is sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ActionTarget {
    /// Action name.
    action: String,
    /// Explicit verb, if one was given.
    verb: Option<Verb>,
}

impl ActionTarget {
    /// Returns the explicit verb or the RESTful default for the action.
    fn resolve_verb(&self) -> MatcherResult<Verb> {
        self.verb.or_else(|| Verb::for_restful_action(&self.action)).ok_or_else(|| {
            MatcherError::VerbNotDefined {
                action: self.action.clone(),
            }
        })
    }
}

// ============================================================================
// SECTION: Permit Matcher
// ============================================================================

/// Asserts that a controller action permits a set of request attributes.
///
/// # Invariants
/// - The request is dispatched at most once per instance.
/// - Settings cannot change once the request was dispatched.
pub struct PermitMatcher<'c> {
    /// Requested attribute names.
    attributes: BTreeSet<String>,
    /// Target action, once configured.
    target: Option<ActionTarget>,
    /// Context overriding the caller's context.
    context: Option<&'c mut dyn ControllerContext>,
    /// Permitted names captured by the first evaluation.
    permitted: Option<BTreeSet<String>>,
    /// Setting changed after evaluation, reported at the next evaluation.
    late_setting: Option<&'static str>,
}

impl<'c> PermitMatcher<'c> {
    /// Creates an unconfigured matcher for `attributes`.
    pub fn new<I, A>(attributes: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            attributes: attributes.into_iter().map(Into::into).collect(),
            target: None,
            context: None,
            permitted: None,
            late_setting: None,
        }
    }

    /// Targets `action` using its conventional RESTful verb.
    #[must_use]
    pub fn for_action(self, action: impl Into<String>) -> Self {
        self.target(action.into(), None)
    }

    /// Targets `action` with an explicit verb.
    #[must_use]
    pub fn for_action_with_verb(self, action: impl Into<String>, verb: Verb) -> Self {
        self.target(action.into(), Some(verb))
    }

    /// Dispatches through `context` instead of the caller's context.
    #[must_use]
    pub fn in_context(mut self, context: &'c mut dyn ControllerContext) -> Self {
        self.note_setting("context");
        self.context = Some(context);
        self
    }

    /// Stores the target action.
    fn target(mut self, action: String, verb: Option<Verb>) -> Self {
        self.note_setting("action");
        self.target = Some(ActionTarget {
            action,
            verb,
        });
        self
    }

    /// Records a setting change that arrives after evaluation.
    fn note_setting(&mut self, setting: &'static str) {
        if self.permitted.is_some() {
            warn!(setting, "permit matcher reconfigured after evaluation");
            self.late_setting = Some(setting);
        }
    }

    /// Returns the requested attribute names in sorted order.
    #[must_use]
    pub const fn attributes(&self) -> &BTreeSet<String> {
        &self.attributes
    }

    /// Returns the permitted names captured by the first evaluation.
    #[must_use]
    pub const fn permitted(&self) -> Option<&BTreeSet<String>> {
        self.permitted.as_ref()
    }

    /// Dispatches the request unless it was dispatched already.
    fn ensure_dispatched(&mut self, caller: &mut dyn ControllerContext) -> MatcherResult {
        if let Some(setting) = self.late_setting {
            return Err(MatcherError::ConfiguredAfterEvaluation {
                setting,
            });
        }
        if self.permitted.is_some() {
            return Ok(());
        }
        let target = self.target.as_ref().ok_or(MatcherError::ActionNotDefined)?;
        let verb = target.resolve_verb()?;
        let permitted = match self.context.as_mut() {
            Some(context) => context.dispatch(verb, &target.action)?,
            None => caller.dispatch(verb, &target.action)?,
        };
        debug!(
            verb = %verb,
            action = %target.action,
            permitted = permitted.len(),
            requested = self.attributes.len(),
            "dispatched permit request"
        );
        self.permitted = Some(permitted);
        Ok(())
    }

    /// Requested attributes the controller did not permit.
    #[must_use]
    pub fn missing(&self) -> Option<Vec<&str>> {
        self.permitted.as_ref().map(|permitted| {
            self.attributes
                .iter()
                .filter(|attribute| !permitted.contains(*attribute))
                .map(String::as_str)
                .collect()
        })
    }

    /// Requested attributes the controller permitted.
    #[must_use]
    pub fn overlap(&self) -> Option<Vec<&str>> {
        self.permitted.as_ref().map(|permitted| {
            self.attributes
                .iter()
                .filter(|attribute| permitted.contains(*attribute))
                .map(String::as_str)
                .collect()
        })
    }

    /// Evaluates the positive assertion.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::ActionNotDefined`] without an action,
    /// [`MatcherError::VerbNotDefined`] for a non-RESTful action without a
    /// verb, [`MatcherError::ConfiguredAfterEvaluation`] after late
    /// reconfiguration, or the context's dispatch error.
    pub fn evaluate(&mut self, caller: &mut dyn ControllerContext) -> MatcherResult<bool> {
        self.ensure_dispatched(caller)?;
        Ok(self.missing().is_some_and(|missing| missing.is_empty()))
    }

    /// Evaluates the negated assertion: true when any requested attribute was
    /// permitted.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PermitMatcher::evaluate`].
    pub fn evaluate_negated(&mut self, caller: &mut dyn ControllerContext) -> MatcherResult<bool> {
        self.ensure_dispatched(caller)?;
        Ok(self.overlap().is_some_and(|overlap| !overlap.is_empty()))
    }

    /// Describes the assertion.
    #[must_use]
    pub fn description(&self) -> String {
        let attributes: Vec<&str> = self.attributes.iter().map(String::as_str).collect();
        let target = self.target.as_ref().map_or_else(String::new, |target| {
            match target.resolve_verb() {
                Ok(verb) => format!(" for {verb} #{}", target.action),
                Err(_) => format!(" for #{}", target.action),
            }
        });
        format!("permit {}{target}", to_sentence(&attributes))
    }

    /// Lists the requested attributes that were not permitted.
    #[must_use]
    pub fn failure_message(&self) -> Option<String> {
        self.missing().map(|missing| {
            format!("Expected controller to permit {}, but it did not.", to_sentence(&missing))
        })
    }

    /// Lists the requested attributes that were permitted.
    #[must_use]
    pub fn negated_failure_message(&self) -> Option<String> {
        self.overlap().map(|overlap| {
            format!("Expected controller not to permit {}, but it did.", to_sentence(&overlap))
        })
    }
}

impl<C: ControllerContext> Matcher<C> for PermitMatcher<'_> {
    fn matches(&mut self, subject: &mut C) -> MatcherResult<bool> {
        self.evaluate(subject)
    }

    fn does_not_match(&mut self, subject: &mut C) -> MatcherResult<bool> {
        self.evaluate_negated(subject)
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
