// crates/model-matchers/src/controller.rs
// ============================================================================
// Module: Controller Dispatch
// Description: Request verbs and the dispatch contract of the controller layer.
// Purpose: Let the permit matcher simulate requests without an HTTP stack.
// Dependencies: crate::error
// ============================================================================

//! ## Overview
//! A [`ControllerContext`] sends a verb to an action and reports which
//! parameter names the controller's whitelist accepted. [`Verb`] carries the
//! conventional mapping from RESTful action names to verbs.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::MatcherResult;

// ============================================================================
// SECTION: Verbs
// ============================================================================

/// Request verb used for a simulated controller action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// GET request.
    Get,
    /// POST request.
    Post,
    /// PUT request.
    Put,
    /// PATCH request.
    Patch,
    /// DELETE request.
    Delete,
}

impl Verb {
    /// Returns the upper-case verb name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Returns the conventional verb for a RESTful action name.
    #[must_use]
    pub fn for_restful_action(action: &str) -> Option<Self> {
        match action {
            "create" => Some(Self::Post),
            "update" => Some(Self::Put),
            "destroy" => Some(Self::Delete),
            "index" | "show" | "new" | "edit" => Some(Self::Get),
            _ => None,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Context Trait
// ============================================================================

/// Object able to dispatch a simulated request to a controller action.
pub trait ControllerContext {
    /// Sends `verb` to `action` and returns the parameter names the
    /// controller permitted. Actions that never whitelist return an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MatcherError::Dispatch`] when the request cannot be
    /// performed.
    fn dispatch(&mut self, verb: Verb, action: &str) -> MatcherResult<BTreeSet<String>>;
}
