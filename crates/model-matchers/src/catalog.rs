// crates/model-matchers/src/catalog.rs
// ============================================================================
// Module: Message Catalog
// Description: Default validation error texts and their TOML overrides.
// Purpose: Resolve message keys the way the subject's locale renders them.
// Dependencies: serde, thiserror, toml, tracing, crate::message
// ============================================================================

//! ## Overview
//! The catalog maps [`MessageKey`]s to templates containing an optional
//! `%{count}` placeholder. The builtin catalog carries the English defaults;
//! a TOML file with a `[messages]` table can override any subset of keys.
//!
//! ```toml
//! [messages]
//! odd = "has to be odd"
//! greater_than = "has to exceed %{count}"
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::message::MessageKey;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum catalog file size in bytes.
const MAX_CATALOG_FILE_SIZE: usize = 64 * 1024;
/// Placeholder replaced with the comparison bound.
const COUNT_PLACEHOLDER: &str = "%{count}";

/// Shared builtin English catalog.
static BUILTIN: LazyLock<MessageCatalog> = LazyLock::new(MessageCatalog::english);

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while loading a message catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O failure while reading the catalog file.
    #[error("catalog io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("catalog parse error: {0}")]
    Parse(String),
    /// Structurally valid TOML with invalid content.
    #[error("invalid catalog: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: File Model
// ============================================================================

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    /// Overrides keyed by message key name.
    #[serde(default)]
    messages: BTreeMap<String, String>,
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Message templates keyed by [`MessageKey`].
///
/// # Invariants
/// - Every key has a non-empty template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    /// Templates for every key.
    messages: BTreeMap<MessageKey, String>,
}

impl MessageCatalog {
    /// Returns the shared builtin English catalog.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Builds a catalog holding the English defaults.
    fn english() -> Self {
        Self {
            messages: MessageKey::ALL
                .into_iter()
                .map(|key| (key, key.builtin_text().to_string()))
                .collect(),
        }
    }

    /// Parses a TOML catalog, filling unlisted keys from the builtin catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the TOML is malformed, names an unknown
    /// key, or overrides a key with empty text.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|err| CatalogError::Parse(err.to_string()))?;
        let mut catalog = Self::english();
        for (name, text) in file.messages {
            let key = MessageKey::from_name(&name)
                .ok_or_else(|| CatalogError::Invalid(format!("unknown message key `{name}`")))?;
            catalog.messages.insert(key, text);
        }
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads a TOML catalog from disk.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the file cannot be read, exceeds the size
    /// limit, is not UTF-8, or fails [`MessageCatalog::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let bytes = fs::read(path).map_err(|err| CatalogError::Io(err.to_string()))?;
        if bytes.len() > MAX_CATALOG_FILE_SIZE {
            return Err(CatalogError::Invalid("catalog file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| CatalogError::Invalid("catalog file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Replaces the template for one key. Blank templates are ignored and the
    /// current template is kept.
    #[must_use]
    pub fn with_message(mut self, key: MessageKey, template: impl Into<String>) -> Self {
        let template = template.into();
        if template.trim().is_empty() {
            warn!(key = %key, "ignoring blank message template");
            return self;
        }
        self.messages.insert(key, template);
        self
    }

    /// Returns the raw template for `key`.
    #[must_use]
    pub fn template(&self, key: MessageKey) -> &str {
        self.messages.get(&key).map_or(key.builtin_text(), String::as_str)
    }

    /// Renders `key`, substituting `count` into the `%{count}` placeholder.
    #[must_use]
    pub fn render(&self, key: MessageKey, count: Option<&str>) -> String {
        let template = self.template(key);
        match count {
            Some(count) => template.replace(COUNT_PLACEHOLDER, count),
            None => template.to_string(),
        }
    }

    /// Checks that every template is usable.
    fn validate(&self) -> Result<(), CatalogError> {
        for (key, template) in &self.messages {
            if template.trim().is_empty() {
                return Err(CatalogError::Invalid(format!("message `{key}` must not be empty")));
            }
        }
        Ok(())
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::english()
    }
}
