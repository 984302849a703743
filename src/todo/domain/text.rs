//! Validated to-do description text.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Description of a to-do item.
///
/// The text is kept exactly as supplied; only the emptiness check is applied
/// to its trimmed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoText(String);

impl TodoText {
    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyDescription`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        if is_blank(&raw) {
            return Err(TodoDomainError::EmptyDescription);
        }
        Ok(Self(raw))
    }

    /// Returns the description as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns `true` when `value` has no non-whitespace characters.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl TryFrom<String> for TodoText {
    type Error = TodoDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TodoText> for String {
    fn from(value: TodoText) -> Self {
        value.0
    }
}

impl AsRef<str> for TodoText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TodoText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
