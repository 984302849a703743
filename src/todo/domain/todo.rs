//! To-do item entity.

use super::{TodoId, TodoText};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// Items are values: every change produces a new `Todo` and leaves the
/// original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    text: TodoText,
    done: bool,
    created_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a pending item stamped with the current clock time.
    #[must_use]
    pub fn new(id: TodoId, text: TodoText, clock: &impl Clock) -> Self {
        Self::new_at(id, text, clock.utc())
    }

    /// Creates a pending item with an explicit creation timestamp.
    #[must_use]
    pub const fn new_at(id: TodoId, text: TodoText, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            done: false,
            created_at,
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the description.
    #[must_use]
    pub const fn text(&self) -> &TodoText {
        &self.text
    }

    /// Returns `true` when the item is done.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a copy with the description replaced.
    #[must_use]
    pub fn with_text(&self, text: TodoText) -> Self {
        Self {
            text,
            ..self.clone()
        }
    }

    /// Returns a copy with the completion flag set to `done`.
    #[must_use]
    pub fn with_done(&self, done: bool) -> Self {
        Self {
            done,
            ..self.clone()
        }
    }

    /// Returns a copy with the completion flag flipped.
    #[must_use]
    pub fn toggled(&self) -> Self {
        self.with_done(!self.done)
    }
}
