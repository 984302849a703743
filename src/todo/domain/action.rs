//! User intents and the pure list reducer.

use super::{Todo, TodoId, TodoList, TodoText};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A state transition requested by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TodoAction {
    /// Append a new pending item.
    Add {
        /// Identifier minted for the new item.
        id: TodoId,
        /// Validated description.
        text: TodoText,
        /// Creation timestamp.
        created_at: DateTime<Utc>,
    },
    /// Delete an item.
    Remove {
        /// Item to delete.
        id: TodoId,
    },
    /// Flip one item's completion flag.
    ToggleOne {
        /// Item to toggle.
        id: TodoId,
    },
    /// Mark everything done, or everything pending when all are done.
    ToggleAll,
    /// Replace an item's description.
    Edit {
        /// Item to edit.
        id: TodoId,
        /// Validated replacement description.
        text: TodoText,
    },
}

impl TodoAction {
    /// Returns a short name for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
            Self::ToggleOne { .. } => "toggle_one",
            Self::ToggleAll => "toggle_all",
            Self::Edit { .. } => "edit",
        }
    }
}

/// Applies `action` to `list`, returning the next state.
#[must_use]
pub fn reduce(list: &TodoList, action: TodoAction) -> TodoList {
    match action {
        TodoAction::Add {
            id,
            text,
            created_at,
        } => list.add(Todo::new_at(id, text, created_at)),
        TodoAction::Remove { id } => list.remove(id),
        TodoAction::ToggleOne { id } => list.toggle_one(id),
        TodoAction::ToggleAll => list.toggle_all(),
        TodoAction::Edit { id, text } => list.edit(id, &text),
    }
}
