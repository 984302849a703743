//! Per-row action triggers.

use mockable::Clock;

use crate::todo::{
    domain::{TodoId, is_blank},
    ports::{EditPrompt, IdSource},
    services::TodoStore,
};

const EDIT_MESSAGE: &str = "Edit task";

/// Edit, toggle and delete triggers bound to one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoRow {
    id: TodoId,
}

impl TodoRow {
    /// Binds the triggers to `id`.
    #[must_use]
    pub const fn new(id: TodoId) -> Self {
        Self { id }
    }

    /// Returns the bound identifier.
    #[must_use]
    pub const fn id(self) -> TodoId {
        self.id
    }

    /// Prompts for replacement text and applies it.
    ///
    /// Cancellation, blank answers and a missing item leave the store
    /// untouched.
    pub fn edit<I, C>(self, store: &mut TodoStore<I, C>, prompt: &mut impl EditPrompt) -> bool
    where
        I: IdSource,
        C: Clock,
    {
        let Some(todo) = store.state().get(self.id) else {
            return false;
        };
        match prompt.prompt(EDIT_MESSAGE, todo.text().as_str()) {
            Some(answer) if !is_blank(&answer) => store.edit(self.id, &answer),
            _ => false,
        }
    }

    /// Flips the bound item's completion flag.
    pub fn toggle<I, C>(self, store: &mut TodoStore<I, C>) -> bool
    where
        I: IdSource,
        C: Clock,
    {
        store.toggle_one(self.id)
    }

    /// Deletes the bound item.
    pub fn delete<I, C>(self, store: &mut TodoStore<I, C>) -> bool
    where
        I: IdSource,
        C: Clock,
    {
        store.remove(self.id)
    }
}
