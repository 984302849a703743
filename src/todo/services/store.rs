//! Task collection manager.
//!
//! [`TodoStore`] owns the current [`TodoList`] and is the single place state
//! changes are committed. Every mutation is expressed as a [`TodoAction`],
//! run through [`reduce`], and published to subscribed observers when the
//! resulting list differs from the previous one.

use mockable::Clock;
use tracing::debug;

use crate::todo::{
    domain::{Todo, TodoAction, TodoId, TodoList, TodoText, reduce},
    ports::{IdSource, StateObserver},
};

/// Owner of the to-do list state.
pub struct TodoStore<I, C>
where
    I: IdSource,
    C: Clock,
{
    state: TodoList,
    ids: I,
    clock: C,
    observers: Vec<Box<dyn StateObserver>>,
}

impl<I, C> TodoStore<I, C>
where
    I: IdSource,
    C: Clock,
{
    /// Creates a store with an empty list.
    #[must_use]
    pub const fn new(ids: I, clock: C) -> Self {
        Self {
            state: TodoList::new(),
            ids,
            clock,
            observers: Vec::new(),
        }
    }

    /// Creates a store whose list starts with one pending item per seed.
    ///
    /// Blank seeds are skipped.
    #[must_use]
    pub fn with_seed<S>(ids: I, clock: C, seeds: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        let state = seeds
            .into_iter()
            .filter_map(|seed| TodoText::new(seed).ok())
            .map(|text| Todo::new(ids.next_id(), text, &clock))
            .collect();
        Self {
            state,
            ids,
            clock,
            observers: Vec::new(),
        }
    }

    /// Returns the current list.
    #[must_use]
    pub const fn state(&self) -> &TodoList {
        &self.state
    }

    /// Registers an observer notified after every state change.
    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Applies an action and returns `true` when the list changed.
    pub fn dispatch(&mut self, action: TodoAction) -> bool {
        let kind = action.kind();
        let next = reduce(&self.state, action);
        let changed = next != self.state;
        debug!(action = kind, changed, len = next.len(), "dispatched to-do action");
        if changed {
            self.state = next;
            for observer in &mut self.observers {
                observer.on_change(&self.state);
            }
        }
        changed
    }

    /// Appends a new pending item holding `raw` verbatim.
    ///
    /// Returns the new identifier, or `None` when `raw` is blank.
    pub fn add(&mut self, raw: &str) -> Option<TodoId> {
        let text = TodoText::new(raw).ok()?;
        let id = self.ids.next_id();
        let created_at = self.clock.utc();
        self.dispatch(TodoAction::Add {
            id,
            text,
            created_at,
        })
        .then_some(id)
    }

    /// Deletes the item matching `id`.
    pub fn remove(&mut self, id: TodoId) -> bool {
        self.dispatch(TodoAction::Remove { id })
    }

    /// Flips the completion flag of the item matching `id`.
    pub fn toggle_one(&mut self, id: TodoId) -> bool {
        self.dispatch(TodoAction::ToggleOne { id })
    }

    /// Marks every item done, or every item pending when all are done.
    pub fn toggle_all(&mut self) -> bool {
        self.dispatch(TodoAction::ToggleAll)
    }

    /// Replaces the description of the item matching `id`.
    ///
    /// Blank replacement text is ignored.
    pub fn edit(&mut self, id: TodoId, raw: &str) -> bool {
        let Ok(text) = TodoText::new(raw) else {
            return false;
        };
        self.dispatch(TodoAction::Edit { id, text })
    }
}
