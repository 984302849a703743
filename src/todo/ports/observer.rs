//! State change subscription port.

use crate::todo::domain::TodoList;

/// Receives the new list after every state-changing dispatch.
pub trait StateObserver {
    /// Called with the state that has just been committed.
    fn on_change(&mut self, list: &TodoList);
}

impl<F> StateObserver for F
where
    F: FnMut(&TodoList),
{
    fn on_change(&mut self, list: &TodoList) {
        self(list);
    }
}
