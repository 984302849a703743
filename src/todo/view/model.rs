//! View models for the list and its rows.

use serde::Serialize;

use crate::todo::domain::{Todo, TodoId, TodoList};

/// Toggle-all label shown while at least one item is pending.
pub const TOGGLE_ALL_DONE: &str = "Done All";

/// Toggle-all label shown once every item is done.
pub const TOGGLE_ALL_UNDONE: &str = "Not Done All";

/// Display state of one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    /// One-based display position.
    pub position: usize,
    /// Identifier of the underlying item.
    pub id: TodoId,
    /// Description as entered.
    pub text: String,
    /// Whether the description is struck through.
    pub done: bool,
    /// Checkbox marker reflecting `done`.
    pub marker: &'static str,
    /// Label of the toggle control.
    pub toggle_label: &'static str,
}

impl RowView {
    /// Builds the view of `todo` shown at zero-based `index`.
    #[must_use]
    pub fn new(index: usize, todo: &Todo) -> Self {
        let done = todo.is_done();
        Self {
            position: index + 1,
            id: todo.id(),
            text: todo.text().as_str().to_owned(),
            done,
            marker: if done { "[x]" } else { "[ ]" },
            toggle_label: if done { "undo" } else { "done" },
        }
    }
}

/// Display state of the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    /// Rows in list order.
    pub rows: Vec<RowView>,
    /// Number of pending items.
    pub remaining: usize,
    /// Label of the toggle-all control.
    pub toggle_all_label: &'static str,
}

impl From<&TodoList> for ListView {
    fn from(list: &TodoList) -> Self {
        let rows = list
            .iter()
            .enumerate()
            .map(|(index, todo)| RowView::new(index, todo))
            .collect();
        let toggle_all_label = if list.all_done() {
            TOGGLE_ALL_UNDONE
        } else {
            TOGGLE_ALL_DONE
        };
        Self {
            rows,
            remaining: list.remaining(),
            toggle_all_label,
        }
    }
}
