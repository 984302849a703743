//! Ordered to-do collection.
//!
//! Every operation returns a new [`TodoList`]; absent identifiers and
//! duplicate inserts leave the list unchanged instead of failing.

use super::{Todo, TodoId, TodoText};
use serde::{Deserialize, Serialize};

/// Ordered sequence of to-do items in insertion order.
///
/// Deserialized lists go through [`FromIterator`], so repeated identifiers
/// keep only their first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Todo>", into = "Vec<Todo>")]
pub struct TodoList {
    items: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over items in insertion order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.items.iter()
    }

    /// Returns the items as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Todo] {
        &self.items
    }

    /// Looks up an item by identifier.
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.items.iter().find(|todo| todo.id() == id)
    }

    /// Returns the item at a zero-based position.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Todo> {
        self.items.get(index)
    }

    /// Returns `true` when the identifier is present.
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Returns `true` when every item is done.
    ///
    /// An empty list is vacuously all done.
    #[must_use]
    pub fn all_done(&self) -> bool {
        self.items.iter().all(Todo::is_done)
    }

    /// Returns the number of items not yet done.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|todo| !todo.is_done()).count()
    }

    /// Appends an item.
    ///
    /// An item whose identifier is already present is dropped.
    #[must_use]
    pub fn add(&self, todo: Todo) -> Self {
        if self.contains(todo.id()) {
            return self.clone();
        }
        let mut items = self.items.clone();
        items.push(todo);
        Self { items }
    }

    /// Removes the item matching `id`.
    #[must_use]
    pub fn remove(&self, id: TodoId) -> Self {
        let items = self
            .items
            .iter()
            .filter(|todo| todo.id() != id)
            .cloned()
            .collect();
        Self { items }
    }

    /// Flips the completion flag of the item matching `id`.
    #[must_use]
    pub fn toggle_one(&self, id: TodoId) -> Self {
        self.map_matching(id, Todo::toggled)
    }

    /// Marks every item done, or every item pending when all are done.
    #[must_use]
    pub fn toggle_all(&self) -> Self {
        let done = !self.all_done();
        let items = self.items.iter().map(|todo| todo.with_done(done)).collect();
        Self { items }
    }

    /// Replaces the description of the item matching `id`.
    #[must_use]
    pub fn edit(&self, id: TodoId, text: &TodoText) -> Self {
        self.map_matching(id, |todo| todo.with_text(text.clone()))
    }

    fn map_matching(&self, id: TodoId, update: impl Fn(&Todo) -> Todo) -> Self {
        let items = self
            .items
            .iter()
            .map(|todo| {
                if todo.id() == id {
                    update(todo)
                } else {
                    todo.clone()
                }
            })
            .collect();
        Self { items }
    }
}

impl FromIterator<Todo> for TodoList {
    fn from_iter<T: IntoIterator<Item = Todo>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |list, todo| list.add(todo))
    }
}

impl From<Vec<Todo>> for TodoList {
    fn from(items: Vec<Todo>) -> Self {
        items.into_iter().collect()
    }
}

impl From<TodoList> for Vec<Todo> {
    fn from(list: TodoList) -> Self {
        list.items
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
