//! Shared world state for to-do list BDD scenarios.

use mockable::DefaultClock;
use rstest::fixture;
use ticklist::todo::{
    adapters::SequentialIdSource,
    domain::{Todo, TodoId},
    ports::EditPrompt,
    services::{InputForm, TodoRow, TodoStore},
    view::ListView,
};

/// Store type used by the BDD world.
pub type TestTodoStore = TodoStore<SequentialIdSource, DefaultClock>;

/// Edit prompt that replays a fixed answer.
pub struct ScriptedPrompt(pub Option<String>);

impl EditPrompt for ScriptedPrompt {
    fn prompt(&mut self, _message: &str, _current: &str) -> Option<String> {
        self.0.take()
    }
}

/// Scenario world for to-do list behaviour tests.
pub struct TodoWorld {
    pub store: TestTodoStore,
    pub form: InputForm,
}

impl TodoWorld {
    /// Creates a world with an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: TodoStore::new(SequentialIdSource::new(), DefaultClock),
            form: InputForm::new(),
        }
    }

    /// Returns the trigger set for the task at a one-based position.
    pub fn row(&self, position: usize) -> Result<TodoRow, eyre::Report> {
        position
            .checked_sub(1)
            .and_then(|index| self.store.state().at(index))
            .map(|todo| TodoRow::new(todo.id()))
            .ok_or_else(|| eyre::eyre!("no task at position {position}"))
    }

    /// Returns the task at a one-based position.
    pub fn task(&self, position: usize) -> Result<&Todo, eyre::Report> {
        position
            .checked_sub(1)
            .and_then(|index| self.store.state().at(index))
            .ok_or_else(|| eyre::eyre!("no task at position {position}"))
    }

    /// Returns the current list view.
    #[must_use]
    pub fn view(&self) -> ListView {
        ListView::from(self.store.state())
    }

    /// Identifier guaranteed not to be in the list.
    #[must_use]
    pub fn unknown_id() -> TodoId {
        SequentialIdSource::nth(u64::MAX)
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}
