//! New-task input form.

use mockable::Clock;

use crate::todo::{
    domain::{TodoId, is_blank},
    ports::IdSource,
    services::TodoStore,
};

/// Transient draft text awaiting submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputForm {
    draft: String,
}

impl InputForm {
    /// Creates a form with an empty draft.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            draft: String::new(),
        }
    }

    /// Replaces the draft text.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Returns the draft text.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Submits the draft to `store`.
    ///
    /// A blank draft is ignored and kept as is. Otherwise the untrimmed draft
    /// is added and the form cleared.
    pub fn submit<I, C>(&mut self, store: &mut TodoStore<I, C>) -> Option<TodoId>
    where
        I: IdSource,
        C: Clock,
    {
        if is_blank(&self.draft) {
            return None;
        }
        let id = store.add(&self.draft);
        self.draft.clear();
        id
    }
}
