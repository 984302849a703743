//! Port contracts for the to-do list.
//!
//! Ports are the seams the store and row controllers depend on; concrete
//! implementations live in [`crate::todo::adapters`].

pub mod id_source;
pub mod observer;
pub mod prompt;

pub use id_source::IdSource;
pub use observer::StateObserver;
pub use prompt::EditPrompt;
#[cfg(test)]
pub use prompt::MockEditPrompt;
