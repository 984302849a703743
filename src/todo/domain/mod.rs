//! Domain model for the to-do list.
//!
//! The domain holds the item value type, the ordered collection and the pure
//! reducer that maps `(state, action)` to the next state. It has no knowledge
//! of identifiers' origin, clocks beyond the [`mockable::Clock`] seam, or any
//! rendering concern.

mod action;
mod error;
mod ids;
mod list;
mod text;
mod todo;

pub use action::{TodoAction, reduce};
pub use error::TodoDomainError;
pub use ids::TodoId;
pub use list::TodoList;
pub use text::{TodoText, is_blank};
pub use todo::Todo;
