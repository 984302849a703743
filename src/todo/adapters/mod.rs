//! Adapter implementations for to-do ports.

pub mod ids;
pub mod terminal;

pub use ids::{SequentialIdSource, UuidIdSource};
pub use terminal::LinePrompt;
