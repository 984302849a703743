//! Task row rendering.
//!
//! [`ListView`] and [`RowView`] are plain view models derived from a
//! [`TodoList`](crate::todo::domain::TodoList); [`TextRenderer`] turns them
//! into terminal text through a `minijinja` template.

mod model;
mod render;

pub use model::{ListView, RowView, TOGGLE_ALL_DONE, TOGGLE_ALL_UNDONE};
pub use render::{DEFAULT_LIST_TEMPLATE, RenderError, TextRenderer, strike};
