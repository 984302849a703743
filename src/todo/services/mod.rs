//! Application services driving the to-do list.

mod form;
mod row;
mod store;

pub use form::InputForm;
pub use row::TodoRow;
pub use store::TodoStore;
