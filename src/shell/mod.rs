//! Interactive terminal front end.
//!
//! The shell turns input lines into [`Command`]s and runs them against a
//! [`TodoStore`](crate::todo::services::TodoStore) through the input form
//! and row triggers, re-rendering the list whenever the store publishes a
//! change.

mod command;
mod session;

pub use command::{Command, CommandError, HELP_TEXT};
pub use session::{Session, SessionError};
