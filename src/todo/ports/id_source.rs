//! Identifier generation port.

use crate::todo::domain::TodoId;

/// Source of unique to-do identifiers.
///
/// Implementations must never return the same identifier twice for the
/// lifetime of a store.
pub trait IdSource {
    /// Returns a fresh identifier.
    fn next_id(&self) -> TodoId;
}
