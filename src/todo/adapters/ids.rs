//! Identifier sources.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::todo::{domain::TodoId, ports::IdSource};

/// Random v4 UUID identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&self) -> TodoId {
        TodoId::random()
    }
}

/// Deterministic identifiers built from a monotonically increasing counter.
///
/// The first identifier is `00000000-0000-0000-0000-000000000001`.
#[derive(Debug, Default)]
pub struct SequentialIdSource {
    counter: AtomicU64,
}

impl SequentialIdSource {
    /// Creates a source starting at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Returns the identifier the `n`th call to `next_id` yields.
    #[must_use]
    pub fn nth(n: u64) -> TodoId {
        TodoId::from_uuid(Uuid::from_u128(u128::from(n)))
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&self) -> TodoId {
        let next = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Self::nth(next)
    }
}
