//! Synchronous edit prompt port.

/// Modal text input used by the row edit trigger.
///
/// The call blocks until the actor answers. `None` means the actor
/// cancelled; any returned string is unvalidated.
#[cfg_attr(test, mockall::automock)]
pub trait EditPrompt {
    /// Asks for replacement text, offering `current` as the starting value.
    fn prompt(&mut self, message: &str, current: &str) -> Option<String>;
}
