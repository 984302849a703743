//! Unit tests for the to-do module.
