//! To-do list management.
//!
//! The module follows the same hexagonal split as the rest of the crate:
//!
//! - Domain types and the pure reducer in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Stateful services in [`services`]
//! - Rendering in [`view`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod view;

#[cfg(test)]
mod tests;
