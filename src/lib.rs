//! Ticklist: a terminal to-do list.
//!
//! The list state is an ordered collection of items updated only through a
//! pure reducer. Everything around it is thin: an input form and per-row
//! triggers that turn user gestures into actions, and a renderer subscribed
//! to state changes.
//!
//! # Architecture
//!
//! Ticklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure list logic with no infrastructure dependencies
//! - **Ports**: Trait seams for identifier generation, prompting and
//!   state observation
//! - **Adapters**: Concrete implementations of ports (UUIDs, terminal I/O)
//!
//! # Modules
//!
//! - [`todo`]: Domain model, ports, adapters, services and views
//! - [`shell`]: Line-command terminal front end
//! - [`config`]: JSON configuration loading
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod shell;
pub mod telemetry;
pub mod todo;
