//! Application layer coordinating state, events, and actions.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Operator Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                ↑                                       ↓
//!                                └─────────── Worker Responses ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transitions
//! - [`modes`]: Status message types
//! - [`runtime`]: Executes actions and feeds worker responses back
//! - [`selection`]: Resolves typed selectors to companies and properties
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod runtime;
pub mod selection;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{StatusKind, StatusMessage};
pub use runtime::dispatch;
pub use state::AppState;
