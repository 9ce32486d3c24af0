//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler only mutates [`AppState`](crate::app::AppState); anything
//! that touches the session store or the network is returned as an [`Action`]
//! and carried out by [`dispatch`](crate::app::runtime::dispatch).
//!
//! # Example
//!
//! ```rust
//! use reactor_explorer::app::Action;
//! use reactor_explorer::worker::WorkerMessage;
//!
//! let actions = vec![
//!     Action::PersistCredentials,
//!     Action::PostToWorker(WorkerMessage::load_companies()),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Writes the current credentials to the session store.
    ///
    /// Emitted after a complete credential submission, before the company
    /// listing is requested.
    PersistCredentials,

    /// Forgets the credentials and empties the session store.
    ClearSession,

    /// Hands a request to the worker; its response comes back as
    /// `Event::WorkerResponse`.
    PostToWorker(WorkerMessage),
}
